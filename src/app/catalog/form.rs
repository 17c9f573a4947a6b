//! 产品表单校验
//!
//! 新增和编辑共用同一套规则；提交在所有规则满足之前被阻塞。

use std::collections::HashMap;

use validator::{Validate, ValidationError, ValidationErrors};

use crate::app::product::model::{CreateProduct, Product, UpdateProduct};

/// 产品表单
///
/// 四个字段都按文本收集，price 在校验通过之后才转换为数字。
#[derive(Debug, Clone, Default, Validate)]
pub struct ProductForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[validate(
        length(min = 1, message = "Image URL is required"),
        url(message = "Enter a valid URL")
    )]
    pub image: String,
    #[validate(
        length(min = 1, message = "Price is required"),
        custom(function = parse_price)
    )]
    pub price: String,
}

// price 必须能解析为非负的有限数
fn parse_price(price: &str) -> Result<(), ValidationError> {
    match price.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(()),
        _ => {
            let mut err = ValidationError::new("price");
            err.message = Some("Enter a valid price".into());
            Err(err)
        }
    }
}

impl ProductForm {
    /// 编辑流程用当前记录预填表单
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone().unwrap_or_default(),
            image: product.image.clone().unwrap_or_default(),
            price: product.price.to_string(),
        }
    }

    /// 全量校验，按字段返回首条错误信息
    pub fn errors(&self) -> HashMap<String, String> {
        field_messages(self.validate())
    }

    /// 单字段增量校验，字段变更时调用
    pub fn field_error(&self, field: &str) -> Option<String> {
        self.errors().remove(field)
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// 校验通过时生成创建候选（price 已转换为数字），否则返回字段错误
    pub fn submit(&self) -> Result<CreateProduct, HashMap<String, String>> {
        let errors = self.errors();
        if !errors.is_empty() {
            return Err(errors);
        }
        // 已通过 parse_price 校验
        let price = self.price.trim().parse::<f64>().unwrap_or_default();
        Ok(CreateProduct {
            name: Some(self.name.clone()),
            description: Some(self.description.clone()),
            image: Some(self.image.clone()),
            price: Some(price),
        })
    }

    /// 编辑流程的提交候选
    pub fn submit_update(&self) -> Result<UpdateProduct, HashMap<String, String>> {
        let candidate = self.submit()?;
        Ok(UpdateProduct {
            name: candidate.name,
            description: candidate.description,
            image: candidate.image,
            price: candidate.price,
        })
    }
}

fn field_messages(result: Result<(), ValidationErrors>) -> HashMap<String, String> {
    let Err(errors) = result else {
        return HashMap::new();
    };
    errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, errs)| {
            errs.first().map(|e| {
                let message = e
                    .message
                    .clone()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                (field.to_string(), message)
            })
        })
        .collect()
}
