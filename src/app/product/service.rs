//! 产品业务服务与内存存储

use std::sync::{Arc, Mutex};

use super::model::{CreateProduct, Product, ProductId, UpdateProduct};
use crate::core::error::CoreError;

/// 内存产品存储
///
/// 以插入顺序保存产品，必填字段在写入时校验。
#[derive(Clone, Default)]
pub struct ProductStore {
    products: Arc<Mutex<Vec<Product>>>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    // 写入时的必填字段校验：name 非空，price 为非负的有限数（零价格允许）
    fn validate(product: &Product) -> Result<(), CoreError> {
        if product.name.trim().is_empty() {
            return Err(CoreError::Validation("name is required".to_string()));
        }
        if !product.price.is_finite() || product.price < 0.0 {
            return Err(CoreError::Validation(
                "price must be a non-negative number".to_string(),
            ));
        }
        Ok(())
    }

    pub fn insert(&self, product: Product) -> Result<Product, CoreError> {
        Self::validate(&product)?;
        let mut products = self.products.lock().unwrap();
        products.push(product.clone());
        Ok(product)
    }

    /// 按插入顺序返回全部产品
    pub fn list(&self) -> Vec<Product> {
        self.products.lock().unwrap().clone()
    }

    pub fn find(&self, id: ProductId) -> Option<Product> {
        self.products
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }

    /// 合并提供的字段并重新校验；id 不存在时返回 `Ok(None)`
    pub fn update(
        &self,
        id: ProductId,
        changes: &UpdateProduct,
    ) -> Result<Option<Product>, CoreError> {
        let mut products = self.products.lock().unwrap();
        let Some(slot) = products.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        // 先在副本上合并并校验，失败时不动存储
        let mut merged = slot.clone();
        if let Some(name) = &changes.name {
            merged.name = name.clone();
        }
        if let Some(description) = &changes.description {
            merged.description = Some(description.clone());
        }
        if let Some(image) = &changes.image {
            merged.image = Some(image.clone());
        }
        if let Some(price) = changes.price {
            merged.price = price;
        }
        Self::validate(&merged)?;

        *slot = merged.clone();
        Ok(Some(merged))
    }

    pub fn remove(&self, id: ProductId) -> Option<Product> {
        let mut products = self.products.lock().unwrap();
        let pos = products.iter().position(|p| p.id == id)?;
        Some(products.remove(pos))
    }
}

/// 产品业务服务
#[derive(Clone)]
pub struct ProductService {
    store: ProductStore,
}

impl ProductService {
    pub fn new(store: ProductStore) -> Self {
        Self { store }
    }

    pub fn list_products(&self) -> Vec<Product> {
        self.store.list()
    }

    pub fn create_product(&self, candidate: CreateProduct) -> Result<Product, CoreError> {
        let price = candidate
            .price
            .ok_or_else(|| CoreError::Validation("price is required".to_string()))?;
        let product = Product {
            id: ProductId::new(),
            name: candidate.name.unwrap_or_default(),
            description: candidate.description,
            image: candidate.image,
            price,
        };
        self.store.insert(product)
    }

    pub fn update_product(
        &self,
        id: ProductId,
        changes: UpdateProduct,
    ) -> Result<Product, CoreError> {
        self.store
            .update(id, &changes)?
            .ok_or_else(|| CoreError::NotFound("Product not found".to_string()))
    }

    pub fn delete_product(&self, id: ProductId) -> Result<(), CoreError> {
        self.store
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| CoreError::NotFound("Product not found".to_string()))
    }
}
