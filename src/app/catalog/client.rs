//! 目录客户端
//!
//! 客户端持有产品列表的本地有序副本，只有在远端操作确认成功后
//! 才修改本地状态，失败时本地序列保持不变。

use reqwest::StatusCode;
use thiserror::Error;

use crate::app::product::model::{CreateProduct, Product, ProductId, UpdateProduct};

/// 客户端侧错误
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Product not found")]
    NotFound,
    #[error("Failed to reach product service: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        CatalogError::Transport(err.to_string())
    }
}

/// 产品服务访问接口
///
/// 远端实现为 [`HttpProductApi`]，测试中可替换为内存实现。
#[allow(async_fn_in_trait)]
pub trait ProductApi {
    async fn list(&self) -> Result<Vec<Product>, CatalogError>;
    async fn create(&self, candidate: &CreateProduct) -> Result<Product, CatalogError>;
    async fn update(
        &self,
        id: ProductId,
        changes: &UpdateProduct,
    ) -> Result<Product, CatalogError>;
    async fn delete(&self, id: ProductId) -> Result<(), CatalogError>;
}

/// 基于 reqwest 的远端实现
#[derive(Clone)]
pub struct HttpProductApi {
    base_url: String,
    http: reqwest::Client,
}

impl HttpProductApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    fn products_url(&self) -> String {
        format!("{}/products", self.base_url)
    }

    fn product_url(&self, id: ProductId) -> String {
        format!("{}/products/{}", self.base_url, id)
    }
}

fn check_status(status: StatusCode) -> Result<(), CatalogError> {
    if status == StatusCode::NOT_FOUND {
        return Err(CatalogError::NotFound);
    }
    if !status.is_success() {
        return Err(CatalogError::Transport(format!("HTTP {status}")));
    }
    Ok(())
}

impl ProductApi for HttpProductApi {
    async fn list(&self) -> Result<Vec<Product>, CatalogError> {
        let resp = self.http.get(self.products_url()).send().await?;
        check_status(resp.status())?;
        Ok(resp.json().await?)
    }

    async fn create(&self, candidate: &CreateProduct) -> Result<Product, CatalogError> {
        let resp = self
            .http
            .post(self.products_url())
            .json(candidate)
            .send()
            .await?;
        check_status(resp.status())?;
        Ok(resp.json().await?)
    }

    async fn update(
        &self,
        id: ProductId,
        changes: &UpdateProduct,
    ) -> Result<Product, CatalogError> {
        let resp = self
            .http
            .put(self.product_url(id))
            .json(changes)
            .send()
            .await?;
        check_status(resp.status())?;
        Ok(resp.json().await?)
    }

    async fn delete(&self, id: ProductId) -> Result<(), CatalogError> {
        let resp = self.http.delete(self.product_url(id)).send().await?;
        check_status(resp.status())?;
        Ok(())
    }
}

/// 目录客户端
pub struct CatalogClient<A: ProductApi> {
    api: A,
    products: Vec<Product>,
}

impl<A: ProductApi> CatalogClient<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            products: Vec::new(),
        }
    }

    /// 本地产品序列（新增的产品在最前）
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// 用服务端当前列表替换本地序列，未保存的本地状态会被丢弃
    pub async fn refresh(&mut self) -> Result<(), CatalogError> {
        self.products = self.api.list().await?;
        Ok(())
    }

    /// 创建成功后把返回的记录插到本地序列最前面
    pub async fn add(&mut self, candidate: CreateProduct) -> Result<Product, CatalogError> {
        let created = self.api.create(&candidate).await?;
        self.products.insert(0, created.clone());
        Ok(created)
    }

    /// 删除成功后按 id 移除本地记录
    pub async fn remove(&mut self, id: ProductId) -> Result<(), CatalogError> {
        self.api.delete(id).await?;
        self.products.retain(|p| p.id != id);
        Ok(())
    }

    /// 更新成功后用返回的记录替换本地匹配项
    pub async fn apply_edit(
        &mut self,
        id: ProductId,
        changes: UpdateProduct,
    ) -> Result<Product, CatalogError> {
        let updated = self.api.update(id, &changes).await?;
        if let Some(slot) = self.products.iter_mut().find(|p| p.id == id) {
            *slot = updated.clone();
        }
        Ok(updated)
    }
}
