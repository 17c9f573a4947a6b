//! 产品 HTTP 处理器

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, put},
    Router,
};

use super::{
    model::{CreateProduct, Product, ProductId, UpdateProduct},
    service::ProductService,
};
use crate::core::{error::CoreError, response::MessageResponse};

#[derive(Clone)]
pub struct AppState {
    pub product_service: ProductService,
}

/// 产品路由表
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/:id",
            put(update_product).delete(delete_product),
        )
        .with_state(state)
}

/// 获取所有产品（按插入顺序，空集合返回空数组）
pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.product_service.list_products())
}

/// 创建新产品
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProduct>,
) -> Result<(StatusCode, Json<Product>), CoreError> {
    let product = state.product_service.create_product(payload)?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// 更新产品（部分或全部字段）
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    Json(payload): Json<UpdateProduct>,
) -> Result<Json<Product>, CoreError> {
    let product = state.product_service.update_product(id, payload)?;
    Ok(Json(product))
}

/// 删除产品
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<MessageResponse>, CoreError> {
    state.product_service.delete_product(id)?;
    Ok(Json(MessageResponse::new("Product deleted")))
}
