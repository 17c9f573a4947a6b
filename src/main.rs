//! 产品目录服务入口

use std::env;

use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use product_catalog::app::product::{
    handler::{router, AppState},
    model::CreateProduct,
    service::{ProductService, ProductStore},
};
use product_catalog::infrastructure::logger::Logger;

#[tokio::main]
async fn main() {
    Logger::init("info");

    info!("启动产品目录服务器...");

    let service = ProductService::new(ProductStore::new());
    init_sample_data(&service);

    let app = router(AppState {
        product_service: service,
    })
    .layer(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    )
    .layer(TraceLayer::new_for_http());

    let port = env::var("PORT").unwrap_or_else(|_| "5001".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await.expect("无法绑定监听地址");

    info!("🚀 产品目录服务器运行在 http://{addr}");
    info!("📖 API 端点:");
    info!("   GET    /products      - 获取所有产品");
    info!("   POST   /products      - 创建新产品");
    info!("   PUT    /products/:id  - 更新产品");
    info!("   DELETE /products/:id  - 删除产品");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("服务器启动失败");
}

/// 初始化示例数据
fn init_sample_data(service: &ProductService) {
    let samples = vec![
        sample(
            "Wireless Headphones",
            "Noise cancelling over-ear headphones",
            "https://res.cloudinary.com/da3w329cx/image/upload/v1683056487/samples/landscapes/nature-mountains.jpg",
            120.0,
        ),
        sample(
            "Smart Watch",
            "Smart wearable with health tracking",
            "https://res.cloudinary.com/da3w329cx/image/upload/v1683056500/cld-sample-5.jpg",
            80.0,
        ),
        sample(
            "Laptop",
            "14-inch Full HD display, 256GB SSD",
            "https://images.unsplash.com/photo-1603791440384-56cd371ee9a7",
            600.0,
        ),
        sample(
            "Bluetooth Speaker",
            "Portable speaker with deep bass and 12-hour playtime",
            "https://res.cloudinary.com/da3w329cx/image/upload/v1683056499/cld-sample-3.jpg",
            45.0,
        ),
    ];

    let mut count = 0;
    for candidate in samples {
        if service.create_product(candidate).is_ok() {
            count += 1;
        }
    }
    info!("✅ 已初始化 {count} 个示例产品");
}

fn sample(name: &str, description: &str, image: &str, price: f64) -> CreateProduct {
    CreateProduct {
        name: Some(name.to_string()),
        description: Some(description.to_string()),
        image: Some(image.to_string()),
        price: Some(price),
    }
}

/// 等待 ctrl-c 后优雅停机
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("收到停机信号，正在关闭服务器...");
    }
}
