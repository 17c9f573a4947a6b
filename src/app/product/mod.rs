//! 产品服务（后端）

pub mod handler;
pub mod model;
pub mod service;
