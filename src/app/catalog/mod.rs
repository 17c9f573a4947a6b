//! 目录客户端（前端侧）

pub mod client;
pub mod form;
pub mod ui;
