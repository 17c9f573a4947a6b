//! # 产品目录
//!
//! 一个小型电商产品目录，包括：
//! - 基于 axum 的 REST 后端（内存存储，按插入顺序列出产品）
//! - 与服务端同步的目录客户端（远端确认成功后才修改本地列表）
//! - 声明式表单校验（字段级错误信息，未通过前阻塞提交）
//! - 模态框状态机（空闲 / 新增 / 查看 / 编辑）

pub mod app;
pub mod core;
pub mod infrastructure;
