//! # 鸟类商品目录服务
//!
//! 通过 HTTP 暴露商品列表（待售的鸟），数据存放在关系型数据库中，
//! 启动时写入一组示例数据。
//!
//! - `app`：商品模型、存储接口、HTTP 处理器与示例数据
//! - `core`：错误处理、中间件、路由组装
//! - `infrastructure`：配置、数据库连接、日志

pub mod app;
pub mod core;
pub mod infrastructure;

pub use app::birds::{
    handler::AppState,
    model::Bird,
    repository::{BirdRepository, SqlBirdRepository},
};
pub use crate::core::{error::CoreError, router::build_router};

pub type Result<T> = std::result::Result<T, CoreError>;
