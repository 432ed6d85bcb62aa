//! 鸟类商品目录：模型、存储、HTTP 接口与启动数据

pub mod handler;
pub mod model;
pub mod repository;
pub mod seed;

use axum::{routing::get, Router};

use handler::AppState;
use repository::BirdRepository;

/// 商品路由
pub fn routes<R: BirdRepository>() -> Router<AppState<R>> {
    Router::new().route(
        "/api/birds",
        get(handler::list_birds::<R>).post(handler::create_bird::<R>),
    )
}
