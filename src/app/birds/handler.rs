//! 鸟类商品 HTTP 处理器

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use tracing::info;
use validator::Validate;

use super::{model::Bird, repository::BirdRepository};

#[derive(Clone)]
pub struct AppState<R> {
    pub repository: R,
}

impl<R: BirdRepository> AppState<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

/// 获取全部商品
pub async fn list_birds<R: BirdRepository>(
    State(state): State<AppState<R>>,
) -> crate::Result<Json<Vec<Bird>>> {
    let birds = state.repository.find_all().await?;
    Ok(Json(birds))
}

/// 创建商品
///
/// 客户端提供的 `id` 会被丢弃，避免覆盖已有记录。
pub async fn create_bird<R: BirdRepository>(
    State(state): State<AppState<R>>,
    payload: Result<Json<Bird>, JsonRejection>,
) -> crate::Result<(StatusCode, Json<Bird>)> {
    let Json(bird) = payload?;
    bird.validate()?;

    let bird = state.repository.save(bird.without_id()).await?;
    info!("Created bird: {} ({:?})", bird.name, bird.id);

    Ok((StatusCode::CREATED, Json(bird)))
}

/// 健康检查
pub async fn health_check<R: BirdRepository>(
    State(state): State<AppState<R>>,
) -> crate::Result<Json<serde_json::Value>> {
    // 测试数据库连接
    let birds = state.repository.find_all().await?;

    Ok(Json(serde_json::json!({
        "status": "healthy",
        "database": "connected",
        "birds": birds.len(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    })))
}
