//! 鸟类商品存储层

use std::future::Future;

use sqlx::sqlite::SqlitePool;
use tracing::debug;

use super::model::Bird;

/// 存储接口：只提供列出全部和保存两种操作
///
/// 存储层错误原样向上传递，不做包装或重试。
pub trait BirdRepository: Clone + Send + Sync + 'static {
    /// 返回全部记录，顺序由存储层决定（通常为插入顺序）
    fn find_all(&self) -> impl Future<Output = Result<Vec<Bird>, sqlx::Error>> + Send;

    /// 保存一条记录并返回持久化后的结果
    ///
    /// `id` 为空时插入新行并由存储层分配 id；`id` 命中已有行时按 id 覆盖。
    fn save(&self, bird: Bird) -> impl Future<Output = Result<Bird, sqlx::Error>> + Send;
}

/// 基于 SQLx 的实现
#[derive(Clone)]
pub struct SqlBirdRepository {
    pool: SqlitePool,
}

impl SqlBirdRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl BirdRepository for SqlBirdRepository {
    async fn find_all(&self) -> Result<Vec<Bird>, sqlx::Error> {
        sqlx::query_as::<_, Bird>(
            "SELECT id, name, description, price, image_path FROM birds ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn save(&self, bird: Bird) -> Result<Bird, sqlx::Error> {
        let saved = sqlx::query_as::<_, Bird>(
            r#"
            INSERT INTO birds (id, name, description, price, image_path)
            VALUES (?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                description = excluded.description,
                price = excluded.price,
                image_path = excluded.image_path
            RETURNING id, name, description, price, image_path
            "#,
        )
        .bind(bird.id)
        .bind(&bird.name)
        .bind(&bird.description)
        .bind(bird.price)
        .bind(&bird.image_path)
        .fetch_one(&self.pool)
        .await?;

        debug!("Saved bird: {} ({:?})", saved.name, saved.id);
        Ok(saved)
    }
}
