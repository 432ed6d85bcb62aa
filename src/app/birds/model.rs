//! 鸟类商品数据模型

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 商品记录（一只待售的鸟）
///
/// JSON 形态为 `{ "id", "name", "description", "price", "imagePath" }`，
/// `id` 由存储层在插入时分配，创建时可以省略或为 `null`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Bird {
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    #[validate(range(min = 0.0, message = "price must not be negative"))]
    pub price: f64,
    pub image_path: String,
}

impl Bird {
    /// 构造一条尚未持久化的记录
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        image_path: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: description.into(),
            price,
            image_path: image_path.into(),
        }
    }

    /// 丢弃客户端提供的 id，交由存储层分配
    pub fn without_id(mut self) -> Self {
        self.id = None;
        self
    }
}
