//! 启动时写入示例数据

use tracing::info;

use super::{model::Bird, repository::BirdRepository};
use crate::infrastructure::config::SeedPolicy;

/// 示例商品：名称、描述、价格、图片路径
pub const SAMPLE_BIRDS: [(&str, &str, f64, &str); 6] = [
    ("Blue Jay", "Beautiful Blue Jay with vibrant colors", 1999.99, "./images/blue-jay.jpg"),
    ("Owl", "Majestic owl with keen eyesight", 1499.99, "./images/owl.jpg"),
    ("Parrot", "Colorful talking parrot", 1299.99, "./images/parrot.jpg"),
    ("Parakeet", "Colorful and playful Budgerigar", 49.99, "./images/Parakeet.jpg"),
    ("Cockatiel", "Sweet and gentle Cockatiel", 79.99, "./images/Cockatiel.jpg"),
    ("Canary", "Melodious Yellow Canary", 39.99, "./images/canary.jpg"),
];

pub fn sample_birds() -> Vec<Bird> {
    SAMPLE_BIRDS
        .iter()
        .map(|&(name, description, price, image_path)| {
            Bird::new(name, description, price, image_path)
        })
        .collect()
}

/// 按策略写入示例数据，返回写入的条数
pub async fn seed_birds<R: BirdRepository>(
    repository: &R,
    policy: SeedPolicy,
) -> Result<usize, sqlx::Error> {
    match policy {
        SeedPolicy::Never => {
            info!("Seeding disabled, skipping seed");
            return Ok(0);
        }
        SeedPolicy::IfEmpty => {
            // 检查是否已有数据
            if !repository.find_all().await?.is_empty() {
                info!("Database already contains data, skipping seed");
                return Ok(0);
            }
        }
        SeedPolicy::Always => {}
    }

    info!("Seeding database with example data...");

    let mut inserted = 0;
    for bird in sample_birds() {
        repository.save(bird).await?;
        inserted += 1;
    }

    info!("Database seeded with {} birds", inserted);
    Ok(inserted)
}
