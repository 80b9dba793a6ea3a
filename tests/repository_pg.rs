//! PostgreSQL registry tests.
//!
//! Run with `DATABASE_URL` pointing at a disposable server:
//! `cargo test --test repository_pg -- --ignored`

use qr_shortlink::application::services::ShortLinkCreator;
use qr_shortlink::domain::repositories::LinkRegistry;
use qr_shortlink::error::AppError;
use qr_shortlink::infrastructure::persistence::PgLinkRegistry;
use qr_shortlink::utils::code_generator::RandomCodeGenerator;
use sqlx::PgPool;
use std::sync::Arc;

fn registry(pool: PgPool) -> PgLinkRegistry {
    PgLinkRegistry::new(Arc::new(pool))
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_insert_and_find(pool: PgPool) {
    let registry = registry(pool);

    let link = registry.insert("aB3dE9", "https://example.com").await.unwrap();
    assert_eq!(link.short_code, "aB3dE9");
    assert_eq!(link.click_count, 0);

    let by_code = registry.find_by_code("aB3dE9").await.unwrap().unwrap();
    assert_eq!(by_code.original_url, "https://example.com");

    let by_url = registry
        .find_by_url("https://example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_url.id, link.id);

    assert!(registry.find_by_code("ab3de9").await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_insert_duplicate_code_conflicts(pool: PgPool) {
    let registry = registry(pool);

    registry.insert("dup123", "https://a.example.com").await.unwrap();
    let result = registry.insert("dup123", "https://b.example.com").await;

    assert!(matches!(result, Err(AppError::Conflict { .. })));
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_find_by_url_returns_oldest(pool: PgPool) {
    let registry = registry(pool);

    let first = registry.insert("first1", "https://example.com").await.unwrap();
    registry.insert("second", "https://example.com").await.unwrap();

    let found = registry
        .find_by_url("https://example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.short_code, first.short_code);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_concurrent_increments(pool: PgPool) {
    let registry = Arc::new(registry(pool));
    registry.insert("click1", "https://example.com").await.unwrap();

    let tasks: Vec<_> = (0..50)
        .map(|_| {
            let registry = registry.clone();
            tokio::spawn(async move { registry.increment_clicks("click1").await })
        })
        .collect();

    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let link = registry.find_by_code("click1").await.unwrap().unwrap();
    assert_eq!(link.click_count, 50);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_list_recent_and_count(pool: PgPool) {
    let registry = registry(pool);

    for i in 0..3 {
        registry
            .insert(&format!("list0{i}"), &format!("https://example.com/{i}"))
            .await
            .unwrap();
    }

    let recent = registry.list_recent(2).await.unwrap();
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].short_code, "list02");

    assert_eq!(registry.count().await.unwrap(), 3);
    assert!(registry.ping().await.is_ok());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_long_multibyte_url_is_indexed(pool: PgPool) {
    let registry: Arc<dyn LinkRegistry> = Arc::new(registry(pool));
    let creator = ShortLinkCreator::new(
        registry.clone(),
        Arc::new(RandomCodeGenerator::default()),
        "https://links.example.com",
    );

    // 2000 three-byte characters: within the character limit, ~6 KB on disk.
    let url = format!("https://example.com/{}", "漢".repeat(2000));

    let created = creator.create(&url).await.unwrap();
    assert!(!created.existing);

    let again = creator.create(&url).await.unwrap();
    assert!(again.existing);
    assert_eq!(again.short_code, created.short_code);
}
