use std::sync::atomic::{AtomicI64, Ordering};

use notification_service::db::{create_pool, run_migrations, DbPool};
use notification_service::notification::{
    CreateNotificationRequest, ListNotificationsQuery, Notification, NotificationRepository,
    NotificationService,
};

/// Connects to the database named by DATABASE_URL and runs migrations.
/// The suite is marked ignored; run it with `cargo test -- --ignored` against
/// a disposable Postgres instance.
pub async fn setup() -> (DbPool, NotificationService) {
    dotenv::dotenv().ok();
    let url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for integration tests");
    let pool = create_pool(&url).await.expect("failed to connect");
    run_migrations(&pool).await.expect("failed to migrate");
    let service = NotificationService::new(NotificationRepository::new(pool.clone()));
    (pool, service)
}

static NEXT_USER: AtomicI64 = AtomicI64::new(0);

/// Each test works under its own user id so tests never see each other's rows
/// in a shared database.
pub fn unique_user() -> i64 {
    let nanos = chrono::Utc::now()
        .timestamp_nanos_opt()
        .expect("timestamp in range");
    nanos + NEXT_USER.fetch_add(1, Ordering::Relaxed)
}

pub async fn create_for(
    service: &NotificationService,
    user_id: i64,
    title: &str,
    content: &str,
) -> Notification {
    service
        .create(CreateNotificationRequest {
            user_id,
            title: title.to_string(),
            content: content.to_string(),
            metadata: None,
        })
        .await
        .expect("create failed")
}

pub fn list_query(user_id: i64, page: u32, page_size: u32) -> ListNotificationsQuery {
    ListNotificationsQuery {
        user_id: Some(user_id),
        search_text: None,
        page: Some(page),
        page_size: Some(page_size),
    }
}

pub fn search_query(user_id: i64, search_text: &str) -> ListNotificationsQuery {
    ListNotificationsQuery {
        user_id: Some(user_id),
        search_text: Some(search_text.to_string()),
        page: None,
        page_size: None,
    }
}
