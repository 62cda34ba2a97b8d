use crate::error::{AppError, Result};
use uuid::Uuid;

use super::notification_dto::{CreateNotificationRequest, ListNotificationsQuery, MarkReadRequest};
use super::notification_models::Notification;
use super::notification_repository::NotificationRepository;

/// Business rules over the notification repository: selection-mode
/// resolution, empty-selection handling and not-found mapping.
#[derive(Clone)]
pub struct NotificationService {
    repo: NotificationRepository,
}

impl NotificationService {
    pub fn new(repo: NotificationRepository) -> Self {
        Self { repo }
    }

    pub async fn create(&self, payload: CreateNotificationRequest) -> Result<Notification> {
        self.repo
            .create(
                payload.user_id,
                &payload.title,
                &payload.content,
                payload.metadata,
            )
            .await
    }

    pub async fn list(
        &self,
        query: &ListNotificationsQuery,
    ) -> Result<(i64, Vec<Notification>)> {
        self.repo
            .find_page(
                query.user_id,
                query.search_text.as_deref(),
                query.page_size() as i64,
                query.offset(),
            )
            .await
    }

    pub async fn mark_read(&self, payload: MarkReadRequest) -> Result<u64> {
        let selection = payload.selection().ok_or_else(|| {
            AppError::Validation(
                "Either notification_ids or mark_all flag must be provided".into(),
            )
        })?;

        let affected = self
            .repo
            .set_read_state(payload.user_id, selection, payload.read)
            .await?;

        if affected == 0 {
            return Err(AppError::NotFound("No matching notifications found".into()));
        }

        Ok(affected)
    }

    /// Not-found covers wrong id, wrong owner and already-deleted alike, so a
    /// caller cannot probe for another user's notifications.
    pub async fn delete(&self, id: Uuid, user_id: i64) -> Result<()> {
        let affected = self.repo.soft_delete(id, user_id).await?;

        if affected == 0 {
            return Err(AppError::NotFound("Notification not found".into()));
        }

        Ok(())
    }

    pub async fn unread_count(&self, user_id: i64) -> Result<i64> {
        self.repo.count_unread(user_id).await
    }
}
