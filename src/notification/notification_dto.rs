use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::notification_models::Notification;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateNotificationRequest {
    pub user_id: i64,
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[validate(length(min = 1))]
    pub content: String,
    #[schema(value_type = Option<Object>)]
    pub metadata: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ListNotificationsQuery {
    pub user_id: Option<i64>,
    pub search_text: Option<String>,
    #[validate(range(min = 1))]
    pub page: Option<u32>,
    #[validate(range(min = 1, max = 100))]
    pub page_size: Option<u32>,
}

impl ListNotificationsQuery {
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1)
    }

    pub fn page_size(&self) -> u32 {
        self.page_size.unwrap_or(10)
    }

    pub fn offset(&self) -> i64 {
        (self.page() as i64 - 1) * self.page_size() as i64
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct MarkReadRequest {
    pub user_id: i64,
    pub notification_ids: Option<Vec<Uuid>>,
    pub mark_all: Option<bool>,
    pub read: bool,
}

/// The set of notifications a bulk mark-read call acts on, before ownership
/// and active-state scoping are applied in SQL.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    All,
    Ids(Vec<Uuid>),
}

impl MarkReadRequest {
    /// `mark_all = true` wins over any accompanying ids; an absent or empty
    /// id list without `mark_all` is not a valid selection.
    pub fn selection(&self) -> Option<Selection> {
        if self.mark_all.unwrap_or(false) {
            return Some(Selection::All);
        }
        match &self.notification_ids {
            Some(ids) if !ids.is_empty() => Some(Selection::Ids(ids.clone())),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct DeleteNotificationRequest {
    pub user_id: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NotificationListResponse {
    pub count: i64,
    pub data: Vec<Notification>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MarkReadResponse {
    pub count: u64,
    pub detail: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UnreadCountResponse {
    pub unread_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_rejects_empty_title() {
        let payload = CreateNotificationRequest {
            user_id: 1,
            title: "".to_string(),
            content: "body".to_string(),
            metadata: None,
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_create_request_rejects_overlong_title() {
        let payload = CreateNotificationRequest {
            user_id: 1,
            title: "t".repeat(256),
            content: "body".to_string(),
            metadata: None,
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_create_request_accepts_valid_payload() {
        let payload = CreateNotificationRequest {
            user_id: 1,
            title: "Test Notification".to_string(),
            content: "This is a test notification.".to_string(),
            metadata: Some(serde_json::json!({"source": "test"})),
        };
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_list_query_defaults() {
        let query = ListNotificationsQuery {
            user_id: None,
            search_text: None,
            page: None,
            page_size: None,
        };
        assert!(query.validate().is_ok());
        assert_eq!(query.page(), 1);
        assert_eq!(query.page_size(), 10);
        assert_eq!(query.offset(), 0);
    }

    #[test]
    fn test_list_query_offset() {
        let query = ListNotificationsQuery {
            user_id: Some(1),
            search_text: None,
            page: Some(3),
            page_size: Some(25),
        };
        assert!(query.validate().is_ok());
        assert_eq!(query.offset(), 50);
    }

    #[test]
    fn test_list_query_offset_handles_large_pages() {
        let query = ListNotificationsQuery {
            user_id: None,
            search_text: None,
            page: Some(50_000_000),
            page_size: Some(100),
        };
        assert!(query.validate().is_ok());
        assert_eq!(query.offset(), 4_999_999_900);
    }

    #[test]
    fn test_list_query_rejects_out_of_range_pagination() {
        let zero_page = ListNotificationsQuery {
            user_id: None,
            search_text: None,
            page: Some(0),
            page_size: None,
        };
        assert!(zero_page.validate().is_err());

        let oversized = ListNotificationsQuery {
            user_id: None,
            search_text: None,
            page: None,
            page_size: Some(101),
        };
        assert!(oversized.validate().is_err());
    }

    fn mark_read(ids: Option<Vec<Uuid>>, mark_all: Option<bool>) -> MarkReadRequest {
        MarkReadRequest {
            user_id: 1,
            notification_ids: ids,
            mark_all,
            read: true,
        }
    }

    #[test]
    fn test_selection_requires_ids_or_mark_all() {
        assert_eq!(mark_read(None, None).selection(), None);
        assert_eq!(mark_read(Some(vec![]), None).selection(), None);
        assert_eq!(mark_read(None, Some(false)).selection(), None);
    }

    #[test]
    fn test_selection_mark_all_wins_over_ids() {
        let ids = vec![Uuid::new_v4()];
        let request = mark_read(Some(ids), Some(true));
        assert_eq!(request.selection(), Some(Selection::All));
    }

    #[test]
    fn test_selection_explicit_ids() {
        let ids = vec![Uuid::new_v4(), Uuid::new_v4()];
        let request = mark_read(Some(ids.clone()), None);
        assert_eq!(request.selection(), Some(Selection::Ids(ids)));
    }
}
