pub mod notification_models;
pub mod notification_dto;
pub mod notification_repository;
pub mod notification_handlers;
pub mod notification_service;

pub use notification_models::Notification;
pub use notification_dto::{
    CreateNotificationRequest, DeleteNotificationRequest, ListNotificationsQuery,
    MarkReadRequest, MarkReadResponse, NotificationListResponse, Selection,
    UnreadCountResponse,
};
pub use notification_repository::NotificationRepository;
pub use notification_handlers::{
    create_notification, delete_notification, list_notifications, mark_notifications_read,
    unread_notification_count,
};
pub use notification_service::NotificationService;
