use crate::{
    notification::{self, notification_handlers},
    state::AppState,
};
use axum::{
    routing::{delete, get, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        notification_handlers::create_notification,
        notification_handlers::list_notifications,
        notification_handlers::mark_notifications_read,
        notification_handlers::delete_notification,
        notification_handlers::unread_notification_count,
    ),
    components(
        schemas(
            notification::Notification,
            notification::CreateNotificationRequest,
            notification::MarkReadRequest,
            notification::DeleteNotificationRequest,
            notification::NotificationListResponse,
            notification::MarkReadResponse,
            notification::UnreadCountResponse,
        )
    ),
    tags(
        (name = "notifications", description = "Notification endpoints")
    )
)]
struct ApiDoc;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let notification_routes = Router::new()
        .route(
            "/",
            get(notification_handlers::list_notifications)
                .post(notification_handlers::create_notification),
        )
        .route(
            "/mark-read",
            put(notification_handlers::mark_notifications_read),
        )
        .route("/unread/count", get(notification_handlers::unread_notification_count))
        .route("/:id", delete(notification_handlers::delete_notification));

    let api_routes = Router::new().nest("/notifications", notification_routes);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
