pub mod bookings;
pub mod events;
pub mod i18n;
pub mod page;

use std::sync::Arc;

use axum::routing::{get, patch, post, put};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(page::index_page))
        .route("/health", get(page::health))
        .route("/api/languages", get(i18n::list_languages))
        .route("/api/i18n/:lang", get(i18n::get_bundle))
        .route(
            "/api/bookings",
            get(bookings::list_bookings).post(bookings::create_booking),
        )
        .route("/api/bookings/validate", post(bookings::validate_draft))
        .route(
            "/api/bookings/:id",
            put(bookings::update_booking).delete(bookings::delete_booking),
        )
        .route("/api/bookings/:id/status", patch(bookings::set_status))
        .route("/api/events", get(events::events_stream))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
