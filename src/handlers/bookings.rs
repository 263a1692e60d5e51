use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::i18n::Lang;
use crate::models::{Booking, BookingDraft, BookingEvent, BookingStatus};
use crate::services::filter::{filter, ALL_STATUSES};
use crate::services::store::UpdateError;
use crate::services::validation::{validate, ValidationErrors};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct LangQuery {
    pub lang: Option<String>,
}

fn resolve_lang(state: &AppState, requested: Option<&str>) -> Result<Lang, AppError> {
    match requested {
        None => Ok(state.config.default_lang),
        Some(code) => code.parse().inspect_err(|_| {
            tracing::warn!(code, "unsupported language requested");
        }),
    }
}

fn parse_id(raw: &str) -> Result<Uuid, AppError> {
    raw.parse()
        .map_err(|_| AppError::NotFound(format!("booking {raw}")))
}

// POST /api/bookings/validate
#[derive(Serialize)]
pub struct ValidateResponse {
    errors: ValidationErrors,
}

pub async fn validate_draft(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LangQuery>,
    Json(draft): Json<BookingDraft>,
) -> Result<Json<ValidateResponse>, AppError> {
    let lang = resolve_lang(&state, query.lang.as_deref())?;
    let errors = validate(&draft, lang.bundle());
    Ok(Json(ValidateResponse { errors }))
}

// POST /api/bookings
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToastResponse {
    message: &'static str,
    generation: u64,
    dismiss_after_ms: u64,
}

#[derive(Serialize)]
pub struct CreatedResponse {
    booking: Booking,
    toast: ToastResponse,
}

pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LangQuery>,
    Json(draft): Json<BookingDraft>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let lang = resolve_lang(&state, query.lang.as_deref())?;
    let bundle = lang.bundle();

    let errors = validate(&draft, bundle);
    if !errors.is_empty() {
        tracing::debug!(fields = %errors, lang = %lang, "booking rejected");
        return Err(AppError::Validation(errors));
    }

    let booking = {
        let mut store = state.store.lock().unwrap();
        store.append(draft).clone()
    };

    tracing::info!(
        id = %booking.id,
        treatment = booking.draft.treatment.as_str(),
        urgency = booking.draft.urgency.as_str(),
        "booking created"
    );

    state.publish(BookingEvent::Created {
        booking: booking.clone(),
    });
    let generation = state.toast.show();

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            booking,
            toast: ToastResponse {
                message: bundle.toast_success,
                generation,
                dismiss_after_ms: state.toast.dismiss_after().as_millis() as u64,
            },
        }),
    ))
}

// GET /api/bookings
#[derive(Deserialize)]
pub struct BookingsQuery {
    pub q: Option<String>,
    pub status: Option<String>,
}

#[derive(Serialize)]
pub struct BookingsResponse {
    total: usize,
    bookings: Vec<Booking>,
}

pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
    Query(query): Query<BookingsQuery>,
) -> Json<BookingsResponse> {
    let search = query.q.as_deref().unwrap_or("");
    let status = query.status.as_deref().unwrap_or(ALL_STATUSES);

    let store = state.store.lock().unwrap();
    let bookings = filter(store.list(), search, status)
        .into_iter()
        .cloned()
        .collect();

    Json(BookingsResponse {
        total: store.len(),
        bookings,
    })
}

// PUT /api/bookings/:id
pub async fn update_booking(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
    Query(query): Query<LangQuery>,
    Json(draft): Json<BookingDraft>,
) -> Result<Json<Booking>, AppError> {
    let lang = resolve_lang(&state, query.lang.as_deref())?;
    let id = parse_id(&raw_id)?;

    let booking = {
        let mut store = state.store.lock().unwrap();
        match store.update(id, draft, lang.bundle()) {
            Ok(booking) => booking.clone(),
            Err(UpdateError::NotFound(id)) => {
                return Err(AppError::NotFound(format!("booking {id}")));
            }
            Err(UpdateError::Invalid(errors)) => {
                tracing::debug!(%id, fields = %errors, "booking update rejected");
                return Err(AppError::Validation(errors));
            }
        }
    };

    tracing::info!(id = %booking.id, "booking updated");
    state.publish(BookingEvent::Updated {
        booking: booking.clone(),
    });

    Ok(Json(booking))
}

// PATCH /api/bookings/:id/status
#[derive(Deserialize)]
pub struct StatusRequest {
    pub status: String,
}

pub async fn set_status(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
    Json(body): Json<StatusRequest>,
) -> Result<Json<Booking>, AppError> {
    let status = BookingStatus::from_key(&body.status)
        .ok_or_else(|| AppError::UnknownStatus(body.status.clone()))?;
    let id = parse_id(&raw_id)?;

    let booking = {
        let mut store = state.store.lock().unwrap();
        store
            .set_status(id, status)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("booking {id}")))?
    };

    tracing::info!(%id, status = status.as_str(), "booking status changed");
    state.publish(BookingEvent::StatusChanged { id, status });

    Ok(Json(booking))
}

// DELETE /api/bookings/:id
pub async fn delete_booking(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> StatusCode {
    // Unknown or malformed ids are a no-op.
    let Ok(id) = raw_id.parse::<Uuid>() else {
        return StatusCode::NO_CONTENT;
    };

    let removed = state.store.lock().unwrap().remove(id);
    if removed {
        tracing::info!(%id, "booking deleted");
        state.publish(BookingEvent::Deleted { id });
    }

    StatusCode::NO_CONTENT
}
