use serde::Serialize;
use uuid::Uuid;

use super::{Booking, BookingStatus};

/// Pushed to the page over SSE whenever the store or the toast changes.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BookingEvent {
    Created { booking: Booking },
    Updated { booking: Booking },
    StatusChanged { id: Uuid, status: BookingStatus },
    Deleted { id: Uuid },
    ToastShown { generation: u64 },
    ToastDismissed { generation: u64 },
}

impl BookingEvent {
    pub fn name(&self) -> &'static str {
        match self {
            BookingEvent::Created { .. } => "created",
            BookingEvent::Updated { .. } => "updated",
            BookingEvent::StatusChanged { .. } => "status_changed",
            BookingEvent::Deleted { .. } => "deleted",
            BookingEvent::ToastShown { .. } => "toast_shown",
            BookingEvent::ToastDismissed { .. } => "toast_dismissed",
        }
    }
}
