use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::StableKey;

/// User-entered booking data, exactly as the form produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingDraft {
    pub patient_name: String,
    pub email: String,
    pub phone: String,
    pub treatment: String,
    pub urgency: String,
    pub preferred_date: String,
    pub preferred_time: String,
    pub medical_history: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Uuid,
    #[serde(flatten)]
    pub draft: BookingDraft,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pendiente,
    Confirmada,
    Completada,
    Cancelada,
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 4] = [
        BookingStatus::Pendiente,
        BookingStatus::Confirmada,
        BookingStatus::Completada,
        BookingStatus::Cancelada,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pendiente => "pendiente",
            BookingStatus::Confirmada => "confirmada",
            BookingStatus::Completada => "completada",
            BookingStatus::Cancelada => "cancelada",
        }
    }

    pub fn from_key(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }
}

impl StableKey for BookingStatus {
    fn key(&self) -> &'static str {
        self.as_str()
    }
}
