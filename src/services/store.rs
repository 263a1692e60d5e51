use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::i18n::LocalizationBundle;
use crate::models::{Booking, BookingDraft, BookingStatus};
use crate::services::validation::{validate, ValidationErrors};

#[derive(Debug, thiserror::Error)]
pub enum UpdateError {
    #[error("booking not found: {0}")]
    NotFound(Uuid),

    #[error("validation failed for: {0}")]
    Invalid(ValidationErrors),
}

/// In-memory bookings for the lifetime of the process, oldest first.
///
/// The store is the only writer of its records: callers get shared
/// references or clones, and every mutation goes through a method here.
#[derive(Debug, Default)]
pub struct BookingStore {
    bookings: Vec<Booking>,
}

impl BookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a draft as a new `pendiente` booking. The draft is taken as-is;
    /// run [`validate`] first.
    pub fn append(&mut self, draft: BookingDraft) -> &Booking {
        self.append_at(draft, Utc::now())
    }

    fn append_at(&mut self, draft: BookingDraft, created_at: DateTime<Utc>) -> &Booking {
        let id = self.fresh_id();
        self.bookings.push(Booking {
            id,
            draft,
            status: BookingStatus::Pendiente,
            created_at,
        });
        let index = self.bookings.len() - 1;
        &self.bookings[index]
    }

    /// Returns whether a booking was removed; a missing id is not an error.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.bookings.len();
        self.bookings.retain(|b| b.id != id);
        self.bookings.len() != before
    }

    pub fn list(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn get(&self, id: Uuid) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    /// No transition rules are enforced: any status may follow any other.
    pub fn set_status(&mut self, id: Uuid, status: BookingStatus) -> Option<&Booking> {
        let booking = self.bookings.iter_mut().find(|b| b.id == id)?;
        booking.status = status;
        Some(&*booking)
    }

    /// Replace the form fields of an existing booking, subject to the same
    /// rules as creation. Identifier, status and creation time are kept.
    pub fn update(
        &mut self,
        id: Uuid,
        draft: BookingDraft,
        bundle: &LocalizationBundle,
    ) -> Result<&Booking, UpdateError> {
        let booking = self
            .bookings
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(UpdateError::NotFound(id))?;

        let errors = validate(&draft, bundle);
        if !errors.is_empty() {
            return Err(UpdateError::Invalid(errors));
        }

        booking.draft = draft;
        Ok(&*booking)
    }

    // v4 ids never repeat in practice; the loop only guards the store's own
    // uniqueness invariant.
    fn fresh_id(&self) -> Uuid {
        loop {
            let id = Uuid::new_v4();
            if self.get(id).is_none() {
                return id;
            }
        }
    }
}
