pub mod booking;
pub mod event;
pub mod field;
pub mod options;

pub use booking::{Booking, BookingDraft, BookingStatus};
pub use event::BookingEvent;
pub use field::Field;
pub use options::{Treatment, Urgency};

/// A language-independent identifier stored on records and translated only
/// at display time.
pub trait StableKey: Copy + 'static {
    fn key(&self) -> &'static str;
}
