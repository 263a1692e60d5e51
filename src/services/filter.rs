use crate::models::Booking;

/// Status filter value that matches every booking.
pub const ALL_STATUSES: &str = "all";

/// Select the bookings whose name or email contains `query`
/// (case-insensitive) and whose status key equals `status_filter`, or any
/// status when the filter is [`ALL_STATUSES`]. Input order is preserved.
pub fn filter<'a>(bookings: &'a [Booking], query: &str, status_filter: &str) -> Vec<&'a Booking> {
    let term = query.to_lowercase();
    bookings
        .iter()
        .filter(|b| {
            let match_text = b.draft.patient_name.to_lowercase().contains(&term)
                || b.draft.email.to_lowercase().contains(&term);
            let match_status =
                status_filter == ALL_STATUSES || b.status.as_str() == status_filter;
            match_text && match_status
        })
        .collect()
}
