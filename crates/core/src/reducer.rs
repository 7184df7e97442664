//! Booking list reducer
//!
//! Pure state transitions over the booking list. Nothing here touches storage;
//! persisting the result is the provider's job.

use crate::models::Booking;

/// In-memory booking list, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingsState {
    pub bookings: Vec<Booking>,
}

/// The four transitions the booking list supports
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingAction {
    /// Replace the whole list (hydration from storage)
    ReplaceAll(Vec<Booking>),
    /// Append a booking, no dedup
    Add(Booking),
    /// Drop every booking with this id
    Delete(String),
    /// Replace every booking sharing the record's id
    Update(Booking),
}

impl BookingAction {
    pub fn name(&self) -> &'static str {
        match self {
            BookingAction::ReplaceAll(_) => "replace_all",
            BookingAction::Add(_) => "add",
            BookingAction::Delete(_) => "delete",
            BookingAction::Update(_) => "update",
        }
    }
}

/// Compute the next state. Unknown ids make delete and update no-ops.
pub fn reduce(state: BookingsState, action: BookingAction) -> BookingsState {
    let BookingsState { mut bookings } = state;

    match action {
        BookingAction::ReplaceAll(list) => bookings = list,
        BookingAction::Add(booking) => bookings.push(booking),
        BookingAction::Delete(id) => bookings.retain(|b| b.id != id),
        BookingAction::Update(record) => {
            for existing in bookings.iter_mut().filter(|b| b.id == record.id) {
                *existing = record.clone();
            }
        }
    }

    BookingsState { bookings }
}
