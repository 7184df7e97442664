//! Bookings provider
//!
//! Owns the booking list and the store it persists into. View code reads
//! snapshots and mutates only through `add`, `delete` and `update`. A provider
//! cannot be built without a store, so there is no unprovided state to check
//! for at runtime.

use tracing::{debug, info, instrument};

use crate::models::{Booking, NewBooking};
use crate::persistence;
use crate::reducer::{reduce, BookingAction, BookingsState};
use crate::storage::KeyValueStore;

pub struct BookingsProvider<S: KeyValueStore> {
    store: S,
    state: BookingsState,
    hydrated: bool,
}

impl<S: KeyValueStore> BookingsProvider<S> {
    /// Empty, not yet hydrated provider
    pub fn new(store: S) -> Self {
        Self {
            store,
            state: BookingsState::default(),
            hydrated: false,
        }
    }

    /// Provider hydrated from the store
    pub fn mounted(store: S) -> Self {
        let mut provider = Self::new(store);
        provider.mount();
        provider
    }

    /// Hydrate from the store. Only the first call reads storage.
    ///
    /// Hydration does not write back: an unreadable stored list stays as it
    /// is until the first mutation replaces it.
    #[instrument(skip(self))]
    pub fn mount(&mut self) {
        if self.hydrated {
            return;
        }
        self.hydrated = true;

        let bookings = persistence::load(&self.store);
        info!(count = bookings.len(), "Hydrated bookings");
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, BookingAction::ReplaceAll(bookings));
    }

    pub fn is_hydrated(&self) -> bool {
        self.hydrated
    }

    /// Copy of the current booking list
    pub fn bookings(&self) -> Vec<Booking> {
        self.state.bookings.clone()
    }

    pub fn state(&self) -> &BookingsState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Apply an action, then persist the resulting list
    pub fn dispatch(&mut self, action: BookingAction) {
        debug!(action = action.name(), "Dispatching");
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action);
        persistence::save(&self.store, &self.state.bookings);
    }

    /// Create a booking with a fresh id and creation time
    pub fn add(&mut self, data: NewBooking) -> Booking {
        let booking = Booking::from_new(data);
        self.dispatch(BookingAction::Add(booking.clone()));
        booking
    }

    pub fn delete(&mut self, id: &str) {
        self.dispatch(BookingAction::Delete(id.to_string()));
    }

    pub fn update(&mut self, booking: Booking) {
        self.dispatch(BookingAction::Update(booking));
    }

    /// Find a booking by id
    pub fn get(&self, id: &str) -> Option<&Booking> {
        self.state.bookings.iter().find(|b| b.id == id)
    }
}
