//! Application state management

use std::sync::{Arc, Mutex, PoisonError};

use tablebook_core::{
    Booking, BookingsProvider, Config, Error, KeyValueStore, Result, UnavailableStore,
};

pub type Provider = BookingsProvider<Box<dyn KeyValueStore>>;

/// Main application state
pub struct AppState {
    /// Mounted bookings provider, `None` until [`AppState::provide`] runs
    provider: Arc<Mutex<Option<Provider>>>,
}

impl AppState {
    /// State with no provider mounted yet
    pub fn new() -> Self {
        Self {
            provider: Arc::new(Mutex::new(None)),
        }
    }

    /// State with a provider over the configured store.
    ///
    /// A store that fails to open leaves bookings working in memory only.
    pub fn from_config(config: &Config) -> Self {
        let store = config.open_store().unwrap_or_else(|e| {
            tracing::error!("Failed to open booking storage, bookings will not persist: {}", e);
            Box::new(UnavailableStore::new(e.to_string()))
        });

        let state = Self::new();
        state.provide(store);
        state
    }

    /// Mount a provider over `store`, hydrating it
    pub fn provide(&self, store: Box<dyn KeyValueStore>) {
        let provider = BookingsProvider::mounted(store);
        *self.provider.lock().unwrap_or_else(PoisonError::into_inner) = Some(provider);
    }

    /// Run `f` against the mounted provider
    pub fn with_bookings<R>(&self, f: impl FnOnce(&mut Provider) -> R) -> Result<R> {
        let mut guard = self.provider.lock().unwrap_or_else(PoisonError::into_inner);
        let provider = guard.as_mut().ok_or(Error::NotProvided)?;
        Ok(f(provider))
    }

    /// Snapshot of the current bookings
    pub fn bookings(&self) -> Result<Vec<Booking>> {
        self.with_bookings(|p| p.bookings())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
