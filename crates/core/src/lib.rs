//! Tablebook Core Library
//!
//! Booking models, the booking list reducer, local key-value storage and the
//! provider that keeps the two in sync.

pub mod config;
pub mod error;
pub mod models;
pub mod persistence;
pub mod provider;
pub mod reducer;
pub mod storage;

pub use config::{Config, StorageBackend, StorageConfig};
pub use error::{Error, Result};
pub use models::*;
pub use persistence::STORAGE_KEY;
pub use provider::BookingsProvider;
pub use reducer::{reduce, BookingAction, BookingsState};
pub use storage::{KeyValueStore, MemoryStore, SqliteStore, UnavailableStore};
