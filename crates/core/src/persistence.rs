//! Booking list persistence
//!
//! The full list is stored as one JSON array under [`STORAGE_KEY`] and is
//! always overwritten whole. `save` and `load` never fail: a storage or parse
//! error is logged and degrades to "not persisted" or "no bookings".

use tracing::{debug, error, instrument};

use crate::error::Result;
use crate::models::Booking;
use crate::storage::KeyValueStore;

/// Key the booking list lives under
pub const STORAGE_KEY: &str = "restaurant-bookings";

/// Serialize and write the whole list
#[instrument(skip_all, fields(count = bookings.len()))]
pub fn try_save<S: KeyValueStore + ?Sized>(store: &S, bookings: &[Booking]) -> Result<()> {
    let json = serde_json::to_string(bookings)?;
    store.set(STORAGE_KEY, &json)?;
    debug!("Saved bookings");
    Ok(())
}

/// Read and deserialize the list; an absent key is an empty list
#[instrument(skip_all)]
pub fn try_load<S: KeyValueStore + ?Sized>(store: &S) -> Result<Vec<Booking>> {
    match store.get(STORAGE_KEY)? {
        Some(json) => {
            let bookings: Vec<Booking> = serde_json::from_str(&json)?;
            debug!(count = bookings.len(), "Loaded bookings");
            Ok(bookings)
        }
        None => Ok(Vec::new()),
    }
}

/// Save, logging and discarding any failure
pub fn save<S: KeyValueStore + ?Sized>(store: &S, bookings: &[Booking]) {
    if let Err(e) = try_save(store, bookings) {
        error!("Failed to save bookings: {}", e);
    }
}

/// Load, treating any failure as an empty list
pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Vec<Booking> {
    try_load(store).unwrap_or_else(|e| {
        error!("Failed to load bookings: {}", e);
        Vec::new()
    })
}

/// Forget the persisted list, logging and discarding any failure
pub fn clear<S: KeyValueStore + ?Sized>(store: &S) {
    if let Err(e) = store.remove(STORAGE_KEY) {
        error!("Failed to clear bookings: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewBooking, Seating};
    use crate::storage::{MemoryStore, SqliteStore, UnavailableStore};

    fn sample() -> Vec<Booking> {
        vec![
            Booking::from_new(NewBooking {
                date: "2024-05-01".to_string(),
                time: "19:00".to_string(),
                guests: 4,
                seating: Seating::Indoor,
                special_requests: String::new(),
            }),
            Booking::from_new(NewBooking {
                date: "not a date".to_string(),
                time: "".to_string(),
                guests: 0,
                seating: Seating::Outdoor,
                special_requests: "high chair, \"quiet\" corner\nplease".to_string(),
            }),
        ]
    }

    #[test]
    fn test_round_trip() {
        let store = MemoryStore::new();
        let bookings = sample();

        save(&store, &bookings);
        assert_eq!(load(&store), bookings);
    }

    #[test]
    fn test_round_trip_sqlite() {
        let store = SqliteStore::open_in_memory().unwrap();
        let bookings = sample();

        try_save(&store, &bookings).unwrap();
        assert_eq!(try_load(&store).unwrap(), bookings);
    }

    #[test]
    fn test_missing_key_loads_empty() {
        let store = MemoryStore::new();
        assert!(try_load(&store).unwrap().is_empty());
    }

    #[test]
    fn test_stored_as_json_array() {
        let store = MemoryStore::new();
        save(&store, &sample());

        let raw = store.get(STORAGE_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value.as_array().map(|a| a.len()), Some(2));
    }

    #[test]
    fn test_corrupt_data_loads_empty() {
        let store = MemoryStore::new();
        store.set(STORAGE_KEY, "{not json").unwrap();

        assert!(try_load(&store).is_err());
        assert!(load(&store).is_empty());
        // Corrupt data is left as is
        assert_eq!(store.get(STORAGE_KEY).unwrap().as_deref(), Some("{not json"));
    }

    #[test]
    fn test_wrong_shape_loads_empty() {
        let store = MemoryStore::new();
        store
            .set(STORAGE_KEY, r#"[{"id": "x", "guests": "many"}]"#)
            .unwrap();

        assert!(load(&store).is_empty());
    }

    #[test]
    fn test_free_form_created_at_loads_intact() {
        let store = MemoryStore::new();
        let raw = r#"[{"id":"1","date":"2024-05-01","time":"19:00","guests":2,"seating":"indoor","specialRequests":"","createdAt":"yesterday"},{"id":"2","date":"2024-05-02","time":"20:00","guests":3,"seating":"outdoor","specialRequests":"","createdAt":"2024-05-01T18:43:20.000Z"}]"#;
        store.set(STORAGE_KEY, raw).unwrap();

        let bookings = load(&store);
        assert_eq!(bookings.len(), 2);
        assert_eq!(bookings[0].created_at, "yesterday");

        save(&store, &bookings);
        assert_eq!(store.get(STORAGE_KEY).unwrap().as_deref(), Some(raw));
    }

    #[test]
    fn test_unavailable_store_degrades() {
        let store = UnavailableStore::new("disabled");

        save(&store, &sample());
        assert!(load(&store).is_empty());
        clear(&store);
    }

    #[test]
    fn test_quota_failure_keeps_previous_copy() {
        let store = MemoryStore::with_quota(64);
        save(&store, &[]);

        save(&store, &sample());
        assert_eq!(store.get(STORAGE_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_clear() {
        let store = MemoryStore::new();
        save(&store, &sample());

        clear(&store);
        assert_eq!(store.get(STORAGE_KEY).unwrap(), None);
        assert!(load(&store).is_empty());
    }
}
