//! Bookings view model

use std::rc::Rc;
use std::sync::Arc;

use slint::{ComponentHandle, ModelRc, SharedString, VecModel};
use tablebook_core::{Booking, NewBooking, UnknownSeating};

use crate::state::AppState;
use crate::BookingItem;
use crate::MainWindow;

pub fn setup_booking_bindings(window: &MainWindow, state: Arc<AppState>) {
    // Load bookings
    let state_load = state.clone();
    let window_weak = window.as_weak();
    window.on_load_bookings(move || {
        let bookings = match state_load.bookings() {
            Ok(b) => b,
            Err(e) => {
                tracing::error!("Failed to read bookings: {}", e);
                return;
            }
        };

        let items: Vec<BookingItem> = bookings.iter().map(to_item).collect();

        if let Some(w) = window_weak.upgrade() {
            w.set_bookings(ModelRc::from(Rc::new(VecModel::from(items))));
        }
    });

    // Add booking
    let state_add = state.clone();
    let window_weak = window.as_weak();
    window.on_add_booking(move |date, time, guests, seating, requests| {
        let Some(w) = window_weak.upgrade() else {
            return;
        };

        let data = match form_to_new_booking(&date, &time, guests, &seating, &requests) {
            Ok(d) => d,
            Err(e) => {
                w.set_status_text(e.to_string().into());
                return;
            }
        };

        match state_add.with_bookings(|p| p.add(data)) {
            Ok(created) => {
                tracing::info!(id = %created.id, "Booking added");
                w.set_status_text(SharedString::default());
            }
            Err(e) => w.set_status_text(e.to_string().into()),
        }

        w.invoke_load_bookings();
    });

    // Update booking
    let state_update = state.clone();
    let window_weak = window.as_weak();
    window.on_update_booking(move |id, date, time, guests, seating, requests| {
        let Some(w) = window_weak.upgrade() else {
            return;
        };

        let data = match form_to_new_booking(&date, &time, guests, &seating, &requests) {
            Ok(d) => d,
            Err(e) => {
                w.set_status_text(e.to_string().into());
                return;
            }
        };

        let result = state_update.with_bookings(|p| {
            let edited = p.get(&id).map(|existing| existing.with_details(data));
            if let Some(booking) = edited {
                p.update(booking);
            }
        });
        if let Err(e) = result {
            w.set_status_text(e.to_string().into());
        }

        w.invoke_load_bookings();
    });

    // Delete booking
    let state_delete = state;
    let window_weak = window.as_weak();
    window.on_delete_booking(move |id| {
        let Some(w) = window_weak.upgrade() else {
            return;
        };

        if let Err(e) = state_delete.with_bookings(|p| p.delete(&id)) {
            w.set_status_text(e.to_string().into());
        }

        w.invoke_load_bookings();
    });
}

fn form_to_new_booking(
    date: &str,
    time: &str,
    guests: i32,
    seating: &str,
    requests: &str,
) -> Result<NewBooking, UnknownSeating> {
    Ok(NewBooking {
        date: date.to_string(),
        time: time.to_string(),
        guests: i64::from(guests),
        seating: seating.parse()?,
        special_requests: requests.to_string(),
    })
}

fn to_item(booking: &Booking) -> BookingItem {
    BookingItem {
        id: booking.id.clone().into(),
        date: booking.date.clone().into(),
        time: booking.time.clone().into(),
        guests: booking.guests.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32,
        seating: booking.seating.as_str().into(),
        special_requests: booking.special_requests.clone().into(),
        created_at: booking.created_at.as_str().into(),
    }
}
