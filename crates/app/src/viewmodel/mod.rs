//! View model bindings for Slint UI

mod bookings;

use crate::state::AppState;
use crate::MainWindow;
use std::sync::Arc;

pub fn setup_bindings(window: &MainWindow, state: Arc<AppState>) {
    bookings::setup_booking_bindings(window, state);
}
