//! Tablebook - restaurant reservation list
//!
//! Desktop front-end over the bookings provider. Bookings are kept in a local
//! store and survive restarts.

use std::sync::Arc;

use tablebook_core::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod state;
mod viewmodel;

slint::include_modules!();

fn main() -> Result<(), slint::PlatformError> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting Tablebook");

    let config = Config::load().unwrap_or_else(|e| {
        tracing::error!("Failed to load config, using defaults: {}", e);
        Config::default()
    });

    let app_state = Arc::new(state::AppState::from_config(&config));

    let main_window = MainWindow::new()?;
    viewmodel::setup_bindings(&main_window, app_state);
    main_window.invoke_load_bookings();

    main_window.run()
}
