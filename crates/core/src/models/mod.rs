//! Data models for Tablebook

mod booking;

pub use booking::*;
