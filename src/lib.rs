//! Terminal form for submitting new restaurant listings.
//!
//! The `restaurant` module holds the listing model and its validator, `api`
//! posts validated listings, and `app` wires state, events and rendering
//! into the terminal application.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod logger;
pub mod restaurant;
pub mod state;
pub mod ui;
