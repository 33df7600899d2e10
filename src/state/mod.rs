//! Application state management module.
//!
//! This module contains the state shared by the UI and network threads:
//! - Main `State` struct holding the restaurant draft, its errors, and the
//!   current view
//! - Navigation types (`View`, `Notification`)
//! - Form editing types (`FormField`, option cycling)
//! - State error handling

mod error;
mod form;
mod navigation;

pub use error::StateError;
pub use form::{cycle_optional, cycle_required, FormField, SubmittedRestaurant};
pub use navigation::{Notification, NotificationKind, View};

#[path = "state_impl.rs"]
mod state_impl;

pub use state_impl::{State, SUBMISSION_FAILED_MESSAGE, SUBMISSION_SUCCEEDED_MESSAGE};
