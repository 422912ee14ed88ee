//! Core UI functionality for the TaskMaster application.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Base component trait and rendering abstractions
//! - [`event_handler`] - Terminal event polling and ticks
//!
//! Components turn key events into [`Action`]s. Actions flow through every
//! component's `update` and whatever is left reaches the app component,
//! which is the only place the task store is mutated.

pub mod actions;
pub mod component;
pub mod event_handler;

pub use actions::{Action, DialogType};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
