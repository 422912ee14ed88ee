//! TaskMaster - a single-screen terminal to-do list
//!
//! Tasks are added with a title and an optional description, marked
//! complete, and deleted, while a statistics card keeps running totals of
//! total, completed, and pending tasks.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`entities`] - The task record
//! * [`store`] - In-memory task list state
//! * [`operations`] - Delayed, cancellable add/remove operations
//! * [`ui`] - Terminal user interface components
//! * [`logger`] - File and in-memory logging

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Task record
pub mod entities;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Delayed task operations and their commit ordering
pub mod operations;

/// Task list state
pub mod store;

/// Terminal user interface components and rendering
pub mod ui;

pub use entities::{Task, TaskId};
pub use store::{TaskListStore, TaskStats};
