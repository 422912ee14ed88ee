//! Dialog rendering helpers used by the dialog component

pub mod common;
pub mod scroll;
pub mod system_dialogs;
pub mod task_dialogs;

pub use scroll::ScrollState;
pub use task_dialogs::AddTaskField;
