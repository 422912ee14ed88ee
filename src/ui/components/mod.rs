//! Reusable UI components

// Component architecture
pub mod dialog_component;
pub mod dialogs;
pub mod stats_card;
pub mod task_list_component;
pub mod task_list_item_component;

// Component exports
pub use dialog_component::DialogComponent;
pub use stats_card::StatsCard;
pub use task_list_component::TaskListComponent;
