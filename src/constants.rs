//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Screen
pub const APP_TITLE: &str = "TaskMaster - Manage your school tasks";

// Statistics card labels
pub const STAT_TOTAL: &str = "Total";
pub const STAT_COMPLETED: &str = "Completed";
pub const STAT_PENDING: &str = "Pending";

// Task list
pub const TASKS_TITLE: &str = " Tasks ";
pub const EMPTY_TASK_LIST: &str = "No tasks yet. Press 'a' to add one.";
pub const CHECKBOX_CHECKED: &str = "[x]";
pub const CHECKBOX_UNCHECKED: &str = "[ ]";
pub const BUSY_INDICATOR: &str = "⟳ Working...";

// Add task dialog
pub const DIALOG_TITLE_NEW_TASK: &str = " New Task ";
pub const FIELD_TITLE: &str = "Title";
pub const FIELD_DESCRIPTION: &str = "Description";
pub const DIALOG_SAVING: &str = "⟳ Saving task...";

// Other dialogs
pub const DIALOG_TITLE_HELP: &str = "📖 Help - Press 'Esc', '?' or 'h' to close";
pub const DIALOG_TITLE_LOGS: &str = "🔍 Logs - Press 'Esc', 'G' or 'q' to close";

// Log messages
pub const LOG_TASK_ADDED: &str = "✅ Task added";
pub const LOG_TASK_REMOVED: &str = "✅ Task removed";
pub const LOG_OPERATION_CANCELLED: &str = "⚠️ Operation cancelled";
pub const LOG_OPERATION_REJECTED: &str = "❌ Operation rejected";

// Config
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const CONFIG_ENV_VAR: &str = "TASKMASTER_CONFIG";
pub const CONFIG_FILE_NAME: &str = "taskmaster.toml";
pub const APP_DIR_NAME: &str = "taskmaster";
pub const LOG_FILE_NAME: &str = "taskmaster.log";

// Simulated latency
/// Delay before an added task is committed
pub const DEFAULT_ADD_DELAY_MS: u64 = 500;
/// Delay before a removed task is committed
pub const DEFAULT_REMOVE_DELAY_MS: u64 = 300;
/// Upper bound accepted for either delay
pub const MAX_SIMULATED_DELAY_MS: u64 = 10_000;

// Event loop
pub const DEFAULT_TICK_RATE_MS: u64 = 100;
pub const MIN_TICK_RATE_MS: u64 = 10;
pub const MAX_TICK_RATE_MS: u64 = 1_000;

// UI Layout Constants
/// Height of the statistics card including borders
pub const STATS_CARD_HEIGHT: u16 = 4;
/// Displayed lines of a description in the add dialog
pub const DESCRIPTION_MAX_LINES: u16 = 3;
/// In-memory log entries kept for the logs dialog
pub const MAX_LOG_ENTRIES: usize = 500;
