use crate::entities::TaskId;
use crate::operations::OperationEvent;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Navigation
    NextTask,
    PreviousTask,
    FirstTask,
    LastTask,

    // Task intents
    ToggleTask { id: TaskId, completed: bool },
    DeleteTask(TaskId),
    SubmitTask { title: String, description: String },
    CancelPendingAdd,

    // Background results
    OperationFinished(OperationEvent),

    // UI operations
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogType {
    AddTask,
    Help,
    Logs,
}
