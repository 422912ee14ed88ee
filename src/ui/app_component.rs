use crate::config::Config;
use crate::constants::{
    APP_TITLE, BUSY_INDICATOR, LOG_OPERATION_CANCELLED, LOG_OPERATION_REJECTED, LOG_TASK_ADDED, LOG_TASK_REMOVED,
};
use crate::entities::TaskId;
use crate::logger::Logger;
use crate::operations::{Latency, Operation, OperationEvent, OperationId, OperationQueue, SimulatedLatency};
use crate::store::{TaskListStore, TaskStats};
use crate::ui::components::{DialogComponent, StatsCard, TaskListComponent};
use crate::ui::core::{
    actions::{Action, DialogType},
    event_handler::EventType,
    Component,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::mpsc;

pub struct AppComponent {
    // Component composition
    task_list: TaskListComponent,
    dialog: DialogComponent,

    // Application state
    store: TaskListStore,

    // Services
    operations: OperationQueue,
    operation_rx: mpsc::UnboundedReceiver<OperationEvent>,
    logger: Logger,

    // Simple UI state
    pending_add: Option<OperationId>,
    should_quit: bool,
}

impl AppComponent {
    /// Build the screen with the latency configured in `config`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(config: &Config, logger: Logger) -> Self {
        let latency = SimulatedLatency::from_config(&config.operations);
        Self::with_latency(config, logger, Arc::new(latency))
    }

    pub fn with_latency(config: &Config, logger: Logger, latency: Arc<dyn Latency>) -> Self {
        let (operations, operation_rx) = OperationQueue::new(config.operations.commit_order, latency);

        let mut task_list = TaskListComponent::new();
        task_list.show_descriptions = config.ui.show_descriptions;

        let mut dialog = DialogComponent::new();
        dialog.set_logger(logger.clone());

        logger.log(format!(
            "AppComponent: started with {:?} commit order (add {}ms, remove {}ms)",
            config.operations.commit_order, config.operations.add_delay_ms, config.operations.remove_delay_ms
        ));

        Self {
            task_list,
            dialog,
            store: TaskListStore::new(),
            operations,
            operation_rx,
            logger,
            pending_add: None,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn store(&self) -> &TaskListStore {
        &self.store
    }

    pub fn stats(&self) -> TaskStats {
        self.store.stats()
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    pub fn dialog(&self) -> &DialogComponent {
        &self.dialog
    }

    pub fn is_busy(&self) -> bool {
        self.store.is_busy()
    }

    /// Get the number of pending operations
    pub fn pending_operation_count(&self) -> usize {
        self.operations.pending_count()
    }

    /// Update all components with current data
    fn sync_component_data(&mut self) {
        self.store.set_busy(self.operations.is_busy());

        let removing: HashSet<TaskId> = self
            .store
            .tasks()
            .iter()
            .filter(|task| self.operations.has_pending_remove(task.id))
            .map(|task| task.id)
            .collect();
        self.task_list.update_data(self.store.tasks().to_vec(), removing);
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => {
                self.logger.log("Global key: 'q' - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.logger.log("Global key: Ctrl+C - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('a') | KeyCode::Char('n') => {
                self.logger.log("Global key: 'a' - opening new task dialog".to_string());
                Action::ShowDialog(DialogType::AddTask)
            }
            KeyCode::Char('?') | KeyCode::Char('h') => {
                self.logger.log("Global key: '?' or 'h' - opening help dialog".to_string());
                Action::ShowDialog(DialogType::Help)
            }
            KeyCode::Char('G') => {
                self.logger.log("Global key: 'G' - opening logs dialog".to_string());
                Action::ShowDialog(DialogType::Logs)
            }
            KeyCode::Esc => {
                self.logger.log("Global key: Esc - quitting application".to_string());
                Action::Quit
            }
            _ => Action::None,
        }
    }

    /// Handle app-level actions that require business logic
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                let cancelled = self.operations.cancel_all();
                if !cancelled.is_empty() {
                    self.logger.log(format!(
                        "{}: {} pending operation(s) dropped on quit",
                        LOG_OPERATION_CANCELLED,
                        cancelled.len()
                    ));
                }
                self.should_quit = true;
                Action::None
            }
            Action::SubmitTask { title, description } => {
                if title.trim().is_empty() {
                    self.logger.log("Task: ignoring submission with a blank title".to_string());
                    return Action::None;
                }

                match self.operations.submit(Operation::Add {
                    title: title.clone(),
                    description,
                }) {
                    Ok(id) => {
                        self.logger.log(format!("Task: saving '{}' (operation {})", title, id));
                        self.pending_add = Some(id);
                        self.dialog.set_saving(true);
                    }
                    Err(e) => {
                        self.logger.log(format!("{}: {}", LOG_OPERATION_REJECTED, e));
                    }
                }
                Action::None
            }
            Action::CancelPendingAdd => {
                if let Some(id) = self.pending_add.take() {
                    if let Err(e) = self.operations.cancel(id) {
                        self.logger.log(format!("{}: {}", LOG_OPERATION_REJECTED, e));
                    } else {
                        self.logger
                            .log(format!("{}: add (operation {}) aborted by user", LOG_OPERATION_CANCELLED, id));
                    }
                }
                self.dialog.hide();
                Action::None
            }
            Action::ToggleTask { id, completed } => {
                self.store.toggle_complete(id, completed);
                self.logger.log(format!(
                    "Task: #{} marked {}",
                    id,
                    if completed { "completed" } else { "pending" }
                ));
                Action::None
            }
            Action::DeleteTask(id) => {
                if self.store.get(id).is_none() {
                    return Action::None;
                }

                match self.operations.submit(Operation::Remove { task_id: id }) {
                    Ok(operation_id) => {
                        self.logger
                            .log(format!("Task: removing #{} (operation {})", id, operation_id));
                    }
                    Err(e) => {
                        self.logger.log(format!("{}: {}", LOG_OPERATION_REJECTED, e));
                    }
                }
                Action::None
            }
            Action::OperationFinished(event) => {
                self.apply_operation_event(event);
                Action::None
            }
            // Pass through other actions
            _ => action,
        }
    }

    /// Apply a background result to the store
    fn apply_operation_event(&mut self, event: OperationEvent) {
        match event {
            OperationEvent::Committed { id, operation } => {
                if !self.operations.acknowledge(id) {
                    self.logger
                        .log(format!("Background: discarding {} (operation {} was cancelled)", operation, id));
                    return;
                }

                match operation {
                    Operation::Add { title, description } => {
                        if let Some(task) = self.store.add_task(&title, &description) {
                            self.logger
                                .log(format!("{}: #{} '{}'", LOG_TASK_ADDED, task.id, task.title));
                        }
                        if self.pending_add == Some(id) {
                            self.pending_add = None;
                            self.dialog.hide();
                        }
                    }
                    Operation::Remove { task_id } => {
                        self.store.remove_task(task_id);
                        self.logger.log(format!("{}: #{}", LOG_TASK_REMOVED, task_id));
                    }
                }
            }
            OperationEvent::Cancelled { id, operation } => {
                self.operations.acknowledge(id);
                self.logger
                    .log(format!("{}: {} (operation {})", LOG_OPERATION_CANCELLED, operation, id));
            }
        }
    }

    /// Process background actions from the operation queue
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();

        while let Ok(event) = self.operation_rx.try_recv() {
            actions.push(Action::OperationFinished(event));
        }

        actions
    }

    /// Apply every finished background operation; returns whether anything changed
    pub fn tick(&mut self) -> bool {
        let actions = self.process_background_actions();
        if actions.is_empty() {
            return false;
        }

        for action in actions {
            let action = self.update(action);
            self.handle_app_action(action);
        }
        self.sync_component_data();
        true
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) {
        let action = match event_type {
            EventType::Key(key) => {
                if self.dialog.is_visible() {
                    // Dialog has priority when visible
                    self.dialog.handle_key_events(key)
                } else {
                    let task_list_action = self.task_list.handle_key_events(key);

                    if !matches!(task_list_action, Action::None) {
                        task_list_action
                    } else {
                        self.handle_global_key(key)
                    }
                }
            }
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        let action = self.update(action);
        self.handle_app_action(action);
        self.sync_component_data();
    }

    fn render_title_bar(&self, f: &mut Frame, rect: Rect) {
        let title = Paragraph::new(Line::from(Span::styled(
            APP_TITLE,
            Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD),
        )))
        .style(Style::default().bg(Color::Cyan));
        f.render_widget(title, rect);
    }

    fn render_busy_line(&self, f: &mut Frame, rect: Rect) {
        if self.store.is_busy() {
            let busy = Paragraph::new(Span::styled(BUSY_INDICATOR, Style::default().fg(Color::Yellow)))
                .alignment(Alignment::Center);
            f.render_widget(busy, rect);
        }
    }

    fn render_status_bar(&self, f: &mut Frame, rect: Rect) {
        let hints = [
            ("a", " add"),
            ("space", " toggle"),
            ("d", " delete"),
            ("?", " help"),
            ("q", " quit"),
        ];

        let mut spans = Vec::new();
        for (index, (key, desc)) in hints.iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled(" • ", Style::default().fg(Color::DarkGray)));
            }
            spans.push(Span::styled(
                *key,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(*desc, Style::default().fg(Color::Gray)));
        }

        f.render_widget(Paragraph::new(Line::from(spans)), rect);
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        // This shouldn't be called directly - use handle_event instead
        self.handle_global_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        // Process through component hierarchy
        let action = self.dialog.update(action);

        // Return for app-level handling
        self.task_list.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let areas = LayoutManager::main_layout(rect);

        self.render_title_bar(f, areas.title);
        StatsCard::render(f, areas.stats, self.store.stats());
        self.render_busy_line(f, areas.busy);
        self.task_list.render(f, areas.tasks);
        self.render_status_bar(f, areas.status);

        // Render dialog on top if visible
        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}
