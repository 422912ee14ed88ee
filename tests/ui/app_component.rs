use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use taskmaster::config::Config;
use taskmaster::logger::Logger;
use taskmaster::operations::CommitOrder;
use taskmaster::store::TaskStats;
use taskmaster::ui::core::{Component, DialogType, EventType};
use taskmaster::ui::AppComponent;
use tokio::time::Duration;

fn key(code: KeyCode) -> EventType {
    EventType::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn type_text(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        app.handle_event(key(KeyCode::Char(c)));
    }
}

fn new_app() -> AppComponent {
    AppComponent::new(&Config::default(), Logger::new())
}

/// Let simulated time pass, then apply whatever finished
async fn advance(app: &mut AppComponent, ms: u64) -> bool {
    tokio::time::sleep(Duration::from_millis(ms)).await;
    app.tick()
}

async fn add_task(app: &mut AppComponent, title: &str) {
    app.handle_event(key(KeyCode::Char('a')));
    type_text(app, title);
    app.handle_event(key(KeyCode::Enter));
    advance(app, 600).await;
}

fn screen_text(app: &mut AppComponent) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            app.render(f, area);
        })
        .unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[tokio::test(start_paused = true)]
async fn test_add_task_commits_after_delay() {
    let mut app = new_app();

    app.handle_event(key(KeyCode::Char('a')));
    assert_eq!(app.dialog().dialog_type, Some(DialogType::AddTask));

    type_text(&mut app, "Math homework");
    app.handle_event(key(KeyCode::Tab));
    type_text(&mut app, "Page 42");
    app.handle_event(key(KeyCode::Enter));

    // Still saving: dialog open, nothing committed yet
    assert!(app.dialog().is_saving());
    assert!(app.is_busy());
    assert!(app.store().is_empty());

    assert!(!advance(&mut app, 400).await);
    assert!(app.store().is_empty());

    assert!(advance(&mut app, 150).await);
    assert!(!app.dialog().is_visible());
    assert!(!app.is_busy());

    let task = &app.store().tasks()[0];
    assert_eq!(task.title, "Math homework");
    assert_eq!(task.description, "Page 42");
    assert_eq!(
        app.stats(),
        TaskStats {
            total: 1,
            completed: 0,
            pending: 1
        }
    );
}

#[tokio::test(start_paused = true)]
async fn test_blank_title_keeps_dialog_open() {
    let mut app = new_app();

    app.handle_event(key(KeyCode::Char('a')));
    type_text(&mut app, "   ");
    app.handle_event(key(KeyCode::Enter));

    assert!(app.dialog().is_visible());
    assert!(!app.dialog().is_saving());
    assert_eq!(app.pending_operation_count(), 0);

    advance(&mut app, 600).await;
    assert!(app.store().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_escape_while_saving_cancels_add() {
    let mut app = new_app();

    app.handle_event(key(KeyCode::Char('a')));
    type_text(&mut app, "Never saved");
    app.handle_event(key(KeyCode::Enter));
    assert!(app.dialog().is_saving());

    // Typing is locked while saving
    type_text(&mut app, "zzz");
    assert_eq!(app.dialog().title_input.value(), "Never saved");

    app.handle_event(key(KeyCode::Esc));
    assert!(!app.dialog().is_visible());
    assert!(!app.is_busy());
    assert!(!app.should_quit());

    advance(&mut app, 600).await;
    assert!(app.store().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_escape_closes_idle_dialog_without_quitting() {
    let mut app = new_app();

    app.handle_event(key(KeyCode::Char('a')));
    type_text(&mut app, "draft");
    app.handle_event(key(KeyCode::Esc));

    assert!(!app.dialog().is_visible());
    assert!(!app.should_quit());

    app.handle_event(key(KeyCode::Char('a')));
    assert_eq!(app.dialog().title_input.value(), "", "reopened dialog starts empty");
}

#[tokio::test(start_paused = true)]
async fn test_toggle_is_applied_immediately() {
    let mut app = new_app();
    add_task(&mut app, "Essay").await;

    app.handle_event(key(KeyCode::Char(' ')));
    assert!(app.store().tasks()[0].is_completed);
    assert!(!app.is_busy());
    assert_eq!(app.stats().completed, 1);
    assert_eq!(app.stats().pending, 0);

    app.handle_event(key(KeyCode::Char('x')));
    assert!(!app.store().tasks()[0].is_completed);
}

#[tokio::test(start_paused = true)]
async fn test_delete_goes_through_the_queue() {
    let mut app = new_app();
    add_task(&mut app, "Lab report").await;
    add_task(&mut app, "Reading").await;
    assert_eq!(app.stats().total, 2);

    app.handle_event(key(KeyCode::Char('d')));
    assert!(app.is_busy());
    assert_eq!(app.store().len(), 2, "removal waits for its delay");

    // A second delete of the same task is rejected
    app.handle_event(key(KeyCode::Delete));
    assert_eq!(app.pending_operation_count(), 1);

    assert!(advance(&mut app, 350).await);
    assert!(!app.is_busy());
    let titles: Vec<&str> = app.store().tasks().iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["Reading"]);
}

fn store_snapshot(app: &AppComponent) -> Vec<(u64, String)> {
    app.store().tasks().iter().map(|t| (t.id, t.title.clone())).collect()
}

/// Delete the only task, then add "X" while the removal is still pending
async fn delete_then_add(order: CommitOrder) -> AppComponent {
    let mut config = Config::default();
    config.operations.commit_order = order;
    let mut app = AppComponent::new(&config, Logger::new());

    add_task(&mut app, "First").await;
    assert_eq!(store_snapshot(&app), vec![(1, "First".to_string())]);

    app.handle_event(key(KeyCode::Char('d')));
    app.handle_event(key(KeyCode::Char('a')));
    type_text(&mut app, "X");
    app.handle_event(key(KeyCode::Enter));
    assert_eq!(app.pending_operation_count(), 2);
    app
}

#[tokio::test(start_paused = true)]
async fn test_resolve_order_commits_delete_before_later_add() {
    let mut app = delete_then_add(CommitOrder::Resolve).await;

    advance(&mut app, 310).await;
    assert!(app.store().is_empty());
    assert!(app.dialog().is_saving());

    advance(&mut app, 200).await;
    assert_eq!(store_snapshot(&app), vec![(2, "X".to_string())]);
    assert!(!app.is_busy());
    assert!(!app.dialog().is_visible());
}

#[tokio::test(start_paused = true)]
async fn test_submission_order_waits_for_delete_before_add() {
    let mut app = delete_then_add(CommitOrder::Submission).await;

    advance(&mut app, 310).await;
    assert!(app.store().is_empty());

    // The add only starts its delay once the delete committed
    advance(&mut app, 200).await;
    assert!(app.store().is_empty());
    assert!(app.is_busy());

    advance(&mut app, 300).await;
    assert_eq!(store_snapshot(&app), vec![(2, "X".to_string())]);
    assert!(!app.is_busy());
}

#[tokio::test(start_paused = true)]
async fn test_quit_cancels_pending_operations() {
    let mut app = new_app();
    add_task(&mut app, "Doomed").await;

    app.handle_event(key(KeyCode::Char('d')));
    assert_eq!(app.pending_operation_count(), 1);

    app.handle_event(key(KeyCode::Char('q')));
    assert!(app.should_quit());
    assert_eq!(app.pending_operation_count(), 0);

    advance(&mut app, 400).await;
    assert_eq!(app.store().len(), 1, "cancelled removal never commits");
}

#[tokio::test(start_paused = true)]
async fn test_ctrl_c_quits() {
    let mut app = new_app();
    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    assert!(app.should_quit());
}

#[tokio::test(start_paused = true)]
async fn test_ctrl_c_quits_from_add_dialog() {
    let ctrl_c = || EventType::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));

    let mut app = new_app();
    app.handle_event(key(KeyCode::Char('a')));
    app.handle_event(ctrl_c());
    assert!(app.should_quit());
    assert_eq!(app.dialog().title_input.value(), "");

    let mut app = new_app();
    app.handle_event(key(KeyCode::Char('a')));
    type_text(&mut app, "Saving");
    app.handle_event(key(KeyCode::Enter));
    app.handle_event(ctrl_c());
    assert!(app.should_quit());
    assert_eq!(app.pending_operation_count(), 0);

    advance(&mut app, 600).await;
    assert!(app.store().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_help_and_logs_dialogs() {
    let mut app = new_app();

    app.handle_event(key(KeyCode::Char('?')));
    assert_eq!(app.dialog().dialog_type, Some(DialogType::Help));
    app.handle_event(key(KeyCode::Char('?')));
    assert!(!app.dialog().is_visible());

    app.handle_event(key(KeyCode::Char('G')));
    assert_eq!(app.dialog().dialog_type, Some(DialogType::Logs));
    app.handle_event(key(KeyCode::Char('q')));
    assert!(!app.dialog().is_visible());
    assert!(!app.should_quit(), "'q' closes the logs dialog first");
    assert!(!app.logger().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_render_empty_screen() {
    let mut app = new_app();
    let text = screen_text(&mut app);

    assert!(text.contains("TaskMaster"));
    assert!(text.contains("Total"));
    assert!(text.contains("Completed"));
    assert!(text.contains("Pending"));
    assert!(text.contains("No tasks yet"));
    assert!(!text.contains("Working"));
}

#[tokio::test(start_paused = true)]
async fn test_render_tasks_and_busy_line() {
    let mut app = new_app();
    add_task(&mut app, "Geography quiz").await;
    app.handle_event(key(KeyCode::Char(' ')));

    let text = screen_text(&mut app);
    assert!(text.contains("[x] Geography quiz"));
    assert!(!text.contains("No tasks yet"));

    app.handle_event(key(KeyCode::Char('d')));
    let text = screen_text(&mut app);
    assert!(text.contains("Working"));
}

#[tokio::test(start_paused = true)]
async fn test_render_saving_dialog() {
    let mut app = new_app();
    app.handle_event(key(KeyCode::Char('a')));

    let text = screen_text(&mut app);
    assert!(text.contains("New Task"));

    type_text(&mut app, "Pending save");
    app.handle_event(key(KeyCode::Enter));
    let text = screen_text(&mut app);
    assert!(text.contains("Saving task"));
}
