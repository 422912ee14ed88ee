use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashSet;
use taskmaster::ui::components::TaskListComponent;
use taskmaster::ui::core::{Action, Component};
use taskmaster::Task;

fn press(list: &mut TaskListComponent, code: KeyCode) -> Action {
    let action = list.handle_key_events(KeyEvent::new(code, KeyModifiers::NONE));
    list.update(action)
}

fn list_with(count: u64) -> TaskListComponent {
    let mut list = TaskListComponent::new();
    let tasks = (1..=count).map(|id| Task::new(id, format!("Task {}", id), "")).collect();
    list.update_data(tasks, HashSet::new());
    list
}

#[test]
fn test_empty_list_produces_no_intents() {
    let mut list = TaskListComponent::new();
    assert!(list.selected_task().is_none());
    assert_eq!(press(&mut list, KeyCode::Char(' ')), Action::None);
    assert_eq!(press(&mut list, KeyCode::Char('d')), Action::None);
    assert_eq!(press(&mut list, KeyCode::Down), Action::None);
}

#[test]
fn test_navigation_wraps() {
    let mut list = list_with(3);

    press(&mut list, KeyCode::Up);
    assert_eq!(list.selected_index, 2);
    press(&mut list, KeyCode::Char('j'));
    assert_eq!(list.selected_index, 0);

    press(&mut list, KeyCode::End);
    assert_eq!(list.selected_task().map(|t| t.id), Some(3));
    press(&mut list, KeyCode::Home);
    assert_eq!(list.list_state.selected(), Some(0));
}

#[test]
fn test_toggle_and_delete_target_selection() {
    let mut list = list_with(2);
    press(&mut list, KeyCode::Down);

    assert_eq!(
        press(&mut list, KeyCode::Char(' ')),
        Action::ToggleTask { id: 2, completed: true }
    );
    assert_eq!(press(&mut list, KeyCode::Char('d')), Action::DeleteTask(2));
}

#[test]
fn test_toggle_unchecks_completed_task() {
    let mut list = TaskListComponent::new();
    list.update_data(vec![Task::new(5, "Done", "").with_completed(true)], HashSet::new());

    assert_eq!(
        press(&mut list, KeyCode::Enter),
        Action::ToggleTask { id: 5, completed: false }
    );
}

#[test]
fn test_selection_clamps_when_tasks_disappear() {
    let mut list = list_with(3);
    press(&mut list, KeyCode::End);

    let remaining = vec![Task::new(1, "Task 1", "")];
    list.update_data(remaining, HashSet::new());

    assert_eq!(list.selected_index, 0);
    assert_eq!(list.list_state.selected(), Some(0));

    list.update_data(Vec::new(), HashSet::new());
    assert_eq!(list.list_state.selected(), None);
}
