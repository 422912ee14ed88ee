use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use taskmaster::ui::components::dialog_component::TextInput;
use taskmaster::ui::components::dialogs::AddTaskField;
use taskmaster::ui::components::DialogComponent;
use taskmaster::ui::core::{Action, Component, DialogType};

fn press(dialog: &mut DialogComponent, code: KeyCode) -> Action {
    dialog.handle_key_events(KeyEvent::new(code, KeyModifiers::NONE))
}

fn open_add_dialog() -> DialogComponent {
    let mut dialog = DialogComponent::new();
    assert_eq!(dialog.update(Action::ShowDialog(DialogType::AddTask)), Action::None);
    dialog
}

fn type_text(dialog: &mut DialogComponent, text: &str) {
    for c in text.chars() {
        assert_eq!(press(dialog, KeyCode::Char(c)), Action::None);
    }
}

#[test]
fn test_submit_with_title_and_description() {
    let mut dialog = open_add_dialog();

    type_text(&mut dialog, "Science project");
    press(&mut dialog, KeyCode::Tab);
    assert_eq!(dialog.focus, AddTaskField::Description);
    type_text(&mut dialog, "Volcano model");

    assert_eq!(
        press(&mut dialog, KeyCode::Enter),
        Action::SubmitTask {
            title: "Science project".to_string(),
            description: "Volcano model".to_string(),
        }
    );
    // Submission alone does not close the form
    assert!(dialog.is_visible());
}

#[test]
fn test_blank_submit_is_ignored() {
    let mut dialog = open_add_dialog();
    type_text(&mut dialog, "  ");

    assert_eq!(press(&mut dialog, KeyCode::Enter), Action::None);
    assert!(dialog.is_visible());
}

#[test]
fn test_saving_locks_the_form() {
    let mut dialog = open_add_dialog();
    type_text(&mut dialog, "Chores");
    dialog.set_saving(true);

    assert_eq!(press(&mut dialog, KeyCode::Char('z')), Action::None);
    assert_eq!(press(&mut dialog, KeyCode::Enter), Action::None);
    assert_eq!(dialog.title_input.value(), "Chores");

    // Another dialog cannot replace an add in flight
    dialog.update(Action::ShowDialog(DialogType::Help));
    assert_eq!(dialog.dialog_type, Some(DialogType::AddTask));

    assert_eq!(press(&mut dialog, KeyCode::Esc), Action::CancelPendingAdd);
}

#[test]
fn test_hide_resets_state() {
    let mut dialog = open_add_dialog();
    type_text(&mut dialog, "Temp");
    press(&mut dialog, KeyCode::Tab);
    dialog.set_saving(true);

    dialog.hide();

    assert!(!dialog.is_visible());
    assert!(!dialog.is_saving());
    assert_eq!(dialog.title_input.value(), "");
    assert_eq!(dialog.focus, AddTaskField::Title);
}

#[test]
fn test_escape_returns_hide_action() {
    let mut dialog = open_add_dialog();
    let action = press(&mut dialog, KeyCode::Esc);
    assert_eq!(action, Action::HideDialog);

    assert_eq!(dialog.update(action), Action::None);
    assert!(!dialog.is_visible());
}

#[test]
fn test_unrelated_actions_pass_through() {
    let mut dialog = DialogComponent::new();
    assert_eq!(dialog.update(Action::NextTask), Action::NextTask);
    assert_eq!(press(&mut dialog, KeyCode::Char('a')), Action::None);
}

#[test]
fn test_help_dialog_scrolls_and_closes() {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::Help));

    press(&mut dialog, KeyCode::Down);
    press(&mut dialog, KeyCode::Down);
    assert_eq!(dialog.scroll.offset, 2);
    press(&mut dialog, KeyCode::Home);
    assert_eq!(dialog.scroll.offset, 0);

    assert_eq!(press(&mut dialog, KeyCode::Char('h')), Action::HideDialog);
}

#[test]
fn test_text_input_editing() {
    let mut input = TextInput::default();
    for c in "héllo".chars() {
        input.insert(c);
    }
    assert_eq!(input.cursor(), 5);

    input.move_left();
    input.backspace();
    assert_eq!(input.value(), "hélo");

    input.move_home();
    input.delete();
    assert_eq!(input.value(), "élo");

    input.move_end();
    input.insert('!');
    assert_eq!(input.value(), "élo!");

    input.move_right();
    assert_eq!(input.cursor(), 4);

    input.clear();
    assert_eq!(input.value(), "");
    assert_eq!(input.cursor(), 0);
}

#[test]
fn test_ctrl_c_quits_instead_of_typing() {
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);

    let mut dialog = open_add_dialog();
    assert_eq!(dialog.handle_key_events(ctrl_c), Action::Quit);
    assert_eq!(dialog.title_input.value(), "");

    dialog.set_saving(true);
    assert_eq!(dialog.handle_key_events(ctrl_c), Action::Quit);

    let mut help = DialogComponent::new();
    help.update(Action::ShowDialog(DialogType::Help));
    assert_eq!(help.handle_key_events(ctrl_c), Action::Quit);
}
