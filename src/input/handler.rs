use crate::app::AppState;
use crate::domain::UiMode;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Handle keyboard input events. Returns `true` when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::AddingTask | UiMode::EditingTask | UiMode::EditingTitle => handle_prompt_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Navigation
        KeyCode::Up | KeyCode::Char('k') => {
            app.move_selection_up();
            Ok(false)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.move_selection_down();
            Ok(false)
        }

        // Check / uncheck
        KeyCode::Char(' ') => {
            app.toggle_selected_completion();
            Ok(false)
        }

        // Start/stop stopwatch
        KeyCode::Enter => {
            app.toggle_selected_timer();
            Ok(false)
        }

        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.reset_selected_timer();
            Ok(false)
        }

        // Rename task
        KeyCode::Char('e') | KeyCode::Char('E') => {
            app.start_edit_selected();
            Ok(false)
        }

        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.start_add_task();
            Ok(false)
        }

        // Rename page
        KeyCode::Char('t') | KeyCode::Char('T') => {
            app.start_edit_page_title();
            Ok(false)
        }

        // Remove completed tasks
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Delete => {
            app.remove_completed();
            Ok(false)
        }

        KeyCode::Char('u') | KeyCode::Char('U') => {
            app.undo();
            Ok(false)
        }

        // Light/dark
        KeyCode::Char('d') | KeyCode::Char('D') => {
            app.toggle_theme();
            Ok(false)
        }

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => Ok(true),

        _ => Ok(false),
    }
}

/// Handle keys while a text prompt is open
fn handle_prompt_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => {
            app.submit_input();
            Ok(false)
        }

        KeyCode::Esc => {
            app.cancel_input();
            Ok(false)
        }

        KeyCode::Backspace => {
            app.input_backspace();
            Ok(false)
        }

        KeyCode::Char(c) => {
            app.input_add_char(c);
            Ok(false)
        }

        _ => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::domain::Task;
    use crate::store::TaskStore;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut AppState, code: KeyCode) -> bool {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE)).unwrap()
    }

    fn create_test_app() -> AppState {
        let tasks = vec![Task::new(1, "Task 1"), Task::new(2, "Task 2")];
        AppState::new(TaskStore::new(tasks), &Settings::default())
    }

    #[test]
    fn test_quit() {
        let mut app = create_test_app();
        assert!(press(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn test_typing_q_in_prompt_does_not_quit() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Char('a'));
        assert!(!press(&mut app, KeyCode::Char('q')));
        assert_eq!(app.input, "q");
    }

    #[test]
    fn test_add_task_keys() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Char('a'));
        for c in "Hi".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.store.tasks()[0].title, "Hi");
    }

    #[test]
    fn test_complete_remove_undo_keys() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char(' '));
        assert!(app.store.tasks()[1].completed);

        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.store.tasks().len(), 1);

        press(&mut app, KeyCode::Char('u'));
        assert_eq!(app.store.tasks().len(), 2);
        assert!(!app.store.tasks()[1].completed);
    }

    #[test]
    fn test_timer_keys() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Enter);
        assert!(app.store.tasks()[0].timer_running);
        app.tick(3);
        press(&mut app, KeyCode::Char('r'));
        assert!(!app.store.tasks()[0].timer_running);
        assert_eq!(app.store.tasks()[0].total_secs, 0);
    }

    #[test]
    fn test_escape_cancels_edit() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Char('e'));
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.store.tasks()[0].title, "Task 1");
    }
}
