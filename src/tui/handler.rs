//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use super::app::{ActiveDialog, App, InputMode};

/// Handle a key event
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Windows terminals report releases too
    if key.kind == KeyEventKind::Release {
        return;
    }

    if app.has_dialog() {
        handle_dialog_key(app, key);
        return;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_key(app, key),
        InputMode::Editing => handle_editing_key(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),
        KeyCode::Tab | KeyCode::BackTab => app.toggle_grid_focus(),

        KeyCode::Char('k') | KeyCode::Up => app.move_cursor(-1, 0),
        KeyCode::Char('j') | KeyCode::Down => app.move_cursor(1, 0),
        KeyCode::Char('h') | KeyCode::Left => app.move_cursor(0, -1),
        KeyCode::Char('l') | KeyCode::Right => app.move_cursor(0, 1),
        KeyCode::Char('g') | KeyCode::Home => app.jump_to_edge(false),
        KeyCode::Char('G') | KeyCode::End => app.jump_to_edge(true),

        KeyCode::Char('[') => app.shift_selected_date(-1),
        KeyCode::Char(']') => app.shift_selected_date(1),

        KeyCode::Enter | KeyCode::Char('e') => app.begin_edit(),
        KeyCode::Delete | KeyCode::Char('x') => {
            app.begin_edit();
            app.input.clear();
            app.commit_edit();
        }

        KeyCode::Char('s') => app.save_daily(),
        KeyCode::Char('S') => app.save_summary(),
        KeyCode::Char('r') => app.open_dialog(ActiveDialog::ConfirmReset),

        KeyCode::Esc => app.clear_status(),
        _ => {}
    }
}

/// Handle keys while a cell is being edited
fn handle_editing_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_edit(),
        KeyCode::Enter => app.commit_edit(),
        KeyCode::Backspace => app.input.backspace(),
        KeyCode::Delete => app.input.delete(),
        KeyCode::Left => app.input.move_left(),
        KeyCode::Right => app.input.move_right(),
        KeyCode::Home => app.input.move_start(),
        KeyCode::End => app.input.move_end(),
        KeyCode::Char(c) => app.input.insert(c),
        _ => {}
    }
}

/// Handle keys when a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    match app.active_dialog {
        ActiveDialog::Help => {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Enter
            ) {
                app.close_dialog();
            }
        }
        ActiveDialog::ConfirmReset => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                app.close_dialog();
                app.reset();
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.close_dialog();
            }
            _ => {}
        },
        ActiveDialog::None => {}
    }
}
