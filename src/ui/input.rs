//! Key handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::App;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if is_ctrl_char(key, 'a') {
        // Ignored while a request is in flight; the guard lives in the
        // session layer.
        app.submit();
        return;
    }

    if is_ctrl_char(key, 'l') {
        app.clear();
        return;
    }

    match key.code {
        KeyCode::Enter => app.insert_char('\n'),
        KeyCode::Tab => app.insert_char('\t'),
        KeyCode::Backspace => app.delete_char(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.insert_char(c);
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, c: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(c)
}
