use crossterm::event::{KeyCode, KeyEvent};

use crate::model::config::SequenceMode;

use super::app::App;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Help overlay swallows everything except its own close keys
    if app.show_help {
        if matches!(
            key.code,
            KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')
        ) {
            app.show_help = false;
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,

        KeyCode::Char('r') => {
            app.reload();
            app.status = Some("reloaded".to_string());
        }

        KeyCode::Char('w') => app.set_sequence(SequenceMode::Week),
        KeyCode::Char('a') => app.set_sequence(SequenceMode::All),
        KeyCode::Tab => app.cycle_sequence(),

        KeyCode::Left | KeyCode::Char('h') => app.move_card(-1),
        KeyCode::Right | KeyCode::Char('l') => app.move_card(1),
        KeyCode::Up | KeyCode::Char('k') => app.move_task(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_task(1),

        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_current(),

        _ => {}
    }
}
