use crate::ui::app::{App, Demo};
use crate::ui::counter::CounterIntent;
use crate::ui::form::FormIntent;
use crate::ui::people::PeopleIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    // Alert is modal
    if app.alert().is_some() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
            app.dismiss_alert();
        }
        return;
    }

    if is_ctrl_char(key, 'n') {
        app.next_demo();
        return;
    }
    if is_ctrl_char(key, 'p') {
        app.prev_demo();
        return;
    }

    match app.demo() {
        Demo::People => handle_people_key(app, key),
        Demo::Fetch => handle_fetch_key(app, key),
        Demo::Form => handle_form_key(app, key),
        Demo::Counter => handle_counter_key(app, key),
        Demo::Greeting => handle_greeting_key(app, key),
    }
}

fn handle_people_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up => app.move_people_selection(-1),
        KeyCode::Down => app.move_people_selection(1),
        KeyCode::Delete | KeyCode::Char('d') => app.remove_selected_person(),
        KeyCode::Char('r') => app.dispatch_people(PeopleIntent::Reset),
        KeyCode::Char('c') => app.dispatch_people(PeopleIntent::Clear),
        _ => {}
    }
}

fn handle_fetch_key(app: &mut App, key: KeyEvent) {
    if matches!(key.code, KeyCode::Char('r')) {
        app.refetch();
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Tab => app.dispatch_form(FormIntent::FocusNext),
        KeyCode::BackTab => app.dispatch_form(FormIntent::FocusPrev),
        KeyCode::Enter => app.activate_form_focus(),
        KeyCode::Backspace => app.dispatch_form(FormIntent::Backspace),
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.dispatch_form(FormIntent::Input(ch))
        }
        _ => {}
    }
}

fn handle_counter_key(app: &mut App, key: KeyEvent) {
    if matches!(
        key.code,
        KeyCode::Char('+') | KeyCode::Char(' ') | KeyCode::Enter
    ) {
        app.dispatch_counter(CounterIntent::Increment);
    }
}

fn handle_greeting_key(app: &mut App, key: KeyEvent) {
    if matches!(key.code, KeyCode::Char('r')) {
        app.cycle_role();
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
