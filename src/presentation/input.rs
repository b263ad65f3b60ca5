use crate::application::{App, Focus, Overlay, SubmissionPhase};
use crate::domain::Field;
use crate::presentation::ui::FORM_ROWS;
use crossterm::event::{KeyCode, KeyModifiers};

const SCROLL_STEP: u16 = 3;

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key, KeyCode::Char('q') | KeyCode::Char('c'))
        {
            app.should_quit = true;
            return;
        }

        if app.overlay.is_some() {
            Self::handle_overlay(app, key);
            return;
        }

        match app.phase {
            SubmissionPhase::Editing => Self::handle_editing_phase(app, key),
            SubmissionPhase::Submitting => Self::handle_submitting_phase(app, key),
            SubmissionPhase::Submitted => Self::handle_confirmation(app, key),
        }
    }

    fn handle_editing_phase(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::F(1) => app.toggle_overlay(Overlay::Help),
            KeyCode::F(2) => app.toggle_overlay(Overlay::Skills),
            KeyCode::F(3) => app.toggle_overlay(Overlay::Perks),
            KeyCode::Tab | KeyCode::Down => app.focus_next(),
            KeyCode::BackTab | KeyCode::Up => app.focus_prev(),
            KeyCode::Enter => match app.focus {
                Focus::Submit => app.submit(),
                Focus::Field(Field::Interests) => app.insert_char('\n'),
                Focus::Field(_) => app.focus_next(),
            },
            KeyCode::Backspace => app.delete_char_back(),
            KeyCode::Delete => app.delete_char_forward(),
            KeyCode::Left => app.move_cursor_left(),
            KeyCode::Right => app.move_cursor_right(),
            KeyCode::Home => app.move_cursor_home(),
            KeyCode::End => app.move_cursor_end(),
            KeyCode::PageDown => {
                app.scroll = (app.scroll + SCROLL_STEP).min(FORM_ROWS.saturating_sub(SCROLL_STEP));
            }
            KeyCode::PageUp => {
                app.scroll = app.scroll.saturating_sub(SCROLL_STEP);
            }
            KeyCode::Char(c) => app.insert_char(c),
            _ => {}
        }
    }

    // The submit trigger is disabled and the form frozen while the feedback
    // call is in flight; only passive keys stay live.
    fn handle_submitting_phase(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::F(1) => app.toggle_overlay(Overlay::Help),
            KeyCode::F(2) => app.toggle_overlay(Overlay::Skills),
            KeyCode::F(3) => app.toggle_overlay(Overlay::Perks),
            KeyCode::PageDown => {
                app.scroll = (app.scroll + SCROLL_STEP).min(FORM_ROWS.saturating_sub(SCROLL_STEP));
            }
            KeyCode::PageUp => {
                app.scroll = app.scroll.saturating_sub(SCROLL_STEP);
            }
            _ => {}
        }
    }

    fn handle_confirmation(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q') => {
                app.should_quit = true;
            }
            _ => {}
        }
    }

    fn handle_overlay(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::F(1) | KeyCode::F(2) | KeyCode::F(3) => {
                app.close_overlay();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                app.overlay_scroll = app.overlay_scroll.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.overlay_scroll += 1;
            }
            KeyCode::PageUp => {
                app.overlay_scroll = app.overlay_scroll.saturating_sub(5);
            }
            KeyCode::PageDown => {
                app.overlay_scroll += 5;
            }
            KeyCode::Home => {
                app.overlay_scroll = 0;
            }
            _ => {}
        }
    }
}
