use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::SearchOutcome;
use super::state::App;

impl App {
    /// Process one key press. Returns the final outcome when the session
    /// should end.
    pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Option<SearchOutcome> {
        match key.code {
            KeyCode::Esc => return Some(self.outcome()),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Some(self.outcome());
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Up => self.move_selection_up(),
            KeyCode::Down => self.move_selection_down(),
            KeyCode::Left => self.search_input.move_left(),
            KeyCode::Right => self.search_input.move_right(),
            KeyCode::Home => self.search_input.move_home(),
            KeyCode::End => self.search_input.move_end(),
            KeyCode::Backspace => self.search_input.backspace(),
            KeyCode::Delete => self.search_input.delete(),
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.search_input.clear();
            }
            KeyCode::Char(ch) => self.search_input.insert(ch),
            _ => {}
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::SearchClient;
    use reqwest::Url;

    fn app() -> App {
        let origin = Url::parse("http://127.0.0.1:9").unwrap();
        App::new(SearchClient::new(origin).unwrap())
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn typing_updates_the_query() {
        let mut app = app();
        for ch in "red".chars() {
            assert!(app.handle_key(press(KeyCode::Char(ch))).is_none());
        }
        assert_eq!(app.search_input.text(), "red");
        app.handle_key(press(KeyCode::Backspace));
        assert_eq!(app.search_input.text(), "re");
    }

    #[test]
    fn escape_ends_the_session_with_the_query() {
        let mut app = app();
        app.handle_key(press(KeyCode::Char('x')));
        let outcome = app.handle_key(press(KeyCode::Esc)).expect("outcome");
        assert_eq!(outcome.query, "x");
    }

    #[test]
    fn enter_on_an_empty_query_does_not_submit() {
        let mut app = app();
        app.handle_key(press(KeyCode::Enter));
        assert!(!app.request.is_loading());
    }

    #[test]
    fn enter_submits_a_non_empty_query() {
        let mut app = app();
        app.handle_key(press(KeyCode::Char('a')));
        app.handle_key(press(KeyCode::Enter));
        assert!(app.request.is_loading());
    }

    #[test]
    fn ctrl_u_clears_the_input() {
        let mut app = app();
        app.handle_key(press(KeyCode::Char('a')));
        app.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert!(app.search_input.is_empty());
    }
}
