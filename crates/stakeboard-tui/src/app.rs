//! Application state and key handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use stakeboard_core::DashboardView;

use crate::theme::Palette;

/// Which section currently has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Activity,
    Stakes,
    Votes,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Activity => Focus::Stakes,
            Focus::Stakes => Focus::Votes,
            Focus::Votes => Focus::Activity,
        }
    }

    fn prev(self) -> Self {
        match self {
            Focus::Activity => Focus::Votes,
            Focus::Stakes => Focus::Activity,
            Focus::Votes => Focus::Stakes,
        }
    }
}

/// Application state.
///
/// Holds the composed view read-only; rendering and navigation never
/// mutate the tree.
pub struct App {
    pub view: DashboardView,
    pub palette: Palette,
    pub focus: Focus,
    /// Selected row per section (activity, stakes, votes).
    pub selected: [usize; 3],
    pub showing_help: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(view: DashboardView, palette: Palette) -> Self {
        Self {
            view,
            palette,
            focus: Focus::Activity,
            selected: [0; 3],
            showing_help: false,
            should_quit: false,
        }
    }

    /// Number of items in the focused section.
    pub fn focused_len(&self) -> usize {
        match self.focus {
            Focus::Activity => self.view.activity.len(),
            Focus::Stakes => self.view.stakes.len(),
            Focus::Votes => self.view.votes.len(),
        }
    }

    /// Selected row of the focused section.
    pub fn focused_selected(&self) -> usize {
        self.selected[self.focus_index()]
    }

    fn focus_index(&self) -> usize {
        match self.focus {
            Focus::Activity => 0,
            Focus::Stakes => 1,
            Focus::Votes => 2,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if self.showing_help {
            self.showing_help = false;
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('?') => self.showing_help = true,
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.prev(),
            KeyCode::Char('j') | KeyCode::Down => self.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.select_prev(),
            _ => {}
        }
    }

    fn select_next(&mut self) {
        let len = self.focused_len();
        let idx = self.focus_index();
        if len > 0 && self.selected[idx] + 1 < len {
            self.selected[idx] += 1;
        }
    }

    fn select_prev(&mut self) {
        let idx = self.focus_index();
        self.selected[idx] = self.selected[idx].saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use stakeboard_core::{DashboardSource, SampleSource, compose};

    fn app() -> App {
        let view = compose(&SampleSource.load()).unwrap();
        App::new(view, Palette::dark())
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_on_q() {
        let mut app = app();
        app.handle_key(press(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_focus_cycles_through_sections() {
        let mut app = app();
        assert_eq!(app.focus, Focus::Activity);
        app.handle_key(press(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Stakes);
        app.handle_key(press(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Votes);
        app.handle_key(press(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Activity);
        app.handle_key(press(KeyCode::BackTab));
        assert_eq!(app.focus, Focus::Votes);
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut app = app();
        app.focus = Focus::Votes; // 3 items
        for _ in 0..10 {
            app.handle_key(press(KeyCode::Char('j')));
        }
        assert_eq!(app.focused_selected(), 2);
        for _ in 0..10 {
            app.handle_key(press(KeyCode::Char('k')));
        }
        assert_eq!(app.focused_selected(), 0);
    }

    #[test]
    fn test_selection_noop_on_empty_section() {
        let view = compose(&stakeboard_core::DashboardData {
            identity: stakeboard_core::AccountIdentity {
                address: "0x1".to_string(),
                avatar_url: String::new(),
            },
            figures: vec![],
            activity: vec![],
            stakes: vec![],
            votes: vec![],
        })
        .unwrap();
        let mut app = App::new(view, Palette::dark());
        app.handle_key(press(KeyCode::Down));
        assert_eq!(app.focused_selected(), 0);
    }

    #[test]
    fn test_help_overlay_toggles() {
        let mut app = app();
        app.handle_key(press(KeyCode::Char('?')));
        assert!(app.showing_help);
        // Any key dismisses the overlay.
        app.handle_key(press(KeyCode::Char('q')));
        assert!(!app.showing_help);
        assert!(!app.should_quit);
    }
}
