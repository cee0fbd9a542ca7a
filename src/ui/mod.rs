//! Interactive browse screen using ratatui
//!
//! - Query line, re-searched on every keystroke
//! - Results panel with one coloured block per period
//! - Category panel; Tab walks its cards and searches the selected one

mod components;

use anyhow::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Terminal;
use std::io::{self, Stdout};

use crate::index::{CategoryView, Engine, StationHit};
use components::{render_help, CategoryPanel, QueryPanel, ResultsPanel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Everything the browse screen shows, independent of the terminal
pub struct BrowseState {
    query: String,
    hits: Vec<StationHit>,
    placeholder: Option<&'static str>,
    categories: Vec<CategoryView>,
    /// (category, card) index of the selected category card
    selected: Option<(usize, usize)>,
    scroll: u16,
}

impl BrowseState {
    pub fn new(engine: &Engine) -> Self {
        let mut state = Self {
            query: String::new(),
            hits: Vec::new(),
            placeholder: None,
            categories: engine.categories(),
            selected: None,
            scroll: 0,
        };
        state.refresh(engine);
        state
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn hits(&self) -> &[StationHit] {
        &self.hits
    }

    pub fn placeholder(&self) -> Option<&'static str> {
        self.placeholder
    }

    pub fn selected_card(&self) -> Option<&str> {
        self.selected
            .map(|(ci, cj)| self.categories[ci].cards[cj].as_str())
    }

    fn refresh(&mut self, engine: &Engine) {
        self.hits = engine.search_hits(&self.query);
        self.placeholder = engine.placeholder(&self.query, self.hits.len());
        self.scroll = 0;
    }

    fn category_slots(&self) -> Vec<(usize, usize)> {
        self.categories
            .iter()
            .enumerate()
            .flat_map(|(ci, c)| (0..c.cards.len()).map(move |cj| (ci, cj)))
            .collect()
    }

    fn step_category(&mut self, engine: &Engine, forward: bool) {
        let slots = self.category_slots();
        if slots.is_empty() {
            return;
        }

        let current = self
            .selected
            .and_then(|sel| slots.iter().position(|s| *s == sel));
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => slots.len() - 1,
            (Some(i), true) => (i + 1) % slots.len(),
            (Some(i), false) => (i + slots.len() - 1) % slots.len(),
        };

        self.selected = Some(slots[next]);
        if let Some(card) = self.selected_card() {
            self.query = card.to_string();
        }
        self.refresh(engine);
    }

    pub fn handle_key(&mut self, engine: &Engine, key: KeyEvent) -> Flow {
        if key.kind != KeyEventKind::Press {
            return Flow::Continue;
        }

        match key.code {
            KeyCode::Esc => return Flow::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Flow::Quit
            }
            KeyCode::Char(c) => {
                self.query.push(c);
                self.selected = None;
                self.refresh(engine);
            }
            KeyCode::Backspace => {
                self.query.pop();
                self.selected = None;
                self.refresh(engine);
            }
            KeyCode::Tab => self.step_category(engine, true),
            KeyCode::BackTab => self.step_category(engine, false),
            KeyCode::Down => self.scroll = self.scroll.saturating_add(1),
            KeyCode::Up => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::PageDown => self.scroll = self.scroll.saturating_add(10),
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(10),
            _ => {}
        }

        Flow::Continue
    }
}

/// Full-screen browse application
pub struct BrowseApp {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl BrowseApp {
    /// Enter raw mode and the alternate screen
    pub fn new() -> Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self { terminal })
    }

    /// Run until the user quits
    pub fn run(&mut self, engine: &Engine) -> Result<()> {
        let mut state = BrowseState::new(engine);

        loop {
            self.draw(&state)?;

            if let CrosstermEvent::Key(key) = event::read()? {
                if state.handle_key(engine, key) == Flow::Quit {
                    break;
                }
            }
        }

        Ok(())
    }

    fn draw(&mut self, state: &BrowseState) -> Result<()> {
        self.terminal.draw(|frame| {
            let area = frame.area();
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3), // Query
                    Constraint::Min(5),    // Results + categories
                    Constraint::Length(1), // Help
                ])
                .split(area);
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
                .split(rows[1]);

            QueryPanel { query: &state.query }.render(frame, rows[0]);
            ResultsPanel {
                hits: &state.hits,
                placeholder: state.placeholder,
                scroll: state.scroll,
            }
            .render(frame, columns[0]);
            CategoryPanel {
                categories: &state.categories,
                selected: state.selected,
            }
            .render(frame, columns[1]);
            render_help(frame, rows[2]);
        })?;

        Ok(())
    }

    /// Restore the terminal
    pub fn restore(mut self) -> Result<()> {
        terminal::disable_raw_mode()?;
        self.terminal.backend_mut().execute(LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for BrowseApp {
    fn drop(&mut self) {
        // Best effort cleanup
        terminal::disable_raw_mode().ok();
        self.terminal
            .backend_mut()
            .execute(LeaveAlternateScreen)
            .ok();
        self.terminal.show_cursor().ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collate::JaCollator;
    use crate::document::{CardDocument, StationDocument};
    use crate::index::{NO_MATCH_TEXT, NO_QUERY_TEXT};
    use crate::reference::{CategoryDefinition, ReferenceData};

    fn engine() -> Engine {
        let collator = JaCollator::new().unwrap();
        let doc = CardDocument {
            stations: vec![
                StationDocument {
                    station: "大阪".into(),
                    periods: None,
                    cards: Some(vec!["Aカード".into(), "Bカード".into()]),
                },
                StationDocument {
                    station: "東京".into(),
                    periods: None,
                    cards: Some(vec!["Bカード".into()]),
                },
            ],
        };
        let mut reference = ReferenceData::builtin();
        reference.categories = vec![CategoryDefinition {
            name: "テスト".into(),
            icon: None,
            cards: vec!["Bカード".into(), "Zカード".into(), "Aカード".into()],
        }];
        Engine::from_document(doc, &reference, &collator)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_updates_results() {
        let engine = engine();
        let mut state = BrowseState::new(&engine);
        assert_eq!(state.placeholder(), Some(NO_QUERY_TEXT));

        state.handle_key(&engine, key(KeyCode::Char('B')));
        assert_eq!(state.query(), "B");
        assert_eq!(state.hits().len(), 2);
        assert_eq!(state.placeholder(), None);

        state.handle_key(&engine, key(KeyCode::Char('x')));
        assert!(state.hits().is_empty());
        assert_eq!(state.placeholder(), Some(NO_MATCH_TEXT));

        state.handle_key(&engine, key(KeyCode::Backspace));
        state.handle_key(&engine, key(KeyCode::Backspace));
        assert_eq!(state.placeholder(), Some(NO_QUERY_TEXT));
    }

    #[test]
    fn test_tab_cycles_present_category_cards() {
        let engine = engine();
        let mut state = BrowseState::new(&engine);

        state.handle_key(&engine, key(KeyCode::Tab));
        assert_eq!(state.query(), "Bカード");
        assert_eq!(state.hits().len(), 2);

        state.handle_key(&engine, key(KeyCode::Tab));
        assert_eq!(state.query(), "Aカード");
        assert_eq!(state.hits().len(), 1);

        state.handle_key(&engine, key(KeyCode::Tab));
        assert_eq!(state.query(), "Bカード");

        state.handle_key(&engine, key(KeyCode::BackTab));
        assert_eq!(state.selected_card(), Some("Aカード"));
    }

    #[test]
    fn test_quit_keys() {
        let engine = engine();
        let mut state = BrowseState::new(&engine);
        assert_eq!(state.handle_key(&engine, key(KeyCode::Esc)), Flow::Quit);
        assert_eq!(
            state.handle_key(&engine, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Flow::Quit
        );
        assert_eq!(state.query(), "");
    }
}
