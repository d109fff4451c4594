use crate::ai::EvReport;
use crate::config::AppConfig;
use crate::game::{Action, Color, GameSession, LegSummary, TurnEvent};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::Backend, Terminal};
use std::io;

pub(super) const MENU_ITEMS: [&str; 2] = ["1. Start New Game", "2. Quit"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Menu,
    Playing,
    /// Waiting for the player to pick a ticket color.
    ChoosingBet,
    LegResults(LegSummary),
    GameOver,
}

pub struct App {
    config: AppConfig,
    rng: StdRng,
    screen: Screen,
    session: Option<GameSession>,
    hint: Option<EvReport>,
    menu_selected: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// App with a fixed dice sequence.
    pub fn with_seed(config: AppConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: AppConfig, rng: StdRng) -> Self {
        App {
            config,
            rng,
            screen: Screen::Menu,
            session: None,
            hint: None,
            menu_selected: 0,
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.screen {
            Screen::Menu => self.handle_menu_key(key.code),
            Screen::Playing => self.handle_turn_key(key.code),
            Screen::ChoosingBet => self.handle_bet_key(key.code),
            Screen::LegResults(summary) => {
                self.screen = if summary.final_leg {
                    Screen::GameOver
                } else {
                    Screen::Playing
                };
            }
            Screen::GameOver => match key.code {
                KeyCode::Enter | KeyCode::Char('n') => self.start_game(),
                KeyCode::Char('m') | KeyCode::Esc => self.screen = Screen::Menu,
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
        }
    }

    fn handle_menu_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up => self.menu_selected = self.menu_selected.saturating_sub(1),
            KeyCode::Down => self.menu_selected = (self.menu_selected + 1).min(MENU_ITEMS.len() - 1),
            KeyCode::Char('1') => self.start_game(),
            KeyCode::Char('2') | KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => {
                if self.menu_selected == 0 {
                    self.start_game();
                } else {
                    self.should_quit = true;
                }
            }
            _ => {}
        }
    }

    fn handle_turn_key(&mut self, code: KeyCode) {
        // Clear message on any key press
        self.message = None;

        match code {
            KeyCode::Char('r') => self.act(Action::Roll),
            KeyCode::Char('b') => {
                self.screen = Screen::ChoosingBet;
                self.message = Some("Bet on which camel? (r/g/b/y/p, Esc to cancel)".to_string());
            }
            KeyCode::Char('h') => self.act(Action::Hint),
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc => self.screen = Screen::Menu,
            _ => {}
        }
    }

    fn handle_bet_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => {
                self.screen = Screen::Playing;
                self.message = None;
            }
            KeyCode::Char(c) => match c.to_string().parse::<Color>() {
                Ok(color) => {
                    self.screen = Screen::Playing;
                    self.act(Action::Bet(color));
                }
                Err(e) => self.message = Some(e.to_string()),
            },
            _ => {}
        }
    }

    fn start_game(&mut self) {
        let session = GameSession::new(
            self.config.players.names.clone(),
            self.config.rules.clone(),
            &mut self.rng,
        )
        .with_enumerator(self.config.engine.enumerator());
        self.message = Some(format!("{} starts. Good luck!", session.current_player().name));
        self.session = Some(session);
        self.hint = None;
        self.screen = Screen::Playing;
    }

    /// Apply an action for the current player and describe what happened.
    fn act(&mut self, action: Action) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let name = session.current_player().name.clone();

        match session.apply_action(action, &mut self.rng) {
            Ok(TurnEvent::Hint { report, .. }) => {
                self.hint = Some(*report);
                self.message = Some(format!(
                    "{} paid {} for a hint.",
                    name,
                    session.rules().hint_cost
                ));
            }
            Ok(TurnEvent::Bet { color, value, .. }) => {
                self.hint = None;
                self.message = Some(format!("{} took the {} {} ticket.", name, color, value));
            }
            Ok(TurnEvent::Rolled {
                color,
                roll,
                leg_end,
                ..
            }) => {
                self.hint = None;
                self.message = Some(format!("{} rolled {} {}.", name, color, roll.value()));
                if let Some(summary) = leg_end {
                    self.screen = Screen::LegResults(summary);
                }
            }
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        use super::game_view;

        match (self.screen, self.session.as_ref()) {
            (Screen::Menu, _) | (_, None) => game_view::render_menu(frame, self.menu_selected),
            (screen, Some(session)) => {
                let choosing_bet = screen == Screen::ChoosingBet;
                game_view::render(frame, session, self.hint.as_ref(), &self.message, choosing_bet);
                match screen {
                    Screen::LegResults(summary) => {
                        game_view::render_leg_results(frame, session, &summary)
                    }
                    Screen::GameOver => game_view::render_game_over(frame, session),
                    _ => {}
                }
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::EvEnumerator;
    use crate::game::Seat;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn app() -> App {
        let mut config = AppConfig::default();
        config.engine.parallel = false;
        App::with_seed(config, 42)
    }

    #[test]
    fn test_menu_quit() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        assert!(app.should_quit());
    }

    #[test]
    fn test_menu_enter_on_quit_item() {
        let mut app = app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert!(app.should_quit());
    }

    #[test]
    fn test_start_game_from_menu() {
        let mut app = app();
        press(&mut app, KeyCode::Char('1'));
        let session = app.session().unwrap();
        assert_eq!(session.current_player().name, "Alice");
        assert_eq!(app.screen, Screen::Playing);
    }

    #[test]
    fn test_roll_key_rolls_a_die() {
        let mut app = app();
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('r'));
        let session = app.session().unwrap();
        assert_eq!(session.dice().rolled_count(), 1);
        assert_eq!(session.current_seat(), Seat::Second);
        assert!(app.message.as_deref().unwrap().starts_with("Alice rolled"));
    }

    #[test]
    fn test_bet_flow() {
        let mut app = app();
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('b'));
        assert_eq!(app.screen, Screen::ChoosingBet);
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.screen, Screen::ChoosingBet);
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.screen, Screen::Playing);
        let session = app.session().unwrap();
        assert_eq!(session.ledger().bets(Seat::First).cards(Color::Yellow), &[5]);
        assert_eq!(
            app.message.as_deref(),
            Some("Alice took the yellow 5 ticket.")
        );
    }

    #[test]
    fn test_bet_cancel() {
        let mut app = app();
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('b'));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.screen, Screen::Playing);
        assert_eq!(app.session().unwrap().current_seat(), Seat::First);
    }

    #[test]
    fn test_hint_shows_report_and_keeps_turn() {
        let mut app = app();
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('h'));
        assert!(app.hint.is_some());
        let session = app.session().unwrap();
        assert_eq!(session.current_seat(), Seat::First);
        assert_eq!(session.player(Seat::First).coins, 2);
        assert_eq!(app.config.engine.enumerator(), EvEnumerator::sequential());
    }

    #[test]
    fn test_leg_results_after_five_rolls() {
        let mut app = app();
        press(&mut app, KeyCode::Char('1'));
        for _ in 0..5 {
            if app.screen != Screen::Playing {
                break;
            }
            press(&mut app, KeyCode::Char('r'));
        }
        assert!(matches!(app.screen, Screen::LegResults(_)));
        press(&mut app, KeyCode::Enter);
        assert!(matches!(app.screen, Screen::Playing | Screen::GameOver));
    }

    #[test]
    fn test_game_plays_to_the_end() {
        let mut app = app();
        press(&mut app, KeyCode::Char('1'));
        let mut presses = 0;
        while app.screen != Screen::GameOver {
            press(&mut app, KeyCode::Char('r'));
            presses += 1;
            assert!(presses < 1_000, "game did not end");
        }
        assert!(app.session().unwrap().outcome().is_some());
        press(&mut app, KeyCode::Char('m'));
        assert_eq!(app.screen, Screen::Menu);
    }
}
