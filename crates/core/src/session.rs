//! Session - the complete mutable game state for one process
//!
//! Owns the board (through the match engine), score, selection, countdown
//! clock and active screen. The frame loop owns exactly one session and
//! drives it with two calls:
//!
//! - [`Session::handle_event`] for every drained input event
//! - [`Session::update`] once per frame for time-based transitions
//!
//! Every `now_ms` argument is a monotonic wall-clock reading in
//! milliseconds. Correctness never depends on how often these are called.

use log::info;

use crate::board::Board;
use crate::clock::GameClock;
use crate::config::{ConfigError, GameConfig};
use crate::generator::generate;
use crate::layout::Layout;
use crate::rng::SimpleRng;
use crate::screen;
use crate::selection::{MatchEngine, RejectReason, SelectOutcome};
use crate::snapshot::GameSnapshot;
use crate::types::{BoardLayout, Coord, Difficulty, InputEvent, Key, Point, Screen};

#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    layout: Layout,
    rng: SimpleRng,
    engine: MatchEngine,
    clock: GameClock,
    screen: Screen,
    difficulty: Difficulty,
    board_layout: BoardLayout,
    /// Remaining time captured when a play-through ended.
    final_remaining_ms: u64,
    /// Monotonic play-through id (increments on every new board).
    episode_id: u32,
    running: bool,
}

impl Session {
    /// Build a session on the menu screen.
    ///
    /// Fails when the configuration is unusable.
    pub fn new(config: GameConfig, seed: u32, now_ms: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = SimpleRng::new(seed);
        let board = generate(BoardLayout::Paired, &config, &mut rng)?;
        let clock = GameClock::new(config.budget_secs(Difficulty::Normal), now_ms);

        Ok(Self {
            layout: Layout::from_config(&config),
            engine: MatchEngine::new(board, config.match_award),
            config,
            rng,
            clock,
            screen: Screen::Menu,
            difficulty: Difficulty::Normal,
            board_layout: BoardLayout::Paired,
            final_remaining_ms: 0,
            episode_id: 0,
            running: true,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn board(&self) -> &Board {
        self.engine.board()
    }

    pub fn selection(&self) -> &[Coord] {
        self.engine.selection()
    }

    pub fn score(&self) -> u32 {
        self.engine.score()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn board_layout(&self) -> BoardLayout {
        self.board_layout
    }

    pub fn budget_secs(&self) -> u32 {
        self.clock.budget_secs()
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    /// False once quit or window-close has been received.
    pub fn running(&self) -> bool {
        self.running
    }

    /// Time left for display.
    ///
    /// Full budget before play starts, live countdown while playing, and the
    /// value at the moment the play-through ended on an end screen.
    pub fn remaining_ms(&self, now_ms: u64) -> u64 {
        match self.screen {
            Screen::Menu | Screen::DifficultySelect => u64::from(self.clock.budget_secs()) * 1000,
            Screen::Playing => self.clock.remaining_ms(now_ms),
            Screen::GameOver | Screen::Victory => self.final_remaining_ms,
        }
    }

    /// Route one input event.
    ///
    /// Time-based transitions are evaluated first, so nothing lands after the
    /// countdown has already run out. Errors are configuration errors only;
    /// invalid input is silently ignored.
    pub fn handle_event(&mut self, event: InputEvent, now_ms: u64) -> Result<(), ConfigError> {
        if !self.running {
            return Ok(());
        }
        self.update(now_ms);

        match event {
            InputEvent::Close | InputEvent::Key(Key::Quit) => {
                self.quit();
                Ok(())
            }
            InputEvent::Click(at) => screen::handler(self.screen).on_click(self, at, now_ms),
            InputEvent::Key(key) => screen::handler(self.screen).on_key(self, key, now_ms),
        }
    }

    /// Per-frame evaluation of derived transitions.
    ///
    /// A cleared board wins regardless of the clock; otherwise an expired
    /// clock ends the play-through.
    pub fn update(&mut self, now_ms: u64) {
        if !self.running || self.screen != Screen::Playing {
            return;
        }
        if self.engine.is_cleared() {
            self.finish(Screen::Victory, now_ms);
        } else if self.clock.is_expired(now_ms) {
            self.finish(Screen::GameOver, now_ms);
        }
    }

    /// Menu -> DifficultySelect.
    pub fn open_difficulty_select(&mut self) {
        if self.screen == Screen::Menu {
            self.set_screen(Screen::DifficultySelect);
        }
    }

    /// DifficultySelect -> Playing with the difficulty's budget and board.
    ///
    /// No-op on any other screen.
    pub fn choose_difficulty(
        &mut self,
        difficulty: Difficulty,
        now_ms: u64,
    ) -> Result<(), ConfigError> {
        if self.screen != Screen::DifficultySelect {
            return Ok(());
        }

        let budget = self.config.budget_secs(difficulty);
        info!(
            "difficulty {} chosen: {}s budget, {} board",
            difficulty.as_str(),
            budget,
            difficulty.board_layout().as_str()
        );
        self.difficulty = difficulty;
        self.clock.set_budget(budget);
        self.start_round(difficulty.board_layout(), now_ms)
    }

    /// GameOver/Victory -> Playing on a fresh paired board.
    ///
    /// Always uses the paired layout and keeps the current budget, whatever
    /// difficulty led to the end screen. No-op on any other screen.
    pub fn restart(&mut self, now_ms: u64) -> Result<(), ConfigError> {
        if !self.screen.is_terminal() {
            return Ok(());
        }
        info!("restart after {} with score {}", self.screen.as_str(), self.score());
        self.start_round(BoardLayout::Paired, now_ms)
    }

    /// Select the tile under a logical point.
    pub fn click_board(&mut self, at: Point, now_ms: u64) -> SelectOutcome {
        self.update(now_ms);
        match self.layout.cell_at(self.engine.board(), at) {
            Some(cell) => self.select_cell(cell, now_ms),
            None => SelectOutcome::Rejected(RejectReason::OutOfBounds),
        }
    }

    /// Select a board cell. Refused unless playing.
    ///
    /// Time-based transitions are evaluated first, so an expired countdown
    /// refuses the selection. A match that empties the board moves straight
    /// to Victory.
    pub fn select_cell(&mut self, at: Coord, now_ms: u64) -> SelectOutcome {
        self.update(now_ms);
        if !self.running || self.screen != Screen::Playing {
            return SelectOutcome::Rejected(RejectReason::NotPlaying);
        }
        let outcome = self.engine.select_cell(at);
        if matches!(outcome, SelectOutcome::Matched { .. }) && self.engine.is_cleared() {
            self.finish(Screen::Victory, now_ms);
        }
        outcome
    }

    /// Stop accepting input. Terminal state for the session.
    pub fn quit(&mut self) {
        if self.running {
            info!("quit from {}", self.screen.as_str());
            self.running = false;
        }
    }

    pub fn snapshot_into(&self, now_ms: u64, out: &mut GameSnapshot) {
        let board = self.engine.board();
        board.write_cells(&mut out.board);
        out.rows = board.rows();
        out.cols = board.cols();
        out.selection.clear();
        out.selection
            .extend(self.engine.selection().iter().copied());
        out.screen = self.screen;
        out.score = self.engine.score();
        out.remaining_ms = self.remaining_ms(now_ms);
        out.budget_secs = self.clock.budget_secs();
        out.difficulty = self.difficulty;
        out.board_layout = self.board_layout;
        out.layout = self.layout;
        out.episode_id = self.episode_id;
        out.running = self.running;
    }

    pub fn snapshot(&self, now_ms: u64) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(now_ms, &mut s);
        s
    }

    fn start_round(&mut self, layout: BoardLayout, now_ms: u64) -> Result<(), ConfigError> {
        let board = generate(layout, &self.config, &mut self.rng)?;
        self.engine.reset(board);
        self.board_layout = layout;
        self.clock.restart(now_ms);
        self.final_remaining_ms = 0;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.set_screen(Screen::Playing);
        Ok(())
    }

    fn finish(&mut self, end: Screen, now_ms: u64) {
        self.final_remaining_ms = self.clock.remaining_ms(now_ms);
        self.set_screen(end);
    }

    fn set_screen(&mut self, next: Screen) {
        if next == self.screen {
            return;
        }
        match next {
            Screen::Victory => info!("victory with score {}", self.engine.score()),
            Screen::GameOver => info!("time up with score {}", self.engine.score()),
            _ => {}
        }
        info!("screen {} -> {}", self.screen.as_str(), next.as_str());
        self.screen = next;
    }
}
