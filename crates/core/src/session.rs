//! Game session - the mutable state container
//!
//! This module ties together the grid engine, the spawn policy, the active
//! difficulty mode and the progress tracker. A session owns the persistence
//! backend for best score and unlocks, and the random source for spawns.
//!
//! Every [`GameSession::apply_move`] call runs to completion: it either
//! commits a full transition (slide, spawns, counters, events) or, for a
//! no-op move, leaves the session exactly as it was.

use arrayvec::ArrayVec;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::GameError;
use crate::grid::{self, Grid};
use crate::mode::Mode;
use crate::progress::{Progress, MAX_UNLOCKS};
use crate::snapshot::GameSnapshot;
use crate::spawn::{spawn_blocker, spawn_tile};
use crate::store::ProgressStore;
use crate::types::{Direction, GameEvent, MAX_TILE};

/// Upper bound on events produced by one call (all unlocks, win, game over)
pub const MAX_EVENTS: usize = MAX_UNLOCKS + 2;

pub type Events = ArrayVec<GameEvent, MAX_EVENTS>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Active,
    /// Reached the maximum tile; play may continue
    Won,
    /// No move is available
    Lost,
}

/// Outcome of a single move request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    /// False for a no-op move (nothing changed, nothing spawned)
    pub moved: bool,
    pub merged: bool,
    pub score_delta: u32,
    pub events: Events,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct UndoEntry {
    grid: Grid,
    score: u32,
}

#[derive(Debug, Clone)]
pub struct GameSession<S: ProgressStore, R: Rng = StdRng> {
    grid: Grid,
    score: u32,
    best: u32,
    /// Valid moves since the last reset (drives blocker injection)
    moves: u32,
    /// Single-slot undo history
    history: Option<UndoEntry>,
    mode: Mode,
    /// Monotonic episode id (increments on reset).
    episode_id: u32,
    /// Win already celebrated this session
    won: bool,
    game_over: bool,
    progress: Progress,
    store: S,
    rng: R,
}

impl<S: ProgressStore> GameSession<S, StdRng> {
    /// Create a session with a seeded RNG and start the first game
    pub fn new(mode: Mode, seed: u64, store: S) -> Self {
        Self::with_rng(mode, StdRng::seed_from_u64(seed), store)
    }
}

impl<S: ProgressStore, R: Rng> GameSession<S, R> {
    /// Create a session with any random source and start the first game.
    ///
    /// Persisted state that cannot be read is treated as absent.
    pub fn with_rng(mode: Mode, rng: R, store: S) -> Self {
        let best = store.load_best().unwrap_or_else(|e| {
            warn!("best score unavailable, starting from 0: {}", e);
            0
        });
        let unlocked = store.load_unlocked().unwrap_or_else(|e| {
            warn!("unlocked facts unavailable, starting empty: {}", e);
            Vec::new()
        });

        let mut session = Self {
            grid: Grid::new(),
            score: 0,
            best,
            moves: 0,
            history: None,
            mode,
            episode_id: 0,
            won: false,
            game_over: false,
            progress: Progress::new(unlocked),
            store,
            rng,
        };
        session.start(mode);
        session
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn can_undo(&self) -> bool {
        self.mode.config().undo_allowed && self.history.is_some()
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn won(&self) -> bool {
        self.won
    }

    pub fn status(&self) -> SessionStatus {
        if self.game_over {
            SessionStatus::Lost
        } else if self.won {
            SessionStatus::Won
        } else {
            SessionStatus::Active
        }
    }

    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Dismiss the fact being presented and present the next queued one.
    pub fn dismiss_fact(&mut self) -> Option<u32> {
        self.progress.dismiss()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board = self.grid.rows();
        out.episode_id = self.episode_id;
        out.mode = self.mode;
        out.score = self.score;
        out.best = self.best;
        out.moves = self.moves;
        out.highest_tile = self.grid.highest_tile();
        out.can_undo = self.can_undo();
        out.won = self.won;
        out.game_over = self.game_over;
        out.unlocked_mask = GameSnapshot::mask_for(self.progress.unlocked());
        out.showing_fact = self.progress.showing();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Start a new game in `mode`: empty grid, zero score, two fresh tiles.
    ///
    /// Unlocks and best score are kept. Returns unlock events, if any.
    pub fn reset(&mut self, mode: Mode) -> Events {
        self.episode_id = self.episode_id.wrapping_add(1);
        self.start(mode)
    }

    /// Mode toggle: switching mode always starts a new game.
    pub fn set_mode(&mut self, mode: Mode) -> Events {
        self.reset(mode)
    }

    fn start(&mut self, mode: Mode) -> Events {
        self.mode = mode;
        self.grid.clear();
        self.score = 0;
        self.moves = 0;
        self.history = None;
        self.won = false;
        self.game_over = false;

        spawn_tile(&mut self.grid, mode, &mut self.rng);
        spawn_tile(&mut self.grid, mode, &mut self.rng);
        info!(
            "new game: episode {} in {} mode",
            self.episode_id,
            mode.as_str()
        );

        let mut events = Events::new();
        self.evaluate_unlocks(&mut events);
        events
    }

    /// Apply a direction code (0 left, 1 down, 2 right, 3 up).
    pub fn apply_code(&mut self, code: u8) -> Result<MoveOutcome, GameError> {
        let direction = Direction::from_rotations(code).ok_or(GameError::InvalidDirection(code))?;
        self.apply_move(direction)
    }

    /// Apply one move.
    ///
    /// A move that changes nothing, or any move after the game is lost,
    /// returns `moved == false` and has no side effects.
    pub fn apply_move(&mut self, direction: Direction) -> Result<MoveOutcome, GameError> {
        self.grid.validate()?;

        if self.game_over {
            return Ok(MoveOutcome::default());
        }

        let snapshot = self.mode.config().undo_allowed.then_some(UndoEntry {
            grid: self.grid,
            score: self.score,
        });

        let result = grid::apply_move(&self.grid, direction);
        if !result.moved {
            return Ok(MoveOutcome::default());
        }

        self.history = snapshot;
        self.grid = result.grid;
        self.score = self.score.saturating_add(result.score_delta);

        let config = self.mode.config();
        spawn_tile(&mut self.grid, self.mode, &mut self.rng);
        if config.force_second_spawn_on_no_merge && !result.merged {
            spawn_tile(&mut self.grid, self.mode, &mut self.rng);
        }

        self.moves += 1;
        if config.blocker_interval != 0 && self.moves % config.blocker_interval == 0 {
            let placed = spawn_blocker(&mut self.grid, &mut self.rng);
            debug!("blocker after move {} (placed: {})", self.moves, placed);
        }

        debug!(
            "move {} {}: +{} -> score {}",
            self.moves,
            direction.as_str(),
            result.score_delta,
            self.score
        );

        self.update_best();

        let mut events = Events::new();
        self.evaluate_unlocks(&mut events);

        if let Some(won) = self.check_win() {
            events.push(won);
        }

        if !grid::has_any_move(&self.grid) {
            self.game_over = true;
            info!("game over: final score {}", self.score);
            events.push(GameEvent::GameOver { score: self.score });
        }

        Ok(MoveOutcome {
            moved: true,
            merged: result.merged,
            score_delta: result.score_delta,
            events,
        })
    }

    /// Restore the state from before the last successful move.
    ///
    /// At most one level is kept; returns false when there is nothing to
    /// restore or the mode forbids undo.
    pub fn undo(&mut self) -> bool {
        if !self.mode.config().undo_allowed {
            return false;
        }
        let Some(entry) = self.history.take() else {
            return false;
        };

        self.grid = entry.grid;
        self.score = entry.score;
        self.game_over = !grid::has_any_move(&self.grid);
        debug!("undo: score back to {}", self.score);
        true
    }

    /// Emit the win event the first time the maximum tile is on the grid.
    pub fn check_win(&mut self) -> Option<GameEvent> {
        if self.won || self.grid.highest_tile() < MAX_TILE {
            return None;
        }
        self.won = true;
        info!("reached {} with score {}", MAX_TILE, self.score);
        Some(GameEvent::GameWon { score: self.score })
    }

    /// Replace the grid and score (scenarios, puzzles, tests).
    ///
    /// The undo slot is cleared; the win flag is left alone so a celebration
    /// still fires at most once per session.
    pub fn load_grid(&mut self, grid: Grid, score: u32) -> Result<(), GameError> {
        grid.validate()?;
        self.grid = grid;
        self.score = score;
        self.history = None;
        self.game_over = !grid::has_any_move(&self.grid);
        self.update_best();
        Ok(())
    }

    fn update_best(&mut self) {
        if self.score <= self.best {
            return;
        }
        self.best = self.score;
        if let Err(e) = self.store.save_best(self.best) {
            warn!("failed to persist best score {}: {}", self.best, e);
        }
    }

    fn evaluate_unlocks(&mut self, events: &mut Events) {
        let newly = self.progress.evaluate(&self.grid);
        if newly.is_empty() {
            return;
        }
        if let Err(e) = self.store.save_unlocked(self.progress.unlocked()) {
            warn!("failed to persist unlocked facts: {}", e);
        }
        for threshold in newly {
            info!("fact unlocked at {}", threshold);
            events.push(GameEvent::FactUnlocked { threshold });
        }
        self.progress.present_next();
    }
}
