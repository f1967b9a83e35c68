//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the rules of the game: the move engine, the spawn
//! policy, difficulty modes, the session state machine and fact unlocks.
//! It has **no dependencies** on terminals, files, or networking, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is covered by unit tests
//! - **Portable**: Runs in a terminal, a GUI, or headless
//!
//! # Module Structure
//!
//! - [`grid`]: 4x4 grid, line slide/merge, rotation, move application, move detection
//! - [`spawn`]: Weighted tile spawns and blocker injection from an injected RNG
//! - [`mode`]: Difficulty modes and their immutable rule sets
//! - [`session`]: Score, best score, undo, mode counters, win/loss events
//! - [`progress`]: Fact unlock thresholds and their presentation queue
//! - [`store`]: Persistence seam for best score and unlocks
//! - [`snapshot`]: Read-only copy of a session for renderers
//!
//! # Game Rules
//!
//! - **Slide**: Tiles slide as far as possible in the chosen direction
//! - **Merge**: Two equal tiles merge into their sum; each tile merges at most once per move
//! - **Spawn**: After every move that changes the grid, a 2 or 4 appears in an empty cell
//! - **Blockers**: In Hard mode an obstacle appears every 20 moves; it slides but never merges
//! - **Undo**: One level, only in modes that allow it
//! - **Win**: Reaching 2048 (play may continue); **Loss**: no move changes the grid
//!
//! # Example
//!
//! ```
//! use water_2048_core::{GameSession, MemoryStore, Mode};
//! use water_2048_core::types::Direction;
//!
//! let mut game = GameSession::new(Mode::Normal, 12345, MemoryStore::default());
//!
//! for dir in Direction::ALL {
//!     game.apply_move(dir).unwrap();
//! }
//!
//! assert!(game.moves() <= 4);
//! assert!(game.best() >= game.score());
//! ```

pub mod error;
pub mod grid;
pub mod mode;
pub mod progress;
pub mod session;
pub mod snapshot;
pub mod spawn;
pub mod store;

pub use water_2048_types as types;

// Re-export commonly used types for convenience
pub use error::{GameError, GridError, StoreError};
pub use grid::{apply_move, has_any_move, rotate_clockwise, slide_line, Grid, LineSlide, MoveResult};
pub use mode::{Mode, ModeConfig};
pub use progress::Progress;
pub use session::{Events, GameSession, MoveOutcome, SessionStatus};
pub use snapshot::GameSnapshot;
pub use spawn::{pick_spawn_value, spawn_blocker, spawn_tile};
pub use store::{MemoryStore, ProgressStore};
