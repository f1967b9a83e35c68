//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, so they can be used
//! by the rules engine, the persistence layer, and any presentation layer.
//!
//! # Cell Encoding
//!
//! Every grid cell is a `u32`:
//!
//! | Value | Meaning |
//! |-------|---------|
//! | `0` | Empty cell |
//! | `2, 4, 8, ...` | A tile (always a power of two) |
//! | [`BLOCKER`] | An obstacle: occupies a cell, slides, never merges |
//!
//! # Directions
//!
//! Every move is executed as a "slide left" after rotating the grid clockwise
//! a number of quarter turns:
//!
//! | Direction | Rotations |
//! |-----------|-----------|
//! | Left | 0 |
//! | Down | 1 |
//! | Right | 2 |
//! | Up | 3 |
//!
//! # Examples
//!
//! ```
//! use water_2048_types::{Direction, GRID_SIZE, MAX_TILE, is_tile, BLOCKER};
//!
//! let up = Direction::from_str("UP").unwrap();
//! assert_eq!(up.rotations(), 3);
//! assert_eq!(Direction::from_rotations(1), Some(Direction::Down));
//!
//! assert!(is_tile(MAX_TILE));
//! assert!(!is_tile(BLOCKER));
//! assert_eq!(GRID_SIZE, 4);
//! ```

/// Grid dimension (the board is `GRID_SIZE x GRID_SIZE`)
pub const GRID_SIZE: usize = 4;

/// Total number of cells on the grid
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Empty cell value
pub const EMPTY: u32 = 0;

/// Obstacle sentinel. Not a power of two, so it can never equal a tile.
pub const BLOCKER: u32 = u32::MAX;

/// Reaching this tile wins the game (play may continue afterwards)
pub const MAX_TILE: u32 = 2048;

/// Largest tile value a cell may hold (2^17). Two of these never merge.
pub const LARGEST_TILE: u32 = 1 << 17;

/// Tile values that unlock a fact, ascending
pub const FACT_THRESHOLDS: [u32; 3] = [256, 512, 1024];

/// Fallback text for a threshold without a dedicated message
pub const DEFAULT_FACT_TEXT: &str = "halloween queen";

/// Returns true for a mergeable tile value: a power of two in `2..=LARGEST_TILE`.
///
/// ```
/// use water_2048_types::{is_tile, BLOCKER};
///
/// assert!(is_tile(2));
/// assert!(is_tile(1024));
/// assert!(!is_tile(0));
/// assert!(!is_tile(1));
/// assert!(!is_tile(6));
/// assert!(!is_tile(BLOCKER));
/// ```
pub fn is_tile(value: u32) -> bool {
    (2..=LARGEST_TILE).contains(&value) && value.is_power_of_two()
}

/// Returns true for a tile that can merge with an equal neighbour.
///
/// `LARGEST_TILE` is excluded so a merge never leaves the valid cell range.
///
/// ```
/// use water_2048_types::{can_merge, BLOCKER, LARGEST_TILE};
///
/// assert!(can_merge(2));
/// assert!(can_merge(LARGEST_TILE / 2));
/// assert!(!can_merge(LARGEST_TILE));
/// assert!(!can_merge(BLOCKER));
/// ```
pub fn can_merge(value: u32) -> bool {
    is_tile(value) && value < LARGEST_TILE
}

/// Returns true if `value` may legally appear in a grid cell.
pub fn is_valid_cell(value: u32) -> bool {
    value == EMPTY || value == BLOCKER || is_tile(value)
}

/// Sprite symbol id for a tile value (used by presentation layers).
///
/// ```
/// use water_2048_types::tile_symbol;
///
/// assert_eq!(tile_symbol(2), Some("2_glass"));
/// assert_eq!(tile_symbol(2048), Some("2048_well"));
/// assert_eq!(tile_symbol(4096), None);
/// ```
pub fn tile_symbol(value: u32) -> Option<&'static str> {
    match value {
        2 => Some("2_glass"),
        4 => Some("4_jar"),
        8 => Some("8_pin"),
        16 => Some("16_helmet_blueprint"),
        32 => Some("32_drill_truck"),
        64 => Some("64_drill_bit"),
        128 => Some("128_pipes"),
        256 => Some("256_gravel_cement"),
        512 => Some("512_pump"),
        1024 => Some("1024_tap"),
        2048 => Some("2048_well"),
        _ => None,
    }
}

/// Message revealed when `threshold` is unlocked.
pub fn fact_message(threshold: u32) -> &'static str {
    match threshold {
        256 => "Diseases from dirty water kill more people every year than all forms of violence, including war.",
        512 => "Clean water helps keep kids in school, especially girls.",
        _ => DEFAULT_FACT_TEXT,
    }
}

/// Move direction
///
/// Discriminants are the number of clockwise quarter turns that bring the
/// direction into "slide left" orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    Left = 0,
    Down = 1,
    Right = 2,
    Up = 3,
}

impl Direction {
    /// All four directions, in rotation order
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Down,
        Direction::Right,
        Direction::Up,
    ];

    /// Clockwise quarter turns into slide-left orientation
    pub fn rotations(&self) -> u8 {
        *self as u8
    }

    /// Parse a direction code (0 left, 1 down, 2 right, 3 up)
    ///
    /// ```
    /// use water_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_rotations(0), Some(Direction::Left));
    /// assert_eq!(Direction::from_rotations(3), Some(Direction::Up));
    /// assert_eq!(Direction::from_rotations(4), None);
    /// ```
    pub fn from_rotations(code: u8) -> Option<Self> {
        match code {
            0 => Some(Direction::Left),
            1 => Some(Direction::Down),
            2 => Some(Direction::Right),
            3 => Some(Direction::Up),
            _ => None,
        }
    }

    /// Parse direction from string (case-insensitive)
    ///
    /// Accepts full names or single letters:
    /// "left" | "l", "down" | "d", "right" | "r", "up" | "u"
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" | "l" => Some(Direction::Left),
            "down" | "d" => Some(Direction::Down),
            "right" | "r" => Some(Direction::Right),
            "up" | "u" => Some(Direction::Up),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Down => "down",
            Direction::Right => "right",
            Direction::Up => "up",
        }
    }
}

/// Events emitted by a game session for a presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A fact threshold was reached for the first time (across all sessions)
    FactUnlocked { threshold: u32 },
    /// [`MAX_TILE`] was reached; fires once per session
    GameWon { score: u32 },
    /// No move is available; the score is final
    GameOver { score: u32 },
}
