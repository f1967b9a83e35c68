use crate::mode::Mode;
use crate::types::{FACT_THRESHOLDS, GRID_SIZE};

/// Read-only view of a session handed to renderers after every change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[u32; GRID_SIZE]; GRID_SIZE],
    pub episode_id: u32,
    pub mode: Mode,
    pub score: u32,
    pub best: u32,
    pub moves: u32,
    pub highest_tile: u32,
    pub can_undo: bool,
    pub won: bool,
    pub game_over: bool,
    /// Bit i set when `FACT_THRESHOLDS[i]` is unlocked
    pub unlocked_mask: u8,
    /// Fact currently being presented
    pub showing_fact: Option<u32>,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[0u32; GRID_SIZE]; GRID_SIZE];
        self.episode_id = 0;
        self.mode = Mode::default();
        self.score = 0;
        self.best = 0;
        self.moves = 0;
        self.highest_tile = 0;
        self.can_undo = false;
        self.won = false;
        self.game_over = false;
        self.unlocked_mask = 0;
        self.showing_fact = None;
    }

    pub fn is_unlocked(&self, threshold: u32) -> bool {
        FACT_THRESHOLDS
            .iter()
            .position(|&t| t == threshold)
            .is_some_and(|i| self.unlocked_mask & (1 << i) != 0)
    }

    /// Encode unlocked thresholds as a bitmask in threshold order
    pub fn mask_for(unlocked: &[u32]) -> u8 {
        FACT_THRESHOLDS
            .iter()
            .enumerate()
            .filter(|(_, t)| unlocked.contains(t))
            .fold(0u8, |mask, (i, _)| mask | (1 << i))
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            board: [[0u32; GRID_SIZE]; GRID_SIZE],
            episode_id: 0,
            mode: Mode::default(),
            score: 0,
            best: 0,
            moves: 0,
            highest_tile: 0,
            can_undo: false,
            won: false,
            game_over: false,
            unlocked_mask: 0,
            showing_fact: None,
        };
        s.clear();
        s
    }
}
