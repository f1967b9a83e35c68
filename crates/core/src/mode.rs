//! Difficulty modes
//!
//! Each mode is a closed variant carrying an immutable [`ModeConfig`]:
//!
//! | Mode | Spawn weights | Extra spawn on no merge | Undo | Blocker every |
//! |------|---------------|-------------------------|------|---------------|
//! | Easy | 2: 100% | no | yes | never |
//! | Normal | 2: 90%, 4: 10% | no | yes | never |
//! | Hard | 2: 75%, 4: 25% | yes | no | 20 moves |

/// Immutable rule set for a mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeConfig {
    /// (tile value, probability), ascending by value, probabilities sum to 1
    pub spawn_weights: &'static [(u32, f64)],
    /// Spawn a second tile when a move merges nothing
    pub force_second_spawn_on_no_merge: bool,
    pub undo_allowed: bool,
    /// Inject one blocker every K valid moves (0 disables)
    pub blocker_interval: u32,
}

const EASY: ModeConfig = ModeConfig {
    spawn_weights: &[(2, 1.0)],
    force_second_spawn_on_no_merge: false,
    undo_allowed: true,
    blocker_interval: 0,
};

const NORMAL: ModeConfig = ModeConfig {
    spawn_weights: &[(2, 0.9), (4, 0.1)],
    force_second_spawn_on_no_merge: false,
    undo_allowed: true,
    blocker_interval: 0,
};

const HARD: ModeConfig = ModeConfig {
    spawn_weights: &[(2, 0.75), (4, 0.25)],
    force_second_spawn_on_no_merge: true,
    undo_allowed: false,
    blocker_interval: 20,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Easy, Mode::Normal, Mode::Hard];

    pub fn config(&self) -> &'static ModeConfig {
        match self {
            Mode::Easy => &EASY,
            Mode::Normal => &NORMAL,
            Mode::Hard => &HARD,
        }
    }

    /// Next mode in the toggle cycle (Easy -> Normal -> Hard -> Easy)
    pub fn next(&self) -> Self {
        match self {
            Mode::Easy => Mode::Normal,
            Mode::Normal => Mode::Hard,
            Mode::Hard => Mode::Easy,
        }
    }

    /// Parse mode from string (case-insensitive)
    ///
    /// ```
    /// use water_2048_core::Mode;
    ///
    /// assert_eq!(Mode::from_str("HARD"), Some(Mode::Hard));
    /// assert_eq!(Mode::from_str("nightmare"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Mode::Easy),
            "normal" => Some(Mode::Normal),
            "hard" => Some(Mode::Hard),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Easy => "easy",
            Mode::Normal => "normal",
            Mode::Hard => "hard",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_are_ascending_and_sum_to_one() {
        for mode in Mode::ALL {
            let weights = mode.config().spawn_weights;
            assert!(!weights.is_empty());
            assert!(weights.windows(2).all(|w| w[0].0 < w[1].0), "{:?}", mode);
            let total: f64 = weights.iter().map(|&(_, p)| p).sum();
            assert!((total - 1.0).abs() < 1e-9, "{:?} sums to {}", mode, total);
        }
    }

    #[test]
    fn next_cycles_through_all_modes() {
        let mut m = Mode::Easy;
        for expected in [Mode::Normal, Mode::Hard, Mode::Easy] {
            m = m.next();
            assert_eq!(m, expected);
        }
    }

    #[test]
    fn only_hard_forbids_undo_and_injects_blockers() {
        assert!(Mode::Easy.config().undo_allowed);
        assert!(Mode::Normal.config().undo_allowed);
        assert!(!Mode::Hard.config().undo_allowed);
        assert_eq!(Mode::Normal.config().blocker_interval, 0);
        assert!(Mode::Hard.config().blocker_interval > 0);
    }
}
