//! Spawn policy - what appears in an empty cell after a valid move
//!
//! Every function takes the random source as a parameter, so a seeded
//! `StdRng` reproduces the same sequence of spawns.

use rand::Rng;

use crate::grid::Grid;
use crate::mode::Mode;
use crate::types::BLOCKER;

/// Draw a tile value from `weights` by cumulative thresholding.
///
/// `weights` is iterated in the given (ascending) order. If rounding leaves
/// no bucket selected, the smallest value is returned.
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use water_2048_core::spawn::pick_spawn_value;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// assert_eq!(pick_spawn_value(&[(2, 1.0)], &mut rng), 2);
/// ```
pub fn pick_spawn_value<R: Rng + ?Sized>(weights: &[(u32, f64)], rng: &mut R) -> u32 {
    let roll: f64 = rng.gen();
    let mut cumulative = 0.0;
    for &(value, p) in weights {
        cumulative += p;
        if roll < cumulative {
            return value;
        }
    }
    weights.iter().map(|&(v, _)| v).min().unwrap_or(2)
}

/// Place one tile in a uniformly chosen empty cell.
///
/// Returns false when the board is full.
pub fn spawn_tile<R: Rng + ?Sized>(grid: &mut Grid, mode: Mode, rng: &mut R) -> bool {
    let empty = grid.empty_cells();
    if empty.is_empty() {
        return false;
    }
    let (row, col) = empty[rng.gen_range(0..empty.len())];
    let value = pick_spawn_value(mode.config().spawn_weights, rng);
    grid.set(row, col, value)
}

/// Place one blocker in a uniformly chosen empty cell.
///
/// Returns false when the board is full.
pub fn spawn_blocker<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> bool {
    let empty = grid.empty_cells();
    if empty.is_empty() {
        return false;
    }
    let (row, col) = empty[rng.gen_range(0..empty.len())];
    grid.set(row, col, BLOCKER)
}
