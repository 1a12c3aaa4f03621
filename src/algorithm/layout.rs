//! Symmetric cell layout driven by fingerprint bytes
//!
//! The left half of the grid plus the center column is scanned once; every
//! filled off-center cell is mirrored onto the right half. When fewer than
//! the requested number of cells end up filled, extra cells are taken from
//! the center column only, so the fallback never breaks symmetry.

use crate::algorithm::fingerprint::Fingerprint;
use crate::spatial::cells::CellSet;

/// Build the filled-cell set for a fingerprint
///
/// `min_points` is best effort: once the center column is full no further
/// cells are added, so requests above `grid_size` plus the cells already
/// filled off-center cannot be met.
pub fn layout(fingerprint: &Fingerprint, grid_size: usize, min_points: usize) -> CellSet {
    let mut cells = primary_pass(fingerprint, grid_size);

    let deficit = min_points.saturating_sub(cells.count());
    if deficit > 0 {
        fill_center_column(&mut cells, fingerprint, deficit);
    }

    cells
}

/// Fill cells whose fingerprint byte is even, mirroring off-center columns
pub fn primary_pass(fingerprint: &Fingerprint, grid_size: usize) -> CellSet {
    let mut cells = CellSet::new(grid_size);
    let center = cells.center_column();

    for x in 0..=center {
        for y in 0..grid_size {
            if fingerprint.byte(x + y * grid_size) % 2 != 0 {
                continue;
            }

            cells.insert(x, y);
            if x != center {
                cells.insert(cells.mirror_column(x), y);
            }
        }
    }

    cells
}

/// Add up to `deficit` center-column cells
///
/// The first sweep only takes rows whose fingerprint byte is divisible by
/// three; the second takes any empty center cell. The deficit is rechecked
/// before every cell. Returns the deficit left once the column is exhausted.
pub fn fill_center_column(
    cells: &mut CellSet,
    fingerprint: &Fingerprint,
    deficit: usize,
) -> usize {
    let center = cells.center_column();
    let mut remaining = deficit;

    for y in 0..cells.grid_size() {
        if remaining == 0 {
            break;
        }
        if fingerprint.byte(y) % 3 == 0 && cells.insert(center, y) {
            remaining -= 1;
        }
    }

    for y in 0..cells.grid_size() {
        if remaining == 0 {
            break;
        }
        if cells.insert(center, y) {
            remaining -= 1;
        }
    }

    remaining
}
