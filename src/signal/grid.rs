//! Spatial grid correlation.

use crate::score::ComparisonPair;
use crate::signal::{finite, Signal, SignalResult};
use crate::util::math::Moments;
use crate::util::ScoreComputationError;

pub(crate) const GRID_ROWS: u32 = 4;
pub(crate) const GRID_COLS: u32 = 3;
/// A cell qualifies only when more than this fraction of it is valid.
const MIN_CELL_COVERAGE: f64 = 0.3;
/// Cells with this many valid samples or fewer are not correlated.
const MIN_CELL_SAMPLES: usize = 10;

/// Mean per-cell Pearson correlation of masked intensities over a 4x3 grid.
///
/// Negative cell correlations count as 0. Cells whose correlation is undefined
/// (a blank margin has no variance) are left out of the mean like cells with
/// too little valid coverage. With no qualifying cell the signal fails with
/// [`ScoreComputationError::NoQualifyingCells`] and the scorer uses 0.
pub struct GridCorrelation;

impl Signal for GridCorrelation {
    const NAME: &'static str = "grid";

    fn compute(pair: &ComparisonPair) -> SignalResult {
        let width = pair.width();
        let cell_w = width / GRID_COLS;
        let cell_h = pair.height() / GRID_ROWS;
        if cell_w == 0 || cell_h == 0 {
            return Err(ScoreComputationError::NoQualifyingCells);
        }
        let cell_area = f64::from(cell_w) * f64::from(cell_h);
        let reference = pair.reference_gray().as_raw();
        let candidate = pair.candidate_gray().as_raw();
        let mask = pair.mask().as_raw();

        let mut total = 0.0f64;
        let mut cells = 0usize;
        for row in 0..GRID_ROWS {
            for col in 0..GRID_COLS {
                let mut moments = Moments::default();
                for y in row * cell_h..(row + 1) * cell_h {
                    let base = (y * width) as usize;
                    for x in col * cell_w..(col + 1) * cell_w {
                        let idx = base + x as usize;
                        if mask[idx] == 0 {
                            continue;
                        }
                        moments.push(f64::from(reference[idx]), f64::from(candidate[idx]));
                    }
                }
                let covered = moments.count();
                if covered as f64 <= cell_area * MIN_CELL_COVERAGE || covered <= MIN_CELL_SAMPLES {
                    continue;
                }
                if let Some(r) = moments.correlation() {
                    total += r.max(0.0);
                    cells += 1;
                }
            }
        }

        if cells == 0 {
            return Err(ScoreComputationError::NoQualifyingCells);
        }
        finite(total / cells as f64)
    }
}
