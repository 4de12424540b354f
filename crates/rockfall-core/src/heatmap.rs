//! Mine site risk heat map
//!
//! The heat map is a grid of zones, each assigned a random risk level. The
//! generator takes its randomness as a parameter so a fixed seed reproduces a
//! grid exactly; without a seed every render draws a fresh one.

use crate::fixtures::RiskLevel;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// Rolls below this are low risk
pub const LOW_RISK_CUTOFF: f64 = 0.6;

/// Rolls below this (and at or above [`LOW_RISK_CUTOFF`]) are medium risk
pub const MEDIUM_RISK_CUTOFF: f64 = 0.85;

/// One zone of the grid
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct HeatMapCell {
    /// Zero-based position, row-major
    pub index: usize,
    /// Hover label, `Zone N` with N starting at 1
    pub label: String,
    /// Risk classification
    pub risk_level: RiskLevel,
}

/// Per-level cell counts
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct RiskDistribution {
    /// Low risk cells
    pub low: usize,
    /// Medium risk cells
    pub medium: usize,
    /// High risk cells
    pub high: usize,
}

/// A generated heat map
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct HeatMap {
    /// Grid rows
    pub rows: usize,
    /// Grid columns
    pub columns: usize,
    /// Seed the grid was drawn from, when reproducible
    pub seed: Option<u64>,
    /// Cells in row-major order
    pub cells: Vec<HeatMapCell>,
}

/// Map a uniform roll in `[0, 1)` to a risk level
#[must_use]
pub fn classify_roll(roll: f64) -> RiskLevel {
    if roll < LOW_RISK_CUTOFF {
        RiskLevel::Low
    } else if roll < MEDIUM_RISK_CUTOFF {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}

impl HeatMap {
    /// Draw a `rows` x `columns` grid from the given generator
    pub fn generate<R: Rng>(rng: &mut R, rows: usize, columns: usize) -> Self {
        let cells = (0..rows * columns)
            .map(|index| HeatMapCell {
                index,
                label: format!("Zone {}", index + 1),
                risk_level: classify_roll(rng.gen_range(0.0..1.0)),
            })
            .collect();

        Self {
            rows,
            columns,
            seed: None,
            cells,
        }
    }

    /// Draw a reproducible grid from a seed
    #[must_use]
    pub fn seeded(seed: u64, rows: usize, columns: usize) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self {
            seed: Some(seed),
            ..Self::generate(&mut rng, rows, columns)
        }
    }

    /// Draw a fresh grid from the thread-local entropy source
    #[must_use]
    pub fn from_entropy(rows: usize, columns: usize) -> Self {
        Self::generate(&mut rand::thread_rng(), rows, columns)
    }

    /// Seeded when a seed is given, fresh otherwise
    #[must_use]
    pub fn render(seed: Option<u64>, rows: usize, columns: usize) -> Self {
        seed.map_or_else(
            || Self::from_entropy(rows, columns),
            |seed| Self::seeded(seed, rows, columns),
        )
    }

    /// Count cells per risk level
    #[must_use]
    pub fn distribution(&self) -> RiskDistribution {
        self.cells
            .iter()
            .fold(RiskDistribution::default(), |mut dist, cell| {
                match cell.risk_level {
                    RiskLevel::Low => dist.low += 1,
                    RiskLevel::Medium => dist.medium += 1,
                    RiskLevel::High => dist.high += 1,
                }
                dist
            })
    }
}
