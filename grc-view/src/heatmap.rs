//! Likelihood × impact heatmap.
//!
//! Cell colours come from the cell's own coordinates, not from the levels
//! stored on the records that land in it.

use grc_core::level::{level_color, level_label};
use grc_core::{classify, RiskLevel, RiskRecord};

/// Grid side. Ratings 1..=5 map to indices 0..=4.
pub const GRID_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct HeatCell {
    pub likelihood: i32,
    pub impact: i32,
    /// Synthetic score `likelihood * impact` for the cell.
    pub score: i32,
    pub level: Option<RiskLevel>,
    pub label: &'static str,
    pub color: &'static str,
    /// Assets of the records falling in this cell, in store order.
    pub assets: Vec<String>,
}

/// `cells[likelihood - 1][impact - 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Heatmap {
    pub cells: Vec<Vec<HeatCell>>,
}

impl Heatmap {
    pub fn from_records(records: &[RiskRecord]) -> Self {
        let mut cells: Vec<Vec<HeatCell>> = (0..GRID_SIZE)
            .map(|li| {
                (0..GRID_SIZE)
                    .map(|ii| {
                        let likelihood = li as i32 + 1;
                        let impact = ii as i32 + 1;
                        let c = classify(likelihood, impact);
                        HeatCell {
                            likelihood,
                            impact,
                            score: c.score,
                            level: c.level,
                            label: level_label(c.level),
                            color: level_color(c.level),
                            assets: Vec::new(),
                        }
                    })
                    .collect()
            })
            .collect();

        let mut skipped = 0u32;
        for record in records {
            match (grid_index(record.likelihood), grid_index(record.impact)) {
                (Some(li), Some(ii)) => cells[li][ii].assets.push(record.asset.clone()),
                _ => skipped += 1,
            }
        }
        if skipped > 0 {
            log::debug!("heatmap: {} records outside the 1-5 grid", skipped);
        }

        Self { cells }
    }

    pub fn cell(&self, likelihood: i32, impact: i32) -> Option<&HeatCell> {
        let li = grid_index(likelihood)?;
        let ii = grid_index(impact)?;
        Some(&self.cells[li][ii])
    }

    /// Rows for display, highest likelihood first.
    pub fn display_rows(&self) -> impl Iterator<Item = &Vec<HeatCell>> {
        self.cells.iter().rev()
    }
}

fn grid_index(rating: i32) -> Option<usize> {
    if (1..=GRID_SIZE as i32).contains(&rating) {
        Some(rating as usize - 1)
    } else {
        None
    }
}
