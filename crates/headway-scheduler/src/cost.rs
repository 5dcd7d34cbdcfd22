use crate::{Result, SchedulerError};
use headway_core::Cylinder;
use serde::Serialize;
use std::fmt;
use tracing::warn;

/// Total and average head movement of a seek sequence
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Movement {
    /// Sum of the distances between consecutive stops
    pub total: u64,
    /// Total divided by the number of requests
    pub average: f64,
}

/// Sum of absolute differences between consecutive cylinders
pub fn total_movement(sequence: &[Cylinder]) -> u64 {
    sequence
        .windows(2)
        .map(|pair| u64::from(pair[0].abs_diff(pair[1])))
        .sum()
}

/// Compute head movement for `sequence`.
///
/// `request_count` is the number of requests given to the policy, not the
/// sequence length, so boundary stops and the initial position are not
/// counted when averaging.
pub fn compute_cost(sequence: &[Cylinder], request_count: usize) -> Result<Movement> {
    let total = total_movement(sequence);

    if request_count == 0 {
        return Err(SchedulerError::division_undefined(total));
    }

    Ok(Movement {
        total,
        average: total as f64 / request_count as f64,
    })
}

/// Movement figures for display; `average` is `None` when undefined
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostSummary {
    pub total: u64,
    pub average: Option<f64>,
}

impl CostSummary {
    /// Summarise `sequence`, reporting an undefined average as `None`
    pub fn from_sequence(sequence: &[Cylinder], request_count: usize) -> Self {
        match compute_cost(sequence, request_count) {
            Ok(movement) => movement.into(),
            Err(e) => {
                warn!("{}; reporting average as N/A", e);
                Self {
                    total: total_movement(sequence),
                    average: None,
                }
            }
        }
    }

    /// Average formatted to two decimals, or `N/A`
    pub fn average_display(&self) -> String {
        match self.average {
            Some(average) => format!("{:.2}", average),
            None => "N/A".to_string(),
        }
    }
}

impl From<Movement> for CostSummary {
    fn from(movement: Movement) -> Self {
        Self {
            total: movement.total,
            average: Some(movement.average),
        }
    }
}

impl fmt::Display for CostSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total Head Movement: {} cylinders | Average Head Movement: {} cylinders",
            self.total,
            self.average_display()
        )
    }
}
