//! Headway Scheduler - Disk head scheduling policies
//!
//! This crate provides:
//! - FCFS, SSTF, SCAN, CSCAN, LOOK and CLOOK policies
//! - Head movement cost calculation
//! - A stateless engine tying validation, scheduling and costing together
//! - Step-by-step playback of computed sequences

pub mod cost;
pub mod engine;
pub mod error;
pub mod playback;
pub mod policy;
pub mod types;

// Re-export commonly used types
pub use cost::{compute_cost, total_movement, CostSummary, Movement};
pub use engine::{compute_sequence, schedule, EngineConfig, SeekEngine, SeekReport};
pub use error::{Result, SchedulerError};
pub use playback::{Direction, HeadStep, Playback};
pub use policy::SchedulingPolicy;
pub use types::{PolicyKind, SeekSequence};
