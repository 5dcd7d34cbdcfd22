use crate::cost::{compute_cost, CostSummary, Movement};
use crate::playback::Playback;
use crate::policy::{CLook, CScan, Fcfs, Look, Scan, SchedulingPolicy, Sstf};
use crate::{Result, SchedulerError};
use headway_core::Cylinder;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Identifier of a disk scheduling policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PolicyKind {
    Fcfs,
    Sstf,
    Scan,
    CScan,
    Look,
    CLook,
}

impl PolicyKind {
    /// All policies, in canonical order
    pub const ALL: [PolicyKind; 6] = [
        PolicyKind::Fcfs,
        PolicyKind::Sstf,
        PolicyKind::Scan,
        PolicyKind::CScan,
        PolicyKind::Look,
        PolicyKind::CLook,
    ];

    /// Canonical upper-case name
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyKind::Fcfs => "FCFS",
            PolicyKind::Sstf => "SSTF",
            PolicyKind::Scan => "SCAN",
            PolicyKind::CScan => "CSCAN",
            PolicyKind::Look => "LOOK",
            PolicyKind::CLook => "CLOOK",
        }
    }

    /// The implementation behind this identifier
    pub fn policy(&self) -> Box<dyn SchedulingPolicy> {
        match self {
            PolicyKind::Fcfs => Box::new(Fcfs),
            PolicyKind::Sstf => Box::new(Sstf),
            PolicyKind::Scan => Box::new(Scan),
            PolicyKind::CScan => Box::new(CScan),
            PolicyKind::Look => Box::new(Look),
            PolicyKind::CLook => Box::new(CLook),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyKind {
    type Err = SchedulerError;

    /// Case-insensitive; `C-SCAN` and `C-LOOK` are accepted too
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "");
        match normalized.as_str() {
            "FCFS" => Ok(PolicyKind::Fcfs),
            "SSTF" => Ok(PolicyKind::Sstf),
            "SCAN" => Ok(PolicyKind::Scan),
            "CSCAN" => Ok(PolicyKind::CScan),
            "LOOK" => Ok(PolicyKind::Look),
            "CLOOK" => Ok(PolicyKind::CLook),
            _ => Err(SchedulerError::unknown_policy(s.trim())),
        }
    }
}

/// Order in which the head visits cylinders
///
/// The first entry is always the starting head position. SCAN and CSCAN
/// add boundary cylinders that were never requested, so the length can
/// exceed `request_count + 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeekSequence {
    policy: PolicyKind,
    cylinders: Vec<Cylinder>,
    request_count: usize,
}

impl SeekSequence {
    pub(crate) fn new(policy: PolicyKind, cylinders: Vec<Cylinder>, request_count: usize) -> Self {
        Self {
            policy,
            cylinders,
            request_count,
        }
    }

    /// Policy that produced this sequence
    pub fn policy(&self) -> PolicyKind {
        self.policy
    }

    /// Visited cylinders, starting with the initial head position
    pub fn as_slice(&self) -> &[Cylinder] {
        &self.cylinders
    }

    /// Consume the sequence and return the visited cylinders
    pub fn into_vec(self) -> Vec<Cylinder> {
        self.cylinders
    }

    /// Starting head position
    pub fn initial(&self) -> Cylinder {
        self.cylinders[0]
    }

    /// Where the head rests once every request is serviced
    pub fn final_position(&self) -> Cylinder {
        self.cylinders[self.cylinders.len() - 1]
    }

    /// Number of entries, including the initial position
    pub fn len(&self) -> usize {
        self.cylinders.len()
    }

    /// Always false: a sequence holds at least the initial position
    pub fn is_empty(&self) -> bool {
        self.cylinders.is_empty()
    }

    /// Number of requests that were scheduled
    pub fn request_count(&self) -> usize {
        self.request_count
    }

    /// Number of boundary cylinders the policy inserted
    pub fn boundary_insertions(&self) -> usize {
        self.cylinders.len() - 1 - self.request_count
    }

    /// Total and average head movement
    pub fn movement(&self) -> Result<Movement> {
        compute_cost(&self.cylinders, self.request_count)
    }

    /// Movement summary with the average left empty for zero requests
    pub fn summary(&self) -> CostSummary {
        CostSummary::from_sequence(&self.cylinders, self.request_count)
    }

    /// Step-by-step head moves over this sequence
    pub fn steps(&self) -> Playback<'_> {
        Playback::new(&self.cylinders)
    }
}

impl AsRef<[Cylinder]> for SeekSequence {
    fn as_ref(&self) -> &[Cylinder] {
        &self.cylinders
    }
}
