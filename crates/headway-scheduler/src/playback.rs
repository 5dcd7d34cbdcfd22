use headway_core::Cylinder;
use serde::Serialize;
use std::fmt;

/// Direction of a single head move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Towards higher cylinders
    Up,
    /// Towards lower cylinders
    Down,
    /// No movement
    Hold,
}

impl Direction {
    fn between(from: Cylinder, to: Cylinder) -> Self {
        match to.cmp(&from) {
            std::cmp::Ordering::Greater => Direction::Up,
            std::cmp::Ordering::Less => Direction::Down,
            std::cmp::Ordering::Equal => Direction::Hold,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "→"),
            Direction::Down => write!(f, "←"),
            Direction::Hold => write!(f, "-"),
        }
    }
}

/// One head move between two consecutive stops
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeadStep {
    /// 1-based position of `to` in the sequence
    pub index: usize,
    pub from: Cylinder,
    pub to: Cylinder,
    pub direction: Direction,
    /// Cylinders crossed by this move
    pub distance: u64,
    /// Cylinders crossed so far, this move included
    pub travelled: u64,
}

/// Iterator over the moves of an already computed sequence.
///
/// Carries no timing; pacing is left to whoever renders the steps.
#[derive(Debug, Clone)]
pub struct Playback<'a> {
    sequence: &'a [Cylinder],
    next: usize,
    travelled: u64,
}

impl<'a> Playback<'a> {
    pub fn new(sequence: &'a [Cylinder]) -> Self {
        Self {
            sequence,
            next: 1,
            travelled: 0,
        }
    }
}

impl Iterator for Playback<'_> {
    type Item = HeadStep;

    fn next(&mut self) -> Option<HeadStep> {
        let to = *self.sequence.get(self.next)?;
        let from = self.sequence[self.next - 1];
        let distance = u64::from(from.abs_diff(to));
        self.travelled += distance;

        let step = HeadStep {
            index: self.next,
            from,
            to,
            direction: Direction::between(from, to),
            distance,
            travelled: self.travelled,
        };
        self.next += 1;
        Some(step)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.sequence.len().saturating_sub(self.next);
        (left, Some(left))
    }
}

impl ExactSizeIterator for Playback<'_> {}
