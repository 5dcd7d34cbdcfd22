use headway_core::{Cylinder, DiskGeometry};
use tracing::debug;

/// Disk scheduling policy trait
pub trait SchedulingPolicy: Send + Sync {
    /// Order `requests` for a head starting at `initial`.
    ///
    /// The returned sequence starts with `initial`. Inputs are assumed to be
    /// validated against `geometry`.
    fn schedule(
        &self,
        requests: &[Cylinder],
        initial: Cylinder,
        geometry: &DiskGeometry,
    ) -> Vec<Cylinder>;

    /// Name of the policy
    fn name(&self) -> &str;
}

/// Requests on either side of the head, both sorted ascending
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadSplit {
    /// Requests strictly below the head
    pub below: Vec<Cylinder>,
    /// Requests at or above the head
    pub at_or_above: Vec<Cylinder>,
}

/// Sort a private copy of `requests` and split it around `initial`
pub fn split_at_head(requests: &[Cylinder], initial: Cylinder) -> HeadSplit {
    let mut sorted = requests.to_vec();
    sorted.sort_unstable();

    let pivot = sorted.partition_point(|&c| c < initial);
    let at_or_above = sorted.split_off(pivot);

    HeadSplit {
        below: sorted,
        at_or_above,
    }
}

/// New sequence holding only the head position, sized for `stops` more entries
fn start_at(initial: Cylinder, stops: usize) -> Vec<Cylinder> {
    let mut sequence = Vec::with_capacity(stops + 1);
    sequence.push(initial);
    sequence
}

/// First-come-first-served: requests in the order supplied
pub struct Fcfs;

impl SchedulingPolicy for Fcfs {
    fn schedule(
        &self,
        requests: &[Cylinder],
        initial: Cylinder,
        _geometry: &DiskGeometry,
    ) -> Vec<Cylinder> {
        let mut sequence = start_at(initial, requests.len());
        sequence.extend_from_slice(requests);
        sequence
    }

    fn name(&self) -> &str {
        "FCFS"
    }
}

/// Shortest-seek-time-first: greedy nearest request.
///
/// On equal distance the earliest remaining request wins.
pub struct Sstf;

impl SchedulingPolicy for Sstf {
    fn schedule(
        &self,
        requests: &[Cylinder],
        initial: Cylinder,
        _geometry: &DiskGeometry,
    ) -> Vec<Cylinder> {
        let mut sequence = start_at(initial, requests.len());
        let mut remaining = requests.to_vec();
        let mut current = initial;

        // min_by_key keeps the first of several equal minima
        while let Some((idx, distance)) = remaining
            .iter()
            .enumerate()
            .map(|(i, &c)| (i, c.abs_diff(current)))
            .min_by_key(|&(_, distance)| distance)
        {
            current = remaining.remove(idx);
            debug!(
                "SSTF picked cylinder {} (distance {}, {} left)",
                current,
                distance,
                remaining.len()
            );
            sequence.push(current);
        }

        sequence
    }

    fn name(&self) -> &str {
        "SSTF"
    }
}

/// SCAN: sweep up to the last cylinder, then reverse
pub struct Scan;

impl SchedulingPolicy for Scan {
    fn schedule(
        &self,
        requests: &[Cylinder],
        initial: Cylinder,
        geometry: &DiskGeometry,
    ) -> Vec<Cylinder> {
        let split = split_at_head(requests, initial);
        debug!(
            "SCAN from {}: {} requests above, {} below",
            initial,
            split.at_or_above.len(),
            split.below.len()
        );

        let mut sequence = start_at(initial, requests.len() + 1);
        sequence.extend(split.at_or_above);
        // The head always travels to the edge, even if a request already sits there
        sequence.push(geometry.max_cylinder());
        sequence.extend(split.below.into_iter().rev());
        sequence
    }

    fn name(&self) -> &str {
        "SCAN"
    }
}

/// Circular SCAN: sweep up to the last cylinder, jump to cylinder 0,
/// and keep ascending
pub struct CScan;

impl SchedulingPolicy for CScan {
    fn schedule(
        &self,
        requests: &[Cylinder],
        initial: Cylinder,
        geometry: &DiskGeometry,
    ) -> Vec<Cylinder> {
        let split = split_at_head(requests, initial);
        debug!(
            "CSCAN from {}: {} requests above, {} below",
            initial,
            split.at_or_above.len(),
            split.below.len()
        );

        let mut sequence = start_at(initial, requests.len() + 2);
        sequence.extend(split.at_or_above);
        sequence.push(geometry.max_cylinder());
        sequence.push(geometry.min_cylinder());
        sequence.extend(split.below);
        sequence
    }

    fn name(&self) -> &str {
        "CSCAN"
    }
}

/// LOOK: like SCAN, but reverse at the last request instead of the edge
pub struct Look;

impl SchedulingPolicy for Look {
    fn schedule(
        &self,
        requests: &[Cylinder],
        initial: Cylinder,
        _geometry: &DiskGeometry,
    ) -> Vec<Cylinder> {
        let split = split_at_head(requests, initial);
        debug!(
            "LOOK from {}: {} requests above, {} below",
            initial,
            split.at_or_above.len(),
            split.below.len()
        );

        let mut sequence = start_at(initial, requests.len());
        sequence.extend(split.at_or_above);
        sequence.extend(split.below.into_iter().rev());
        sequence
    }

    fn name(&self) -> &str {
        "LOOK"
    }
}

/// Circular LOOK: after the highest request, jump to the lowest pending one
pub struct CLook;

impl SchedulingPolicy for CLook {
    fn schedule(
        &self,
        requests: &[Cylinder],
        initial: Cylinder,
        _geometry: &DiskGeometry,
    ) -> Vec<Cylinder> {
        let split = split_at_head(requests, initial);
        debug!(
            "CLOOK from {}: {} requests above, {} below",
            initial,
            split.at_or_above.len(),
            split.below.len()
        );

        let mut sequence = start_at(initial, requests.len());
        sequence.extend(split.at_or_above);
        sequence.extend(split.below);
        sequence
    }

    fn name(&self) -> &str {
        "CLOOK"
    }
}
