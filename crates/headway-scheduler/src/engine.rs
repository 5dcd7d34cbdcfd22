use crate::cost::CostSummary;
use crate::types::{PolicyKind, SeekSequence};
use crate::Result;
use headway_core::{validate_input, validate_values, Cylinder, DiskGeometry, ValidatedInput};
use serde::Serialize;
use tracing::{debug, info};

/// Configuration for the seek engine
#[derive(Debug, Clone, Copy, Default)]
pub struct EngineConfig {
    /// Disk used both to validate input and to place boundary stops
    pub geometry: DiskGeometry,
}

impl EngineConfig {
    /// Engine configuration for a disk of `disk_size` cylinders
    pub fn with_disk_size(disk_size: i64) -> Result<Self> {
        Ok(Self {
            geometry: DiskGeometry::new(disk_size)?,
        })
    }
}

/// Run `kind` over validated input
pub fn schedule(kind: PolicyKind, input: &ValidatedInput, geometry: &DiskGeometry) -> SeekSequence {
    let cylinders = kind
        .policy()
        .schedule(&input.requests, input.initial, geometry);

    info!(
        policy = %kind,
        requests = input.requests.len(),
        stops = cylinders.len(),
        initial = input.initial,
        "Computed seek sequence"
    );

    SeekSequence::new(kind, cylinders, input.requests.len())
}

/// Compute the seek sequence for `policy_name`.
///
/// Fails with `UnknownPolicy` for an unrecognised name and with a
/// validation error when any address lies outside `[0, disk_size)`.
pub fn compute_sequence(
    policy_name: &str,
    requests: &[i64],
    initial: i64,
    disk_size: i64,
) -> Result<SeekSequence> {
    let geometry = DiskGeometry::new(disk_size)?;
    let kind: PolicyKind = policy_name.parse()?;
    let input = validate_values(requests, initial, &geometry)?;

    Ok(schedule(kind, &input, &geometry))
}

/// Result of one policy run, ready for presentation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeekReport {
    pub policy: PolicyKind,
    pub disk_size: u32,
    pub initial: Cylinder,
    pub requests: Vec<Cylinder>,
    pub sequence: Vec<Cylinder>,
    pub cost: CostSummary,
}

impl SeekReport {
    /// Build a report from a computed sequence
    pub fn new(input: &ValidatedInput, sequence: SeekSequence, geometry: &DiskGeometry) -> Self {
        let cost = sequence.summary();
        Self {
            policy: sequence.policy(),
            disk_size: geometry.size(),
            initial: input.initial,
            requests: input.requests.clone(),
            sequence: sequence.into_vec(),
            cost,
        }
    }

    /// Sequence rendered as `53 → 65 → 67`
    pub fn path(&self) -> String {
        self.sequence
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" → ")
    }
}

/// Stateless planner that keeps validation and scheduling on one disk size
#[derive(Debug, Clone, Default)]
pub struct SeekEngine {
    config: EngineConfig,
}

impl SeekEngine {
    /// Create a new engine
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Disk this engine validates against
    pub fn geometry(&self) -> &DiskGeometry {
        &self.config.geometry
    }

    /// Validate raw input: a comma separated request list and a head position
    pub fn validate(&self, raw_requests: &str, raw_initial: &str) -> Result<ValidatedInput> {
        let input = validate_input(raw_requests, raw_initial, &self.config.geometry)?;
        debug!(
            "Validated {} requests, head at {}",
            input.requests.len(),
            input.initial
        );
        Ok(input)
    }

    /// Schedule validated input under `kind` and summarise the cost
    pub fn run(&self, kind: PolicyKind, input: &ValidatedInput) -> SeekReport {
        let sequence = schedule(kind, input, &self.config.geometry);
        SeekReport::new(input, sequence, &self.config.geometry)
    }

    /// Parse, validate, schedule and cost raw input in one call
    pub fn plan(&self, policy_name: &str, raw_requests: &str, raw_initial: &str) -> Result<SeekReport> {
        let kind: PolicyKind = policy_name.parse()?;
        let input = self.validate(raw_requests, raw_initial)?;
        Ok(self.run(kind, &input))
    }

    /// Run every policy over the same input, in canonical order
    pub fn compare(&self, raw_requests: &str, raw_initial: &str) -> Result<Vec<SeekReport>> {
        let input = self.validate(raw_requests, raw_initial)?;
        Ok(PolicyKind::ALL
            .iter()
            .map(|&kind| self.run(kind, &input))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::compute_cost;
    use crate::SchedulerError;
    use headway_core::HeadwayError;

    const REQUESTS: [i64; 8] = [98, 183, 37, 122, 14, 124, 65, 67];

    fn run(policy: &str) -> SeekSequence {
        compute_sequence(policy, &REQUESTS, 53, 200).unwrap()
    }

    #[test]
    fn test_compute_sequence_examples() {
        assert_eq!(
            run("SSTF").as_slice(),
            &[53, 65, 67, 37, 14, 98, 122, 124, 183]
        );
        assert_eq!(
            run("SCAN").as_slice(),
            &[53, 65, 67, 98, 122, 124, 183, 199, 37, 14]
        );
        assert_eq!(
            run("FCFS").as_slice(),
            &[53, 98, 183, 37, 122, 14, 124, 65, 67]
        );
    }

    #[test]
    fn test_total_movement_per_policy() {
        let expected = [
            ("FCFS", 640),
            ("SSTF", 236),
            ("SCAN", 331),
            ("CSCAN", 382),
            ("LOOK", 299),
            ("CLOOK", 322),
        ];

        for (policy, total) in expected {
            let movement = run(policy).movement().unwrap();
            assert_eq!(movement.total, total, "{}", policy);
        }
    }

    #[test]
    fn test_average_movement() {
        let sstf = run("SSTF");
        let movement = compute_cost(sstf.as_slice(), REQUESTS.len()).unwrap();
        assert_eq!(movement.average, 29.5);

        assert_eq!(run("FCFS").movement().unwrap().average, 80.0);
    }

    #[test]
    fn test_every_policy_starts_at_head() {
        for kind in PolicyKind::ALL {
            let seq = compute_sequence(kind.as_str(), &REQUESTS, 53, 200).unwrap();
            assert_eq!(seq.initial(), 53, "{}", kind);
            assert_eq!(seq.policy(), kind);
        }
    }

    #[test]
    fn test_boundary_cylinders_per_policy() {
        for kind in PolicyKind::ALL {
            let seq = run(kind.as_str());
            let has_top = seq.as_slice().contains(&199);
            let has_zero = seq.as_slice().contains(&0);
            match kind {
                PolicyKind::Scan => assert!(has_top && !has_zero),
                PolicyKind::CScan => assert!(has_top && has_zero),
                _ => assert!(!has_top && !has_zero, "{}", kind),
            }
        }
        assert_eq!(run("SCAN").boundary_insertions(), 1);
        assert_eq!(run("CSCAN").boundary_insertions(), 2);
        assert_eq!(run("LOOK").boundary_insertions(), 0);
    }

    #[test]
    fn test_fcfs_tail_equals_requests() {
        let seq = run("FCFS");
        let tail: Vec<i64> = seq.as_slice()[1..].iter().map(|&c| i64::from(c)).collect();
        assert_eq!(tail, REQUESTS.to_vec());
    }

    #[test]
    fn test_compute_sequence_range_errors() {
        let err = compute_sequence("FCFS", &[-1], 53, 200).unwrap_err();
        assert!(matches!(
            err,
            SchedulerError::Input(HeadwayError::RangeError { ref value, .. }) if value == "-1"
        ));

        let err = compute_sequence("FCFS", &[10], 200, 200).unwrap_err();
        assert!(matches!(
            err,
            SchedulerError::Input(HeadwayError::RangeError { ref value, .. }) if value == "200"
        ));
    }

    #[test]
    fn test_compute_sequence_unknown_policy() {
        let err = compute_sequence("ELEVATOR", &REQUESTS, 53, 200).unwrap_err();
        assert!(matches!(err, SchedulerError::UnknownPolicy { .. }));
    }

    #[test]
    fn test_compute_sequence_invalid_disk_size() {
        let err = compute_sequence("FCFS", &[], 0, 0).unwrap_err();
        assert!(matches!(
            err,
            SchedulerError::Input(HeadwayError::InvalidDiskSize { .. })
        ));
    }

    #[test]
    fn test_engine_plan() {
        let engine = SeekEngine::new(EngineConfig::with_disk_size(200).unwrap());
        let report = engine
            .plan("sstf", "98, 183, 37, 122, 14, 124, 65, 67", "53")
            .unwrap();

        assert_eq!(report.policy, PolicyKind::Sstf);
        assert_eq!(report.disk_size, 200);
        assert_eq!(report.cost.total, 236);
        assert_eq!(report.cost.average, Some(29.5));
        assert_eq!(report.path(), "53 → 65 → 67 → 37 → 14 → 98 → 122 → 124 → 183");
    }

    #[test]
    fn test_engine_plan_parse_error() {
        let engine = SeekEngine::default();
        let err = engine.plan("FCFS", "98,x", "53").unwrap_err();
        assert!(matches!(
            err,
            SchedulerError::Input(HeadwayError::ParseError { .. })
        ));
    }

    #[test]
    fn test_engine_plan_empty_requests() {
        let engine = SeekEngine::default();
        let report = engine.plan("CSCAN", "", "500").unwrap();

        assert_eq!(report.sequence, vec![500, 999, 0]);
        assert_eq!(report.cost.total, 1498);
        assert_eq!(report.cost.average, None);
    }

    #[test]
    fn test_engine_compare() {
        let engine = SeekEngine::new(EngineConfig::with_disk_size(200).unwrap());
        let reports = engine
            .compare("98,183,37,122,14,124,65,67", "53")
            .unwrap();

        let policies: Vec<PolicyKind> = reports.iter().map(|r| r.policy).collect();
        assert_eq!(policies, PolicyKind::ALL.to_vec());

        let totals: Vec<u64> = reports.iter().map(|r| r.cost.total).collect();
        assert_eq!(totals, vec![640, 236, 331, 382, 299, 322]);
    }

    #[test]
    fn test_report_serializes() {
        let engine = SeekEngine::new(EngineConfig::with_disk_size(200).unwrap());
        let report = engine.plan("LOOK", "65,14", "53").unwrap();

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["policy"], "LOOK");
        assert_eq!(json["sequence"], serde_json::json!([53, 65, 14]));
        assert_eq!(json["cost"]["total"], 63);
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_engine_types_are_send_sync() {
        assert_send_sync::<SeekSequence>();
        assert_send_sync::<SeekEngine>();
        assert_send_sync::<SeekReport>();
        assert_send_sync::<Box<dyn crate::SchedulingPolicy>>();
    }

    #[test]
    fn test_concurrent_callers_get_identical_results() {
        let engine = SeekEngine::new(EngineConfig::with_disk_size(200).unwrap());
        let expected: Vec<SeekSequence> = PolicyKind::ALL.iter().map(|k| run(k.as_str())).collect();

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    scope.spawn(|| {
                        let sequences: Vec<SeekSequence> =
                            PolicyKind::ALL.iter().map(|k| run(k.as_str())).collect();
                        let reports = engine.compare("98,183,37,122,14,124,65,67", "53").unwrap();
                        (sequences, reports)
                    })
                })
                .collect();

            for handle in handles {
                let (sequences, reports) = handle.join().unwrap();
                assert_eq!(sequences, expected);
                let totals: Vec<u64> = reports.iter().map(|r| r.cost.total).collect();
                assert_eq!(totals, vec![640, 236, 331, 382, 299, 322]);
            }
        });
    }

    #[test]
    fn test_compute_sequence_is_deterministic() {
        assert_eq!(run("SSTF"), run("SSTF"));
        assert_eq!(run("CLOOK"), run("CLOOK"));
    }
}
