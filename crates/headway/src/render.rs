use clap::ValueEnum;
use headway_core::{Cylinder, DiskGeometry};
use headway_scheduler::{HeadStep, SeekReport};

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

/// Width of the ASCII track drawn during replay
pub const TRACK_WIDTH: usize = 50;

/// Render a single report
pub fn render_report(report: &SeekReport, format: OutputFormat) -> miette::Result<String> {
    match format {
        OutputFormat::Text => Ok(report_text(report)),
        OutputFormat::Json => Ok(headway_core::to_json_pretty(report)?),
        OutputFormat::Yaml => Ok(headway_core::to_yaml(report)?),
    }
}

/// Render the reports of a policy comparison
pub fn render_comparison(reports: &[SeekReport], format: OutputFormat) -> miette::Result<String> {
    match format {
        OutputFormat::Text => Ok(comparison_table(reports)),
        OutputFormat::Json => Ok(headway_core::to_json_pretty(&reports)?),
        OutputFormat::Yaml => Ok(headway_core::to_yaml(&reports)?),
    }
}

fn report_text(report: &SeekReport) -> String {
    format!(
        "Policy: {} (disk: {} cylinders)\nSeek Sequence: {}\n{}",
        report.policy,
        report.disk_size,
        report.path(),
        report.cost
    )
}

fn comparison_table(reports: &[SeekReport]) -> String {
    let mut lines = vec![format!(
        "{:<6} {:>8} {:>8}  {}",
        "POLICY", "TOTAL", "AVERAGE", "SEQUENCE"
    )];

    for report in reports {
        lines.push(format!(
            "{:<6} {:>8} {:>8}  {}",
            report.policy.as_str(),
            report.cost.total,
            report.cost.average_display(),
            report.path()
        ));
    }

    lines.join("\n")
}

/// Draw the disk as a bar with the head marked by `^`
pub fn render_track(position: Cylinder, geometry: &DiskGeometry, width: usize) -> String {
    let width = width.max(2);
    let max = u64::from(geometry.max_cylinder());
    let column = if max == 0 {
        0
    } else {
        (u64::from(position.min(geometry.max_cylinder())) * (width as u64 - 1) / max) as usize
    };

    (0..width)
        .map(|i| if i == column { '^' } else { '-' })
        .collect()
}

/// One replay line for a head move
pub fn render_step(step: &HeadStep, geometry: &DiskGeometry) -> String {
    format!(
        "{:>3}. {:>5} {} {:<5} +{:<5} total {:<7} |{}|",
        step.index,
        step.from,
        step.direction,
        step.to,
        step.distance,
        step.travelled,
        render_track(step.to, geometry, TRACK_WIDTH)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use headway_scheduler::{EngineConfig, Playback, PolicyKind, SeekEngine};

    fn engine() -> SeekEngine {
        SeekEngine::new(EngineConfig::with_disk_size(200).unwrap())
    }

    #[test]
    fn test_report_text() {
        let report = engine().plan("FCFS", "98,183,37,122,14,124,65,67", "53").unwrap();
        let text = render_report(&report, OutputFormat::Text).unwrap();

        assert!(text.contains("Policy: FCFS (disk: 200 cylinders)"));
        assert!(text.contains("Seek Sequence: 53 → 98 → 183"));
        assert!(text.contains(
            "Total Head Movement: 640 cylinders | Average Head Movement: 80.00 cylinders"
        ));
    }

    #[test]
    fn test_report_json_and_yaml() {
        let report = engine().plan("CLOOK", "65,14", "53").unwrap();

        let json = render_report(&report, OutputFormat::Json).unwrap();
        assert!(json.contains("\"policy\": \"CLOOK\""));

        let yaml = render_report(&report, OutputFormat::Yaml).unwrap();
        assert!(yaml.contains("policy: CLOOK"));
    }

    #[test]
    fn test_comparison_table() {
        let reports = engine().compare("98,183,37,122,14,124,65,67", "53").unwrap();
        let table = render_comparison(&reports, OutputFormat::Text).unwrap();
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 1 + PolicyKind::ALL.len());
        assert!(lines[0].starts_with("POLICY"));
        assert!(lines[2].starts_with("SSTF"));
        assert!(lines[2].contains("236"));
        assert!(lines[2].contains("29.50"));
    }

    #[test]
    fn test_comparison_without_requests_shows_na() {
        let reports = engine().compare("", "53").unwrap();
        let table = render_comparison(&reports, OutputFormat::Text).unwrap();
        assert!(table.lines().skip(1).all(|line| line.contains("N/A")));
    }

    #[test]
    fn test_render_track() {
        let disk = DiskGeometry::new(200).unwrap();
        assert_eq!(render_track(0, &disk, 5), "^----");
        assert_eq!(render_track(199, &disk, 5), "----^");
        assert_eq!(render_track(100, &disk, 5), "--^--");
        assert_eq!(render_track(50, &disk, TRACK_WIDTH).len(), TRACK_WIDTH);
    }

    #[test]
    fn test_render_track_single_cylinder_disk() {
        let disk = DiskGeometry::new(1).unwrap();
        assert_eq!(render_track(0, &disk, 3), "^--");
    }

    #[test]
    fn test_render_step() {
        let disk = DiskGeometry::new(200).unwrap();
        let step = Playback::new(&[53, 65]).next().unwrap();
        let line = render_step(&step, &disk);

        assert!(line.contains("53 → 65"));
        assert!(line.contains("+12"));
        assert!(line.ends_with('|'));
    }
}
