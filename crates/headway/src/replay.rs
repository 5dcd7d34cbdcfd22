use crate::render::{render_step, render_track, TRACK_WIDTH};
use headway_core::DiskGeometry;
use headway_scheduler::{Playback, SeekReport};
use std::io::Write;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Configuration for paced replay
#[derive(Debug, Clone)]
pub struct ReplayConfig {
    /// Pause before each head move is shown
    pub step_delay: Duration,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            step_delay: Duration::from_millis(1000),
        }
    }
}

/// Print the head moves of `report` one at a time.
///
/// Returns the number of moves shown, which is less than the full
/// sequence if `token` is cancelled part way through.
pub async fn replay<W: Write>(
    report: &SeekReport,
    geometry: &DiskGeometry,
    config: &ReplayConfig,
    token: &CancellationToken,
    out: &mut W,
) -> miette::Result<usize> {
    let write_err = |e: std::io::Error| miette::miette!("Failed to write replay output: {}", e);

    let Some(&initial) = report.sequence.first() else {
        return Ok(0);
    };

    writeln!(
        out,
        "Replaying {} over {} cylinders (step delay: {:?})",
        report.policy, report.disk_size, config.step_delay
    )
    .map_err(write_err)?;
    writeln!(
        out,
        "  0. {:>5} start {:<13} |{}|",
        initial,
        "",
        render_track(initial, geometry, TRACK_WIDTH)
    )
    .map_err(write_err)?;

    let mut shown = 0;
    for step in Playback::new(&report.sequence) {
        tokio::select! {
            _ = token.cancelled() => {
                info!("Replay cancelled after {} of {} moves", shown, report.sequence.len() - 1);
                return Ok(shown);
            }
            _ = tokio::time::sleep(config.step_delay) => {
                writeln!(out, "{}", render_step(&step, geometry)).map_err(write_err)?;
                out.flush().map_err(write_err)?;
                shown += 1;
            }
        }
    }

    writeln!(out, "{}", report.cost).map_err(write_err)?;
    Ok(shown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use headway_scheduler::{EngineConfig, SeekEngine};

    fn report() -> (SeekReport, DiskGeometry) {
        let engine = SeekEngine::new(EngineConfig::with_disk_size(200).unwrap());
        let report = engine.plan("SCAN", "98,37,183", "53").unwrap();
        (report, *engine.geometry())
    }

    fn immediate() -> ReplayConfig {
        ReplayConfig {
            step_delay: Duration::ZERO,
        }
    }

    #[test]
    fn test_default_delay() {
        assert_eq!(ReplayConfig::default().step_delay, Duration::from_secs(1));
    }

    #[tokio::test]
    async fn test_replay_shows_every_move() {
        let (report, geometry) = report();
        let mut out = Vec::new();

        let shown = replay(&report, &geometry, &immediate(), &CancellationToken::new(), &mut out)
            .await
            .unwrap();

        // 53 -> 98 -> 183 -> 199 -> 37
        assert_eq!(shown, 4);
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Replaying SCAN over 200 cylinders"));
        assert!(text.contains("183 → 199"));
        assert!(text.contains("199 ← 37"));
        assert!(text.contains("Total Head Movement: 308 cylinders"));
    }

    #[tokio::test]
    async fn test_replay_stops_when_cancelled() {
        let (report, geometry) = report();
        let token = CancellationToken::new();
        token.cancel();
        let config = ReplayConfig {
            step_delay: Duration::from_secs(60),
        };
        let mut out = Vec::new();

        let shown = replay(&report, &geometry, &config, &token, &mut out)
            .await
            .unwrap();

        assert_eq!(shown, 0);
        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains("Total Head Movement"));
    }
}
