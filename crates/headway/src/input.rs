use std::path::Path;
use tracing::debug;

/// Collect the raw request list from the command line or a file.
///
/// No requests at all is a valid, empty request set.
pub fn read_requests(inline: Option<&str>, file: Option<&Path>) -> miette::Result<String> {
    match (inline, file) {
        (Some(raw), _) => Ok(raw.to_string()),
        (None, Some(path)) => {
            let raw = std::fs::read_to_string(path).map_err(|e| {
                miette::miette!("Failed to read requests from '{}': {}", path.display(), e)
            })?;
            debug!("Read {} bytes of requests from {}", raw.len(), path.display());
            Ok(raw)
        }
        (None, None) => Ok(String::new()),
    }
}
