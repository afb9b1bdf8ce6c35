use crate::error::{DropletError, Result};
use notify_rust::Notification;

/// Best-effort desktop notification. Callers treat failure as a warning,
/// not an error; a missing notification daemon must not fail an upload
/// that already completed.
pub fn send(body: &str) -> Result<()> {
    Notification::new()
        .summary("Droplet")
        .body(body)
        .show()
        .map(|_| ())
        .map_err(|e| DropletError::Notification(e.to_string()))
}
