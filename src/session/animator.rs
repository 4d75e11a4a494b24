//! Drives a single breathing phase.

use std::io::Write;
use std::time::Duration;

use tokio::time::sleep;

use crate::cancel::CancelToken;
use crate::display::renderer::Renderer;

/// Sweep `frames` across `seconds`, holding each frame for an equal
/// share of the phase and overwriting the previous one in place.
///
/// The token is checked before each frame and the per-frame sleep races
/// against it, so no further frames appear once cancellation lands.
/// Zero-duration phases are skipped by the caller; this is never
/// invoked for them.
pub async fn animate_phase<W: Write>(
    renderer: &mut Renderer<W>,
    label: &str,
    seconds: u64,
    frames: &[&str],
    cancel: &CancelToken,
) {
    if frames.is_empty() {
        return;
    }
    let frame_time = Duration::from_millis(seconds * 1000 / frames.len() as u64);
    for frame in frames {
        if cancel.is_cancelled() {
            break;
        }
        renderer.render_frame(label, frame);
        tokio::select! {
            () = sleep(frame_time) => {}
            () = cancel.cancelled() => break,
        }
    }
    renderer.finish_phase();
}
