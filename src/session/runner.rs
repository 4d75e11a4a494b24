//! The session loop: quote, header, then breath cycles until the
//! configured duration elapses or the user interrupts.

use std::io::Write;
use std::time::Duration;

use tokio::time::{Instant, sleep};

use super::animator::animate_phase;
use crate::cancel::CancelToken;
use crate::catalog::{self, Phase};
use crate::config::SessionConfig;
use crate::display::renderer::Renderer;

/// How long the startup quote stays on screen before the exercise.
const REFLECT_PAUSE: Duration = Duration::from_secs(5);

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The configured duration elapsed.
    Completed,
    /// The user pressed Ctrl+C.
    Interrupted,
}

/// Run one breathing session to completion or cancellation.
///
/// The elapsed-time check runs once per completed cycle, never
/// mid-phase, so a session may overshoot its duration by up to one
/// phase before noticing.
pub async fn run_session<W: Write>(
    config: &SessionConfig,
    renderer: &mut Renderer<W>,
    cancel: &CancelToken,
) -> SessionOutcome {
    renderer.clear();
    renderer.render_quote(catalog::random_quote());
    tokio::select! {
        () = sleep(REFLECT_PAUSE) => {}
        () = cancel.cancelled() => return SessionOutcome::Interrupted,
    }

    renderer.clear();
    renderer.render_header(config);

    let start = Instant::now();
    let duration = Duration::from_secs(config.duration_secs);
    while start.elapsed() < duration {
        for phase in Phase::CYCLE {
            if cancel.is_cancelled() {
                return SessionOutcome::Interrupted;
            }
            let seconds = phase.seconds(config.pattern);
            if seconds == 0 {
                continue;
            }
            animate_phase(
                renderer,
                phase.label(),
                seconds,
                phase.frames(config.style),
                cancel,
            )
            .await;
        }
        if cancel.is_cancelled() {
            return SessionOutcome::Interrupted;
        }
        let remaining = config.duration_secs.saturating_sub(start.elapsed().as_secs());
        renderer.render_remaining(remaining);
    }
    SessionOutcome::Completed
}
