use std::future::Future;
use std::time::Duration;

use tokio::sync::mpsc;

use super::session::{GameSession, InputEvent, SessionEvent, SessionPhase, SessionSnapshot};
use super::types::DeathReason;

// Seam for the renderer/input collaborator: it receives a snapshot after
// every simulation step and a dedicated notification on game over.
pub trait GameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, snapshot: SessionSnapshot) -> impl Future<Output = ()> + Send;

    fn broadcast_game_over(
        &self,
        final_score: u32,
        reason: DeathReason,
    ) -> impl Future<Output = ()> + Send;
}

// Polling cadence while no game is ticking (menu, pause, game over).
const IDLE_POLL_INTERVAL: Duration = Duration::from_millis(50);

pub struct SessionRunner;

impl SessionRunner {
    // Single control thread: input is drained between ticks, so the
    // simulation never observes a direction change or resize mid-step.
    pub async fn run(
        mut session: GameSession,
        mut input_rx: mpsc::UnboundedReceiver<InputEvent>,
        broadcaster: impl GameBroadcaster,
    ) {
        loop {
            let wait = match session.phase() {
                SessionPhase::Running => {
                    session.tick_interval().unwrap_or(IDLE_POLL_INTERVAL)
                }
                _ => IDLE_POLL_INTERVAL,
            };

            tokio::select! {
                _ = tokio::time::sleep(wait) => {
                    for event in session.tick() {
                        if let SessionEvent::GameOver { final_score, reason } = event {
                            broadcaster.broadcast_game_over(final_score, reason).await;
                        }
                    }
                    broadcaster.broadcast_state(session.snapshot()).await;
                }
                command = input_rx.recv() => {
                    match command {
                        Some(event) => {
                            session.handle_input(event);
                            if session.quit_requested() {
                                break;
                            }
                        }
                        // Input side hung up; nothing can reach us anymore.
                        None => break,
                    }
                }
            }
        }
    }
}
