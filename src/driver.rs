//! Single-threaded session driver.
//!
//! The driver owns the [`GameSession`] and processes renderer intents
//! one at a time from an mpsc queue, so there is never more than one
//! mutation in flight. The cosmetic CPU delay is the only asynchrony: a
//! spawned task sleeps and then feeds a [`SessionCommand::CpuMove`]
//! stamped with the round id back into the same queue. The session
//! drops the command if the round it was scheduled for is gone.

use crate::session::GameSession;
use crate::board::Mark;
use crate::config::GameMode;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

/// Cosmetic pause before a scheduled CPU move is applied.
pub const CPU_MOVE_DELAY: Duration = Duration::from_millis(500);

/// Renderer intents forwarded into the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    /// Choose mark and opponent on the menu screen.
    Configure {
        /// Mark for the seat-one human.
        human_mark: Mark,
        /// Opponent type.
        mode: GameMode,
    },
    /// Start the session.
    Start,
    /// A cell was clicked.
    CellClick(usize),
    /// The reset button was pressed; confirmation pending.
    RequestReset,
    /// The reset was confirmed.
    ConfirmReset,
    /// Continue to the next round after a result.
    NextRound,
    /// Quit to the menu, zeroing scores.
    Quit,
    /// A scheduled CPU move fired. Internal; stamped with the round it
    /// was scheduled for.
    CpuMove {
        /// Round the move belongs to.
        round_id: u64,
    },
}

/// Drives a session from a command queue.
pub struct SessionDriver {
    session: GameSession,
    commands: mpsc::UnboundedReceiver<SessionCommand>,
    // Weak so the queue closes once all renderer handles are dropped.
    feedback: mpsc::WeakUnboundedSender<SessionCommand>,
    cpu_delay: Duration,
    // Round id of the CPU move currently in flight, if any.
    scheduled: Option<u64>,
}

impl SessionDriver {
    /// Creates a driver and the command handle the renderer sends on.
    pub fn new(
        session: GameSession,
        cpu_delay: Duration,
    ) -> (Self, mpsc::UnboundedSender<SessionCommand>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let driver = Self {
            session,
            commands: rx,
            feedback: tx.downgrade(),
            cpu_delay,
            scheduled: None,
        };
        (driver, tx)
    }

    /// Runs until every command handle is dropped.
    #[instrument(skip(self))]
    pub async fn run(mut self) {
        info!("Session driver running");
        while let Some(command) = self.commands.recv().await {
            self.apply(command);
        }
        info!("Session driver stopped");
    }

    /// Applies one command to completion, then schedules a CPU move if
    /// the session is now waiting on one.
    fn apply(&mut self, command: SessionCommand) {
        debug!(?command, "Applying command");
        match command {
            SessionCommand::Configure { human_mark, mode } => {
                if let Err(err) = self.session.configure(human_mark, mode) {
                    debug!(%err, "Configure rejected");
                }
            }
            SessionCommand::Start => self.session.start(),
            SessionCommand::CellClick(position) => {
                if let Err(err) = self.session.handle_cell_click(position) {
                    debug!(position, %err, "Click rejected");
                }
            }
            SessionCommand::RequestReset => self.session.request_reset(),
            SessionCommand::ConfirmReset => self.session.confirm_reset(),
            SessionCommand::NextRound => self.session.confirm_next_round(),
            SessionCommand::Quit => self.session.quit(),
            SessionCommand::CpuMove { round_id } => {
                if self.scheduled == Some(round_id) {
                    self.scheduled = None;
                }
                self.session.apply_cpu_move(round_id);
            }
        }
        self.maybe_schedule_cpu();
    }

    /// Spawns the delayed CPU move unless one for this round is already
    /// in flight.
    fn maybe_schedule_cpu(&mut self) {
        let Some(round_id) = self.session.cpu_turn_pending() else {
            return;
        };
        if self.scheduled == Some(round_id) {
            return;
        }
        let Some(tx) = self.feedback.upgrade() else {
            return;
        };
        let delay = self.cpu_delay;
        self.scheduled = Some(round_id);
        debug!(round_id, ?delay, "Scheduling CPU move");
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(SessionCommand::CpuMove { round_id });
        });
    }

    /// Read access to the owned session, for embedding renderers that
    /// poll state between commands.
    pub fn session(&self) -> &GameSession {
        &self.session
    }
}
