//! Tic-tac-toe rule engine and round/session state machine.
//!
//! The core of a two-player N×N grid game (default 3×3) with a
//! human-vs-CPU and a human-vs-human mode and score tracking across
//! rounds. Rendering is out of scope: the session pushes
//! [`SessionEvent`]s over a channel and an external renderer forwards
//! user intents back in, either directly or through the
//! [`SessionDriver`] command queue.
//!
//! # Architecture
//!
//! - **Board/rules**: flat cell grid, size-parametric winning lines,
//!   win/tie detection
//! - **Turn**: move validation and application
//! - **Cpu**: uniform-random move policy
//! - **Round**: result, seat↔mark assignment, winner-leads rule
//! - **Score**: per-seat counters surviving round transitions
//! - **Session**: the orchestrator owning all state
//! - **Driver**: single-threaded command loop with the delayed,
//!   cancellable CPU move
//!
//! # Example
//!
//! ```
//! use tictactoe_rounds::{GameMode, GameSession, Mark, PlayerSlot};
//! use tokio::sync::mpsc;
//!
//! let (events, _rx) = mpsc::unbounded_channel();
//! let mut session = GameSession::new(events);
//! session.configure(Mark::X, GameMode::Multiplayer).unwrap();
//! session.start();
//! session.submit_move(4, PlayerSlot::One).unwrap();
//! assert_eq!(session.current_turn(), Mark::O);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod config;
mod cpu;
mod driver;
mod error;
mod events;
mod round;
mod rules;
mod score;
mod session;
mod turn;

pub use board::{Board, Mark, Square};
pub use config::{GameMode, SessionConfig};
pub use cpu::CpuPlayer;
pub use driver::{CPU_MOVE_DELAY, SessionCommand, SessionDriver};
pub use error::{ConfigError, MoveError, NoEmptyCells};
pub use events::SessionEvent;
pub use round::{RoundResult, SeatAssignment, prepare_next_round};
pub use rules::{WinningLines, check_winner};
pub use score::{PlayerSlot, Score, ScoreTracker};
pub use session::GameSession;
pub use turn::apply_move;
