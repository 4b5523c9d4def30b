//! Game session orchestration.
//!
//! [`GameSession`] owns all mutable state and is the only component the
//! renderer talks to. It delegates move mechanics, win detection, CPU
//! policy, round transitions, and scoring to the leaf modules and pushes
//! outcome events back over an unbounded channel.

use crate::board::{Board, Mark};
use crate::config::{GameMode, SessionConfig};
use crate::cpu::CpuPlayer;
use crate::error::{ConfigError, MoveError};
use crate::events::SessionEvent;
use crate::round::{self, RoundResult, SeatAssignment};
use crate::rules::{self, WinningLines};
use crate::score::{PlayerSlot, Score, ScoreTracker};
use crate::turn;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// A game session spanning multiple rounds.
///
/// State mutates only in response to one call at a time; there is no
/// internal concurrency. The deferred CPU move is handled outside (see
/// [`crate::driver::SessionDriver`]) and re-validated here against the
/// round id when it finally arrives.
#[derive(Debug)]
pub struct GameSession {
    config: SessionConfig,
    started: bool,
    board: Board,
    lines: WinningLines,
    seats: SeatAssignment,
    current_turn: Mark,
    active: bool,
    result: Option<RoundResult>,
    last_first_mover: PlayerSlot,
    round_id: u64,
    scores: ScoreTracker,
    cpu: CpuPlayer,
    events: mpsc::UnboundedSender<SessionEvent>,
}

impl GameSession {
    /// Creates a session in the menu state with default configuration.
    #[instrument(skip(events))]
    pub fn new(events: mpsc::UnboundedSender<SessionEvent>) -> Self {
        Self::with_cpu_player(events, CpuPlayer::new())
    }

    /// Creates a session with a caller-supplied CPU player (seeded CPUs
    /// give deterministic games).
    #[instrument(skip(events, cpu))]
    pub fn with_cpu_player(events: mpsc::UnboundedSender<SessionEvent>, cpu: CpuPlayer) -> Self {
        let config = SessionConfig::default();
        Self {
            config,
            started: false,
            board: Board::new(config.board_size),
            lines: WinningLines::for_size(config.board_size),
            seats: SeatAssignment::new(config.human_mark),
            current_turn: Mark::X,
            active: false,
            result: None,
            last_first_mover: PlayerSlot::One,
            round_id: 0,
            scores: ScoreTracker::new(),
            cpu,
            events,
        }
    }

    /// Sets the pending configuration. Only valid before [`start`].
    ///
    /// [`start`]: GameSession::start
    #[instrument(skip(self))]
    pub fn configure(&mut self, human_mark: Mark, mode: GameMode) -> Result<(), ConfigError> {
        if self.started {
            warn!("Configuration rejected mid-session");
            return Err(ConfigError::AlreadyStarted);
        }
        self.config.human_mark = human_mark;
        self.config.mode = mode;
        info!(%human_mark, %mode, "Session configured");
        self.emit(SessionEvent::ModeConfigured { mode, human_mark });
        Ok(())
    }

    /// Sets the board side length. Only valid before [`start`]; the
    /// size is fixed for the session's lifetime.
    ///
    /// [`start`]: GameSession::start
    #[instrument(skip(self))]
    pub fn set_board_size(&mut self, board_size: usize) -> Result<(), ConfigError> {
        if self.started {
            warn!("Board size change rejected mid-session");
            return Err(ConfigError::AlreadyStarted);
        }
        self.config.board_size = board_size;
        Ok(())
    }

    /// Starts the session: builds the first round from the configuration.
    ///
    /// The seat holding X is treated as the winner of the nonexistent
    /// previous round, so the first-mover bookkeeping is well-defined
    /// from round one.
    #[instrument(skip(self))]
    pub fn start(&mut self) {
        self.lines = WinningLines::for_size(self.config.board_size);
        self.seats = SeatAssignment::new(self.config.human_mark);
        self.last_first_mover = self.seats.first_mover();
        self.scores.reset();
        self.started = true;
        info!(mode = %self.config.mode, human_mark = %self.config.human_mark, "Session started");
        self.begin_round();
        self.emit(SessionEvent::ScoreChanged { score: self.scores.snapshot() });
    }

    /// Submits a move for the given seat.
    ///
    /// Rejected without mutation when no round is active, the seat does
    /// not hold the current turn mark, or the position is out of range
    /// or occupied. Rejections are non-fatal; the caller decides whether
    /// to surface them.
    #[instrument(skip(self))]
    pub fn submit_move(&mut self, position: usize, seat: PlayerSlot) -> Result<(), MoveError> {
        if !self.active {
            return Err(MoveError::Inactive);
        }
        if self.seats.mark_of(seat) != self.current_turn {
            debug!(?seat, current = %self.current_turn, "Move out of turn");
            return Err(MoveError::OutOfTurn);
        }

        let mark = self.current_turn;
        turn::apply_move(&mut self.board, position, mark)?;
        info!(position, %mark, "Move applied");
        self.emit(SessionEvent::CellFilled { position, mark });

        self.advance_after_move(mark);
        Ok(())
    }

    /// Resolves a renderer cell click to the acting seat and submits it.
    ///
    /// In CPU mode clicks always act for the human seat (and are
    /// rejected on the CPU's turn); in multiplayer the click belongs to
    /// whichever seat holds the current mark.
    #[instrument(skip(self))]
    pub fn handle_cell_click(&mut self, position: usize) -> Result<(), MoveError> {
        if !self.active {
            return Err(MoveError::Inactive);
        }
        let seat = match self.config.mode {
            GameMode::Cpu => PlayerSlot::One,
            GameMode::Multiplayer => self.seats.slot_of(self.current_turn),
        };
        self.submit_move(position, seat)
    }

    /// Applies a scheduled CPU move if it is still current.
    ///
    /// The move is discarded when the round id no longer matches (the
    /// board was reset or the session quit while the move was pending),
    /// when the round already ended, or when no empty cell remains.
    #[instrument(skip(self))]
    pub fn apply_cpu_move(&mut self, round_id: u64) {
        if !self.active || round_id != self.round_id {
            debug!(round_id, current = self.round_id, "Discarding stale CPU move");
            return;
        }
        let position = match self.cpu.choose_move(&self.board) {
            Ok(position) => position,
            Err(err) => {
                debug!(%err, "CPU has no move");
                return;
            }
        };
        if let Err(err) = self.submit_move(position, PlayerSlot::Two) {
            warn!(position, %err, "Scheduled CPU move rejected");
        }
    }

    /// True when the CPU holds the current turn and a move should be
    /// scheduled; returns the round id to stamp on the deferred move.
    pub fn cpu_turn_pending(&self) -> Option<u64> {
        (self.active
            && self.config.mode == GameMode::Cpu
            && self.seats.mark_of(PlayerSlot::Two) == self.current_turn)
            .then_some(self.round_id)
    }

    /// Asks the renderer to confirm a mid-round reset.
    #[instrument(skip(self))]
    pub fn request_reset(&mut self) {
        self.emit(SessionEvent::ResetRequested);
    }

    /// Resets the current round, keeping scores and seat assignment.
    #[instrument(skip(self))]
    pub fn confirm_reset(&mut self) {
        info!("Round reset");
        self.begin_round();
    }

    /// Moves to the next round after a terminal result, applying the
    /// winner-leads rule, then re-arms the board.
    #[instrument(skip(self))]
    pub fn confirm_next_round(&mut self) {
        let Some(result) = self.result else {
            warn!("Next round requested while round in progress");
            return;
        };
        let (seats, leader) = round::prepare_next_round(self.seats, self.last_first_mover, result);
        if seats != self.seats {
            info!(?leader, "Marks swapped for next round");
        }
        self.seats = seats;
        self.last_first_mover = leader;
        self.begin_round();
    }

    /// Ends the session: clears the board and scores and returns to the
    /// menu state.
    #[instrument(skip(self))]
    pub fn quit(&mut self) {
        info!("Session quit");
        self.round_id += 1;
        self.board = Board::new(self.config.board_size);
        self.current_turn = Mark::X;
        self.active = false;
        self.result = None;
        self.started = false;
        self.scores.reset();
        self.emit(SessionEvent::ScoreChanged { score: self.scores.snapshot() });
        self.emit(SessionEvent::MenuRequested);
    }

    /// The live board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The mark to move.
    pub fn current_turn(&self) -> Mark {
        self.current_turn
    }

    /// Whether a round is in progress.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Terminal result of the current round, if it ended.
    pub fn result(&self) -> Option<RoundResult> {
        self.result
    }

    /// Current seat↔mark table.
    pub fn seats(&self) -> SeatAssignment {
        self.seats
    }

    /// Current configuration.
    pub fn config(&self) -> SessionConfig {
        self.config
    }

    /// Current score counters.
    pub fn score(&self) -> Score {
        self.scores.snapshot()
    }

    /// Identifier of the current round; bumped on every board reset so
    /// stale deferred moves can be recognized.
    pub fn round_id(&self) -> u64 {
        self.round_id
    }

    /// Clears the board and re-arms the round. Scores, seats, and the
    /// carried first-mover are untouched.
    fn begin_round(&mut self) {
        self.round_id += 1;
        self.board = Board::new(self.config.board_size);
        self.current_turn = Mark::X;
        self.active = true;
        self.result = None;
        debug!(round_id = self.round_id, first_mover = ?self.seats.first_mover(), "Round started");
        self.emit(SessionEvent::RoundStarted {
            to_move: self.current_turn,
            seats: self.seats,
        });
    }

    /// Checks winner first, then tie, else passes the turn.
    fn advance_after_move(&mut self, mark: Mark) {
        if let Some(winner) = rules::check_winner(&self.board, &self.lines) {
            self.finish_round(RoundResult::Win(winner));
        } else if self.board.is_full() {
            self.finish_round(RoundResult::Tie);
        } else {
            self.current_turn = mark.opponent();
            self.emit(SessionEvent::TurnChanged { mark: self.current_turn });
        }
    }

    fn finish_round(&mut self, result: RoundResult) {
        self.active = false;
        self.result = Some(result);
        match result {
            RoundResult::Win(mark) => {
                let seat = self.seats.slot_of(mark);
                info!(%mark, ?seat, "Round won");
                self.scores.record_win(seat);
            }
            RoundResult::Tie => {
                info!("Round tied");
                self.scores.record_tie();
            }
        }
        self.emit(SessionEvent::RoundEnded { result });
        self.emit(SessionEvent::ScoreChanged { score: self.scores.snapshot() });
    }

    /// Pushes an event to the renderer; a gone receiver is ignored.
    fn emit(&self, event: SessionEvent) {
        let _ = self.events.send(event);
    }
}
