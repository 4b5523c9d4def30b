//! Console demo renderer.
//!
//! Plays a scripted seat-one player against the built-in CPU through
//! the session driver, printing events as they arrive. The scripted
//! player sees only what a real renderer would see: the event stream.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tictactoe_rounds::{
    CpuPlayer, GameMode, GameSession, Mark, PlayerSlot, RoundResult, Score, SeatAssignment,
    SessionCommand, SessionDriver, SessionEvent,
};
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Mark choice on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum MarkArg {
    /// Play X (open the first round).
    X,
    /// Play O (the CPU opens).
    O,
}

impl From<MarkArg> for Mark {
    fn from(arg: MarkArg) -> Self {
        match arg {
            MarkArg::X => Mark::X,
            MarkArg::O => Mark::O,
        }
    }
}

/// Self-play demo for the tic-tac-toe session core.
#[derive(Parser, Debug)]
#[command(name = "tictactoe_rounds")]
#[command(about = "Self-play demo for the tic-tac-toe session core", long_about = None)]
#[command(version)]
struct Cli {
    /// Mark the scripted seat-one player opens with
    #[arg(long, value_enum, default_value = "x")]
    mark: MarkArg,

    /// Rounds to play before quitting
    #[arg(long, default_value_t = 3)]
    rounds: u32,

    /// Seed for the scripted player's move picks
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Board side length
    #[arg(long, default_value_t = 3)]
    size: usize,

    /// Delay before each CPU move, in milliseconds
    #[arg(long, default_value_t = 100)]
    cpu_delay_ms: u64,
}

/// Renderer-side mirror of the board, rebuilt from events alone.
struct Mirror {
    occupied: Vec<bool>,
    rng: SmallRng,
}

impl Mirror {
    fn new(cells: usize, seed: u64) -> Self {
        Self {
            occupied: vec![false; cells],
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    fn clear(&mut self) {
        self.occupied.fill(false);
    }

    fn fill(&mut self, position: usize) {
        self.occupied[position] = true;
    }

    fn pick(&mut self) -> Option<usize> {
        let open: Vec<usize> = (0..self.occupied.len())
            .filter(|&i| !self.occupied[i])
            .collect();
        if open.is_empty() {
            None
        } else {
            Some(open[self.rng.random_range(0..open.len())])
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let human_mark = Mark::from(cli.mark);

    let (event_tx, mut events) = mpsc::unbounded_channel();
    let mut session = GameSession::with_cpu_player(event_tx, CpuPlayer::new());
    session.set_board_size(cli.size)?;

    let (driver, commands) = SessionDriver::new(
        session,
        std::time::Duration::from_millis(cli.cpu_delay_ms),
    );
    let driver_task = tokio::spawn(driver.run());

    commands.send(SessionCommand::Configure {
        human_mark,
        mode: GameMode::Cpu,
    })?;
    commands.send(SessionCommand::Start)?;

    let mut mirror = Mirror::new(cli.size * cli.size, cli.seed);
    let mut seats: Option<SeatAssignment> = None;
    let mut rounds_left = cli.rounds;
    let mut last_score = Score::default();

    while let Some(event) = events.recv().await {
        match event {
            SessionEvent::ModeConfigured { mode, human_mark } => {
                println!("mode: {mode}, you play {human_mark}");
            }
            SessionEvent::RoundStarted { to_move, seats: table } => {
                mirror.clear();
                seats = Some(table);
                println!("--- round start, {to_move} to move ---");
                maybe_click(&commands, &mut mirror, seats, to_move)?;
            }
            SessionEvent::CellFilled { position, mark } => {
                mirror.fill(position);
                println!("{mark} -> cell {position}");
            }
            SessionEvent::TurnChanged { mark } => {
                maybe_click(&commands, &mut mirror, seats, mark)?;
            }
            SessionEvent::RoundEnded { result } => {
                match result {
                    RoundResult::Win(mark) => println!("round won by {mark}"),
                    RoundResult::Tie => println!("round tied"),
                }
                rounds_left -= 1;
                if rounds_left > 0 {
                    commands.send(SessionCommand::NextRound)?;
                } else {
                    println!("final score: {}", serde_json::to_string(&last_score)?);
                    commands.send(SessionCommand::Quit)?;
                }
            }
            SessionEvent::ScoreChanged { score } => {
                last_score = score;
            }
            SessionEvent::ResetRequested => {
                commands.send(SessionCommand::ConfirmReset)?;
            }
            SessionEvent::MenuRequested => {
                info!("Back to menu; demo done");
                break;
            }
        }
    }

    drop(commands);
    driver_task.await?;
    Ok(())
}

/// Sends a scripted click when the turn belongs to seat one.
fn maybe_click(
    commands: &mpsc::UnboundedSender<SessionCommand>,
    mirror: &mut Mirror,
    seats: Option<SeatAssignment>,
    to_move: Mark,
) -> Result<()> {
    let Some(table) = seats else {
        return Ok(());
    };
    if table.mark_of(PlayerSlot::One) != to_move {
        return Ok(());
    }
    if let Some(position) = mirror.pick() {
        commands.send(SessionCommand::CellClick(position))?;
    }
    Ok(())
}
