//! Eight Ball entry point
//!
//! The simulation core has no window of its own. Natively this runs a
//! headless autoplay: a seeded random player takes shots until the game ends
//! or the shot budget runs out.
//!
//! Usage: `eight-ball [seed] [config.json]`

use eight_ball::TableConfig;
use eight_ball::sim::{Board, Command, GameEvent, GamePhase, PointerEvent, tick};
use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

const MAX_SHOTS: u32 = 200;
const MAX_FRAMES_PER_SHOT: u32 = 20_000;
/// Enough rotate presses to sweep a full turn
const MAX_AIM_STEPS: u32 = 126;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(8);
    let config = match args.next() {
        Some(path) => match load_config(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        },
        None => TableConfig::default(),
    };

    log::info!("Eight Ball (headless) starting with seed {seed}");
    let mut board = Board::new(config);
    board.create_balls();

    let mut rng = Pcg32::seed_from_u64(seed);
    let mut shots = 0;
    while shots < MAX_SHOTS && board.phase() == GamePhase::Playing {
        take_random_shot(&mut board, &mut rng);
        shots += 1;
        settle(&mut board);
    }

    let player = board.player();
    println!(
        "Finished after {shots} shots: {:?}, score {}, pocketed {:?}",
        player.phase(),
        player.score(),
        player.ball_numbers()
    );
}

fn load_config(path: &str) -> Result<TableConfig, String> {
    let json = std::fs::read_to_string(path).map_err(|e| format!("reading {path}: {e}"))?;
    TableConfig::from_json(&json).map_err(|e| format!("{path}: {e}"))
}

fn take_random_shot(board: &mut Board, rng: &mut Pcg32) {
    if board.is_cue_in_pocket() {
        let inner = board.table().inner;
        let spot = Vec2::new(
            rng.random_range(inner.left..inner.right),
            rng.random_range(inner.top..inner.bottom),
        );
        board.handle_pointer(PointerEvent::Release(spot));
    }

    for _ in 0..rng.random_range(0..MAX_AIM_STEPS) {
        board.handle_command(Command::RotateLeft);
    }
    for _ in 0..rng.random_range(1..=4) {
        board.handle_command(Command::Charge);
    }
    board.handle_command(Command::Strike);
}

/// Run frames until every ball stops or the game ends
fn settle(board: &mut Board) {
    for _ in 0..MAX_FRAMES_PER_SHOT {
        for event in tick(board) {
            match event {
                GameEvent::Pocketed { id, kind } => {
                    log::info!("Pocketed {} ({})", id, kind.as_str())
                }
                GameEvent::CueScratched => log::info!("Scratch"),
                GameEvent::KindAssigned(kind) => log::info!("Playing {}", kind.as_str()),
                GameEvent::Won => log::info!("Won!"),
                GameEvent::Lost => log::info!("Lost"),
            }
        }
        if board.is_stick_visible() || board.phase().is_over() {
            return;
        }
    }
    log::warn!("Table still moving after {MAX_FRAMES_PER_SHOT} frames");
}
