//! Island Bounce entry point
//!
//! Runs a headless demo: a fixed 60 Hz simulation driven by an accumulator
//! loop, with the rendered ball position interpolated between ticks the way
//! a real frontend would sample it. Resumes from a previous save when one
//! exists and saves on exit.

use std::path::Path;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use island_bounce::anim::Tween;
use island_bounce::consts::{MAX_SUBSTEPS, TICK_DT, TICK_HZ};
use island_bounce::sim::{Bounds, GameState, tick};

const SAVE_PATH: &str = "island_bounce_save.json";
const DEMO_TICKS: u64 = 600;
const ARENA_WIDTH: f32 = 800.0;
const ARENA_HEIGHT: f32 = 600.0;

/// Load a saved game, treating a missing or corrupt save as no save
fn load_saved_game(path: &Path) -> Option<GameState> {
    let json = std::fs::read_to_string(path).ok()?;
    match serde_json::from_str(&json) {
        Ok(state) => Some(state),
        Err(e) => {
            log::warn!("ignoring corrupt save: {e}");
            None
        }
    }
}

/// Save the game state; storage failures are logged, not fatal
fn save_game(state: &GameState, path: &Path) {
    match serde_json::to_string(state) {
        Ok(json) => {
            if let Err(e) = std::fs::write(path, json) {
                log::warn!("failed to write save: {e}");
            } else {
                log::info!("game saved at tick {}", state.time_ticks);
            }
        }
        Err(e) => log::warn!("failed to serialize save: {e}"),
    }
}

/// Scripted stand-in for touch input: a short paddle drag every four
/// seconds, alternating direction
fn drive_demo_drag(state: &mut GameState) {
    let phase = state.time_ticks % 240;
    let sign = if (state.time_ticks / 240) % 2 == 0 {
        1.0
    } else {
        -1.0
    };
    match phase {
        0 => state.player.drag_begin(),
        1..=59 => state.player.drag_move(sign * phase as f32 * 2.0),
        60 => state.player.drag_end(state.bounds),
        _ => {}
    }
}

fn main() {
    env_logger::init();
    log::info!("Island Bounce starting...");

    let save_path = Path::new(SAVE_PATH);
    let mut state = load_saved_game(save_path).unwrap_or_else(|| {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        GameState::new(seed, Bounds::new(ARENA_WIDTH, ARENA_HEIGHT))
    });

    let end_tick = state.time_ticks + DEMO_TICKS;
    let mut ball_tween = Tween::new(state.ball.pos);
    let mut accumulator = 0.0f32;
    let mut last = Instant::now();

    while state.time_ticks < end_tick {
        let now = Instant::now();
        let dt = now.duration_since(last).as_secs_f32().min(0.1);
        last = now;
        accumulator += dt;

        let mut substeps = 0;
        while accumulator >= TICK_DT && substeps < MAX_SUBSTEPS {
            drive_demo_drag(&mut state);
            tick(&mut state);
            ball_tween.retarget(state.ball.pos, TICK_DT);
            accumulator -= TICK_DT;
            substeps += 1;

            if state.time_ticks % u64::from(TICK_HZ) == 0 {
                let rendered = ball_tween.value();
                log::info!(
                    "tick {}: ball ({:.1}, {:.1}), rendered ({:.1}, {:.1}), paddle x {:.1}",
                    state.time_ticks,
                    state.ball.pos.x,
                    state.ball.pos.y,
                    rendered.x,
                    rendered.y,
                    state.player.rect.x
                );
            }
        }

        ball_tween.advance(dt);
        std::thread::sleep(Duration::from_millis(4));
    }

    save_game(&state, save_path);
    log::info!("demo finished after {} ticks", state.time_ticks);
}
