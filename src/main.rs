//! Terminal gridfall runner (default binary).
//!
//! Hosts the engine: owns the tick cadence, maps keyboard input to engine
//! calls, and draws each frame. Gravity runs every 400 ms; while the
//! soft-drop key is engaged the cadence drops to 40 ms and reverts 200 ms
//! after the last press. The engine itself never sees any of this timing.

use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use crossterm::event::{self, Event, KeyEventKind};

use gridfall::core::{Engine, FrameSnapshot};
use gridfall::input::{handle_key_event, should_quit};
use gridfall::term::{FrameBuffer, GameView, Screen, Viewport};
use gridfall::types::{
    Direction, GameAction, BASE_TICK_MS, DEFAULT_HEIGHT, DEFAULT_WIDTH, SOFT_DROP_DIVISOR,
    SOFT_DROP_REVERT_MS,
};

/// Board size and seed, settable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HostConfig {
    width: u8,
    height: u8,
    seed: u32,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            seed: 1,
        }
    }
}

fn parse_args(args: &[String]) -> Result<HostConfig> {
    let mut config = HostConfig::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--width" => {
                i += 1;
                let v = args.get(i).ok_or_else(|| anyhow!("missing value for --width"))?;
                config.width = v
                    .parse::<u8>()
                    .map_err(|_| anyhow!("invalid --width value: {}", v))?;
            }
            "--height" => {
                i += 1;
                let v = args.get(i).ok_or_else(|| anyhow!("missing value for --height"))?;
                config.height = v
                    .parse::<u8>()
                    .map_err(|_| anyhow!("invalid --height value: {}", v))?;
            }
            "--seed" => {
                i += 1;
                let v = args.get(i).ok_or_else(|| anyhow!("missing value for --seed"))?;
                config.seed = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
            }
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }
    Ok(config)
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_args(&args)?;

    let mut screen = Screen::new();
    screen.enter()?;

    let result = run(&mut screen, config);

    // Always try to restore terminal state.
    let _ = screen.exit();
    result
}

fn run(screen: &mut Screen, config: HostConfig) -> Result<()> {
    let mut engine = Engine::with_seed(config.width, config.height, config.seed)?;
    let mut seed = config.seed;

    let view = GameView::default();
    let mut snap = FrameSnapshot::new(config.width, config.height);
    let mut fb = FrameBuffer::new(0, 0);

    let base_tick = Duration::from_millis(BASE_TICK_MS);
    let fast_tick = Duration::from_millis(BASE_TICK_MS / SOFT_DROP_DIVISOR);
    let revert_after = Duration::from_millis(SOFT_DROP_REVERT_MS);

    let mut last_tick = Instant::now();
    let mut last_soft_drop: Option<Instant> = None;

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        engine.draw_into(&mut snap);
        view.render_into(&snap, engine.is_game_over(), Viewport::new(w, h), &mut fb);
        screen.draw(&fb)?;

        // Current cadence: fast while soft drop was engaged recently.
        let soft_dropping = last_soft_drop
            .is_some_and(|at| at.elapsed() < revert_after);
        let tick_duration = if soft_dropping { fast_tick } else { base_tick };

        // Input with timeout until the next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press || key.kind == KeyEventKind::Repeat {
                    if should_quit(key) {
                        return Ok(());
                    }

                    match handle_key_event(key) {
                        Some(GameAction::ShiftLeft) => {
                            engine.shift(Direction::Left);
                        }
                        Some(GameAction::ShiftRight) => {
                            engine.shift(Direction::Right);
                        }
                        Some(GameAction::Rotate) => {
                            engine.rotate();
                        }
                        Some(GameAction::SoftDrop) => {
                            last_soft_drop = Some(Instant::now());
                        }
                        Some(GameAction::Restart) => {
                            if engine.is_game_over() {
                                seed = seed.wrapping_add(1);
                                engine =
                                    Engine::with_seed(config.width, config.height, seed)?;
                                last_soft_drop = None;
                                last_tick = Instant::now();
                            }
                        }
                        None => {}
                    }
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            engine.tick();
        }
    }
}
