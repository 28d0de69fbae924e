//! Blockfall terminal runner (default binary).
//!
//! Polls crossterm for keys until the next gravity deadline, so input
//! commands and ticks reach the engine one at a time on this thread.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, Level};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

use blockfall::core::{Engine, EngineConfig, GridSnapshot};
use blockfall::input::{is_restart, map_key, should_quit};
use blockfall::term::{FrameBuffer, GridView, TerminalRenderer, Viewport};
use blockfall::types::{BOARD_HEIGHT, BOARD_WIDTH, DEFAULT_TICK_MS};

#[derive(Debug, Parser)]
#[command(name = "blockfall", about = "Falling-block puzzle in the terminal")]
struct Args {
    #[arg(long, default_value_t = BOARD_WIDTH as u16, help = "Board width in cells")]
    width: u16,

    #[arg(long, default_value_t = BOARD_HEIGHT as u16, help = "Board height in cells")]
    height: u16,

    #[arg(long, default_value_t = DEFAULT_TICK_MS, help = "Gravity period in milliseconds")]
    tick_ms: u64,

    #[arg(long, help = "Leftmost spawn pivot column (default 1)")]
    spawn_min: Option<i16>,

    #[arg(long, help = "Rightmost spawn pivot column (default width - 3)")]
    spawn_max: Option<i16>,

    #[arg(long, help = "RNG seed (default: derived from the clock)")]
    seed: Option<u32>,

    #[arg(short = 'v', long, action = clap::ArgAction::Count, help = "Increase log verbosity (-v = DEBUG, -vv = TRACE)")]
    verbose: u8,

    #[arg(long, help = "Write logs to this file (nothing is logged otherwise)")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    let mut config = EngineConfig::with_size(args.width, args.height);
    config = config.with_spawn_band(
        args.spawn_min.unwrap_or(config.spawn_x_min),
        args.spawn_max.unwrap_or(config.spawn_x_max),
    );
    let seed = args.seed.unwrap_or_else(clock_seed);
    let mut engine = Engine::new(config, seed).context("invalid board configuration")?;
    info!(seed, tick_ms = args.tick_ms, "engine ready");

    let mut term = TerminalRenderer::new();
    term.enter().context("failed to set up the terminal")?;

    let result = run(&mut term, &mut engine, Duration::from_millis(args.tick_ms.max(1)));

    // Always try to restore terminal state.
    let _ = term.exit();

    let stats = engine.stats();
    info!(
        status = engine.status().as_str(),
        spawned = stats.pieces_spawned,
        locked = stats.pieces_locked,
        rows = stats.rows_cleared,
        "session ended"
    );
    result
}

fn init_logging(args: &Args) -> Result<()> {
    let level = match args.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    // The alternate screen owns stdout/stderr, so without a file nothing is logged.
    let (layer, filter) = match &args.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            let layer = tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file));
            (Some(layer), LevelFilter::from_level(level))
        }
        None => (None, LevelFilter::OFF),
    };

    tracing_subscriber::registry()
        .with(layer)
        .with(filter)
        .try_init()
        .context("failed to install the log subscriber")?;
    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, engine: &mut Engine, tick: Duration) -> Result<()> {
    let view = GridView::default();
    let mut snapshot = GridSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        engine.snapshot_into(&mut snapshot);
        view.render_into(&snapshot, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if is_restart(key) {
                        engine.restart();
                        last_tick = Instant::now();
                    } else if let Some(command) = map_key(key) {
                        engine.apply(command);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick {
            last_tick = Instant::now();
            engine.tick();
        }
    }
}
