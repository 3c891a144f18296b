//! Terminal reflex test runner (default binary).
//!
//! Keys `1`-`4` (or `a s d f`) are the four board buttons. The game runs on a
//! fixed 1 ms tick; the screen is redrawn only when the board changes.

use std::fs::File;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use reflex_test::core::GameSnapshot;
use reflex_test::engine::{Executor, InstantTimer};
use reflex_test::input::{should_quit, ButtonHandler, DEFAULT_KEY_RELEASE_TIMEOUT_MS};
use reflex_test::term::{
    BoardView, FrameBuffer, LcdPanel, LedPanel, RenderThrottle, TerminalRenderer, Viewport,
};
use reflex_test::types::TICK_MS;

/// Ticks run back-to-back after a stall before the loop gives up catching up.
const MAX_CATCH_UP_TICKS: u32 = 50;

/// Unchanged screens are still redrawn this often.
const REFRESH_MS: u64 = 500;

type Game = Executor<ButtonHandler, InstantTimer, LedPanel, LcdPanel>;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Write logs to this file (the terminal is in use by the game)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Release a held key after this many ms without key events
    #[arg(long, default_value_t = DEFAULT_KEY_RELEASE_TIMEOUT_MS)]
    key_release_ms: u32,

    /// Minimum time between two frames
    #[arg(long, default_value_t = 16)]
    render_interval_ms: u64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &cli);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        log::error!("game loop failed: {:#}", err);
    }
    result
}

fn init_logging(cli: &Cli) -> Result<()> {
    // Stderr shares the screen with the game, so only warnings go there.
    let default_filter = if cli.log_file.is_some() { "info" } else { "warn" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));
    if let Some(path) = &cli.log_file {
        let file = File::create(path)
            .with_context(|| format!("creating log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, cli: &Cli) -> Result<()> {
    let buttons = ButtonHandler::new().with_key_release_timeout_ms(cli.key_release_ms);
    let mut game: Game = Executor::new(buttons, InstantTimer::new(), LedPanel::new(), LcdPanel::new());
    log::info!(
        "reflex test started (key release events: {})",
        term.keyboard_enhanced()
    );

    let view = BoardView::default();
    let mut throttle = RenderThrottle::new(cli.render_interval_ms, REFRESH_MS);
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let started = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        game.state().snapshot_into(&mut snap);
        let now_ms = started.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, frame_fingerprint(&game, &snap)) {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&snap, game.leds(), game.lcd(), Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            log::info!("quit after {} ticks", game.ticks());
                            return Ok(());
                        }
                        game.buttons_mut().handle_key_press(key.code);
                    }
                    KeyEventKind::Repeat => {
                        // Auto-repeat keeps a held button alive.
                        game.buttons_mut().handle_key_press(key.code);
                    }
                    KeyEventKind::Release => {
                        game.buttons_mut().handle_key_release(key.code);
                    }
                },
                Event::Resize(_, _) => {
                    term.invalidate();
                    throttle.force();
                }
                _ => {}
            }
        }

        // Tick, catching up on ticks missed while blocked.
        let mut due = 0;
        while last_tick.elapsed() >= tick_duration && due < MAX_CATCH_UP_TICKS {
            last_tick += tick_duration;
            game.run();
            due += 1;
        }
        if due == MAX_CATCH_UP_TICKS && last_tick.elapsed() >= tick_duration {
            log::warn!("game loop fell behind, dropping {:?}", last_tick.elapsed());
            last_tick = Instant::now();
        }
    }
}

fn frame_fingerprint(game: &Game, snap: &GameSnapshot) -> u64 {
    snap.fingerprint()
        ^ game.leds().revision().rotate_left(32)
        ^ game.lcd().revision().rotate_left(48)
}
