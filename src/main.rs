mod display;

use std::collections::HashMap;
use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use musou_kokaton::assets::Atlas;
use musou_kokaton::clock::FrameClock;
use musou_kokaton::compute::{init_state, tick};
use musou_kokaton::config::{GameConfig, DEFAULT_FPS, DEFAULT_SKIN};
use musou_kokaton::entities::GameState;
use musou_kokaton::input::{Directions, FrameInput};
use musou_kokaton::render::scene;

use display::Screen;

/// How long the final frame stays up after the avatar falls.
const GAME_OVER_PAUSE: Duration = Duration::from_secs(2);

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so a window of 4 frames at 50 FPS
/// (80 ms) is refreshed by every repeat.
const HOLD_WINDOW: u64 = 4;

#[derive(Parser, Debug)]
#[command(name = "musou_kokaton", about = "Dodge the bombs, beam the aliens, outlast the boss")]
struct Args {
    /// Avatar sprite sheet id (0-9)
    #[arg(long, default_value_t = DEFAULT_SKIN)]
    skin: u8,
    /// Simulation rate in ticks per second
    #[arg(long, default_value_t = DEFAULT_FPS)]
    fps: u32,
    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
}

impl Args {
    fn into_config(self) -> GameConfig {
        GameConfig {
            skin: self.skin,
            fps: self.fps,
            seed: self.seed,
            ..GameConfig::default()
        }
    }
}

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

fn any_held(key_frame: &HashMap<KeyCode, u64>, keys: &[KeyCode], frame: u64) -> bool {
    keys.iter().any(|k| is_held(key_frame, k, frame))
}

fn held_directions(key_frame: &HashMap<KeyCode, u64>, frame: u64) -> Directions {
    use KeyCode::{Char, Down, Left, Right, Up};
    Directions {
        up: any_held(key_frame, &[Up, Char('w'), Char('W')], frame),
        down: any_held(key_frame, &[Down, Char('s'), Char('S')], frame),
        left: any_held(key_frame, &[Left, Char('a'), Char('A')], frame),
        right: any_held(key_frame, &[Right, Char('d'), Char('D')], frame),
    }
}

// ── Logging ───────────────────────────────────────────────────────────────────

/// Log to a file: the game owns the terminal, so stderr is not an option.
fn init_logging() -> Result<PathBuf> {
    let path = std::env::temp_dir().join("musou_kokaton.log");
    let file = File::create(&path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(path)
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs one session until the player quits or the avatar falls, and returns
/// the final state.
///
/// Input model: a `key_frame` map records the frame number of the last
/// press/repeat event for every key. Movement uses whichever keys are still
/// "fresh"; Space and Enter act once per press event.
fn game_loop<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    config: &GameConfig,
    atlas: &Atlas,
    rng: &mut impl Rng,
) -> Result<GameState> {
    let mut state = init_state(config);
    let mut clock = FrameClock::new(config.frame_duration());

    // Maps each held key → the frame it was last seen (press or repeat).
    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut frame: u64 = 0;

    loop {
        clock.begin_frame();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        let mut input = FrameInput::idle();
        while let Ok(event) = rx.try_recv() {
            let Event::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) = event
            else {
                continue;
            };
            match kind {
                KeyEventKind::Press => {
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => input.quit = true,
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            input.quit = true
                        }
                        KeyCode::Char(' ') => input.shots += 1,
                        KeyCode::Enter => input.activate_buff = true,
                        _ => {}
                    }
                    key_frame.insert(code, frame);
                }
                KeyEventKind::Repeat => {
                    key_frame.insert(code, frame);
                }
                KeyEventKind::Release => {
                    key_frame.remove(&code);
                }
            }
        }

        if input.quit {
            log::info!("quit at frame {} with score {}", state.frame, state.score);
            return Ok(state);
        }
        input.held = held_directions(&key_frame, frame);

        state = tick(&state, &input, clock.elapsed(), rng);

        display::render(
            out,
            &scene(&state),
            atlas,
            &config.playfield,
            Screen::current()?,
        )?;

        if state.is_over() {
            thread::sleep(GAME_OVER_PAUSE);
            return Ok(state);
        }

        clock.throttle();
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let config = Args::parse().into_config();
    let log_path = init_logging()?;

    // A missing sprite is fatal, and better reported before the screen flips.
    let atlas = Atlas::builtin();
    atlas
        .preload(config.skin)
        .with_context(|| format!("avatar skin {} cannot be loaded", config.skin))?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    log::info!(
        "starting: skin {}, {} fps, seed {:?}, logging to {}",
        config.skin,
        config.fps,
        config.seed,
        log_path.display()
    );

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = game_loop(&mut out, &rx, &config, &atlas, &mut rng);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    let state = result?;
    println!("Final score: {}", state.score);
    Ok(())
}
