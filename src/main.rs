use std::io::{stdout, BufWriter};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags},
    terminal, ExecutableCommand,
};
use rand::thread_rng;

use arena_shooter::audio::{Audio, TerminalBell};
use arena_shooter::compute::{apply_key_press, tick};
use arena_shooter::constants::{FRAME_DELAY_MS, MIN_TERMINAL_COLS, MIN_TERMINAL_ROWS};
use arena_shooter::display::{render, Canvas, Hud};
use arena_shooter::entities::{GameEvent, KeyPress, SimulationState};
use arena_shooter::error::{GameError, Result};
use arena_shooter::input::KeyTracker;
use arena_shooter::logging;

const FRAME: Duration = Duration::from_millis(FRAME_DELAY_MS);

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until a quit key is pressed.
///
/// One iteration: drain input events, apply discrete presses to the state
/// machine, tick the simulation, draw, then sleep a fixed delay.  The delay
/// does not subtract the frame's own work, so game speed follows frame rate.
///
/// `keyboard_enhanced` says whether the terminal reports key releases.
fn game_loop(
    rx: &mpsc::Receiver<Event>,
    cols: u16,
    rows: u16,
    keyboard_enhanced: bool,
) -> Result<()> {
    let mut canvas = Canvas::new(BufWriter::new(stdout()), cols, rows);
    let mut hud = Hud::new(canvas.font());
    let mut audio = TerminalBell::new(stdout());
    let mut tracker = KeyTracker::new(keyboard_enhanced);
    let mut rng = thread_rng();
    let mut state = SimulationState::default();

    let clock = Instant::now();
    let mut frame: u64 = 0;

    loop {
        frame += 1;
        let now = clock.elapsed().as_millis() as u64;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Key(key) => tracker.record(&key, frame),
                Event::Resize(c, r) => {
                    log::debug!("terminal resized to {c}x{r}");
                    canvas.resize(c, r);
                    hud = Hud::new(canvas.font());
                }
                _ => {}
            }
        }

        while let Some(press) = tracker.next_press() {
            if press == KeyPress::Quit {
                return Ok(());
            }
            apply_key_press(&mut state, press, now, &mut rng);
        }

        for ev in tick(&mut state, &tracker.held(frame), now, &mut rng) {
            log::trace!("frame {frame}: {ev:?}");
            if ev == GameEvent::PlayerFired {
                audio.play_fire_sound();
            }
        }

        hud.sync(&state);
        render(&mut canvas, &state, &hud)?;

        thread::sleep(FRAME);
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    logging::init();

    let (cols, rows) = terminal::size()?;
    if cols < MIN_TERMINAL_COLS || rows < MIN_TERMINAL_ROWS {
        return Err(GameError::TerminalTooSmall {
            cols,
            rows,
            min_cols: MIN_TERMINAL_COLS,
            min_rows: MIN_TERMINAL_ROWS,
        });
    }
    log::info!("starting on a {cols}x{rows} terminal");

    let mut out = stdout();
    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back to the hold window.
    let keyboard_enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false)
        && out
            .execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))
            .is_ok();
    log::info!("key release events: {keyboard_enhanced}");

    // Dedicate a thread to blocking event reads, sending them through a
    // channel so the game loop never blocks on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = game_loop(&rx, cols, rows, keyboard_enhanced);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(e) = &result {
        log::error!("{e}");
    }
    result
}
