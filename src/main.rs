use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    terminal, ExecutableCommand,
};
use rand::thread_rng;

use sky_dodger::audio::{self, TerminalBell};
use sky_dodger::compute::{new_session, tick};
use sky_dodger::config::{log_path, GameConfig};
use sky_dodger::display;
use sky_dodger::input::{handle_event, Viewport};
use sky_dodger::logging;

// ── Frame loop ────────────────────────────────────────────────────────────────

/// Runs until the player quits.  Menu, play and game-over are all modes of
/// the same session, so there is a single loop for all of them.
fn game_loop<W: Write>(
    out: &mut W,
    config: GameConfig,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<()> {
    let mut rng = thread_rng();
    let view = Viewport::from_config(&config);
    let (cols, rows) = terminal::size()?;
    let (width, height) = view.canvas_size(cols, rows);
    let mut state = new_session(config, width, height);
    let mut bell = TerminalBell::new(stdout());
    let frame_time = Duration::from_millis(config.frame_millis.max(1));

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let handled = handle_event(&state, &ev, &view);
            if handled.quit {
                log::info!("Quit (bank {})", handled.state.bank);
                return Ok(());
            }
            if handled.start_audio {
                audio::start(&mut bell);
            }
            state = handled.state;
        }

        state = tick(&state, &mut rng);
        display::render(out, &state, &view)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    logging::init(&log_path());
    log::info!("Sky Dodger starting");
    let config = GameConfig::load_or_default();

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(EnableMouseCapture)?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the frame loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(e) => {
                log::error!("Input reader stopped: {}", e);
                break;
            }
        }
    });

    let result = game_loop(&mut out, config, &rx);
    if let Err(e) = &result {
        log::error!("Terminal error: {}", e);
    }

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
