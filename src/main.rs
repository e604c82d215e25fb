use std::io::{stdout, BufWriter, Write};
use std::time::Instant;

use crossterm::{
    cursor,
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    terminal, ExecutableCommand,
};
use log::info;
use rand::thread_rng;

use sprite_collision::compute::{init_session, terminate, tick};
use sprite_collision::config::GameConfig;
use sprite_collision::display::{self, starfield::Starfield, Viewport};
use sprite_collision::entities::{GameSession, SessionStatus};
use sprite_collision::error::Result;
use sprite_collision::input::{drain_events, KeyTracker};
use sprite_collision::logging;
use sprite_collision::sound::{select_cue, Cue};

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Run ticks until the session terminates.  Each tick consumes input, steps
/// the simulation, renders, then sleeps off the rest of the tick budget.
fn game_loop<W: Write>(
    out: &mut W,
    session: &mut GameSession,
    background: &Starfield,
    cue: &mut dyn Cue,
) -> Result<()> {
    let mut rng = thread_rng();
    let mut keys = KeyTracker::new();
    let budget = session.config.tick_duration();

    while session.status == SessionStatus::Running {
        let tick_start = Instant::now();
        let frame = session.frame + 1;

        // A dead input stream is as good as a closed window
        let input = match drain_events() {
            Ok(events) => keys.sample(&events, frame),
            Err(err) => {
                info!("input stream closed: {err}");
                terminate(session);
                break;
            }
        };

        tick(session, &input, &mut rng, cue);
        if session.status != SessionStatus::Running {
            break;
        }

        let viewport = Viewport::from_terminal()?;
        display::render(out, session, background, &viewport)?;

        let elapsed = tick_start.elapsed();
        if elapsed < budget {
            std::thread::sleep(budget - elapsed);
        }
    }
    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    logging::init();

    let config = GameConfig::default();
    let mut rng = thread_rng();
    let background = Starfield::generate(&config, &mut rng);
    let mut session = init_session(config, &mut rng);
    let mut cue = select_cue();

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Ghostty / kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    let result = game_loop(&mut out, &mut session, &background, cue.as_mut());

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result?;
    info!("final score {}", session.score);
    Ok(())
}
