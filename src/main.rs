//! Breakout TUI entry point
//!
//! Owns the terminal lifecycle and the fixed-rate game loop; everything
//! rule-shaped lives in the library's `sim` module.

use std::io::stdout;
use std::process::ExitCode;
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use breakout_tui::consts::TICK_INTERVAL;
use breakout_tui::error::{Error, Flow};
use breakout_tui::input::{self, Action};
use breakout_tui::render::{self, Dialog, Screen};
use breakout_tui::sim::{Phase, Session, TickInput};

fn main() -> ExitCode {
    env_logger::init();
    install_panic_hook();

    match run() {
        Ok(()) => {
            log::info!("quit");
            ExitCode::SUCCESS
        }
        // Both startup failures are user-environment problems, not bugs:
        // explain and leave with a clean status.
        Err(Error::TerminalUnavailable(e)) => {
            eprintln!("This program requires an interactive terminal ({e}).");
            ExitCode::SUCCESS
        }
        Err(Error::ViewportTooSmall { .. }) => {
            eprintln!("Basic rendering is not working. Your terminal may be too small.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("unexpected failure: {e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Restore the terminal before the default panic report prints, so the
/// trace lands on the real screen instead of the alternate one.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        Screen::restore(&mut stdout());
        default_hook(info);
    }));
}

fn run() -> Result<(), Error> {
    let mut screen = Screen::new()?;
    let viewport = screen.viewport();
    log::info!("starting: viewport {}x{}", viewport.width, viewport.height);

    // The welcome dialog doubles as the viewport sanity check: if it does
    // not fit, nothing else will either.
    if Dialog::welcome().run(&mut screen)? == Flow::Quit {
        return Ok(());
    }

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut session = Session::new(viewport, seed);
    session.start();

    loop {
        // At most one pending input event per tick; none pending is normal.
        let mut input = TickInput::default();
        match input::poll_action()? {
            Some(Action::Quit) => return Ok(()),
            Some(Action::MoveLeft) => input.move_left = true,
            Some(Action::MoveRight) => input.move_right = true,
            Some(Action::Launch) => input.launch = true,
            Some(Action::TogglePause) => input.pause = true,
            None => {}
        }

        session.tick(input);

        // Modal phases: draw the frozen frame, run the dialog over it.
        match session.phase() {
            Phase::Paused => {
                render::draw_frame(&mut screen, &session)?;
                match Dialog::pause().run(&mut screen)? {
                    Flow::Quit => return Ok(()),
                    Flow::Continue => {
                        session.tick(TickInput {
                            pause: true,
                            ..TickInput::default()
                        });
                    }
                }
            }
            Phase::GameOver => {
                render::draw_frame(&mut screen, &session)?;
                match Dialog::game_over(session.score()).run(&mut screen)? {
                    Flow::Quit => return Ok(()),
                    Flow::Continue => session.reset(),
                }
            }
            Phase::Welcome | Phase::Playing => {}
        }

        render::draw_frame(&mut screen, &session)?;
        screen.present()?;
        thread::sleep(TICK_INTERVAL);
    }
}
