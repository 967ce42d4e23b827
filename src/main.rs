use std::io;
use std::io::Write;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use crossterm::cursor;
use crossterm::event;
use crossterm::execute;
use crossterm::queue;
use crossterm::style;
use crossterm::terminal;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use life::config::Config;
use life::events::Event;
use life::io::convert_event;
use life::life::Life;
use life::life::Status;
use life::render::Frame;

/// Keeps the terminal in raw mode with a hidden cursor until dropped.
struct RawTerminal;

impl RawTerminal {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(
            stdout,
            terminal::Clear(terminal::ClearType::All),
            cursor::Hide
        )?;

        Ok(Self)
    }
}

impl Drop for RawTerminal {
    fn drop(&mut self) {
        // Nothing left to report errors to at this point
        let mut stdout = io::stdout();
        let _ = execute!(stdout, cursor::Show, cursor::MoveToNextLine(1));
        let _ = terminal::disable_raw_mode();
    }
}

/// Draw the frame from the top left corner, overwriting the previous one.
fn draw(out: &mut impl Write, frame: &str) -> io::Result<()> {
    queue!(out, cursor::MoveTo(0, 0))?;

    for line in frame.lines() {
        queue!(
            out,
            style::Print(line),
            terminal::Clear(terminal::ClearType::UntilNewLine),
            cursor::MoveToNextLine(1)
        )?;
    }

    out.flush()
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = Config::parse();
    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut life = Life::with_rules(config.width, config.height, config.rule)?;
    life.seed_library(config.iterations, config.tries, &mut rng);

    let mut frame = Frame::new(config.style());
    let frametime = config.frame_time();

    let raw = RawTerminal::enter().context("Failed to set up the terminal")?;
    let mut stdout = io::stdout();

    // `None` when the user quit
    let status = 'main: loop {
        let t = Instant::now();

        draw(&mut stdout, frame.render(life.grid())).context("Failed to draw frame")?;

        life.tick();

        let status = life.status();
        if status != Status::Running {
            break Some(status);
        }

        // Poll events for whatever is left of the frame
        while let Some(time_left) = frametime.checked_sub(t.elapsed()) {
            if !event::poll(time_left)? {
                break;
            }

            match convert_event(event::read()?) {
                Some(Event::Exit) => break 'main None,
                Some(Event::Resize) => {
                    execute!(stdout, terminal::Clear(terminal::ClearType::All))?;
                }
                None => {}
            }
        }
    };

    if status.is_some() {
        draw(&mut stdout, frame.render(life.grid())).context("Failed to draw frame")?;
    }

    drop(raw);

    info!(
        generation = life.generation(),
        alive = life.alive(),
        ?status,
        "simulation ended"
    );

    Ok(())
}
