use std::io::{self, Stdout};
use std::sync::mpsc::Receiver;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::info;

use crate::error::Result;
use crate::history::{History, SharedHistory};
use crate::mode::Mode;
use crate::stop::{signal, StopToken};

mod chart;
pub mod fmt;

const POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// What the charts show, fixed for a session.
#[derive(Clone, Copy, Debug)]
pub struct View {
    pub mode: Mode,
    pub period: Duration,
}

impl View {
    /// Shown above the charts.
    pub fn banner(&self) -> String {
        format!(
            "Monitoring {} every {} milliseconds. Press Ctrl+C or 'q' to stop.",
            self.mode.title(),
            self.period.as_millis()
        )
    }
}

/// The terminal in raw mode on the alternate screen, restored on drop.
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl Tui {
    pub fn enter() -> Result<Self> {
        terminal::enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            restore();
            return Err(e.into());
        }
        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(e) => {
                restore();
                Err(e.into())
            }
        }
    }

    pub fn draw(&mut self, view: &View, history: &History) -> Result<()> {
        self.terminal.draw(|frame| chart::draw(frame, view, history))?;
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        restore();
    }
}

fn restore() {
    let _ = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
    let _ = terminal::disable_raw_mode();
}

/// Redraws the charts until the user quits or `stop` is set.
///
/// Quitting or failing stops the token, so the sampler winds down too.
pub fn run(
    tui: &mut Tui,
    view: &View,
    history: &SharedHistory,
    redraw: &Receiver<()>,
    stop: &StopToken,
) -> Result<()> {
    let rendered = render(tui, view, history, redraw, stop);
    stop.stop();
    rendered
}

fn render(
    tui: &mut Tui,
    view: &View,
    history: &SharedHistory,
    redraw: &Receiver<()>,
    stop: &StopToken,
) -> Result<()> {
    tui.draw(view, &history.snapshot())?;

    while !stop.is_stopped() {
        let mut dirty = false;

        if event::poll(POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key) if is_quit(&key) => {
                    info!("quit requested");
                    return Ok(());
                }
                Event::Resize(..) => dirty = true,
                _ => {}
            }
        }
        if signal::caught() {
            info!("quit on signal");
            return Ok(());
        }

        // Coalesce every tick since the last frame into one redraw.
        if redraw.try_iter().count() > 0 {
            dirty = true;
        }
        if dirty {
            tui.draw(view, &history.snapshot())?;
        }
    }

    Ok(())
}

fn is_quit(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
