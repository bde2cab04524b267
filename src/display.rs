use crate::app::App;
use crate::draw;
use crate::keys::{KeyOutcome, handle_key_bindings};
use crate::pipeline::MatchFigure;
use crossterm::event::{self as crossterm_event, Event};
use crossterm::{cursor, execute, terminal};
use log::debug;
use std::io::{self, Write};
use std::panic;
use tui::Terminal;
use tui::backend::{CrosstermBackend, TestBackend};

/// Where a finished figure ends up.
pub trait DisplaySink {
    fn show(&mut self, figure: &MatchFigure) -> anyhow::Result<()>;
}

/// Interactive page on the alternate screen; blocks until the viewer quits.
#[derive(Debug, Default)]
pub struct TerminalSink;

impl DisplaySink for TerminalSink {
    fn show(&mut self, figure: &MatchFigure) -> anyhow::Result<()> {
        let mut app = App::new(figure.clone());
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

        setup_panic_hook();
        setup_terminal()?;
        let result = event_loop(&mut terminal, &mut app);
        cleanup_terminal()?;
        result
    }
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> anyhow::Result<()> {
    terminal.draw(|f| draw::draw(f, app))?;
    loop {
        let redraw = match crossterm_event::read()? {
            Event::Key(key_event) => match handle_key_bindings(key_event, app) {
                KeyOutcome::Quit => break,
                KeyOutcome::Redraw => true,
                KeyOutcome::Ignore => false,
            },
            Event::Resize(width, height) => {
                debug!("terminal resized to {width}x{height}");
                true
            }
            _ => false,
        };
        if redraw {
            terminal.draw(|f| draw::draw(f, app))?;
        }
    }
    Ok(())
}

/// Renders one frame of a fixed size and writes it as plain text, one line
/// per terminal row.
pub struct HeadlessSink<W: Write> {
    width: u16,
    height: u16,
    out: W,
}

impl<W: Write> HeadlessSink<W> {
    pub fn new(width: u16, height: u16, out: W) -> Self {
        Self { width, height, out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DisplaySink for HeadlessSink<W> {
    fn show(&mut self, figure: &MatchFigure) -> anyhow::Result<()> {
        let app = App::new(figure.clone());
        let mut terminal = Terminal::new(TestBackend::new(self.width, self.height))?;
        terminal.draw(|f| draw::draw(f, &app))?;

        let buffer = terminal.backend().buffer();
        for y in 0..self.height {
            let row: String = (0..self.width).map(|x| buffer[(x, y)].symbol()).collect();
            writeln!(self.out, "{row}")?;
        }
        self.out.flush()?;
        Ok(())
    }
}

fn setup_terminal() -> io::Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, cursor::Hide, terminal::EnterAlternateScreen, terminal::Clear(terminal::ClearType::All))?;
    terminal::enable_raw_mode()
}

pub fn cleanup_terminal() -> io::Result<()> {
    let mut stdout = io::stdout();
    execute!(
        stdout,
        cursor::MoveTo(0, 0),
        terminal::Clear(terminal::ClearType::All),
        terminal::LeaveAlternateScreen,
        cursor::Show
    )?;
    terminal::disable_raw_mode()
}

fn setup_panic_hook() {
    panic::set_hook(Box::new(|panic_info| {
        let _ = cleanup_terminal();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));
}
