use crate::command::Command;
use crate::config::Config;
use crate::consts;
use crate::game::{Board, GameEngine};
use crate::surface::BufferSurface;
use crate::ticker::Ticker;
use crate::util::{center_rect, get_display_area};
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Rect, Size},
    text::Line,
    widgets::{Block, Widget},
    Terminal,
};
use std::io;

/// The running application: a game engine plus the timer that drives it
#[derive(Clone, Debug)]
pub(crate) struct App<R = rand::rngs::ThreadRng> {
    engine: GameEngine<R>,
    ticker: Ticker,
    quitting: bool,
}

impl<R: Rng> App<R> {
    pub(crate) fn new(config: &Config, rng: R) -> App<R> {
        let engine = GameEngine::new(Board::from(config.board), config.colors, rng);
        let mut ticker = Ticker::new(config.timing.tick_period());
        ticker.start();
        App {
            engine,
            ticker,
            quitting: false,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting {
            self.draw(&mut terminal)?;
            self.process_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| frame.render_widget(self, frame.area()))?;
        Ok(())
    }

    /// Wait for either the next tick or the next input event, whichever comes
    /// first, and handle it.  Once the game is over, there are no more ticks,
    /// and this blocks until an event arrives.
    fn process_input(&mut self) -> io::Result<()> {
        if let Some(wait) = self.ticker.remaining() {
            if wait.is_zero() || !poll(wait)? {
                self.tick();
            } else {
                self.handle_event(read()?);
            }
        } else {
            self.handle_event(read()?);
        }
        Ok(())
    }

    fn tick(&mut self) {
        if self.engine.tick() {
            self.ticker.start();
        } else {
            self.ticker.cancel();
        }
    }

    fn handle_event(&mut self, event: Event) {
        if let Some(cmd) = event
            .as_key_press_event()
            .and_then(Command::from_key_event)
        {
            self.handle_command(cmd);
        }
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Quit => self.quitting = true,
            Command::Reset => self.reset(),
            Command::Enter if !self.engine.running() => self.reset(),
            _ => self.engine.handle_input(cmd),
        }
    }

    fn reset(&mut self) {
        self.engine.reset();
        if !self.ticker.is_armed() {
            self.ticker.start();
        }
    }
}

impl<R> Widget for &App<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [score_area, block_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(display);
        Line::styled(
            format!(" Score: {}", self.engine.score()),
            consts::SCORE_BAR_STYLE,
        )
        .render(score_area, buf);

        let board = self.engine.board();
        let columns = u16::try_from(board.columns())
            .unwrap_or(u16::MAX)
            .saturating_mul(consts::CELL_WIDTH);
        let rows = u16::try_from(board.rows()).unwrap_or(u16::MAX);
        let block_area = center_rect(
            block_area,
            Size {
                width: columns.saturating_add(2),
                height: rows.saturating_add(2),
            },
        );
        Block::bordered().render(block_area, buf);
        let board_area = block_area.inner(Margin::new(1, 1));
        self.engine
            .render(&mut BufferSurface::new(board_area, buf, board.unit));

        Line::raw(consts::HELP_TEXT).render(help_area, buf);
    }
}
