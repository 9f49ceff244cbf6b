//! Terminal front end: owns the tick schedule and draws engine snapshots.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use log::info;
use rand::Rng;

use crate::config::Config;
use crate::engine::{GameEngine, Phase, Snapshot, TickOutcome};
use crate::input::{command_from_key, Command};
use crate::snake::Snake;
use crate::term::{Pos, TermManager};
use crate::{Cell, COLS, ROWS};

const CELL_WIDTH: u16 = 2;
const BOARD_WIDTH: u16 = COLS as u16 * CELL_WIDTH + 2;
const BOARD_HEIGHT: u16 = ROWS as u16 + 2;
/// One extra row below the board for the key help.
const NEEDED_SIZE: Pos = (BOARD_WIDTH, BOARD_HEIGHT + 1);
/// How long to wait for input while nothing is moving.
const IDLE_POLL: Duration = Duration::from_millis(250);

const EMPTY: [char; 2] = [' ', ' '];
const BODY: [char; 2] = ['█', '█'];
const DEAD: [char; 2] = ['X', 'X'];
const FOOD: [char; 2] = ['(', ')'];
const HELP: &str = "arrows/WASD move  Enter start  Esc quit";

pub fn run(config: &Config) -> Result<()> {
    let engine = match config.seed {
        Some(seed) => GameEngine::with_seed(seed),
        None => GameEngine::new(),
    };
    let term = TermManager::new().context("reading terminal size")?;
    SnakeGame::new(engine, term, config.tick_interval())?.play()
}

pub struct SnakeGame<R> {
    engine: GameEngine<R>,
    term: TermManager,
    origin: Pos,
    tick_interval: Duration,
}

impl<R: Rng> SnakeGame<R> {
    pub fn new(engine: GameEngine<R>, term: TermManager, tick_interval: Duration) -> Result<Self> {
        term.require_size(NEEDED_SIZE)?;
        let (w, h) = term.size();
        let origin = ((w - NEEDED_SIZE.0) / 2, (h - NEEDED_SIZE.1) / 2);
        Ok(SnakeGame { engine, term, origin, tick_interval })
    }

    /// Runs until the player quits.
    pub fn play(&mut self) -> Result<()> {
        self.term.setup().context("setting up terminal")?;
        self.term.clear()?;
        self.term.draw_borders(self.origin, (BOARD_WIDTH, BOARD_HEIGHT))?;
        self.term.print_str_at((self.origin.0, self.origin.1 + BOARD_HEIGHT), HELP)?;
        self.render()?;
        self.show_prompt()?;

        let mut next_tick = Instant::now() + self.tick_interval;

        loop {
            let running = self.engine.is_running();
            let wait = if running {
                next_tick.saturating_duration_since(Instant::now())
            } else {
                IDLE_POLL
            };

            for key in self.term.read_key_events(wait)? {
                match command_from_key(key) {
                    Some(Command::Quit) => {
                        info!("quit requested");
                        return Ok(());
                    }
                    Some(Command::Start) if !self.engine.is_running() => {
                        self.engine.start();
                        self.term.hide_message()?;
                        self.render()?;
                        next_tick = Instant::now() + self.tick_interval;
                    }
                    // Forwarded in every phase; the engine decides.
                    Some(Command::Turn(direction)) => {
                        self.engine.request_direction(direction);
                    }
                    Some(Command::Start) | None => {}
                }
            }

            if self.engine.is_running() && Instant::now() >= next_tick {
                // Catch up from the schedule, not from now, so the cadence stays fixed.
                next_tick += self.tick_interval;
                let outcome = self.engine.tick();
                self.render()?;
                if let TickOutcome::Crashed(_) = outcome {
                    self.show_prompt()?;
                }
            }
        }
    }

    ///////////////////////////////////////////////////////////////////////////

    fn show_prompt(&mut self) -> Result<()> {
        let lines: &[&str] = match self.engine.phase() {
            Phase::GameOver => &["Game Over!", "", "Press Enter to play again,", "or Esc to quit."],
            _ => &["Snake", "", "Arrow keys or WASD to move", "", "Press Enter to start"],
        };
        self.term.show_message(lines)?;
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        let snapshot = self.engine.snapshot();
        let head_char = Snake::head_char(self.engine.direction());

        for row in 0..ROWS {
            for col in 0..COLS {
                let glyph = glyph_at(&snapshot, Cell::new(row, col), head_char);
                let x = self.origin.0 + 1 + col as u16 * CELL_WIDTH;
                let y = self.origin.1 + 1 + row as u16;
                self.term.print_at((x, y), glyph[0])?;
                self.term.print_at((x + 1, y), glyph[1])?;
            }
        }

        self.term.flush()?;
        Ok(())
    }
}

/// What to draw in one board cell. Food is drawn on top of the snake.
fn glyph_at(snapshot: &Snapshot, cell: Cell, head_char: char) -> [char; 2] {
    if snapshot.food == cell {
        return FOOD;
    }
    match snapshot.snake.iter().position(|&seg| seg == cell) {
        Some(_) if snapshot.game_over => DEAD,
        Some(0) => [head_char, head_char],
        Some(_) => BODY,
        None => EMPTY,
    }
}
