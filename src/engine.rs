//! Session state and the fixed-tick step function.
//!
//! [`GameEngine`] owns exactly one [`GameSession`]. It never schedules
//! anything itself: a caller invokes [`GameEngine::tick`] at whatever cadence
//! it likes, and forwards player input through
//! [`GameEngine::request_direction`].

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::snake::{Direction, MoveResult, Snake};
use crate::{Cell, COLS, ROWS};

pub const INITIAL_HEAD: Cell = Cell::new(10, 10);
pub const INITIAL_LENGTH: usize = 3;
pub const INITIAL_DIRECTION: Direction = Direction::Right;

/// Everything that makes up one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    pub snake: Snake,
    pub direction: Direction,
    pub food: Cell,
    pub game_over: bool,
    pub running: bool,
}

impl GameSession {
    /// The pre-game layout with the given food cell. Not running.
    pub fn idle(food: Cell) -> Self {
        GameSession {
            snake: Snake::straight(INITIAL_HEAD, INITIAL_LENGTH, INITIAL_DIRECTION),
            direction: INITIAL_DIRECTION,
            food,
            game_over: false,
            running: false,
        }
    }

    pub fn phase(&self) -> Phase {
        match (self.running, self.game_over) {
            (true, _) => Phase::Active,
            (false, true) => Phase::GameOver,
            (false, false) => Phase::Idle,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Before the first start.
    Idle,
    Active,
    /// Terminal until the next start.
    GameOver,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Crash {
    Wall,
    Body,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// The session was not running; nothing changed.
    Idle,
    Moved { ate: bool },
    Crashed(Crash),
}

/// Read-only copy of the state a renderer needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub snake: Vec<Cell>,
    pub food: Cell,
    pub game_over: bool,
    pub running: bool,
}

pub struct GameEngine<R = StdRng> {
    session: GameSession,
    rng: R,
}

impl GameEngine<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Same seed, same food sequence.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for GameEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> GameEngine<R> {
    pub fn with_rng(mut rng: R) -> Self {
        let food = random_cell(&mut rng);
        GameEngine { session: GameSession::idle(food), rng }
    }

    pub fn from_session(session: GameSession, rng: R) -> Self {
        GameEngine { session, rng }
    }

    /// Resets to the initial layout with fresh food and starts running.
    pub fn start(&mut self) {
        let food = random_cell(&mut self.rng);
        self.session = GameSession { running: true, ..GameSession::idle(food) };
        info!("session started, food at ({}, {})", food.row, food.col);
    }

    /// Changes heading unless `direction` reverses the current one.
    ///
    /// Accepted in every phase; the new heading is only observed by the next
    /// [`tick`](Self::tick). Returns whether the request was accepted.
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        if direction == self.session.direction.opposite() {
            debug!("ignored reversal {:?} -> {:?}", self.session.direction, direction);
            return false;
        }
        self.session.direction = direction;
        true
    }

    /// Advances the snake by one cell.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.session.running {
            return TickOutcome::Idle;
        }

        let food = self.session.food;
        let res = self.session.snake.step(self.session.direction, |head| head == food);

        match res {
            MoveResult::Moved { new_head, old_tail } => {
                let ate = old_tail.is_none();
                if ate {
                    self.session.food = random_cell(&mut self.rng);
                    debug!(
                        "ate food at ({}, {}), length {}, next food at ({}, {})",
                        new_head.row,
                        new_head.col,
                        self.session.snake.len(),
                        self.session.food.row,
                        self.session.food.col
                    );
                }
                TickOutcome::Moved { ate }
            }
            MoveResult::HitWall { attempted } => self.end(Crash::Wall, attempted),
            MoveResult::HitBody { attempted } => self.end(Crash::Body, attempted),
        }
    }

    fn end(&mut self, crash: Crash, at: Cell) -> TickOutcome {
        self.session.game_over = true;
        self.session.running = false;
        info!(
            "game over: {:?} at ({}, {}), length {}",
            crash,
            at.row,
            at.col,
            self.session.snake.len()
        );
        TickOutcome::Crashed(crash)
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    pub fn snake(&self) -> &Snake {
        &self.session.snake
    }

    pub fn food(&self) -> Cell {
        self.session.food
    }

    pub fn direction(&self) -> Direction {
        self.session.direction
    }

    pub fn is_game_over(&self) -> bool {
        self.session.game_over
    }

    pub fn is_running(&self) -> bool {
        self.session.running
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            snake: self.session.snake.body().iter().copied().collect(),
            food: self.session.food,
            game_over: self.session.game_over,
            running: self.session.running,
        }
    }
}

/// Uniform over the whole board; the snake's cells are not excluded.
fn random_cell<R: Rng>(rng: &mut R) -> Cell {
    Cell::new(rng.gen_range(0..ROWS), rng.gen_range(0..COLS))
}
