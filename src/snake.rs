use std::collections::VecDeque;

use crate::Cell;
use Direction::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    /// (row, col) offset of a single step.
    pub fn delta(self) -> (i16, i16) {
        match self {
            Up => (-1, 0),
            Down => (1, 0),
            Left => (0, -1),
            Right => (0, 1),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MoveResult {
    Moved { new_head: Cell, old_tail: Option<Cell> },
    HitWall { attempted: Cell },
    HitBody { attempted: Cell },
}

/// Snake body, head first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Cell>,
}

impl Snake {
    /// Builds a snake from head-first cells. Returns `None` for an empty body.
    pub fn new(cells: impl IntoIterator<Item = Cell>) -> Option<Self> {
        let body: VecDeque<Cell> = cells.into_iter().collect();
        if body.is_empty() {
            return None;
        }
        Some(Snake { body })
    }

    /// `len` cells in a line starting at `head` and trailing away from `direction`.
    /// `len` is clamped to at least one.
    pub fn straight(head: Cell, len: usize, direction: Direction) -> Self {
        let (dr, dc) = direction.delta();
        let body = (0..len.max(1) as i16)
            .map(|i| Cell::new(head.row - dr * i, head.col - dc * i))
            .collect();
        Snake { body }
    }

    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Moves one cell in `direction`, keeping the tail when `grow` says so.
    ///
    /// Nothing is modified unless the move succeeds. The collision check runs
    /// against the whole pre-move body, tail included, so stepping into the
    /// cell the tail is about to leave is fatal.
    pub fn step(&mut self, direction: Direction, grow: impl FnOnce(Cell) -> bool) -> MoveResult {
        let old_head = self.head();
        let (dr, dc) = direction.delta();
        let new_head = Cell::new(old_head.row + dr, old_head.col + dc);

        if self.body.iter().skip(1).any(|&seg| seg == new_head) {
            return MoveResult::HitBody { attempted: new_head };
        }
        if !new_head.in_bounds() {
            return MoveResult::HitWall { attempted: new_head };
        }

        self.body.push_front(new_head);

        let old_tail = if grow(new_head) { None } else { self.body.pop_back() };
        MoveResult::Moved { new_head, old_tail }
    }

    pub fn head_char(direction: Direction) -> char {
        match direction {
            Up => '^',
            Down => 'v',
            Left => '<',
            Right => '>',
        }
    }
}
