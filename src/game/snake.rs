use super::board::Point;
use super::direction::Direction;
use crate::consts;
use std::collections::VecDeque;

/// Snake state.
///
/// The head is kept apart from the rest of the body so that a snake can never
/// be empty.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    /// The position of the snake's head
    pub(super) head: Point,

    /// The positions of the remaining cells, starting with the one right
    /// behind the head and ending with the tail
    pub(super) body: VecDeque<Point>,

    /// The direction in which the snake is currently moving
    pub(super) direction: Direction,
}

impl Snake {
    /// Create the snake a game starts with: [`INITIAL_SNAKE_LENGTH`] cells
    /// laid out along the top row, head rightmost and facing east
    ///
    /// [`INITIAL_SNAKE_LENGTH`]: consts::INITIAL_SNAKE_LENGTH
    pub(super) fn new(unit: i32) -> Snake {
        let mut cells = (0..consts::INITIAL_SNAKE_LENGTH)
            .rev()
            .map(|i| Point::new(i * unit, 0));
        let head = cells.next().unwrap_or(Point::ORIGIN);
        Snake {
            head,
            body: cells.collect(),
            direction: Direction::East,
        }
    }

    /// Return the position of the snake's head
    pub(super) fn head(&self) -> Point {
        self.head
    }

    pub(super) fn direction(&self) -> Direction {
        self.direction
    }

    /// Return the number of cells occupied by the snake, head included
    pub(super) fn len(&self) -> usize {
        self.body.len() + 1
    }

    /// Iterate over the snake's cells from head to tail
    pub(super) fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        std::iter::once(self.head).chain(self.body.iter().copied())
    }

    /// Change the snake's direction to `direction` unless that would make it
    /// turn back on itself.  Returns `true` if the direction was changed.
    pub(super) fn turn(&mut self, direction: Direction) -> bool {
        if direction == self.direction.reverse() {
            false
        } else {
            self.direction = direction;
            true
        }
    }

    /// Move the head one cell forwards in the current direction, keeping the
    /// old head as the first body cell.  The tail stays put; call
    /// [`Snake::drop_tail()`] afterwards unless the snake is growing.
    pub(super) fn advance(&mut self, unit: i32) -> Point {
        self.body.push_front(self.head);
        self.head = self.direction.step(self.head, unit);
        self.head
    }

    pub(super) fn drop_tail(&mut self) {
        let _ = self.body.pop_back();
    }

    /// Does the head overlap any other part of the snake?
    pub(super) fn bites_itself(&self) -> bool {
        self.body.contains(&self.head)
    }
}
