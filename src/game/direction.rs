use super::board::Point;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Return the displacement of one cell step in this direction, with cells
    /// `unit` pixels wide
    pub(crate) fn velocity(self, unit: i32) -> (i32, i32) {
        match self {
            Direction::North => (0, -unit),
            Direction::East => (unit, 0),
            Direction::South => (0, unit),
            Direction::West => (-unit, 0),
        }
    }

    /// Return the position one cell step away from `pos` in this direction.
    /// Board bounds are not consulted.
    pub(crate) fn step(self, pos: Point, unit: i32) -> Point {
        let (dx, dy) = self.velocity(unit);
        pos.offset(dx, dy)
    }

    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }
}
