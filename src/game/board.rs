use crate::config::BoardConfig;
use rand::Rng;

/// A position on the board, in pixels from the top-left corner.  Coordinates
/// are signed so that a snake head which has run off the board can still be
/// represented.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub(crate) struct Point {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Point {
    pub(crate) const ORIGIN: Point = Point { x: 0, y: 0 };

    pub(crate) const fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }

    pub(crate) fn offset(self, dx: i32, dy: i32) -> Point {
        Point {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

/// Board geometry: the pixel dimensions of the playing field and the size of
/// a single grid cell
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Board {
    pub(crate) width: i32,
    pub(crate) height: i32,
    pub(crate) unit: i32,
}

impl Board {
    pub(crate) fn contains(self, p: Point) -> bool {
        (0..self.width).contains(&p.x) && (0..self.height).contains(&p.y)
    }

    /// Number of grid cells across the board
    pub(crate) fn columns(self) -> i32 {
        self.width / self.unit
    }

    /// Number of grid cells down the board
    pub(crate) fn rows(self) -> i32 {
        self.height / self.unit
    }

    /// Pick a random grid-aligned cell.  Each axis is sampled uniformly from
    /// `[0, dimension - unit)` and then rounded to the nearest multiple of
    /// `unit`, so the first and last cells on each axis come up half as often
    /// as the others.
    pub(crate) fn random_cell<R: Rng>(self, rng: &mut R) -> Point {
        Point {
            x: random_coordinate(rng, self.width, self.unit),
            y: random_coordinate(rng, self.height, self.unit),
        }
    }
}

impl From<BoardConfig> for Board {
    fn from(cfg: BoardConfig) -> Board {
        Board {
            width: i32::from(cfg.width),
            height: i32::from(cfg.height),
            unit: i32::from(cfg.unit_size),
        }
    }
}

fn random_coordinate<R: Rng>(rng: &mut R, dimension: i32, unit: i32) -> i32 {
    let max = f64::from(dimension - unit);
    if max <= 0.0 {
        return 0;
    }
    let unit_f = f64::from(unit);
    let raw = rng.random_range(0.0..max);
    // `raw / unit_f` is below `dimension / unit`, which fits in an i32.
    #[allow(clippy::cast_possible_truncation)]
    let cells = (raw / unit_f).round() as i32;
    cells * unit
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use rstest::rstest;

    const BOARD: Board = Board {
        width: 500,
        height: 300,
        unit: 25,
    };

    #[rstest]
    #[case(Point::new(0, 0), true)]
    #[case(Point::new(475, 275), true)]
    #[case(Point::new(499, 299), true)]
    #[case(Point::new(500, 0), false)]
    #[case(Point::new(0, 300), false)]
    #[case(Point::new(-25, 0), false)]
    #[case(Point::new(0, -25), false)]
    fn test_contains(#[case] p: Point, #[case] inside: bool) {
        assert_eq!(BOARD.contains(p), inside);
    }

    #[test]
    fn grid_size() {
        assert_eq!(BOARD.columns(), 20);
        assert_eq!(BOARD.rows(), 12);
    }

    #[test]
    fn random_cells_are_aligned_and_in_bounds() {
        let mut rng = ChaCha12Rng::seed_from_u64(0x0123456789ABCDEF);
        for _ in 0..10_000 {
            let p = BOARD.random_cell(&mut rng);
            assert_eq!(p.x % BOARD.unit, 0, "x = {} is not grid-aligned", p.x);
            assert_eq!(p.y % BOARD.unit, 0, "y = {} is not grid-aligned", p.y);
            assert!(
                (0..=BOARD.width - BOARD.unit).contains(&p.x),
                "x = {} is out of range",
                p.x
            );
            assert!(
                (0..=BOARD.height - BOARD.unit).contains(&p.y),
                "y = {} is out of range",
                p.y
            );
        }
    }

    #[test]
    fn random_cells_reach_both_edges() {
        let mut rng = ChaCha12Rng::seed_from_u64(42);
        let cells = (0..10_000)
            .map(|_| BOARD.random_cell(&mut rng))
            .collect::<Vec<_>>();
        assert!(cells.iter().any(|p| p.x == 0), "no cell on the left edge");
        assert!(
            cells.iter().any(|p| p.x == BOARD.width - BOARD.unit),
            "no cell on the right edge"
        );
        assert!(cells.iter().any(|p| p.y == 0), "no cell on the top edge");
        assert!(
            cells.iter().any(|p| p.y == BOARD.height - BOARD.unit),
            "no cell on the bottom edge"
        );
    }

    #[test]
    fn single_row_board() {
        let board = Board {
            width: 125,
            height: 25,
            unit: 25,
        };
        let mut rng = ChaCha12Rng::seed_from_u64(7);
        for _ in 0..100 {
            assert_eq!(board.random_cell(&mut rng).y, 0);
        }
    }
}
