mod board;
mod direction;
mod snake;
pub(crate) use self::board::{Board, Point};
use self::direction::Direction;
use self::snake::Snake;
use crate::command::Command;
use crate::config::Palette;
use crate::consts;
use crate::surface::Surface;
use rand::Rng;

/// The state of a single game of snake: the snake, the food, the score, and
/// whether the game is still going.
///
/// The engine never drives itself; the caller invokes [`GameEngine::tick()`]
/// at a fixed interval and passes key presses to
/// [`GameEngine::handle_input()`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct GameEngine<R = rand::rngs::ThreadRng> {
    rng: R,
    board: Board,
    palette: Palette,
    snake: Snake,
    food: Point,
    score: u32,
    state: GameState,
}

impl<R: Rng> GameEngine<R> {
    /// Create an engine for the given board and start a game on it
    pub(crate) fn new(board: Board, palette: Palette, rng: R) -> GameEngine<R> {
        let mut engine = GameEngine {
            rng,
            board,
            palette,
            snake: Snake::new(board.unit),
            food: Point::ORIGIN,
            score: 0,
            state: GameState::Running,
        };
        engine.start();
        engine
    }

    /// (Re)initialize all game state: a fresh snake heading right along the
    /// top row, zero score, and newly-placed food
    fn start(&mut self) {
        self.snake = Snake::new(self.board.unit);
        self.score = 0;
        self.state = GameState::Running;
        self.place_food();
        tracing::info!(
            width = self.board.width,
            height = self.board.height,
            unit = self.board.unit,
            "starting new game"
        );
    }

    /// Throw away the current game, whatever its state, and start over
    pub(crate) fn reset(&mut self) {
        tracing::info!(score = self.score, "resetting game");
        self.start();
    }

    /// Advance the game by one step if it is running.  Returns `true` if the
    /// game is still running afterwards, i.e., if another tick should be
    /// scheduled.
    pub(crate) fn tick(&mut self) -> bool {
        if self.running() {
            self.advance();
        }
        self.running()
    }

    fn advance(&mut self) {
        let head = self.snake.advance(self.board.unit);
        if head == self.food {
            self.score += 1;
            tracing::debug!(score = self.score, x = head.x, y = head.y, "ate food");
            self.place_food();
        } else {
            self.snake.drop_tail();
        }
        if let Some(cause) = self.check_game_over() {
            tracing::info!(
                ?cause,
                score = self.score,
                length = self.snake.len(),
                "game over"
            );
            self.state = GameState::Over(cause);
        }
    }

    fn check_game_over(&self) -> Option<Loss> {
        if !self.board.contains(self.snake.head()) {
            Some(Loss::OutOfBounds)
        } else if self.snake.bites_itself() {
            Some(Loss::SelfCollision)
        } else {
            None
        }
    }

    /// Move the food to a new random cell.  The snake's position is not taken
    /// into account, so the food may land underneath it.
    fn place_food(&mut self) {
        self.food = self.board.random_cell(&mut self.rng);
        tracing::debug!(x = self.food.x, y = self.food.y, "placed food");
    }
}

impl<R> GameEngine<R> {
    /// Respond to a directional command by turning the snake, unless the new
    /// direction is directly opposite the current one.  Other commands, and
    /// any input after the game has ended, are ignored.
    pub(crate) fn handle_input(&mut self, cmd: Command) {
        if !self.running() {
            return;
        }
        let direction = match cmd {
            Command::Up => Direction::North,
            Command::Down => Direction::South,
            Command::Left => Direction::West,
            Command::Right => Direction::East,
            _ => return,
        };
        if self.snake.turn(direction) {
            tracing::trace!(?direction, "changed direction");
        }
    }

    /// Draw the board onto `surface`
    pub(crate) fn render<S: Surface>(&self, surface: &mut S) {
        let unit = self.board.unit;
        surface.clear(self.palette.background);
        surface.fill_rect(self.food.x, self.food.y, unit, unit, self.palette.food);
        for p in self.snake.cells() {
            surface.fill_rect(p.x, p.y, unit, unit, self.palette.snake);
            surface.stroke_rect(p.x, p.y, unit, unit, self.palette.snake_border);
        }
        if !self.running() {
            surface.fill_text_centered(consts::GAME_OVER_TEXT, self.palette.text);
        }
    }

    pub(crate) fn running(&self) -> bool {
        self.state == GameState::Running
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn board(&self) -> Board {
        self.board
    }

    /// Return the snake's per-tick displacement in pixels
    pub(crate) fn velocity(&self) -> (i32, i32) {
        self.snake.direction().velocity(self.board.unit)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum GameState {
    Running,
    Over(Loss),
}

/// Why a game ended
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Loss {
    /// The snake's head left the board
    OutOfBounds,
    /// The snake's head ran into its body
    SelfCollision,
}
