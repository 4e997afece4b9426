//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};

/// Default time between movements of the snake, in milliseconds
pub(crate) const DEFAULT_TICK_DELAY: u64 = 90;

/// Default width of the board in pixels
pub(crate) const DEFAULT_BOARD_WIDTH: u16 = 500;

/// Default height of the board in pixels
pub(crate) const DEFAULT_BOARD_HEIGHT: u16 = 500;

/// Default size of one grid cell in pixels
pub(crate) const DEFAULT_UNIT_SIZE: u16 = 25;

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 24,
};

/// Number of terminal columns used to draw one grid cell
pub(crate) const CELL_WIDTH: u16 = 2;

/// Snake length at the start of a game
pub(crate) const INITIAL_SNAKE_LENGTH: i32 = 5;

/// Text shown over the board once the game has ended
pub(crate) const GAME_OVER_TEXT: &str = "GAME OVER";

/// Key reminder shown beneath the board
pub(crate) const HELP_TEXT: &str = " Move: ← ↓ ↑ → / h j k l / a s w d | Reset: r | Quit: q";

pub(crate) const DEFAULT_BACKGROUND_COLOR: Color = Color::White;

pub(crate) const DEFAULT_SNAKE_COLOR: Color = Color::LightGreen;

pub(crate) const DEFAULT_SNAKE_BORDER_COLOR: Color = Color::Black;

pub(crate) const DEFAULT_FOOD_COLOR: Color = Color::Red;

pub(crate) const DEFAULT_TEXT_COLOR: Color = Color::Black;

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);
