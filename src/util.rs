use crate::consts;
use ratatui::layout::{Flex, Layout, Rect, Size};

/// Return the area of the terminal in which the program draws: a rectangle of
/// [`DISPLAY_SIZE`][consts::DISPLAY_SIZE] centered within `buffer_area`
pub(crate) fn get_display_area(buffer_area: Rect) -> Rect {
    let [display] = Layout::horizontal([consts::DISPLAY_SIZE.width])
        .flex(Flex::Center)
        .areas(buffer_area);
    let [display] = Layout::vertical([consts::DISPLAY_SIZE.height])
        .flex(Flex::Center)
        .areas(display);
    display
}

/// Return a rectangle of the given size centered within `area`, shrunk to fit
/// if necessary.  Leftover odd columns & rows go on the right & bottom.
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let width = size.width.min(area.width);
    let height = size.height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
