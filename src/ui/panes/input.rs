//! Expression input line

use super::pane_block;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::Paragraph,
    Frame,
};

/// Render the input pane and place the cursor after the text when focused
pub fn render_input_pane(frame: &mut Frame, area: Rect, input: &str, is_focused: bool) {
    let block = pane_block(" Expression ", is_focused);

    // Keep the tail of long input visible
    let inner_width = area.width.saturating_sub(2) as usize;
    let length = input.chars().count();
    let skip = (length + 1).saturating_sub(inner_width);
    let visible: String = input.chars().skip(skip).collect();
    let cursor_offset = visible.chars().count() as u16;

    let paragraph = Paragraph::new(visible)
        .style(Style::default().fg(DEFAULT_THEME.fg))
        .block(block);
    frame.render_widget(paragraph, area);

    if is_focused {
        let x = area.x + 1 + cursor_offset;
        frame.set_cursor_position((x, area.y + 1));
    }
}
