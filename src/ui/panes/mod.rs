//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`input`]: Expression input line
//! - [`table`]: Truth table with colored result cells
//! - [`info`]: Normalized form, postfix form, classification or parse error
//! - [`status`]: Status bar with keybindings
//!
//! Each pane module exports a primary `render_*` function that draws into the
//! area it is given and keeps no state of its own; scroll offsets live in
//! [`App`](crate::ui::App).

pub mod info;
pub mod input;
pub mod status;
pub mod table;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    style::{Modifier, Style},
    widgets::{Block, Borders},
};

pub use info::render_info_pane;
pub use input::render_input_pane;
pub use status::render_status_bar;
pub use table::render_table_pane;

/// Bordered block with the focus highlight shared by all panes
fn pane_block(title: &str, is_focused: bool) -> Block<'_> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}
