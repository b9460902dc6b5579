//! Truth table pane
//!
//! Shows one column per variable plus the result column. Only the rows that
//! fit are handed to the widget; `scroll` is clamped here so that keys like
//! End can simply overshoot.

use super::pane_block;
use crate::ui::app::Evaluation;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, Wrap},
    Frame,
};

fn bit_cell(value: bool) -> Cell<'static> {
    let (text, color) = if value {
        ("1", DEFAULT_THEME.success)
    } else {
        ("0", DEFAULT_THEME.error)
    };
    Cell::from(Span::styled(text, Style::default().fg(color)))
}

/// Render the truth table pane
pub fn render_table_pane(
    frame: &mut Frame,
    area: Rect,
    evaluation: &Evaluation,
    is_focused: bool,
    scroll: &mut usize,
) {
    let Some(table) = evaluation.table() else {
        let (text, color) = match evaluation {
            Evaluation::Empty => ("Type an expression and press Enter", DEFAULT_THEME.comment),
            _ => ("No table for this expression", DEFAULT_THEME.error),
        };
        let paragraph = Paragraph::new(Line::from(Span::styled(text, Style::default().fg(color))))
            .wrap(Wrap { trim: true })
            .block(pane_block(" Truth Table ", is_focused));
        frame.render_widget(paragraph, area);
        return;
    };

    // Borders and header row
    let visible_rows = (area.height as usize).saturating_sub(3).max(1);
    let max_scroll = table.len().saturating_sub(visible_rows);
    *scroll = (*scroll).min(max_scroll);
    let last_shown = (*scroll + visible_rows).min(table.len());

    let title = format!(
        " Truth Table (rows {}-{} of {}) ",
        *scroll + 1,
        last_shown,
        table.len()
    );

    let header_style = Style::default()
        .fg(DEFAULT_THEME.variable)
        .add_modifier(Modifier::BOLD);
    let header = Row::new(
        table
            .variables()
            .iter()
            .map(|var| Cell::from(var.to_string()))
            .chain(std::iter::once(Cell::from(table.expression().to_string()))),
    )
    .style(header_style);

    let rows = table.rows()[*scroll..last_shown].iter().map(|row| {
        Row::new(
            row.assignment
                .iter()
                .map(|(_, value)| bit_cell(value))
                .chain(std::iter::once(bit_cell(row.result))),
        )
    });

    let widths = table
        .variables()
        .iter()
        .map(|_| Constraint::Length(3))
        .chain(std::iter::once(Constraint::Min(
            table.expression().chars().count() as u16,
        )));

    let widget = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .block(pane_block(&title, is_focused));

    frame.render_widget(widget, area);
}
