//! Status bar rendering with keybindings and state indicators

use crate::ui::app::{Evaluation, FocusedPane};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the status bar at the bottom.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    focused_pane: FocusedPane,
    evaluation: &Evaluation,
) {
    // Split status bar into left and right
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let (badge, badge_color) = match evaluation {
        Evaluation::Empty => (" EMPTY ", DEFAULT_THEME.comment),
        Evaluation::Ready { .. } => (" OK ", DEFAULT_THEME.success),
        Evaluation::Refused { .. } => (" REFUSED ", DEFAULT_THEME.secondary),
        Evaluation::Invalid(_) => (" ERROR ", DEFAULT_THEME.error),
    };
    let message_color = match evaluation {
        Evaluation::Invalid(_) | Evaluation::Refused { .. } => DEFAULT_THEME.error,
        _ => DEFAULT_THEME.fg,
    };

    let left_spans = vec![
        Span::styled(
            badge,
            Style::default()
                .bg(badge_color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(message_color),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds for the focused pane
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.comment);

    let bindings: &[(&str, &str)] = match focused_pane {
        FocusedPane::Input => &[(" ↵ ", " evaluate "), (" ⇥ ", " table "), (" esc ", " quit ")],
        FocusedPane::Table => &[
            (" ↑/↓ ", " scroll "),
            (" e ", " edit "),
            (" ⇥ ", " input "),
            (" q ", " quit "),
        ],
    };

    let mut right_spans = Vec::new();
    for (i, (key, desc)) in bindings.iter().enumerate() {
        if i > 0 {
            right_spans.push(Span::styled("│", sep_style));
            right_spans.push(Span::styled(" ", desc_style));
        }
        right_spans.push(Span::styled(*key, key_style));
        right_spans.push(Span::styled(*desc, desc_style));
    }

    let focus_label = match focused_pane {
        FocusedPane::Input => " EDIT ",
        FocusedPane::Table => " VIEW ",
    };
    right_spans.push(Span::styled("│", sep_style));
    right_spans.push(Span::styled(
        focus_label,
        Style::default()
            .bg(DEFAULT_THEME.primary)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
    ));

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
