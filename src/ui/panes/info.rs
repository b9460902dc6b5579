//! Details pane: how the expression was read, or why it was rejected

use super::pane_block;
use crate::parser::lexer::normalize;
use crate::ui::app::Evaluation;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

fn field(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{:<12}", label),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::styled(value, Style::default().fg(DEFAULT_THEME.fg)),
    ])
}

fn variable_list(variables: &[char]) -> String {
    variables
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render the details pane for the last submitted expression
pub fn render_info_pane(frame: &mut Frame, area: Rect, submitted: &str, evaluation: &Evaluation) {
    let mut lines = Vec::new();

    match evaluation {
        Evaluation::Empty => {
            lines.push(Line::from(Span::styled(
                "Operators: ! ~ (not)  * (and)  ^ (xor)  + (or)",
                Style::default().fg(DEFAULT_THEME.comment),
            )));
        }
        Evaluation::Ready { parsed, table } => {
            lines.push(field("Normalized", parsed.normalized().to_string()));
            lines.push(field("Postfix", parsed.postfix_string()));
            lines.push(field("Variables", variable_list(parsed.variables())));
            lines.push(field("Rows", table.len().to_string()));
            lines.push(field("True rows", table.true_count().to_string()));
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:<12}", "Result"),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(
                    table.classification().to_string(),
                    Style::default()
                        .fg(DEFAULT_THEME.secondary)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
        }
        Evaluation::Refused { parsed, error } => {
            lines.push(field("Normalized", parsed.normalized().to_string()));
            lines.push(field("Postfix", parsed.postfix_string()));
            lines.push(field("Variables", variable_list(parsed.variables())));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                error.to_string(),
                Style::default().fg(DEFAULT_THEME.error),
            )));
        }
        Evaluation::Invalid(error) => {
            let normalized = normalize(submitted);
            lines.push(field("Normalized", normalized));
            if let Some(position) = error.position {
                // Caret under the offending character
                lines.push(field("", format!("{}^", " ".repeat(position))));
            }
            lines.push(field("Rule", format!("{:?}", error.kind)));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                error.message.clone(),
                Style::default()
                    .fg(DEFAULT_THEME.error)
                    .add_modifier(Modifier::BOLD),
            )));
        }
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(pane_block(" Details ", false));
    frame.render_widget(paragraph, area);
}
