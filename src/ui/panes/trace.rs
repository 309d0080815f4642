//! Derivation trace pane rendering
//!
//! Shows the symbol-string input line and, after a parse, the step table
//! (stack, remaining input, action per step) followed by the verdict.

use crate::parser::{TraceAction, TraceEntry, Verdict};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the derivation trace pane.
#[allow(clippy::too_many_arguments)]
pub fn render_trace_pane(
    frame: &mut Frame,
    area: Rect,
    symbols: &str,
    editing: bool,
    trace: &[TraceEntry],
    verdict: Option<Verdict>,
    is_focused: bool,
    scroll: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Derivation Trace ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let mut lines: Vec<Line> = Vec::new();

    // Input line, with a block cursor while editing.
    let mut input_spans = vec![
        Span::styled("Symbols: ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(
            symbols.to_string(),
            Style::default()
                .fg(DEFAULT_THEME.fg)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if editing {
        input_spans.push(Span::styled(
            "█",
            Style::default().fg(DEFAULT_THEME.secondary),
        ));
    } else if symbols.is_empty() {
        input_spans.push(Span::styled(
            "press 'e' to enter a symbol string ending in #",
            Style::default().fg(DEFAULT_THEME.comment),
        ));
    }
    lines.push(Line::from(input_spans));
    lines.push(Line::from(""));

    if !trace.is_empty() || verdict.is_some() {
        let stack_width = trace
            .iter()
            .map(|e| e.stack_display().chars().count())
            .max()
            .unwrap_or(0)
            .max(5);
        let input_width = trace
            .iter()
            .map(|e| e.remaining.chars().count())
            .max()
            .unwrap_or(0)
            .max(5);

        lines.push(Line::from(Span::styled(
            format!(
                "{:<4}  {:<sw$}  {:<iw$}  {}",
                "Step",
                "Stack",
                "Input",
                "Action",
                sw = stack_width,
                iw = input_width
            ),
            Style::default()
                .fg(DEFAULT_THEME.comment)
                .add_modifier(Modifier::BOLD),
        )));

        for entry in trace {
            let action_style = match entry.action {
                TraceAction::Match(_) => Style::default().fg(DEFAULT_THEME.operator),
                TraceAction::Apply { .. } => Style::default().fg(DEFAULT_THEME.nonterminal),
                TraceAction::Accept => Style::default()
                    .fg(DEFAULT_THEME.success)
                    .add_modifier(Modifier::BOLD),
            };
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:<4}  ", entry.step),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(
                    format!("{:<sw$}  ", entry.stack_display(), sw = stack_width),
                    Style::default().fg(DEFAULT_THEME.fg),
                ),
                Span::styled(
                    format!("{:<iw$}  ", entry.remaining, iw = input_width),
                    Style::default().fg(DEFAULT_THEME.secondary),
                ),
                Span::styled(entry.action.to_string(), action_style),
            ]));
        }

        if let Some(verdict) = verdict {
            lines.push(Line::from(""));
            let (text, style) = match verdict {
                Verdict::Accepted => (
                    "Result: accepted",
                    Style::default()
                        .fg(DEFAULT_THEME.success)
                        .add_modifier(Modifier::BOLD),
                ),
                Verdict::Rejected => (
                    "Result: rejected",
                    Style::default()
                        .fg(DEFAULT_THEME.error)
                        .add_modifier(Modifier::BOLD),
                ),
            };
            lines.push(Line::from(Span::styled(text, style)));
        }
    }

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let max_scroll = lines.len().saturating_sub(visible_height);
    *scroll = (*scroll).min(max_scroll);

    let visible: Vec<Line> = lines.into_iter().skip(*scroll).take(visible_height).collect();
    let paragraph = Paragraph::new(visible).block(block);
    frame.render_widget(paragraph, area);
}
