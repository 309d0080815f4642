//! Token stream pane rendering
//!
//! Displays the tokens scanned from the loaded source file, one per row with
//! location, class, and spelling. A lexical error, if one stopped the scan,
//! is shown after the tokens that were produced before it.

use crate::scanner::{LexError, Token, TokenKind};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn kind_color(kind: TokenKind) -> Color {
    match kind {
        TokenKind::Keyword => DEFAULT_THEME.keyword,
        TokenKind::Identifier => DEFAULT_THEME.identifier,
        TokenKind::Number => DEFAULT_THEME.number,
        TokenKind::Operator => DEFAULT_THEME.operator,
        TokenKind::Delimiter => DEFAULT_THEME.delimiter,
        TokenKind::StringLiteral => DEFAULT_THEME.string,
    }
}

/// Render the token stream pane.
pub fn render_tokens_pane(
    frame: &mut Frame,
    area: Rect,
    source_name: Option<&str>,
    tokens: &[Token],
    error: Option<&LexError>,
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

    let title = match source_name {
        Some(name) => format!(" Tokens — {} ", name),
        None => " Tokens ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    let mut lines: Vec<Line> = Vec::new();

    if tokens.is_empty() && error.is_none() {
        lines.push(Line::from(Span::styled(
            " no source loaded — start with `lextrace tui <file>` ",
            Style::default().fg(DEFAULT_THEME.comment),
        )));
    }

    for token in tokens {
        let text = match token.kind {
            TokenKind::StringLiteral => format!("{:?}", token.text),
            _ => token.text.clone(),
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:>4}:{:<4}", token.location.line, token.location.column),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
            Span::styled(
                format!(" {:<11}", token.kind.to_string()),
                Style::default().fg(DEFAULT_THEME.primary),
            ),
            Span::styled(text, Style::default().fg(kind_color(token.kind))),
        ]));
    }

    if let Some(error) = error {
        lines.push(Line::from(Span::styled(
            format!("{}", error),
            Style::default()
                .fg(DEFAULT_THEME.error)
                .add_modifier(Modifier::BOLD),
        )));
    }

    // Clamp the scroll offset to the renderable range.
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let max_scroll = lines.len().saturating_sub(visible_height);
    *scroll = (*scroll).min(max_scroll);

    let visible: Vec<Line> = lines.into_iter().skip(*scroll).take(visible_height).collect();
    let paragraph = Paragraph::new(visible).block(block);
    frame.render_widget(paragraph, area);
}
