//! Guide view rendering the localized markdown document

use crate::app::App;
use crate::i18n::I18nKey;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the guide view
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(format!(" ← {} (Esc) ", app.i18n.t(I18nKey::GoBackToResults)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let content = if let Some(guide) = &app.state.guide {
        render_markdown(&guide.content)
    } else {
        vec![Line::from(Span::styled(
            app.i18n.t(I18nKey::GuideNotFound),
            Style::default().fg(Color::Red),
        ))]
    };

    let scroll = app.state.scroll_offset.min(u16::MAX as usize) as u16;
    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));

    frame.render_widget(paragraph, area);
}

/// Basic markdown styling, one output line per input line
pub fn render_markdown(markdown: &str) -> Vec<Line<'static>> {
    let mut in_code_block = false;
    let mut lines = Vec::new();

    for line in markdown.lines() {
        if line.trim_start().starts_with("```") {
            in_code_block = !in_code_block;
            lines.push(Line::from(Span::styled(
                line.to_string(),
                Style::default().fg(Color::DarkGray),
            )));
            continue;
        }
        if in_code_block {
            lines.push(Line::from(Span::styled(
                line.to_string(),
                Style::default().fg(Color::Yellow),
            )));
            continue;
        }

        let styled = if let Some(stripped) = line.strip_prefix("# ") {
            Line::from(Span::styled(
                strip_emphasis(stripped),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ))
        } else if let Some(stripped) = line.strip_prefix("## ") {
            Line::from(Span::styled(
                strip_emphasis(stripped),
                Style::default().fg(Color::Cyan),
            ))
        } else if let Some(stripped) = line.strip_prefix("### ") {
            Line::from(Span::styled(
                strip_emphasis(stripped),
                Style::default().fg(Color::Blue),
            ))
        } else if let Some(stripped) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
            Line::from(vec![
                Span::styled("• ", Style::default().fg(Color::Cyan)),
                Span::raw(strip_emphasis(stripped)),
            ])
        } else if let Some((number, rest)) = split_numbered(line) {
            Line::from(vec![
                Span::styled(format!("{number}. "), Style::default().fg(Color::Cyan)),
                Span::raw(strip_emphasis(rest)),
            ])
        } else {
            Line::from(strip_emphasis(line))
        };
        lines.push(styled);
    }

    lines
}

/// Split "12. text" into ("12", "text")
fn split_numbered(line: &str) -> Option<(&str, &str)> {
    let (number, rest) = line.split_once(". ")?;
    if !number.is_empty() && number.chars().all(|c| c.is_ascii_digit()) {
        Some((number, rest))
    } else {
        None
    }
}

fn strip_emphasis(text: &str) -> String {
    text.replace("**", "").replace("__", "")
}
