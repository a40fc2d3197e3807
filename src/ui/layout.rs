//! Layout components (content area, status bar)

use crate::app::App;
use crate::i18n::I18nKey;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const QUIT_HINT: &str = " ^C:quit ";

/// Create the main layout, reserving the bottom line for the status bar
pub fn create_layout(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    chunks[0]
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    // Persistence consent
    let consent = if app.state.form.save_submission() {
        Span::styled(
            format!(" ● {} ", app.i18n.t(I18nKey::ConsentOn)),
            Style::default().fg(Color::Green),
        )
    } else {
        Span::styled(
            format!(" ○ {} ", app.i18n.t(I18nKey::ConsentOff)),
            Style::default().fg(Color::Gray),
        )
    };
    spans.push(consent);

    let hints = app.i18n.t(view_hint_key(app.state.current_view));
    spans.push(Span::styled(hints, Style::default().fg(Color::Black)));

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Yellow)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    let quit_area = Rect {
        x: area.width.saturating_sub(QUIT_HINT.len() as u16),
        y: area.height.saturating_sub(1),
        width: (QUIT_HINT.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(QUIT_HINT).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for the current view
fn view_hint_key(view: View) -> I18nKey {
    match view {
        View::Goal => I18nKey::HintGoal,
        View::Result => I18nKey::HintResult,
        View::Guide => I18nKey::HintGuide,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_layout_reserves_status_line() {
        let content = create_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(content, Rect::new(0, 0, 80, 23));
    }

    #[test]
    fn test_every_view_has_hints() {
        assert_eq!(view_hint_key(View::Goal), I18nKey::HintGoal);
        assert_eq!(view_hint_key(View::Result), I18nKey::HintResult);
        assert_eq!(view_hint_key(View::Guide), I18nKey::HintGuide);
    }
}
