//! Results page shown after the last step

use super::components::{render_action_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::i18n::I18nKey;
use crate::state::ResultAction;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Draw the results page
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let mut constraints = vec![
        Constraint::Length(2), // Title
        Constraint::Length(2), // Goal summary
        Constraint::Length(2), // Persistence notice
    ];
    constraints.extend(ResultAction::ALL.iter().map(|_| Constraint::Length(BUTTON_HEIGHT)));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        app.i18n.t(I18nKey::ResultPageTitle),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, chunks[0]);

    let summary = match app.state.form.form_model().goal {
        Some(goal) => {
            let label = app.i18n.t(goal.label_key()).to_lowercase();
            Span::raw(app.i18n.t_with(I18nKey::ToAchieveGoal, &[("goal", &label)]))
        }
        None => Span::styled(
            app.i18n.t(I18nKey::ResultNoGoal),
            Style::default().fg(Color::DarkGray),
        ),
    };
    frame.render_widget(Paragraph::new(summary), chunks[1]);

    let notice = if app.state.submission_requested {
        Span::styled(
            app.i18n.t(I18nKey::SubmissionSaving),
            Style::default().fg(Color::Yellow),
        )
    } else {
        Span::styled(
            app.i18n.t(I18nKey::SubmissionNotSaved),
            Style::default().fg(Color::DarkGray),
        )
    };
    frame.render_widget(Paragraph::new(notice), chunks[2]);

    let selected = app.state.selected_result_action();
    for (idx, action) in ResultAction::ALL.iter().enumerate() {
        let slot = chunks[3 + idx];
        let area = Rect {
            width: slot.width.min(30),
            ..slot
        };
        let accent = match action {
            ResultAction::Quit => Some(Color::Red),
            _ => None,
        };
        render_action_button(
            frame,
            area,
            &app.i18n.t(action.label_key()),
            *action == selected,
            true,
            accent,
        );
    }
}
