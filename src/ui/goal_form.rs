//! Goal selection page

use super::components::{render_button, BUTTON_HEIGHT};
use super::render_scrollable_list;
use crate::app::App;
use crate::i18n::{I18nKey, Translator};
use crate::state::{FormFieldId, GoalFocus, GoalType};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

const HINT_PARAGRAPHS: [I18nKey; 3] = [
    I18nKey::GoalPageFirstParagraph,
    I18nKey::GoalPageSecondParagraph,
    I18nKey::GoalPageThirdParagraph,
];

/// Draw the goal page
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let hint_height = if app.state.hint_expanded { 9 } else { 1 };
    let options_height = GoalType::ALL.len() as u16 + 2;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),              // Title
            Constraint::Length(hint_height),    // Why are we asking?
            Constraint::Length(options_height), // Radio group
            Constraint::Length(1),              // Field error
            Constraint::Length(BUTTON_HEIGHT),  // Submit
            Constraint::Min(0),
        ])
        .margin(1)
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        app.i18n.t(I18nKey::GoalPageTitle),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, chunks[0]);

    draw_hint(frame, chunks[1], app);
    draw_options(frame, chunks[2], app);

    if let Some(error) = app.state.goal_step.visible_error(FormFieldId::Goal) {
        let error = Paragraph::new(Span::styled(
            app.i18n.t(error),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(error, chunks[3]);
    }

    let button_area = Rect {
        width: chunks[4].width.min(30),
        ..chunks[4]
    };
    render_button(
        frame,
        button_area,
        &app.i18n.t(I18nKey::SeeResults),
        app.state.goal_focus == GoalFocus::SubmitButton,
        app.state.goal_step.can_submit(),
    );
}

fn draw_hint(frame: &mut Frame, area: Rect, app: &App) {
    let marker = if app.state.hint_expanded { "▾" } else { "▸" };
    let mut lines = vec![Line::from(vec![
        Span::styled(format!("{marker} "), Style::default().fg(Color::Cyan)),
        Span::styled(
            app.i18n.t(I18nKey::WhyAreWeAsking),
            Style::default().add_modifier(Modifier::UNDERLINED),
        ),
        Span::styled(" (?)", Style::default().fg(Color::DarkGray)),
    ])];

    if app.state.hint_expanded {
        for key in HINT_PARAGRAPHS {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                app.i18n.t(key),
                Style::default().fg(Color::Gray),
            )));
        }
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn draw_options(frame: &mut Frame, area: Rect, app: &App) {
    let on_options = app.state.goal_focus == GoalFocus::Options;
    let selected = app.state.goal_step.values().get(FormFieldId::Goal);

    let items: Vec<ListItem> = GoalType::ALL
        .iter()
        .enumerate()
        .map(|(idx, goal)| {
            let checked = selected == Some(goal.as_str());
            let radio = if checked { "(•)" } else { "( )" };
            let highlighted = on_options && idx == app.state.goal_cursor;

            let style = if highlighted {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };
            let radio_style = if checked {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", idx + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(radio, radio_style),
                Span::raw(" "),
                Span::styled(option_label(&app.i18n, *goal), style),
            ]))
        })
        .collect();

    let border_color = if on_options {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color)),
    );

    render_scrollable_list(frame, area, list, on_options.then_some(app.state.goal_cursor));
}

/// Radio label such as "To achieve goal: gain weight"
fn option_label(i18n: &Translator, goal: GoalType) -> String {
    let goal_label = i18n.t(goal.label_key()).to_lowercase();
    i18n.t_with(I18nKey::ToAchieveGoal, &[("goal", &goal_label)])
}
