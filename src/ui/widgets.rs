//! Reusable UI widget helpers

use ratatui::{
    layout::Rect,
    widgets::{List, ListState},
    Frame,
};

/// Render a list that keeps the highlighted row in view.
///
/// `highlighted` is `None` when the list does not have focus; the list then
/// renders from the top without a highlighted row.
pub fn render_scrollable_list(
    frame: &mut Frame,
    area: Rect,
    list: List,
    highlighted: Option<usize>,
) {
    let mut list_state = ListState::default().with_selected(highlighted);
    frame.render_stateful_widget(list, area, &mut list_state);
}
