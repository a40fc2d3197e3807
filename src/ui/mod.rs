//! UI module for rendering the TUI

mod components;
mod goal_form;
mod guide;
mod layout;
mod result;
mod widgets;

use crate::app::App;
use crate::state::View;
use components::render_error_dialog;
use ratatui::Frame;

pub use widgets::render_scrollable_list;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let main_area = layout::create_layout(frame.area());

    // Draw main content based on current view
    match app.state.current_view {
        View::Goal => goal_form::draw(frame, main_area, app),
        View::Result => result::draw(frame, main_area, app),
        View::Guide => guide::draw(frame, main_area, app),
    }

    // Draw status bar
    layout::draw_status_bar(frame, app);

    // Errors render on top of everything else
    if let Some(message) = app.state.current_error() {
        render_error_dialog(frame, message);
    }
}
