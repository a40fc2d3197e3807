//! Application state definitions

use super::forms::{FormContext, GoalFormModel, GoalType, StepController};
use crate::guide::GuideDocument;
use crate::i18n::I18nKey;
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Goal selection step
    #[default]
    Goal,
    /// Results after the last step
    Result,
    /// Markdown guide
    Guide,
}

impl View {
    /// Whether this view hosts a questionnaire step
    pub fn is_form_view(&self) -> bool {
        matches!(self, Self::Goal)
    }
}

/// Focus on the goal page (radio group vs submit button)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GoalFocus {
    #[default]
    Options,
    SubmitButton,
}

impl GoalFocus {
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Options => Self::SubmitButton,
            Self::SubmitButton => Self::Options,
        };
    }
}

/// Buttons on the results page, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultAction {
    OpenGuide,
    StartOver,
    Quit,
}

impl ResultAction {
    pub const ALL: [ResultAction; 3] = [Self::OpenGuide, Self::StartOver, Self::Quit];

    pub fn label_key(&self) -> I18nKey {
        match self {
            Self::OpenGuide => I18nKey::OpenGuide,
            Self::StartOver => I18nKey::StartOver,
            Self::Quit => I18nKey::Quit,
        }
    }
}

/// Main application state
#[derive(Debug)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub view_history: Vec<View>,

    // Questionnaire
    pub form: FormContext,
    pub goal_step: StepController<GoalFormModel>,
    pub goal_cursor: usize,
    pub goal_focus: GoalFocus,
    pub hint_expanded: bool,

    // Results
    pub result_selected: usize,
    /// A write was handed to the store; its outcome is never observed
    pub submission_requested: bool,

    // Guide
    pub guide: Option<GuideDocument>,
    pub scroll_offset: usize,

    // Errors waiting to be shown, oldest first
    pub error_queue: VecDeque<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(false)
    }
}

impl AppState {
    pub fn new(save_submission: bool) -> Self {
        let form = FormContext::new(save_submission);
        let goal_step = StepController::mount(&form);
        Self {
            current_view: View::default(),
            view_history: Vec::new(),
            form,
            goal_step,
            goal_cursor: 0,
            goal_focus: GoalFocus::default(),
            hint_expanded: false,
            result_selected: 0,
            submission_requested: false,
            guide: None,
            scroll_offset: 0,
            error_queue: VecDeque::new(),
        }
    }

    /// Re-mount the goal step from the aggregate, e.g. after navigating back
    pub fn remount_goal_step(&mut self) {
        self.goal_step = StepController::mount(&self.form);
        self.goal_cursor = self
            .form
            .form_model()
            .goal
            .and_then(|goal| GoalType::ALL.iter().position(|g| *g == goal))
            .unwrap_or(0);
        self.goal_focus = GoalFocus::default();
    }

    /// Forget every answer and return to the first step
    pub fn restart_flow(&mut self) {
        self.form.restart();
        self.remount_goal_step();
        self.view_history.clear();
        self.current_view = View::Goal;
        self.submission_requested = false;
        self.result_selected = 0;
        self.reset_scroll();
    }

    /// Goal under the radio cursor
    pub fn highlighted_goal(&self) -> GoalType {
        GoalType::ALL[self.goal_cursor.min(GoalType::ALL.len() - 1)]
    }

    pub fn move_goal_cursor_down(&mut self) {
        if self.goal_cursor + 1 < GoalType::ALL.len() {
            self.goal_cursor += 1;
        }
    }

    pub fn move_goal_cursor_up(&mut self) {
        self.goal_cursor = self.goal_cursor.saturating_sub(1);
    }

    pub fn move_result_selection_down(&mut self) {
        self.result_selected = (self.result_selected + 1) % ResultAction::ALL.len();
    }

    pub fn move_result_selection_up(&mut self) {
        if self.result_selected == 0 {
            self.result_selected = ResultAction::ALL.len() - 1;
        } else {
            self.result_selected -= 1;
        }
    }

    pub fn selected_result_action(&self) -> ResultAction {
        ResultAction::ALL[self.result_selected % ResultAction::ALL.len()]
    }

    /// Reset scroll position
    pub fn reset_scroll(&mut self) {
        self.scroll_offset = 0;
    }

    /// Scroll down
    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    /// Scroll up
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll down a page (10 lines)
    pub fn scroll_down_page(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(10);
    }

    /// Scroll up a page (10 lines)
    pub fn scroll_up_page(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(10);
    }

    /// Queue an error for the error dialog
    pub fn push_error(&mut self, message: String) {
        tracing::warn!("{message}");
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::FormFieldId;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_state_starts_on_goal() {
        let state = AppState::default();
        assert_eq!(state.current_view, View::Goal);
        assert!(state.view_history.is_empty());
        assert!(!state.form.save_submission());
        assert!(state.form.form_model().is_empty());
    }

    #[test]
    fn test_goal_cursor_is_clamped() {
        let mut state = AppState::default();
        state.move_goal_cursor_up();
        assert_eq!(state.goal_cursor, 0);
        for _ in 0..10 {
            state.move_goal_cursor_down();
        }
        assert_eq!(state.goal_cursor, GoalType::ALL.len() - 1);
        assert_eq!(state.highlighted_goal(), GoalType::GainWeight);
    }

    #[test]
    fn test_result_selection_wraps() {
        let mut state = AppState::default();
        state.move_result_selection_up();
        assert_eq!(state.selected_result_action(), ResultAction::Quit);
        state.move_result_selection_down();
        assert_eq!(state.selected_result_action(), ResultAction::OpenGuide);
    }

    #[test]
    fn test_remount_places_cursor_on_saved_goal() {
        let mut state = AppState::default();
        state.form.set_form_model(GoalFormModel {
            goal: GoalType::MaintainWeight,
        });
        state.remount_goal_step();
        assert_eq!(state.goal_cursor, 1);
        assert_eq!(
            state.goal_step.values().get(FormFieldId::Goal),
            Some("MaintainWeight")
        );
    }

    #[test]
    fn test_restart_flow_clears_answers() {
        let mut state = AppState::new(true);
        state.form.set_form_model(GoalFormModel {
            goal: GoalType::GainWeight,
        });
        state.current_view = View::Result;
        state.view_history.push(View::Goal);
        state.submission_requested = true;

        state.restart_flow();

        assert_eq!(state.current_view, View::Goal);
        assert!(state.view_history.is_empty());
        assert!(state.form.form_model().is_empty());
        assert!(state.form.save_submission());
        assert!(!state.submission_requested);
        assert_eq!(state.goal_step.values().get(FormFieldId::Goal), None);
    }

    #[test]
    fn test_error_queue_is_fifo() {
        let mut state = AppState::default();
        state.push_error("first".to_string());
        state.push_error("second".to_string());
        assert_eq!(state.current_error(), Some("first"));
        state.dismiss_error();
        assert_eq!(state.current_error(), Some("second"));
        state.dismiss_error();
        assert!(!state.has_errors());
    }

    #[test]
    fn test_scroll_saturates() {
        let mut state = AppState::default();
        state.scroll_up();
        assert_eq!(state.scroll_offset, 0);
        state.scroll_down_page();
        state.scroll_down();
        assert_eq!(state.scroll_offset, 11);
        state.scroll_up_page();
        assert_eq!(state.scroll_offset, 1);
    }

    #[test]
    fn test_focus_toggle() {
        let mut focus = GoalFocus::default();
        focus.toggle();
        assert_eq!(focus, GoalFocus::SubmitButton);
        focus.toggle();
        assert_eq!(focus, GoalFocus::Options);
    }
}
