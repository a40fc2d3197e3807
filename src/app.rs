//! Application state and core logic

use crate::config::{Settings, TuiConfig};
use crate::guide;
use crate::i18n::Translator;
use crate::state::{AppState, FormFieldId, GoalFocus, ResultAction, StepOutcome, View};
use crate::store::{JsonlSubmissionStore, SubmissionRecorder, SubmissionStore};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;
use std::sync::Arc;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Localized strings
    pub i18n: Translator,
    /// Consent-gated submission writer
    recorder: SubmissionRecorder,
    /// Directory holding the guide documents
    docs_dir: PathBuf,
    /// Persisted user configuration and where to write it back
    config: TuiConfig,
    config_path: Option<PathBuf>,
    /// Whether the app should quit
    quit: bool,
    /// Transient feedback shown in the status bar
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance from the on-disk configuration
    pub fn new(config: TuiConfig, settings: Settings) -> Result<Self> {
        let i18n = Translator::new(settings.language.as_deref())?;
        let store = Arc::new(JsonlSubmissionStore::new(&settings.submissions_path));
        let submissions = store.path().to_path_buf();
        let save_submissions = settings.save_submissions;
        let app = Self::with_parts(i18n, store, settings, config, TuiConfig::default_path());
        tracing::info!(
            language = app.i18n.resolved_language(),
            save_submissions,
            submissions = %submissions.display(),
            session = %app.recorder.session_id(),
            "Starting questionnaire"
        );
        Ok(app)
    }

    /// Assemble an App from explicit collaborators
    pub fn with_parts(
        i18n: Translator,
        store: Arc<dyn SubmissionStore>,
        settings: Settings,
        config: TuiConfig,
        config_path: Option<PathBuf>,
    ) -> Self {
        Self {
            state: AppState::new(settings.save_submissions),
            i18n,
            recorder: SubmissionRecorder::new(store),
            docs_dir: settings.docs_dir,
            config,
            config_path,
            quit: false,
            status_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        self.status_message = None;

        match self.state.current_view {
            View::Goal => self.handle_goal_key(key).await,
            View::Result => self.handle_result_key(key).await,
            View::Guide => self.handle_guide_key(key),
        }
    }

    /// Navigate to a new view
    pub fn navigate(&mut self, view: View) {
        self.state.view_history.push(self.state.current_view);
        self.state.current_view = view;
        self.state.reset_scroll();
    }

    /// Go back to previous view
    pub fn go_back(&mut self) {
        if let Some(view) = self.state.view_history.pop() {
            // Steps re-read their values from the aggregate
            if view.is_form_view() {
                self.state.remount_goal_step();
            }
            self.state.current_view = view;
            self.state.reset_scroll();
        }
    }

    /// Handle keys on the goal step
    async fn handle_goal_key(&mut self, key: KeyEvent) -> Result<()> {
        let on_options = self.state.goal_focus == GoalFocus::Options;

        match key.code {
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit_goal_step();
            }
            KeyCode::Tab | KeyCode::BackTab => {
                if on_options {
                    self.state.goal_step.blur(FormFieldId::Goal);
                }
                self.state.goal_focus.toggle();
            }
            KeyCode::Char('?') => self.state.hint_expanded = !self.state.hint_expanded,
            KeyCode::Char('c') => self.toggle_consent(),
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            KeyCode::Up | KeyCode::Char('k') if on_options => self.state.move_goal_cursor_up(),
            KeyCode::Down | KeyCode::Char('j') if on_options => {
                self.state.move_goal_cursor_down()
            }
            KeyCode::Char(' ') if on_options => self.select_highlighted_goal(),
            KeyCode::Backspace | KeyCode::Delete if on_options => {
                self.state.goal_step.clear(FormFieldId::Goal);
            }
            KeyCode::Char(c @ '1'..='9') if on_options => {
                let index = (c as usize) - ('1' as usize);
                if index < crate::state::GoalType::ALL.len() {
                    self.state.goal_cursor = index;
                    self.select_highlighted_goal();
                }
            }
            KeyCode::Enter if on_options => {
                // Enter picks the highlighted goal and submits in one go
                self.select_highlighted_goal();
                self.submit_goal_step();
            }
            KeyCode::Enter => self.submit_goal_step(),
            _ => {}
        }
        Ok(())
    }

    fn select_highlighted_goal(&mut self) {
        let goal = self.state.highlighted_goal();
        self.state.goal_step.change(FormFieldId::Goal, goal.as_str());
    }

    /// Validate the goal step, merge it, record the submission, then navigate
    pub fn submit_goal_step(&mut self) {
        match self.state.goal_step.submit(&mut self.state.form) {
            StepOutcome::Ignored => {
                tracing::debug!(phase = ?self.state.goal_step.phase(), "Submit ignored");
            }
            StepOutcome::Invalid(_) => {
                self.state.goal_focus = GoalFocus::Options;
            }
            StepOutcome::Accepted { next } => {
                // Goal is the final step: persist before leaving, without waiting
                let handle = self
                    .recorder
                    .record(self.state.form.form_model(), self.state.form.save_submission());
                self.state.submission_requested = handle.is_some();
                drop(handle);

                self.state.result_selected = 0;
                self.navigate(next);
                self.state.goal_step.mark_navigated();
            }
        }
    }

    /// Flip the persistence consent flag and remember the choice
    fn toggle_consent(&mut self) {
        let enabled = !self.state.form.save_submission();
        self.state.form.set_save_submission(enabled);
        self.config.save_submissions = Some(enabled);

        if let Some(path) = self.config_path.clone() {
            if let Err(e) = self.config.save_to(&path) {
                tracing::warn!("Failed to save config: {e:#}");
                self.status_message = Some("Could not save settings".to_string());
            }
        }
    }

    /// Handle keys on the results page
    async fn handle_result_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.state.move_result_selection_up(),
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
                self.state.move_result_selection_down()
            }
            KeyCode::Char('g') => self.open_guide().await,
            KeyCode::Char('b') | KeyCode::Esc => self.go_back(),
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Enter => match self.state.selected_result_action() {
                ResultAction::OpenGuide => self.open_guide().await,
                ResultAction::StartOver => self.state.restart_flow(),
                ResultAction::Quit => self.quit = true,
            },
            _ => {}
        }
        Ok(())
    }

    /// Load the guide for the current language and show it
    async fn open_guide(&mut self) {
        self.navigate(View::Guide);

        let language = self.i18n.resolved_language();
        let result = guide::load_guide(&self.docs_dir, language).await;

        match result {
            Ok(doc) => self.state.guide = Some(doc),
            Err(e) => {
                self.state.guide = None;
                self.push_error(format!("{e:#}"));
            }
        }
    }

    /// Handle keys in the guide view
    fn handle_guide_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.state.scroll_down(),
            KeyCode::Up | KeyCode::Char('k') => self.state.scroll_up(),
            KeyCode::Char('d') | KeyCode::PageDown => self.state.scroll_down_page(),
            KeyCode::Char('u') | KeyCode::PageUp => self.state.scroll_up_page(),
            KeyCode::Esc | KeyCode::Char('b') => self.go_back(),
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
        Ok(())
    }
}
