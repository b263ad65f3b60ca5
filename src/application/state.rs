//! Application state management for the terminal application form.
//!
//! This module contains the form state holder: the applicant's record, the
//! submission lifecycle, and the UI bookkeeping the presentation layer
//! renders from.

use crate::domain::{ApplicationData, FeedbackGenerator, Field, FAILURE_FALLBACK};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

/// The three-state lifecycle of one form submission.
///
/// Transitions are monotonic: `Editing` → `Submitting` → `Submitted`. There
/// is no path back; only relaunching the program resets the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    /// The applicant is filling in the form
    Editing,
    /// The submit trigger fired and the feedback call is in flight
    Submitting,
    /// The confirmation screen is showing
    Submitted,
}

/// What currently receives text input and Enter presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// One of the form fields
    Field(Field),
    /// The submit button
    Submit,
}

/// Full-screen informational popups layered over the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    /// Key reference
    Help,
    /// "Skills You Will Master"
    Skills,
    /// "Program Perks & Benefits"
    Perks,
}

/// How long the confirmation is held back after the feedback call resolves.
pub const REVEAL_DELAY: Duration = Duration::from_millis(800);

/// Main application state for one session of the application form.
///
/// Owns the mutable [`ApplicationData`] record and the submission-phase
/// flags; the presentation layer reads from it and feeds edit and submit
/// events into it. One instance lives for the whole program run.
///
/// # Examples
///
/// ```
/// use gtapply::application::{App, SubmissionPhase};
///
/// let app = App::default();
/// assert_eq!(app.phase, SubmissionPhase::Editing);
/// assert!(app.feedback.is_none());
/// ```
pub struct App {
    /// The applicant's record, mutable until submission
    pub form: ApplicationData,
    /// Current submission phase
    pub phase: SubmissionPhase,
    /// The feedback message, set once per submission
    pub feedback: Option<String>,
    /// The focused field or button
    pub focus: Focus,
    /// Cursor byte offset within the focused field's value
    pub cursor_position: usize,
    /// Open informational popup, if any
    pub overlay: Option<Overlay>,
    /// Scroll position inside the open popup
    pub overlay_scroll: usize,
    /// Busy-indicator animation counter
    pub spinner_frame: usize,
    /// Temporary status message to display
    pub status_message: Option<String>,
    /// Vertical scroll offset of the form viewport
    pub scroll: u16,
    /// Set when the user asked to leave
    pub should_quit: bool,
    /// Delay between the feedback call resolving and the confirmation
    pub reveal_delay: Duration,
    generator: FeedbackGenerator,
    feedback_rx: Option<Receiver<String>>,
    reveal_at: Option<Instant>,
}

impl Default for App {
    fn default() -> Self {
        use crate::infrastructure::GeminiClient;
        use std::sync::Arc;

        Self::new(FeedbackGenerator::new(Arc::new(GeminiClient::from_env())))
    }
}

impl App {
    /// Creates the state holder with the given feedback generator.
    ///
    /// Production wiring passes the Gemini-backed generator; tests pass
    /// mocked models.
    pub fn new(generator: FeedbackGenerator) -> Self {
        Self {
            form: ApplicationData::default(),
            phase: SubmissionPhase::Editing,
            feedback: None,
            focus: Focus::Field(Field::Name),
            cursor_position: 0,
            overlay: None,
            overlay_scroll: 0,
            spinner_frame: 0,
            status_message: None,
            scroll: 0,
            should_quit: false,
            reveal_delay: REVEAL_DELAY,
            generator,
            feedback_rx: None,
            reveal_at: None,
        }
    }

    /// The field under focus, or `None` when the submit button is focused.
    pub fn focused_field(&self) -> Option<Field> {
        match self.focus {
            Focus::Field(field) => Some(field),
            Focus::Submit => None,
        }
    }

    /// Replaces one attribute of the application record.
    ///
    /// No validation; never fails. The new value shows on the next draw.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.form.set_field(field, value.into());
        if self.focused_field() == Some(field) {
            self.cursor_position = self.form.field(field).len();
        }
    }

    /// Moves focus to the next field, wrapping through the submit button.
    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            Focus::Field(Field::Interests) => Focus::Submit,
            Focus::Field(field) => {
                let idx = Field::ALL.iter().position(|f| *f == field).unwrap_or(0);
                Focus::Field(Field::ALL[idx + 1])
            }
            Focus::Submit => Focus::Field(Field::Name),
        };
        self.sync_cursor();
    }

    /// Moves focus to the previous field, wrapping through the submit button.
    pub fn focus_prev(&mut self) {
        self.focus = match self.focus {
            Focus::Field(Field::Name) => Focus::Submit,
            Focus::Field(field) => {
                let idx = Field::ALL.iter().position(|f| *f == field).unwrap_or(0);
                Focus::Field(Field::ALL[idx - 1])
            }
            Focus::Submit => Focus::Field(Field::Interests),
        };
        self.sync_cursor();
    }

    fn sync_cursor(&mut self) {
        self.cursor_position = self
            .focused_field()
            .map(|f| self.form.field(f).len())
            .unwrap_or(0);
    }

    /// Inserts a character at the cursor in the focused field.
    ///
    /// Inert outside the editing phase: the form is frozen from the moment
    /// the submit trigger fires.
    pub fn insert_char(&mut self, c: char) {
        if self.phase != SubmissionPhase::Editing {
            return;
        }
        if let Focus::Field(field) = self.focus {
            self.status_message = None;
            let value = self.form.field_mut(field);
            value.insert(self.cursor_position, c);
            self.cursor_position += c.len_utf8();
        }
    }

    /// Removes the character before the cursor in the focused field.
    pub fn delete_char_back(&mut self) {
        if self.phase != SubmissionPhase::Editing {
            return;
        }
        if let Focus::Field(field) = self.focus {
            let value = self.form.field_mut(field);
            if let Some((idx, _)) = value[..self.cursor_position].char_indices().next_back() {
                value.remove(idx);
                self.cursor_position = idx;
            }
        }
    }

    /// Removes the character under the cursor in the focused field.
    pub fn delete_char_forward(&mut self) {
        if self.phase != SubmissionPhase::Editing {
            return;
        }
        if let Focus::Field(field) = self.focus {
            let value = self.form.field_mut(field);
            if self.cursor_position < value.len() {
                value.remove(self.cursor_position);
            }
        }
    }

    pub fn move_cursor_left(&mut self) {
        if let Focus::Field(field) = self.focus {
            if let Some((idx, _)) = self.form.field(field)[..self.cursor_position]
                .char_indices()
                .next_back()
            {
                self.cursor_position = idx;
            }
        }
    }

    pub fn move_cursor_right(&mut self) {
        if let Focus::Field(field) = self.focus {
            let value = self.form.field(field);
            if let Some(c) = value[self.cursor_position..].chars().next() {
                self.cursor_position += c.len_utf8();
            }
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.sync_cursor();
    }

    /// Whether the submit trigger is currently live.
    ///
    /// The button renders disabled while this is false, and [`App::submit`]
    /// refuses for the same reasons.
    pub fn can_submit(&self) -> bool {
        self.phase == SubmissionPhase::Editing && self.form.required_fields_filled()
    }

    /// Starts the submission workflow.
    ///
    /// A no-op unless the phase is `Editing`, so a second trigger while a
    /// call is in flight (or after completion) cannot start another one.
    /// On success the phase moves to `Submitting` and the feedback call runs
    /// on a worker thread; [`App::on_tick`] picks up the result.
    pub fn submit(&mut self) {
        if self.phase != SubmissionPhase::Editing {
            return;
        }
        if !self.form.required_fields_filled() {
            self.status_message = Some("Please fill in the required fields.".to_string());
            return;
        }

        self.status_message = None;
        self.phase = SubmissionPhase::Submitting;

        let (tx, rx) = mpsc::channel();
        self.feedback_rx = Some(rx);

        let generator = self.generator.clone();
        let snapshot = self.form.clone();
        thread::spawn(move || {
            // A dropped receiver means the controller is gone; the send
            // result is deliberately ignored.
            let _ = tx.send(generator.generate(&snapshot));
        });
    }

    /// Advances time-driven state: the busy indicator, the pending feedback
    /// result, and the post-resolution reveal deadline.
    ///
    /// Called from the main loop at the tick rate. The deadline lives on
    /// this struct, so no timer can outlive the controller.
    pub fn on_tick(&mut self) {
        if self.phase == SubmissionPhase::Submitting {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }

        if let Some(rx) = self.feedback_rx.take() {
            match rx.try_recv() {
                Ok(message) => {
                    self.feedback = Some(message);
                    self.reveal_at = Some(Instant::now() + self.reveal_delay);
                }
                Err(TryRecvError::Empty) => {
                    self.feedback_rx = Some(rx);
                }
                Err(TryRecvError::Disconnected) => {
                    // The worker always sends; a sender dropped without a
                    // message counts as a failed call.
                    self.feedback = Some(FAILURE_FALLBACK.to_string());
                    self.reveal_at = Some(Instant::now() + self.reveal_delay);
                }
            }
        }

        if let Some(deadline) = self.reveal_at {
            if Instant::now() >= deadline {
                self.reveal_at = None;
                self.overlay = None;
                self.scroll = 0;
                self.phase = SubmissionPhase::Submitted;
            }
        }
    }

    /// Toggles an informational popup.
    pub fn toggle_overlay(&mut self, overlay: Overlay) {
        if self.overlay == Some(overlay) {
            self.overlay = None;
        } else {
            self.overlay = Some(overlay);
            self.overlay_scroll = 0;
        }
    }

    pub fn close_overlay(&mut self) {
        self.overlay = None;
        self.overlay_scroll = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GeneratorError, GeneratorResult, TextModel, EMPTY_RESPONSE_FALLBACK};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CannedModel {
        text: &'static str,
        calls: AtomicUsize,
    }

    impl CannedModel {
        fn new(text: &'static str) -> Arc<Self> {
            Arc::new(Self {
                text,
                calls: AtomicUsize::new(0),
            })
        }
    }

    impl TextModel for CannedModel {
        fn generate_text(&self, _prompt: &str) -> GeneratorResult<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.text.to_string())
        }
    }

    struct FailingModel {
        calls: AtomicUsize,
    }

    impl FailingModel {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
            })
        }
    }

    impl TextModel for FailingModel {
        fn generate_text(&self, _prompt: &str) -> GeneratorResult<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(GeneratorError::Transport("connection reset".to_string()))
        }
    }

    fn app_with_model(model: Arc<dyn TextModel>) -> App {
        let mut app = App::new(FeedbackGenerator::new(model));
        app.reveal_delay = Duration::ZERO;
        app.update_field(Field::Name, "Rahul Verma");
        app.update_field(Field::Course, "BCA, Lucknow University");
        app.update_field(Field::Contact, "+919876543210");
        app.update_field(Field::Interests, "app development");
        app
    }

    fn pump_until_submitted(app: &mut App) {
        let started = Instant::now();
        while app.phase != SubmissionPhase::Submitted {
            assert!(
                started.elapsed() < Duration::from_secs(5),
                "submission did not complete"
            );
            app.on_tick();
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_app_initial_state() {
        let app = App::default();
        assert_eq!(app.phase, SubmissionPhase::Editing);
        assert_eq!(app.focus, Focus::Field(Field::Name));
        assert!(app.feedback.is_none());
        assert!(app.overlay.is_none());
        assert!(!app.should_quit);
        assert_eq!(app.reveal_delay, REVEAL_DELAY);
    }

    #[test]
    fn test_update_field_replaces_value() {
        let mut app = App::default();
        app.update_field(Field::Name, "Asha");
        assert_eq!(app.form.name, "Asha");
        app.update_field(Field::Name, "Asha Singh");
        assert_eq!(app.form.name, "Asha Singh");
    }

    #[test]
    fn test_char_editing_on_focused_field() {
        let mut app = App::default();
        app.insert_char('R');
        app.insert_char('a');
        app.insert_char('j');
        assert_eq!(app.form.name, "Raj");

        app.delete_char_back();
        assert_eq!(app.form.name, "Ra");

        app.move_cursor_home();
        app.delete_char_forward();
        assert_eq!(app.form.name, "a");
    }

    #[test]
    fn test_focus_cycles_through_fields_and_submit() {
        let mut app = App::default();
        for expected in Field::ALL {
            assert_eq!(app.focus, Focus::Field(expected));
            app.focus_next();
        }
        assert_eq!(app.focus, Focus::Submit);
        app.focus_next();
        assert_eq!(app.focus, Focus::Field(Field::Name));

        app.focus_prev();
        assert_eq!(app.focus, Focus::Submit);
        app.focus_prev();
        assert_eq!(app.focus, Focus::Field(Field::Interests));
    }

    #[test]
    fn test_submit_displays_generated_message() {
        let model = CannedModel::new("Great fit, Rahul!");
        let mut app = app_with_model(model.clone());

        app.submit();
        assert_eq!(app.phase, SubmissionPhase::Submitting);

        pump_until_submitted(&mut app);
        assert_eq!(app.feedback.as_deref(), Some("Great fit, Rahul!"));
        assert_eq!(model.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_submit_failure_displays_failure_fallback() {
        let model = FailingModel::new();
        let mut app = app_with_model(model.clone());

        app.submit();
        pump_until_submitted(&mut app);

        assert_eq!(app.feedback.as_deref(), Some(FAILURE_FALLBACK));
        assert_eq!(model.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_empty_model_text_displays_empty_fallback() {
        let model = CannedModel::new("");
        let mut app = app_with_model(model);

        app.submit();
        pump_until_submitted(&mut app);

        assert_eq!(app.feedback.as_deref(), Some(EMPTY_RESPONSE_FALLBACK));
    }

    #[test]
    fn test_optional_fields_may_stay_empty() {
        let model = CannedModel::new("Welcome!");
        let mut app = app_with_model(model);
        app.update_field(Field::Interests, "");
        app.update_field(Field::College, "");

        assert!(app.can_submit());
        app.submit();
        pump_until_submitted(&mut app);
        assert_eq!(app.phase, SubmissionPhase::Submitted);
    }

    #[test]
    fn test_missing_required_field_blocks_submission() {
        let model = CannedModel::new("Welcome!");
        let mut app = app_with_model(model.clone());
        app.update_field(Field::Contact, "");

        assert!(!app.can_submit());
        app.submit();

        assert_eq!(app.phase, SubmissionPhase::Editing);
        assert!(app.status_message.is_some());
        assert_eq!(model.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_rapid_double_submit_calls_generator_once() {
        let model = CannedModel::new("Welcome!");
        let mut app = app_with_model(model.clone());

        app.submit();
        app.submit();
        pump_until_submitted(&mut app);

        assert_eq!(model.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_submitted_is_terminal() {
        let model = CannedModel::new("Welcome!");
        let mut app = app_with_model(model.clone());

        app.submit();
        pump_until_submitted(&mut app);

        app.submit();
        app.on_tick();
        assert_eq!(app.phase, SubmissionPhase::Submitted);
        assert_eq!(model.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_editing_is_frozen_while_submitting() {
        let model = CannedModel::new("Welcome!");
        let mut app = app_with_model(model);

        app.submit();
        let before = app.form.clone();
        app.insert_char('x');
        app.delete_char_back();
        assert_eq!(app.form, before);
    }

    #[test]
    fn test_reveal_waits_for_delay_after_resolution() {
        let model = CannedModel::new("Welcome!");
        let mut app = app_with_model(model);
        app.reveal_delay = Duration::from_millis(150);
        app.scroll = 7;

        app.submit();

        let started = Instant::now();
        while app.feedback.is_none() {
            assert!(started.elapsed() < Duration::from_secs(5));
            app.on_tick();
            thread::sleep(Duration::from_millis(5));
        }

        // Message received, but the confirmation is held back.
        assert_eq!(app.phase, SubmissionPhase::Submitting);

        thread::sleep(Duration::from_millis(200));
        app.on_tick();
        assert_eq!(app.phase, SubmissionPhase::Submitted);
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn test_overlay_toggling() {
        let mut app = App::default();
        app.toggle_overlay(Overlay::Skills);
        assert_eq!(app.overlay, Some(Overlay::Skills));

        app.toggle_overlay(Overlay::Perks);
        assert_eq!(app.overlay, Some(Overlay::Perks));

        app.toggle_overlay(Overlay::Perks);
        assert!(app.overlay.is_none());

        app.toggle_overlay(Overlay::Help);
        app.close_overlay();
        assert!(app.overlay.is_none());
    }
}
