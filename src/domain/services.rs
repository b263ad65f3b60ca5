//! Feedback generation for submitted applications.
//!
//! This module turns an application record into a short, personalized
//! encouragement message by prompting an external text-generation model.
//! The generator is deliberately total: whatever happens on the wire, the
//! caller always gets a displayable string back.

use super::errors::GeneratorResult;
use super::models::ApplicationData;
use log::warn;
use std::sync::Arc;

/// Fallback shown when the model call succeeds but returns no text.
pub const EMPTY_RESPONSE_FALLBACK: &str =
    "Thank you for your application! We'll review your details shortly.";

/// Fallback shown when the model call fails outright.
pub const FAILURE_FALLBACK: &str =
    "Thank you for applying to GramTech Labs! We are excited to review your profile.";

/// A text-generation backend.
///
/// The single production implementation is the Gemini client in the
/// infrastructure layer; tests substitute canned or failing models.
pub trait TextModel: Send + Sync {
    fn generate_text(&self, prompt: &str) -> GeneratorResult<String>;
}

/// Produces the personalized feedback message for a submitted application.
///
/// `generate` never fails outward: transport errors, authentication
/// problems, and unusable responses are absorbed here and replaced with one
/// of two fixed fallback strings. Failures are recorded in the operational
/// log only; the applicant never sees an error state.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use gtapply::domain::{ApplicationData, FeedbackGenerator, GeneratorResult, TextModel};
///
/// struct Canned;
/// impl TextModel for Canned {
///     fn generate_text(&self, _prompt: &str) -> GeneratorResult<String> {
///         Ok("Welcome aboard!".to_string())
///     }
/// }
///
/// let generator = FeedbackGenerator::new(Arc::new(Canned));
/// assert_eq!(generator.generate(&ApplicationData::default()), "Welcome aboard!");
/// ```
#[derive(Clone)]
pub struct FeedbackGenerator {
    model: Arc<dyn TextModel>,
}

impl FeedbackGenerator {
    pub fn new(model: Arc<dyn TextModel>) -> Self {
        Self { model }
    }

    /// Builds the natural-language prompt for one application.
    ///
    /// Embeds the applicant's name, course, and interest statement; the
    /// remaining fields are contact details with no bearing on the message.
    pub fn build_prompt(data: &ApplicationData) -> String {
        format!(
            "Analyze this student's application for GramTech Labs.\n\
             GramTech Labs is a technical skill development startup in Lucknow \
             focusing on app building and automation.\n\
             Student Data:\n\
             - Name: {}\n\
             - Course: {}\n\
             - Interests/Experience: {}\n\n\
             Provide a short, encouraging feedback message (max 3 sentences) \
             addressed to the student about why their background or interest \
             makes them a potentially great fit for the program.",
            data.name, data.course, data.interests
        )
    }

    /// Generates the feedback message for an application.
    ///
    /// Returns the model's text when it produced any, the empty-response
    /// fallback when the call succeeded with nothing to show, and the
    /// failure fallback when the call errored. Always returns a non-empty
    /// string.
    pub fn generate(&self, data: &ApplicationData) -> String {
        let prompt = Self::build_prompt(data);

        match self.model.generate_text(&prompt) {
            Ok(text) if !text.is_empty() => text,
            Ok(_) => {
                warn!("text model returned an empty message, using fallback");
                EMPTY_RESPONSE_FALLBACK.to_string()
            }
            Err(err) => {
                warn!("feedback generation failed: {}", err);
                FAILURE_FALLBACK.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GeneratorError;

    struct CannedModel(&'static str);

    impl TextModel for CannedModel {
        fn generate_text(&self, _prompt: &str) -> GeneratorResult<String> {
            Ok(self.0.to_string())
        }
    }

    struct FailingModel;

    impl TextModel for FailingModel {
        fn generate_text(&self, _prompt: &str) -> GeneratorResult<String> {
            Err(GeneratorError::Transport("connection refused".to_string()))
        }
    }

    fn sample_application() -> ApplicationData {
        ApplicationData {
            name: "Rahul Verma".to_string(),
            course: "BCA, Lucknow University".to_string(),
            college: String::new(),
            contact: "+919876543210".to_string(),
            interests: "app development".to_string(),
        }
    }

    #[test]
    fn test_prompt_embeds_application_fields() {
        let prompt = FeedbackGenerator::build_prompt(&sample_application());

        assert!(prompt.contains("Rahul Verma"));
        assert!(prompt.contains("BCA, Lucknow University"));
        assert!(prompt.contains("app development"));
        assert!(prompt.contains("GramTech Labs"));
        assert!(prompt.contains("max 3 sentences"));
    }

    #[test]
    fn test_prompt_omits_contact_details() {
        let prompt = FeedbackGenerator::build_prompt(&sample_application());
        assert!(!prompt.contains("+919876543210"));
    }

    #[test]
    fn test_generate_returns_model_text() {
        let generator = FeedbackGenerator::new(Arc::new(CannedModel("Great fit, Rahul!")));
        assert_eq!(generator.generate(&sample_application()), "Great fit, Rahul!");
    }

    #[test]
    fn test_empty_response_uses_empty_fallback() {
        let generator = FeedbackGenerator::new(Arc::new(CannedModel("")));
        assert_eq!(
            generator.generate(&sample_application()),
            "Thank you for your application! We'll review your details shortly."
        );
    }

    #[test]
    fn test_failure_uses_failure_fallback() {
        let generator = FeedbackGenerator::new(Arc::new(FailingModel));
        assert_eq!(
            generator.generate(&sample_application()),
            "Thank you for applying to GramTech Labs! We are excited to review your profile."
        );
    }

    #[test]
    fn test_generate_is_total_for_empty_input() {
        let generator = FeedbackGenerator::new(Arc::new(CannedModel("ok")));
        assert!(!generator.generate(&ApplicationData::default()).is_empty());
    }
}
