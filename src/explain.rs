//! Seam for a hosted service that explains an application card in prose.
//!
//! No transport lives in this crate. Implementations of [`ExplanationService`]
//! receive their credentials through an [`ExplainerConfig`] value and report
//! failures as [`ExplanationError`]; [`explain_or_fallback`] turns any failure
//! into the fixed apology text shown to the reader.

use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, error};

use crate::errors::ExplanationError;

/// Model requested when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Text used when the service answered without any text.
pub const NO_ANSWER_TEXT: &str = "Uzr, ma'lumot topilmadi.";

/// Text used when the request itself failed.
pub const FALLBACK_TEXT: &str =
    "Kechirasiz, hozir bog'lanishda xatolik yuz berdi. Birozdan so'ng urinib ko'ring.";

/// Credentials and model selection for an explanation service.
#[derive(Clone, PartialEq, Eq)]
pub struct ExplainerConfig {
    /// Secret used to authenticate against the service.
    pub api_key: String,
    /// Model identifier.
    pub model: String,
}

impl ExplainerConfig {
    /// Configuration for `api_key` using [`DEFAULT_MODEL`].
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Replace the model identifier.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Reject an empty key before any request is attempted.
    ///
    /// # Errors
    ///
    /// Returns [`ExplanationError::MissingApiKey`] when the key is blank.
    pub fn validate(&self) -> Result<&Self, ExplanationError> {
        if self.api_key.trim().is_empty() {
            return Err(ExplanationError::MissingApiKey);
        }
        Ok(self)
    }
}

impl std::fmt::Debug for ExplainerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExplainerConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .finish()
    }
}

/// Prose answer together with the pages it was grounded on.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Explanation {
    /// Explanatory paragraph.
    pub text: String,
    /// Source URLs, without duplicates, in the order they were first cited.
    pub sources: Vec<String>,
}

impl Explanation {
    /// Build an explanation from a raw service reply.
    ///
    /// Missing or blank text becomes [`NO_ANSWER_TEXT`]; repeated sources are dropped.
    ///
    /// # Examples
    /// ```
    /// use pythagorx::Explanation;
    ///
    /// let explanation = Explanation::from_reply(
    ///     Some("Ladders form right triangles.".to_string()),
    ///     vec!["https://a.example".into(), "https://a.example".into()],
    /// );
    /// assert_eq!(explanation.sources.len(), 1);
    /// ```
    #[must_use]
    pub fn from_reply<I>(text: Option<String>, sources: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let text = text
            .filter(|text| !text.trim().is_empty())
            .unwrap_or_else(|| NO_ANSWER_TEXT.to_string());
        let mut seen = HashSet::new();
        let unique = sources
            .into_iter()
            .filter(|source| seen.insert(source.clone()))
            .collect();
        Self {
            text,
            sources: unique,
        }
    }

    /// Apology shown when the service could not be reached.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            text: FALLBACK_TEXT.to_string(),
            sources: Vec::new(),
        }
    }
}

/// A service able to explain how the theorem applies to a topic.
pub trait ExplanationService {
    /// Ask for an explanation of `question` in the context of `topic`.
    ///
    /// # Errors
    ///
    /// Returns [`ExplanationError`] when no answer could be obtained.
    fn explain(&self, topic: &str, question: &str) -> Result<Explanation, ExplanationError>;
}

/// Ask `service` and substitute [`Explanation::fallback`] for any failure.
pub fn explain_or_fallback<S>(service: &S, topic: &str, question: &str) -> Explanation
where
    S: ExplanationService + ?Sized,
{
    match service.explain(topic, question) {
        Ok(explanation) => {
            debug!(topic, sources = explanation.sources.len(), "explanation received");
            explanation
        }
        Err(err) => {
            error!(topic, error = %err, "explanation request failed");
            Explanation::fallback()
        }
    }
}
