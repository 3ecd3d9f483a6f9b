//! Classification of raw upstream failures.

use derive_getters::Getters;
use giotto_core::ErrorCategory;

/// Phrase table matched in order against upstream failure text.
const FAILURE_PHRASES: &[(ErrorCategory, &[&str])] = &[
    (
        ErrorCategory::RateLimit,
        &[
            "exceeded your monthly included credits",
            "rate limit reached",
            "too many requests",
        ],
    ),
    (ErrorCategory::ModelLoading, &["currently loading"]),
    (
        ErrorCategory::ModelNotFound,
        &["does not exist", "not found"],
    ),
    (
        ErrorCategory::Authentication,
        &[
            "unauthorized",
            "invalid token",
            "invalid credentials",
            "authorization header",
        ],
    ),
    (
        ErrorCategory::InvalidInput,
        &["invalid input", "bad request", "unprocessable"],
    ),
    (
        ErrorCategory::ServerError,
        &["internal server error", "server error", "service unavailable"],
    ),
];

/// Transport failure phrases, only consulted for unstructured bodies.
const NETWORK_PHRASES: &[&str] = &[
    "failed to fetch",
    "fetch failed",
    "request failed",
    "connection refused",
    "network error",
    "cross-origin",
    "cors",
];

/// A classified upstream failure: one category plus a user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Classification {
    /// The failure category
    category: ErrorCategory,
    /// Human-readable message suitable for the client
    message: String,
}

impl Classification {
    fn new(category: ErrorCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
        }
    }
}

/// Classify a raw failure body into exactly one category.
///
/// Structured bodies carry their failure text in an `error` field, which is
/// matched against the phrase table. Unstructured bodies are substring
/// matched against the same table plus transport failure phrases. Anything
/// unmatched is `Unknown`, with the original text passed through verbatim.
///
/// Total and deterministic: identical bodies always classify identically.
pub fn classify(body: &str) -> Classification {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(text) = value.get("error").and_then(|e| e.as_str()) {
            return match match_phrases(text, FAILURE_PHRASES) {
                Some(category) => Classification::new(category, user_message(category, text)),
                None => Classification::new(ErrorCategory::Unknown, text),
            };
        }
    }

    if let Some(category) = match_phrases(body, FAILURE_PHRASES) {
        return Classification::new(category, user_message(category, body));
    }

    let haystack = body.to_lowercase();
    if NETWORK_PHRASES.iter().any(|p| haystack.contains(p)) {
        return Classification::new(
            ErrorCategory::NetworkError,
            user_message(ErrorCategory::NetworkError, body),
        );
    }

    Classification::new(ErrorCategory::Unknown, body)
}

fn match_phrases(text: &str, table: &[(ErrorCategory, &[&str])]) -> Option<ErrorCategory> {
    let haystack = text.to_lowercase();
    table
        .iter()
        .find(|(_, phrases)| phrases.iter().any(|p| haystack.contains(p)))
        .map(|(category, _)| *category)
}

fn user_message(category: ErrorCategory, original: &str) -> String {
    match category {
        ErrorCategory::RateLimit => {
            "Rate limit reached: the shared inference quota is exhausted. \
             Supply your own Hugging Face API key to continue."
                .into()
        }
        ErrorCategory::Authentication => {
            "Authentication with the upstream provider failed. Check the supplied API key.".into()
        }
        ErrorCategory::ModelLoading => {
            "The model is still loading upstream. Try again in a few moments.".into()
        }
        ErrorCategory::ModelNotFound => {
            "The requested model could not be found upstream.".into()
        }
        ErrorCategory::InvalidInput => {
            "The upstream provider rejected the request input.".into()
        }
        ErrorCategory::ServerError => {
            "The upstream provider reported an internal error.".into()
        }
        ErrorCategory::NetworkError => "Could not reach the upstream provider.".into(),
        ErrorCategory::Unknown => original.into(),
    }
}
