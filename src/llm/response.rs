use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Completion(String),
    Failure(String),
}

/// The result of asking one provider for a completion.
///
/// Success and failure stay distinguishable here; they are only collapsed into
/// a single string by [`ProviderResponse::text`] when the report is rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderResponse {
    /// Short provider name used in error text, e.g. "OpenAI".
    pub provider: String,
    /// Report section label, e.g. "OpenAI GPT-4".
    pub heading: String,
    pub outcome: Outcome,
}

impl ProviderResponse {
    pub fn completion<P, H, T>(provider: P, heading: H, text: T) -> ProviderResponse
    where
        P: Into<String>,
        H: Into<String>,
        T: Into<String>,
    {
        ProviderResponse {
            provider: provider.into(),
            heading: heading.into(),
            outcome: Outcome::Completion(text.into()),
        }
    }

    pub fn failure<P, H, T>(provider: P, heading: H, reason: T) -> ProviderResponse
    where
        P: Into<String>,
        H: Into<String>,
        T: Into<String>,
    {
        ProviderResponse {
            provider: provider.into(),
            heading: heading.into(),
            outcome: Outcome::Failure(reason.into()),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self.outcome, Outcome::Failure(_))
    }

    pub fn text(&self) -> String {
        match &self.outcome {
            Outcome::Completion(text) => text.clone(),
            Outcome::Failure(reason) => format!("Error querying {}: {}", self.provider, reason),
        }
    }
}

impl fmt::Display for ProviderResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}
