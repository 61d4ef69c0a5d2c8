use std::io::Write;
use std::path::PathBuf;

use crate::llm::LLMProvider;
use crate::report::ReportWriter;

/// Asks two providers the same prompt, one after the other, and writes the
/// comparison report.
pub struct LlmComparator {
    first: LLMProvider,
    second: LLMProvider,
    reports: ReportWriter,
}

impl LlmComparator {
    pub fn new(first: LLMProvider, second: LLMProvider, reports: ReportWriter) -> LlmComparator {
        LlmComparator {
            first,
            second,
            reports,
        }
    }

    /// Progress lines go to `progress`. Provider failures end up in the
    /// report; only report writing can fail.
    pub async fn run<W: Write>(&mut self, prompt: &str, progress: &mut W) -> anyhow::Result<PathBuf> {
        writeln!(progress, "Querying {}...", self.first.heading())?;
        let first = self.first.query(prompt).await;

        writeln!(progress, "Querying {}...", self.second.heading())?;
        let second = self.second.query(prompt).await;

        if first.is_failure() || second.is_failure() {
            tracing::warn!(
                first_failed = first.is_failure(),
                second_failed = second.is_failure(),
                "report will contain provider errors"
            );
        }

        self.reports.generate(prompt, &first, &second).await
    }
}
