use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context};
use chrono::{Local, NaiveDateTime};

use crate::fs::{TrivialFS, TrivialFSPathType};
use crate::llm::ProviderResponse;

pub const REPORT_TITLE: &str = "# LLM Response Comparison";

/// Fixed prompts for the reader. Nothing here is computed.
pub const COMPARISON_SECTION: &str = "## Comparison\n\n\
### Key Differences\n\
- **Length:** Compare the length of responses\n\
- **Tone:** Note any differences in tone or approach\n\
- **Technical Depth:** Compare the level of technical detail\n\
- **Examples:** Note any examples or analogies used\n\n";

/// `llm_comparison_<YYYYMMDD_HHMMSS>.md`
pub fn report_filename(timestamp: NaiveDateTime) -> String {
    format!("llm_comparison_{}.md", timestamp.format("%Y%m%d_%H%M%S"))
}

/// Renders the report body. Responses are inserted verbatim, unescaped, in
/// the order given. The body carries no timestamp.
pub fn render_report(prompt: &str, first: &ProviderResponse, second: &ProviderResponse) -> String {
    let mut report = format!("{}\n\n", REPORT_TITLE);
    report += &format!("**Prompt:** {}\n\n", prompt);

    for response in [first, second] {
        report += &format!("## {} Response\n\n", response.heading);
        report += &format!("{}\n\n", response.text());
    }

    report += COMPARISON_SECTION;
    report
}

pub struct ReportWriter {
    fs: Arc<dyn TrivialFS + Send + Sync>,
    root: PathBuf,
}

impl ReportWriter {
    pub async fn new(
        fs: Arc<dyn TrivialFS + Send + Sync>,
        root: PathBuf,
    ) -> anyhow::Result<ReportWriter> {
        let r = fs.path_type(&root).await?;
        if r != TrivialFSPathType::Directory {
            bail!(
                "ReportWriter::new failed - '{}' is not a directory",
                root.display()
            );
        }
        Ok(ReportWriter { fs, root })
    }

    /// Where a report with the given name lands. Reports in the working
    /// directory are named without a `./` prefix.
    fn report_path(&self, filename: String) -> PathBuf {
        if self.root.as_os_str().is_empty() || self.root == Path::new(".") {
            PathBuf::from(filename)
        } else {
            self.root.join(filename)
        }
    }

    /// Writes the report named after the current local time and returns its
    /// path.
    pub async fn generate(
        &self,
        prompt: &str,
        first: &ProviderResponse,
        second: &ProviderResponse,
    ) -> anyhow::Result<PathBuf> {
        self.generate_at(prompt, first, second, Local::now().naive_local())
            .await
    }

    pub async fn generate_at(
        &self,
        prompt: &str,
        first: &ProviderResponse,
        second: &ProviderResponse,
        timestamp: NaiveDateTime,
    ) -> anyhow::Result<PathBuf> {
        let path = self.report_path(report_filename(timestamp));

        // Second-granularity names collide when two runs share a second; the
        // later run wins.
        if self.fs.path_type(&path).await? != TrivialFSPathType::NoSuchPath {
            tracing::warn!(path = %path.display(), "report already exists, overwriting");
        }

        let report = render_report(prompt, first, second);
        self.fs
            .write(&path, &report)
            .await
            .with_context(|| format!("failed to write report {}", path.display()))?;

        tracing::info!(path = %path.display(), bytes = report.len(), "report written");
        Ok(path)
    }
}
