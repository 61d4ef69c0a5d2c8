use std::io::{BufRead, Write};

use anyhow::{bail, Context};

pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const GOOGLE_API_KEY_VAR: &str = "GOOGLE_API_KEY";

/// Where credentials are looked up first.
pub trait EnvironmentSource {
    fn var(&self, name: &str) -> Option<String>;
}

/// Where credentials come from when the environment doesn't have them.
pub trait InteractiveSource {
    fn prompt(&mut self, message: &str) -> anyhow::Result<String>;
}

pub struct ProcessEnvironment {}

impl EnvironmentSource for ProcessEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Prompts on stdout and reads one line from stdin.
pub struct StdinPrompt {}

impl InteractiveSource for StdinPrompt {
    fn prompt(&mut self, message: &str) -> anyhow::Result<String> {
        let mut stdout = std::io::stdout();
        write!(stdout, "{}", message)?;
        stdout.flush()?;

        let mut line = String::new();
        let n = std::io::stdin()
            .lock()
            .read_line(&mut line)
            .context("failed to read from stdin")?;
        if n == 0 {
            bail!("stdin closed while waiting for input");
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub openai_api_key: String,
    pub google_api_key: String,
}

// Keys must never end up in logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("openai_api_key", &"<redacted>")
            .field("google_api_key", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    pub fn openai_looks_unconfigured(&self) -> bool {
        looks_unconfigured(&self.openai_api_key)
    }

    pub fn google_looks_unconfigured(&self) -> bool {
        looks_unconfigured(&self.google_api_key)
    }
}

/// Empty keys and template placeholders like `your-api-key-here`.
fn looks_unconfigured(key: &str) -> bool {
    key.is_empty() || key.starts_with("your-")
}

fn resolve_one(
    env: &dyn EnvironmentSource,
    interactive: &mut dyn InteractiveSource,
    var: &str,
    message: &str,
) -> anyhow::Result<String> {
    match env.var(var) {
        // An empty variable counts as missing.
        Some(value) if !value.is_empty() => Ok(value),
        _ => {
            tracing::debug!(var, "credential not in environment, prompting");
            interactive
                .prompt(message)
                .with_context(|| format!("failed to read {}", var))
        }
    }
}

/// Environment first, then the interactive source for whichever key is
/// missing. Values are not validated.
pub fn resolve_credentials(
    env: &dyn EnvironmentSource,
    interactive: &mut dyn InteractiveSource,
) -> anyhow::Result<Credentials> {
    let openai_api_key = resolve_one(
        env,
        interactive,
        OPENAI_API_KEY_VAR,
        "Enter your OpenAI API key: ",
    )?;
    let google_api_key = resolve_one(
        env,
        interactive,
        GOOGLE_API_KEY_VAR,
        "Enter your Google API key: ",
    )?;

    let credentials = Credentials {
        openai_api_key,
        google_api_key,
    };
    if credentials.openai_looks_unconfigured() {
        tracing::warn!("OpenAI API key is empty or a placeholder; the request will likely fail");
    }
    if credentials.google_looks_unconfigured() {
        tracing::warn!("Google API key is empty or a placeholder; the request will likely fail");
    }
    Ok(credentials)
}
