use crate::ports::outbound::OutputPresenter;
use crate::shared::Result;
use std::io::{self, Write};

/// StdoutPresenter adapter for writing output to stdout
///
/// Content is written verbatim; the URL resolver relies on this to emit its
/// NUL-terminated frame.
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|()| stdout.flush())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}
