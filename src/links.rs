//! Opening outbound links in the host browser.

use anyhow::{Context, Result, bail};
use std::fmt;
use std::process::{Command, Stdio};
use tracing::{debug, warn};

/// Which link of a project to follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// Source code repository.
    Source,
    /// Live demo.
    Demo,
}

impl LinkKind {
    /// Control label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Source => "Code",
            Self::Demo => "Demo",
        }
    }
}

/// Something that can open a URL outside the terminal.
pub trait LinkOpener: fmt::Debug {
    /// Open `url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL could not be handed off.
    fn open(&self, url: &str) -> Result<()>;
}

/// Opener that shells out to the platform's URL handler.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLinkOpener;

impl SystemLinkOpener {
    fn command(url: &str) -> Command {
        #[cfg(target_os = "macos")]
        {
            let mut cmd = Command::new("open");
            cmd.arg(url);
            cmd
        }

        #[cfg(windows)]
        {
            // `cmd /C start` would treat `&` and `^` in the URL as shell syntax
            let mut cmd = Command::new("rundll32");
            cmd.args(["url.dll,FileProtocolHandler", url]);
            cmd
        }

        #[cfg(not(any(target_os = "macos", windows)))]
        {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(url);
            cmd
        }
    }
}

impl LinkOpener for SystemLinkOpener {
    fn open(&self, url: &str) -> Result<()> {
        let mut cmd = Self::command(url);
        let program = cmd.get_program().to_string_lossy().into_owned();
        debug!(%url, %program, "Opening link");

        let status = cmd
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .with_context(|| format!("{program} not found"))?;

        if !status.success() {
            warn!(%url, %program, ?status, "Link opener exited with failure");
            bail!("{program} exited with {status}");
        }
        Ok(())
    }
}
