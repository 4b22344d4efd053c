use std::io::{self, Write};

use anyhow::Error;
use indicatif::ProgressBar;
use tracing_subscriber::{fmt::MakeWriter, EnvFilter};

/// Sets up console logging on stderr so it never mixes with the report on stdout.
///
/// Log lines are written while `progress` is cleared from the terminal, so they don't get
/// tangled with the spinner. `RUST_LOG` takes precedence over the `verbose` switch.
pub fn init_local_telemetry(verbose: bool, progress: ProgressBar) -> Result<(), Error> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(ProgressAwareStderr { progress })
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    Ok(())
}

/// Hands out stderr writers that pause a progress bar for every write.
struct ProgressAwareStderr {
    progress: ProgressBar,
}

impl<'a> MakeWriter<'a> for ProgressAwareStderr {
    type Writer = SuspendingWriter<io::Stderr>;

    fn make_writer(&'a self) -> Self::Writer {
        SuspendingWriter::new(self.progress.clone(), io::stderr())
    }
}

pub(crate) struct SuspendingWriter<W> {
    progress: ProgressBar,
    inner: W,
}

impl<W: Write> SuspendingWriter<W> {
    pub(crate) fn new(progress: ProgressBar, inner: W) -> Self {
        Self { progress, inner }
    }
}

impl<W: Write> Write for SuspendingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let inner = &mut self.inner;
        self.progress.suspend(|| inner.write(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        let inner = &mut self.inner;
        self.progress.suspend(|| inner.flush())
    }
}

#[cfg(test)]
#[path = "telemetry_tests.rs"]
mod telemetry_tests;
