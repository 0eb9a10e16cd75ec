//! # Logger
//!
//! Tracing setup for the workspace binaries.
//!
//! One call near the top of `main` wires the global subscriber: a compact
//! console layer, plus a daily-rolling file layer when a log directory is
//! given. File writes go through a non-blocking worker; the returned
//! [`Logger`] handle owns its guard and must stay alive until shutdown or
//! buffered lines are lost.
//!
//! Filtering follows `RUST_LOG` when set, with [`LoggerBuilder::level`] as
//! the default and [`LoggerBuilder::env_filter`] for programmatic
//! per-module directives.
//!
//! ```rust
//! use ghub_logger::{LevelFilter, Logger};
//!
//! let _log = Logger::builder()
//!     .name("my-app")
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;

use std::marker::PhantomData;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Rolled files kept per logger name before the oldest is pruned.
const KEEP_LOG_FILES: usize = 10;

/// Builder state: the mandatory logger name has not been set yet.
#[derive(Debug)]
pub struct Unnamed;
/// Builder state: the logger name is set and `init` becomes available.
#[derive(Debug)]
pub struct Named;

/// Configures the global tracing subscriber.
///
/// The name is mandatory and must come first; it prefixes rolled log files
/// (`my-app.2026-08-31.log`), so a logger without one would write files that
/// cannot be told apart.
#[derive(Debug)]
pub struct LoggerBuilder<State = Unnamed> {
    name: String,
    console: bool,
    level: LevelFilter,
    directives: Option<String>,
    path: Option<PathBuf>,
    _state: PhantomData<State>,
}

impl LoggerBuilder<Unnamed> {
    /// Names the logger, unlocking the rest of the builder.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<Named> {
        LoggerBuilder {
            name: name.into(),
            console: self.console,
            level: self.level,
            directives: self.directives,
            path: self.path,
            _state: PhantomData,
        }
    }
}

impl LoggerBuilder<Named> {
    /// Toggles the console layer (on by default).
    #[must_use]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }

    /// Default level for targets without a more specific directive.
    #[must_use]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Per-module filter directives, e.g. `"ghub=debug,hyper=info"`.
    ///
    /// A malformed directive string surfaces as an error from
    /// [`LoggerBuilder::init`] rather than being silently dropped.
    #[must_use]
    pub fn env_filter(mut self, directives: impl Into<String>) -> Self {
        self.directives = Some(directives.into());
        self
    }

    /// Directory for daily-rolling log files; created if absent.
    #[must_use]
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Installs the global subscriber and returns the [`Logger`] handle.
    ///
    /// # Errors
    ///
    /// * [`LoggerError::InvalidConfiguration`] for a blank name, a malformed
    ///   filter string, or a build with every output disabled
    /// * [`LoggerError::Subscriber`] when a global subscriber already exists
    /// * [`LoggerError::Appender`] / [`LoggerError::Internal`] when the log
    ///   directory cannot be set up
    pub fn init(self) -> Result<Logger, LoggerError> {
        if self.name.trim().is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "Logger name cannot be blank".into(),
                context: None,
            });
        }

        let filter = self.build_filter()?;
        let mut layers = Vec::new();

        if self.console {
            layers.push(fmt::layer().compact().with_ansi(true).boxed());
        }

        let guard = match &self.path {
            Some(dir) => {
                std::fs::create_dir_all(dir).map_err(|e| LoggerError::Internal {
                    message: e.to_string().into(),
                    context: Some(format!("Creating log directory {}", dir.display()).into()),
                })?;

                let appender = RollingFileAppender::builder()
                    .rotation(Rotation::DAILY)
                    .filename_prefix(&self.name)
                    .filename_suffix("log")
                    .max_log_files(KEEP_LOG_FILES)
                    .build(dir)?;
                let (writer, guard) = tracing_appender::non_blocking(appender);

                layers.push(fmt::layer().with_writer(writer).with_ansi(false).boxed());
                Some(guard)
            }
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "Every output is disabled; enable console or set a file path".into(),
                context: None,
            });
        }

        tracing_subscriber::registry().with(filter).with(layers).try_init()?;

        Ok(Logger { guard })
    }

    fn build_filter(&self) -> Result<EnvFilter, LoggerError> {
        let builder = EnvFilter::builder().with_default_directive(self.level.into());
        match &self.directives {
            None => Ok(builder.from_env_lossy()),
            Some(directives) => {
                builder.parse(directives).map_err(|e| LoggerError::InvalidConfiguration {
                    message: format!("Bad filter directives '{directives}': {e}").into(),
                    context: None,
                })
            }
        }
    }
}

/// Handle to the installed logging system.
///
/// Owns the non-blocking file writer's guard; keep it alive for the life of
/// the process.
#[must_use = "dropping the handle stops the background log writer"]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts a fresh [`LoggerBuilder`].
    #[must_use]
    pub const fn builder() -> LoggerBuilder<Unnamed> {
        LoggerBuilder {
            name: String::new(),
            console: true,
            level: LevelFilter::INFO,
            directives: None,
            path: None,
            _state: PhantomData,
        }
    }

    /// The file writer's guard, when file logging is enabled.
    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}
