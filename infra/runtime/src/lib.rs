//! # Runtime
//!
//! Tokio bootstrap shared by the workspace binaries.
//!
//! Binaries do not spell out `tokio::main`; they go through
//! [`ghub_derive::main`] (re-exported here), which builds a runtime from one
//! of the named profiles below. Keeping the knobs in one place gives every
//! binary the same thread naming, stack bounds, and worker detection.
//!
//! ```rust,ignore
//! #[ghub_runtime::main(high_performance)]
//! async fn main() -> anyhow::Result<()> {
//!     Ok(())
//! }
//! ```

pub use anyhow::Result;
pub use ghub_derive::main;

use anyhow::Context;
use std::thread::available_parallelism;
use std::time::Duration;
use tokio::runtime::{Builder, Runtime};
use tracing::debug;

/// Worker stack bounds; values outside are clamped at build time.
const STACK_FLOOR: usize = 1024 * 1024;
const STACK_CEILING: usize = 16 * 1024 * 1024;
/// Upper bound on worker threads, matching Tokio's own limit.
const WORKER_CEILING: usize = 1024;
/// Fallback when parallelism detection fails.
const FALLBACK_WORKERS: usize = 4;

/// Worker and stack settings for a multithreaded Tokio runtime.
///
/// Two named profiles cover the workspace: [`RuntimeProfile::default`] for
/// tooling and tests, [`RuntimeProfile::high_performance`] for the server
/// binary.
#[derive(Debug, Clone)]
pub struct RuntimeProfile {
    pub workers: usize,
    pub stack_size: usize,
    pub thread_name: &'static str,
    pub keep_alive: Duration,
}

impl Default for RuntimeProfile {
    fn default() -> Self {
        Self {
            workers: detected_workers(),
            stack_size: 3 * 1024 * 1024,
            thread_name: "ghub-worker",
            keep_alive: Duration::from_secs(60),
        }
    }
}

impl RuntimeProfile {
    /// Profile for the long-running server binary: larger worker stacks and
    /// a long idle keep-alive, so thread churn stays low under bursty load.
    #[must_use]
    pub fn high_performance() -> Self {
        Self {
            stack_size: 4 * 1024 * 1024,
            thread_name: "ghub-server",
            keep_alive: Duration::from_secs(300),
            ..Self::default()
        }
    }

    /// Builds a multithreaded runtime (I/O and timers enabled) from this
    /// profile. Worker count and stack size are clamped first, so an odd
    /// `TOKIO_WORKER_THREADS` value or a hand-built profile cannot ask the
    /// OS for something unreasonable.
    ///
    /// # Errors
    ///
    /// Fails when the OS refuses to create the runtime threads.
    pub fn build(&self) -> Result<Runtime> {
        let (workers, stack_size) = self.clamped();
        debug!(workers, stack_size, name = self.thread_name, "Building tokio runtime");

        Builder::new_multi_thread()
            .worker_threads(workers)
            .thread_stack_size(stack_size)
            .thread_name(self.thread_name)
            .thread_keep_alive(self.keep_alive)
            .enable_all()
            .build()
            .context("Initializing tokio runtime")
    }

    /// Worker count and stack size forced into their allowed ranges.
    const fn clamped(&self) -> (usize, usize) {
        let workers = if self.workers == 0 {
            1
        } else if self.workers > WORKER_CEILING {
            WORKER_CEILING
        } else {
            self.workers
        };
        let stack_size = if self.stack_size < STACK_FLOOR {
            STACK_FLOOR
        } else if self.stack_size > STACK_CEILING {
            STACK_CEILING
        } else {
            self.stack_size
        };
        (workers, stack_size)
    }
}

/// Worker count from `TOKIO_WORKER_THREADS` when set and sane, otherwise
/// from detected parallelism.
fn detected_workers() -> usize {
    std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|&n| n > 0 && n <= WORKER_CEILING)
        .unwrap_or_else(|| {
            available_parallelism().map(std::num::NonZero::get).unwrap_or(FALLBACK_WORKERS)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_settings_are_clamped() {
        let low = RuntimeProfile { workers: 0, stack_size: 1, ..RuntimeProfile::default() };
        assert_eq!(low.clamped(), (1, STACK_FLOOR));

        let high = RuntimeProfile {
            workers: 5000,
            stack_size: usize::MAX,
            ..RuntimeProfile::default()
        };
        assert_eq!(high.clamped(), (WORKER_CEILING, STACK_CEILING));
    }

    #[test]
    fn single_worker_profile_builds_and_runs() {
        let profile = RuntimeProfile { workers: 1, ..RuntimeProfile::default() };
        let rt = profile.build().expect("runtime");
        rt.block_on(async {});
    }

    #[test]
    fn profiles_are_distinguishable_by_thread_name() {
        assert_ne!(
            RuntimeProfile::default().thread_name,
            RuntimeProfile::high_performance().thread_name
        );
    }

    #[test]
    fn detected_workers_is_within_bounds() {
        let workers = detected_workers();
        assert!(workers >= 1 && workers <= WORKER_CEILING);
    }
}
