//! Lane-parallel execution settings for the default engine.
//!
//! The engine hands lanes to a Rayon pool once a call carries at least
//! [`parallel_threshold`] elements. Both the threshold and the worker count
//! are read once from the environment and can be overridden at runtime:
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `DIMFFT_PAR_THRESHOLD` | minimum `lanes * n` to go parallel | `32768` |
//! | `DIMFFT_PAR_THREADS` | worker threads | `num_cpus::get()` |
//!
//! An unparsable value is a configuration error and panics on first use.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, OnceLock};

use rayon::{ThreadPool, ThreadPoolBuilder};

/// Default minimum number of elements before lanes run in parallel.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 32 * 1024;

/// `0` means no override and the environment/default is used.
static THRESHOLD_OVERRIDE: AtomicUsize = AtomicUsize::new(0);
static THREAD_OVERRIDE: AtomicUsize = AtomicUsize::new(0);

static PARALLEL_ENV: OnceLock<ParallelEnv> = OnceLock::new();
static POOL: Mutex<Option<(usize, Arc<ThreadPool>)>> = Mutex::new(None);

struct ParallelEnv {
    threshold: usize,
    threads: usize,
}

fn env_usize(name: &str) -> Option<usize> {
    let raw = std::env::var(name).ok()?;
    match raw.trim().parse::<usize>() {
        Ok(v) => Some(v),
        Err(_) => panic!("{name} must be a non-negative integer, got {raw:?}"),
    }
}

fn parallel_env() -> &'static ParallelEnv {
    PARALLEL_ENV.get_or_init(|| {
        let threshold = env_usize("DIMFFT_PAR_THRESHOLD")
            .filter(|&v| v != 0)
            .unwrap_or(DEFAULT_PARALLEL_THRESHOLD);
        let threads = env_usize("DIMFFT_PAR_THREADS")
            .filter(|&v| v != 0)
            .unwrap_or_else(|| num_cpus::get().max(1));
        #[cfg(feature = "verbose-logging")]
        log::debug!("parallel lanes: threshold={threshold} threads={threads}");
        ParallelEnv { threshold, threads }
    })
}

/// Set a custom minimum element count (`lanes * n`) for parallel execution.
///
/// Passing `0` reverts to `DIMFFT_PAR_THRESHOLD` or the built-in default.
pub fn set_parallel_threshold(threshold: usize) {
    THRESHOLD_OVERRIDE.store(threshold, Ordering::Relaxed);
}

/// Override the number of worker threads. `0` reverts to
/// `DIMFFT_PAR_THREADS` or the number of logical CPUs.
pub fn set_parallel_threads(threads: usize) {
    THREAD_OVERRIDE.store(threads, Ordering::Relaxed);
}

/// Effective element threshold.
pub fn parallel_threshold() -> usize {
    match THRESHOLD_OVERRIDE.load(Ordering::Relaxed) {
        0 => parallel_env().threshold,
        v => v,
    }
}

/// Effective worker count.
pub fn parallel_threads() -> usize {
    match THREAD_OVERRIDE.load(Ordering::Relaxed) {
        0 => parallel_env().threads,
        v => v,
    }
}

pub(crate) fn should_parallelize(lanes: usize, work: usize) -> bool {
    lanes > 1 && work >= parallel_threshold()
}

/// Run `f` inside a pool sized to [`parallel_threads`].
///
/// The pool is rebuilt only when the configured worker count changes.
pub(crate) fn install<R, F>(f: F) -> R
where
    R: Send,
    F: FnOnce() -> R + Send,
{
    let threads = parallel_threads();
    let pool = {
        let mut guard = POOL.lock().unwrap_or_else(|e| e.into_inner());
        match guard.as_ref() {
            Some((n, pool)) if *n == threads => Some(Arc::clone(pool)),
            _ => match ThreadPoolBuilder::new().num_threads(threads).build() {
                Ok(pool) => {
                    let pool = Arc::new(pool);
                    *guard = Some((threads, Arc::clone(&pool)));
                    Some(pool)
                }
                Err(_) => None,
            },
        }
    };
    match pool {
        Some(pool) => pool.install(f),
        // fall back to the global pool if a dedicated one cannot be spawned
        None => f(),
    }
}

#[cfg(feature = "internal-tests")]
#[doc(hidden)]
pub fn __test_parallel_threshold() -> usize {
    parallel_threshold()
}

#[cfg(feature = "internal-tests")]
#[doc(hidden)]
pub fn __test_pool_thread_count() -> usize {
    install(rayon::current_num_threads)
}
