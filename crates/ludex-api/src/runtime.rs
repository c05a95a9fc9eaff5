//! Dedicated tokio runtime for network IO
//!
//! GPUI drives the UI on its own executor; `reqwest` needs a tokio
//! reactor. The API layer owns a small multi-thread runtime and UI code
//! dispatches futures onto it, awaiting the resulting `JoinHandle` from a
//! GPUI task. `JoinHandle` is executor-agnostic, so the bridge needs no
//! further glue.

use once_cell::sync::Lazy;
use tokio::runtime::Runtime;
use tokio::task::JoinHandle;

static RUNTIME: Lazy<Runtime> = Lazy::new(|| {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("ludex-io")
        .enable_all()
        .build()
        .expect("BUG: failed to build the IO runtime")
});

/// Spawn a future onto the IO runtime.
pub fn spawn<F>(future: F) -> JoinHandle<F::Output>
where
    F: std::future::Future + Send + 'static,
    F::Output: Send + 'static,
{
    RUNTIME.spawn(future)
}

/// Run a future to completion on the IO runtime, blocking the caller.
///
/// Only used at startup (session restore) before the UI loop starts.
pub fn block_on<F: std::future::Future>(future: F) -> F::Output {
    RUNTIME.block_on(future)
}
