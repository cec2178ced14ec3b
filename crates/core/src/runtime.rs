//! Shared async runtime
//!
//! The curator itself is synchronous. The runtime exists for the simulated
//! Playground provider, whose fake network latency is a Tokio timer driven
//! to completion with [`block_on`].

use once_cell::sync::Lazy;
use tokio::runtime::Runtime;

/// Global shared Tokio runtime, built on first use
pub static RUNTIME: Lazy<Runtime> = Lazy::new(|| {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("prompt-curator-rt")
        .enable_time()
        .build()
        .expect("Failed to create Tokio runtime")
});

/// Run a future to completion, blocking the current thread
///
/// Must not be called from inside another Tokio runtime.
pub fn block_on<F: std::future::Future>(future: F) -> F::Output {
    RUNTIME.block_on(future)
}
