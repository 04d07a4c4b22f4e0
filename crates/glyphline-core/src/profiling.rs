//! Profiling utilities based on the `puffin` crate.
//!
//! With the `profiling` feature disabled the scope macros expand to nothing and
//! the init functions only log.

#[cfg(feature = "profiling")]
use std::sync::OnceLock;

#[cfg(feature = "profiling")]
pub use puffin::{profile_function, profile_scope};

#[cfg(not(feature = "profiling"))]
pub use crate::{noop_profile_function as profile_function, noop_profile_scope as profile_scope};

#[doc(hidden)]
#[macro_export]
macro_rules! noop_profile_function {
    () => {};
    ($data:expr) => {};
}

#[doc(hidden)]
#[macro_export]
macro_rules! noop_profile_scope {
    ($name:expr) => {};
    ($name:expr, $data:expr) => {};
}

/// Profiling backend options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfilingBackend {
    /// Send profiling data to puffin_viewer via HTTP.
    PuffinHttp,
}

#[cfg(feature = "profiling")]
static PROFILING_SERVER: OnceLock<puffin_http::Server> = OnceLock::new();

/// Record profiling scopes without starting a server.
pub fn enable_scopes() {
    #[cfg(feature = "profiling")]
    puffin::set_scopes_on(true);

    #[cfg(not(feature = "profiling"))]
    tracing::warn!("Profiling requested but the `profiling` feature is disabled");
}

/// Initialize profiling with the specified backend.
///
/// # Example
/// ```no_run
/// use glyphline_core::profiling::{init_profiling, ProfilingBackend};
///
/// init_profiling(ProfilingBackend::PuffinHttp);
/// ```
pub fn init_profiling(backend: ProfilingBackend) {
    match backend {
        ProfilingBackend::PuffinHttp => {
            enable_scopes();

            #[cfg(feature = "profiling")]
            match puffin_http::Server::new("0.0.0.0:8585") {
                Ok(server) => {
                    tracing::info!("Puffin profiler server started on http://0.0.0.0:8585");
                    let _ = PROFILING_SERVER.set(server);
                }
                Err(e) => {
                    tracing::error!("Failed to start puffin server: {}", e);
                }
            }
        }
    }
}
