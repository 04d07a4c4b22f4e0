//! Glyphline Core
//!
//! This crate contains the types shared by the glyphline layout crates: math
//! re-exports, bounding boxes, the [`text::Font`] collaborator contract and the
//! process-level logging and profiling setup.

pub mod alloc;
pub mod config;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;
pub mod text;

use config::{Config, ProfilingMode};

/// Initialize logging and profiling for a host process from a [`Config`].
pub fn init(config: &Config) {
    logging::init_with_filter(&config.log_filter);

    match config.profiling {
        ProfilingMode::Off => {}
        ProfilingMode::On => profiling::enable_scopes(),
        ProfilingMode::WithWebServer => {
            profiling::init_profiling(profiling::ProfilingBackend::PuffinHttp)
        }
    }
}
