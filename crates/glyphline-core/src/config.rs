/// Process-level configuration for hosts embedding glyphline.
#[derive(Debug, Clone)]
pub struct Config {
    /// `tracing` env-filter directives, overridden by `RUST_LOG` when set.
    pub log_filter: String,
    pub profiling: ProfilingMode,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_filter: crate::logging::DEFAULT_FILTER.to_string(),
            profiling: ProfilingMode::Off,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfilingMode {
    /// Profiling scopes are disabled
    Off,
    /// Profiling scopes are recorded in-process
    On,
    /// Profiling scopes are recorded, and can be viewed using external tools such
    /// as 'puffin_viewer' through the HTTP server
    WithWebServer,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.log_filter, crate::logging::DEFAULT_FILTER);
        assert_eq!(config.profiling, ProfilingMode::Off);
    }

    #[test]
    fn test_init_twice() {
        let config = Config::default();
        crate::init(&config);
        crate::init(&config);
        tracing::debug!("still logging");
    }
}
