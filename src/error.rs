//=========================================================================
// Errors
//=========================================================================
//
// Error types for each layer of the launcher.
//
// Layering:
//   ColorParseError ──► toml::de::Error ──► ConfigError   (file overrides)
//   HostError ───────┐
//   PlatformError ───┼──► EngineError   (engine construction / runtime)
//   ConfigError ─────┘
//
// The launcher itself never constructs or translates any of these; it
// only forwards what the engine returns.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::path::PathBuf;

use thiserror::Error;

//=== ColorParseError =====================================================

/// Failure to parse a `#rrggbb` style color string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("color `{0}` must start with '#'")]
    MissingHash(String),

    #[error("color `{0}` must have 3, 6 or 8 hex digits")]
    InvalidLength(String),

    #[error("color `{0}` contains a non-hex digit")]
    InvalidDigit(String),
}

//=== ConfigError =========================================================

/// Errors raised while loading or checking a game configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config overrides")]
    Parse(#[from] toml::de::Error),

    #[error("game size must be positive, got {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    #[error("target fps must be positive")]
    InvalidFps,

    #[error("no scenes configured")]
    NoScenes,

    #[error("scene {0} is listed more than once")]
    DuplicateScene(String),
}

//=== HostError ===========================================================

/// Errors raised by a [`crate::host::Host`] implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("container `{0}` does not exist in the host document")]
    UnknownContainer(String),

    #[error("container `{0}` already holds a canvas")]
    AlreadyAttached(String),
}

//=== PlatformError =======================================================

/// Platform initialization and runtime errors.
///
/// Event loop errors are fatal: without one the game cannot run.
/// Surface errors only disable drawing.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// Event loop creation failed (OS-level issue).
    #[error("event loop creation failed")]
    EventLoopCreation(#[source] winit::error::EventLoopError),

    /// Event loop execution error.
    #[error("event loop error")]
    EventLoopExecution(#[source] winit::error::EventLoopError),

    #[error("failed to create window surface")]
    SurfaceCreation(#[source] wgpu::CreateSurfaceError),

    #[error("no graphics adapter for the window surface")]
    AdapterUnavailable(#[source] wgpu::RequestAdapterError),

    #[error("graphics device request failed")]
    DeviceRequest(#[source] wgpu::RequestDeviceError),

    #[error("window surface is not supported by the adapter")]
    SurfaceUnsupported,
}

//=== EngineError =========================================================

/// Errors surfaced by the game runtime.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid game configuration")]
    Config(#[from] ConfigError),

    #[error("container element `{0}` not found")]
    ContainerNotFound(String),

    #[error("failed to attach canvas")]
    Host(#[from] HostError),

    #[error("platform failure")]
    Platform(#[from] PlatformError),

    #[error("logic thread panicked")]
    LogicThreadPanicked,
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn container_not_found_names_the_id() {
        let err = EngineError::ContainerNotFound("game-container".into());
        assert_eq!(err.to_string(), "container element `game-container` not found");
    }

    #[test]
    fn config_error_is_chained_under_engine_error() {
        let err = EngineError::from(ConfigError::NoScenes);
        let source = err.source().expect("config error should be the source");
        assert_eq!(source.to_string(), "no scenes configured");
    }

    #[test]
    fn color_error_names_the_input() {
        let err = ColorParseError::InvalidLength("#12".into());
        assert_eq!(err.to_string(), "color `#12` must have 3, 6 or 8 hex digits");
    }
}
