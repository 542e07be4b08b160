//! Engine configuration and constants.

/// Engine binary used when none is configured
pub const DEFAULT_ENGINE: &str = "docker";

/// Environment variable that overrides the engine binary
pub const ENGINE_ENV: &str = "BUILD_IMAGES_ENGINE";

/// Number of trailing stderr lines kept for error reports
pub const STDERR_TAIL_LINES: usize = 20;
