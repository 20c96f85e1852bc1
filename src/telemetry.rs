//! Optional log output for binaries that embed this crate.

/// Installs a `fmt` subscriber printing events at `level` and above.
///
/// Fails if another global subscriber is already installed.
pub fn init(level: tracing::Level) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    tracing_subscriber::fmt().with_max_level(level).with_target(true).try_init()
}
