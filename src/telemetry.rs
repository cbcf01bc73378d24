//! src/telemetry.rs
use tracing_subscriber::prelude::*;

/// Installs the global tracing subscriber. Diagnostics go to stderr so the
/// record stream on stdout stays parseable by the next stage.
pub fn init_tracing(service_name: &'static str) -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(
            tracing_subscriber::fmt::layer()
                .pretty()
                .with_writer(std::io::stderr)
                .with_file(true)
                .with_line_number(true)
                .with_target(false),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install subscriber for {service_name}: {e}"))?;
    Ok(())
}
