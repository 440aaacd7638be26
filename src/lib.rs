//! Air Mouse Bridge - drive the host pointer from a serial air mouse.
//!
//! The board streams accelerometer, gyro and button readings as text frames
//! over serial. This crate parses those frames, turns tilt into fixed-step
//! cursor moves and button presses into clicks, and applies them at the
//! board's send rate.

pub mod bridge;
pub mod config;
pub mod device;
pub mod pointer;
pub mod processing;

use anyhow::Context;
use bridge::Sampler;
use config::BridgeConfig;
use device::SerialTransport;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Run the bridge until the process is killed
pub fn run() -> anyhow::Result<()> {
    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "air_mouse_bridge=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Air Mouse Bridge v{}", env!("CARGO_PKG_VERSION"));

    let config = BridgeConfig::default();
    config.validate()?;
    tracing::debug!("Config: {}", serde_json::to_string(&config)?);

    let pointer = pointer::system_pointer().context("No pointer backend available")?;

    let transport = SerialTransport::open(&config.port, config.baud_rate, config.settle_delay)
        .with_context(|| format!("Failed to open serial port {}", config.port))?;
    tracing::info!("Serial port {} ready", transport.name());

    let sampler = Sampler::connect(transport, pointer, config)?;
    sampler.run()
}
