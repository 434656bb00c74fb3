use trigon_engine::device::GpuInit;
use trigon_engine::logging::{init_logging, LoggingConfig};
use trigon_engine::window::{Runtime, RuntimeConfig};

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());
    log::info!("trigon {}", env!("CARGO_PKG_VERSION"));

    Runtime::run(RuntimeConfig::default(), GpuInit::default())
}
