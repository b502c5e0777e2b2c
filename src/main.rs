use ir_console::config::ApiConfig;
use ir_console::{logging, ui};

fn main() -> anyhow::Result<()> {
    logging::init_tracing();

    let config = ApiConfig::from_env();
    tracing::info!(base_url = config.base_url(), "starting console");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    ui::runtime::run(config, runtime.handle().clone())?;

    // An in-flight request is not cancelable; its completion is dropped
    // with the event channel instead of being awaited.
    runtime.shutdown_background();
    Ok(())
}
