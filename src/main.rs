use anyhow::Context;
use libris_app::modules;
use libris_kernel::settings::Settings;
use libris_kernel::{InitCtx, ModuleRegistry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().with_context(|| "failed to load LIBRIS settings")?;

    libris_telemetry::init(&settings.telemetry);

    tracing::info!(
        env = ?settings.environment,
        assets = %settings.assets.dir,
        "libris-app bootstrap starting"
    );

    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry);

    let ctx = InitCtx {
        settings: &settings,
    };
    registry.init_modules(&ctx).await?;
    registry.start_modules(&ctx).await?;

    tracing::info!("libris-app bootstrap complete");

    libris_http::start_server(&registry, &settings).await?;

    registry.stop_modules().await?;

    Ok(())
}
