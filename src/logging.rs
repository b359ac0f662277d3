use tracing_subscriber::FmtSubscriber;

/// Installs the global `tracing` subscriber
pub fn init_logging(level: tracing::Level) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
