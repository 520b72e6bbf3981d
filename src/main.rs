use mailform::{app::App, config::get_configuration, telemetry::get_subscriber};
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = get_configuration().expect("Failed to read configuration.");

    get_subscriber(&config.application.log_level, std::io::stderr).init();

    if !config.email.is_complete() {
        tracing::warn!("email configuration is incomplete, check the EMAIL_* variables");
    }

    let app = App::with(config).await;

    tracing::info!(port = app.port(), "starting server");
    app.serve().await.expect("The server should be running");

    Ok(())
}
