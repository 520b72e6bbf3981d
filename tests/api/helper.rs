use mailform::{app::App, config::get_configuration, telemetry::get_subscriber};
use once_cell::sync::Lazy;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};
use reqwest_tracing::TracingMiddleware;
use serde_json::Value;
use tracing_subscriber::util::SubscriberInitExt;

use crate::fake_smtp::FakeSmtpServer;

static TRACING: Lazy<()> = Lazy::new(|| {
    let env_filter = "mailform=trace,tower_http=trace,axum::rejection=trace";

    if std::env::var("TEST_LOG").is_ok() {
        get_subscriber(env_filter, std::io::stdout).init();
    } else {
        get_subscriber(env_filter, std::io::sink).init();
    };
});

pub struct TestApp {
    pub addr: String,
    pub smtp_server: FakeSmtpServer,
}

impl TestApp {
    pub async fn post_send(&self, body: &str) -> reqwest::Response {
        reqwest::Client::new()
            .post(format!("{}/send", &self.addr))
            .json(&serde_json::from_str::<Value>(body).unwrap())
            .send()
            .await
            .expect("The request should succeed.")
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(FakeSmtpServer::start().await).await
}

/// Spawn the application wired to the given fake SMTP server.
pub async fn spawn_app_with(smtp_server: FakeSmtpServer) -> TestApp {
    Lazy::force(&TRACING);

    let mut config = get_configuration().expect("Failed to read configuration.");
    config.application.port = 0;
    config.email.host = Some("127.0.0.1".to_string());
    config.email.port = smtp_server.port();
    config.email.secure = false;
    config.email.user = None;
    config.email.password = None;

    let app = App::with(config).await;

    let test_app = TestApp {
        addr: format!("http://127.0.0.1:{}", app.port()),
        smtp_server,
    };

    let _ = tokio::spawn(async move { app.serve().await.expect("The server should be running") });

    test_app
}

pub fn get_client() -> ClientWithMiddleware {
    let retry_policy = ExponentialBackoff::builder().build_with_max_retries(3);

    ClientBuilder::new(reqwest::Client::new())
        .with(TracingMiddleware::default())
        .with(RetryTransientMiddleware::new_with_policy(retry_policy))
        .build()
}
