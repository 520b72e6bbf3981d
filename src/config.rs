use config::{Config, Environment};
use secrecy::Secret;

const DEFAULT_FROM_ADDRESS: &str = "noreply@example.com";
const DEFAULT_TO_ADDRESS: &str = "contact@example.com";

#[derive(Clone, serde::Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub email: EmailSettings,
}

#[derive(Clone, serde::Deserialize)]
pub struct ApplicationSettings {
    pub port: u16,
    pub log_level: String,
}

/// SMTP settings for outbound delivery.
///
/// `host`, `user`, and `password` have no sensible defaults; leaving them
/// unset is allowed (the server still starts) but sends will fail.
#[derive(Clone, serde::Deserialize)]
pub struct EmailSettings {
    pub host: Option<String>,
    pub port: u16,
    pub secure: bool,
    pub user: Option<String>,
    pub password: Option<Secret<String>>,
    pub from: String,
    pub to: String,
}

impl EmailSettings {
    pub fn is_complete(&self) -> bool {
        self.host.is_some() && self.user.is_some() && self.password.is_some()
    }
}

/// Read settings from the environment: `PORT` and `LOG_LEVEL` for the
/// application, `EMAIL_*` for the mail transport.
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let application = Config::builder()
        .set_default("port", 3000)?
        .set_default("log_level", "info")?
        .add_source(Environment::default())
        .build()?
        .try_deserialize()?;

    let email = Config::builder()
        .set_default("port", 587)?
        .set_default("secure", false)?
        .set_default("from", DEFAULT_FROM_ADDRESS)?
        .set_default("to", DEFAULT_TO_ADDRESS)?
        .add_source(Environment::with_prefix("EMAIL"))
        .build()?
        .try_deserialize()?;

    Ok(Settings { application, email })
}
