use lettre::{
    message::{header::ContentType, Mailbox, MultiPart, SinglePart},
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use secrecy::ExposeSecret;

use crate::{config::EmailSettings, domain::submission::Submission};

/// Failure of a single delivery attempt. `Display` is the underlying error's
/// message, which is what gets reported back to the submitting client.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error(transparent)]
    Transport(#[from] lettre::transport::smtp::Error),
    #[error(transparent)]
    Address(#[from] lettre::address::AddressError),
    #[error(transparent)]
    Build(#[from] lettre::error::Error),
}

/// Relays submissions to the configured recipient over SMTP.
///
/// The sender and recipient mailboxes are parsed once at construction; the
/// SMTP session itself is established fresh on every send and not pooled.
#[derive(Clone)]
pub struct Mailer {
    settings: EmailSettings,
    from: Mailbox,
    to: Mailbox,
}

impl Mailer {
    pub fn new(settings: EmailSettings) -> Result<Self, lettre::address::AddressError> {
        let from = settings.from.parse()?;
        let to = settings.to.parse()?;
        Ok(Self { settings, from, to })
    }

    /// Send one email for the given submission. A single attempt; any
    /// transport, address, or message-build error is returned as-is.
    pub async fn send(&self, submission: &Submission) -> Result<(), DeliveryError> {
        let email = self.compose(submission)?;
        let mailer = self.transport()?;
        mailer.send(email).await?;

        tracing::info!(to = %self.to, reply_to = %submission.email, "submission relayed");
        Ok(())
    }

    /// Compose the outbound message: reply-to set to the submitter, plain
    /// text and HTML renderings of the submission as alternatives.
    fn compose(&self, submission: &Submission) -> Result<Message, DeliveryError> {
        let email = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .reply_to(submission.email.parse()?)
            .subject(format!("Contact Form: Message from {}", submission.name))
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(text_body(submission)),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(html_body(submission)),
                    ),
            )?;

        Ok(email)
    }

    /// Build a one-shot SMTP transport from the settings. `secure` selects
    /// implicit TLS; otherwise STARTTLS is used when the server offers it.
    fn transport(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>, DeliveryError> {
        let host = self.settings.host.as_deref().unwrap_or("localhost");

        let mut builder = if self.settings.secure {
            AsyncSmtpTransport::<Tokio1Executor>::relay(host)?.port(self.settings.port)
        } else {
            let tls = TlsParameters::new(host.to_string())?;
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
                .port(self.settings.port)
                .tls(Tls::Opportunistic(tls))
        };

        if let (Some(user), Some(password)) = (&self.settings.user, &self.settings.password) {
            builder = builder.credentials(Credentials::new(
                user.clone(),
                password.expose_secret().clone(),
            ));
        }

        Ok(builder.build())
    }
}

fn text_body(submission: &Submission) -> String {
    format!(
        "Name: {}\nEmail: {}\n\nMessage:\n{}\n",
        submission.name, submission.email, submission.message
    )
}

fn html_body(submission: &Submission) -> String {
    format!(
        "<h2>New Contact Form Submission</h2>\n\
         <p><strong>Name:</strong> {}</p>\n\
         <p><strong>Email:</strong> {}</p>\n\
         <h3>Message:</h3>\n\
         <p>{}</p>\n",
        submission.name,
        submission.email,
        submission.message.replace('\n', "<br>")
    )
}
