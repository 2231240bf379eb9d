use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use super::types::{NotificationError, Notifier, SendOutcome};
use crate::config::{Config, SmtpSettings};

/// SMTP notifier over implicit TLS
pub struct SmtpNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: String,
}

impl SmtpNotifier {
    pub fn new(config: &Config) -> Result<Self, NotificationError> {
        Self::with_settings(&config.sender_email, &config.sender_password, &config.smtp)
    }

    pub fn with_settings(
        sender: &str,
        password: &str,
        settings: &SmtpSettings,
    ) -> Result<Self, NotificationError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.host)
            .map_err(|e| NotificationError::Transport(e.to_string()))?
            .port(settings.port)
            .timeout(Some(settings.timeout))
            .credentials(Credentials::new(sender.to_string(), password.to_string()))
            .build();

        Ok(Self {
            transport,
            sender: sender.to_string(),
        })
    }

    fn mailbox(address: &str) -> Result<Mailbox, NotificationError> {
        address.parse::<Mailbox>().map_err(|e| NotificationError::Address {
            address: address.to_string(),
            reason: e.to_string(),
        })
    }

    fn build_message(
        &self,
        recipient: &str,
        subject: &str,
        body: &str,
    ) -> Result<Message, NotificationError> {
        Message::builder()
            .from(Self::mailbox(&self.sender)?)
            .to(Self::mailbox(recipient)?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| NotificationError::Message(e.to_string()))
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn send_email(&self, recipient: &str, subject: &str, body: &str) -> SendOutcome {
        let message = match self.build_message(recipient, subject, body) {
            Ok(message) => message,
            Err(e) => return SendOutcome::Failed(e),
        };

        match self.transport.send(message).await {
            Ok(_) => SendOutcome::Sent,
            Err(e) => SendOutcome::Failed(NotificationError::Transport(e.to_string())),
        }
    }
}
