use crate::email::application::ports::outgoing::{EmailSendError, EmailSender, OutgoingEmail};
use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{
    message::header::ContentType, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: Message) -> Result<(), String>;
}

pub struct SmtpEmailSender {
    mailer: Box<dyn Mailer>,
    from_email: String,
}

#[async_trait]
impl Mailer for AsyncSmtpTransport<Tokio1Executor> {
    async fn send(&self, email: Message) -> Result<(), String> {
        AsyncTransport::send(self, email)
            .await
            .map(|_resp| ())
            .map_err(|e| e.to_string())
    }
}

impl SmtpEmailSender {
    pub fn new_with_mailer(mailer: Box<dyn Mailer>, from_email: &str) -> Self {
        Self {
            mailer,
            from_email: from_email.to_string(),
        }
    }

    /// TLS relay with credentials.
    pub fn new(
        smtp_server: &str,
        smtp_username: &str,
        smtp_password: &str,
        from_email: &str,
    ) -> Result<Self, EmailSendError> {
        let creds = Credentials::new(smtp_username.to_string(), smtp_password.to_string());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(smtp_server)
            .map_err(|e| EmailSendError::Transport(e.to_string()))?
            .credentials(creds)
            .build();

        Ok(Self::new_with_mailer(Box::new(transport), from_email))
    }

    // Local/test constructor (Mailpit, MailHog, etc.)
    pub fn new_local(host: &str, port: u16, from_email: &str) -> Self {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
            .port(port)
            .build();

        Self::new_with_mailer(Box::new(transport), from_email)
    }

    fn build_message(&self, email: OutgoingEmail) -> Result<Message, EmailSendError> {
        let from: Mailbox = parse_mailbox(&self.from_email)?;
        let to: Mailbox = parse_mailbox(&email.to)?;

        let mut builder = Message::builder().from(from).to(to).subject(email.subject);

        // Submitters may type anything into the email field; skip the header rather than fail.
        if let Some(reply_to) = email.reply_to.as_deref() {
            if let Ok(mailbox) = reply_to.parse::<Mailbox>() {
                builder = builder.reply_to(mailbox);
            }
        }

        builder
            .header(ContentType::TEXT_PLAIN)
            .body(email.body)
            .map_err(|e| EmailSendError::BuildFailed(e.to_string()))
    }
}

fn parse_mailbox(raw: &str) -> Result<Mailbox, EmailSendError> {
    raw.parse::<Mailbox>()
        .map_err(|e| EmailSendError::InvalidAddress(format!("{}: {}", raw, e)))
}

#[async_trait]
impl EmailSender for SmtpEmailSender {
    async fn send_email(&self, email: OutgoingEmail) -> Result<(), EmailSendError> {
        let message = self.build_message(email)?;

        self.mailer
            .send(message)
            .await
            .map_err(EmailSendError::Transport)
    }
}
