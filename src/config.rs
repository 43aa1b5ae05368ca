use std::net::IpAddr;

use lettre::message::Mailbox;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub max_body_size: usize,
    pub log_level: String,
    pub table_name: String,
    pub notification: NotificationConfig,
    pub store: StoreBackend,
    pub mail: MailBackend,
}

/// Addresses used for the notification sent after every stored submission.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationConfig {
    pub sender: String,
    pub recipient: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StoreBackend {
    DynamoDb,
    Postgres { database_url: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum MailBackend {
    Ses,
    Smtp(SmtpConfig),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub pass: String,
    pub tls: SmtpTls,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SmtpTls {
    Starttls,
    Tls,
    None,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = Env { lookup };

        let host: IpAddr = env
            .or("CONTACT_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid CONTACT_HOST: {e}"))?;

        let port: u16 = env
            .or("CONTACT_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid CONTACT_PORT: {e}"))?;

        let max_body_size: usize = env
            .or("CONTACT_MAX_BODY_SIZE", "1048576")
            .parse()
            .map_err(|e| format!("Invalid CONTACT_MAX_BODY_SIZE: {e}"))?;

        let log_level = env.or("CONTACT_LOG_LEVEL", "info");

        let table_name = env.required_with_alias("CONTACT_TABLE_NAME", "DYNAMODB_TABLE_NAME")?;
        let sender = env.required_with_alias("CONTACT_SENDER_EMAIL", "SENDER_EMAIL")?;
        let recipient = env.required_with_alias("CONTACT_RECIPIENT_EMAIL", "RECIPIENT_EMAIL")?;

        validate_mailbox("sender", &sender)?;
        validate_mailbox("recipient", &recipient)?;

        let store = match env.or("CONTACT_STORE_BACKEND", "dynamodb").as_str() {
            "dynamodb" => StoreBackend::DynamoDb,
            "postgres" => {
                validate_table_identifier(&table_name)?;
                StoreBackend::Postgres {
                    database_url: env.required("DATABASE_URL")?,
                }
            }
            other => return Err(format!("Invalid CONTACT_STORE_BACKEND: {other}")),
        };

        let mail = match env.or("CONTACT_MAIL_BACKEND", "ses").as_str() {
            "ses" => MailBackend::Ses,
            "smtp" => MailBackend::Smtp(SmtpConfig {
                host: env.required("CONTACT_SMTP_HOST")?,
                port: env
                    .or("CONTACT_SMTP_PORT", "587")
                    .parse()
                    .map_err(|e| format!("Invalid CONTACT_SMTP_PORT: {e}"))?,
                user: env.required("CONTACT_SMTP_USER")?,
                pass: env.required("CONTACT_SMTP_PASS")?,
                tls: match env.or("CONTACT_SMTP_TLS", "starttls").as_str() {
                    "starttls" => SmtpTls::Starttls,
                    "tls" => SmtpTls::Tls,
                    "none" => SmtpTls::None,
                    other => return Err(format!("Invalid CONTACT_SMTP_TLS: {other}")),
                },
            }),
            other => return Err(format!("Invalid CONTACT_MAIL_BACKEND: {other}")),
        };

        Ok(Config {
            host,
            port,
            max_body_size,
            log_level,
            table_name,
            notification: NotificationConfig { sender, recipient },
            store,
            mail,
        })
    }
}

struct Env<F> {
    lookup: F,
}

impl<F> Env<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, key: &str) -> Option<String> {
        (self.lookup)(key).filter(|v| !v.trim().is_empty())
    }

    fn required(&self, key: &str) -> Result<String, String> {
        self.get(key)
            .ok_or_else(|| format!("Missing required environment variable: {key}"))
    }

    fn required_with_alias(&self, key: &str, alias: &str) -> Result<String, String> {
        self.get(key)
            .or_else(|| self.get(alias))
            .ok_or_else(|| format!("Missing required environment variable: {key} (or {alias})"))
    }

    fn or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }
}

fn validate_mailbox(role: &str, address: &str) -> Result<(), String> {
    address
        .parse::<Mailbox>()
        .map(|_| ())
        .map_err(|e| format!("Invalid {role} address '{address}': {e}"))
}

/// Postgres table names are interpolated into SQL, so only plain
/// identifiers (optionally `schema.table`) are accepted.
pub fn validate_table_identifier(name: &str) -> Result<(), String> {
    let parts: Vec<&str> = name.split('.').collect();
    if parts.len() > 2 {
        return Err(format!("Invalid table name '{name}': at most one schema qualifier"));
    }

    for part in parts {
        let mut chars = part.chars();
        let valid = match chars.next() {
            Some(first) if first.is_ascii_alphabetic() || first == '_' => {
                chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            }
            _ => false,
        };
        if !valid {
            return Err(format!("Invalid table name '{name}'"));
        }
    }

    Ok(())
}
