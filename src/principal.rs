use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Profile attributes attached to a principal at registration.
///
/// Other clients of the same project write these keys too, so values of an
/// unexpected type are read as absent instead of failing the whole session.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserMetadata {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_text"
    )]
    pub first_name: Option<String>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_text"
    )]
    pub last_name: Option<String>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_age"
    )]
    pub age: Option<u32>,

    /// Keys the identity service adds on its own (`sub`, `email_verified`, ...).
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

fn deserialize_text<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(text)) => Ok(Some(text)),
        Some(other) => {
            tracing::debug!(value = %other, "ignoring non-text profile field");
            Ok(None)
        }
        None => Ok(None),
    }
}

// Ages have been stored as numbers, numeric strings and empty strings.
fn deserialize_age<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    let age = match Option::<Value>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(Value::Number(number)) => number.as_u64().and_then(|age| u32::try_from(age).ok()),
        Some(Value::String(ref text)) if text.trim().is_empty() => return Ok(None),
        Some(Value::String(text)) => text.trim().parse().ok(),
        Some(_) => None,
    };

    if age.is_none() {
        tracing::debug!("ignoring unreadable profile age");
    }
    Ok(age)
}

/// The authenticated identity as returned by the identity service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Principal {
    pub id: Uuid,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub user_metadata: UserMetadata,
}

impl Principal {
    /// Name shown in the status badge, falling back to the e-mail and then the id.
    pub fn display_name(&self) -> String {
        let metadata = &self.user_metadata;
        let name = [
            metadata.first_name.as_deref(),
            metadata.last_name.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter(|part| !part.trim().is_empty())
        .collect::<Vec<_>>()
        .join(" ");

        if !name.is_empty() {
            return name;
        }

        match &self.email {
            Some(email) if !email.is_empty() => email.clone(),
            _ => self.id.to_string(),
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,

    #[serde(default = "default_token_type")]
    pub token_type: String,

    #[serde(default)]
    pub expires_in: Option<u64>,

    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub expires_at: Option<DateTime<Utc>>,

    pub user: Principal,
}

fn default_token_type() -> String {
    "bearer".to_owned()
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .field("expires_at", &self.expires_at)
            .field("user", &self.user)
            .finish()
    }
}

/// E-mail and password captured from a form for the duration of one submit.
#[derive(Clone, PartialEq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Registration {
    pub credentials: Credentials,
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
}

impl Registration {
    pub fn metadata(&self) -> UserMetadata {
        UserMetadata {
            first_name: Some(self.first_name.clone()),
            last_name: Some(self.last_name.clone()),
            age: Some(self.age),
            extra: serde_json::Map::new(),
        }
    }
}

/// Result of a sign-up. `session` is absent when the project requires the
/// e-mail address to be confirmed before the first sign-in.
#[derive(Clone, Debug, PartialEq)]
pub struct SignUpOutcome {
    pub user: Principal,
    pub session: Option<Session>,
}
