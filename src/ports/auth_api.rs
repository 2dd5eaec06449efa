//! Auth API Port - account registration.

use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};
use serde::{Serialize, Serializer};

use crate::domain::signup::SignupFields;

use super::TransportError;

/// Port for the `POST /auth/register` endpoint.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Registers an account. Success carries no payload the caller needs.
    async fn register(&self, request: RegisterRequest) -> Result<(), TransportError>;
}

/// Body of `POST /auth/register`.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    #[serde(serialize_with = "expose_password")]
    pub password: Secret<String>,
}

impl From<SignupFields> for RegisterRequest {
    fn from(fields: SignupFields) -> Self {
        Self {
            name: fields.name,
            email: fields.email,
            password: fields.password,
        }
    }
}

fn expose_password<S: Serializer>(password: &Secret<String>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(password.expose_secret())
}
