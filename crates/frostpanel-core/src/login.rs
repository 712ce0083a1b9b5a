//! Login form values, request body and outcome.

use serde::{Deserialize, Serialize};

use crate::error::LoginError;

pub const LOGIN_URL: &str = "/auth/login";
pub const LOGOUT_URL: &str = "/auth/logout";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginValues {
    pub username: String,
    pub password: String,
}

impl LoginValues {
    /// Both fields are required; nothing else is checked client-side.
    pub fn validate(&self) -> Result<(), LoginError> {
        if self.username.trim().is_empty() {
            return Err(LoginError::MissingUsername);
        }
        if self.password.is_empty() {
            return Err(LoginError::MissingPassword);
        }
        Ok(())
    }

    pub fn into_request(self, recaptcha: Option<String>) -> LoginRequest {
        LoginRequest {
            user: self.username,
            password: self.password,
            recaptcha,
        }
    }
}

/// `POST /auth/login` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub user: String,
    pub password: String,
    #[serde(rename = "g-recaptcha-response", skip_serializing_if = "Option::is_none")]
    pub recaptcha: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponseData {
    pub complete: bool,
    #[serde(default)]
    pub intended: Option<String>,
    #[serde(default)]
    pub confirmation_token: Option<String>,
}

/// `POST /auth/login` response.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub data: LoginResponseData,
}

/// Where a successful login continues.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Session established; leave the app for `redirect`.
    Complete { redirect: String },
    /// Second factor required.
    Checkpoint { token: String },
}

impl From<LoginResponse> for LoginOutcome {
    fn from(response: LoginResponse) -> Self {
        let data = response.data;
        if data.complete {
            Self::Complete {
                redirect: data
                    .intended
                    .filter(|i| !i.is_empty())
                    .unwrap_or_else(|| "/".to_string()),
            }
        } else {
            Self::Checkpoint {
                token: data.confirmation_token.unwrap_or_default(),
            }
        }
    }
}
