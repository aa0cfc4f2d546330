//! Bearer-authenticated HTTP client for the esigned API.
//!
//! [`ApiClient`] attaches the session's bearer credential to every request
//! that has one, and centralizes the unauthenticated-response policy: a 401
//! clears the stored credential and fails with
//! [`ApiError::Unauthorized`], carrying the login path the navigation layer
//! should redirect to. The shell is single-threaded and event-driven, so
//! the client is blocking; long transfers belong elsewhere.

use std::time::Duration;

use log::warn;
use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::persist::SettingsStore;
use crate::routing;
use crate::session::{Session, User};

/// Per-request timeout for interactive API calls.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Error returned by API calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The server rejected the credential. It has already been cleared;
    /// navigation should go to `redirect`.
    Unauthorized { redirect: &'static str },
    /// A non-success response other than 401.
    Status { status: u16, message: String },
    /// Connection, timeout, or decoding failure.
    Transport { message: String },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Unauthorized { redirect } => {
                write!(f, "unauthenticated; redirect to {}", redirect)
            }
            ApiError::Status { status, message } => {
                write!(f, "request failed with status {}: {}", status, message)
            }
            ApiError::Transport { message } => {
                write!(f, "transport error: {}", message)
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport {
            message: err.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Payload for `/auth/register`.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

#[derive(Debug, Serialize)]
struct ActivateRequest<'a> {
    username: &'a str,
    activation_code: &'a str,
}

/// Blocking HTTP client for the esigned API.
pub struct ApiClient {
    http: Client,
    base: String,
}

impl ApiClient {
    /// Creates a client against a base URL such as `https://host/api`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        let base = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Applies the 401 policy and maps non-success statuses.
    fn check<S: SettingsStore>(
        session: &mut Session<S>,
        response: Response,
    ) -> Result<Response, ApiError> {
        if response.status() == StatusCode::UNAUTHORIZED {
            warn!("unauthenticated response; clearing stored credential");
            session.clear_token();
            return Err(ApiError::Unauthorized {
                redirect: routing::LOGIN_PATH,
            });
        }
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().unwrap_or_default();
            return Err(ApiError::Status { status, message });
        }
        Ok(response)
    }

    /// GET a JSON resource with the session's credential attached.
    pub fn get_json<S, T>(&self, session: &mut Session<S>, path: &str) -> Result<T, ApiError>
    where
        S: SettingsStore,
        T: DeserializeOwned,
    {
        let mut request = self.http.get(self.url(path));
        if let Some(token) = session.token() {
            request = request.bearer_auth(token);
        }
        let response = request.send()?;
        let response = Self::check(session, response)?;
        Ok(response.json()?)
    }

    /// POST a JSON body with the session's credential attached.
    pub fn post_json<S, B, T>(
        &self,
        session: &mut Session<S>,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError>
    where
        S: SettingsStore,
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut request = self.http.post(self.url(path)).json(body);
        if let Some(token) = session.token() {
            request = request.bearer_auth(token);
        }
        let response = request.send()?;
        let response = Self::check(session, response)?;
        Ok(response.json()?)
    }

    /// Exchanges credentials for a bearer token, then loads the account.
    ///
    /// The login endpoint takes form-encoded credentials. On success the
    /// token is stored in the session before `/auth/me` is fetched; if that
    /// fetch fails the session is logged out again rather than left
    /// half-authenticated.
    pub fn login<S: SettingsStore>(
        &self,
        session: &mut Session<S>,
        username: &str,
        password: &str,
    ) -> Result<User, ApiError> {
        let response = self
            .http
            .post(self.url("/auth/login"))
            .form(&[("username", username), ("password", password)])
            .send()?;
        let response = Self::check(session, response)?;
        let token: TokenResponse = response.json()?;
        session.set_token(&token.access_token);

        match self.fetch_me(session) {
            Ok(user) => Ok(user),
            Err(err) => {
                session.logout();
                Err(err)
            }
        }
    }

    /// Loads `/auth/me` and caches the user on the session.
    pub fn fetch_me<S: SettingsStore>(&self, session: &mut Session<S>) -> Result<User, ApiError> {
        let user: User = self.get_json(session, "/auth/me")?;
        session.set_user(user.clone());
        Ok(user)
    }

    /// Registers a new account. The server answers with a status message.
    pub fn register<S: SettingsStore>(
        &self,
        session: &mut Session<S>,
        request: &RegisterRequest,
    ) -> Result<serde_json::Value, ApiError> {
        self.post_json(session, "/auth/register", request)
    }

    /// Activates an account with the emailed activation code.
    pub fn activate<S: SettingsStore>(
        &self,
        session: &mut Session<S>,
        username: &str,
        activation_code: &str,
    ) -> Result<serde_json::Value, ApiError> {
        self.post_json(
            session,
            "/auth/activate",
            &ActivateRequest {
                username,
                activation_code,
            },
        )
    }
}
