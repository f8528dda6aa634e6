use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::session::SessionGrant;

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest: Serialize + DeserializeOwned {
    /// The response type returned by this request.
    type Response: Serialize + DeserializeOwned;
    /// The URL path, relative to the configured API base.
    const PATH: &'static str;
    const METHOD: HttpMethod;
}

// =========================================================
// Request Definitions
// =========================================================

/// Exchange credentials for a session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub username: Option<String>,
}

impl ApiRequest for LoginRequest {
    type Response = LoginResponse;
    const PATH: &'static str = "/login";
    const METHOD: HttpMethod = HttpMethod::Post;
}

impl From<LoginResponse> for SessionGrant {
    fn from(resp: LoginResponse) -> Self {
        Self {
            token: resp.token,
            display_name: resp.username,
        }
    }
}

/// Create a new account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

/// The backend answers registration with an (ignored) JSON object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiRequest for RegisterRequest {
    type Response = RegisterResponse;
    const PATH: &'static str = "/register";
    const METHOD: HttpMethod = HttpMethod::Post;
}
