use std::fmt;

use bookviz_shared::protocol::{
    ApiRequest, HttpMethod, LoginRequest, LoginResponse, RegisterRequest,
};
use gloo_net::http::{Request, Response};

use crate::config::AppConfig;

/// API 调用错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 请求构建或网络失败
    Network(String),
    /// 非 2xx 响应
    Status(u16),
    /// 响应解析失败
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "网络错误: {}", msg),
            ApiError::Status(code) => write!(f, "请求失败: {}", code),
            ApiError::Decode(msg) => write!(f, "响应解析失败: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

#[derive(Clone, Debug, PartialEq)]
pub struct BookVizApi {
    pub base_url: String,
}

impl BookVizApi {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            base_url: config.api_base.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// 发送请求并检查状态码，不解析响应体
    async fn call<R: ApiRequest>(&self, req: &R) -> Result<Response, ApiError> {
        let url = self.url(R::PATH);
        let request = match R::METHOD {
            HttpMethod::Get => Request::get(&url).build(),
            HttpMethod::Post => Request::post(&url).json(req),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let res = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !res.ok() {
            return Err(ApiError::Status(res.status()));
        }
        Ok(res)
    }

    async fn send<R: ApiRequest>(&self, req: &R) -> Result<R::Response, ApiError> {
        self.call(req)
            .await?
            .json::<R::Response>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// 用户名密码换取会话令牌
    pub async fn login(&self, username: String, password: String) -> Result<LoginResponse, ApiError> {
        self.send(&LoginRequest { username, password }).await
    }

    /// 注册新账户
    ///
    /// 后端可能返回空响应体，这里只看状态码。
    pub async fn register(&self, username: String, password: String) -> Result<(), ApiError> {
        self.call(&RegisterRequest { username, password }).await?;
        Ok(())
    }
}
