//! 构建期配置
//!
//! 前端没有运行期环境变量，配置在 `trunk build` 时通过环境变量注入，
//! 未设置时使用默认值。

const DEFAULT_API_BASE: &str = "/api";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// 后端 API 前缀，如 `https://bookviz.example.com/api`
    pub api_base: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let api_base = option_env!("BOOKVIZ_API_BASE")
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE);
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
