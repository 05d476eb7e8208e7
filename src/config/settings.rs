// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::path::PathBuf;
use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use url::Url;

/// 抓取器配置
///
/// 启动时构造一次，运行期间只读。CLI 覆盖项通过 `with_*` 方法
/// 在构造流水线之前应用，之后不再修改。
#[derive(Debug, Clone, Deserialize)]
pub struct ScraperConfiguration {
    /// 注册处站点根地址
    pub target_base_url: String,
    /// 搜索结果页路径
    pub search_endpoint: String,
    /// 搜索词所用的查询参数名
    pub search_query_param: String,
    /// 文档保存目录
    pub storage_directory: PathBuf,
    /// 每次请求前的固定等待（秒）
    pub request_delay_seconds: f64,
    /// 连接超时（秒）
    pub connection_timeout: u64,
    /// 最大重试次数（不含首次请求）
    pub max_retry_attempts: u32,
    /// 退避步长（秒），第 n 次重试等待 n * 步长
    pub retry_backoff_seconds: f64,
    /// 客户端标识（User-Agent）
    pub http_user_agent: String,
}

impl Default for ScraperConfiguration {
    fn default() -> Self {
        Self {
            target_base_url: "https://www.sosnc.gov".to_string(),
            search_endpoint: "/online_services/search/by_title/_Business_Registration".to_string(),
            search_query_param: "Words".to_string(),
            storage_directory: PathBuf::from("./fetched_documents"),
            request_delay_seconds: 1.5,
            connection_timeout: 30,
            max_retry_attempts: 3,
            retry_backoff_seconds: 2.0,
            http_user_agent: "NCBusinessDocFetcher/1.0".to_string(),
        }
    }
}

impl ScraperConfiguration {
    /// 加载配置
    ///
    /// 依次叠加：内置默认值、`config/default`、`config/{APP_ENVIRONMENT}`、
    /// 以 `REGDOCS__` 为前缀的环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(ScraperConfiguration)` - 成功加载并校验的配置
    /// * `Err(ConfigError)` - 配置加载或校验失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let defaults = Self::default();
        let builder = Config::builder()
            .set_default("target_base_url", defaults.target_base_url)?
            .set_default("search_endpoint", defaults.search_endpoint)?
            .set_default("search_query_param", defaults.search_query_param)?
            .set_default(
                "storage_directory",
                defaults.storage_directory.to_string_lossy().to_string(),
            )?
            .set_default("request_delay_seconds", defaults.request_delay_seconds)?
            .set_default("connection_timeout", defaults.connection_timeout as i64)?
            .set_default("max_retry_attempts", i64::from(defaults.max_retry_attempts))?
            .set_default("retry_backoff_seconds", defaults.retry_backoff_seconds)?
            .set_default("http_user_agent", defaults.http_user_agent)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("REGDOCS").separator("__"));

        let settings: Self = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// 覆盖保存目录
    pub fn with_storage_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.storage_directory = dir.into();
        self
    }

    /// 覆盖请求间隔
    pub fn with_request_delay(mut self, seconds: f64) -> Self {
        self.request_delay_seconds = seconds;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.base_url()?;
        for (key, value) in [
            ("request_delay_seconds", self.request_delay_seconds),
            ("retry_backoff_seconds", self.retry_backoff_seconds),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Message(format!(
                    "{} must be a non-negative number, got {}",
                    key, value
                )));
            }
        }
        Ok(())
    }

    /// 解析后的站点根地址
    pub fn base_url(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.target_base_url).map_err(|e| {
            ConfigError::Message(format!(
                "invalid target_base_url '{}': {}",
                self.target_base_url, e
            ))
        })
    }

    pub fn request_delay(&self) -> Duration {
        Duration::try_from_secs_f64(self.request_delay_seconds).unwrap_or_default()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.connection_timeout)
    }

    pub fn retry_backoff_step(&self) -> Duration {
        Duration::try_from_secs_f64(self.retry_backoff_seconds).unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
