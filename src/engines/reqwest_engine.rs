// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};

use crate::config::ScraperConfiguration;
use crate::domain::services::observer::{FetchEvent, FetchObserver, NoopObserver};
use crate::engines::traits::{EngineError, FetchError, FetchedPage, Transport};
use crate::utils::retry_policy::RetryPolicy;

const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
const ACCEPT_LANGUAGE_EN: &str = "en-US,en;q=0.5";

/// 基于 reqwest 的传输层
///
/// 整个运行期间共享同一个 `reqwest::Client`（连接复用与 Cookie 会话），
/// 每次尝试前固定等待，失败后按线性退避重试。
pub struct ReqwestTransport {
    client: reqwest::Client,
    policy: RetryPolicy,
    observer: Arc<dyn FetchObserver>,
}

impl ReqwestTransport {
    /// 根据配置创建传输层
    ///
    /// # 参数
    ///
    /// * `config` - 抓取器配置，提供 User-Agent、超时与重试参数
    ///
    /// # 返回值
    ///
    /// * `Ok(ReqwestTransport)` - 创建成功
    /// * `Err(EngineError)` - HTTP 客户端构建失败
    pub fn new(config: &ScraperConfiguration) -> Result<Self, EngineError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HTML));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(ACCEPT_LANGUAGE_EN));

        let client = reqwest::Client::builder()
            .user_agent(config.http_user_agent.as_str())
            .default_headers(headers)
            .timeout(config.timeout())
            .cookie_store(true)
            .build()?;

        Ok(Self {
            client,
            policy: RetryPolicy::from_config(config),
            observer: Arc::new(NoopObserver),
        })
    }

    pub fn with_observer(mut self, observer: Arc<dyn FetchObserver>) -> Self {
        self.observer = observer;
        self
    }

    async fn attempt(&self, url: &str) -> Result<FetchedPage, EngineError> {
        let response = self.client.get(url).send().await?.error_for_status()?;

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let body = response.bytes().await?;

        Ok(FetchedPage {
            content_type,
            body,
        })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        let mut retries_done = 0;

        loop {
            tokio::time::sleep(self.policy.request_delay).await;

            let error = match self.attempt(url).await {
                Ok(page) => return Ok(page),
                Err(e) => e,
            };

            if !error.is_retryable() || !self.policy.should_retry(retries_done) {
                return Err(FetchError {
                    url: url.to_string(),
                    attempts: retries_done + 1,
                    source: error,
                });
            }

            retries_done += 1;
            let wait = self.policy.calculate_backoff(retries_done);
            self.observer.on_event(&FetchEvent::RetryScheduled {
                url: url.to_string(),
                attempt: retries_done,
                wait,
                error: error.to_string(),
            });
            tokio::time::sleep(wait).await;
        }
    }
}

#[cfg(test)]
#[path = "reqwest_engine_test.rs"]
mod tests;
