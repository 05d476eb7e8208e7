// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::time::Duration;

use crate::config::ScraperConfiguration;

/// 重试策略配置
///
/// 线性退避：第 n 次重试前等待 `n * backoff_step`。
/// 每次尝试（包括重试）前另有固定的 `request_delay` 节流。
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// 最大重试次数（不含首次请求）
    pub max_retries: u32,
    /// 退避步长
    pub backoff_step: Duration,
    /// 每次尝试前的固定间隔
    pub request_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&ScraperConfiguration::default())
    }
}

impl RetryPolicy {
    pub fn from_config(config: &ScraperConfiguration) -> Self {
        Self {
            max_retries: config.max_retry_attempts,
            backoff_step: config.retry_backoff_step(),
            request_delay: config.request_delay(),
        }
    }

    /// 计算第 `attempt` 次重试前的退避时间（从 1 开始计数）
    pub fn calculate_backoff(&self, attempt: u32) -> Duration {
        self.backoff_step.saturating_mul(attempt.max(1))
    }

    /// 是否应该重试
    ///
    /// `retries_done` 为已经执行过的重试次数
    pub fn should_retry(&self, retries_done: u32) -> bool {
        retries_done < self.max_retries
    }
}
