// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::path::PathBuf;
use std::time::Duration;

use tracing::{debug, error, info, warn};

/// 抓取过程中的可观测事件
#[derive(Debug, Clone, PartialEq)]
pub enum FetchEvent {
    /// 开始搜索
    SearchStarted { query: String, url: String },
    /// 搜索失败（整个运行终止）
    SearchFailed { query: String, error: String },
    /// 结果页中没有找到结果表格
    ResultsTableMissing,
    /// 解析出的记录数
    RecordsFound { count: usize },
    /// 开始抓取某个企业的详情页
    DetailFetchStarted { entity_name: String },
    /// 详情页抓取失败（仅记录，不计入结果错误列表）
    DetailFetchFailed { entity_name: String, error: String },
    /// 详情页中定位到的文档链接数
    LinksLocated { count: usize },
    /// 文档已保存
    DocumentSaved { path: PathBuf },
    /// 文档下载失败
    DocumentFailed { url: String, error: String },
    /// 请求失败，即将重试
    RetryScheduled {
        url: String,
        attempt: u32,
        wait: Duration,
        error: String,
    },
}

/// 事件观察者
///
/// 各组件通过注入的观察者报告进度，默认实现为空操作，
/// 这样流水线在测试中不依赖任何全局日志状态。
pub trait FetchObserver: Send + Sync {
    fn on_event(&self, event: &FetchEvent);
}

/// 空操作观察者
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl FetchObserver for NoopObserver {
    fn on_event(&self, _event: &FetchEvent) {}
}

/// 将事件转发为 tracing 日志
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl FetchObserver for TracingObserver {
    fn on_event(&self, event: &FetchEvent) {
        match event {
            FetchEvent::SearchStarted { query, url } => {
                info!("Searching for businesses: '{}'", query);
                debug!("Search URL: {}", url);
            }
            FetchEvent::SearchFailed { query, error } => {
                error!("Search operation failed for '{}': {}", query, error)
            }
            FetchEvent::ResultsTableMissing => warn!("No results table found in response"),
            FetchEvent::RecordsFound { count } => info!("Found {} business records", count),
            FetchEvent::DetailFetchStarted { entity_name } => {
                info!("Fetching documents for: {}", entity_name)
            }
            FetchEvent::DetailFetchFailed { entity_name, error } => {
                error!("Document fetch failed for {}: {}", entity_name, error)
            }
            FetchEvent::LinksLocated { count } => info!("Located {} PDF documents", count),
            FetchEvent::DocumentSaved { path } => info!("Saved document: {}", path.display()),
            FetchEvent::DocumentFailed { url, error } => {
                error!("Failed to download PDF {}: {}", url, error)
            }
            FetchEvent::RetryScheduled {
                url,
                attempt,
                wait,
                error,
            } => warn!(
                url = %url,
                attempt = attempt,
                "Request failed, retrying in {}s: {}",
                wait.as_secs_f64(),
                error
            ),
        }
    }
}
