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

use async_trait::async_trait;
use bytes::Bytes;
use encoding_rs::{Encoding, UTF_8};
use thiserror::Error;

/// 单次请求错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    /// 请求失败（包括非 2xx 状态码）
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    /// 其他错误
    #[error("Other error: {0}")]
    Other(String),
}

impl EngineError {
    /// 判断错误是否可重试
    ///
    /// 网络错误与任何非 2xx 状态码都视为可恢复；
    /// 请求构造失败（如 URL 非法）重试也无济于事
    pub fn is_retryable(&self) -> bool {
        match self {
            EngineError::RequestFailed(e) => !e.is_builder(),
            EngineError::Other(_) => false,
        }
    }
}

/// 重试耗尽后的请求错误
///
/// 携带目标 URL、实际尝试次数以及最后一次的底层错误
#[derive(Error, Debug)]
#[error("Request to {url} failed after {attempts} attempt(s): {source}")]
pub struct FetchError {
    pub url: String,
    pub attempts: u32,
    #[source]
    pub source: EngineError,
}

/// 抓取到的页面
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// 内容类型（原始 Content-Type 头）
    pub content_type: String,
    /// 原始响应体
    pub body: Bytes,
}

impl FetchedPage {
    /// 按 Content-Type 声明的字符集解码响应体
    ///
    /// 未声明或无法识别的字符集按 UTF-8 处理，非法字节替换为 U+FFFD
    pub fn text(&self) -> String {
        let encoding = declared_charset(&self.content_type)
            .and_then(|label| Encoding::for_label(label.as_bytes()))
            .unwrap_or(UTF_8);
        let (text, _, _) = encoding.decode(&self.body);
        text.into_owned()
    }
}

/// 从 `text/html; charset=...` 中取出字符集标签
fn declared_charset(content_type: &str) -> Option<&str> {
    content_type.split(';').skip(1).find_map(|param| {
        let (key, value) = param.split_once('=')?;
        key.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches('"'))
    })
}

/// 传输层特质
///
/// 唯一的对外网络出口。实现方负责请求前节流与有界重试。
#[async_trait]
pub trait Transport: Send + Sync {
    /// 获取 URL 的原始响应体
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError>;
}
