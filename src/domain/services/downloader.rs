// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone};
use sha2::{Digest, Sha256};

use crate::domain::repositories::storage_repository::StorageRepository;
use crate::domain::services::link_extractor::DOCUMENT_EXTENSION;
use crate::domain::services::observer::{FetchEvent, FetchObserver, NoopObserver};
use crate::engines::traits::Transport;
use crate::utils::errors::DocumentRetrievalError;

/// 文件名中企业名称部分的最大长度（字符）
pub const FILENAME_MAX_LENGTH: usize = 50;
/// URL 哈希标签长度
pub const URL_HASH_LENGTH: usize = 8;
const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// 文档下载器
///
/// 通过传输层获取文档并交给存储落盘。文件名由三部分组成：
/// 清洗后的企业名、URL 哈希前 8 位、本地时间戳。
pub struct Downloader {
    transport: Arc<dyn Transport>,
    storage: Arc<dyn StorageRepository>,
    observer: Arc<dyn FetchObserver>,
}

impl Downloader {
    pub fn new(transport: Arc<dyn Transport>, storage: Arc<dyn StorageRepository>) -> Self {
        Self {
            transport,
            storage,
            observer: Arc::new(NoopObserver),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn FetchObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// 下载单个文档
    ///
    /// # 参数
    ///
    /// * `url` - 文档地址
    /// * `business_name` - 所属企业名称，用于生成文件名
    ///
    /// # 返回值
    ///
    /// * `Ok(PathBuf)` - 保存后的文件路径
    /// * `Err(DocumentRetrievalError)` - 获取或写入失败
    pub async fn download(
        &self,
        url: &str,
        business_name: &str,
    ) -> Result<PathBuf, DocumentRetrievalError> {
        let page = self.transport.fetch(url).await?;

        let file_name = document_file_name(business_name, url, &Local::now());
        let path = self.storage.save(&file_name, &page.body).await?;

        self.observer
            .on_event(&FetchEvent::DocumentSaved { path: path.clone() });
        Ok(path)
    }
}

/// 清洗企业名称：仅保留字母、数字、下划线、空白与连字符，并截断
pub fn sanitize_business_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '_' || *c == '-')
        .take(FILENAME_MAX_LENGTH)
        .collect()
}

/// 源 URL 的短哈希标签（SHA-256 十六进制前 8 位）
pub fn url_hash_tag(url: &str) -> String {
    let digest = Sha256::digest(url.as_bytes());
    let mut tag = hex::encode(digest);
    tag.truncate(URL_HASH_LENGTH);
    tag
}

/// 生成 `<name>_<hash>_<YYYYMMDD_HHMMSS>.pdf`
pub fn document_file_name<Tz>(business_name: &str, url: &str, at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!(
        "{}_{}_{}.{}",
        sanitize_business_name(business_name),
        url_hash_tag(url),
        at.format(TIMESTAMP_FORMAT),
        DOCUMENT_EXTENSION
    )
}
