// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

/// 存储错误类型
#[derive(Error, Debug)]
pub enum StorageError {
    /// IO错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// 存储错误
    #[error("Storage error: {0}")]
    Other(String),
}

/// 存储仓库特质
///
/// 定义文档落盘接口
#[async_trait]
pub trait StorageRepository: Send + Sync {
    /// 使用指定文件名保存数据，返回最终路径
    async fn save(&self, file_name: &str, data: &[u8]) -> Result<PathBuf, StorageError>;
}
