// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

use crate::domain::repositories::storage_repository::StorageError;
use crate::engines::traits::FetchError;

/// 搜索阶段错误，会终止整次运行并出现在结果的错误列表中
#[derive(Error, Debug)]
pub enum SearchOperationError {
    #[error("Unable to search: {0}")]
    Fetch(#[from] FetchError),

    #[error("Unable to search: invalid search URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// 详情页抓取错误，按企业吸收，不计入错误列表
#[derive(Error, Debug)]
pub enum DetailFetchError {
    #[error("Detail page fetch failed: {0}")]
    Fetch(#[from] FetchError),
}

/// 单个文档下载错误，记录后跳过该文档
#[derive(Error, Debug)]
pub enum DocumentRetrievalError {
    #[error("PDF download failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("PDF download failed: {0}")]
    Storage(#[from] StorageError),
}
