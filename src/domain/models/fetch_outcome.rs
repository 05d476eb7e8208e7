// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::path::PathBuf;

use serde::Serialize;

/// 一次流水线运行的汇总结果
///
/// `documents_downloaded` 始终等于 `downloaded_files.len()`，
/// 因此只能通过 [`FetchOutcome::record_download`] 追加文件。
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FetchOutcome {
    pub search_query: String,
    pub businesses_found: usize,
    documents_downloaded: usize,
    downloaded_files: Vec<PathBuf>,
    pub errors: Vec<String>,
}

impl FetchOutcome {
    pub fn new(search_query: impl Into<String>) -> Self {
        Self {
            search_query: search_query.into(),
            businesses_found: 0,
            documents_downloaded: 0,
            downloaded_files: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn record_download(&mut self, path: PathBuf) {
        self.downloaded_files.push(path);
        self.documents_downloaded = self.downloaded_files.len();
    }

    pub fn record_error(&mut self, error: impl ToString) {
        self.errors.push(error.to_string());
    }

    pub fn documents_downloaded(&self) -> usize {
        self.documents_downloaded
    }

    pub fn downloaded_files(&self) -> &[PathBuf] {
        &self.downloaded_files
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
