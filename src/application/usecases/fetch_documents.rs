// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::path::PathBuf;
use std::sync::Arc;

use url::Url;

use crate::config::ScraperConfiguration;
use crate::domain::models::business_record::BusinessRecord;
use crate::domain::models::fetch_outcome::FetchOutcome;
use crate::domain::repositories::storage_repository::StorageRepository;
use crate::domain::services::downloader::Downloader;
use crate::domain::services::link_extractor::DocumentLinkExtractor;
use crate::domain::services::observer::{FetchEvent, FetchObserver};
use crate::domain::services::result_extractor::ResultExtractor;
use crate::engines::traits::Transport;
use crate::utils::errors::{DetailFetchError, SearchOperationError};
use crate::utils::url_utils::build_search_url;

// === Section: Use Case Definition ===

/// 文档抓取流水线
///
/// 搜索 → 逐个企业抓取详情页 → 提取文档链接 → 逐个下载。
/// 严格串行，一次只有一个请求在途。
///
/// 只有搜索阶段的失败会进入结果的错误列表；详情页失败和单个文档
/// 失败只通过观察者报告，体现为更少的下载数。
pub struct FetchDocumentsUseCase {
    base_url: Url,
    search_endpoint: String,
    search_query_param: String,
    transport: Arc<dyn Transport>,
    result_extractor: ResultExtractor,
    link_extractor: DocumentLinkExtractor,
    downloader: Downloader,
    observer: Arc<dyn FetchObserver>,
}

// === Section: Implementation ===

impl FetchDocumentsUseCase {
    pub fn new(
        config: &ScraperConfiguration,
        transport: Arc<dyn Transport>,
        storage: Arc<dyn StorageRepository>,
        observer: Arc<dyn FetchObserver>,
    ) -> Result<Self, url::ParseError> {
        let base_url = Url::parse(&config.target_base_url)?;

        Ok(Self {
            result_extractor: ResultExtractor::new(base_url.clone())
                .with_observer(observer.clone()),
            link_extractor: DocumentLinkExtractor::new(base_url.clone())
                .with_observer(observer.clone()),
            downloader: Downloader::new(transport.clone(), storage)
                .with_observer(observer.clone()),
            base_url,
            search_endpoint: config.search_endpoint.clone(),
            search_query_param: config.search_query_param.clone(),
            transport,
            observer,
        })
    }

    /// 执行完整流程
    pub async fn execute(&self, search_query: &str) -> FetchOutcome {
        self.execute_with_records(search_query).await.0
    }

    /// 执行完整流程，同时返回本次运行的企业记录（已填充文档链接）
    pub async fn execute_with_records(
        &self,
        search_query: &str,
    ) -> (FetchOutcome, Vec<BusinessRecord>) {
        let mut outcome = FetchOutcome::new(search_query);

        let mut businesses = match self.search_businesses(search_query).await {
            Ok(businesses) => businesses,
            Err(e) => {
                self.observer.on_event(&FetchEvent::SearchFailed {
                    query: search_query.to_string(),
                    error: e.to_string(),
                });
                outcome.record_error(e);
                return (outcome, Vec::new());
            }
        };
        outcome.businesses_found = businesses.len();

        for business in businesses.iter_mut() {
            for path in self.fetch_business_documents(business).await {
                outcome.record_download(path);
            }
        }

        (outcome, businesses)
    }

    /// 搜索企业
    pub async fn search_businesses(
        &self,
        search_query: &str,
    ) -> Result<Vec<BusinessRecord>, SearchOperationError> {
        let search_url = build_search_url(
            &self.base_url,
            &self.search_endpoint,
            &self.search_query_param,
            search_query,
        )?;
        self.observer.on_event(&FetchEvent::SearchStarted {
            query: search_query.to_string(),
            url: search_url.to_string(),
        });

        let page = self.transport.fetch(search_url.as_str()).await?;
        Ok(self.result_extractor.extract_records(&page.text()))
    }

    /// 抓取单个企业的全部文档
    ///
    /// 详情页失败时返回空列表；单个文档失败时跳过该文档继续。
    /// 成功时把解析出的文档链接写入 `business.pdf_documents`。
    pub async fn fetch_business_documents(&self, business: &mut BusinessRecord) -> Vec<PathBuf> {
        self.observer.on_event(&FetchEvent::DetailFetchStarted {
            entity_name: business.entity_name.clone(),
        });

        let links = match self.locate_document_links(business).await {
            Ok(links) => links,
            Err(e) => {
                // Not added to FetchOutcome::errors, unlike search failures.
                // Revisit if per-business failures should affect the exit code.
                self.observer.on_event(&FetchEvent::DetailFetchFailed {
                    entity_name: business.entity_name.clone(),
                    error: e.to_string(),
                });
                return Vec::new();
            }
        };
        business.pdf_documents = links;

        let mut saved = Vec::with_capacity(business.pdf_documents.len());
        for url in &business.pdf_documents {
            match self.downloader.download(url, &business.entity_name).await {
                Ok(path) => saved.push(path),
                Err(e) => self.observer.on_event(&FetchEvent::DocumentFailed {
                    url: url.clone(),
                    error: e.to_string(),
                }),
            }
        }
        saved
    }

    async fn locate_document_links(
        &self,
        business: &BusinessRecord,
    ) -> Result<Vec<String>, DetailFetchError> {
        let page = self.transport.fetch(&business.detail_link).await?;
        Ok(self.link_extractor.extract_links(&page.text()))
    }
}

#[cfg(test)]
#[path = "fetch_documents_test.rs"]
mod tests;
