// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::HashSet;
use std::sync::Arc;

use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use url::Url;

use crate::domain::services::observer::{FetchEvent, FetchObserver, NoopObserver};
use crate::utils::url_utils::{path_has_extension, resolve_url};

/// 文档扩展名
pub const DOCUMENT_EXTENSION: &str = "pdf";

static HREF_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[href]").expect("valid href selector"));

/// 文档链接提取器
///
/// 从详情页中找出所有指向 PDF 的链接，解析为绝对地址，
/// 按首次出现顺序去重。
pub struct DocumentLinkExtractor {
    base_url: Url,
    observer: Arc<dyn FetchObserver>,
}

impl DocumentLinkExtractor {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            observer: Arc::new(NoopObserver),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn FetchObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn extract_links(&self, html: &str) -> Vec<String> {
        let document = Html::parse_document(html);
        let mut seen = HashSet::new();

        let links: Vec<String> = document
            .select(&HREF_SELECTOR)
            .filter_map(|a| a.value().attr("href"))
            .filter_map(|href| resolve_url(&self.base_url, href).ok())
            .filter(|url| path_has_extension(url, DOCUMENT_EXTENSION))
            .map(String::from)
            .filter(|url| seen.insert(url.clone()))
            .collect();

        self.observer
            .on_event(&FetchEvent::LinksLocated { count: links.len() });
        links
    }
}
