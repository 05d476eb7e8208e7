// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::domain::models::business_record::BusinessRecord;
use crate::domain::services::observer::{FetchEvent, FetchObserver, NoopObserver};
use crate::utils::url_utils::resolve_url;

static TABLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("table").expect("valid table selector"));
static ROW_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("tr").expect("valid row selector"));
static CELL_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("td").expect("valid cell selector"));
static LINK_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a").expect("valid link selector"));

// The registry's markup is not stable; match loosely on purpose.
static RESULT_CLASS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)result").expect("valid class pattern"));
static SEARCH_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)search").expect("valid id pattern"));

const MIN_CELLS: usize = 3;

/// 搜索结果提取器
///
/// 把搜索结果页解析为企业记录序列。解析永不失败：
/// 结构不符合预期时返回空序列，仅在找不到结果表格时发出警告事件。
pub struct ResultExtractor {
    base_url: Url,
    observer: Arc<dyn FetchObserver>,
}

impl ResultExtractor {
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

    /// 提取企业记录
    ///
    /// 1. 优先选择 class 含 "result" 的表格，否则选择 id 含 "search" 的表格
    /// 2. 跳过首行（表头）
    /// 3. 少于 3 个单元格的行、首个单元格没有链接的行都被丢弃；
    ///    链接没有文本（如只含图片）时名称为空字符串，记录照常保留
    pub fn extract_records(&self, html: &str) -> Vec<BusinessRecord> {
        let document = Html::parse_document(html);

        let Some(table) = locate_results_table(&document) else {
            self.observer.on_event(&FetchEvent::ResultsTableMissing);
            return Vec::new();
        };

        let records: Vec<BusinessRecord> = table
            .select(&ROW_SELECTOR)
            .skip(1)
            .filter_map(|row| self.record_from_row(row))
            .collect();

        self.observer.on_event(&FetchEvent::RecordsFound {
            count: records.len(),
        });
        records
    }

    fn record_from_row(&self, row: ElementRef<'_>) -> Option<BusinessRecord> {
        let cells: Vec<ElementRef<'_>> = row.select(&CELL_SELECTOR).collect();
        if cells.len() < MIN_CELLS {
            return None;
        }

        let link = cells[0].select(&LINK_SELECTOR).next()?;
        let entity_name = element_text(link);
        let href = link.value().attr("href").unwrap_or_default();
        let detail_link = resolve_url(&self.base_url, href).ok()?;
        let cell_text = |index: usize| cells.get(index).map(|c| element_text(*c)).unwrap_or_default();

        Some(BusinessRecord::new(
            entity_name,
            cell_text(1),
            cell_text(2),
            cell_text(3),
            detail_link.to_string(),
        ))
    }
}

fn locate_results_table(document: &Html) -> Option<ElementRef<'_>> {
    let by_attr = |attr: &str, pattern: &Regex| {
        document.select(&TABLE_SELECTOR).find(|table| {
            table
                .value()
                .attr(attr)
                .is_some_and(|value| pattern.is_match(value))
        })
    };

    by_attr("class", &RESULT_CLASS_PATTERN).or_else(|| by_attr("id", &SEARCH_ID_PATTERN))
}

/// 元素的可见文本，合并空白并去除首尾空白
fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
