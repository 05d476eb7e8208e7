// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 搜索结果中的一个企业实体
///
/// 由结果提取器从表格的一行构造；`pdf_documents` 只在详情页抓取成功后
/// 由流水线填充，其余字段构造后不再改变。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BusinessRecord {
    pub entity_name: String,
    pub sos_identifier: String,
    pub status_text: String,
    pub date_registered: String,
    pub detail_link: String,
    #[serde(default)]
    pub pdf_documents: Vec<String>,
}

impl BusinessRecord {
    pub fn new(
        entity_name: String,
        sos_identifier: String,
        status_text: String,
        date_registered: String,
        detail_link: String,
    ) -> Self {
        Self {
            entity_name,
            sos_identifier,
            status_text,
            date_registered,
            detail_link,
            pdf_documents: Vec::new(),
        }
    }
}
