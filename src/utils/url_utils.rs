// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use url::{ParseError, Url};

/// 将可能为相对路径的URL转换为绝对路径URL
pub fn resolve_url(base_url: &Url, path: &str) -> Result<Url, ParseError> {
    base_url.join(path.trim())
}

/// 构造搜索结果页 URL：`base + endpoint ? param=term`
pub fn build_search_url(
    base_url: &Url,
    endpoint: &str,
    param: &str,
    term: &str,
) -> Result<Url, ParseError> {
    let mut url = resolve_url(base_url, endpoint)?;
    url.query_pairs_mut().clear().append_pair(param, term);
    Ok(url)
}

/// URL 路径（不含查询串与片段）是否以指定扩展名结尾，忽略大小写
pub fn path_has_extension(url: &Url, extension: &str) -> bool {
    let suffix = format!(".{}", extension.to_ascii_lowercase());
    url.path().to_ascii_lowercase().ends_with(&suffix)
}
