// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用用例模块
///
/// 搜索、详情页抓取与文档下载的编排
pub mod fetch_documents;
