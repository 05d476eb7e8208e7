// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含的服务：
/// - 结果提取（result_extractor）：搜索结果页 → 企业记录
/// - 链接提取（link_extractor）：详情页 → 文档链接
/// - 下载器（downloader）：获取文档并生成稳定的文件名
/// - 观察者（observer）：注入式的进度事件
pub mod downloader;
pub mod link_extractor;
pub mod observer;
pub mod result_extractor;
