// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 处理抓取器的运行参数，包括站点地址、保存目录、重试与节流设置
pub mod settings;

pub use settings::ScraperConfiguration;
