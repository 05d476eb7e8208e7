// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 企业注册文档抓取库
//!
//! 给定搜索词，在注册处网站上定位匹配企业，跟随每个企业的详情页，
//! 发现文档链接并把文档保存到本地。

/// 应用程序模块
///
/// 包含编排整个抓取流程的用例
pub mod application;

/// 配置模块
///
/// 处理抓取器的运行参数和环境变量
pub mod config;

/// 领域模块
///
/// 包含核心实体、解析服务和仓库接口
pub mod domain;

/// 引擎模块
///
/// 实现带节流与重试的 HTTP 传输层
pub mod engines;

/// 基础设施模块
///
/// 提供本地文件存储
pub mod infrastructure;

/// 表示层模块
///
/// 渲染运行摘要与退出码
pub mod presentation;

/// 工具模块
///
/// 提供通用的工具函数和辅助功能
pub mod utils;
