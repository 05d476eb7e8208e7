// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// - 企业记录（business_record）：搜索结果中的一行
/// - 运行结果（fetch_outcome）：一次运行的汇总
pub mod business_record;
pub mod fetch_outcome;
