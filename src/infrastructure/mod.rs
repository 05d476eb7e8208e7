// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 存储（storage）：领域存储接口的本地文件系统实现
pub mod storage;
