// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// 默认日志过滤规则；`verbose` 时提升到 debug
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "debug,hyper=info,reqwest=info,html5ever=info,selectors=info"
    } else {
        "info,regdocs=info"
    }
}

/// 初始化全局 tracing 订阅者，仅由二进制入口调用
///
/// `RUST_LOG` 优先于默认规则
pub fn init_telemetry(verbose: bool) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(verbose).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
