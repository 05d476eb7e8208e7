// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::fmt::Write as _;

use crate::domain::models::fetch_outcome::FetchOutcome;

/// 成功退出码
pub const EXIT_OK: i32 = 0;
/// 记录到任何错误时的退出码
pub const EXIT_ERRORS: i32 = 1;
/// 用户中断（Ctrl-C）时的退出码
pub const EXIT_INTERRUPTED: i32 = 130;

const RULE_WIDTH: usize = 60;

/// 渲染人类可读的运行摘要
///
/// "没有结果" 与 "搜索失败" 的输出不同：前者额外打印一行提示，
/// 后者列出错误。
pub fn render_summary(outcome: &FetchOutcome) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "DOCUMENT FETCH RESULTS");
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "Search Query:        {}", outcome.search_query);
    let _ = writeln!(out, "Businesses Found:    {}", outcome.businesses_found);
    let _ = writeln!(out, "Documents Downloaded: {}", outcome.documents_downloaded());

    if !outcome.has_errors() && outcome.businesses_found == 0 {
        let _ = writeln!(out, "\nNo matching businesses were found.");
    }

    if !outcome.downloaded_files().is_empty() {
        let _ = writeln!(out, "\nDownloaded Files:");
        for path in outcome.downloaded_files() {
            let _ = writeln!(out, "  - {}", path.display());
        }
    }

    if outcome.has_errors() {
        let _ = writeln!(out, "\nErrors Encountered:");
        for error in &outcome.errors {
            let _ = writeln!(out, "  ! {}", error);
        }
    }

    let _ = writeln!(out, "{}", rule);
    out
}

/// 根据结果计算进程退出码
pub fn exit_code(outcome: &FetchOutcome) -> i32 {
    if outcome.has_errors() {
        EXIT_ERRORS
    } else {
        EXIT_OK
    }
}
