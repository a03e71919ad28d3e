//! 报告生成主流程：片段 → 行 → 检查 → 渲染 → 写文件
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::error::ReportError;
use crate::fragments::{resolve_fragments, Fragment};
use crate::html::{render_report, Row};
use crate::options::{Endpoints, ReportOptions, ReportStats};
use crate::process::{process_chain, unknown_actions};
use crate::url::join_url;

/// 为每个片段构建一行；行号从 0 开始，顺序与输入一致
pub fn build_rows(fragments: &[Fragment], endpoints: &Endpoints) -> Vec<Row> {
    fragments
        .iter()
        .enumerate()
        .map(|(index, f)| Row {
            index,
            group: f.group.clone(),
            fragment: f.path.clone(),
            url_a: join_url(&endpoints.base_a, &f.path),
            url_b: join_url(&endpoints.base_b, &f.path),
        })
        .collect()
}

/// 生成完整的 HTML 页面
pub fn generate_report(fragments: &[Fragment], endpoints: &Endpoints) -> String {
    render_report(&build_rows(fragments, endpoints))
}

/// 检查每个片段的处理链，返回未知动作总数（仅告警）
fn check_fragments(fragments: &[Fragment]) -> usize {
    let mut unknown = 0;
    for (idx, f) in fragments.iter().enumerate() {
        match process_chain(&f.path) {
            Some(chain) => {
                let names = unknown_actions(&chain);
                if !names.is_empty() {
                    warn!(idx, fragment = %f.path, ?names, "unknown process actions");
                    unknown += names.len();
                }
            }
            None => debug!(idx, fragment = %f.path, "fragment has no x-oss-process parameter"),
        }
    }
    unknown
}

/// 将页面写入 `path`（覆盖已有文件），返回写入字节数
pub fn write_report(path: &Path, html: &str) -> Result<u64, ReportError> {
    let file = File::create(path).map_err(|e| ReportError::io(path, e))?;
    let mut out = BufWriter::new(file);
    out.write_all(html.as_bytes()).map_err(|e| ReportError::io(path, e))?;
    out.flush().map_err(|e| ReportError::io(path, e))?;
    Ok(html.len() as u64)
}

/// 按选项完成一次生成：加载片段、渲染并写出
pub fn generate_and_write(opts: &ReportOptions) -> Result<ReportStats, ReportError> {
    let fragments = resolve_fragments(opts.fragments_path.as_deref())?;
    info!(fragments = fragments.len(), base_a = %opts.endpoints.base_a, base_b = %opts.endpoints.base_b, "building report");

    let unknown_actions = check_fragments(&fragments);
    let rows = build_rows(&fragments, &opts.endpoints);
    let html = render_report(&rows);
    let bytes_written = write_report(&opts.output, &html)?;

    Ok(ReportStats { rows_written: rows.len(), bytes_written, unknown_actions, output: opts.output.clone() })
}
