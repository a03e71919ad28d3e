//! 端点配置、生成选项与统计信息（模块）
use std::path::PathBuf;

use crate::error::ReportError;

/// 端点 A 的默认值（演示用 OSS bucket）
pub const DEFAULT_BASE_A: &str = "https://image-demo-oss-zhangjiakou.oss-cn-zhangjiakou.aliyuncs.com/";

/// 默认输出文件名（相对当前工作目录）
pub const DEFAULT_OUTPUT: &str = "index.html";

/// 对比的两个端点（A / B）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub base_a: String,
    pub base_b: String,
}

impl Endpoints {
    /// 由外部传入的可选值解析端点
    /// - 两侧的首尾空白均被去除
    /// - A 为空或缺失时使用 `DEFAULT_BASE_A`
    /// - B 为空或缺失时直接报错，不做任何文件 I/O
    pub fn resolve(a: Option<String>, b: Option<String>) -> Result<Self, ReportError> {
        let base_a = non_blank(a).unwrap_or_else(|| DEFAULT_BASE_A.to_string());
        let base_b = non_blank(b).ok_or(ReportError::MissingConfiguration { name: "B" })?;
        Ok(Self { base_a, base_b })
    }
}

fn non_blank(v: Option<String>) -> Option<String> {
    v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// 生成选项
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub endpoints: Endpoints,
    /// 片段文件路径（TOML）；为空则使用内置列表
    pub fragments_path: Option<PathBuf>,
    /// 输出文件路径，已存在则覆盖
    pub output: PathBuf,
}

impl ReportOptions {
    pub fn new(endpoints: Endpoints) -> Self {
        Self { endpoints, fragments_path: None, output: PathBuf::from(DEFAULT_OUTPUT) }
    }
}

/// 生成统计信息（便于 CLI 打印）
#[derive(Debug, Default, Clone)]
pub struct ReportStats {
    pub rows_written: usize,
    pub bytes_written: u64,
    pub unknown_actions: usize,
    pub output: PathBuf,
}
