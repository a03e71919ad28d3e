//! 错误类型（对外暴露）
use std::path::PathBuf;

/// 报告生成过程中的错误
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// 必需的端点未配置（例如环境变量 B 缺失或为空）
    #[error("missing configuration: base url `{name}` is not set")]
    MissingConfiguration { name: &'static str },

    /// 片段文件中没有任何可渲染的片段
    #[error("fragments file {path} contains no fragments")]
    NoFragments { path: PathBuf },

    /// 片段文件 TOML 解析失败
    #[error("failed to parse fragments file {path}")]
    Fragments {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// 读写文件失败
    #[error("i/o error on {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ReportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}
