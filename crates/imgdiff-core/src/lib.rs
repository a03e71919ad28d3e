//! 图片处理对比页生成库
//!
//! 设计要点：
//! - 片段（路径 + 处理参数）按顺序生成表格行，行号从 0 开始。
//! - A、B 两侧使用同一个 `join_url`，两侧 URL 只在基址上不同。
//! - 端点 B 必须显式给出，缺失时在任何文件 I/O 之前报错。
//! - 配置一律通过参数传入，本库不读取环境变量。

mod error;
mod options;
mod fragments;
mod process;
mod url;
mod html;
mod report;

pub use error::ReportError;
pub use options::{Endpoints, ReportOptions, ReportStats, DEFAULT_BASE_A, DEFAULT_OUTPUT};
pub use fragments::{builtin_fragments, load_fragments, resolve_fragments, Fragment};
pub use process::{process_chain, unknown_actions, ProcessAction, ProcessChain, KNOWN_IMAGE_ACTIONS};
pub use url::join_url;
pub use html::{render_report, render_row, Row};
pub use report::{build_rows, generate_and_write, generate_report, write_report};
