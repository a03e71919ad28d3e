//! 处理链解析（`x-oss-process=image/<action>,<p1>,<p2>/...`）
//!
//! 仅用于生成前的检查：未知动作只告警、计数，不影响渲染。
use percent_encoding::percent_decode_str;
use regex::Regex;
use std::sync::OnceLock;

/// 图片处理器支持的动作名
pub const KNOWN_IMAGE_ACTIONS: &[&str] = &[
    "resize",
    "quality",
    "bright",
    "format",
    "blur",
    "rotate",
    "contrast",
    "sharpen",
    "interlace",
    "auto-orient",
    "grey",
    "crop",
    "circle",
    "indexcrop",
    "rounded-corners",
    "watermark",
    "info",
];

/// 处理链中的单个动作；`params` 为名称之后按 `,` 切分的原始字段（含空字段）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessAction {
    pub name: String,
    pub params: Vec<String>,
}

/// 解析后的处理链
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessChain {
    /// 处理器名（目前仅 `image`）
    pub processor: String,
    pub actions: Vec<ProcessAction>,
}

fn process_param_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?:^|[?&])x-oss-process=([^&#]*)").ok()).as_ref()
}

/// 按查询串规则解码参数值（`+` 视为空格，再做百分号解码）
fn decode_query_value(raw: &str) -> String {
    let plus_as_space = raw.replace('+', " ");
    percent_decode_str(&plus_as_space).decode_utf8_lossy().into_owned()
}

/// 从片段中提取并拆分处理链；没有 `x-oss-process` 参数时返回 None
/// - 参数值先解码，`image%2Fresize,w_100` 与 `image/resize,w_100` 等价
/// - 空动作（如末尾的 `/`）跳过；动作内的空参数保留，与处理器的 `split(',')` 一致
pub fn process_chain(fragment: &str) -> Option<ProcessChain> {
    let query = fragment.split_once('?').map(|(_, q)| q)?;
    let raw = process_param_regex()?.captures(query)?.get(1)?.as_str();
    let value = decode_query_value(raw);

    let mut parts = value.split('/');
    let processor = parts.next().unwrap_or_default().to_string();
    let actions = parts
        .filter(|a| !a.is_empty())
        .map(|a| {
            let mut fields = a.split(',');
            let name = fields.next().unwrap_or_default().to_string();
            let params = fields.map(str::to_string).collect();
            ProcessAction { name, params }
        })
        .collect();

    Some(ProcessChain { processor, actions })
}

/// 返回链中不被支持的动作名（处理器不是 `image` 时整条链都视为未知）
pub fn unknown_actions(chain: &ProcessChain) -> Vec<&str> {
    if chain.processor != "image" {
        return vec![chain.processor.as_str()];
    }
    chain
        .actions
        .iter()
        .map(|a| a.name.as_str())
        .filter(|n| !KNOWN_IMAGE_ACTIONS.contains(n))
        .collect()
}
