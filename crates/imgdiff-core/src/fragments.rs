//! 片段列表：内置列表 + TOML 文件加载
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ReportError;

/// 单个片段：相对路径 + 图片处理参数（例如 `example.jpg?x-oss-process=image/resize,w_100`）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fragment {
    /// 分组名（仅用于列表与日志，不影响渲染）
    pub group: String,
    pub path: String,
}

impl Fragment {
    pub fn new(group: impl Into<String>, path: impl Into<String>) -> Self {
        Self { group: group.into(), path: path.into() }
    }
}

/// 内置片段（按分组、保持原有顺序）
const BUILTIN: &[(&str, &[&str])] = &[
    ("resize", &[
        "example.jpg?x-oss-process=image/resize,w_100",
        "example.jpg?x-oss-process=image/resize,h_50",
        "example.jpg?x-oss-process=image/resize,w_100,m_lfit",
        "example.jpg?x-oss-process=image/resize,w_100,m_mfit",
        "example.jpg?x-oss-process=image/resize,w_100,h_67,m_fill",
        "example.jpg?x-oss-process=image/resize,w_100,m_pad",
        "example.jpg?x-oss-process=image/resize,h_100,w_100,m_fixed",
        "example.jpg?x-oss-process=image/resize,h_100,m_lfit",
        "example.jpg?x-oss-process=image/resize,l_100",
        "example.jpg?x-oss-process=image/resize,m_fixed,h_100,w_100",
        "example.jpg?x-oss-process=image/resize,m_fill,h_100,w_100",
        "example.jpg?x-oss-process=image/resize,m_pad,h_100,w_100,color_FF0000",
        "example.jpg?x-oss-process=image/resize,p_50",
    ]),
    ("circle", &[
        "example.jpg?x-oss-process=image/circle,r_100",
    ]),
    ("crop", &[
        "example.jpg?x-oss-process=image/crop,x_100,y_50",
        "example.jpg?x-oss-process=image/crop,x_100,y_50,w_100,h_100",
        "example.jpg?x-oss-process=image/crop,x_10,y_10,w_200,h_200,g_se",
    ]),
    ("indexcrop", &[
        "example.jpg?x-oss-process=image/indexcrop,x_100,i_0",
    ]),
    ("rounded-corners", &[
        "example.jpg?x-oss-process=image/rounded-corners,r_30",
        "example.jpg?x-oss-process=image/crop,w_100,h_100/rounded-corners,r_10/format,png",
    ]),
    ("rotate", &[
        "example.jpg?x-oss-process=image/rotate,70",
    ]),
    ("blur", &[
        "example.jpg?x-oss-process=image/blur,r_3,s_2",
    ]),
    ("bright", &[
        "example.jpg?x-oss-process=image/bright,50",
        "example.jpg?x-oss-process=image/bright,-50",
    ]),
    ("sharpen", &[
        "example.jpg?x-oss-process=image/sharpen,100",
    ]),
    ("contrast", &[
        "example.jpg?x-oss-process=image/contrast,-50",
        "example.jpg?x-oss-process=image/contrast,50",
    ]),
    ("quality", &[
        "example.jpg?x-oss-process=image/resize,w_100/quality,q_30",
        "example.jpg?x-oss-process=image/resize,w_100/quality,Q_30",
    ]),
    ("interlace", &[
        "example.jpg?x-oss-process=image/resize,w_200/interlace,1",
    ]),
    ("watermark", &[
        "example.jpg?x-oss-process=image/watermark,text_SGVsbG8gV29ybGQ",
        "example.jpg?x-oss-process=image/watermark,text_SGVsbG8gV29ybGQ,g_nw",
        "example.jpg?x-oss-process=image/watermark,text_SGVsbG8gV29ybGQ,g_north",
        "example.jpg?x-oss-process=image/watermark,text_SGVsbG8gV29ybGQ,g_ne",
        "example.jpg?x-oss-process=image/watermark,text_SGVsbG8gV29ybGQ,g_west",
        "example.jpg?x-oss-process=image/watermark,text_SGVsbG8gV29ybGQ,g_center",
        "example.jpg?x-oss-process=image/watermark,text_SGVsbG8gV29ybGQ,g_east",
        "example.jpg?x-oss-process=image/watermark,text_SGVsbG8gV29ybGQ,g_sw",
        "example.jpg?x-oss-process=image/watermark,text_SGVsbG8gV29ybGQ,g_south",
        "example.jpg?x-oss-process=image/watermark,text_SGVsbG8gV29ybGQ,g_se",
        "example.jpg?x-oss-process=image/watermark,text_SGVsbG8gV29ybGQ,size_100,color_FFFFFF,shadow_0",
        "example.jpg?x-oss-process=image/watermark,text_SGVsbG8gV29ybGQ,size_100,color_FFFFFF,shadow_50",
        "example.jpg?x-oss-process=image/watermark,text_SGVsbG8gV29ybGQ,size_100,color_FFFFFF,shadow_100",
        "example.jpg?x-oss-process=image/watermark,text_SGVsbG8gV29ybGQ,size_30",
        "example.jpg?x-oss-process=image/watermark,text_SGVsbG8gV29ybGQ,size_500",
        "example.jpg?x-oss-process=image/watermark,text_SGVsbG8gV29ybGQ,size_1000",
        "example.jpg?x-oss-process=image/watermark,text_SGVsbG8gV29ybGQ,rotate_45",
        "example.jpg?x-oss-process=image/watermark,text_SGVsbG8gV29ybGQ,rotate_90",
        "example.jpg?x-oss-process=image/watermark,text_SGVsbG8gV29ybGQ,rotate_180",
        "example.jpg?x-oss-process=image/watermark,text_SGVsbG8gV29ybGQ,fill_1",
        "example.jpg?x-oss-process=image/watermark,text_SGVsbG8gV29ybGQ,fill_0",
        "example.jpg?x-oss-process=image/quality,q_70/watermark,text_4paI4paI4paI4paI,g_se,x_0,y_0,size_24,shadow_0,color_3E3E3E/watermark,text_5Yqo5Zu-,g_se,x_6,y_4,size_24,shadow_0,color_FFFFFF/resize,w_490",
        "example.jpg?x-oss-process=image/watermark,text_SG9Zb0xBQkBXV1dXV1dXV1dXV1dXV1dXV1dXV1dXV1cyNA==,size_26,color_FFFFFF,shadow_50,t_70,g_se,x_37,y_77",
    ]),
];

/// 返回内置片段列表
pub fn builtin_fragments() -> Vec<Fragment> {
    BUILTIN
        .iter()
        .flat_map(|(group, paths)| paths.iter().map(move |p| Fragment::new(*group, *p)))
        .collect()
}

/// 单个分组的配置
#[derive(Debug, Clone, Deserialize)]
struct GroupEntry {
    pub name: String,
    #[serde(default)]
    pub fragments: Vec<String>,
}

/// 顶层片段文件结构
#[derive(Debug, Clone, Deserialize)]
struct FragmentFile {
    #[serde(default)]
    pub groups: Vec<GroupEntry>,
}

/// 从 TOML 片段文件加载并展开为有序列表
/// - 分组与片段均保持文件中的顺序
/// - 空白片段跳过；全部为空则报错
pub fn load_fragments(path: &Path) -> Result<Vec<Fragment>, ReportError> {
    let txt = std::fs::read_to_string(path).map_err(|e| ReportError::io(path, e))?;
    let parsed: FragmentFile = toml::from_str(&txt)
        .map_err(|source| ReportError::Fragments { path: path.to_path_buf(), source })?;

    let mut out = Vec::new();
    for g in parsed.groups {
        for f in g.fragments {
            if f.trim().is_empty() { continue; }
            out.push(Fragment::new(g.name.clone(), f));
        }
    }

    if out.is_empty() {
        return Err(ReportError::NoFragments { path: path.to_path_buf() });
    }
    Ok(out)
}

/// 解析片段来源：指定文件优先，否则使用内置列表
pub fn resolve_fragments(path: Option<&Path>) -> Result<Vec<Fragment>, ReportError> {
    match path {
        Some(p) => load_fragments(p),
        None => Ok(builtin_fragments()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_tmp(contents: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f
    }

    #[test]
    fn builtin_list_keeps_original_order() {
        let all = builtin_fragments();
        assert_eq!(all.len(), 53);
        assert_eq!(all[0].path, "example.jpg?x-oss-process=image/resize,w_100");
        assert_eq!(all[0].group, "resize");
        assert_eq!(all[13].group, "circle");
        assert!(all.last().unwrap().path.ends_with("x_37,y_77"));
        assert!(all.iter().all(|f| f.path.starts_with("example.jpg?x-oss-process=image/")));
    }

    #[test]
    fn loads_groups_in_file_order() {
        let f = write_tmp(
            r#"
[[groups]]
name = "crop"
fragments = ["b.jpg?x-oss-process=image/crop,x_1", "  "]

[[groups]]
name = "resize"
fragments = ["a.jpg?x-oss-process=image/resize,w_1"]
"#,
        );
        let frags = load_fragments(f.path()).unwrap();
        assert_eq!(
            frags,
            vec![
                Fragment::new("crop", "b.jpg?x-oss-process=image/crop,x_1"),
                Fragment::new("resize", "a.jpg?x-oss-process=image/resize,w_1"),
            ]
        );
    }

    #[test]
    fn empty_file_is_rejected() {
        let f = write_tmp("[[groups]]\nname = \"empty\"\n");
        let err = load_fragments(f.path()).unwrap_err();
        assert!(matches!(err, ReportError::NoFragments { .. }));
    }

    #[test]
    fn malformed_file_reports_path() {
        let f = write_tmp("[[groups]\nname = ");
        let err = load_fragments(f.path()).unwrap_err();
        match err {
            ReportError::Fragments { path, .. } => assert_eq!(path, f.path()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_fragments(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ReportError::Io { .. }));
    }

    #[test]
    fn resolve_without_path_uses_builtin() {
        assert_eq!(resolve_fragments(None).unwrap(), builtin_fragments());
    }
}
