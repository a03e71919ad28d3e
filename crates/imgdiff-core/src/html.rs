//! HTML 渲染：行结构与页面模板
use serde::Serialize;

/// 页面模板，`{body}` 处插入所有数据行
const TEMPLATE: &str = r#"
<!DOCTYPE html>
<html>

<body>
  <table border="1" width="100%">
    <thead>
      <tr>
        <td>NO.</td>
        <td>A</td>
        <td>B</td>
      </tr>
    </thead>
    <tbody>
    {body}
    </tbody>
  </table>
</body>

</html>
"#;

/// 对比表中的单行（由片段派生，不持久化）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub index: usize,
    pub group: String,
    pub fragment: String,
    pub url_a: String,
    pub url_b: String,
}

/// 转义属性值中的 HTML 特殊字符
fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

fn img_cell(url: &str) -> String {
    let url = escape_attr(url);
    format!(r#"  <td><img src="{url}" loading="lazy" alt="{url}"></td>"#)
}

/// 渲染单行
pub fn render_row(row: &Row) -> String {
    [
        "<tr>".to_string(),
        format!("  <td>{}</td>", row.index),
        img_cell(&row.url_a),
        img_cell(&row.url_b),
        "</tr>".to_string(),
    ]
    .join("\n")
}

/// 将所有行插入模板，得到完整页面
pub fn render_report(rows: &[Row]) -> String {
    let body = rows.iter().map(render_row).collect::<Vec<_>>().join("\n");
    TEMPLATE.replacen("{body}", &body, 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(index: usize, a: &str, b: &str) -> Row {
        Row { index, group: "g".into(), fragment: String::new(), url_a: a.into(), url_b: b.into() }
    }

    #[test]
    fn row_layout() {
        let got = render_row(&row(3, "http://x/a.jpg", "http://y/a.jpg"));
        let want = "<tr>\n  <td>3</td>\n  <td><img src=\"http://x/a.jpg\" loading=\"lazy\" alt=\"http://x/a.jpg\"></td>\n  <td><img src=\"http://y/a.jpg\" loading=\"lazy\" alt=\"http://y/a.jpg\"></td>\n</tr>";
        assert_eq!(got, want);
    }

    #[test]
    fn attributes_are_escaped() {
        let got = render_row(&row(0, "http://x/a.jpg?a=1&b=\"2\"", "http://y/<b>"));
        assert!(got.contains(r#"src="http://x/a.jpg?a=1&amp;b=&quot;2&quot;""#));
        assert!(got.contains(r#"alt="http://y/&lt;b&gt;""#));
    }

    #[test]
    fn header_present_with_no_rows() {
        let html = render_report(&[]);
        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains("<td>NO.</td>\n        <td>A</td>\n        <td>B</td>"));
        assert!(!html.contains("{body}"));
        assert_eq!(html.matches("<tr>").count(), 1);
    }
}
