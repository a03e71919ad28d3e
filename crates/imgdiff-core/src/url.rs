//! URL 拼接
//!
//! 统一采用 path-join 语义：基址末尾与片段开头的 `/` 合并为恰好一个分隔符，
//! A、B 两侧使用同一规则。

/// 拼接基址与片段，保证两者之间恰好一个 `/`
pub fn join_url(base: &str, fragment: &str) -> String {
    let base = base.trim_end_matches('/');
    let fragment = fragment.trim_start_matches('/');
    let mut out = String::with_capacity(base.len() + fragment.len() + 1);
    out.push_str(base);
    out.push('/');
    out.push_str(fragment);
    out
}

#[cfg(test)]
mod tests {
    use super::join_url;
    use test_case::test_case;

    #[test_case("http://x/", "a.jpg?x=1" ; "base with slash")]
    #[test_case("http://x", "a.jpg?x=1" ; "bare base")]
    #[test_case("http://x/", "/a.jpg?x=1" ; "both with slash")]
    #[test_case("http://x", "/a.jpg?x=1" ; "fragment with slash")]
    fn joins_with_exactly_one_separator(base: &str, fragment: &str) {
        assert_eq!(join_url(base, fragment), "http://x/a.jpg?x=1");
    }

    #[test]
    fn keeps_bucket_path() {
        assert_eq!(join_url("https://cdn.example.com/bucket/", "example.jpg"), "https://cdn.example.com/bucket/example.jpg");
    }

    #[test]
    fn query_slashes_are_untouched() {
        let frag = "example.jpg?x-oss-process=image/crop,w_100,h_100/rounded-corners,r_10/format,png";
        assert_eq!(join_url("http://x/", frag), format!("http://x/{frag}"));
    }

    #[test]
    fn empty_fragment_leaves_single_trailing_slash() {
        assert_eq!(join_url("http://x//", ""), "http://x/");
    }
}
