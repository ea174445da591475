/// Truncate to at most `max` characters, keeping the tail and prefixing
/// "..." when anything was cut. Cuts on char boundaries so multi-byte
/// paths never split mid-character.
pub fn truncate_left(s: &str, max: usize) -> String {
    let len = s.chars().count();
    if len <= max {
        return s.to_string();
    }
    if max <= 3 {
        return ".".repeat(max);
    }

    let keep = max - 3;
    let start = s
        .char_indices()
        .nth(len - keep)
        .map(|(i, _)| i)
        .unwrap_or(0);
    format!("...{}", &s[start..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_strings_pass_through() {
        assert_eq!(truncate_left("abc", 10), "abc");
        assert_eq!(truncate_left("abc", 3), "abc");
        assert_eq!(truncate_left("", 0), "");
    }

    #[test]
    fn test_long_strings_keep_the_tail() {
        assert_eq!(truncate_left("/home/user/project", 10), "...project");
    }

    #[test]
    fn test_multibyte_paths_cut_on_char_boundary() {
        let path = "/säg/".to_string() + &"ö".repeat(20);
        let out = truncate_left(&path, 10);
        assert_eq!(out.chars().count(), 10);
        assert!(out.starts_with("..."));
        assert!(out.ends_with("ööööööö"));
    }

    #[test]
    fn test_tiny_width_degrades_to_dots() {
        assert_eq!(truncate_left("abcdef", 3), "...");
        assert_eq!(truncate_left("abcdef", 1), ".");
        assert_eq!(truncate_left("abcdef", 0), "");
    }
}
