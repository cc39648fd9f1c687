//! Small text-display helpers

/// Shorten `s` to at most `max_chars` characters by replacing the middle
/// with an ellipsis. Used for long paths in the status bar. Cuts are made
/// on char boundaries, never inside a multi-byte sequence.
pub fn ellipsize_middle(s: &str, max_chars: usize) -> String {
    let total = s.chars().count();
    if total <= max_chars {
        return s.to_owned();
    }
    if max_chars == 0 {
        return String::new();
    }

    let keep = max_chars - 1;
    let head = keep / 2 + keep % 2;
    let tail = keep / 2;

    let head_end = s
        .char_indices()
        .nth(head)
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    let tail_start = if tail == 0 {
        s.len()
    } else {
        s.char_indices()
            .rev()
            .nth(tail - 1)
            .map(|(i, _)| i)
            .unwrap_or(0)
    };

    format!("{}\u{2026}{}", &s[..head_end], &s[tail_start..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_strings_pass_through() {
        assert_eq!(ellipsize_middle("abc", 10), "abc");
        assert_eq!(ellipsize_middle("", 4), "");
        assert_eq!(ellipsize_middle("abcd", 4), "abcd");
    }

    #[test]
    fn long_strings_keep_head_and_tail() {
        let out = ellipsize_middle("/home/user/documents/letter.txt", 15);
        assert_eq!(out.chars().count(), 15);
        assert!(out.starts_with("/home/u"));
        assert!(out.ends_with("ter.txt"));
        assert!(out.contains('\u{2026}'));
    }

    #[test]
    fn multibyte_text_is_cut_on_char_boundaries() {
        // Each ideograph is 3 bytes; a byte-oriented cut would panic.
        let out = ellipsize_middle("文件夹里的一个很长的文件名", 7);
        assert_eq!(out.chars().count(), 7);
        assert_eq!(out, "文件夹\u{2026}文件名");
    }

    #[test]
    fn degenerate_widths() {
        assert_eq!(ellipsize_middle("abcdef", 0), "");
        assert_eq!(ellipsize_middle("abcdef", 1), "\u{2026}");
        assert_eq!(ellipsize_middle("abcdef", 2), "a\u{2026}");
    }
}
