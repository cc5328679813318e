/// Replace backslash escapes in `text` with the control characters they name.
///
/// Recognized sequences are `\n`, `\t`, `\r`, `\\`, `\a`, `\b`, `\f` and `\v`.
/// Anything else is copied through untouched: an unknown escape such as `\x`
/// keeps both the backslash and the letter, and a lone backslash at the end
/// stays as it is.
pub fn decode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(decoded) = chars.peek().copied().and_then(control_char) {
                out.push(decoded);
                chars.next();
                continue;
            }
        }
        out.push(c);
    }

    out
}

fn control_char(code: char) -> Option<char> {
    match code {
        'n' => Some('\n'),
        't' => Some('\t'),
        'r' => Some('\r'),
        '\\' => Some('\\'),
        'a' => Some('\x07'),
        'b' => Some('\x08'),
        'f' => Some('\x0C'),
        'v' => Some('\x0B'),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::decode;

    #[test]
    fn test_decode_each_known_escape() {
        let cases = [
            (r"\n", "\n"),
            (r"\t", "\t"),
            (r"\r", "\r"),
            (r"\\", "\\"),
            (r"\a", "\x07"),
            (r"\b", "\x08"),
            (r"\f", "\x0C"),
            (r"\v", "\x0B"),
        ];
        for (input, expected) in cases {
            assert_eq!(decode(input), expected, "decoding {:?}", input);
        }
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode(""), "");
    }

    #[test]
    fn test_decode_leaves_plain_text_alone() {
        let text = "hello world\t日本語 !@#$%^&*()";
        assert_eq!(decode(text), text);
    }

    #[test]
    fn test_decode_unknown_escape_is_literal() {
        assert_eq!(decode(r"\xunknown"), r"\xunknown");
        assert_eq!(decode(r"a\qb"), r"a\qb");
    }

    #[test]
    fn test_decode_trailing_backslash_is_literal() {
        assert_eq!(decode("end\\"), "end\\");
        assert_eq!(decode("\\"), "\\");
    }

    #[test]
    fn test_decode_backslashes_pair_up() {
        for n in 0..8 {
            let input = "\\".repeat(2 * n);
            assert_eq!(decode(&input), "\\".repeat(n));
        }
        // odd run keeps exactly one extra literal backslash
        assert_eq!(decode(r"\\\"), r"\\");
        assert_eq!(decode(r"x\\\\\"), r"x\\\");
    }

    #[test]
    fn test_decode_escaped_backslash_does_not_start_new_escape() {
        // `\\n` is an escaped backslash followed by a plain `n`
        assert_eq!(decode(r"\\n"), r"\n");
        assert_eq!(decode(r"path\\to\\file"), r"path\to\file");
    }

    #[test]
    fn test_decode_mixed() {
        assert_eq!(
            decode(r"line1\nline2\ttab\\backslash"),
            "line1\nline2\ttab\\backslash"
        );
    }
}
