//! Terminal character classes of the `addr-spec` grammar
//!
//! Every class is a subset of printable US-ASCII (plus SP and HTAB for
//! `ESCAPE`), so anything outside ASCII is rejected.

/// `ATEXT`: letters, digits and the printable specials allowed in atoms.
pub fn is_atext(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '!' | '#'
                | '$'
                | '%'
                | '&'
                | '\''
                | '*'
                | '+'
                | '-'
                | '/'
                | '='
                | '?'
                | '^'
                | '_'
                | '`'
                | '{'
                | '|'
                | '}'
                | '~'
        )
}

/// `DTEXT`: printable ASCII except `[`, `]` and `\`.
pub fn is_dtext(c: char) -> bool {
    matches!(c as u32, 33..=90 | 94..=126)
}

/// `QTEXT`: printable ASCII except `"` and `\`.
pub fn is_qtext(c: char) -> bool {
    matches!(c as u32, 33 | 35..=91 | 93..=126)
}

/// `ESCAPE`: anything that may follow a backslash in a quoted string
/// (`VCHAR / WSP`).
pub fn is_escape(c: char) -> bool {
    matches!(c as u32, 0x21..=0x7E | 0x20 | 0x09)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atext_excludes_specials() {
        for c in "()<>@[]:;\\,.\" ".chars() {
            assert!(!is_atext(c), "{c:?} must not be atext");
        }
        for c in "aZ09!#$%&'*+-/=?^_`{|}~".chars() {
            assert!(is_atext(c), "{c:?} must be atext");
        }
    }

    #[test]
    fn test_dtext_excludes_brackets_and_backslash() {
        assert!(!is_dtext('['));
        assert!(!is_dtext(']'));
        assert!(!is_dtext('\\'));
        assert!(!is_dtext(' '));
        assert!(is_dtext('1'));
        assert!(is_dtext('.'));
        assert!(is_dtext(':'));
        assert!(is_dtext('a'));
        assert!(is_dtext('~'));
    }

    #[test]
    fn test_qtext_excludes_quote_and_backslash() {
        assert!(!is_qtext('"'));
        assert!(!is_qtext('\\'));
        assert!(!is_qtext(' '));
        assert!(is_qtext('@'));
        assert!(is_qtext('!'));
    }

    #[test]
    fn test_escape_accepts_whitespace() {
        assert!(is_escape(' '));
        assert!(is_escape('\t'));
        assert!(is_escape('"'));
        assert!(!is_escape('\n'));
    }

    #[test]
    fn test_non_ascii_rejected() {
        for c in ['é', 'ü', '中', '\u{7f}'] {
            assert!(!is_atext(c));
            assert!(!is_dtext(c));
            assert!(!is_qtext(c));
            assert!(!is_escape(c));
        }
    }
}
