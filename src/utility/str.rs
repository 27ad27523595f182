// 押韻注記付きテキストに向けた文字種別
// 韻の分類はアルファベット小文字 (a..w, x を除く) で，対象の漢字の直前に置かれる

// 漢字とみなす範囲 (両端を含む)
// 3 番目は 1 文字だけ（U+F900..U+FAFF ではない）
pub static CHINESE_CODEPOINT_RANGES: [(u32, u32); 4] = [
    (0x3400, 0x9fff),
    (0x20000, 0x2ceaf),
    (0xf900, 0xf900),
    (0x2f800, 0x2fa1f),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharType {
    RhymeMarker,
    Chinese,
    Other,
}

impl CharType {
    pub fn from(c: char) -> Self {
        if is_rhyme_marker(c) {
            Self::RhymeMarker
        } else if is_chinese_char(c) {
            Self::Chinese
        } else {
            Self::Other
        }
    }
}

pub fn is_rhyme_marker(c: char) -> bool {
    ('a'..='w').contains(&c) && c != 'x'
}

pub fn is_chinese_char(c: char) -> bool {
    let u = c as u32;
    CHINESE_CODEPOINT_RANGES
        .iter()
        .any(|&(low, high)| low <= u && u <= high)
}

/// Empty strings are never Chinese; otherwise every char has to be.
pub fn is_chinese(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_chinese_char)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_u32(u: u32) -> char {
        char::from_u32(u).unwrap()
    }

    #[test]
    fn test_range_boundaries() {
        for u in [0x3400, 0x9fff, 0x20000, 0x2ceaf, 0xf900, 0x2f800, 0x2fa1f] {
            assert!(is_chinese_char(from_u32(u)), "U+{:X}", u);
        }

        for u in [
            0x33ff, 0xa000, 0x1ffff, 0x2ceb0, 0xf8ff, 0xf901, 0x2f7ff, 0x2fa20,
        ] {
            assert!(!is_chinese_char(from_u32(u)), "U+{:X}", u);
        }
    }

    #[test]
    fn test_compatibility_block_is_not_widened() {
        // U+F901..U+FAFF は対象外
        assert!(!is_chinese_char('\u{f902}'));
        assert!(!is_chinese_char('\u{faff}'));
    }

    #[test]
    fn test_is_chinese() {
        assert!(!is_chinese(""));
        assert!(is_chinese("字"));
        assert!(is_chinese("關雎"));
        assert!(!is_chinese("a"));
        assert!(!is_chinese("字a"));
        assert!(!is_chinese("、"));
    }

    #[test]
    fn test_rhyme_marker() {
        assert!(is_rhyme_marker('a'));
        assert!(is_rhyme_marker('w'));
        assert!(!is_rhyme_marker('x'));
        assert!(!is_rhyme_marker('y'));
        assert!(!is_rhyme_marker('z'));
        assert!(!is_rhyme_marker('A'));
        assert!(!is_rhyme_marker('1'));
    }

    #[test]
    fn test_char_type() {
        assert_eq!(CharType::from('b'), CharType::RhymeMarker);
        assert_eq!(CharType::from('鳩'), CharType::Chinese);
        assert_eq!(CharType::from('x'), CharType::Other);
        assert_eq!(CharType::from('，'), CharType::Other);
        assert_eq!(CharType::from(' '), CharType::Other);
    }
}
