use serde::Serialize;

use crate::utility::str::CharType;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "type", content = "content")]
pub enum RhymeLineToken {
    RhymeMarker(char), // a..w (x を除く)
    Chinese(char),
    String(String), // その他の文字の並び
}

// 字句解析
pub fn tokenize_phrase(phrase: &str) -> Vec<RhymeLineToken> {
    let mut tokens = Vec::new();

    let mut string_buffer = String::new();

    for c in phrase.chars() {
        let token = match CharType::from(c) {
            CharType::RhymeMarker => RhymeLineToken::RhymeMarker(c),
            CharType::Chinese => RhymeLineToken::Chinese(c),
            CharType::Other => {
                string_buffer.push(c);
                continue;
            }
        };

        if !string_buffer.is_empty() {
            tokens.push(RhymeLineToken::String(string_buffer));
            string_buffer = String::new();
        }

        tokens.push(token);
    }

    if !string_buffer.is_empty() {
        tokens.push(RhymeLineToken::String(string_buffer));
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use RhymeLineToken::*;

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize_phrase("").is_empty());
    }

    #[test]
    fn test_tokenize_markers_and_chinese() {
        assert_eq!(
            tokenize_phrase("關關雎a鳩"),
            vec![
                Chinese('關'),
                Chinese('關'),
                Chinese('雎'),
                RhymeMarker('a'),
                Chinese('鳩'),
            ]
        );
    }

    #[test]
    fn test_tokenize_buffers_other_chars() {
        assert_eq!(
            tokenize_phrase("  a，。字x9"),
            vec![
                String("  ".to_owned()),
                RhymeMarker('a'),
                String("，。".to_owned()),
                Chinese('字'),
                String("x9".to_owned()),
            ]
        );
    }
}
