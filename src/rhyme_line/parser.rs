use serde::Serialize;

use crate::rhyme_line::tokenizer::{tokenize_phrase, RhymeLineToken};

// 底本の変換で使われているフレーズ区切り（全角の読点にあたる）
pub static PHRASE_DELIMITER: &str = "ã€";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedPhrase {
    pub text: String,                     // 元のフレーズ
    pub characters: Vec<char>,            // 漢字のみ
    pub rhyme_words: Vec<char>,           // 韻字
    pub rhyme_word_positions: Vec<usize>, // characters 中の位置 (1 始まり)
    pub rhyme_classes: Vec<char>,         // 韻の分類記号
}

// 直前の分類記号を 1 つだけ覚えておく
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PendingRhymeMarker {
    Unset,
    Pending(char),
}

#[derive(Debug)]
struct PhraseScanner {
    pending: PendingRhymeMarker,
    characters: Vec<char>,
    rhymes: Vec<(usize, char)>, // (position, class)
}

impl PhraseScanner {
    fn new() -> Self {
        Self {
            pending: PendingRhymeMarker::Unset,
            characters: Vec::new(),
            rhymes: Vec::new(),
        }
    }

    fn feed(&mut self, token: &RhymeLineToken) {
        match token {
            // 後から来た記号で上書きする
            RhymeLineToken::RhymeMarker(marker) => {
                self.pending = PendingRhymeMarker::Pending(*marker);
            }

            RhymeLineToken::Chinese(c) => {
                self.characters.push(*c);
                if let PendingRhymeMarker::Pending(marker) = self.pending {
                    self.rhymes.push((self.characters.len(), marker));
                    self.pending = PendingRhymeMarker::Unset;
                }
            }

            RhymeLineToken::String(_) => {}
        }
    }

    fn finish(self, text: &str) -> ParsedPhrase {
        // 残った記号は捨てる
        let rhyme_words = self
            .rhymes
            .iter()
            .map(|&(position, _)| self.characters[position - 1])
            .collect();
        let rhyme_word_positions = self.rhymes.iter().map(|&(position, _)| position).collect();
        let rhyme_classes = self.rhymes.iter().map(|&(_, class)| class).collect();

        ParsedPhrase {
            text: text.to_owned(),
            characters: self.characters,
            rhyme_words,
            rhyme_word_positions,
            rhyme_classes,
        }
    }
}

pub fn parse_phrase(phrase: &str) -> ParsedPhrase {
    let mut scanner = PhraseScanner::new();
    for token in tokenize_phrase(phrase) {
        scanner.feed(&token);
    }
    scanner.finish(phrase)
}

pub fn parse_line(line: &str) -> Vec<ParsedPhrase> {
    parse_line_with_delimiter(line, PHRASE_DELIMITER)
}

// 空行も 1 つの空フレーズになる
pub fn parse_line_with_delimiter(line: &str, delimiter: &str) -> Vec<ParsedPhrase> {
    if delimiter.is_empty() {
        return vec![parse_phrase(line)];
    }

    line.split(delimiter).map(parse_phrase).collect()
}
