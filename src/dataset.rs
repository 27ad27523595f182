// 押韻注記付きテキストから表形式のデータセットを組み立てる
//
// - languages.csv: 言語 (古漢語のみ)
// - poems.csv: 詩
// - examples.csv: フレーズ 1 つにつき 1 行
// - entries.csv: 韻字 1 つにつき 1 行 (初出順)

pub mod metadata;
pub mod writer;

use std::{collections::HashMap, fmt};

use serde::Serialize;

use crate::{
    corpus::{Corpus, Poem},
    rhyme_line::parser::parse_line_with_delimiter,
};

pub static LANGUAGE_ID: &str = "OldChinese";
pub static LANGUAGE_NAME: &str = "Old Chinese";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    pub id: String,
    pub name: String,
    pub glottocode: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoemRecord {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Example {
    pub id: usize,
    pub language_id: String,
    pub primary_text: String,
    pub analyzed_word: Vec<char>,
    pub gloss: String,
    pub poem_id: String,
    pub entry_ids: Vec<usize>,
    pub stanza_number: usize,
    pub line_number: usize,   // 章の中で 1 始まり
    pub phrase_number: usize, // 行の中で 1 始まり
    pub rhyme_words: Vec<char>,
    pub rhyme_word_indices: Vec<usize>,
    pub rhyme_ids: Vec<String>, // "<詩 ID>-<章>-<分類>"
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: usize,
    pub language_id: String,
    pub headword: char,
    pub middle_chinese: String,
    pub ocbs: String,
    pub example_ids: Vec<usize>,
}

#[derive(Debug, Serialize)]
pub struct Dataset {
    pub languages: Vec<Language>,
    pub poems: Vec<PoemRecord>,
    pub examples: Vec<Example>,
    pub entries: Vec<Entry>,
    pub summary: DatasetSummary,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetSummary {
    pub poems: usize,
    pub stanzas: usize,
    pub lines: usize,
    pub phrases: usize,
    pub rhyme_words: usize,
    pub entries: usize,
}

impl fmt::Display for DatasetSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} poems, {} stanzas, {} lines, {} phrases, {} rhyme words, {} entries",
            self.poems, self.stanzas, self.lines, self.phrases, self.rhyme_words, self.entries
        )
    }
}

pub struct DatasetBuilder<'a> {
    delimiter: &'a str,
    poems: Vec<PoemRecord>,
    examples: Vec<Example>,
    entries: Vec<Entry>,
    entry_indices: HashMap<char, usize>,
    summary: DatasetSummary,
}

impl<'a> DatasetBuilder<'a> {
    pub fn new(delimiter: &'a str) -> Self {
        Self {
            delimiter,
            poems: Vec::new(),
            examples: Vec::new(),
            entries: Vec::new(),
            entry_indices: HashMap::new(),
            summary: DatasetSummary::default(),
        }
    }

    pub fn add_poem(&mut self, poem: &Poem) {
        self.poems.push(PoemRecord {
            id: poem.id.clone(),
            title: poem.title.clone(),
        });
        self.summary.poems += 1;

        for stanza in &poem.stanzas {
            self.summary.stanzas += 1;

            for (i, line) in stanza.lines.iter().enumerate() {
                self.summary.lines += 1;

                for (j, phrase) in parse_line_with_delimiter(line, self.delimiter)
                    .into_iter()
                    .enumerate()
                {
                    let example_id = self.examples.len() + 1;

                    let entry_ids = phrase
                        .rhyme_words
                        .iter()
                        .map(|&word| self.add_occurrence(word, example_id))
                        .collect();

                    let rhyme_ids = phrase
                        .rhyme_classes
                        .iter()
                        .map(|class| format!("{}-{}-{}", poem.id, stanza.number, class))
                        .collect();

                    self.summary.phrases += 1;
                    self.summary.rhyme_words += phrase.rhyme_words.len();

                    self.examples.push(Example {
                        id: example_id,
                        language_id: LANGUAGE_ID.to_owned(),
                        primary_text: phrase.text,
                        analyzed_word: phrase.characters,
                        gloss: String::new(),
                        poem_id: poem.id.clone(),
                        entry_ids,
                        stanza_number: stanza.number,
                        line_number: i + 1,
                        phrase_number: j + 1,
                        rhyme_words: phrase.rhyme_words,
                        rhyme_word_indices: phrase.rhyme_word_positions,
                        rhyme_ids,
                    });
                }
            }
        }
    }

    // 韻字の出現を記録し，その見出しの ID を返す
    fn add_occurrence(&mut self, word: char, example_id: usize) -> usize {
        let index = match self.entry_indices.get(&word) {
            Some(&index) => index,
            None => {
                self.entries.push(Entry {
                    id: self.entries.len() + 1,
                    language_id: LANGUAGE_ID.to_owned(),
                    headword: word,
                    middle_chinese: String::new(),
                    ocbs: String::new(),
                    example_ids: Vec::new(),
                });
                self.entry_indices.insert(word, self.entries.len() - 1);
                self.entries.len() - 1
            }
        };

        let entry = &mut self.entries[index];
        entry.example_ids.push(example_id);
        entry.id
    }

    pub fn finish(self) -> Dataset {
        let mut summary = self.summary;
        summary.entries = self.entries.len();

        Dataset {
            languages: vec![Language {
                id: LANGUAGE_ID.to_owned(),
                name: LANGUAGE_NAME.to_owned(),
                glottocode: String::new(),
            }],
            poems: self.poems,
            examples: self.examples,
            entries: self.entries,
            summary,
        }
    }
}

pub fn build_dataset(corpus: &Corpus, delimiter: &str) -> Dataset {
    let mut builder = DatasetBuilder::new(delimiter);
    for poem in &corpus.poems {
        builder.add_poem(poem);
    }
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{corpus::parse_corpus, rhyme_line::parser::PHRASE_DELIMITER};

    #[test]
    fn test_build_dataset() -> anyhow::Result<()> {
        let txt = format!(
            "1. 關雎\n關關雎a鳩{d}在河之a洲\n窈窕淑女{d}君子好a逑\n\n參差荇b菜\n\n\n\n2. 葛覃\n葛之覃兮{d}施于中a谷\n",
            d = PHRASE_DELIMITER
        );
        let corpus = parse_corpus(&txt)?;
        let dataset = build_dataset(&corpus, PHRASE_DELIMITER);

        assert_eq!(dataset.languages.len(), 1);
        assert_eq!(dataset.languages[0].id, "OldChinese");

        assert_eq!(
            dataset.poems,
            vec![
                PoemRecord {
                    id: "1".to_owned(),
                    title: "關雎".to_owned()
                },
                PoemRecord {
                    id: "2".to_owned(),
                    title: "葛覃".to_owned()
                },
            ]
        );

        assert_eq!(dataset.examples.len(), 7);

        let example = &dataset.examples[1];
        assert_eq!(example.id, 2);
        assert_eq!(example.primary_text, "在河之a洲");
        assert_eq!(example.analyzed_word, vec!['在', '河', '之', '洲']);
        assert_eq!(example.poem_id, "1");
        assert_eq!(example.stanza_number, 1);
        assert_eq!(example.line_number, 1);
        assert_eq!(example.phrase_number, 2);
        assert_eq!(example.rhyme_words, vec!['洲']);
        assert_eq!(example.rhyme_word_indices, vec![4]);
        assert_eq!(example.rhyme_ids, vec!["1-1-a"]);
        assert_eq!(example.entry_ids, vec![2]);

        let example = &dataset.examples[2];
        assert_eq!(example.line_number, 2);
        assert_eq!(example.phrase_number, 1);
        assert!(example.rhyme_words.is_empty());
        assert!(example.entry_ids.is_empty());

        let example = &dataset.examples[4];
        assert_eq!(example.primary_text, "參差荇b菜");
        assert_eq!(example.stanza_number, 2);
        assert_eq!(example.line_number, 1);
        assert_eq!(example.rhyme_ids, vec!["1-2-b"]);

        let headwords: Vec<char> = dataset.entries.iter().map(|e| e.headword).collect();
        assert_eq!(headwords, vec!['鳩', '洲', '逑', '菜', '谷']);
        assert_eq!(dataset.entries[3].id, 4);
        assert_eq!(dataset.entries[3].example_ids, vec![5]);
        assert_eq!(dataset.entries[4].example_ids, vec![7]);

        assert_eq!(
            dataset.summary,
            DatasetSummary {
                poems: 2,
                stanzas: 4,
                lines: 4,
                phrases: 7,
                rhyme_words: 5,
                entries: 5,
            }
        );

        Ok(())
    }

    #[test]
    fn test_repeated_rhyme_word_shares_entry() -> anyhow::Result<()> {
        let corpus = parse_corpus("1. A\na字b字\nc字\n")?;
        let dataset = build_dataset(&corpus, PHRASE_DELIMITER);

        assert_eq!(dataset.entries.len(), 1);
        assert_eq!(dataset.entries[0].headword, '字');
        assert_eq!(dataset.entries[0].example_ids, vec![1, 1, 2]);
        assert_eq!(dataset.examples[0].entry_ids, vec![1, 1]);
        assert_eq!(dataset.examples[0].rhyme_ids, vec!["1-1-a", "1-1-b"]);

        Ok(())
    }
}
