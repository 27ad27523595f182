use std::collections::HashMap;

use anyhow::{ensure, Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stanza {
    pub number: usize, // 1 始まり
    pub lines: Vec<String>,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Poem {
    pub id: String,
    pub title: String,
    pub stanzas: Vec<Stanza>,
}

#[derive(Debug, Serialize)]
pub struct Corpus {
    pub poems: Vec<Poem>,
}

pub fn decode_corpus(bytes: &[u8]) -> (String, bool) {
    // BOM は取り除かれる
    let (txt, _, had_errors) = encoding_rs::UTF_8.decode(bytes);
    (txt.into_owned(), had_errors)
}

// 詩は空行 3 つ (改行 4 つ) で区切られている
// 詩の中では
// - "?" で始まる行は飛ばす
// - 数字で始まる行が題 ("<ID>. <題名>")
// - 空行で次の章に移る
pub fn parse_corpus(txt: &str) -> Result<Corpus> {
    static REGEX_NEW_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n|\r").unwrap());

    let txt = REGEX_NEW_LINE.replace_all(txt, "\n");

    let mut poems: Vec<Poem> = Vec::new();
    let mut poem_indices = HashMap::<String, usize>::new();

    for chunk in txt.split("\n\n\n\n") {
        let mut current: Option<usize> = None;

        for row in chunk.split('\n') {
            if row.starts_with('?') {
                continue;
            }

            let is_heading = !row.trim().is_empty()
                && row.chars().next().map_or(false, |c| c.is_ascii_digit());

            if is_heading {
                let (id, title) = parse_poem_heading(row)?;
                let poem = Poem {
                    id,
                    title,
                    stanzas: vec![Stanza {
                        number: 1,
                        lines: vec![],
                    }],
                };

                // 同じ題が再び現れたら置き換える（位置は最初のまま）
                let index = match poem_indices.get(row) {
                    Some(&index) => {
                        poems[index] = poem;
                        index
                    }
                    None => {
                        poems.push(poem);
                        poem_indices.insert(row.to_owned(), poems.len() - 1);
                        poems.len() - 1
                    }
                };
                current = Some(index);
                continue;
            }

            let Some(index) = current else {
                continue;
            };
            let stanzas = &mut poems[index].stanzas;

            let line = row.trim();
            if line.is_empty() {
                let number = stanzas.len() + 1;
                stanzas.push(Stanza {
                    number,
                    lines: vec![],
                });
            } else {
                stanzas
                    .last_mut()
                    .context("Poem has no stanza")?
                    .lines
                    .push(line.to_owned());
            }
        }
    }

    Ok(Corpus { poems })
}

fn parse_poem_heading(heading: &str) -> Result<(String, String)> {
    let parts: Vec<&str> = heading.split(". ").collect();
    ensure!(parts.len() == 2, "Invalid poem heading: {:?}", heading);

    Ok((parts[0].to_owned(), parts[1].to_owned()))
}

impl Corpus {
    pub fn stanza_count(&self) -> usize {
        self.poems.iter().map(|p| p.stanzas.len()).sum()
    }

    pub fn line_count(&self) -> usize {
        self.poems
            .iter()
            .flat_map(|p| p.stanzas.iter())
            .map(|s| s.lines.len())
            .sum()
    }
}
