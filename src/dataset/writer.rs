use std::{fs, path::Path};

use anyhow::{ensure, Context, Result};

use crate::dataset::{
    metadata::{
        build_metadata, TableSpec, ENTRY_TABLE, EXAMPLE_TABLE, LANGUAGE_TABLE, LIST_SEPARATOR,
        METADATA_FILE_NAME, POEM_TABLE, WORD_SEPARATOR,
    },
    Dataset,
};

fn join_with<T: ToString>(values: &[T], separator: &str) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}

fn join<T: ToString>(values: &[T]) -> String {
    join_with(values, LIST_SEPARATOR)
}

fn write_table<I>(root: &Path, table: &TableSpec, records: I) -> Result<()>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let path = root.join(table.url);
    let mut writer = csv::Writer::from_path(&path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    writer.write_record(table.columns.iter().map(|c| c.name))?;

    for (i, record) in records.into_iter().enumerate() {
        ensure!(
            record.len() == table.columns.len(),
            "Invalid record at {} in {}: {:?}",
            i,
            table.url,
            record
        );
        writer
            .write_record(&record)
            .with_context(|| format!("Failed to write record at {} in {}", i, table.url))?;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(())
}

// 出力先のディレクトリはすでに存在している必要がある
pub fn write_dataset(dataset: &Dataset, root: &Path) -> Result<()> {
    ensure!(root.is_dir(), "Not a directory: {}", root.display());

    write_table(
        root,
        &LANGUAGE_TABLE,
        dataset
            .languages
            .iter()
            .map(|l| vec![l.id.clone(), l.name.clone(), l.glottocode.clone()]),
    )?;

    write_table(
        root,
        &POEM_TABLE,
        dataset
            .poems
            .iter()
            .map(|p| vec![p.id.clone(), p.title.clone()]),
    )?;

    write_table(
        root,
        &EXAMPLE_TABLE,
        dataset.examples.iter().map(|e| {
            vec![
                e.id.to_string(),
                e.language_id.clone(),
                e.primary_text.clone(),
                join_with(&e.analyzed_word, WORD_SEPARATOR),
                e.gloss.clone(),
                e.poem_id.clone(),
                join(&e.entry_ids),
                e.stanza_number.to_string(),
                e.line_number.to_string(),
                e.phrase_number.to_string(),
                join(&e.rhyme_words),
                join(&e.rhyme_word_indices),
                join(&e.rhyme_ids),
            ]
        }),
    )?;

    write_table(
        root,
        &ENTRY_TABLE,
        dataset.entries.iter().map(|e| {
            vec![
                e.id.to_string(),
                e.language_id.clone(),
                e.headword.to_string(),
                e.middle_chinese.clone(),
                e.ocbs.clone(),
                join(&e.example_ids),
            ]
        }),
    )?;

    let metadata_path = root.join(METADATA_FILE_NAME);
    fs::write(
        &metadata_path,
        serde_json::to_string_pretty(&build_metadata())?,
    )
    .with_context(|| format!("Failed to write {}", metadata_path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join() {
        assert_eq!(join(&['鳩', '洲']), "鳩 洲");
        assert_eq!(join(&[1usize, 12]), "1 12");
        assert_eq!(join::<usize>(&[]), "");
        assert_eq!(join_with(&['關', '雎'], WORD_SEPARATOR), "關\t雎");
    }
}
