use anyhow::{bail, ensure, Context, Result};
use indicatif::{ProgressBar, ProgressIterator, ProgressStyle};
use std::{env, fs, path::PathBuf};

use baxter_oc_rhymes::{
    corpus::{decode_corpus, parse_corpus},
    dataset::{writer::write_dataset, Dataset, DatasetBuilder},
    rhyme_line::parser::PHRASE_DELIMITER,
};

struct Args {
    corpus_path: String,
    output_path: Option<String>,
    delimiter: String,
    quiet: bool,
}

fn get_args() -> Result<Args> {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut opts = getopts::Options::new();
    opts.optopt("d", "delimiter", "phrase delimiter", "DELIM");
    opts.optflag("q", "quiet", "hide the progress bar");
    opts.optflag("h", "help", "print this help");

    let matches = match opts.parse(&args) {
        Ok(m) => m,
        Err(f) => bail!(f),
    };

    if matches.opt_present("h") {
        print!(
            "{}",
            opts.usage("Usage: baxter-oc-rhymes [options] <corpus.txt> [output-dir]")
        );
        std::process::exit(0);
    }

    let corpus_path = matches
        .free
        .get(0)
        .context("path to rhyme-annotated corpus is required")?
        .clone();
    let output_path = matches.free.get(1).map(|s| s.clone());

    let delimiter = matches
        .opt_str("d")
        .unwrap_or_else(|| PHRASE_DELIMITER.to_owned());
    ensure!(!delimiter.is_empty(), "Phrase delimiter must not be empty");

    Ok(Args {
        corpus_path,
        output_path,
        delimiter,
        quiet: matches.opt_present("q"),
    })
}

enum BuildOut {
    Null,
    File { root: PathBuf },
}

impl BuildOut {
    fn init_file(root: &str) -> Result<Self> {
        let root = PathBuf::from(&root);
        fs::create_dir(&root).context("Failed to create output directory")?;

        Ok(Self::File { root })
    }

    fn save_dataset(&self, dataset: &Dataset) -> Result<()> {
        if let BuildOut::File { root } = &self {
            write_dataset(dataset, root)?;
        }

        Ok(())
    }
}

fn main() -> Result<()> {
    let args = get_args()?;

    let corpus_path = PathBuf::from(&args.corpus_path);
    ensure!(
        corpus_path.exists(),
        "File not found: {}",
        corpus_path.display()
    );

    let out = if let Some(output_path) = &args.output_path {
        BuildOut::init_file(&output_path)
            .with_context(|| format!("Failed to output directory: {}", &output_path))?
    } else {
        BuildOut::Null
    };

    println!("Processing corpus...");

    let corpus = {
        let bytes = fs::read(&corpus_path)
            .with_context(|| format!("Failed to read {}", corpus_path.display()))?;

        let (txt, had_errors) = decode_corpus(&bytes);
        if had_errors {
            eprintln!(
                "warning: malformed UTF-8 in {} was replaced",
                corpus_path.display()
            );
        }

        parse_corpus(&txt).context("Failed to parse corpus")?
    };

    println!("Finished.");

    println!("Analyzing poems...");

    let mut builder = DatasetBuilder::new(&args.delimiter);
    if args.quiet {
        for poem in corpus.poems.iter() {
            builder.add_poem(poem);
        }
    } else {
        let pb = create_progress_bar(corpus.poems.len() as u64);
        for poem in corpus.poems.iter().progress_with(pb) {
            builder.add_poem(poem);
        }
    }
    let dataset = builder.finish();

    out.save_dataset(&dataset)
        .context("Failed to save dataset")?;

    println!("Finished: {}", dataset.summary);

    Ok(())
}

fn create_progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template(
            "{percent:>3}% [{wide_bar:.cyan/blue}] {pos}/{len} [{elapsed_precise} < {eta_precise}]",
        )
        .unwrap()
        .progress_chars("#-"),
    );
    pb
}
