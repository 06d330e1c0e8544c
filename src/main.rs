use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

use wordtree::report::{self, RunStats};
use wordtree::{
    AsyncFileReader, ReaderConfig, ReplaceRequest, RunConfig, Session, TextProcessor,
};

#[derive(Parser, Debug)]
#[command(name = "wordtree")]
#[command(about = "Index the words of a text file in a binary search tree and replace whole words")]
#[command(version)]
struct Args {
    /// Text file to index; a sample file is generated when omitted
    input: Option<PathBuf>,

    /// Word to search for (matched whole-word and case-sensitively when replacing)
    #[arg(long, requires = "replace")]
    search: Option<String>,

    /// Replacement word
    #[arg(long, requires = "search")]
    replace: Option<String>,

    /// Output file for the replaced text
    #[arg(long, default_value = wordtree::config::DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Directory the sample file is written to when no input is given
    #[arg(long, default_value = ".")]
    sample_dir: PathBuf,

    /// Optional JSON stats output file path
    #[arg(long)]
    stats_out: Option<PathBuf>,

    /// Read buffer size in bytes
    #[arg(long, default_value_t = 8192)]
    buffer_size: usize,

    /// Skip printing original and modified files after a replace
    #[arg(long)]
    no_compare: bool,
}

impl Args {
    fn into_config(self) -> RunConfig {
        let replace = match (self.search, self.replace) {
            (Some(search_word), Some(replace_word)) => Some(ReplaceRequest {
                search_word,
                replace_word,
            }),
            _ => None,
        };

        RunConfig {
            input_path: self.input,
            sample_dir: self.sample_dir,
            replace,
            output_path: self.output,
            stats_out: self.stats_out,
            reader: ReaderConfig {
                buffer_size: self.buffer_size,
            },
            compare: !self.no_compare,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // WHY: logs go to stderr as JSON; stdout carries the human-readable report
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .json()
        .init();

    let args = Args::parse();
    info!(?args, "Parsed CLI arguments");

    let config = args.into_config();
    config.validate()?;

    let input_path = config.resolve_input().await?;
    if config.input_path.is_none() {
        println!("Created sample file: {}", input_path.display());
    }

    let reader = AsyncFileReader::new(config.reader.clone());
    let (original_lines, _) = reader.read_file_lines(&input_path).await?;

    println!("File Content:");
    print!("{}", report::format_numbered_lines(&original_lines));

    let mut session = Session::new(TextProcessor::new(config.reader.clone()));
    let build_start = Instant::now();
    session.build(&input_path).await?;
    let build_time_ms = build_start.elapsed().as_millis() as u64;

    let (Some(source), Some(index)) = (session.source(), session.index()) else {
        anyhow::bail!("Session holds no index after building {}", input_path.display());
    };
    println!("Word index built from {} ({} lines)", source.display(), original_lines.len());
    println!();
    print!("{}", report::format_word_listing(index));
    println!();
    print!("{}", report::format_statistics(index));

    let mut stats = RunStats::for_index(source, original_lines.len(), index, build_time_ms);

    if let Some(request) = &config.replace {
        println!();
        let outcome = session
            .search_and_replace(&request.search_word, &request.replace_word, config.output_path())
            .await?;
        print!(
            "{}",
            report::format_replacement(&request.search_word, &request.replace_word, &outcome)
        );

        if outcome.is_found() {
            println!("Modified content saved to: {}", config.output_path().display());

            if config.compare {
                let (modified_lines, _) = reader.read_file_lines(config.output_path()).await?;
                println!();
                println!("ORIGINAL FILE:");
                print!("{}", report::format_numbered_lines(&original_lines));
                println!("MODIFIED FILE:");
                print!("{}", report::format_numbered_lines(&modified_lines));
            }
        }

        // statistics still describe the original source
        if let Some(index) = session.index() {
            println!();
            print!("{}", report::format_statistics(index));
        }

        stats.record_replace(
            &request.search_word,
            &request.replace_word,
            &outcome,
            config.output_path(),
            session.state(),
        );
    }

    if let Some(stats_path) = &config.stats_out {
        stats.write_json(stats_path).await?;
        info!("Run stats written to {}", stats_path.display());
    }

    Ok(())
}
