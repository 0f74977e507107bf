use anyhow::Result;
use clap::{Parser, ValueEnum};
use classifier::{classify, render_json, render_text, ClassifyOptions};
use genre_core::persist::SortOrder;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "classifier", version)]
#[command(about = "Score books against weighted genre keywords", long_about = None)]
struct Cli {
    /// Book catalog: .json, .jsonl, or a directory of them
    #[arg(short = 'b', long)]
    books_path: PathBuf,
    /// Keyword weights file (`genre, keyword, weight` rows after a header line)
    #[arg(short = 'k', long)]
    keywords_path: PathBuf,
    /// Title sort order
    #[arg(long, value_enum, default_value_t = Order::Asc)]
    order: Order,
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
    /// Score books on the current thread only
    #[arg(long, default_value_t = false)]
    sequential: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Order {
    Asc,
    Desc,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(std::io::stderr).init();
    let cli = Cli::parse();

    let opts = ClassifyOptions {
        books_path: cli.books_path,
        keywords_path: cli.keywords_path,
        order: match cli.order {
            Order::Asc => SortOrder::Asc,
            Order::Desc => SortOrder::Desc,
        },
        parallel: !cli.sequential,
    };
    let results = classify(&opts).map_err(|e| {
        tracing::error!(error = %format!("{e:#}"), "classification failed");
        e
    })?;

    let rendered = match cli.format {
        Format::Text => render_text(&results),
        Format::Json => render_json(&results)? + "\n",
    };
    std::io::stdout().lock().write_all(rendered.as_bytes())?;
    Ok(())
}
