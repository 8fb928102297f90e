use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use clap::Parser;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};
use wh_source::Source;

#[derive(clap::Parser)]
#[clap(name = "wh", about = "Parse a WHILE program and print its syntax tree.")]
struct Args {
    /// Path to the `.wh` source file
    file: PathBuf,

    /// Print the token stream instead of the syntax tree
    #[clap(long)]
    tokens: bool,

    /// Indentation depth of the root node
    #[clap(long, default_value_t = 0)]
    depth: usize,
}

fn main() -> anyhow::Result<ExitCode> {
    initialize_logging()?;

    let args = Args::parse();
    let content = wh::load_source(&args.file)?;
    let name = args.file.display().to_string();
    let source = Source::named(&name, &content);

    info!(path = %name, tokens = args.tokens, "parsing");
    let rendered = if args.tokens {
        wh::render_tokens(&source).map_err(wh_parser::Error::from)
    } else {
        wh::render_tree(&source, args.depth)
    };

    match rendered {
        Ok(output) => {
            print!("{}", output);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("{}", wh::report(&source, &err));
            Ok(ExitCode::FAILURE)
        }
    }
}

fn initialize_logging() -> anyhow::Result<()> {
    let env_filter = env::var("RUST_LOG").unwrap_or_default();

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(EnvFilter::from_str(&env_filter)?),
        )
        .init();
    Ok(())
}
