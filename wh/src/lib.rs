//! Glue between the file system, the WHILE front end and the terminal.

use console::style;
use std::io;
use std::path::{Path, PathBuf};
use wh_parser::{lexer, Error, LexError, PrintTree};
use wh_source::Source;

/// Extension every WHILE source file must carry.
pub const EXTENSION: &str = "wh";

#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("`{}` is not a WHILE source file (expected `<name>.{}`)", .0.display(), EXTENSION)]
    Extension(PathBuf),

    #[error("failed to read `{}`", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Reads the program at `path`, which must be named `<name>.wh`.
pub fn load_source(path: &Path) -> Result<String, LoadError> {
    let has_stem = path.file_stem().map_or(false, |stem| !stem.is_empty());
    if !has_stem || path.extension().map_or(true, |ext| ext != EXTENSION) {
        return Err(LoadError::Extension(path.to_path_buf()));
    }

    tracing::debug!(path = %path.display(), "loading source");
    std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses `source` and renders its syntax tree with the root indented by `depth` levels.
pub fn render_tree(source: &Source, depth: usize) -> Result<String, Error> {
    let program = wh_parser::parse(source)?;
    Ok(program.print_tree(depth))
}

/// Renders the significant tokens of `source`, one per line, prefixed with their position.
pub fn render_tokens(source: &Source) -> Result<String, LexError> {
    let tokens = lexer::tokenize(source)?;
    Ok(tokens
        .iter()
        .map(|token| format!("{} {}\n", source.location(token.span.start), token))
        .collect())
}

/// Formats `err` for the terminal: the message, where it happened and the offending line.
pub fn report(source: &Source, err: &Error) -> String {
    let location = err.location();
    format!(
        "{error}: {message}\n {arrow} {name}:{location}\n{snippet}",
        error = style("error").red().bold(),
        message = err,
        arrow = style("-->").blue(),
        name = source.name.unwrap_or("<input>"),
        location = location,
        snippet = source.snippet(err.span()),
    )
}
