use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

pub mod ast;
pub mod config;
pub mod errors;
pub mod frontend;
pub mod render;

pub use ast::{Node, NodeKind};
pub use errors::{PseudoError, PseudoResult};
pub use render::{render, render_expression};

use crate::config::source::EXTENSIONS;
use crate::frontend::{Lexer, Parser, Tokenizer};

pub const VERSION: &str = "0.1.0";

/// Parses a program given as an ordered sequence of source lines.
///
/// Returns `Ok(None)` when the lines contain no statements.
pub fn parse<I, S>(lines: I) -> PseudoResult<Option<Node>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let tokenizer = Tokenizer::new();
    let lexer = Lexer::new(&tokenizer, lines);
    let mut parser = Parser::new(lexer);
    parser.parse()
}

/// Parses a whole source text, splitting it into lines first.
pub fn parse_source(source: &str) -> PseudoResult<Option<Node>> {
    parse(source.lines())
}

pub fn has_source_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| EXTENSIONS.contains(&ext))
}

/// Reads a source file line by line.
pub fn read_lines(path: &Path) -> PseudoResult<Vec<String>> {
    if path.is_dir() {
        return Err(PseudoError::FileReadError(format!("{} is a directory", path.display())));
    }
    let file = File::open(path)?;
    let lines = BufReader::new(file).lines().collect::<Result<Vec<_>, _>>()?;
    Ok(lines)
}
