use clap::Parser;
use pseudoc::{
    self,
    errors::{PseudoError, PseudoResult},
    frontend::{Lexer, Tokenizer},
    has_source_extension, read_lines, render, Node,
};
use std::{path::PathBuf, time::Instant};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Syntax checker for structured pseudocode programs",
    long_about = "Syntax checker for structured pseudocode programs.\n\
                 Reads a pseudocode source file, tokenizes and parses it, and reports\n\
                 the first syntax error, if any.\n\
                 \n\
                 Example usage:\n\
                 pseudoc program.psc               # Check syntax\n\
                 pseudoc program.psc --show-ast    # Display abstract syntax tree\n\
                 pseudoc program.psc --render      # Print the canonical rendering\n\
                 pseudoc program.psc --verbose     # Verbose output\n\
                 pseudoc program.psc --timing      # Show timing"
)]
struct Cli {
    // The path to the file to check
    path: PathBuf,

    // Show AST after parsing
    #[arg(long)]
    show_ast: bool,

    // Print the canonical re-rendering of the program
    #[arg(short, long)]
    render: bool,

    // Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    // Show timing
    #[arg(short, long)]
    timing: bool,
}

// Statistics for performance analysis
#[derive(Debug, Default)]
struct ParseStats {
    lexer_time: f64,
    parser_time: f64,
    total_time: f64,
    line_count: usize,
    token_count: usize,
    ast_size: usize,
}

// Print error message and exit with error code
fn fatal(msg: &str) -> ! {
    eprintln!("Error: {}", msg);
    std::process::exit(1);
}

fn describe(err: &PseudoError) -> String {
    match err.line() {
        Some(line) => format!("line {}: {}", line, err),
        None => err.to_string(),
    }
}

// Perform lexical analysis phase
fn lexical_analysis(lines: &[String], stats: &mut ParseStats, verbose: bool) -> PseudoResult<()> {
    let lexer_start = Instant::now();
    let tokenizer = Tokenizer::new();
    let mut lexer = Lexer::new(&tokenizer, lines.iter().cloned());
    let tokens = lexer.tokenize_all()?;
    stats.lexer_time = lexer_start.elapsed().as_secs_f64();
    stats.token_count = tokens.len();

    if verbose {
        println!("✓ Lexical analysis completed in {:.3}s", stats.lexer_time);
        println!("  Generated {} tokens", stats.token_count);
    }
    Ok(())
}

// Perform parsing phase
fn parsing_phase(lines: Vec<String>, stats: &mut ParseStats, verbose: bool) -> PseudoResult<Option<Node>> {
    let parser_start = Instant::now();
    let ast = pseudoc::parse(lines)?;
    stats.parser_time = parser_start.elapsed().as_secs_f64();
    stats.ast_size = ast.as_ref().map(Node::count).unwrap_or(0);

    if verbose {
        println!("✓ Parsing completed in {:.3}s", stats.parser_time);
        println!("  Built {} AST nodes", stats.ast_size);
    }
    Ok(ast)
}

fn check(args: &Cli) -> PseudoResult<(Option<Node>, ParseStats)> {
    let start_time = Instant::now();
    let mut stats = ParseStats::default();

    if !args.path.exists() {
        return Err(PseudoError::FileReadError(format!(
            "Input file does not exist: {}",
            args.path.display()
        )));
    }

    let lines = read_lines(&args.path)?;
    stats.line_count = lines.len();
    if args.verbose {
        println!("Read {} lines from {}", stats.line_count, args.path.display());
    }

    lexical_analysis(&lines, &mut stats, args.verbose)?;
    let ast = parsing_phase(lines, &mut stats, args.verbose)?;
    stats.total_time = start_time.elapsed().as_secs_f64();
    Ok((ast, stats))
}

// Print compilation statistics
fn print_stats(stats: &ParseStats) {
    println!("\nStatistics:");
    println!("  Lexical analysis: {:>8.3}s", stats.lexer_time);
    println!("  Parsing:          {:>8.3}s", stats.parser_time);
    println!("  Total:            {:>8.3}s", stats.total_time);
    println!("  Lines:            {}", stats.line_count);
    println!("  Tokens:           {}", stats.token_count);
    println!("  AST nodes:        {}", stats.ast_size);
}

fn main() {
    let args = Cli::parse();

    let level = if args.verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if !has_source_extension(&args.path) {
        tracing::warn!(path = %args.path.display(), "input file does not have a .psc or .txt extension");
    }

    match check(&args) {
        Ok((ast, stats)) => {
            if args.show_ast {
                println!("\nAbstract Syntax Tree:");
                match &ast {
                    Some(ast) => print!("{}", ast),
                    None => println!("  (empty)"),
                }
            }
            if args.render {
                if let Some(ast) = &ast {
                    for line in render(ast) {
                        println!("{}", line);
                    }
                }
            }
            if args.timing {
                print_stats(&stats);
            }
            if args.verbose {
                println!("Syntax check successful!");
            }
        }
        Err(e) => fatal(&describe(&e)),
    }
}
