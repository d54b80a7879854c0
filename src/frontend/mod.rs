pub mod lexer;
pub mod parser;
pub mod token;
pub mod tokenizer;

pub use lexer::Lexer;
pub use parser::Parser;
pub use token::{Token, TokenKind};
pub use tokenizer::Tokenizer;
