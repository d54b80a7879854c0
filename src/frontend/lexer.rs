use std::collections::VecDeque;
use std::iter::Peekable;
use std::str::CharIndices;

use crate::config::lexer::{COMMENT_PREFIX, QUOTE_CHARS};
use crate::errors::{PseudoError, PseudoResult};
use crate::frontend::token::{Token, TokenKind};
use crate::frontend::tokenizer::Tokenizer;

/// Pull-based token cursor over a sequence of source lines.
///
/// Lines are scanned one at a time, only when lookahead runs past the tokens
/// already buffered. Once the lines are exhausted every further request
/// yields an [`TokenKind::Eof`] token.
pub struct Lexer<'a> {
    tokenizer: &'a Tokenizer,
    lines: Vec<String>,
    next_line: usize,
    buffer: VecDeque<Token>,
    eof: Token,
}

impl<'a> Lexer<'a> {
    pub fn new<I, S>(tokenizer: &'a Tokenizer, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        let eof = Token::eof(lines.len());
        Self {
            tokenizer,
            lines,
            next_line: 0,
            buffer: VecDeque::new(),
            eof,
        }
    }

    /// Looks `k` tokens ahead without consuming anything. `peek(0)` is the current token.
    pub fn peek(&mut self, k: usize) -> PseudoResult<&Token> {
        self.fill(k)?;
        Ok(self.buffer.get(k).unwrap_or(&self.eof))
    }

    pub fn advance(&mut self) -> PseudoResult<Token> {
        self.fill(0)?;
        Ok(self.buffer.pop_front().unwrap_or_else(|| self.eof.clone()))
    }

    /// Rewinds the cursor to the first line.
    pub fn restart(&mut self) {
        self.next_line = 0;
        self.buffer.clear();
    }

    /// Scans every line from the start and returns all tokens, excluding the end marker.
    pub fn tokenize_all(&mut self) -> PseudoResult<Vec<Token>> {
        self.restart();
        let mut tokens = Vec::new();
        loop {
            let token = self.advance()?;
            if token.is(TokenKind::Eof) {
                break;
            }
            tokens.push(token);
        }
        self.restart();
        Ok(tokens)
    }

    fn fill(&mut self, k: usize) -> PseudoResult<()> {
        while self.buffer.len() <= k && self.next_line < self.lines.len() {
            let index = self.next_line;
            self.next_line += 1;
            let tokens = self.scan_line(index)?;
            tracing::trace!(line = index + 1, tokens = tokens.len(), "scanned line");
            self.buffer.extend(tokens);
        }
        Ok(())
    }

    fn scan_line(&self, index: usize) -> PseudoResult<Vec<Token>> {
        let text = self.lines[index].as_str();
        let line = index + 1;
        let mut scanner = LineScanner {
            text,
            chars: text.char_indices().peekable(),
            line,
        };
        let mut tokens = Vec::new();
        while let Some(fragment) = scanner.next_fragment()? {
            let kind = self
                .tokenizer
                .classify(fragment)
                .ok_or_else(|| PseudoError::UnknownToken {
                    token: fragment.to_string(),
                    line,
                })?;
            tokens.push(Token::new(kind, fragment, line));
        }
        Ok(tokens)
    }
}

// Splits a single line into raw fragments.
struct LineScanner<'l> {
    text: &'l str,
    chars: Peekable<CharIndices<'l>>,
    line: usize,
}

impl<'l> LineScanner<'l> {
    fn next_fragment(&mut self) -> PseudoResult<Option<&'l str>> {
        self.skip_whitespace();
        let (start, ch) = match self.chars.peek() {
            Some(&(start, ch)) => (start, ch),
            None => return Ok(None),
        };
        if self.text[start..].starts_with(COMMENT_PREFIX) {
            while self.chars.next().is_some() {}
            return Ok(None);
        }
        let fragment = match ch {
            ch if ch.is_alphabetic() || ch == '_' => self.scan_word(start),
            ch if ch.is_ascii_digit() => self.scan_number(start)?,
            '.' if self.digit_follows(start + 1) => self.scan_number(start)?,
            ch if QUOTE_CHARS.contains(&ch) => self.scan_string(start, ch)?,
            '=' | '!' | '<' | '>' => self.scan_operator(start),
            ch => {
                self.chars.next();
                &self.text[start..start + ch.len_utf8()]
            }
        };
        Ok(Some(fragment))
    }

    fn skip_whitespace(&mut self) {
        while let Some(&(_, ch)) = self.chars.peek() {
            if !ch.is_whitespace() {
                break;
            }
            self.chars.next();
        }
    }

    fn end(&mut self) -> usize {
        self.chars.peek().map(|&(i, _)| i).unwrap_or(self.text.len())
    }

    fn digit_follows(&self, at: usize) -> bool {
        self.text[at..].chars().next().is_some_and(|c| c.is_ascii_digit())
    }

    fn scan_word(&mut self, start: usize) -> &'l str {
        while let Some(&(_, ch)) = self.chars.peek() {
            if ch.is_alphanumeric() || ch == '_' {
                self.chars.next();
            } else {
                break;
            }
        }
        let end = self.end();
        &self.text[start..end]
    }

    fn eat_digits(&mut self) {
        while let Some(&(_, ch)) = self.chars.peek() {
            if ch.is_ascii_digit() {
                self.chars.next();
            } else {
                break;
            }
        }
    }

    fn scan_number(&mut self, start: usize) -> PseudoResult<&'l str> {
        self.eat_digits();
        if let Some(&(dot, '.')) = self.chars.peek() {
            if self.digit_follows(dot + 1) {
                self.chars.next();
                self.eat_digits();
            }
        }
        if let Some(&(e, 'e' | 'E')) = self.chars.peek() {
            let rest = &self.text[e + 1..];
            let signed = rest.starts_with(['+', '-']);
            let digits_at = if signed { e + 2 } else { e + 1 };
            if self.digit_follows(digits_at) {
                self.chars.next();
                if signed {
                    self.chars.next();
                }
                self.eat_digits();
            }
        }
        // A number running straight into a word, such as `12ab`, is malformed.
        if let Some(&(_, ch)) = self.chars.peek() {
            if ch.is_alphanumeric() || ch == '_' {
                self.scan_word(start);
                let end = self.end();
                return Err(PseudoError::InvalidNumber {
                    number: self.text[start..end].to_string(),
                    line: self.line,
                });
            }
        }
        let end = self.end();
        Ok(&self.text[start..end])
    }

    fn scan_string(&mut self, start: usize, quote: char) -> PseudoResult<&'l str> {
        self.chars.next(); // Consume opening quote
        for (i, ch) in self.chars.by_ref() {
            if ch == quote {
                return Ok(&self.text[start..i + ch.len_utf8()]);
            }
        }
        Err(PseudoError::UnterminatedString { line: self.line })
    }

    fn scan_operator(&mut self, start: usize) -> &'l str {
        self.chars.next();
        if let Some(&(_, '=')) = self.chars.peek() {
            self.chars.next();
        }
        let end = self.end();
        &self.text[start..end]
    }
}

// Convenience function for tooling that wants every token up front
pub fn scan<I, S>(lines: I) -> PseudoResult<Vec<Token>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let tokenizer = Tokenizer::new();
    let mut lexer = Lexer::new(&tokenizer, lines);
    lexer.tokenize_all()
}
