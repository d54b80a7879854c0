// Lexer constants
pub mod lexer {
    // Everything after this prefix up to end of line is ignored
    pub const COMMENT_PREFIX: &str = "//";
    pub const QUOTE_CHARS: &[char] = &['"', '\''];
}

// Parser constants
pub mod parser {
    // Reserved name of class constructors
    pub const CONSTRUCTOR_NAME: &str = "new";

    // The only keyword that may still appear as a member name after '.'
    pub fn is_member_keyword(text: &str) -> bool {
        text == CONSTRUCTOR_NAME
    }
}

// Canonical rendering constants
pub mod render {
    pub const INDENT: &str = "    ";
}

// Source file handling
pub mod source {
    pub const EXTENSIONS: &[&str] = &["psc", "txt"];
}
