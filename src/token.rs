/// Lexical unit of an expression.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Token {
    /// A maximal run of alphanumeric characters.
    Ident(String),
    /// Any other non-whitespace character: an operator, a parenthesis, or garbage.
    Symbol(char),
}

impl Token {
    pub fn as_ident(&self) -> Option<&str> {
        match self {
            Token::Ident(name) => Some(name),
            Token::Symbol(_) => None,
        }
    }
}

/// Split `input` into tokens, skipping whitespace.
///
/// Symbols are always one character long, so multi-character operators
/// cannot be expressed. No check is made here whether a symbol is a known
/// operator; the parser does that.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
        } else if c.is_alphanumeric() {
            let mut name = String::new();
            while let Some(&c) = chars.peek() {
                if !c.is_alphanumeric() {
                    break;
                }
                name.push(c);
                chars.next();
            }
            tokens.push(Token::Ident(name));
        } else {
            tokens.push(Token::Symbol(c));
            chars.next();
        }
    }

    tokens
}
