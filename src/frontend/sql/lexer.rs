use crate::frontend::sql::errors::ParseError;
use crate::frontend::sql::parser::Position;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // identifiers & keywords
    Ident(String),
    QuotedIdent(String),
    UserVar(String),
    SysVar(String),

    // literals
    Int(String),
    Decimal(String),
    Float(String),
    String(String),
    HexString(String),
    BitString(String),

    // punctuation
    Dot,
    Comma,
    LParen,
    RParen,
    Semicolon,

    // operators
    Eq,
    NullSafeEq,
    NotEq,
    Lt,
    Le,
    Gt,
    Ge,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Ampersand,
    Pipe,
    Caret,
    Tilde,
    Bang,
    ShiftLeft,
    ShiftRight,
    AndAnd,
    OrOr,
    Assign,

    EOF,
}

impl Token {
    pub fn is_keyword(&self, kw: &str) -> bool {
        matches!(self, Token::Ident(s) if s.eq_ignore_ascii_case(kw))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Spanned {
    pub token: Token,
    pub position: Position,
    pub start: usize,
    pub end: usize,
}

pub struct Tokenizer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    line: usize,
    column: usize,
    offset: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            line: 1,
            column: 1,
            offset: 0,
        }
    }

    pub fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
        }
    }

    pub fn tokenize(mut self) -> Result<Vec<Spanned>, ParseError> {
        let mut out = Vec::new();
        loop {
            self.skip_whitespace()?;
            let position = self.position();
            let start = self.offset;
            let token = self.next_token()?;
            let done = token == Token::EOF;
            out.push(Spanned {
                token,
                position,
                start,
                end: self.offset,
            });
            if done {
                return Ok(out);
            }
        }
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        self.offset += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn peek_second(&self) -> Option<char> {
        let mut ahead = self.chars.clone();
        ahead.next();
        ahead.next()
    }

    pub fn next_token(&mut self) -> Result<Token, ParseError> {
        self.skip_whitespace()?;
        let start = self.position();

        let c = match self.bump() {
            Some(c) => c,
            None => return Ok(Token::EOF),
        };

        let tok = match c {
            // ---------- punctuation ----------
            '.' if matches!(self.chars.peek(), Some(d) if d.is_ascii_digit()) => {
                self.lex_number('.', start)?
            }
            '.' => Token::Dot,
            ',' => Token::Comma,
            '(' => Token::LParen,
            ')' => Token::RParen,
            ';' => Token::Semicolon,

            // ---------- operators ----------
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Star,
            '/' => Token::Slash,
            '%' => Token::Percent,
            '^' => Token::Caret,
            '~' => Token::Tilde,
            '=' => Token::Eq,

            '&' => {
                if self.consume('&') {
                    Token::AndAnd
                } else {
                    Token::Ampersand
                }
            }

            '|' => {
                if self.consume('|') {
                    Token::OrOr
                } else {
                    Token::Pipe
                }
            }

            '!' => {
                if self.consume('=') {
                    Token::NotEq
                } else {
                    Token::Bang
                }
            }

            ':' => {
                if self.consume('=') {
                    Token::Assign
                } else {
                    return Err(ParseError::UnexpectedToken {
                        token: Token::Ident(":".into()),
                        position: start,
                    });
                }
            }

            '<' => {
                if self.consume('=') {
                    if self.consume('>') {
                        Token::NullSafeEq
                    } else {
                        Token::Le
                    }
                } else if self.consume('>') {
                    Token::NotEq
                } else if self.consume('<') {
                    Token::ShiftLeft
                } else {
                    Token::Lt
                }
            }

            '>' => {
                if self.consume('=') {
                    Token::Ge
                } else if self.consume('>') {
                    Token::ShiftRight
                } else {
                    Token::Gt
                }
            }

            // ---------- variables ----------
            '@' => {
                if self.consume('@') {
                    Token::SysVar(self.lex_word(String::new(), true))
                } else if let Some(q @ ('\'' | '"' | '`')) = self.chars.peek().copied() {
                    self.bump();
                    Token::UserVar(self.lex_quoted(q, start)?)
                } else {
                    Token::UserVar(self.lex_word(String::new(), false))
                }
            }

            // ---------- quoted ----------
            '\'' | '"' => Token::String(self.lex_quoted(c, start)?),
            '`' => Token::QuotedIdent(self.lex_quoted('`', start)?),

            // ---------- hex / bit literals ----------
            'x' | 'X' if self.chars.peek() == Some(&'\'') => {
                self.bump();
                Token::HexString(self.lex_quoted('\'', start)?)
            }
            'b' | 'B' if self.chars.peek() == Some(&'\'') => {
                self.bump();
                Token::BitString(self.lex_quoted('\'', start)?)
            }
            '0' if matches!(self.chars.peek(), Some('x'))
                && matches!(self.peek_second(), Some(d) if d.is_ascii_hexdigit()) =>
            {
                self.bump();
                let digits = self.take_while(|ch| ch.is_ascii_hexdigit());
                Token::HexString(digits)
            }
            '0' if matches!(self.chars.peek(), Some('b'))
                && matches!(self.peek_second(), Some('0' | '1')) =>
            {
                self.bump();
                let digits = self.take_while(|ch| ch == '0' || ch == '1');
                Token::BitString(digits)
            }

            // ---------- number ----------
            c if c.is_ascii_digit() => self.lex_number(c, start)?,

            // ---------- identifier ----------
            c if is_ident_start(c) => Token::Ident(self.lex_word(c.to_string(), false)),

            // ---------- everything else ----------
            other => {
                return Err(ParseError::InvalidLiteral {
                    literal: other.to_string(),
                    position: start,
                });
            }
        };

        Ok(tok)
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> String {
        let mut s = String::new();
        while let Some(&ch) = self.chars.peek() {
            if !pred(ch) {
                break;
            }
            s.push(ch);
            self.bump();
        }
        s
    }

    fn lex_word(&mut self, mut word: String, allow_dot: bool) -> String {
        word.push_str(&self.take_while(|ch| is_ident_continue(ch) || (allow_dot && ch == '.')));
        word
    }

    fn lex_number(&mut self, first: char, start: Position) -> Result<Token, ParseError> {
        let mut num = first.to_string();
        let mut is_decimal = first == '.';
        num.push_str(&self.take_while(|ch| ch.is_ascii_digit()));

        if !is_decimal && self.chars.peek() == Some(&'.') {
            self.bump();
            is_decimal = true;
            num.push('.');
            num.push_str(&self.take_while(|ch| ch.is_ascii_digit()));
        }

        if matches!(self.chars.peek(), Some('e' | 'E')) {
            let mut ahead = self.chars.clone();
            ahead.next();
            let exp_follows = match ahead.next() {
                Some(d) if d.is_ascii_digit() => true,
                Some('+' | '-') => matches!(ahead.next(), Some(d) if d.is_ascii_digit()),
                _ => false,
            };
            if exp_follows {
                self.bump();
                num.push('e');
                if let Some(sign @ ('+' | '-')) = self.chars.peek().copied() {
                    self.bump();
                    num.push(sign);
                }
                num.push_str(&self.take_while(|ch| ch.is_ascii_digit()));
                return Ok(Token::Float(num));
            }
        }

        // `1abc` is an identifier in MySQL, but we only accept plain numbers.
        if matches!(self.chars.peek(), Some(&ch) if is_ident_start(ch)) {
            return Err(ParseError::InvalidLiteral {
                literal: num,
                position: start,
            });
        }

        if is_decimal {
            Ok(Token::Decimal(num))
        } else {
            Ok(Token::Int(num))
        }
    }

    fn lex_quoted(&mut self, quote: char, start: Position) -> Result<String, ParseError> {
        let mut s = String::new();
        loop {
            let ch = match self.bump() {
                Some(ch) => ch,
                None => return Err(ParseError::UnexpectedEOF { position: start }),
            };
            if ch == quote {
                // doubled quote is an escaped quote
                if self.consume(quote) {
                    s.push(quote);
                    continue;
                }
                return Ok(s);
            }
            if ch == '\\' && quote != '`' {
                match self.bump() {
                    Some('n') => s.push('\n'),
                    Some('t') => s.push('\t'),
                    Some('r') => s.push('\r'),
                    Some('0') => s.push('\0'),
                    Some(other) => s.push(other),
                    None => return Err(ParseError::UnexpectedEOF { position: start }),
                }
                continue;
            }
            s.push(ch);
        }
    }

    fn consume(&mut self, expected: char) -> bool {
        matches!(self.chars.peek(), Some(&c) if c == expected) && {
            self.bump();
            true
        }
    }

    fn skip_whitespace(&mut self) -> Result<(), ParseError> {
        loop {
            match self.chars.peek().copied() {
                Some(c) if c.is_whitespace() => {
                    self.bump();
                }
                Some('#') => self.skip_line(),
                Some('-') if self.peek_second() == Some('-') => self.skip_line(),
                Some('/') if self.peek_second() == Some('*') => {
                    let start = self.position();
                    self.bump();
                    self.bump();
                    loop {
                        match self.bump() {
                            Some('*') if self.consume('/') => break,
                            Some(_) => {}
                            None => return Err(ParseError::UnexpectedEOF { position: start }),
                        }
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn skip_line(&mut self) {
        while let Some(ch) = self.bump() {
            if ch == '\n' {
                break;
            }
        }
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}
