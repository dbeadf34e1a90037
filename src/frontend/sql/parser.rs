//! Recursive-descent parser for the supported SQL subset.
//!
//! Statements: `SELECT <items> [FROM t]`, `CREATE TABLE`, `DROP TABLE`, `SET`.
//! Expressions use precedence climbing with MySQL operator precedence.

use std::fmt;

use crate::frontend::sql::ast::*;
use crate::frontend::sql::errors::ParseError;
use crate::frontend::sql::lexer::{Spanned, Token, Tokenizer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Parses exactly one statement; a trailing `;` is allowed.
pub fn parse(sql: &str) -> Result<Statement, ParseError> {
    let mut parser = Parser::new(sql)?;
    let stmt = parser.parse_statement()?;
    parser.eat(&Token::Semicolon);
    parser.expect_eof()?;
    Ok(stmt)
}

pub fn parse_statements(sql: &str) -> Result<Vec<Statement>, ParseError> {
    let mut parser = Parser::new(sql)?;
    let mut out = Vec::new();
    loop {
        while parser.eat(&Token::Semicolon) {}
        if parser.at_eof() {
            return Ok(out);
        }
        out.push(parser.parse_statement()?);
        if !parser.at_eof() {
            parser.expect(Token::Semicolon, "';'")?;
        }
    }
}

pub fn parse_expr(sql: &str) -> Result<Expr, ParseError> {
    let mut parser = Parser::new(sql)?;
    let expr = parser.parse_expr()?;
    parser.expect_eof()?;
    Ok(expr)
}

// binding powers, loosest first
const BP_OR: u8 = 1;
const BP_XOR: u8 = 2;
const BP_AND: u8 = 3;
const BP_NOT: u8 = 4;
const BP_CMP: u8 = 5;
const BP_BIT_OR: u8 = 6;
const BP_BIT_AND: u8 = 7;
const BP_SHIFT: u8 = 8;
const BP_ADD: u8 = 9;
const BP_MUL: u8 = 10;
const BP_BIT_XOR: u8 = 11;
const BP_UNARY: u8 = 12;
const BP_BANG: u8 = 13;
const BP_BINARY: u8 = 14;

const NILADIC_FUNCTIONS: [&str; 9] = [
    "current_timestamp",
    "current_date",
    "current_time",
    "current_user",
    "localtime",
    "localtimestamp",
    "utc_date",
    "utc_time",
    "utc_timestamp",
];

pub struct Parser<'a> {
    src: &'a str,
    tokens: Vec<Spanned>,
    pos: usize,
}

impl<'a> Parser<'a> {
    pub fn new(src: &'a str) -> Result<Self, ParseError> {
        let tokens = Tokenizer::new(src).tokenize()?;
        Ok(Self {
            src,
            tokens,
            pos: 0,
        })
    }

    // ---------- token cursor ----------

    fn peek(&self) -> &Token {
        self.peek_at(0)
    }

    fn peek_at(&self, n: usize) -> &Token {
        let idx = (self.pos + n).min(self.tokens.len() - 1);
        &self.tokens[idx].token
    }

    fn position(&self) -> Position {
        self.tokens[self.pos.min(self.tokens.len() - 1)].position
    }

    fn offset(&self) -> usize {
        self.tokens[self.pos.min(self.tokens.len() - 1)].start
    }

    fn prev_end(&self) -> usize {
        if self.pos == 0 {
            0
        } else {
            self.tokens[self.pos - 1].end
        }
    }

    fn at_eof(&self) -> bool {
        *self.peek() == Token::EOF
    }

    fn advance(&mut self) -> Token {
        let tok = self.peek().clone();
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        tok
    }

    fn eat(&mut self, tok: &Token) -> bool {
        if self.peek() == tok {
            self.advance();
            true
        } else {
            false
        }
    }

    fn eat_keyword(&mut self, kw: &str) -> bool {
        if self.peek().is_keyword(kw) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expected<T>(&self, what: &str) -> Result<T, ParseError> {
        let found = match self.peek() {
            Token::EOF => None,
            other => Some(format!("{:?}", other)),
        };
        Err(ParseError::Expected {
            expected: what.to_string(),
            found,
            position: self.position(),
        })
    }

    fn expect(&mut self, tok: Token, what: &str) -> Result<(), ParseError> {
        if self.eat(&tok) {
            Ok(())
        } else {
            self.expected(what)
        }
    }

    fn expect_keyword(&mut self, kw: &str) -> Result<(), ParseError> {
        if self.eat_keyword(kw) {
            Ok(())
        } else {
            self.expected(kw)
        }
    }

    fn expect_eof(&self) -> Result<(), ParseError> {
        if self.at_eof() {
            Ok(())
        } else {
            Err(ParseError::UnexpectedToken {
                token: self.peek().clone(),
                position: self.position(),
            })
        }
    }

    fn unsupported<T>(&self, message: &str) -> Result<T, ParseError> {
        Err(ParseError::Unsupported {
            message: message.to_string(),
            position: self.position(),
        })
    }

    fn ident(&mut self) -> Result<String, ParseError> {
        match self.peek().clone() {
            Token::Ident(s) | Token::QuotedIdent(s) => {
                self.advance();
                Ok(s)
            }
            _ => self.expected("identifier"),
        }
    }

    fn name_or_string(&mut self) -> Result<String, ParseError> {
        match self.peek().clone() {
            Token::Ident(s) | Token::QuotedIdent(s) | Token::String(s) => {
                self.advance();
                Ok(s)
            }
            _ => self.expected("name"),
        }
    }

    fn string_literal(&mut self) -> Result<String, ParseError> {
        match self.peek().clone() {
            Token::String(s) => {
                self.advance();
                Ok(s)
            }
            _ => self.expected("string literal"),
        }
    }

    fn number_u32(&mut self) -> Result<u32, ParseError> {
        let position = self.position();
        match self.advance() {
            Token::Int(s) => s.parse().map_err(|_| ParseError::InvalidLiteral {
                literal: s,
                position,
            }),
            other => Err(ParseError::Expected {
                expected: "number".into(),
                found: Some(format!("{:?}", other)),
                position,
            }),
        }
    }

    fn opt_length(&mut self) -> Result<Option<u32>, ParseError> {
        if self.eat(&Token::LParen) {
            let n = self.number_u32()?;
            self.expect(Token::RParen, "')'")?;
            Ok(Some(n))
        } else {
            Ok(None)
        }
    }

    fn opt_precision(&mut self) -> Result<(Option<u32>, Option<u32>), ParseError> {
        if !self.eat(&Token::LParen) {
            return Ok((None, None));
        }
        let m = self.number_u32()?;
        let d = if self.eat(&Token::Comma) {
            Some(self.number_u32()?)
        } else {
            None
        };
        self.expect(Token::RParen, "')'")?;
        Ok((Some(m), d))
    }

    fn opt_charset_clause(&mut self) -> Result<Option<String>, ParseError> {
        if self.peek().is_keyword("CHARACTER") && self.peek_at(1).is_keyword("SET") {
            self.advance();
        } else if !self.peek().is_keyword("CHARSET") {
            return Ok(None);
        }
        self.advance();
        self.eat(&Token::Eq);
        self.name_or_string().map(Some)
    }

    // ---------- statements ----------

    pub fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        if self.eat_keyword("SELECT") {
            return self.parse_select().map(Statement::Select);
        }
        if self.eat_keyword("CREATE") {
            self.expect_keyword("TABLE")?;
            return self.parse_create_table().map(Statement::CreateTable);
        }
        if self.eat_keyword("DROP") {
            self.expect_keyword("TABLE")?;
            return self.parse_drop_table().map(Statement::DropTable);
        }
        if self.eat_keyword("SET") {
            return self.parse_set().map(Statement::Set);
        }
        match self.peek() {
            Token::EOF => Err(ParseError::UnexpectedEOF {
                position: self.position(),
            }),
            _ => self.unsupported("statement"),
        }
    }

    fn parse_select(&mut self) -> Result<SelectStmt, ParseError> {
        let mut columns = Vec::new();
        loop {
            columns.push(self.parse_select_item()?);
            if !self.eat(&Token::Comma) {
                break;
            }
        }

        let from = if self.eat_keyword("FROM") {
            let name = self.ident()?;
            let alias = if self.eat_keyword("AS") {
                Some(self.ident()?)
            } else {
                match self.peek().clone() {
                    Token::Ident(s) | Token::QuotedIdent(s) => {
                        self.advance();
                        Some(s)
                    }
                    _ => None,
                }
            };
            Some(FromItem { name, alias })
        } else {
            None
        };

        if self.peek().is_keyword("WHERE")
            || self.peek().is_keyword("GROUP")
            || self.peek().is_keyword("ORDER")
            || self.peek().is_keyword("LIMIT")
        {
            return self.unsupported("clause; only the select list is typed");
        }

        Ok(SelectStmt { columns, from })
    }

    fn parse_select_item(&mut self) -> Result<SelectItem, ParseError> {
        let start = self.offset();
        let expr = if self.eat(&Token::Star) {
            Expr::Wildcard { table: None }
        } else {
            self.parse_expr()?
        };
        let text = self.src[start..self.prev_end()].trim().to_string();

        let alias = if self.eat_keyword("AS") {
            Some(self.name_or_string()?)
        } else {
            match self.peek().clone() {
                Token::Ident(s) if !s.eq_ignore_ascii_case("FROM") => {
                    self.advance();
                    Some(s)
                }
                Token::QuotedIdent(s) | Token::String(s) => {
                    self.advance();
                    Some(s)
                }
                _ => None,
            }
        };

        Ok(SelectItem { expr, alias, text })
    }

    fn parse_create_table(&mut self) -> Result<CreateTableStmt, ParseError> {
        let if_not_exists = if self.eat_keyword("IF") {
            self.expect_keyword("NOT")?;
            self.expect_keyword("EXISTS")?;
            true
        } else {
            false
        };
        let table_name = self.ident()?;
        self.expect(Token::LParen, "'('")?;

        let mut columns = Vec::new();
        loop {
            if self.is_constraint_start() {
                self.skip_constraint()?;
            } else if *self.peek() != Token::RParen {
                columns.push(self.parse_column_def()?);
            }
            if !self.eat(&Token::Comma) {
                break;
            }
        }
        self.expect(Token::RParen, "')'")?;

        let mut charset = None;
        let mut collation = None;
        loop {
            self.eat(&Token::Comma);
            self.eat_keyword("DEFAULT");
            if let Some(cs) = self.opt_charset_clause()? {
                charset = Some(cs);
                continue;
            }
            if self.eat_keyword("COLLATE") {
                self.eat(&Token::Eq);
                collation = Some(self.name_or_string()?);
                continue;
            }
            if self.eat_keyword("ENGINE")
                || self.eat_keyword("AUTO_INCREMENT")
                || self.eat_keyword("COMMENT")
            {
                self.eat(&Token::Eq);
                self.advance();
                continue;
            }
            break;
        }

        Ok(CreateTableStmt {
            table_name,
            if_not_exists,
            columns,
            charset,
            collation,
        })
    }

    fn is_constraint_start(&self) -> bool {
        let tok = self.peek();
        tok.is_keyword("PRIMARY")
            || tok.is_keyword("UNIQUE")
            || tok.is_keyword("KEY")
            || tok.is_keyword("INDEX")
            || tok.is_keyword("CONSTRAINT")
            || tok.is_keyword("FOREIGN")
            || tok.is_keyword("FULLTEXT")
            || tok.is_keyword("CHECK")
    }

    /// Skips a table-level constraint up to the next top-level `,` or `)`.
    fn skip_constraint(&mut self) -> Result<(), ParseError> {
        let mut depth = 0usize;
        loop {
            match self.peek() {
                Token::EOF => {
                    return Err(ParseError::UnexpectedEOF {
                        position: self.position(),
                    });
                }
                Token::LParen => depth += 1,
                Token::RParen if depth == 0 => return Ok(()),
                Token::RParen => depth -= 1,
                Token::Comma if depth == 0 => return Ok(()),
                _ => {}
            }
            self.advance();
        }
    }

    fn parse_column_def(&mut self) -> Result<ColumnDef, ParseError> {
        let name = self.ident()?;
        let mut ty = self.parse_sql_type()?;
        let mut nullable = true;
        let mut default = None;
        let mut on_update = None;

        loop {
            if self.parse_type_attribute(&mut ty)? {
                continue;
            }
            if self.eat_keyword("NULL") {
                nullable = true;
            } else if self.eat_keyword("NOT") {
                self.expect_keyword("NULL")?;
                nullable = false;
            } else if self.eat_keyword("DEFAULT") {
                default = Some(self.parse_column_default()?);
            } else if self.eat_keyword("ON") {
                self.expect_keyword("UPDATE")?;
                match self.parse_column_default()? {
                    ColumnDefault::CurrentTimestamp(fsp) => on_update = Some(fsp),
                    ColumnDefault::Value(_) => return self.expected("CURRENT_TIMESTAMP"),
                }
            } else if self.eat_keyword("PRIMARY") {
                self.expect_keyword("KEY")?;
            } else if self.eat_keyword("UNIQUE") {
                self.eat_keyword("KEY");
            } else if self.eat_keyword("COMMENT") {
                self.string_literal()?;
            } else if !(self.eat_keyword("KEY") || self.eat_keyword("AUTO_INCREMENT")) {
                break;
            }
        }

        Ok(ColumnDef {
            name,
            ty,
            nullable,
            default,
            on_update,
        })
    }

    fn parse_column_default(&mut self) -> Result<ColumnDefault, ParseError> {
        let is_now = ["CURRENT_TIMESTAMP", "NOW", "LOCALTIME", "LOCALTIMESTAMP"]
            .iter()
            .any(|kw| self.peek().is_keyword(kw));
        if is_now {
            self.advance();
            let mut fsp = 0;
            if self.eat(&Token::LParen) {
                if *self.peek() != Token::RParen {
                    fsp = self.number_u32()?;
                }
                self.expect(Token::RParen, "')'")?;
            }
            return Ok(ColumnDefault::CurrentTimestamp(fsp));
        }
        let expr = self.parse_expr_bp(BP_UNARY)?;
        Ok(ColumnDefault::Value(expr))
    }

    fn parse_type_attribute(&mut self, ty: &mut SqlType) -> Result<bool, ParseError> {
        if self.eat_keyword("UNSIGNED") {
            ty.unsigned = true;
        } else if self.eat_keyword("SIGNED") {
            ty.unsigned = false;
        } else if self.eat_keyword("ZEROFILL") {
            ty.zerofill = true;
            ty.unsigned = true;
        } else if self.eat_keyword("BINARY") {
            ty.binary = true;
        } else if let Some(cs) = self.opt_charset_clause()? {
            ty.charset = Some(cs);
        } else if self.eat_keyword("COLLATE") {
            ty.collation = Some(self.name_or_string()?);
        } else {
            return Ok(false);
        }
        Ok(true)
    }

    fn parse_sql_type(&mut self) -> Result<SqlType, ParseError> {
        let position = self.position();
        let name = self.ident()?.to_ascii_lowercase();

        let kind = match name.as_str() {
            "bit" => SqlTypeKind::Bit,
            "tinyint" => SqlTypeKind::TinyInt,
            "smallint" => SqlTypeKind::SmallInt,
            "mediumint" => SqlTypeKind::MediumInt,
            "int" | "integer" => SqlTypeKind::Int,
            "bigint" => SqlTypeKind::BigInt,
            "bool" | "boolean" => SqlTypeKind::Bool,
            "float" => SqlTypeKind::Float,
            "double" | "real" => {
                self.eat_keyword("PRECISION");
                SqlTypeKind::Double
            }
            "decimal" | "numeric" | "dec" | "fixed" => SqlTypeKind::Decimal,
            "date" => SqlTypeKind::Date,
            "datetime" => SqlTypeKind::Datetime,
            "timestamp" => SqlTypeKind::Timestamp,
            "time" => SqlTypeKind::Time,
            "year" => SqlTypeKind::Year,
            "char" | "character" => {
                if self.eat_keyword("VARYING") {
                    SqlTypeKind::Varchar
                } else {
                    SqlTypeKind::Char
                }
            }
            "varchar" => SqlTypeKind::Varchar,
            "binary" => SqlTypeKind::Binary,
            "varbinary" => SqlTypeKind::VarBinary,
            "tinytext" => SqlTypeKind::TinyText,
            "text" => SqlTypeKind::Text,
            "mediumtext" => SqlTypeKind::MediumText,
            "longtext" => SqlTypeKind::LongText,
            "tinyblob" => SqlTypeKind::TinyBlob,
            "blob" => SqlTypeKind::Blob,
            "mediumblob" => SqlTypeKind::MediumBlob,
            "longblob" => SqlTypeKind::LongBlob,
            "enum" => SqlTypeKind::Enum,
            "set" => SqlTypeKind::Set,
            "json" => SqlTypeKind::Json,
            _ => {
                return Err(ParseError::Unsupported {
                    message: format!("column type '{}'", name),
                    position,
                });
            }
        };

        let mut ty = SqlType::new(kind);
        match kind {
            SqlTypeKind::Float | SqlTypeKind::Double | SqlTypeKind::Decimal => {
                let (m, d) = self.opt_precision()?;
                ty.length = m;
                ty.scale = d;
            }
            SqlTypeKind::Enum | SqlTypeKind::Set => {
                self.expect(Token::LParen, "'('")?;
                loop {
                    ty.elems.push(self.string_literal()?);
                    if !self.eat(&Token::Comma) {
                        break;
                    }
                }
                self.expect(Token::RParen, "')'")?;
            }
            SqlTypeKind::Json
            | SqlTypeKind::Date
            | SqlTypeKind::Bool
            | SqlTypeKind::TinyText
            | SqlTypeKind::MediumText
            | SqlTypeKind::LongText
            | SqlTypeKind::TinyBlob
            | SqlTypeKind::MediumBlob
            | SqlTypeKind::LongBlob => {}
            _ => ty.length = self.opt_length()?,
        }
        Ok(ty)
    }

    fn parse_drop_table(&mut self) -> Result<DropTableStmt, ParseError> {
        let if_exists = if self.eat_keyword("IF") {
            self.expect_keyword("EXISTS")?;
            true
        } else {
            false
        };
        Ok(DropTableStmt {
            table_name: self.ident()?,
            if_exists,
        })
    }

    fn parse_set(&mut self) -> Result<SetStmt, ParseError> {
        let mut assignments = Vec::new();
        loop {
            assignments.push(self.parse_set_assignment()?);
            if !self.eat(&Token::Comma) {
                break;
            }
        }
        Ok(SetStmt { assignments })
    }

    fn parse_set_assignment(&mut self) -> Result<SetAssignment, ParseError> {
        if self.eat_keyword("NAMES") {
            let charset = self.name_or_string()?;
            let collation = if self.eat_keyword("COLLATE") {
                Some(self.name_or_string()?)
            } else {
                None
            };
            return Ok(SetAssignment::Names { charset, collation });
        }
        if let Some(charset) = self.opt_charset_clause()? {
            return Ok(SetAssignment::Names {
                charset,
                collation: None,
            });
        }

        let name = match self.advance() {
            Token::SysVar(name) => name,
            Token::UserVar(name) => format!("@{}", name),
            Token::Ident(scope)
                if scope.eq_ignore_ascii_case("SESSION")
                    || scope.eq_ignore_ascii_case("LOCAL")
                    || scope.eq_ignore_ascii_case("GLOBAL") =>
            {
                self.ident()?
            }
            Token::Ident(name) | Token::QuotedIdent(name) => name,
            other => {
                return Err(ParseError::Expected {
                    expected: "variable name".into(),
                    found: Some(format!("{:?}", other)),
                    position: self.position(),
                });
            }
        };
        if !self.eat(&Token::Eq) {
            self.expect(Token::Assign, "'='")?;
        }
        let value = self.parse_expr()?;
        Ok(SetAssignment::Variable { name, value })
    }

    // ---------- expressions ----------

    pub fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        self.parse_expr_bp(BP_OR)
    }

    fn parse_expr_bp(&mut self, min_bp: u8) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_prefix()?;

        while let Some(bp) = self.infix_bp() {
            if bp < min_bp {
                break;
            }
            lhs = self.parse_infix(lhs, bp)?;
        }

        Ok(lhs)
    }

    fn infix_bp(&self) -> Option<u8> {
        let tok = self.peek();
        let bp = match tok {
            Token::OrOr => BP_OR,
            Token::AndAnd => BP_AND,
            Token::Eq
            | Token::NullSafeEq
            | Token::NotEq
            | Token::Lt
            | Token::Le
            | Token::Gt
            | Token::Ge => BP_CMP,
            Token::Pipe => BP_BIT_OR,
            Token::Ampersand => BP_BIT_AND,
            Token::ShiftLeft | Token::ShiftRight => BP_SHIFT,
            Token::Plus | Token::Minus => BP_ADD,
            Token::Star | Token::Slash | Token::Percent => BP_MUL,
            Token::Caret => BP_BIT_XOR,
            Token::Ident(kw) => match kw.to_ascii_uppercase().as_str() {
                "OR" => BP_OR,
                "XOR" => BP_XOR,
                "AND" => BP_AND,
                "IS" | "LIKE" | "REGEXP" | "RLIKE" | "IN" | "BETWEEN" => BP_CMP,
                "NOT" => {
                    let next = self.peek_at(1);
                    if ["LIKE", "REGEXP", "RLIKE", "IN", "BETWEEN"]
                        .iter()
                        .any(|k| next.is_keyword(k))
                    {
                        BP_CMP
                    } else {
                        return None;
                    }
                }
                "DIV" | "MOD" => BP_MUL,
                _ => return None,
            },
            _ => return None,
        };
        Some(bp)
    }

    fn parse_infix(&mut self, lhs: Expr, bp: u8) -> Result<Expr, ParseError> {
        let tok = self.advance();

        let op = match &tok {
            Token::OrOr => BinaryOp::Or,
            Token::AndAnd => BinaryOp::And,
            Token::Eq => BinaryOp::Eq,
            Token::NullSafeEq => BinaryOp::NullSafeEq,
            Token::NotEq => BinaryOp::Neq,
            Token::Lt => BinaryOp::Lt,
            Token::Le => BinaryOp::Lte,
            Token::Gt => BinaryOp::Gt,
            Token::Ge => BinaryOp::Gte,
            Token::Pipe => BinaryOp::BitOr,
            Token::Ampersand => BinaryOp::BitAnd,
            Token::ShiftLeft => BinaryOp::ShiftLeft,
            Token::ShiftRight => BinaryOp::ShiftRight,
            Token::Plus => BinaryOp::Add,
            Token::Minus => BinaryOp::Sub,
            Token::Star => BinaryOp::Mul,
            Token::Slash => BinaryOp::Div,
            Token::Percent => BinaryOp::Mod,
            Token::Caret => BinaryOp::BitXor,
            Token::Ident(kw) => match kw.to_ascii_uppercase().as_str() {
                "OR" => BinaryOp::Or,
                "XOR" => BinaryOp::Xor,
                "AND" => BinaryOp::And,
                "DIV" => BinaryOp::IntDiv,
                "MOD" => BinaryOp::Mod,
                "IS" => return self.parse_is(lhs),
                "NOT" => return self.parse_predicate(lhs, true),
                _ => {
                    self.pos -= 1;
                    return self.parse_predicate(lhs, false);
                }
            },
            other => {
                return Err(ParseError::UnexpectedToken {
                    token: other.clone(),
                    position: self.position(),
                });
            }
        };

        let rhs = self.parse_expr_bp(bp + 1)?;
        Ok(Expr::Binary {
            left: Box::new(lhs),
            op,
            right: Box::new(rhs),
        })
    }

    fn parse_is(&mut self, lhs: Expr) -> Result<Expr, ParseError> {
        let negated = self.eat_keyword("NOT");
        let expr = Box::new(lhs);
        if self.eat_keyword("NULL") || self.eat_keyword("UNKNOWN") {
            Ok(Expr::IsNull { expr, negated })
        } else if self.eat_keyword("TRUE") {
            Ok(Expr::IsBool {
                expr,
                value: true,
                negated,
            })
        } else if self.eat_keyword("FALSE") {
            Ok(Expr::IsBool {
                expr,
                value: false,
                negated,
            })
        } else {
            self.expected("NULL, TRUE or FALSE")
        }
    }

    fn parse_predicate(&mut self, lhs: Expr, negated: bool) -> Result<Expr, ParseError> {
        let expr = Box::new(lhs);
        if self.eat_keyword("LIKE") {
            let pattern = Box::new(self.parse_expr_bp(BP_BIT_OR)?);
            let escape = if self.eat_keyword("ESCAPE") {
                Some(Box::new(self.parse_prefix()?))
            } else {
                None
            };
            return Ok(Expr::Like {
                expr,
                pattern,
                escape,
                negated,
            });
        }
        if self.eat_keyword("REGEXP") || self.eat_keyword("RLIKE") {
            let pattern = Box::new(self.parse_expr_bp(BP_BIT_OR)?);
            return Ok(Expr::Regexp {
                expr,
                pattern,
                negated,
            });
        }
        if self.eat_keyword("IN") {
            self.expect(Token::LParen, "'('")?;
            if self.peek().is_keyword("SELECT") {
                return self.unsupported("subquery");
            }
            if self.peek() == &Token::RParen {
                return self.expected("expression in IN list");
            }
            let list = self.parse_expr_list(Token::RParen)?;
            return Ok(Expr::InList {
                expr,
                list,
                negated,
            });
        }
        if self.eat_keyword("BETWEEN") {
            let low = Box::new(self.parse_expr_bp(BP_BIT_OR)?);
            self.expect_keyword("AND")?;
            let high = Box::new(self.parse_expr_bp(BP_BIT_OR)?);
            return Ok(Expr::Between {
                expr,
                low,
                high,
                negated,
            });
        }
        self.expected("LIKE, REGEXP, IN or BETWEEN")
    }

    fn parse_expr_list(&mut self, close: Token) -> Result<Vec<Expr>, ParseError> {
        let mut out = Vec::new();
        if self.eat(&close) {
            return Ok(out);
        }
        loop {
            out.push(self.parse_expr()?);
            if !self.eat(&Token::Comma) {
                break;
            }
        }
        self.expect(close, "')'")?;
        Ok(out)
    }

    fn parse_prefix(&mut self) -> Result<Expr, ParseError> {
        let position = self.position();
        match self.peek().clone() {
            Token::Minus => {
                self.advance();
                let expr = self.parse_expr_bp(BP_UNARY)?;
                Ok(Expr::Unary {
                    op: UnaryOp::Minus,
                    expr: Box::new(expr),
                })
            }
            Token::Plus => {
                self.advance();
                let expr = self.parse_expr_bp(BP_UNARY)?;
                Ok(Expr::Unary {
                    op: UnaryOp::Plus,
                    expr: Box::new(expr),
                })
            }
            Token::Tilde => {
                self.advance();
                let expr = self.parse_expr_bp(BP_UNARY)?;
                Ok(Expr::Unary {
                    op: UnaryOp::BitNot,
                    expr: Box::new(expr),
                })
            }
            Token::Bang => {
                self.advance();
                let expr = self.parse_expr_bp(BP_BANG)?;
                Ok(Expr::Unary {
                    op: UnaryOp::Not,
                    expr: Box::new(expr),
                })
            }
            Token::Ident(kw) if kw.eq_ignore_ascii_case("NOT") => {
                self.advance();
                let expr = self.parse_expr_bp(BP_NOT)?;
                Ok(Expr::Unary {
                    op: UnaryOp::Not,
                    expr: Box::new(expr),
                })
            }
            Token::Ident(kw)
                if kw.eq_ignore_ascii_case("BINARY") && *self.peek_at(1) != Token::LParen =>
            {
                self.advance();
                let expr = self.parse_expr_bp(BP_BINARY)?;
                Ok(Expr::Cast {
                    expr: Box::new(expr),
                    target: CastTarget::new(CastKind::Binary),
                })
            }
            Token::EOF => Err(ParseError::UnexpectedEOF { position }),
            _ => self.parse_primary(),
        }
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let position = self.position();
        match self.advance() {
            // ---------- literals ----------
            Token::Int(s) => Ok(Expr::Literal(Literal::Integer(s))),
            Token::Decimal(s) => Ok(Expr::Literal(Literal::Decimal(s))),
            Token::Float(s) => Ok(Expr::Literal(Literal::Float(s))),
            Token::String(s) => Ok(Expr::Literal(Literal::String {
                value: s,
                introducer: None,
            })),
            Token::HexString(s) => Ok(Expr::Literal(Literal::Hex(s))),
            Token::BitString(s) => Ok(Expr::Literal(Literal::Bit(s))),
            Token::UserVar(name) => Ok(Expr::UserVar(name)),

            Token::LParen => {
                if self.peek().is_keyword("SELECT") {
                    return self.unsupported("subquery");
                }
                let expr = self.parse_expr()?;
                if *self.peek() == Token::Comma {
                    return self.unsupported("row constructor");
                }
                self.expect(Token::RParen, "')'")?;
                Ok(expr)
            }

            Token::QuotedIdent(name) => self.parse_column_tail(name),
            Token::Ident(word) => self.parse_word(word),

            other => Err(ParseError::UnexpectedToken {
                token: other,
                position,
            }),
        }
    }

    fn parse_word(&mut self, word: String) -> Result<Expr, ParseError> {
        let upper = word.to_ascii_uppercase();
        let next_is_paren = *self.peek() == Token::LParen;

        match upper.as_str() {
            "NULL" => return Ok(Expr::Literal(Literal::Null)),
            "TRUE" => return Ok(Expr::Literal(Literal::Bool(true))),
            "FALSE" => return Ok(Expr::Literal(Literal::Bool(false))),
            "CASE" => return self.parse_case(),
            "EXISTS" | "SELECT" => return self.unsupported("subquery"),
            "DATE" | "TIME" | "TIMESTAMP" if matches!(self.peek(), Token::String(_)) => {
                let value = self.string_literal()?;
                let lit = match upper.as_str() {
                    "DATE" => Literal::Date(value),
                    "TIME" => Literal::Time(value),
                    _ => Literal::Timestamp(value),
                };
                return Ok(Expr::Literal(lit));
            }
            "INTERVAL" if !next_is_paren => {
                return self.unsupported("INTERVAL expression");
            }
            _ => {}
        }

        if word.starts_with('_') && matches!(self.peek(), Token::String(_)) {
            let value = self.string_literal()?;
            return Ok(Expr::Literal(Literal::String {
                value,
                introducer: Some(word[1..].to_ascii_lowercase()),
            }));
        }

        if next_is_paren {
            self.advance();
            return self.parse_call(word.to_ascii_lowercase());
        }

        let lower = word.to_ascii_lowercase();
        if NILADIC_FUNCTIONS.contains(&lower.as_str()) {
            return Ok(Expr::Function {
                name: lower,
                args: Vec::new(),
                distinct: false,
            });
        }

        self.parse_column_tail(word)
    }

    fn parse_column_tail(&mut self, first: String) -> Result<Expr, ParseError> {
        if !self.eat(&Token::Dot) {
            return Ok(Expr::Column {
                table: None,
                name: first,
            });
        }
        if self.eat(&Token::Star) {
            return Ok(Expr::Wildcard { table: Some(first) });
        }
        let name = self.ident()?;
        Ok(Expr::Column {
            table: Some(first),
            name,
        })
    }

    fn parse_case(&mut self) -> Result<Expr, ParseError> {
        let operand = if self.peek().is_keyword("WHEN") {
            None
        } else {
            Some(Box::new(self.parse_expr()?))
        };

        let mut branches = Vec::new();
        while self.eat_keyword("WHEN") {
            let cond = self.parse_expr()?;
            self.expect_keyword("THEN")?;
            let result = self.parse_expr()?;
            branches.push((cond, result));
        }
        if branches.is_empty() {
            return self.expected("WHEN");
        }

        let else_expr = if self.eat_keyword("ELSE") {
            Some(Box::new(self.parse_expr()?))
        } else {
            None
        };
        self.expect_keyword("END")?;

        Ok(Expr::Case {
            operand,
            branches,
            else_expr,
        })
    }

    // ---------- function calls ----------

    /// Called with the opening parenthesis already consumed.
    fn parse_call(&mut self, name: String) -> Result<Expr, ParseError> {
        match name.as_str() {
            "cast" => return self.parse_cast(),
            "convert" => return self.parse_convert(),
            "trim" => return self.parse_trim(),
            "position" => {
                let substr = self.parse_expr_bp(BP_BIT_OR)?;
                self.expect_keyword("IN")?;
                let s = self.parse_expr()?;
                self.expect(Token::RParen, "')'")?;
                return Ok(call("locate", vec![substr, s]));
            }
            "substring" | "substr" | "mid" => return self.parse_substring(name),
            "extract" => {
                let unit = self.ident()?;
                self.expect_keyword("FROM")?;
                let expr = self.parse_expr()?;
                self.expect(Token::RParen, "')'")?;
                return Ok(call("extract", vec![Expr::TimeUnit(unit.to_ascii_uppercase()), expr]));
            }
            "timestampadd" | "timestampdiff" | "get_format" => {
                let unit = self.ident()?;
                self.expect(Token::Comma, "','")?;
                let mut args = vec![Expr::TimeUnit(unit.to_ascii_uppercase())];
                args.extend(self.parse_expr_list(Token::RParen)?);
                return Ok(call(&name, args));
            }
            "char" => {
                let mut args = Vec::new();
                loop {
                    args.push(self.parse_expr()?);
                    if !self.eat(&Token::Comma) {
                        break;
                    }
                }
                if self.eat_keyword("USING") {
                    self.name_or_string()?;
                }
                self.expect(Token::RParen, "')'")?;
                return Ok(call("char", args));
            }
            "group_concat" => return self.parse_group_concat(),
            _ => {}
        }

        let distinct = self.eat_keyword("DISTINCT");
        if !distinct {
            self.eat_keyword("ALL");
        }

        if *self.peek() == Token::Star {
            self.advance();
            self.expect(Token::RParen, "')'")?;
            return Ok(Expr::Function {
                name,
                args: vec![Expr::Wildcard { table: None }],
                distinct,
            });
        }

        let args = self.parse_expr_list(Token::RParen)?;
        Ok(Expr::Function {
            name,
            args,
            distinct,
        })
    }

    fn parse_cast(&mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_expr()?;
        self.expect_keyword("AS")?;
        let target = self.parse_cast_target()?;
        self.expect(Token::RParen, "')'")?;
        Ok(Expr::Cast {
            expr: Box::new(expr),
            target,
        })
    }

    fn parse_convert(&mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_expr()?;
        if self.eat_keyword("USING") {
            let charset = self.name_or_string()?;
            self.expect(Token::RParen, "')'")?;
            return Ok(Expr::ConvertUsing {
                expr: Box::new(expr),
                charset,
            });
        }
        self.expect(Token::Comma, "',' or USING")?;
        let target = self.parse_cast_target()?;
        self.expect(Token::RParen, "')'")?;
        Ok(Expr::Cast {
            expr: Box::new(expr),
            target,
        })
    }

    fn parse_cast_target(&mut self) -> Result<CastTarget, ParseError> {
        let position = self.position();
        let word = self.ident()?.to_ascii_uppercase();
        let mut target = match word.as_str() {
            "BINARY" => CastTarget::new(CastKind::Binary),
            "CHAR" | "CHARACTER" | "NCHAR" => CastTarget::new(CastKind::Char),
            "DATE" => CastTarget::new(CastKind::Date),
            "DATETIME" => CastTarget::new(CastKind::Datetime),
            "TIME" => CastTarget::new(CastKind::Time),
            "DECIMAL" | "NUMERIC" => CastTarget::new(CastKind::Decimal),
            "SIGNED" => CastTarget::new(CastKind::Signed),
            "UNSIGNED" => CastTarget::new(CastKind::Unsigned),
            "JSON" => CastTarget::new(CastKind::Json),
            "DOUBLE" | "REAL" => CastTarget::new(CastKind::Double),
            _ => {
                return Err(ParseError::Unsupported {
                    message: format!("cast target '{}'", word),
                    position,
                });
            }
        };

        match target.kind {
            CastKind::Signed | CastKind::Unsigned => {
                if !self.eat_keyword("INTEGER") {
                    self.eat_keyword("INT");
                }
            }
            CastKind::Decimal => {
                let (m, d) = self.opt_precision()?;
                target.length = m;
                target.scale = d;
            }
            CastKind::Char => {
                target.length = self.opt_length()?;
                if self.eat_keyword("BINARY") {
                    target.charset = Some("binary".into());
                } else {
                    target.charset = self.opt_charset_clause()?;
                }
            }
            CastKind::Double | CastKind::Json | CastKind::Date => {}
            _ => target.length = self.opt_length()?,
        }
        Ok(target)
    }

    fn parse_trim(&mut self) -> Result<Expr, ParseError> {
        let direction = ["BOTH", "LEADING", "TRAILING"]
            .iter()
            .position(|kw| self.peek().is_keyword(kw));
        if direction.is_some() {
            self.advance();
        }

        if self.eat_keyword("FROM") {
            let s = self.parse_expr()?;
            self.expect(Token::RParen, "')'")?;
            let mut args = vec![s, Expr::Literal(Literal::String {
                value: " ".into(),
                introducer: None,
            })];
            if let Some(dir) = direction {
                args.push(Expr::Literal(Literal::Integer((dir + 1).to_string())));
            }
            return Ok(call("trim", args));
        }

        let first = self.parse_expr()?;
        if self.eat_keyword("FROM") {
            let s = self.parse_expr()?;
            self.expect(Token::RParen, "')'")?;
            let mut args = vec![s, first];
            if let Some(dir) = direction {
                args.push(Expr::Literal(Literal::Integer((dir + 1).to_string())));
            }
            return Ok(call("trim", args));
        }
        if direction.is_some() {
            return self.expected("FROM");
        }

        let mut args = vec![first];
        while self.eat(&Token::Comma) {
            args.push(self.parse_expr()?);
        }
        self.expect(Token::RParen, "')'")?;
        Ok(call("trim", args))
    }

    fn parse_substring(&mut self, name: String) -> Result<Expr, ParseError> {
        let s = self.parse_expr()?;
        if self.eat_keyword("FROM") {
            let pos = self.parse_expr()?;
            let mut args = vec![s, pos];
            if self.eat_keyword("FOR") {
                args.push(self.parse_expr()?);
            }
            self.expect(Token::RParen, "')'")?;
            return Ok(call(&name, args));
        }
        let mut args = vec![s];
        while self.eat(&Token::Comma) {
            args.push(self.parse_expr()?);
        }
        self.expect(Token::RParen, "')'")?;
        Ok(call(&name, args))
    }

    fn parse_group_concat(&mut self) -> Result<Expr, ParseError> {
        let distinct = self.eat_keyword("DISTINCT");
        let mut args = Vec::new();
        loop {
            args.push(self.parse_expr()?);
            if !self.eat(&Token::Comma) {
                break;
            }
        }
        if self.eat_keyword("ORDER") {
            self.expect_keyword("BY")?;
            loop {
                self.parse_expr()?;
                if !self.eat_keyword("ASC") {
                    self.eat_keyword("DESC");
                }
                if !self.eat(&Token::Comma) {
                    break;
                }
            }
        }
        if self.eat_keyword("SEPARATOR") {
            self.string_literal()?;
        }
        self.expect(Token::RParen, "')'")?;
        Ok(Expr::Function {
            name: "group_concat".into(),
            args,
            distinct,
        })
    }
}

fn call(name: &str, args: Vec<Expr>) -> Expr {
    Expr::Function {
        name: name.to_string(),
        args,
        distinct: false,
    }
}
