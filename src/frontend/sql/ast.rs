#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Select(SelectStmt),
    CreateTable(CreateTableStmt),
    DropTable(DropTableStmt),
    Set(SetStmt),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectStmt {
    pub columns: Vec<SelectItem>,
    pub from: Option<FromItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectItem {
    pub expr: Expr,
    pub alias: Option<String>,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FromItem {
    pub name: String,
    pub alias: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateTableStmt {
    pub table_name: String,
    pub if_not_exists: bool,
    pub columns: Vec<ColumnDef>,
    pub charset: Option<String>,
    pub collation: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub name: String,
    pub ty: SqlType,
    pub nullable: bool, // default = true
    pub default: Option<ColumnDefault>,
    pub on_update: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ColumnDefault {
    Value(Expr),
    CurrentTimestamp(u32),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SqlType {
    pub kind: SqlTypeKind,
    pub length: Option<u32>,
    pub scale: Option<u32>,
    pub unsigned: bool,
    pub zerofill: bool,
    pub binary: bool,
    pub charset: Option<String>,
    pub collation: Option<String>,
    pub elems: Vec<String>,
}

impl SqlType {
    pub fn new(kind: SqlTypeKind) -> Self {
        Self {
            kind,
            length: None,
            scale: None,
            unsigned: false,
            zerofill: false,
            binary: false,
            charset: None,
            collation: None,
            elems: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlTypeKind {
    Bit,
    TinyInt,
    SmallInt,
    MediumInt,
    Int,
    BigInt,
    Bool,
    Float,
    Double,
    Decimal,
    Date,
    Datetime,
    Timestamp,
    Time,
    Year,
    Char,
    Varchar,
    Binary,
    VarBinary,
    TinyText,
    Text,
    MediumText,
    LongText,
    TinyBlob,
    Blob,
    MediumBlob,
    LongBlob,
    Enum,
    Set,
    Json,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DropTableStmt {
    pub table_name: String,
    pub if_exists: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SetStmt {
    pub assignments: Vec<SetAssignment>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SetAssignment {
    Names {
        charset: String,
        collation: Option<String>,
    },
    Variable {
        name: String,
        value: Expr,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Column {
        table: Option<String>,
        name: String,
    },
    Wildcard {
        table: Option<String>,
    },
    Literal(Literal),
    UserVar(String),
    TimeUnit(String),
    Unary {
        op: UnaryOp,
        expr: Box<Expr>,
    },
    Binary {
        left: Box<Expr>,
        op: BinaryOp,
        right: Box<Expr>,
    },
    Function {
        name: String,
        args: Vec<Expr>,
        distinct: bool,
    },
    Cast {
        expr: Box<Expr>,
        target: CastTarget,
    },
    ConvertUsing {
        expr: Box<Expr>,
        charset: String,
    },
    Case {
        operand: Option<Box<Expr>>,
        branches: Vec<(Expr, Expr)>,
        else_expr: Option<Box<Expr>>,
    },
    InList {
        expr: Box<Expr>,
        list: Vec<Expr>,
        negated: bool,
    },
    Between {
        expr: Box<Expr>,
        low: Box<Expr>,
        high: Box<Expr>,
        negated: bool,
    },
    Like {
        expr: Box<Expr>,
        pattern: Box<Expr>,
        escape: Option<Box<Expr>>,
        negated: bool,
    },
    Regexp {
        expr: Box<Expr>,
        pattern: Box<Expr>,
        negated: bool,
    },
    IsNull {
        expr: Box<Expr>,
        negated: bool,
    },
    IsBool {
        expr: Box<Expr>,
        value: bool,
        negated: bool,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Null,
    Bool(bool),
    Integer(String),
    Decimal(String),
    Float(String),
    String {
        value: String,
        introducer: Option<String>,
    },
    Hex(String),
    Bit(String),
    Date(String),
    Time(String),
    Timestamp(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CastTarget {
    pub kind: CastKind,
    pub length: Option<u32>,
    pub scale: Option<u32>,
    pub charset: Option<String>,
}

impl CastTarget {
    pub fn new(kind: CastKind) -> Self {
        Self {
            kind,
            length: None,
            scale: None,
            charset: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastKind {
    Binary,
    Char,
    Date,
    Datetime,
    Time,
    Decimal,
    Signed,
    Unsigned,
    Json,
    Double,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Eq,
    NullSafeEq,
    Neq,
    Gt,
    Gte,
    Lt,
    Lte,
    And,
    Or,
    Xor,
    Add,
    Sub,
    Mul,
    Div,
    IntDiv,
    Mod,
    BitAnd,
    BitOr,
    BitXor,
    ShiftLeft,
    ShiftRight,
}

impl BinaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Eq => "=",
            BinaryOp::NullSafeEq => "<=>",
            BinaryOp::Neq => "<>",
            BinaryOp::Gt => ">",
            BinaryOp::Gte => ">=",
            BinaryOp::Lt => "<",
            BinaryOp::Lte => "<=",
            BinaryOp::And => "AND",
            BinaryOp::Or => "OR",
            BinaryOp::Xor => "XOR",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::IntDiv => "DIV",
            BinaryOp::Mod => "MOD",
            BinaryOp::BitAnd => "&",
            BinaryOp::BitOr => "|",
            BinaryOp::BitXor => "^",
            BinaryOp::ShiftLeft => "<<",
            BinaryOp::ShiftRight => ">>",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Not,
    Minus,
    Plus,
    BitNot,
}
