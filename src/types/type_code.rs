//! Base type codes and their evaluation classes.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldTypeTp {
    Null,
    Tiny,
    Short,
    Int24,
    Long,
    Longlong,
    Float,
    Double,
    NewDecimal,
    Bit,
    Year,
    Date,
    Datetime,
    Timestamp,
    Duration,
    String,
    Varchar,
    VarString,
    TinyBlob,
    Blob,
    MediumBlob,
    LongBlob,
    Set,
    Enum,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EvalType {
    Int,
    Real,
    Decimal,
    String,
    Datetime,
    Timestamp,
    Duration,
    Json,
}

impl EvalType {
    pub fn is_string_kind(self) -> bool {
        matches!(
            self,
            EvalType::String
                | EvalType::Datetime
                | EvalType::Timestamp
                | EvalType::Duration
                | EvalType::Json
        )
    }
}

impl FieldTypeTp {
    pub fn eval_type(self) -> EvalType {
        use FieldTypeTp::*;
        match self {
            Tiny | Short | Int24 | Long | Longlong | Bit | Year => EvalType::Int,
            Float | Double => EvalType::Real,
            NewDecimal => EvalType::Decimal,
            Date | Datetime => EvalType::Datetime,
            Timestamp => EvalType::Timestamp,
            Duration => EvalType::Duration,
            Json => EvalType::Json,
            Null | String | Varchar | VarString | TinyBlob | Blob | MediumBlob | LongBlob
            | Set | Enum => EvalType::String,
        }
    }

    pub fn is_integer(self) -> bool {
        use FieldTypeTp::*;
        matches!(self, Tiny | Short | Int24 | Long | Longlong)
    }

    pub fn is_blob(self) -> bool {
        use FieldTypeTp::*;
        matches!(self, TinyBlob | Blob | MediumBlob | LongBlob)
    }

    pub fn is_char(self) -> bool {
        matches!(self, FieldTypeTp::String | FieldTypeTp::Varchar)
    }

    pub fn is_varchar(self) -> bool {
        matches!(self, FieldTypeTp::Varchar | FieldTypeTp::VarString)
    }

    pub fn is_string(self) -> bool {
        self.is_char() || self.is_varchar() || self.is_blob()
    }

    pub fn is_temporal(self) -> bool {
        use FieldTypeTp::*;
        matches!(self, Date | Datetime | Timestamp | Duration)
    }

    pub fn name(self) -> &'static str {
        use FieldTypeTp::*;
        match self {
            Null => "null",
            Tiny => "tinyint",
            Short => "smallint",
            Int24 => "mediumint",
            Long => "int",
            Longlong => "bigint",
            Float => "float",
            Double => "double",
            NewDecimal => "decimal",
            Bit => "bit",
            Year => "year",
            Date => "date",
            Datetime => "datetime",
            Timestamp => "timestamp",
            Duration => "time",
            String => "char",
            Varchar => "varchar",
            VarString => "var_string",
            TinyBlob => "tinyblob",
            Blob => "blob",
            MediumBlob => "mediumblob",
            LongBlob => "longblob",
            Set => "set",
            Enum => "enum",
            Json => "json",
        }
    }
}

impl fmt::Display for FieldTypeTp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
