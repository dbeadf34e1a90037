#![allow(dead_code)]

use exprtype::types::{Charset, FieldTypeFlag, FieldTypeTp};

/// Table every fixture expression is evaluated against.
pub const FIXTURE_DDL: &str = "
CREATE TABLE t (
    c_bit bit(10),
    c_int_d int,
    c_uint_d int unsigned,
    c_bigint_d bigint,
    c_ubigint_d bigint unsigned,
    c_float_d float,
    c_ufloat_d float unsigned,
    c_double_d double,
    c_udouble_d double unsigned,
    c_decimal decimal(6, 3),
    c_udecimal decimal(10, 3) unsigned,
    c_decimal_d decimal,
    c_udecimal_d decimal unsigned,
    c_datetime datetime(2),
    c_datetime_d datetime,
    c_time time(3),
    c_time_d time,
    c_date date,
    c_timestamp timestamp(4) DEFAULT CURRENT_TIMESTAMP(4),
    c_timestamp_d timestamp DEFAULT CURRENT_TIMESTAMP,
    c_char char(20),
    c_bchar char(20) binary,
    c_varchar varchar(20),
    c_bvarchar varchar(20) binary,
    c_text_d text,
    c_btext_d text binary,
    c_binary binary(20),
    c_varbinary varbinary(20),
    c_blob_d blob,
    c_set set('a', 'b', 'c'),
    c_enum enum('a', 'b', 'c'),
    c_json JSON,
    c_year year
)";

pub const NONE: FieldTypeFlag = FieldTypeFlag::EMPTY;
pub const BIN: FieldTypeFlag = FieldTypeFlag::BINARY;
pub const UNS: FieldTypeFlag = FieldTypeFlag::UNSIGNED;
pub const BIN_UNS: FieldTypeFlag =
    FieldTypeFlag::from_bits(FieldTypeFlag::BINARY.bits() | FieldTypeFlag::UNSIGNED.bits());
pub const BIN_BOOL: FieldTypeFlag =
    FieldTypeFlag::from_bits(FieldTypeFlag::BINARY.bits() | FieldTypeFlag::IS_BOOLEAN.bits());
pub const BIN_JSON: FieldTypeFlag =
    FieldTypeFlag::from_bits(FieldTypeFlag::BINARY.bits() | FieldTypeFlag::PARSE_TO_JSON.bits());
pub const UNS_ZF: FieldTypeFlag =
    FieldTypeFlag::from_bits(FieldTypeFlag::UNSIGNED.bits() | FieldTypeFlag::ZEROFILL.bits());

/// Expected descriptor of `SELECT <sql> FROM t`; `-1` marks an unspecified width.
#[derive(Debug, Clone, Copy)]
pub struct TypeCase {
    pub sql: &'static str,
    pub tp: FieldTypeTp,
    pub charset: Charset,
    pub flags: FieldTypeFlag,
    pub flen: i64,
    pub decimal: i64,
}

pub const fn case(
    sql: &'static str,
    tp: FieldTypeTp,
    charset: Charset,
    flags: FieldTypeFlag,
    flen: i64,
    decimal: i64,
) -> TypeCase {
    TypeCase {
        sql,
        tp,
        charset,
        flags,
        flen,
        decimal,
    }
}
