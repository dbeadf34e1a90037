//! Width and scale limits shared by the inference rules.

pub const MAX_INT_WIDTH: u32 = 20;
pub const MAX_REAL_WIDTH: u32 = 23;
pub const MAX_FLOAT_PRECISION_LENGTH: u32 = 12;
pub const MAX_DOUBLE_PRECISION_LENGTH: u32 = 22;

pub const MAX_DECIMAL_WIDTH: u32 = 65;
pub const MAX_DECIMAL_SCALE: u32 = 30;
pub const DEFAULT_DECIMAL_WIDTH: u32 = 11;

pub const MAX_FSP: u32 = 6;
pub const MAX_DATE_WIDTH: u32 = 10;
pub const MAX_DATETIME_WIDTH_NO_FSP: u32 = 19;
pub const MAX_DATETIME_WIDTH_WITH_FSP: u32 = 26;
pub const MAX_DURATION_WIDTH_NO_FSP: u32 = 10;
pub const MAX_DURATION_WIDTH_WITH_FSP: u32 = 15;

pub const MAX_BLOB_WIDTH: u32 = 16_777_216;
pub const MAX_FIELD_VARCHAR_LENGTH: u32 = 65_535;
pub const MAX_FIELD_CHAR_LENGTH: u32 = 255;
pub const MEDIUM_BLOB_THRESHOLD: u32 = 65_536;
pub const MAX_LONG_BLOB_WIDTH: u32 = 4_294_967_295;

pub const TINY_BLOB_WIDTH: u32 = 255;
pub const BLOB_WIDTH: u32 = 65_535;
pub const MEDIUM_BLOB_WIDTH: u32 = 16_777_215;

pub const JSON_CAST_WIDTH: u32 = 4_194_304;
pub const JSON_IMPLICIT_CAST_WIDTH: u32 = 12_582_912;

/// Bytes per character assumed when a character count becomes a byte count.
pub const MAX_BYTES_PER_CHAR: u32 = 4;

pub const DEFAULT_DIV_PRECISION_INCREMENT: u32 = 4;
