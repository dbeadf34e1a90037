//! Column metadata and the mapping from declared column types to descriptors.

use crate::catalog::errors::CatalogError;
use crate::catalog::ids::ColumnId;
use crate::frontend::sql::ast::{ColumnDef, ColumnDefault, Expr, Literal, SqlType, SqlTypeKind};
use crate::types::charset::lookup_collation;
use crate::types::consts::*;
use crate::types::{Charset, FieldType, FieldTypeFlag, FieldTypeTp};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMeta {
    pub id: ColumnId,
    pub name: String,
    pub field_type: FieldType,
    pub nullable: bool,
    pub has_default: bool,
}

pub fn column_field_type(def: &ColumnDef, table_charset: Charset) -> Result<FieldType, CatalogError> {
    let ty = &def.ty;
    let invalid = |reason: String| CatalogError::InvalidType(def.name.clone(), reason);

    let ft = match ty.kind {
        SqlTypeKind::Bit => {
            let n = ty.length.unwrap_or(1);
            if !(1..=64).contains(&n) {
                return Err(invalid(format!("bit width {} out of range 1..64", n)));
            }
            FieldType::new(FieldTypeTp::Bit)
                .with_width(n, 0)
                .with_flags(FieldTypeFlag::UNSIGNED)
        }

        SqlTypeKind::Bool => FieldType::new(FieldTypeTp::Tiny).with_width(1, 0),

        SqlTypeKind::TinyInt
        | SqlTypeKind::SmallInt
        | SqlTypeKind::MediumInt
        | SqlTypeKind::Int
        | SqlTypeKind::BigInt => {
            let (tp, signed_width, unsigned_width) = match ty.kind {
                SqlTypeKind::TinyInt => (FieldTypeTp::Tiny, 4, 3),
                SqlTypeKind::SmallInt => (FieldTypeTp::Short, 6, 5),
                SqlTypeKind::MediumInt => (FieldTypeTp::Int24, 9, 8),
                SqlTypeKind::Int => (FieldTypeTp::Long, 11, 10),
                _ => (FieldTypeTp::Longlong, 20, 20),
            };
            let default_width = if ty.unsigned { unsigned_width } else { signed_width };
            let width = ty.length.unwrap_or(default_width);
            if width > 255 {
                return Err(invalid(format!("display width {} exceeds 255", width)));
            }
            FieldType::new(tp)
                .with_width(width, 0)
                .with_flags(numeric_flags(ty))
        }

        SqlTypeKind::Float | SqlTypeKind::Double => {
            let (tp, default_width) = match (ty.kind, ty.length, ty.scale) {
                // FLOAT(p) picks single or double precision by p
                (SqlTypeKind::Float, Some(p), None) if p > 24 => {
                    (FieldTypeTp::Double, MAX_DOUBLE_PRECISION_LENGTH)
                }
                (SqlTypeKind::Float, _, _) => (FieldTypeTp::Float, MAX_FLOAT_PRECISION_LENGTH),
                _ => (FieldTypeTp::Double, MAX_DOUBLE_PRECISION_LENGTH),
            };
            let mut ft = FieldType::new(tp).with_flags(numeric_flags(ty));
            match ty.scale {
                Some(d) => {
                    let m = ty.length.unwrap_or(default_width);
                    if d > MAX_DECIMAL_SCALE || d > m {
                        return Err(invalid(format!("invalid precision ({}, {})", m, d)));
                    }
                    ft = ft.with_width(m, d);
                }
                None => ft.flen = Some(default_width),
            }
            ft
        }

        SqlTypeKind::Decimal => {
            let m = ty.length.unwrap_or(DEFAULT_DECIMAL_WIDTH);
            let d = ty.scale.unwrap_or(0);
            if m > MAX_DECIMAL_WIDTH {
                return Err(invalid(format!(
                    "precision {} exceeds {}",
                    m, MAX_DECIMAL_WIDTH
                )));
            }
            if d > MAX_DECIMAL_SCALE {
                return Err(invalid(format!("scale {} exceeds {}", d, MAX_DECIMAL_SCALE)));
            }
            if d > m {
                return Err(invalid(format!("scale {} exceeds precision {}", d, m)));
            }
            FieldType::new(FieldTypeTp::NewDecimal)
                .with_width(m, d)
                .with_flags(numeric_flags(ty))
        }

        SqlTypeKind::Year => {
            if matches!(ty.length, Some(n) if n != 4) {
                return Err(invalid("only YEAR(4) is supported".into()));
            }
            FieldType::new(FieldTypeTp::Year)
                .with_width(4, 0)
                .with_flags(FieldTypeFlag::UNSIGNED | FieldTypeFlag::ZEROFILL)
        }

        SqlTypeKind::Date => FieldType::new(FieldTypeTp::Date)
            .with_width(MAX_DATE_WIDTH, 0)
            .binary(),
        SqlTypeKind::Datetime => temporal(def, FieldTypeTp::Datetime, MAX_DATETIME_WIDTH_NO_FSP)?,
        SqlTypeKind::Timestamp => {
            temporal(def, FieldTypeTp::Timestamp, MAX_DATETIME_WIDTH_NO_FSP)?
        }
        SqlTypeKind::Time => temporal(def, FieldTypeTp::Duration, MAX_DURATION_WIDTH_NO_FSP)?,

        SqlTypeKind::Char | SqlTypeKind::Varchar => {
            let (tp, width) = if ty.kind == SqlTypeKind::Char {
                let n = ty.length.unwrap_or(1);
                if n > MAX_FIELD_CHAR_LENGTH {
                    return Err(invalid(format!("CHAR length {} exceeds 255", n)));
                }
                (FieldTypeTp::String, n)
            } else {
                let n = ty
                    .length
                    .ok_or_else(|| invalid("VARCHAR requires a length".into()))?;
                if n > MAX_FIELD_VARCHAR_LENGTH {
                    return Err(invalid(format!(
                        "VARCHAR length {} exceeds {}",
                        n, MAX_FIELD_VARCHAR_LENGTH
                    )));
                }
                (FieldTypeTp::Varchar, n)
            };
            text_column(def, tp, width, table_charset)?
        }

        SqlTypeKind::TinyText | SqlTypeKind::MediumText | SqlTypeKind::LongText => {
            let tp = match ty.kind {
                SqlTypeKind::TinyText => FieldTypeTp::TinyBlob,
                SqlTypeKind::MediumText => FieldTypeTp::MediumBlob,
                _ => FieldTypeTp::LongBlob,
            };
            text_column(def, tp, blob_tier_width(tp), table_charset)?
        }
        SqlTypeKind::Text => {
            let tp = blob_tier(ty.length);
            text_column(def, tp, blob_tier_width(tp), table_charset)?
        }

        SqlTypeKind::Binary => {
            let n = ty.length.unwrap_or(1);
            if n > MAX_FIELD_CHAR_LENGTH {
                return Err(invalid(format!("BINARY length {} exceeds 255", n)));
            }
            FieldType::new(FieldTypeTp::String).with_width(n, 0).binary()
        }
        SqlTypeKind::VarBinary => {
            let n = ty
                .length
                .ok_or_else(|| invalid("VARBINARY requires a length".into()))?;
            if n > MAX_FIELD_VARCHAR_LENGTH {
                return Err(invalid(format!(
                    "VARBINARY length {} exceeds {}",
                    n, MAX_FIELD_VARCHAR_LENGTH
                )));
            }
            FieldType::new(FieldTypeTp::Varchar).with_width(n, 0).binary()
        }

        SqlTypeKind::TinyBlob
        | SqlTypeKind::Blob
        | SqlTypeKind::MediumBlob
        | SqlTypeKind::LongBlob => {
            let tp = match ty.kind {
                SqlTypeKind::TinyBlob => FieldTypeTp::TinyBlob,
                SqlTypeKind::MediumBlob => FieldTypeTp::MediumBlob,
                SqlTypeKind::LongBlob => FieldTypeTp::LongBlob,
                _ => blob_tier(ty.length),
            };
            FieldType::new(tp)
                .with_width(blob_tier_width(tp), 0)
                .binary()
        }

        SqlTypeKind::Enum | SqlTypeKind::Set => {
            let tp = if ty.kind == SqlTypeKind::Enum {
                FieldTypeTp::Enum
            } else {
                FieldTypeTp::Set
            };
            let mut ft = text_column(def, tp, 0, table_charset)?;
            ft.flen = None;
            ft.elems = ty.elems.clone();
            ft
        }

        SqlTypeKind::Json => FieldType::new(FieldTypeTp::Json)
            .with_width(MAX_LONG_BLOB_WIDTH, 0)
            .binary(),
    };

    validate_default(def, &ft)?;
    Ok(ft)
}

fn numeric_flags(ty: &SqlType) -> FieldTypeFlag {
    let mut flags = FieldTypeFlag::EMPTY;
    flags.set(FieldTypeFlag::UNSIGNED, ty.unsigned || ty.zerofill);
    flags.set(FieldTypeFlag::ZEROFILL, ty.zerofill);
    flags
}

fn temporal(def: &ColumnDef, tp: FieldTypeTp, base_width: u32) -> Result<FieldType, CatalogError> {
    let fsp = def.ty.length.unwrap_or(0);
    if fsp > MAX_FSP {
        return Err(CatalogError::InvalidType(
            def.name.clone(),
            format!("fractional seconds precision {} exceeds {}", fsp, MAX_FSP),
        ));
    }
    let flen = if fsp > 0 { base_width + 1 + fsp } else { base_width };
    Ok(FieldType::new(tp).with_width(flen, fsp).binary())
}

fn text_column(
    def: &ColumnDef,
    tp: FieldTypeTp,
    width: u32,
    table_charset: Charset,
) -> Result<FieldType, CatalogError> {
    let ty = &def.ty;
    let invalid = |reason: String| CatalogError::InvalidType(def.name.clone(), reason);

    let declared = match &ty.charset {
        Some(name) => Some(
            Charset::from_name(name).ok_or_else(|| invalid(format!("unknown charset '{}'", name)))?,
        ),
        None => None,
    };
    let collation = match &ty.collation {
        Some(name) => {
            let (cs, coll) = lookup_collation(name)
                .ok_or_else(|| invalid(format!("unknown collation '{}'", name)))?;
            if declared.is_some_and(|d| d != cs) {
                return Err(invalid(format!(
                    "collation '{}' is not valid for charset '{}'",
                    name,
                    declared.map_or("", |d| d.name())
                )));
            }
            Some((cs, coll))
        }
        None => None,
    };

    let mut ft = FieldType::new(tp).with_width(width, 0);
    match collation {
        Some((cs, coll)) => {
            ft.charset = cs;
            ft.collation = coll;
        }
        None => ft.set_charset(declared.unwrap_or(table_charset)),
    }
    if ty.binary || ft.charset.is_binary() {
        ft.flags.insert(FieldTypeFlag::BINARY);
    }
    Ok(ft)
}

/// Smallest blob tier holding `n` bytes; plain `BLOB`/`TEXT` without a length is `Blob`.
fn blob_tier(n: Option<u32>) -> FieldTypeTp {
    match n {
        Some(n) if n <= TINY_BLOB_WIDTH => FieldTypeTp::TinyBlob,
        Some(n) if n > MEDIUM_BLOB_WIDTH => FieldTypeTp::LongBlob,
        Some(n) if n > BLOB_WIDTH => FieldTypeTp::MediumBlob,
        _ => FieldTypeTp::Blob,
    }
}

fn blob_tier_width(tp: FieldTypeTp) -> u32 {
    match tp {
        FieldTypeTp::TinyBlob => TINY_BLOB_WIDTH,
        FieldTypeTp::Blob => BLOB_WIDTH,
        FieldTypeTp::MediumBlob => MEDIUM_BLOB_WIDTH,
        _ => MAX_LONG_BLOB_WIDTH,
    }
}

fn validate_default(def: &ColumnDef, ft: &FieldType) -> Result<(), CatalogError> {
    let invalid = || CatalogError::InvalidDefault(def.name.clone());
    let is_datetime = matches!(ft.tp, FieldTypeTp::Datetime | FieldTypeTp::Timestamp);
    let fsp = ft.decimal.unwrap_or(0);

    match &def.default {
        Some(ColumnDefault::CurrentTimestamp(n)) if !is_datetime || *n != fsp => {
            return Err(invalid());
        }
        Some(ColumnDefault::Value(Expr::Literal(Literal::Null))) if !def.nullable => {
            return Err(invalid());
        }
        Some(ColumnDefault::Value(Expr::Literal(Literal::Null))) => {}
        Some(ColumnDefault::Value(_)) if ft.tp.is_blob() || ft.tp == FieldTypeTp::Json => {
            return Err(invalid());
        }
        _ => {}
    }

    match def.on_update {
        Some(n) if !is_datetime || n != fsp => Err(invalid()),
        _ => Ok(()),
    }
}
