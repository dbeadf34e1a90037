//! Session variables that influence type inference.

use std::fmt;

use crate::types::charset::lookup_collation;
use crate::types::consts::{DEFAULT_DIV_PRECISION_INCREMENT, MAX_DECIMAL_SCALE};
use crate::types::Charset;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub charset: Charset,
    pub collation: &'static str,
    pub div_precision_increment: u32,
    pub sql_mode: SqlMode,
    pub enable_noop_functions: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            charset: Charset::Utf8mb4,
            collation: Charset::Utf8mb4.default_collation(),
            div_precision_increment: DEFAULT_DIV_PRECISION_INCREMENT,
            sql_mode: SqlMode::default(),
            enable_noop_functions: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SqlMode {
    /// `NO_UNSIGNED_SUBTRACTION`: unsigned minus unsigned is signed.
    pub no_unsigned_subtraction: bool,
    modes: Vec<String>,
}

impl SqlMode {
    pub fn parse(text: &str) -> Self {
        let modes: Vec<String> = text
            .split(',')
            .map(|m| m.trim().to_ascii_uppercase())
            .filter(|m| !m.is_empty() && m != "DEFAULT")
            .collect();
        Self {
            no_unsigned_subtraction: modes.iter().any(|m| m == "NO_UNSIGNED_SUBTRACTION"),
            modes,
        }
    }

    pub fn contains(&self, mode: &str) -> bool {
        self.modes.iter().any(|m| m.eq_ignore_ascii_case(mode))
    }
}

impl fmt::Display for SqlMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.modes.join(","))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnknownVariable(String),
    InvalidValue { name: String, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownVariable(v) => write!(f, "unknown system variable '{}'", v),
            ConfigError::InvalidValue { name, value } => {
                write!(f, "variable '{}' can't be set to the value of '{}'", name, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl SessionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_names(&mut self, charset: &str, collation: Option<&str>) -> Result<(), ConfigError> {
        let invalid = |value: &str| ConfigError::InvalidValue {
            name: "names".into(),
            value: value.to_string(),
        };
        let cs = Charset::from_name(charset).ok_or_else(|| invalid(charset))?;
        let coll = match collation {
            Some(name) => match lookup_collation(name) {
                Some((owner, coll)) if owner == cs => coll,
                _ => return Err(invalid(name)),
            },
            None => cs.default_collation(),
        };
        self.charset = cs;
        self.collation = coll;
        Ok(())
    }

    /// Assigns a system variable. `session.`/`global.`/`local.` prefixes are ignored.
    pub fn set_variable(&mut self, name: &str, value: &str) -> Result<(), ConfigError> {
        let key = normalize(name);
        let invalid = || ConfigError::InvalidValue {
            name: key.clone(),
            value: value.to_string(),
        };

        match key.as_str() {
            "div_precision_increment" => {
                let n: u32 = value.trim().parse().map_err(|_| invalid())?;
                if n > MAX_DECIMAL_SCALE {
                    return Err(invalid());
                }
                self.div_precision_increment = n;
            }
            "sql_mode" => self.sql_mode = SqlMode::parse(value),
            "character_set_connection" | "names" => self.set_names(value, None)?,
            "collation_connection" => {
                let (cs, coll) = lookup_collation(value).ok_or_else(invalid)?;
                self.charset = cs;
                self.collation = coll;
            }
            "tidb_enable_noop_functions" => {
                self.enable_noop_functions = parse_switch(value).ok_or_else(invalid)?;
            }
            _ => return Err(ConfigError::UnknownVariable(key.clone())),
        }
        Ok(())
    }

    pub fn get_variable(&self, name: &str) -> Option<String> {
        match normalize(name).as_str() {
            "div_precision_increment" => Some(self.div_precision_increment.to_string()),
            "sql_mode" => Some(self.sql_mode.to_string()),
            "character_set_connection" => Some(self.charset.name().to_string()),
            "collation_connection" => Some(self.collation.to_string()),
            "tidb_enable_noop_functions" => Some(
                if self.enable_noop_functions { "ON" } else { "OFF" }.to_string(),
            ),
            _ => None,
        }
    }
}

fn normalize(name: &str) -> String {
    let lower = name.trim().to_ascii_lowercase();
    ["session.", "global.", "local."]
        .iter()
        .find_map(|prefix| lower.strip_prefix(prefix))
        .map(str::to_string)
        .unwrap_or(lower)
}

fn parse_switch(value: &str) -> Option<bool> {
    match value.trim().to_ascii_uppercase().as_str() {
        "1" | "ON" | "TRUE" => Some(true),
        "0" | "OFF" | "FALSE" => Some(false),
        _ => None,
    }
}
