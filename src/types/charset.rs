//! Character sets and their collations.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use maplit::hashmap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Charset {
    Binary,
    Utf8,
    Utf8mb4,
    Latin1,
    Ascii,
}

pub const COLLATION_BINARY: &str = "binary";

static CHARSETS: LazyLock<HashMap<&'static str, Charset>> = LazyLock::new(|| {
    hashmap! {
        "binary" => Charset::Binary,
        "utf8" => Charset::Utf8,
        "utf8mb3" => Charset::Utf8,
        "utf8mb4" => Charset::Utf8mb4,
        "latin1" => Charset::Latin1,
        "ascii" => Charset::Ascii,
    }
});

static COLLATIONS: LazyLock<HashMap<&'static str, Charset>> = LazyLock::new(|| {
    hashmap! {
        "binary" => Charset::Binary,
        "utf8_bin" => Charset::Utf8,
        "utf8_general_ci" => Charset::Utf8,
        "utf8_unicode_ci" => Charset::Utf8,
        "utf8mb4_bin" => Charset::Utf8mb4,
        "utf8mb4_general_ci" => Charset::Utf8mb4,
        "utf8mb4_unicode_ci" => Charset::Utf8mb4,
        "utf8mb4_0900_ai_ci" => Charset::Utf8mb4,
        "latin1_bin" => Charset::Latin1,
        "latin1_swedish_ci" => Charset::Latin1,
        "ascii_bin" => Charset::Ascii,
        "ascii_general_ci" => Charset::Ascii,
    }
});

impl Charset {
    pub fn from_name(name: &str) -> Option<Charset> {
        CHARSETS.get(name.to_ascii_lowercase().as_str()).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Charset::Binary => "binary",
            Charset::Utf8 => "utf8",
            Charset::Utf8mb4 => "utf8mb4",
            Charset::Latin1 => "latin1",
            Charset::Ascii => "ascii",
        }
    }

    pub fn default_collation(self) -> &'static str {
        match self {
            Charset::Binary => COLLATION_BINARY,
            Charset::Utf8 => "utf8_bin",
            Charset::Utf8mb4 => "utf8mb4_bin",
            Charset::Latin1 => "latin1_bin",
            Charset::Ascii => "ascii_bin",
        }
    }

    pub fn is_binary(self) -> bool {
        self == Charset::Binary
    }
}

pub fn lookup_collation(name: &str) -> Option<(Charset, &'static str)> {
    let lower = name.to_ascii_lowercase();
    COLLATIONS
        .get_key_value(lower.as_str())
        .map(|(name, cs)| (*cs, *name))
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
