use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FieldTypeFlag(u32);

impl FieldTypeFlag {
    pub const EMPTY: FieldTypeFlag = FieldTypeFlag(0);
    pub const BLOB: FieldTypeFlag = FieldTypeFlag(1 << 4);
    pub const UNSIGNED: FieldTypeFlag = FieldTypeFlag(1 << 5);
    pub const ZEROFILL: FieldTypeFlag = FieldTypeFlag(1 << 6);
    pub const BINARY: FieldTypeFlag = FieldTypeFlag(1 << 7);
    pub const ENUM: FieldTypeFlag = FieldTypeFlag(1 << 8);
    pub const SET: FieldTypeFlag = FieldTypeFlag(1 << 11);
    pub const PARSE_TO_JSON: FieldTypeFlag = FieldTypeFlag(1 << 18);
    pub const IS_BOOLEAN: FieldTypeFlag = FieldTypeFlag(1 << 19);

    const NAMES: [(FieldTypeFlag, &'static str); 8] = [
        (FieldTypeFlag::BLOB, "BLOB"),
        (FieldTypeFlag::UNSIGNED, "UNSIGNED"),
        (FieldTypeFlag::ZEROFILL, "ZEROFILL"),
        (FieldTypeFlag::BINARY, "BINARY"),
        (FieldTypeFlag::ENUM, "ENUM"),
        (FieldTypeFlag::SET, "SET"),
        (FieldTypeFlag::PARSE_TO_JSON, "PARSE_TO_JSON"),
        (FieldTypeFlag::IS_BOOLEAN, "IS_BOOLEAN"),
    ];

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn from_bits(bits: u32) -> Self {
        FieldTypeFlag(bits)
    }

    pub const fn contains(self, other: FieldTypeFlag) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn insert(&mut self, other: FieldTypeFlag) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: FieldTypeFlag) {
        self.0 &= !other.0;
    }

    pub fn set(&mut self, other: FieldTypeFlag, on: bool) {
        if on {
            self.insert(other);
        } else {
            self.remove(other);
        }
    }
}

impl BitOr for FieldTypeFlag {
    type Output = FieldTypeFlag;

    fn bitor(self, rhs: FieldTypeFlag) -> FieldTypeFlag {
        FieldTypeFlag(self.0 | rhs.0)
    }
}

impl BitOrAssign for FieldTypeFlag {
    fn bitor_assign(&mut self, rhs: FieldTypeFlag) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for FieldTypeFlag {
    type Output = FieldTypeFlag;

    fn bitand(self, rhs: FieldTypeFlag) -> FieldTypeFlag {
        FieldTypeFlag(self.0 & rhs.0)
    }
}

impl fmt::Display for FieldTypeFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("0");
        }
        let names: Vec<&str> = Self::NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();
        f.write_str(&names.join("|"))
    }
}
