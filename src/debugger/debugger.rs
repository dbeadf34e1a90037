use std::cell::Cell;
use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum DebugLevel {
    Off = 0,
    Error = 1,
    Warn = 2,
    Info = 3,
    Debug = 4,
    Trace = 5,
}

impl DebugLevel {
    /// Out-of-range values saturate at `Trace`.
    pub fn from_u8(v: u8) -> Self {
        match v {
            0 => DebugLevel::Off,
            1 => DebugLevel::Error,
            2 => DebugLevel::Warn,
            3 => DebugLevel::Info,
            4 => DebugLevel::Debug,
            _ => DebugLevel::Trace,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "OFF" => Some(DebugLevel::Off),
            "ERROR" => Some(DebugLevel::Error),
            "WARN" => Some(DebugLevel::Warn),
            "INFO" => Some(DebugLevel::Info),
            "DEBUG" => Some(DebugLevel::Debug),
            "TRACE" => Some(DebugLevel::Trace),
            _ => None,
        }
    }
}

pub static DEBUG_LEVEL: AtomicU8 = AtomicU8::new(DebugLevel::Off as u8);

pub fn set_debug_level(level: DebugLevel) {
    DEBUG_LEVEL.store(level as u8, Ordering::Relaxed);
}

pub fn get_debug_level() -> DebugLevel {
    DebugLevel::from_u8(DEBUG_LEVEL.load(Ordering::Relaxed))
}

pub fn should_log(level: DebugLevel) -> bool {
    level != DebugLevel::Off && level <= get_debug_level()
}

thread_local! {
    static INDENT: Cell<usize> = const { Cell::new(0) };
}

pub fn indent() {
    INDENT.with(|i| i.set(i.get() + 1));
}

pub fn dedent() {
    INDENT.with(|i| i.set(i.get().saturating_sub(1)));
}

pub fn format_indent() -> String {
    INDENT.with(|i| "  ".repeat(i.get()))
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Component {
    Parser,
    Binder,
    Catalog,
    Infer,
    Session,
    Cli,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Component::Parser => "parser",
            Component::Binder => "binder",
            Component::Catalog => "catalog",
            Component::Infer => "infer",
            Component::Session => "session",
            Component::Cli => "cli",
        };
        f.write_str(name)
    }
}

pub fn level_label(level: DebugLevel) -> String {
    use color::*;
    match level {
        DebugLevel::Off => String::new(),
        DebugLevel::Error => format!("{}ERROR{}", RED, RESET),
        DebugLevel::Warn => format!("{}WARN{}", YELLOW, RESET),
        DebugLevel::Info => format!("{}INFO{}", GREEN, RESET),
        DebugLevel::Debug => format!("{}DEBUG{}", BLUE, RESET),
        DebugLevel::Trace => format!("{}TRACE{}", GRAY, RESET),
    }
}

pub mod color {
    pub const RED: &str = "\x1b[31m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const GREEN: &str = "\x1b[32m";
    pub const BLUE: &str = "\x1b[34m";
    pub const GRAY: &str = "\x1b[90m";
    pub const RESET: &str = "\x1b[0m";
}
