#[macro_export]
macro_rules! db_log {
    ($level:expr, $component:expr, $($arg:tt)*) => {
        if $crate::debugger::debugger::should_log($level) {
            eprintln!(
                "{}{} [{}] {}",
                $crate::debugger::debugger::format_indent(),
                $crate::debugger::debugger::level_label($level),
                $component,
                format_args!($($arg)*)
            );
        }
    };
}

#[macro_export]
macro_rules! db_error {
    ($component:expr, $($arg:tt)*) => {
        $crate::db_log!($crate::debugger::DebugLevel::Error, $component, $($arg)*)
    };
}

#[macro_export]
macro_rules! db_warn {
    ($component:expr, $($arg:tt)*) => {
        $crate::db_log!($crate::debugger::DebugLevel::Warn, $component, $($arg)*)
    };
}

#[macro_export]
macro_rules! db_info {
    ($component:expr, $($arg:tt)*) => {
        $crate::db_log!($crate::debugger::DebugLevel::Info, $component, $($arg)*)
    };
}

#[macro_export]
macro_rules! db_debug {
    ($component:expr, $($arg:tt)*) => {
        $crate::db_log!($crate::debugger::DebugLevel::Debug, $component, $($arg)*)
    };
}

#[macro_export]
macro_rules! db_trace {
    ($component:expr, $($arg:tt)*) => {
        $crate::db_log!($crate::debugger::DebugLevel::Trace, $component, $($arg)*)
    };
}

#[macro_export]
macro_rules! db_scope {
    ($level:expr, $component:expr, $name:expr, $body:block) => {{
        let logged = $crate::debugger::debugger::should_log($level);
        if logged {
            $crate::db_log!($level, $component, "→ {}", $name);
            $crate::debugger::debugger::indent();
        }

        let result = $body;

        if logged {
            $crate::debugger::debugger::dedent();
            $crate::db_log!($level, $component, "← {}", $name);
        }

        result
    }};
}
