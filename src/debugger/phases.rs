//! Per-thread timeline of statement phases (parse, bind, infer).

use std::cell::RefCell;
use std::time::{Duration, Instant};

#[derive(Default)]
pub struct PhaseTracker {
    phases: Vec<Phase>,
    open: Vec<usize>,
}

struct Phase {
    name: String,
    depth: usize,
    start: Instant,
    elapsed: Option<Duration>,
}

impl PhaseTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, name: impl Into<String>) {
        self.open.push(self.phases.len());
        self.phases.push(Phase {
            name: name.into(),
            depth: self.open.len() - 1,
            start: Instant::now(),
            elapsed: None,
        });
    }

    /// Closes the innermost open phase; a stray call is ignored.
    pub fn end(&mut self) {
        if let Some(idx) = self.open.pop() {
            let phase = &mut self.phases[idx];
            phase.elapsed = Some(phase.start.elapsed());
        }
    }

    pub fn phase_names(&self) -> Vec<&str> {
        self.phases.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn report(&self) -> String {
        let mut output = String::from("\n=== Statement Timeline ===\n");
        for phase in &self.phases {
            let elapsed = phase.elapsed.unwrap_or_default();
            output.push_str(&format!(
                "{}{}  {:.3}ms\n",
                "  ".repeat(phase.depth),
                phase.name,
                elapsed.as_secs_f64() * 1000.0
            ));
        }
        output
    }
}

thread_local! {
    static PHASE_TRACKER: RefCell<PhaseTracker> = RefCell::new(PhaseTracker::new());
}

pub fn begin_phase(name: impl Into<String>) {
    PHASE_TRACKER.with(|t| t.borrow_mut().begin(name));
}

pub fn end_phase() {
    PHASE_TRACKER.with(|t| t.borrow_mut().end());
}

pub fn get_report() -> String {
    PHASE_TRACKER.with(|t| t.borrow().report())
}

pub fn recorded_phases() -> Vec<String> {
    PHASE_TRACKER.with(|t| t.borrow().phase_names().into_iter().map(String::from).collect())
}

pub fn reset() {
    PHASE_TRACKER.with(|t| *t.borrow_mut() = PhaseTracker::new());
}

#[macro_export]
macro_rules! db_phase {
    ($name:expr, $body:block) => {{
        $crate::debugger::phases::begin_phase($name);
        let result = $body;
        $crate::debugger::phases::end_phase();
        result
    }};
}
