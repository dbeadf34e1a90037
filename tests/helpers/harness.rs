#![allow(dead_code)]

use exprtype::api::{Session, StatementResult};
use exprtype::types::FieldType;

use super::data::{FIXTURE_DDL, TypeCase};

pub struct TestSession {
    pub session: Session,
}

impl TestSession {
    pub fn new() -> Self {
        Self {
            session: Session::new(),
        }
    }

    /// Session holding the fixture table with no-op functions enabled.
    pub fn with_fixture() -> Self {
        let mut s = Self::new();
        s.exec(FIXTURE_DDL).unwrap();
        s.exec("set tidb_enable_noop_functions=1").unwrap();
        s
    }

    pub fn exec(&mut self, sql: &str) -> Result<StatementResult, anyhow::Error> {
        Ok(self.session.execute(sql)?)
    }

    /// Type of the first output column of `sql`.
    pub fn first_column(&mut self, sql: &str) -> Result<FieldType, anyhow::Error> {
        match self.exec(sql)? {
            StatementResult::Columns(cols) => match cols.into_iter().next() {
                Some(col) => Ok(col.ty),
                None => anyhow::bail!("no columns for {sql}"),
            },
            other => anyhow::bail!("Expected columns, got {:?}", other),
        }
    }

    /// Runs every case as `select <sql> from t` and describes each mismatch.
    pub fn mismatches(&mut self, cases: &[TypeCase]) -> Vec<String> {
        let mut failures = Vec::new();
        for case in cases {
            let sql = format!("select {} from t", case.sql);
            let ty = match self.first_column(&sql) {
                Ok(ty) => ty,
                Err(e) => {
                    failures.push(format!("{sql}: {e}"));
                    continue;
                }
            };
            let got = (ty.tp, ty.charset, ty.flags, ty.flen_or_neg(), ty.decimal_or_neg());
            let want = (case.tp, case.charset, case.flags, case.flen, case.decimal);
            if got != want {
                failures.push(format!("{sql}: got {:?}, want {:?}", got, want));
            }
        }
        failures
    }
}

pub fn assert_cases(cases: &[TypeCase]) {
    super::init_debug_for_tests();
    let mut s = TestSession::with_fixture();
    let failures = s.mismatches(cases);
    assert!(
        failures.is_empty(),
        "{} of {} cases failed:\n{}",
        failures.len(),
        cases.len(),
        failures.join("\n")
    );
}
