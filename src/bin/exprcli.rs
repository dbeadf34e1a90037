use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use exprtype::api::{Session, StatementResult};
use exprtype::debugger::{self, Component, DebugLevel, set_debug_level};
use exprtype::{db_debug, db_error};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let debug_level = args
        .iter()
        .find_map(|arg| arg.strip_prefix("--debug="))
        .and_then(|level| level.parse::<u8>().ok())
        .map(DebugLevel::from_u8)
        .unwrap_or(DebugLevel::Off);

    set_debug_level(debug_level);

    let mut session = Session::new();
    let mut editor = DefaultEditor::new()?;

    println!("exprtype CLI");
    println!("Type SQL and press enter. Ctrl+D to exit");

    loop {
        match editor.readline("exprtype> ") {
            Ok(line) => {
                let input = line.trim();
                if input.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(input);

                match session.execute(input) {
                    Ok(result) => print_result(&result),
                    Err(error) => {
                        db_error!(Component::Cli, "{}", error);
                        println!("ERROR: {}", error);
                    }
                }

                if debug_level >= DebugLevel::Debug {
                    eprintln!("{}", debugger::get_report());
                }
                debugger::reset();
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }
    db_debug!(Component::Cli, "bye");
    Ok(())
}

fn print_result(result: &StatementResult) {
    match result {
        StatementResult::Columns(cols) => {
            println!("name | type | charset | flags | flen | decimal");
            for col in cols {
                let ty = &col.ty;
                println!(
                    "{} | {} | {} | {} | {} | {}",
                    col.name,
                    ty.tp,
                    ty.charset.name(),
                    ty.flags,
                    ty.flen.map_or(-1, i64::from),
                    ty.decimal.map_or(-1, i64::from),
                );
            }
        }
        StatementResult::Created { name, skipped: true } => println!("table {} already exists", name),
        StatementResult::Created { name, .. } => println!("table {} created", name),
        StatementResult::Dropped { name, existed: true } => println!("table {} dropped", name),
        StatementResult::Dropped { name, .. } => println!("table {} does not exist", name),
        StatementResult::Set => println!("OK"),
    }
}
