//! CLI command implementations.

use crate::Args;
use starry_common::Program;
use std::fs;
use std::path::Path;
use tracing::info;

/// Load, parse, and list or run the source named in `args`.
pub fn execute(args: &Args) -> Result<(), i32> {
    let program = load(&args.source)?;

    if args.inst {
        print!("{}", starry_parser::listing(&program));
        return Ok(());
    }

    run(&program, args.debug)
}

/// Read and parse a source file, reporting every parse error.
fn load(path: &Path) -> Result<Program, i32> {
    let text = fs::read_to_string(path).map_err(|e| {
        eprintln!("File Open Error: {}", path.display());
        info!(error = %e, "cannot read source");
        1
    })?;

    starry_parser::parse_program(&text).map_err(|errors| {
        for e in &errors {
            eprintln!("Parser Error: {e}");
        }
        1
    })
}

/// Execute a parsed program on the standard streams.
fn run(program: &Program, debug: bool) -> Result<(), i32> {
    let mut vm = starry_vm::VM::new(program);
    let result = if debug {
        vm.run_with_trace()
    } else {
        vm.run()
    };

    let code = starry_vm::exit_code(&result);
    match result {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("VM Runtime Error: {e}");
            Err(code)
        }
    }
}
