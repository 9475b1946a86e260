//! EDL code-generator driver.
//!
//! Parses one `.edl` interface definition, plans the generated files, and
//! hands the plan to the text back-end. Exit codes: 0 success, 1
//! parse/validation error, 2 I/O error, 3 downstream compiler error.

mod args;
mod tracing_setup;

use std::process::ExitCode;

use tracing::info;

use args::{print_usage, CliArgs};
use edl_parse::ParseFileError;

const EXIT_ANALYSIS_ERROR: u8 = 1;
const EXIT_IO_ERROR: u8 = 2;
const EXIT_DOWNSTREAM_ERROR: u8 = 3;

fn main() -> ExitCode {
    tracing_setup::init();

    let raw_args: Vec<String> = std::env::args().skip(1).collect();
    if raw_args.is_empty() || raw_args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let cli = match CliArgs::parse(raw_args.into_iter()) {
        Ok(cli) => cli,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!();
            print_usage();
            return ExitCode::from(EXIT_ANALYSIS_ERROR);
        }
    };

    run(&cli)
}

fn run(cli: &CliArgs) -> ExitCode {
    if let Err(error) = std::fs::create_dir_all(&cli.output_directory) {
        eprintln!(
            "error: cannot create output directory `{}`: {error}",
            cli.output_directory.display()
        );
        return ExitCode::from(EXIT_IO_ERROR);
    }

    let edl = match edl_parse::parse_file(&cli.edl) {
        Ok(edl) => edl,
        Err(ParseFileError::Io(error)) => {
            eprintln!("error: cannot read `{}`: {error}", cli.edl.display());
            return ExitCode::from(EXIT_IO_ERROR);
        }
        Err(ParseFileError::Analysis(error)) => {
            eprintln!("{error}");
            return ExitCode::from(EXIT_ANALYSIS_ERROR);
        }
    };

    let plan = edl_plan::plan_module(&edl);
    info!(
        module = %plan.module_name,
        files = plan.files.len(),
        functions = plan.functions.len(),
        "emission planned"
    );

    // The serialized-record compiler runs on the rendered schema; verify the
    // tool is actually there before the back-end depends on it.
    if let Some(compiler) = &cli.flatbuffer_compiler {
        if !compiler.is_file() {
            eprintln!(
                "error: flatbuffer compiler `{}` not found",
                compiler.display()
            );
            return ExitCode::from(EXIT_DOWNSTREAM_ERROR);
        }
    }

    let namespace = cli
        .namespace
        .clone()
        .unwrap_or_else(|| plan.module_name.clone());
    println!(
        "planned {} files for module `{}` (namespace `{namespace}`, class `{}`)",
        plan.files.len(),
        plan.module_name,
        cli.vtl0_class_name
    );
    for file in &plan.files {
        println!("  {}", file.file_name);
    }

    ExitCode::SUCCESS
}
