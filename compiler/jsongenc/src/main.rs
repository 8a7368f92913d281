//! jsongen CLI
//!
//! Generates specialized JSON encoders from type graph files.

use std::path::Path;

use jsongenc::{check_all, generate_all, init_tracing, DriverError, GenArgs};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "gen" => {
            let code = run_gen(&args[2..]);
            std::process::exit(code);
        }
        "check" => {
            let code = run_check(&args[2..]);
            std::process::exit(code);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("jsongen {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

/// Parse options and load configuration, reporting failures as usage errors.
fn prepare(args: &[String]) -> Result<(GenArgs, jsongenc::DriverConfig), DriverError> {
    let parsed = GenArgs::parse(args)?;
    let config = parsed.resolve_config(Path::new("."))?;
    init_tracing(&config.log_level);
    Ok((parsed, config))
}

fn run_gen(args: &[String]) -> i32 {
    let (parsed, config) = match prepare(args) {
        Ok(prepared) => prepared,
        Err(err) => {
            eprintln!("error: {err}");
            if matches!(err, DriverError::Usage(_)) {
                eprintln!();
                print_gen_options();
            }
            return 2;
        }
    };

    let summary = generate_all(&parsed.inputs, &config);
    for outcome in &summary.written {
        println!(
            "{} -> {} ({} records)",
            outcome.input.display(),
            outcome.output.display(),
            outcome.records
        );
    }
    for failure in &summary.failures {
        eprintln!("error: {failure}");
    }
    if summary.skipped > 0 {
        eprintln!(
            "{} input(s) skipped after the first failure (use --keep-going to continue)",
            summary.skipped
        );
    }
    i32::from(!summary.is_ok())
}

fn run_check(args: &[String]) -> i32 {
    let (parsed, config) = match prepare(args) {
        Ok(prepared) => prepared,
        Err(err) => {
            eprintln!("error: {err}");
            return 2;
        }
    };

    let mut failed = false;
    for (input, result) in parsed.inputs.iter().zip(check_all(&parsed.inputs, &config.codegen)) {
        match result {
            Ok(records) => println!("{}: ok ({records} records)", input.display()),
            Err(err) => {
                eprintln!("error: {err}");
                failed = true;
            }
        }
    }
    i32::from(failed)
}

fn print_gen_options() {
    eprintln!("Options:");
    eprintln!("  -o, --out-dir <dir>   Directory for generated files (default: next to input)");
    eprintln!("  --config <file>       Config file (default: ./jsongen.toml if present)");
    eprintln!("  --omit-empty          Omit empty fields unless tagged !omitempty");
    eprintln!("  --no-std-adapters     Skip the RawMarshaler adapter impls");
    eprintln!("  -k, --keep-going      Continue with remaining inputs after a failure");
    eprintln!("  -v, --verbose         Debug logging (RUST_LOG overrides)");
}

fn print_usage() {
    println!("jsongen - specialized JSON encoder generator");
    println!();
    println!("Usage: jsongen <command> [options]");
    println!();
    println!("Commands:");
    println!("  gen <graph.json>...    Generate encoders, one output file per graph");
    println!("  check <graph.json>...  Validate graphs and run generation without writing");
    println!("  help                   Show this help message");
    println!("  version                Show version information");
    println!();
    println!("Gen options:");
    println!("  -o, --out-dir <dir>   Directory for generated files (default: next to input)");
    println!("  --config <file>       Config file (default: ./jsongen.toml if present)");
    println!("  --omit-empty          Omit empty fields unless tagged !omitempty");
    println!("  --no-std-adapters     Skip the RawMarshaler adapter impls");
    println!("  -k, --keep-going      Continue with remaining inputs after a failure");
    println!("  -v, --verbose         Debug logging (RUST_LOG overrides)");
    println!();
    println!("Examples:");
    println!("  jsongen gen model.json");
    println!("  jsongen gen schemas/*.json -o src/generated --omit-empty");
    println!("  jsongen check model.json");
}
