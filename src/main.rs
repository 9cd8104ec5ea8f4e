use std::{fs, path::PathBuf, process, thread};

use clap::Parser;
use tilang::{Context, parse, scan};

/// ti runs programs written in tilang, a small scripting language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print the tokens of the program, one per line, instead of running it.
    #[arg(long)]
    dump_tokens: bool,

    /// Print the parsed program instead of running it.
    #[arg(long)]
    dump_ast: bool,

    /// The program to run. Must have the `.ti` extension.
    file: PathBuf,
}

/// Prints `message` to standard error and exits with status 1.
fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("{message}");
    process::exit(1);
}

/// Stack for the thread that runs the program, large enough for the deepest
/// call chain the evaluator allows.
const INTERPRETER_STACK_SIZE: usize = 64 * 1024 * 1024;

fn main() {
    let args = Args::parse();

    let interpreter = thread::Builder::new().stack_size(INTERPRETER_STACK_SIZE)
                                            .spawn(move || run(&args))
                                            .unwrap_or_else(|e| {
                                                fail(format!("Failed to start the interpreter: {e}"))
                                            });
    if interpreter.join().is_err() {
        process::exit(1);
    }
}

fn run(args: &Args) {
    if args.file.extension().is_none_or(|ext| ext != "ti") {
        fail("File extension not recognized");
    }

    let source = fs::read_to_string(&args.file).unwrap_or_else(|_| {
                     fail(format!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                  args.file.display()))
                 });

    let scanned = scan(&source).unwrap_or_else(|e| fail(e));
    for warning in &scanned.warnings {
        eprintln!("{warning}");
    }

    if args.dump_tokens {
        for (token, line) in &scanned.tokens {
            println!("{line}: {}", token.lexeme());
        }
        return;
    }

    let program = parse(&scanned.tokens).unwrap_or_else(|e| fail(e));

    if args.dump_ast {
        for statement in &program {
            println!("{statement}");
        }
        return;
    }

    match Context::new().execute(&program) {
        Ok(status) => process::exit(status),
        Err(e) => fail(e),
    }
}
