use std::{
    fs::File,
    io::{BufReader, Write},
    path::{Path, PathBuf},
    process,
};

use boomslang::{
    error::{EXIT_BAD_FILE, EXIT_BAD_OPTS},
    execute,
    interpreter::{evaluator::core::Context, source::ReaderSource},
    repl,
};
use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// boomslang is a small, indentation-sensitive scripting language that reads
/// like English.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The script to run, ending in `.bs`. Without a script, an interactive
    /// session starts.
    file: Option<PathBuf>,

    /// Traces the interpreter on stderr. Takes a comma-separated list of the
    /// phases to trace; all of them when given without a value.
    #[arg(long,
          value_name = "PHASES",
          num_args = 0..=1,
          require_equals = true,
          default_missing_value = "all",
          value_delimiter = ',')]
    debug: Option<Vec<Phase>>,

    /// Pipe mode automatically prints out the value of the last statement of
    /// the script.
    #[arg(short, long)]
    pipe_mode: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    All,
    Lex,
    Parse,
    Eval,
}

impl Phase {
    const fn targets(self) -> &'static [&'static str] {
        match self {
            Self::All => &["lex", "parse", "eval"],
            Self::Lex => &["lex"],
            Self::Parse => &["parse"],
            Self::Eval => &["eval"],
        }
    }
}

fn main() {
    let args = Args::try_parse().unwrap_or_else(|e| {
                                    let _ = e.print();
                                    process::exit(if e.use_stderr() { EXIT_BAD_OPTS } else { 0 });
                                });

    init_logging(args.debug.as_deref());

    let mut context = Context::new();

    let Some(path) = args.file else {
        if let Err(e) = repl::run(&mut context) {
            eprintln!("The interactive session failed: {e}");
            process::exit(1);
        }
        return;
    };

    let mut source = open_script(&path).unwrap_or_else(|message| {
                                           eprintln!("{message}");
                                           process::exit(EXIT_BAD_FILE);
                                       });

    match execute(&mut source, &mut context) {
        Ok(value) => {
            if args.pipe_mode && !value.is_nil() {
                let _ = writeln!(context.streams.output, "{value}");
            }
            let _ = context.streams.output.flush();
        },
        Err(e) => {
            let _ = context.streams.output.flush();
            eprintln!("{e}");
            process::exit(e.exit_code());
        },
    }
}

/// Installs the logger. `RUST_LOG` is honored; `--debug` adds trace output for
/// the chosen phases on top of it.
fn init_logging(phases: Option<&[Phase]>) {
    let mut builder = env_logger::Builder::from_default_env();
    builder.format_timestamp(None);

    for phase in phases.unwrap_or_default() {
        for &target in phase.targets() {
            builder.filter(Some(target), LevelFilter::Trace);
        }
    }

    builder.init();
}

/// Opens a script, which must be a readable file ending in `.bs`.
fn open_script(path: &Path) -> Result<ReaderSource<BufReader<File>>, String> {
    if path.extension().is_none_or(|ext| ext != "bs") {
        return Err(format!("'{}' is not a boomslang script. Scripts end in '.bs'.",
                           path.display()));
    }

    if path.is_dir() {
        return Err(format!("'{}' is a directory, not a script.", path.display()));
    }

    let file = File::open(path).map_err(|e| {
                                   format!("Failed to read the input file '{}': {e}. Perhaps this file does not exist?",
                                           path.display())
                               })?;

    Ok(ReaderSource::new(&path.display().to_string(), BufReader::new(file)))
}
