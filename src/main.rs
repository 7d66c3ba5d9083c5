//! autopaginate – command-line pager for long-form content.
//!
//! Usage:
//!   autopaginate <input|-> [output] [--words N] [--config cfg.json] [--strip] [--report]
//!   autopaginate --sample [--words N]
//!
//! If `output` is omitted the result is written to stdout.

use std::io::{self, Read, Write};
use std::{env, fs, path::PathBuf, process};

use autopaginate::pipeline::{paginate_with_report, unpaginate, PaginateConfig};
use autopaginate::samples;

enum Input {
    File(PathBuf),
    Stdin,
    Sample,
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let mut input: Option<Input> = None;
    let mut output_path: Option<PathBuf> = None;
    let mut words: Option<String> = None;
    let mut config_path: Option<PathBuf> = None;
    let mut strip = false;
    let mut report = false;
    let mut positional = 0usize;

    let mut iter = args.iter().skip(1).peekable();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--strip" | "-s" => strip = true,
            "--report" | "-r" => report = true,
            "--sample" => input = Some(Input::Sample),
            "--words" | "-w" => match iter.next() {
                Some(v) => words = Some(v.clone()),
                None => fail(&args[0], "--words needs a value"),
            },
            "--config" | "-c" => match iter.next() {
                Some(v) => config_path = Some(PathBuf::from(v)),
                None => fail(&args[0], "--config needs a path"),
            },
            "--help" | "-h" => {
                print_usage(&args[0]);
                process::exit(0);
            }
            "-" if positional == 0 => {
                input = Some(Input::Stdin);
                positional += 1;
            }
            other if other.starts_with('-') => fail(&args[0], &format!("Unknown flag: {other}")),
            path => {
                if positional == 0 {
                    input = Some(Input::File(PathBuf::from(path)));
                } else if positional == 1 {
                    output_path = Some(PathBuf::from(path));
                } else {
                    fail(&args[0], &format!("Unexpected argument: {path}"));
                }
                positional += 1;
            }
        }
    }

    let content = match input {
        Some(Input::File(p)) => match fs::read_to_string(&p) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error reading '{}': {e}", p.display());
                process::exit(1);
            }
        },
        Some(Input::Stdin) => {
            let mut s = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut s) {
                eprintln!("Error reading stdin: {e}");
                process::exit(1);
            }
            s
        }
        Some(Input::Sample) => samples::essay().to_string(),
        None => fail(&args[0], "Error: no input specified."),
    };

    // Config file first, then flags on top of it.
    let mut config = match config_path {
        Some(p) => match fs::read_to_string(&p) {
            Ok(json) => match PaginateConfig::from_json(&json) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Error in '{}': {e}", p.display());
                    process::exit(1);
                }
            },
            Err(e) => {
                eprintln!("Error reading '{}': {e}", p.display());
                process::exit(1);
            }
        },
        None => PaginateConfig::default(),
    };
    if let Some(w) = words {
        match w.parse::<i64>() {
            Ok(n) => config.word_budget = n,
            Err(_) => fail(&args[0], &format!("--words expects an integer, got '{w}'")),
        }
    }

    let result = if strip {
        unpaginate(&content)
    } else {
        match paginate_with_report(&content, &config) {
            Ok((text, summary)) => {
                if report {
                    eprintln!("{}", summary.to_json());
                }
                let pages = summary.page_count();
                log::info!(
                    "{} page{} at {} words per page",
                    pages,
                    if pages == 1 { "" } else { "s" },
                    summary.word_budget
                );
                text
            }
            Err(e) => {
                eprintln!("Error paginating: {e}");
                process::exit(1);
            }
        }
    };

    match output_path {
        Some(out) => {
            if let Some(parent) = out.parent() {
                if !parent.as_os_str().is_empty() {
                    if let Err(e) = fs::create_dir_all(parent) {
                        eprintln!("Error creating output directory: {e}");
                        process::exit(1);
                    }
                }
            }
            if let Err(e) = fs::write(&out, &result) {
                eprintln!("Error writing '{}': {e}", out.display());
                process::exit(1);
            }
        }
        None => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = stdout.write_all(result.as_bytes()) {
                eprintln!("Error writing stdout: {e}");
                process::exit(1);
            }
        }
    }
}

fn fail(prog: &str, msg: &str) -> ! {
    eprintln!("{msg}");
    print_usage(prog);
    process::exit(1);
}

fn print_usage(prog: &str) {
    eprintln!("autopaginate – split long content into pages with <!--nextpage-->");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  {prog} <input|-> [output] [--words N] [--config cfg.json] [--strip] [--report]");
    eprintln!("  {prog} --sample [--words N]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  <input>        Text or HTML file to paginate, or '-' for stdin");
    eprintln!("  [output]       Output path  (default: stdout)");
    eprintln!();
    eprintln!("Flags:");
    eprintln!("  --words, -w    Preferred words per page (default: 700)");
    eprintln!("  --config, -c   JSON config file, e.g. {{\"word_budget\": 500}}");
    eprintln!("  --strip, -s    Only remove existing page-break markers");
    eprintln!("  --report, -r   Print a JSON pagination report to stderr");
    eprintln!("  --sample       Paginate a built-in sample essay");
    eprintln!("  --help         Print this message");
}
