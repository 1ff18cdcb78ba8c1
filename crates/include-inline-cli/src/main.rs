use std::path::PathBuf;

use gumdrop::Options;
use include_inline::{Inliner, MissingInput};

const DEFAULT_OUTPUT: &str = "output.cpp";

#[derive(Debug, Options)]
struct Opts {
    #[options(help = "print help message")]
    help: bool,

    #[options(no_short, help = "fail instead of writing an empty output when the input cannot be read")]
    strict_input: bool,

    #[options(free, help = "<input> [output]")]
    paths: Vec<PathBuf>,
}

fn usage() {
    eprintln!("Usage: include-inline [--strict-input] <input> [output]");
    eprintln!("Replaces every line containing #include \"file\" with the content of that file.");
    eprintln!("Paths are taken relative to the current directory. Output defaults to {}.", DEFAULT_OUTPUT);
    eprintln!("Influential envvars: INCLUDE_INLINE_STRICT_INPUT=1 RUST_LOG=debug");
    eprintln!();
    eprintln!("{}", Opts::usage());
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let opts = Opts::parse_args_default_or_exit();

    let (input, output) = match opts.paths.as_slice() {
        [input] => (input.clone(), PathBuf::from(DEFAULT_OUTPUT)),
        [input, output] => (input.clone(), output.clone()),
        _ => {
            usage();
            std::process::exit(1);
        }
    };

    let strict_env = std::env::var("INCLUDE_INLINE_STRICT_INPUT") == Ok("1".to_owned());
    let missing_input = if opts.strict_input || strict_env {
        MissingInput::Fail
    } else {
        MissingInput::Empty
    };

    let mut inliner = Inliner::new(missing_input);
    let result = inliner.load(&input).and_then(|()| inliner.process(&output));
    match result {
        Ok(report) => {
            log::info!("{}", report);
            println!("Processed file written to {}", output.display());
        }
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    }
}
