//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = procura_cli::run() {
        eprintln!("procura: {err}");
        std::process::exit(1);
    }
}
