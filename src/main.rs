use std::process;

fn main() {
    if let Err(e) = gramline::cli::run() {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
