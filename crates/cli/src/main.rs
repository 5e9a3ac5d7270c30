//! nench-report CLI entry point.

fn main() {
    if let Err(e) = nench_cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
