//! IREE benchmark dashboard uploader entry point.

fn main() {
    if let Err(e) = iree_dashboard_cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
