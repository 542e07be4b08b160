//! build_images - build a container image once and push it under every tag.
//!
//! Exit code 0 means every requested tag was pushed; any failure exits with 1.

use build_images::cli;

#[tokio::main]
async fn main() {
    // Diagnostics go to stderr, filtered by RUST_LOG
    env_logger::init();

    let exit_code = cli::run().await.unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        e.exit_code()
    });

    std::process::exit(exit_code);
}
