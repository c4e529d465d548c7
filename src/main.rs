//! extract_icon - write an application's icon out as an .icns file.
//!
//! Usage: `extract_icon <source_app_path> <output_icns_path>`

use extract_icon::cli;
use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // All staging guards are dropped inside `run`, before `process::exit`.
    match cli::run().await {
        Ok(exit_code) => {
            process::exit(exit_code);
        }
        Err(e) => {
            eprintln!("{}", e.report());
            process::exit(1);
        }
    }
}
