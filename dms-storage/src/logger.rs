//! Logging Infrastructure
//!
//! `RUST_LOG` wins when set. Otherwise both crates log at `level`.

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize the logger with optional file output
pub fn init_logger(log_level: Option<&str>, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("dms_storage={level},dms_printer={level}"))
    });

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    // Add file output if log_dir is provided
    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.exists()
            && let Some(dir_str) = log_path.to_str()
        {
            let file_appender = tracing_appender::rolling::daily(dir_str, "dms-storage");
            subscriber.with_ansi(false).with_writer(file_appender).init();
            return;
        }
    }

    subscriber.init();
}
