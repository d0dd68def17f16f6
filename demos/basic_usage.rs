//! Basic logger usage example
//!
//! Demonstrates the global logger, level filtering and per-call options.
//!
//! Run with: LOG_LEVEL=debug cargo run --example basic_usage

use logk::prelude::*;
use logk::{info, warn};

#[derive(Debug, thiserror::Error)]
#[error("upstream timed out after {0}ms")]
struct UpstreamTimeout(u64);

fn main() -> Result<()> {
    println!("=== logk - Basic Usage Example ===\n");

    // The first call creates a stdout logger from LOG_LEVEL / LOG_NAMESPACE
    let logger = logk::get();

    println!("1. Logging at different levels:");
    logger.trace("This is a trace message", &[]);
    logger.debug("This is a debug message", &[]);
    logger.info("This is an info message", &[]);
    logger.warn("This is a warning message", &[]);
    logger.error("This is an error message", &[]);
    logger.fatal("This is a fatal message (the process keeps running)", &[]);

    println!("\n2. Formatted messages:");
    let port = 8080;
    info!(logger, "Server listening on port {}", port);
    warn!(logger, "Retry attempt {} of {}", 3, 5);

    println!("\n3. Errors, metadata and request ids:");
    let ctx = logk::core::context::with_request_id(&Context::background(), "req-1234");
    logger.error(
        "Upstream call failed",
        &[
            options::with_context(ctx),
            options::error(UpstreamTimeout(1500)),
            options::with_field("upstream", "billing"),
        ],
    );

    println!("\n4. Replacing the global logger with a JSON printer:");
    let json = StdLogger::builder()
        .level(LogLevel::Info)
        .namespace("demo")
        .printer(JsonPrinter::stdout())
        .build();
    logk::register(json.into_shared());
    logk::get().info("Now printing JSON", &[options::with_field("format", "jsonl")]);

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
