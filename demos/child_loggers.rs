//! Child logger example
//!
//! Demonstrates namespace inheritance and ambient request contexts.
//!
//! Run with: cargo run --example child_loggers

use logk::prelude::*;
use logk::core::context::with_request_id;

fn handle_request(parent: &StdLogger, request_id: &str, user: &str) {
    // Each request gets a child bound to its context
    let ctx = with_request_id(&Context::background(), request_id);
    let logger = parent.child(&[options::with_context(ctx)]);

    logger.info("Request received", &[options::with_field("user", user)]);
    logger.debug("Loading profile", &[]);
    logger.infof(format_args!("Request for {} completed", user));
}

fn main() {
    println!("=== logk - Child Loggers Example ===\n");

    let root = StdLogger::builder()
        .level(LogLevel::Debug)
        .namespace("api")
        .printer(StdPrinter::stdout().with_colors(true))
        .build();

    println!("1. Child inherits the parent namespace:");
    let inherited = root.child(&[]);
    inherited.info("Logged under the parent namespace", &[]);

    println!("\n2. Child with its own namespace:");
    let users = root.child(&[options::with_namespace("users")]);
    users.info("Logged under 'users'", &[]);

    println!("\n3. Child level always follows the parent:");
    let chatty = root.child(&[options::level(LogLevel::Trace)]);
    chatty.trace("Never printed: the threshold is still DEBUG", &[]);
    chatty.debug("Printed at DEBUG", &[]);

    println!("\n4. Per-request children:");
    handle_request(&users, "req-001", "alice");
    handle_request(&users, "req-002", "bob");

    println!("\n=== Example completed successfully! ===");
}
