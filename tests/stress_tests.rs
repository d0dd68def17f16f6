//! Stress tests for concurrent logging
//!
//! These tests verify:
//! - Records from many threads never interleave inside a printer
//! - Loggers and children are shared across threads without locking
//! - Registry churn under concurrent readers stays consistent

use logk::prelude::*;
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_records_do_not_interleave() {
    let buf = SharedBuf::default();
    let logger = StdLogger::builder()
        .level(LogLevel::Trace)
        .printer(StdPrinter::new(buf.clone(), None))
        .build();

    let threads = 8;
    let per_thread = 200;

    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let logger = logger.child(&[options::with_namespace(format!("t{}", t))]);
            thread::spawn(move || {
                for i in 0..per_thread {
                    logger.error("write failed", &[options::with_field("i", i)]);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("thread panicked");
    }

    let content = String::from_utf8(buf.0.lock().clone()).expect("utf-8 output");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), threads * per_thread * 2);

    // Every record is a header line immediately followed by its metadata line
    for pair in lines.chunks(2) {
        assert!(pair[0].starts_with("[ERROR] > (t"), "bad header: {}", pair[0]);
        assert!(pair[0].ends_with(") write failed"), "bad header: {}", pair[0]);
        assert!(pair[1].starts_with("  > Metadata: {\"i\":"), "bad metadata: {}", pair[1]);
    }
}

#[test]
fn test_shared_logger_across_threads() {
    let printer = Arc::new(MemoryPrinter::new());
    let logger: SharedLogger = StdLogger::builder()
        .level(LogLevel::Info)
        .shared_printer(printer.clone())
        .build()
        .into_shared();

    let handles: Vec<_> = (0..10)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                let child = logger.new_child(&[options::with_namespace(format!("worker-{}", t))]);
                for i in 0..100 {
                    child.infof(format_args!("item {}", i));
                    child.debugf(format_args!("filtered {}", i));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("thread panicked");
    }

    let records = printer.records();
    assert_eq!(records.len(), 1000);
    assert!(records.iter().all(|r| r.level == LogLevel::Info));
    assert!(records.iter().all(|r| r.namespace.starts_with("worker-")));
}

#[test]
fn test_registry_churn_under_concurrent_readers() {
    let writers = 4;
    let readers = 8;
    let rounds = 500;
    let done = Arc::new(AtomicBool::new(false));

    let printers: Vec<Arc<MemoryPrinter>> =
        (0..writers).map(|_| Arc::new(MemoryPrinter::new())).collect();

    let writer_handles: Vec<_> = printers
        .iter()
        .enumerate()
        .map(|(w, printer)| {
            let logger = StdLogger::builder()
                .level(LogLevel::Debug)
                .namespace(format!("writer-{}", w))
                .shared_printer(printer.clone())
                .build()
                .into_shared();
            thread::spawn(move || {
                for i in 0..rounds {
                    logk::register(Arc::clone(&logger));
                    if i % 7 == 0 {
                        logk::clear();
                    }
                }
            })
        })
        .collect();

    let reader_handles: Vec<_> = (0..readers)
        .map(|r| {
            let done = Arc::clone(&done);
            thread::spawn(move || {
                while !done.load(Ordering::Acquire) {
                    // A default logger created after a clear drops DEBUG records
                    logk::get().debug("reading", &[options::with_field("reader", r)]);
                }
            })
        })
        .collect();

    for handle in writer_handles {
        handle.join().expect("writer panicked");
    }
    done.store(true, Ordering::Release);
    for handle in reader_handles {
        handle.join().expect("reader panicked");
    }

    // Records only ever reach the printer of a registered logger
    for (w, printer) in printers.iter().enumerate() {
        let namespace = format!("writer-{}", w);
        assert!(printer.records().iter().all(|r| r.namespace == namespace));
    }

    let last = StdLogger::builder()
        .printer(MemoryPrinter::new())
        .build()
        .into_shared();
    logk::register(Arc::clone(&last));
    assert!(Arc::ptr_eq(&logk::get(), &last));

    logk::clear();
    let fresh = logk::get();
    assert!(!Arc::ptr_eq(&fresh, &last));
    assert!(Arc::ptr_eq(&fresh, &logk::get()));

    logk::clear();
}
