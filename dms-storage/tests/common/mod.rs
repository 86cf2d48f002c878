#![allow(dead_code)]

use std::sync::Arc;

use dms_printer::{PrintError, PrintResult, PrinterDriver, QrOptions, Style};
use dms_storage::{Directive, TicketRequest};
use parking_lot::Mutex;

pub fn sample_request() -> TicketRequest {
    TicketRequest {
        expiration_date: "December 25".to_string(),
        name: "Brandon Green".to_string(),
        email: "brandonagr@gmail.com".to_string(),
        item_type: "pallet".to_string(),
        description: "testing out storage".to_string(),
        print_time: "2017-02-20 21:52".to_string(),
    }
}

/// Records every directive it receives
///
/// Clones share the same log, so a test can keep one while the
/// formatter owns another.
#[derive(Clone, Default)]
pub struct RecordingDriver {
    log: Arc<Mutex<Vec<Directive>>>,
    /// Fail the n-th call (0-based) instead of recording it
    fail_at: Option<usize>,
    calls: Arc<Mutex<usize>>,
}

impl RecordingDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_at(n: usize) -> Self {
        Self {
            fail_at: Some(n),
            ..Self::default()
        }
    }

    pub fn directives(&self) -> Vec<Directive> {
        self.log.lock().clone()
    }

    fn record(&mut self, directive: Directive) -> PrintResult<()> {
        let mut calls = self.calls.lock();
        let n = *calls;
        *calls += 1;
        if self.fail_at == Some(n) {
            return Err(unplugged());
        }
        self.log.lock().push(directive);
        Ok(())
    }
}

fn unplugged() -> PrintError {
    PrintError::Io(std::io::Error::new(
        std::io::ErrorKind::BrokenPipe,
        "printer unplugged",
    ))
}

impl PrinterDriver for RecordingDriver {
    fn set_style(&mut self, style: &Style) -> PrintResult<()> {
        self.record(Directive::Style(*style))
    }

    fn text(&mut self, text: &str) -> PrintResult<()> {
        self.record(Directive::Text(text.to_string()))
    }

    fn qr(&mut self, payload: &str, options: &QrOptions) -> PrintResult<()> {
        self.record(Directive::Qr {
            payload: payload.to_string(),
            options: *options,
        })
    }

    fn cut(&mut self) -> PrintResult<()> {
        self.record(Directive::Cut)
    }
}
