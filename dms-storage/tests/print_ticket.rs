mod common;

use common::{RecordingDriver, sample_request};
use dms_printer::PrintError;
use dms_storage::{Directive, TICKET_QR, TicketFormatter, layout};

fn print(driver: &RecordingDriver) -> Result<(), PrintError> {
    TicketFormatter::new(driver.clone()).print_ticket(&sample_request())
}

#[test]
fn test_driver_receives_full_layout_in_order() {
    let driver = RecordingDriver::new();
    print(&driver).unwrap();

    assert_eq!(driver.directives(), layout(&sample_request()));
}

#[test]
fn test_qr_payload_sent_once() {
    let driver = RecordingDriver::new();
    print(&driver).unwrap();

    let qrs: Vec<_> = driver
        .directives()
        .into_iter()
        .filter(|d| matches!(d, Directive::Qr { .. }))
        .collect();
    assert_eq!(
        qrs,
        vec![Directive::Qr {
            payload: "Brandon Green;brandonagr@gmail.com;pallet;2017-02-20 21:52".to_string(),
            options: TICKET_QR,
        }]
    );
}

#[test]
fn test_type_line_in_both_sections() {
    let driver = RecordingDriver::new();
    print(&driver).unwrap();

    let directives = driver.directives();
    let type_line = Directive::Text("Type:\tpallet\n".to_string());
    let positions: Vec<usize> = directives
        .iter()
        .enumerate()
        .filter(|(_, d)| **d == type_line)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(positions.len(), 2);

    // One before the first cut, one after it
    let first_cut = directives.iter().position(|d| *d == Directive::Cut).unwrap();
    assert!(positions[0] < first_cut);
    assert!(positions[1] > first_cut);
}

#[test]
fn test_ticket_cut_before_receipt() {
    let driver = RecordingDriver::new();
    print(&driver).unwrap();

    let directives = driver.directives();
    let cuts: Vec<usize> = directives
        .iter()
        .enumerate()
        .filter(|(_, d)| **d == Directive::Cut)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(cuts.len(), 2);
    assert_eq!(cuts[1], directives.len() - 1);

    let receipt_title = directives
        .iter()
        .position(|d| *d == Directive::Text("DMS Storage Receipt\n\n".to_string()))
        .unwrap();
    assert!(cuts[0] < receipt_title);
}

#[test]
fn test_fault_on_first_directive_prints_nothing() {
    let driver = RecordingDriver::failing_at(0);
    let result = print(&driver);

    assert!(matches!(result, Err(PrintError::Io(_))));
    assert!(driver.directives().is_empty());
}

#[test]
fn test_fault_mid_ticket_stops_before_cut() {
    let driver = RecordingDriver::failing_at(10);
    let result = print(&driver);

    assert!(result.is_err());
    let directives = driver.directives();
    assert_eq!(directives.len(), 10);
    assert!(!directives.contains(&Directive::Cut));
}

#[test]
fn test_empty_fields_still_print() {
    let driver = RecordingDriver::new();
    TicketFormatter::new(driver.clone())
        .print_ticket(&Default::default())
        .unwrap();

    let directives = driver.directives();
    assert!(directives.contains(&Directive::Text("Name:\t\n".to_string())));
    assert!(directives.contains(&Directive::Qr {
        payload: ";;;".to_string(),
        options: TICKET_QR,
    }));
}
