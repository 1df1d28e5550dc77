use domain::printer::{MockSpoolerBackend, PrinterConnection, PrinterError};
use infrastructure::SpoolerPrinter;
use std::sync::Arc;

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn test_auto_detected_queue_receives_raw_job() {
    let mut backend = MockSpoolerBackend::new();
    backend
        .expect_list_queues()
        .times(1)
        .returning(|| Ok(names(&["Microsoft Print to PDF", "ZDesigner GK420t"])));
    backend
        .expect_write_raw_job()
        .withf(|queue, job, data| {
            queue == "ZDesigner GK420t" && job == "Zebra Print Job" && data == b"^XA^XZ"
        })
        .times(1)
        .returning(|_, _, _| Ok(()));

    let mut printer = SpoolerPrinter::new(Arc::new(backend), None, "Zebra Print Job");
    printer.connect().await.unwrap();
    assert_eq!(printer.queue(), Some("ZDesigner GK420t"));
    printer.send_commands(b"^XA^XZ").await.unwrap();
    printer.disconnect().await.unwrap();
    assert!(!printer.is_connected().await);
}

#[tokio::test]
async fn test_configured_queue_skips_enumeration() {
    let mut backend = MockSpoolerBackend::new();
    backend.expect_list_queues().times(0);
    backend
        .expect_write_raw_job()
        .withf(|queue, _, _| queue == "Warehouse Labels")
        .times(1)
        .returning(|_, _, _| Ok(()));

    let mut printer = SpoolerPrinter::new(
        Arc::new(backend),
        Some("Warehouse Labels".to_string()),
        "Zebra Print Job",
    );
    printer.connect().await.unwrap();
    printer.send_commands(b"data").await.unwrap();
}

#[tokio::test]
async fn test_missing_vendor_queue_is_reported() {
    let mut backend = MockSpoolerBackend::new();
    backend
        .expect_list_queues()
        .returning(|| Ok(names(&["HP LaserJet"])));
    backend.expect_write_raw_job().times(0);

    let mut printer = SpoolerPrinter::new(Arc::new(backend), None, "Zebra Print Job");
    assert_eq!(printer.connect().await, Err(PrinterError::QueueNotFound));
    assert_eq!(
        printer.send_commands(b"data").await,
        Err(PrinterError::NotConnected)
    );
}

#[tokio::test]
async fn test_spooler_failure_is_passed_through() {
    let mut backend = MockSpoolerBackend::new();
    backend
        .expect_list_queues()
        .returning(|| Ok(names(&["Zebra ZT230"])));
    backend
        .expect_write_raw_job()
        .returning(|_, _, _| Err(PrinterError::Spooler("StartDocPrinter failed".to_string())));

    let mut printer = SpoolerPrinter::new(Arc::new(backend), None, "Zebra Print Job");
    printer.connect().await.unwrap();
    assert_eq!(
        printer.send_commands(b"data").await,
        Err(PrinterError::Spooler("StartDocPrinter failed".to_string()))
    );
}
