use application::{SettingsEdit, SettingsService};
use domain::settings::SettingsRepository;
use domain::{DomainError, GateError};
use infrastructure::JsonSettingsStore;
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

fn seeded(settings: serde_json::Value) -> (TempDir, PathBuf, SettingsService) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app_settings.json");
    std::fs::write(&path, serde_json::to_vec_pretty(&settings).unwrap()).unwrap();
    let service = SettingsService::new(Arc::new(JsonSettingsStore::new(&path)));
    (dir, path, service)
}

fn on_disk(path: &PathBuf) -> serde_json::Value {
    serde_json::from_slice(&std::fs::read(path).unwrap()).unwrap()
}

#[tokio::test]
async fn test_apply_merges_only_edited_fields() {
    let (_dir, path, service) = seeded(json!({
        "ip": "10.0.0.5",
        "port": "9100",
        "company_name": "Acme",
        "admin_password": "hunter2",
        "window_position": [10, 20]
    }));

    let updated = service
        .apply(SettingsEdit {
            company_name: Some("Globex".to_string()),
            printer_port: Some(" 6101 ".to_string()),
            label_number: Some("41".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(updated.company_name, "Globex");
    assert_eq!(updated.printer_port, "6101");
    assert_eq!(updated.printer_host, "10.0.0.5");
    assert_eq!(updated.label_number.as_deref(), Some("000041"));

    let stored = on_disk(&path);
    assert_eq!(stored["label_number"], json!("000041"));
    assert_eq!(stored["admin_password"], json!("hunter2"));
    assert_eq!(stored["window_position"], json!([10, 20]));
}

#[tokio::test]
async fn test_apply_rejects_non_numeric_label_number() {
    let (_dir, path, service) = seeded(json!({ "company_name": "Acme", "label_number": "000007" }));
    let before = std::fs::read(&path).unwrap();

    let err = service
        .apply(SettingsEdit {
            company_name: Some("Globex".to_string()),
            label_number: Some("12a".to_string()),
            ..Default::default()
        })
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<DomainError>(),
        Some(DomainError::InvalidLabelNumber(_))
    ));
    assert_eq!(std::fs::read(&path).unwrap(), before);
}

#[tokio::test]
async fn test_empty_edit_leaves_file_alone() {
    let (_dir, path, service) = seeded(json!({ "company_name": "Acme" }));
    let before = std::fs::read(&path).unwrap();

    let doc = service.apply(SettingsEdit::default()).await.unwrap();

    assert_eq!(doc.company_name, "Acme");
    assert_eq!(std::fs::read(&path).unwrap(), before);
}

#[tokio::test]
async fn test_transport_switch_round_trips() {
    let (_dir, _path, service) = seeded(json!({}));

    let doc = service
        .apply(SettingsEdit {
            use_local_spooler: Some(true),
            printer_queue_name: Some("ZDesigner GK420t".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert!(doc.use_local_spooler);
    assert_eq!(doc.queue_override(), Some("ZDesigner GK420t"));
}

#[tokio::test]
async fn test_change_password_requires_current_one() {
    let (_dir, _path, service) = seeded(json!({ "admin_password": "hunter2" }));

    let err = service
        .change_password("nope", "new", "new")
        .await
        .unwrap_err();

    assert_eq!(
        err.downcast_ref::<GateError>(),
        Some(&GateError::WrongCurrentSecret)
    );
    assert_eq!(service.current().await.admin_password, "hunter2");
}

#[tokio::test]
async fn test_change_password_rejects_mismatched_confirmation() {
    let (_dir, _path, service) = seeded(json!({ "admin_password": "hunter2" }));

    let err = service
        .change_password("hunter2", "new", "neW")
        .await
        .unwrap_err();

    assert_eq!(
        err.downcast_ref::<GateError>(),
        Some(&GateError::ConfirmationMismatch)
    );
    assert_eq!(service.current().await.admin_password, "hunter2");
}

#[tokio::test]
async fn test_first_password_needs_no_current_one() {
    let (_dir, path, service) = seeded(json!({ "company_name": "Acme" }));

    service
        .change_password("", "s3cret", "s3cret")
        .await
        .unwrap();

    let stored = on_disk(&path);
    assert_eq!(stored["admin_password"], json!("s3cret"));
    assert_eq!(stored["company_name"], json!("Acme"));
    assert!(service.current().await.access_gate().is_locked());
}

#[tokio::test]
async fn test_empty_password_turns_gate_off() {
    let (_dir, path, service) = seeded(json!({ "admin_password": "hunter2" }));

    service.change_password("hunter2", "", "").await.unwrap();

    assert_eq!(on_disk(&path)["admin_password"], json!(""));
    let store = JsonSettingsStore::new(&path);
    assert!(!store.load().await.access_gate().is_locked());
}
