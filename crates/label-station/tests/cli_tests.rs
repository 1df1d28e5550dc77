use application::printer::{AccessDenied, CopyReport, PrintReport};
use clap::Parser;
use domain::{ControlType, LabelNumber, OperatorPrompt, SettingsDocument};
use label_station::output;
use label_station::{Cli, Command, LinePrompt, SettingsCommand};
use std::io::Cursor;

#[test]
fn test_print_defaults() {
    let cli = Cli::try_parse_from(["label-station", "print"]).unwrap();
    assert_eq!(cli.config_dir, "config");

    let Command::Print(args) = cli.command else {
        panic!("expected print");
    };
    let request = args.into_request();
    assert_eq!(request.control_type, ControlType::SpxByXry);
    assert_eq!(request.operator_name, "");
    assert_eq!(request.copies, "1");
}

#[test]
fn test_print_passes_copies_through_unparsed() {
    let cli = Cli::try_parse_from([
        "label-station",
        "print",
        "--name",
        "Jane",
        "--copies",
        "-5",
        "--control",
        "spx by xry",
    ])
    .unwrap();

    let Command::Print(args) = cli.command else {
        panic!("expected print");
    };
    let request = args.into_request();
    assert_eq!(request.operator_name, "Jane");
    assert_eq!(request.copies, "-5");
}

#[test]
fn test_unknown_control_type_is_rejected() {
    assert!(Cli::try_parse_from(["label-station", "print", "--control", "SPX by KC"]).is_err());
}

#[test]
fn test_settings_set_maps_flags_to_edit() {
    let cli = Cli::try_parse_from([
        "label-station",
        "--settings",
        "/tmp/station.json",
        "settings",
        "set",
        "--ip",
        "10.0.0.9",
        "--label-number",
        "41",
        "--use-usb",
        "true",
        "--printer-name",
        "ZDesigner GK420t",
    ])
    .unwrap();

    assert_eq!(cli.settings.as_deref(), Some(std::path::Path::new("/tmp/station.json")));
    let Command::Settings(SettingsCommand::Set(args)) = cli.command else {
        panic!("expected settings set");
    };
    let edit = args.into_edit();
    assert_eq!(edit.printer_host.as_deref(), Some("10.0.0.9"));
    assert_eq!(edit.label_number.as_deref(), Some("41"));
    assert_eq!(edit.use_local_spooler, Some(true));
    assert_eq!(edit.printer_queue_name.as_deref(), Some("ZDesigner GK420t"));
    assert_eq!(edit.company_name, None);
    assert_eq!(edit.printer_port, None);
}

#[test]
fn test_prompt_strips_line_endings() {
    let prompt = LinePrompt::new(Cursor::new("hunter2\r\nsecond\n"));
    assert_eq!(prompt.ask_password().as_deref(), Some("hunter2"));
    assert_eq!(prompt.read_line("Next").as_deref(), Some("second"));
    assert_eq!(prompt.read_line("Next"), None);
}

#[test]
fn test_empty_answer_is_submitted_and_eof_cancels() {
    let prompt = LinePrompt::new(Cursor::new("\n"));
    assert_eq!(prompt.ask_password().as_deref(), Some(""));
    assert_eq!(prompt.ask_password(), None);
}

#[test]
fn test_empty_answer_is_rejected_by_a_locked_gate() {
    let settings = SettingsDocument {
        admin_password: "hunter2".to_string(),
        ..Default::default()
    };
    let prompt = LinePrompt::new(Cursor::new("\n"));
    let answer = prompt.ask_password().unwrap();
    assert!(!settings.access_gate().check(&answer));
}

#[test]
fn test_password_is_masked() {
    let settings = SettingsDocument {
        company_name: "Acme".to_string(),
        admin_password: "hunter2".to_string(),
        ..Default::default()
    };
    let text = output::masked_settings(&settings).unwrap();
    assert!(!text.contains("hunter2"));
    assert!(text.contains("\"admin_password\": \"********\""));
    assert!(text.contains("\"company_name\": \"Acme\""));

    let open = output::masked_settings(&SettingsDocument::default()).unwrap();
    assert!(open.contains("\"admin_password\": \"\""));
}

#[test]
fn test_report_lines() {
    let report = PrintReport::Finished {
        copies: vec![
            CopyReport {
                label_number: LabelNumber::new(42).unwrap(),
                result: Ok(()),
            },
            CopyReport {
                label_number: LabelNumber::new(43).unwrap(),
                result: Err("Connection failed: refused".to_string()),
            },
        ],
        halted: None,
    };

    assert_eq!(
        output::report_lines(&report),
        vec![
            "Label 000042 sent",
            "Label 000043 failed: Connection failed: refused",
            "1 of 2 label(s) sent",
        ]
    );
    assert_eq!(
        output::report_lines(&PrintReport::Denied(AccessDenied::WrongPassword)),
        vec!["Incorrect password"]
    );
}

#[test]
fn test_queue_listing_marks_choice() {
    let queues = vec!["HP LaserJet".to_string(), "ZDesigner GK420t".to_string()];
    assert_eq!(
        output::queue_lines(&queues, Some("ZDesigner GK420t")),
        vec!["  HP LaserJet", "* ZDesigner GK420t"]
    );
    assert_eq!(output::queue_lines(&[], None), vec!["No printer queues found"]);
}
