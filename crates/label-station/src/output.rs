use application::printer::{CopyReport, PrintReport};
use domain::SettingsDocument;
use serde_json::Value;

const PASSWORD_MASK: &str = "********";

pub fn copy_line(copy: &CopyReport) -> String {
    match &copy.result {
        Ok(()) => format!("Label {} sent", copy.label_number),
        Err(reason) => format!("Label {} failed: {}", copy.label_number, reason),
    }
}

/// One line per copy followed by a summary
pub fn report_lines(report: &PrintReport) -> Vec<String> {
    match report {
        PrintReport::Denied(reason) => vec![reason.to_string()],
        PrintReport::Finished { copies, halted } => {
            let mut lines: Vec<String> = copies.iter().map(copy_line).collect();
            if let Some(reason) = halted {
                lines.push(format!("Stopped: {reason}"));
            }
            lines.push(format!(
                "{} of {} label(s) sent",
                report.sent_count(),
                copies.len()
            ));
            lines
        }
    }
}

/// Settings as pretty JSON with the admin password hidden
pub fn masked_settings(settings: &SettingsDocument) -> serde_json::Result<String> {
    let mut value = serde_json::to_value(settings)?;
    if let Some(Value::String(password)) = value.get_mut("admin_password") {
        if !password.is_empty() {
            *password = PASSWORD_MASK.to_string();
        }
    }
    serde_json::to_string_pretty(&value)
}

/// Queue listing with the auto-discovered choice marked
pub fn queue_lines(queues: &[String], chosen: Option<&str>) -> Vec<String> {
    if queues.is_empty() {
        return vec!["No printer queues found".to_string()];
    }
    queues
        .iter()
        .map(|queue| {
            let marker = if Some(queue.as_str()) == chosen { "*" } else { " " };
            format!("{marker} {queue}")
        })
        .collect()
}
