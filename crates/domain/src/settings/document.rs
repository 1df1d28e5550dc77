use crate::error::Result;
use crate::gate::AccessGate;
use crate::label::LabelNumber;
use crate::printer::PrintTarget;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// The persisted station configuration
///
/// Field names on disk are the legacy keys listed in [`super::keys`]. Keys the
/// station does not know about are kept in `extra` and written back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingsDocument {
    #[serde(rename = "ip", default, deserialize_with = "lenient_string")]
    pub printer_host: String,

    /// Stored as text by the settings form, but integers are accepted too
    #[serde(rename = "port", default, deserialize_with = "lenient_string")]
    pub printer_port: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub company_name: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub ra: String,

    /// "Control provided by" text
    #[serde(rename = "control", default, deserialize_with = "lenient_string")]
    pub control_label: String,

    /// Last label number handed out, as persisted
    #[serde(
        default,
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub label_number: Option<String>,

    #[serde(rename = "use_usb", default, deserialize_with = "lenient_bool")]
    pub use_local_spooler: bool,

    #[serde(default, deserialize_with = "lenient_string")]
    pub admin_password: String,

    #[serde(
        rename = "printer_name",
        default,
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub printer_queue_name: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SettingsDocument {
    /// Build a document from a raw JSON value
    pub fn from_value(value: Value) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Current label counter; a fresh install starts from [`LabelNumber::INITIAL`]
    pub fn label_counter(&self) -> Result<LabelNumber> {
        match self.label_number.as_deref() {
            None => Ok(LabelNumber::INITIAL),
            Some(raw) => LabelNumber::parse(raw),
        }
    }

    /// Explicitly configured spooler queue, if any
    pub fn queue_override(&self) -> Option<&str> {
        self.printer_queue_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    pub fn access_gate(&self) -> AccessGate {
        AccessGate::from_secret(&self.admin_password)
    }

    /// Where rendered labels go, according to the transport choice
    pub fn print_target(&self) -> PrintTarget {
        if self.use_local_spooler {
            PrintTarget::LocalQueue {
                queue_override: self.queue_override().map(str::to_string),
            }
        } else {
            PrintTarget::Network {
                host: self.printer_host.trim().to_string(),
                port: self.printer_port.trim().to_string(),
            }
        }
    }
}

fn value_to_string(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    }
}

fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_to_string(Value::deserialize(deserializer)?))
}

fn lenient_opt_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        other => Ok(Some(value_to_string(other))),
    }
}

fn lenient_bool<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => matches!(s.trim().to_lowercase().as_str(), "true" | "1" | "yes"),
        _ => false,
    })
}
