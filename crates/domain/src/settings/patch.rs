use super::keys;
use crate::label::LabelNumber;
use serde_json::{Map, Value};

/// A set of key-wise updates to merge into the stored settings document.
///
/// Only the keys present in the patch are overwritten on save.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsPatch(Map<String, Value>);

impl SettingsPatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an arbitrary key
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn printer_host(self, host: &str) -> Self {
        self.set(keys::PRINTER_HOST, host)
    }

    pub fn printer_port(self, port: &str) -> Self {
        self.set(keys::PRINTER_PORT, port)
    }

    pub fn company_name(self, name: &str) -> Self {
        self.set(keys::COMPANY_NAME, name)
    }

    pub fn ra(self, ra: &str) -> Self {
        self.set(keys::RA, ra)
    }

    pub fn control_label(self, control: &str) -> Self {
        self.set(keys::CONTROL_LABEL, control)
    }

    pub fn label_number(self, number: LabelNumber) -> Self {
        self.set(keys::LABEL_NUMBER, number.to_string())
    }

    pub fn use_local_spooler(self, enabled: bool) -> Self {
        self.set(keys::USE_LOCAL_SPOOLER, enabled)
    }

    pub fn admin_password(self, password: &str) -> Self {
        self.set(keys::ADMIN_PASSWORD, password)
    }

    pub fn printer_queue_name(self, queue: &str) -> Self {
        self.set(keys::PRINTER_QUEUE_NAME, queue)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Overlay this patch onto a raw JSON object, key by key
    pub fn merge_into(self, target: &mut Map<String, Value>) {
        for (key, value) in self.0 {
            target.insert(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_merge_overwrites_only_patched_keys() {
        let mut stored = json!({
            "ip": "10.0.0.5",
            "port": "9100",
            "custom_key": [1, 2, 3]
        })
        .as_object()
        .cloned()
        .unwrap();

        SettingsPatch::new()
            .printer_port("6101")
            .use_local_spooler(true)
            .merge_into(&mut stored);

        assert_eq!(stored["ip"], json!("10.0.0.5"));
        assert_eq!(stored["port"], json!("6101"));
        assert_eq!(stored["use_usb"], json!(true));
        assert_eq!(stored["custom_key"], json!([1, 2, 3]));
    }

    #[test]
    fn test_label_number_is_stored_padded() {
        let patch = SettingsPatch::new().label_number(LabelNumber::new(42).unwrap());
        assert_eq!(patch.get(keys::LABEL_NUMBER), Some(&json!("000042")));
    }
}
