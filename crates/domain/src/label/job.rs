use super::LabelNumber;
use crate::error::{DomainError, Result};
use crate::settings::SettingsDocument;
use chrono::NaiveDateTime;
use std::str::FromStr;

/// Screening method printed in large type on the label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlType {
    #[default]
    SpxByXry,
}

impl ControlType {
    pub const ALL: &'static [ControlType] = &[ControlType::SpxByXry];

    pub fn label(&self) -> &'static str {
        match self {
            Self::SpxByXry => "SPX by XRY",
        }
    }
}

impl std::fmt::Display for ControlType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ControlType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::UnknownControlType(wanted.to_string()))
    }
}

/// Station-wide fields printed on every label, taken from settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelFields {
    pub company_name: String,
    pub ra: String,
    pub control_label: String,
}

impl LabelFields {
    pub fn from_settings(settings: &SettingsDocument) -> Self {
        Self {
            company_name: settings.company_name.clone(),
            ra: settings.ra.clone(),
            control_label: settings.control_label.clone(),
        }
    }
}

/// One physical label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelJob {
    pub control_type: ControlType,
    pub operator_name: String,
    /// Already formatted, see [`LabelJob::format_timestamp`]
    pub timestamp: String,
    pub label_number: LabelNumber,
}

impl LabelJob {
    /// `DDMonYY HH:MM`, uppercase (e.g. `01JAN25 10:00`)
    pub fn format_timestamp(at: NaiveDateTime) -> String {
        at.format("%d%b%y %H:%M").to_string().to_uppercase()
    }
}
