use crate::label::LabelSequencer;
use crate::printer::TransportDispatcher;
use chrono::{Local, NaiveDateTime};
use domain::label::{self, ControlType, LabelFields, LabelJob, LabelNumber};
use domain::printer::TransportFactory;
use domain::settings::{SettingsDocument, SettingsRepository};
use domain::OperatorPrompt;
use std::sync::Arc;
use tracing::{error, info, warn};

/// What the operator asked for, as typed into the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrintRequest {
    pub control_type: ControlType,
    pub operator_name: String,
    /// Raw copy count; see [`parse_copy_count`]
    pub copies: String,
}

/// Why a request was refused before anything was printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDenied {
    Cancelled,
    WrongPassword,
}

impl std::fmt::Display for AccessDenied {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cancelled => write!(f, "Print cancelled"),
            Self::WrongPassword => write!(f, "Incorrect password"),
        }
    }
}

/// Outcome of one copy: the number it consumed and whether it reached the printer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyReport {
    pub label_number: LabelNumber,
    pub result: Result<(), String>,
}

impl CopyReport {
    pub fn is_sent(&self) -> bool {
        self.result.is_ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrintReport {
    /// Gate refused the request; no number consumed, nothing sent
    Denied(AccessDenied),
    /// The copy loop ran. `halted` is set when a label number could not be
    /// drawn, which stops the remaining copies.
    Finished {
        copies: Vec<CopyReport>,
        halted: Option<String>,
    },
}

impl PrintReport {
    pub fn sent_count(&self) -> usize {
        match self {
            Self::Denied(_) => 0,
            Self::Finished { copies, .. } => copies.iter().filter(|c| c.is_sent()).count(),
        }
    }

    /// True when every requested copy reached the printer
    pub fn is_success(&self) -> bool {
        match self {
            Self::Denied(_) => false,
            Self::Finished { copies, halted } => {
                halted.is_none() && copies.iter().all(CopyReport::is_sent)
            }
        }
    }
}

/// Number of copies from operator input; anything unusable means one copy
pub fn parse_copy_count(raw: &str) -> u64 {
    match raw.trim().parse::<i64>() {
        Ok(n) if n > 0 => n as u64,
        _ => 1,
    }
}

/// Runs print requests: gate check, then number → render → dispatch per copy
pub struct PrintOrchestrator {
    settings: SettingsDocument,
    repository: Arc<dyn SettingsRepository>,
    sequencer: LabelSequencer,
    dispatcher: TransportDispatcher,
}

impl PrintOrchestrator {
    pub fn new(
        settings: SettingsDocument,
        repository: Arc<dyn SettingsRepository>,
        factory: Arc<dyn TransportFactory>,
    ) -> Self {
        Self {
            settings,
            sequencer: LabelSequencer::new(repository.clone()),
            repository,
            dispatcher: TransportDispatcher::new(factory),
        }
    }

    /// Build with the settings currently stored
    pub async fn load(
        repository: Arc<dyn SettingsRepository>,
        factory: Arc<dyn TransportFactory>,
    ) -> Self {
        let settings = repository.load().await;
        Self::new(settings, repository, factory)
    }

    pub fn settings(&self) -> &SettingsDocument {
        &self.settings
    }

    /// Re-read settings after they were edited
    pub async fn reload(&mut self) {
        self.settings = self.repository.load().await;
    }

    pub async fn print(
        &mut self,
        request: &PrintRequest,
        prompt: &dyn OperatorPrompt,
    ) -> PrintReport {
        self.print_at(request, prompt, Local::now().naive_local())
            .await
    }

    /// Same as [`Self::print`] with an explicit timestamp
    pub async fn print_at(
        &mut self,
        request: &PrintRequest,
        prompt: &dyn OperatorPrompt,
        now: NaiveDateTime,
    ) -> PrintReport {
        let gate = self.settings.access_gate();
        if gate.is_locked() {
            let Some(candidate) = prompt.ask_password() else {
                info!("Print request cancelled at password prompt");
                return PrintReport::Denied(AccessDenied::Cancelled);
            };
            if !gate.check(&candidate) {
                warn!("🔒 Print request rejected: wrong password");
                return PrintReport::Denied(AccessDenied::WrongPassword);
            }
        }

        let timestamp = LabelJob::format_timestamp(now);
        let copies = parse_copy_count(&request.copies);
        let fields = LabelFields::from_settings(&self.settings);
        let target = self.settings.print_target();

        info!(copies, printer = %target, control = %request.control_type, "🖨️ Printing labels");

        let mut reports = Vec::new();
        for _ in 0..copies {
            let label_number = match self.sequencer.next(&mut self.settings).await {
                Ok(number) => number,
                Err(e) => {
                    error!("❌ Could not draw a label number: {}", e);
                    return PrintReport::Finished {
                        copies: reports,
                        halted: Some(e.to_string()),
                    };
                }
            };

            let job = LabelJob {
                control_type: request.control_type,
                operator_name: request.operator_name.clone(),
                timestamp: timestamp.clone(),
                label_number,
            };
            let document = label::render(&fields, &job);

            let result = self
                .dispatcher
                .dispatch(&target, &document)
                .await
                .map_err(|e| e.to_string());

            if result.is_ok() {
                info!(label = %label_number, "Printed label {}", label_number);
            }
            reports.push(CopyReport {
                label_number,
                result,
            });
        }

        PrintReport::Finished {
            copies: reports,
            halted: None,
        }
    }
}
