use application::{PrintRequest, SettingsEdit};
use clap::{Args, Parser, Subcommand};
use domain::ControlType;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Prints numbered Zebra labels", long_about = None)]
pub struct Cli {
    /// Path to config directory (optional)
    #[arg(long, default_value = "config")]
    pub config_dir: String,

    /// Override the settings document location
    #[arg(long)]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print one or more labels
    Print(PrintArgs),

    /// Inspect or edit the station settings
    #[command(subcommand)]
    Settings(SettingsCommand),

    /// Change the admin password (current, new and confirmation read from stdin)
    Password,

    /// List local print queues and the one auto-discovery would use
    Printers,
}

#[derive(Args, Debug)]
pub struct PrintArgs {
    #[arg(long, default_value = "SPX by XRY")]
    pub control: ControlType,

    /// Operator name printed on the label
    #[arg(long, default_value = "")]
    pub name: String,

    /// Number of copies; anything that is not a positive integer prints one
    #[arg(long, default_value = "1", allow_hyphen_values = true)]
    pub copies: String,
}

impl PrintArgs {
    pub fn into_request(self) -> PrintRequest {
        PrintRequest {
            control_type: self.control,
            operator_name: self.name,
            copies: self.copies,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum SettingsCommand {
    /// Show the stored settings (password masked)
    Show,

    /// Change selected settings; omitted flags keep their stored value
    Set(SettingsSetArgs),
}

#[derive(Args, Debug, Default)]
pub struct SettingsSetArgs {
    /// Printer IP address or host name
    #[arg(long)]
    pub ip: Option<String>,

    #[arg(long)]
    pub port: Option<String>,

    #[arg(long)]
    pub company_name: Option<String>,

    #[arg(long)]
    pub ra: Option<String>,

    /// "Control provided by" text
    #[arg(long)]
    pub control: Option<String>,

    /// Counter to continue from; the next label gets this plus one
    #[arg(long, allow_hyphen_values = true)]
    pub label_number: Option<String>,

    /// Print through the local spooler instead of TCP
    #[arg(long)]
    pub use_usb: Option<bool>,

    /// Spooler queue to use instead of auto-discovery
    #[arg(long)]
    pub printer_name: Option<String>,
}

impl SettingsSetArgs {
    pub fn into_edit(self) -> SettingsEdit {
        SettingsEdit {
            printer_host: self.ip,
            printer_port: self.port,
            company_name: self.company_name,
            ra: self.ra,
            control_label: self.control,
            label_number: self.label_number,
            use_local_spooler: self.use_usb,
            printer_queue_name: self.printer_name,
        }
    }
}
