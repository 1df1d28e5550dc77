use anyhow::{Result, bail};
use clap::Parser;
use dotenv::dotenv;
use std::io::BufReader;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use application::{PrintOrchestrator, PrintReport, SettingsService};
use domain::printer::resolve_queue;
use domain::settings::SettingsRepository;
use infrastructure::printer::system_spooler;
use infrastructure::{AppConfig, JsonSettingsStore, SystemTransportFactory};
use label_station::output;
use label_station::{Cli, Command, LinePrompt, SettingsCommand};

async fn run() -> Result<()> {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,label_station=debug,application=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load(&cli.config_dir)?;
    if let Some(path) = cli.settings {
        config.settings_path = Some(path);
    }

    let settings_path = config.settings_path();
    info!("📂 Settings document: {}", settings_path.display());

    let store: Arc<dyn SettingsRepository> = Arc::new(JsonSettingsStore::new(&settings_path));
    let spooler = system_spooler();
    let prompt = LinePrompt::new(BufReader::new(std::io::stdin()));

    match cli.command {
        Command::Print(args) => {
            let factory = Arc::new(SystemTransportFactory::new(
                spooler,
                config.network.connect_timeout(),
                &config.spooler.job_name,
            ));
            let mut orchestrator = PrintOrchestrator::load(store, factory).await;

            let report = orchestrator.print(&args.into_request(), &prompt).await;
            for line in output::report_lines(&report) {
                println!("{line}");
            }

            match report {
                PrintReport::Denied(reason) => bail!("{reason}"),
                ref finished if !finished.is_success() => bail!("Not every label was printed"),
                _ => {}
            }
        }

        Command::Settings(SettingsCommand::Show) => {
            let settings = store.load().await;
            println!("{}", output::masked_settings(&settings)?);
        }

        Command::Settings(SettingsCommand::Set(args)) => {
            let service = SettingsService::new(store);
            let settings = service.apply(args.into_edit()).await?;
            println!("{}", output::masked_settings(&settings)?);
        }

        Command::Password => {
            let service = SettingsService::new(store);
            let locked = service.current().await.access_gate().is_locked();

            let current = if locked {
                match prompt.read_line("Current password") {
                    Some(current) => current,
                    None => bail!("Password change cancelled"),
                }
            } else {
                String::new()
            };
            let (Some(new_password), Some(confirmation)) = (
                prompt.read_line("New password"),
                prompt.read_line("Confirm new password"),
            ) else {
                bail!("Password change cancelled");
            };

            service
                .change_password(&current, &new_password, &confirmation)
                .await?;
            println!("Password updated");
        }

        Command::Printers => {
            let settings = store.load().await;
            let queues = spooler.list_queues().await?;
            let chosen = resolve_queue(settings.queue_override(), &queues);

            if chosen.is_none() && !queues.is_empty() {
                warn!("No Zebra or ZDesigner queue among the installed printers");
            }
            for line in output::queue_lines(&queues, chosen.as_deref()) {
                println!("{line}");
            }
        }
    }

    Ok(())
}

fn main() {
    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("❌ Failed to start runtime: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = rt.block_on(run()) {
        eprintln!("❌ {e:#}");

        #[cfg(target_os = "windows")]
        {
            eprintln!("\nPress Enter to close this window...");
            let mut input = String::new();
            let _ = std::io::stdin().read_line(&mut input);
        }

        std::process::exit(1);
    }
}
