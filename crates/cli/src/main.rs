use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use triage_core::config::clinic_name_from_env_value;
use triage_core::constants::CLINIC_NAME_ENV;
use triage_core::validation::{validate_birth_date_now, validate_cpf, validate_email, validate_name};
use triage_core::{CoreConfig, TriageService};

mod replay;

#[derive(Parser)]
#[command(name = "triage")]
#[command(about = "Walk-in clinic triage queue")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a YAML file of arrivals and print the order patients are called in
    Replay {
        /// Path to the arrivals file
        file: PathBuf,
    },
    /// Run the registration rules on one set of patient details
    Check {
        #[arg(long)]
        name: String,
        /// CPF, 11 digits
        #[arg(long)]
        cpf: String,
        #[arg(long)]
        email: String,
        /// Date of birth (DD/MM/YYYY)
        #[arg(long)]
        birth_date: String,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("triage=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Replay { file }) => {
            let clinic_name = clinic_name_from_env_value(std::env::var(CLINIC_NAME_ENV).ok())?;
            let cfg = Arc::new(CoreConfig::new(clinic_name));
            tracing::info!("++ Starting triage desk for {}", cfg.clinic_name());

            let arrivals = replay::load_arrivals(&file)?;
            let mut service = TriageService::new(cfg);
            let report = replay::replay(&mut service, arrivals);

            for rejected in &report.rejected {
                eprintln!(
                    "Skipped arrival #{} ({}): {}",
                    rejected.index + 1,
                    rejected.name,
                    rejected.reason
                );
            }
            for (position, called) in report.called.iter().enumerate() {
                println!("{:>3}. [{}] {}", position + 1, called.risk, called.name);
            }
        }
        Some(Commands::Check {
            name,
            cpf,
            email,
            birth_date,
        }) => {
            let result = validate_name(&name)
                .and_then(|()| validate_cpf(&cpf))
                .and_then(|()| validate_email(&email))
                .and_then(|()| validate_birth_date_now(&birth_date));
            match result {
                Ok(()) => println!("ok"),
                Err(e) => println!("{}", e),
            }
        }
        None => {
            println!("Use 'triage --help' for commands");
        }
    }

    Ok(())
}
