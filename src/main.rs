//! `pb-bootstrap`: provisions the application's PocketBase collections.
//!
//! Runs one pass and exits. Exit status is 0 whenever the summary is reached,
//! even if some collections failed, and 1 when the run could not start or a
//! precondition (health, inventory, admin login) failed.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::{EnvFilter, prelude::*};

use pocketbase_bootstrap::{
    AdminCredentials, Client, DEFAULT_BASE_URL, Inventory, Outcome, ProvisionEvent,
    ProvisionReport, Provisioner, Settings, TlsConfig,
};

/// Provision PocketBase collections idempotently.
#[derive(Debug, Parser)]
#[command(name = "pb-bootstrap", version, about)]
struct Args {
    /// Admin API base URL, including the `/api` prefix.
    #[arg(long, env = "PB_URL", default_value = DEFAULT_BASE_URL)]
    url: String,

    /// Per-request timeout in seconds.
    #[arg(long, env = "PB_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,

    /// Admin email; with --admin-password, authenticates before provisioning.
    #[arg(long, env = "PB_ADMIN_EMAIL", requires = "admin_password")]
    admin_email: Option<String>,

    /// Admin password.
    #[arg(
        long,
        env = "PB_ADMIN_PASSWORD",
        hide_env_values = true,
        requires = "admin_email"
    )]
    admin_password: Option<String>,

    /// PEM file with an extra CA certificate for HTTPS instances.
    #[arg(long, env = "PB_CA_CERT")]
    ca_cert: Option<PathBuf>,

    /// Skip TLS certificate verification.
    #[arg(long)]
    insecure: bool,

    /// Debug-level logging on stderr.
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn settings(&self) -> Settings {
        let tls = TlsConfig::builder()
            .maybe_ca_cert_file(self.ca_cert.clone())
            .skip_verification(self.insecure)
            .build();

        let admin = match (&self.admin_email, &self.admin_password) {
            (Some(email), Some(password)) => Some(AdminCredentials::new(email, password)),
            _ => None,
        };

        Settings::builder()
            .base_url(self.url.clone())
            .timeout(Duration::from_secs(self.timeout_secs))
            .tls(tls)
            .maybe_admin(admin)
            .build()
    }
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "pocketbase_bootstrap=debug,pb_bootstrap=debug"
    } else {
        "pocketbase_bootstrap=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

/// Capitalizes the first letter of a collection name for console lines.
fn title(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Renders one progress event as console text.
fn render(event: &ProvisionEvent<'_>) -> String {
    match event {
        ProvisionEvent::CheckingHealth => "Checking PocketBase...".to_string(),
        ProvisionEvent::HealthChecked(_) => "✓ PocketBase is healthy".to_string(),
        ProvisionEvent::ListingInventory => "\nFetching collections...".to_string(),
        ProvisionEvent::InventoryListed(Inventory::Unknown) => {
            "  Collections are auth-protected".to_string()
        }
        ProvisionEvent::InventoryListed(Inventory::Known(names)) => format!(
            "✓ Found {} collections: {:?}",
            names.len(),
            names.iter().collect::<Vec<_>>()
        ),
        ProvisionEvent::Creating { name, .. } => format!("\nCreating {} collection...", name),
        ProvisionEvent::Finished(done) => match &done.outcome {
            Outcome::AlreadyPresent => {
                format!("\n✓ {} collection already exists", title(done.name))
            }
            Outcome::Created => format!("✓ {} collection created", title(done.name)),
            Outcome::Failed(reason) => {
                format!("✗ Failed to create {} collection: {}", done.name, reason)
            }
        },
    }
}

/// Final console line, with the run's wall-clock time.
fn completion_line(report: &ProvisionReport) -> String {
    let elapsed_ms = report.duration().num_milliseconds();
    if report.is_success() {
        format!("✓ Setup complete! ({} ms)", elapsed_ms)
    } else {
        format!(
            "✗ Setup finished with {} failed collection(s) ({} ms)",
            report.failed(),
            elapsed_ms
        )
    }
}

async fn run(settings: Settings) -> anyhow::Result<ProvisionReport> {
    let client = Client::from_settings(&settings).context("invalid configuration")?;
    let mut provisioner = Provisioner::new(client.clone());

    if let Some(admin) = &settings.admin {
        println!("Authenticating as {}...", admin.email());
        let token = client
            .admins()
            .authenticate(admin)
            .await
            .context("admin authentication failed")?;
        println!("✓ Authenticated\n");
        provisioner = provisioner.with_token(token);
    }

    let report = provisioner
        .run_with(|event| println!("{}", render(&event)))
        .await
        .context("provisioning aborted")?;
    Ok(report)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(args.settings()).await {
        Ok(report) => {
            println!("\n{}", report);
            println!("\n{}", completion_line(&report));
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("ERROR: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
