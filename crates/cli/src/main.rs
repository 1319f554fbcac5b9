use clap::Parser;
use rootwalk_domain::{CliOverrides, DomainError, RecordType};
use rootwalk_infrastructure::dns::IterativeLookup;
use std::io::Write;
use tracing::{debug, info};

mod bootstrap;
mod output;

#[derive(Parser)]
#[command(name = "rootwalk")]
#[command(version)]
#[command(about = "Iterative DNS lookups starting from the root servers")]
struct Cli {
    /// Domains to look up
    #[arg(required = true, value_name = "DOMAIN")]
    domains: Vec<String>,

    /// Record type (A, SOA, NS, TXT, CNAME, MX)
    #[arg(short = 't', long = "type", default_value = "A")]
    record_type: RecordType,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        log_level: cli.log_level.clone(),
    };
    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        record_type = %cli.record_type,
        domains = cli.domains.len(),
        "Starting lookups"
    );

    let lookup = IterativeLookup::from_config(&config.resolver);
    let mut stdout = std::io::stdout();
    let mut failed = 0usize;

    for domain in &cli.domains {
        output::header(&mut stdout, domain, cli.record_type)?;

        if let Err(e) = run_lookup(&lookup, &mut stdout, domain, cli.record_type).await? {
            debug!(domain = %domain, error = %e, "Lookup failed");
            output::failure(&mut stdout, &e)?;
            failed += 1;
        }
    }

    stdout.flush()?;

    if failed > 0 {
        info!(failed, "Some lookups failed");
        std::process::exit(1);
    }

    Ok(())
}

/// Runs one lookup and prints its result. The outer error is an output
/// failure; the inner one is the lookup's own.
async fn run_lookup(
    lookup: &IterativeLookup,
    out: &mut impl Write,
    domain: &str,
    record_type: RecordType,
) -> anyhow::Result<Result<(), DomainError>> {
    let printed = match record_type {
        RecordType::A => lookup
            .lookup_a(domain)
            .await
            .map(|v| output::values(out, record_type, &v)),
        RecordType::SOA => lookup
            .lookup_soa(domain)
            .await
            .map(|v| output::values(out, record_type, &v)),
        RecordType::NS => lookup
            .lookup_ns(domain)
            .await
            .map(|v| output::values(out, record_type, &v)),
        RecordType::TXT => lookup
            .lookup_txt(domain)
            .await
            .map(|v| output::values(out, record_type, &v)),
        RecordType::CNAME => lookup
            .lookup_cname(domain)
            .await
            .map(|target| output::cname(out, &target)),
        RecordType::MX => lookup
            .lookup_mx(domain)
            .await
            .map(|records| output::mx(out, &records)),
    };

    match printed {
        Ok(written) => {
            written?;
            Ok(Ok(()))
        }
        Err(e) => Ok(Err(e)),
    }
}
