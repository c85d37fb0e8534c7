mod cli;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use unifi_inventory_core::Controller;

use crate::cli::Cli;
use crate::error::CliError;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    if let Err(err) = run(&cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // stdout carries the inventory document; logs must stay on stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: &Cli) -> Result<(), CliError> {
    // `--list` is the only action; accepted for Ansible's calling convention.
    let config = unifi_inventory_config::load_inventory_config()?;
    tracing::debug!(
        list = cli.list,
        url = %config.url,
        site = %config.site,
        platform = %config.platform,
        "loaded configuration"
    );

    let mut controller = Controller::new(config);
    controller.connect().await?;

    let rendered = controller
        .inventory()
        .await
        .map_err(CliError::from)
        .and_then(|inventory| output::render_json_pretty(&inventory));
    controller.disconnect().await;

    output::print_output(&rendered?)
}
