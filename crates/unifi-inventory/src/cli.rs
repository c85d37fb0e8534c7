//! Clap derive structures for the `unifi-inventory` binary.

use clap::Parser;

/// Ansible dynamic inventory for a UniFi network controller
#[derive(Debug, Parser)]
#[command(
    name = "unifi-inventory",
    version,
    about = "UniFi Ansible Inventory Script",
    long_about = "Queries a UniFi controller for managed devices and connected clients\n\
        and prints an Ansible dynamic inventory as JSON.\n\n\
        Configuration comes from the environment: UNIFI_HOST, UNIFI_PORT,\n\
        UNIFI_SITE, UNIFI_USERNAME, UNIFI_PASSWORD (base64), UNIFI_ALLOW_INSECURE,\n\
        UNIFI_CONTROLLER, UNIFI_PLATFORM, UNIFI_CA_CERT, UNIFI_TIMEOUT."
)]
pub struct Cli {
    /// List all inventory hosts (default action)
    #[arg(long)]
    pub list: bool,

    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}
