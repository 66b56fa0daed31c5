use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use log::{debug, info, LevelFilter};
use wol::{HardwareAddress, SecureOnPassword};

/// Sends a Wake-on-LAN magic packet.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// MAC address of the device to wake.
    mac: String,

    /// The UDP address to send the packet to.
    #[arg(short, long, default_value = wol::DEFAULT_ADDR)]
    addr: String,

    /// The SecureOn password, as 12 hexadecimal digits.
    #[arg(short, long)]
    pass: Option<String>,

    /// Minimum log level.
    #[arg(short = 'L', long, default_value_t = LevelFilter::Warn)]
    log_level: LevelFilter,
}

fn run(args: &Args) -> Result<()> {
    // an empty password means no password
    let password = match args.pass.as_deref() {
        None | Some("") => None,
        Some(pass) => Some(pass.parse::<SecureOnPassword>()?),
    };
    let mac: HardwareAddress = args.mac.parse()?;
    debug!("target {mac}, destination {}", args.addr);

    wol::send_udp(&args.addr, mac, password)?;
    info!("packet sent to {} with MAC {mac}", args.addr);

    Ok(())
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        // --help and --version
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            eprint!("{err}");
            return ExitCode::FAILURE;
        }
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.log_level.to_string()),
    )
    .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
