//! Dumps the OGN traffic around a position to stdout, either as raw APRS-IS
//! sentences or as SBS-1 (BaseStation) lines that ADS-B tools can read.
//!
//! ```text
//! dump-ogn --lat 48.3537 --lon 11.7860 --radius 30 --sbs1
//! ```

use std::io::Write;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;

use ogn_aprs::{AprsClient, AprsClientConfig, OutputFormatter, RawFormatter, Sbs1Formatter};

#[derive(Parser, Debug)]
#[command(name = "dump-ogn", version, about = "Dump OGN traffic from an APRS-IS server")]
struct Args {
    /// OGN APRS-IS server
    #[arg(short, long, default_value = "aprs.glidernet.org")]
    server: String,

    /// Server port
    #[arg(short, long, default_value_t = 14580)]
    port: u16,

    /// Latitude of the position filter
    #[arg(long, allow_negative_numbers = true)]
    lat: f64,

    /// Longitude of the position filter
    #[arg(long, allow_negative_numbers = true)]
    lon: f64,

    /// Radius of the position filter in km
    #[arg(long, default_value_t = 50)]
    radius: u32,

    /// Output in SBS-1 BaseStation format (dump1090-compatible)
    #[arg(long)]
    sbs1: bool,

    /// Callsign to log in with [default: DMP followed by six random digits]
    #[arg(long)]
    callsign: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the traffic, everything else goes to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let callsign = args
        .callsign
        .unwrap_or_else(|| format!("DMP{}", rand::random_range(100_000..1_000_000)));

    let formatter: Box<dyn OutputFormatter> = if args.sbs1 {
        Box::new(Sbs1Formatter)
    } else {
        Box::new(RawFormatter)
    };

    let config = AprsClientConfig {
        server: args.server,
        port: args.port,
        callsign,
        app_name: "dump-ogn".to_string(),
        latitude: args.lat,
        longitude: args.lon,
        radius_km: args.radius,
        ..AprsClientConfig::default()
    };

    let mut client = AprsClient::connect(config.clone())
        .await
        .with_context(|| format!("Failed to connect to {}:{}", config.server, config.port))?;
    info!(
        "Logged in as {} (filter: {},{} radius {}km)",
        config.callsign, config.latitude, config.longitude, config.radius_km
    );

    let mut stdout = std::io::stdout().lock();
    while let Some(line) = client.read_line().await.context("Failed to read from server")? {
        let message = ogn_aprs::parse(line);
        if let Some(output) = formatter.format(&message) {
            writeln!(stdout, "{}", output).context("Failed to write to stdout")?;
            stdout.flush()?;
        }
    }

    bail!("Disconnected from server")
}
