use clap::Parser;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(name = "imageswap-webhook")]
#[command(about = "HTTP server scaffold for the ImageSwap admission webhook")]
pub struct Cli {
    /// How long to wait for in-flight requests to finish during shutdown,
    /// e.g. 15s or 1m.
    #[arg(long, default_value = "15s", value_parser = parse_duration)]
    pub graceful_timeout: Duration,
}

pub fn parse_duration(s: &str) -> Result<Duration, String> {
    let s = s.trim();
    if let Some(hours) = s.strip_suffix('h') {
        let n: u64 = hours
            .parse()
            .map_err(|_| format!("invalid duration: {}", s))?;
        n.checked_mul(3600)
            .map(Duration::from_secs)
            .ok_or_else(|| format!("duration too large: {}", s))
    } else if let Some(minutes) = s.strip_suffix('m') {
        let n: u64 = minutes
            .parse()
            .map_err(|_| format!("invalid duration: {}", s))?;
        n.checked_mul(60)
            .map(Duration::from_secs)
            .ok_or_else(|| format!("duration too large: {}", s))
    } else if let Some(secs) = s.strip_suffix('s') {
        secs.parse()
            .map(Duration::from_secs)
            .map_err(|_| format!("invalid duration: {}", s))
    } else {
        s.parse().map(Duration::from_secs).map_err(|_| {
            format!("invalid duration '{}', expected e.g. 15s, 1m, 2h", s)
        })
    }
}
