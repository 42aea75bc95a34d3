//! One-shot analysis: `cite-scout-analyze <url> [--pretty] [--timeout SECS]`.
//! Prints the analysis as JSON on stdout; exits 1 on any failure.

use cite_scout::core::config::{self, ScoutConfig};
use cite_scout::{tools::analyze, AppState};

struct CliArgs {
    url: Option<String>,
    pretty: bool,
    timeout_secs: Option<u64>,
}

fn parse_args() -> CliArgs {
    let mut out = CliArgs {
        url: None,
        pretty: false,
        timeout_secs: None,
    };
    let mut args = std::env::args().skip(1);
    while let Some(a) = args.next() {
        if a == "--pretty" {
            out.pretty = true;
        } else if a == "--timeout" {
            out.timeout_secs = args.next().and_then(|v| v.parse().ok());
        } else if let Some(rest) = a.strip_prefix("--timeout=") {
            out.timeout_secs = rest.parse().ok();
        } else if out.url.is_none() {
            out.url = Some(a);
        }
    }
    out
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args();
    let file_config = config::load_scout_config();
    let scout_config = ScoutConfig {
        fetch_timeout_secs: args.timeout_secs.or(file_config.fetch_timeout_secs),
        ..file_config
    };
    let state = AppState::new(scout_config)?;

    match analyze::analyze_url(&state, args.url.as_deref()).await {
        Ok(result) => {
            let json = if args.pretty {
                serde_json::to_string_pretty(&result)?
            } else {
                serde_json::to_string(&result)?
            };
            println!("{}", json);
            Ok(())
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
