//! Solar sizer entry point: CLI wiring for estimation, diagram lookup, and the web server.

mod cli;

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;

use solar_sizer::config::AppConfig;
use solar_sizer::io::appliances::{export_breakdown, load_appliances};
use solar_sizer::sizing::diagram::select_diagram;
use solar_sizer::sizing::report::calculate;
use solar_sizer::telemetry;

use cli::{Cli, Command};

/// Loads the config file if given, applies the panel cap override, and validates.
fn load_config(path: Option<&Path>, max_panel_kw: Option<f64>) -> Result<AppConfig, String> {
    let mut cfg = match path {
        Some(p) => AppConfig::from_toml_file(p).map_err(|e| e.to_string())?,
        None => AppConfig::default(),
    };
    if let Some(cap) = max_panel_kw {
        cfg.panel.max_panel_power_kw = cap;
    }

    let errors = cfg.validate();
    if !errors.is_empty() {
        let joined: Vec<String> = errors.iter().map(ToString::to_string).collect();
        return Err(joined.join("\n"));
    }
    Ok(cfg)
}

fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Command::Estimate {
            appliances,
            location,
            config,
            max_panel_kw,
            breakdown_out,
        } => {
            let cfg = load_config(config.as_deref(), max_panel_kw)?;
            let entries = load_appliances(&appliances)
                .map_err(|e| format!("{}: {e}", appliances.display()))?;
            tracing::debug!(count = entries.len(), "appliances loaded");

            let report =
                calculate(location, entries, &cfg.panel.model()).map_err(|e| e.to_string())?;
            println!("{report}");

            if let Some(ref path) = breakdown_out {
                export_breakdown(&report, path)
                    .map_err(|e| format!("failed to write CSV: {e}"))?;
                tracing::info!("breakdown written to {}", path.display());
            }
            Ok(())
        }
        Command::Diagram { panel_count } => {
            if panel_count < 0 {
                tracing::warn!(panel_count, "negative panel count mapped to smallest diagram");
            }
            println!("{}", select_diagram(panel_count));
            Ok(())
        }
        #[cfg(feature = "api")]
        Command::Serve {
            config,
            bind,
            port,
            diagrams_dir,
            max_panel_kw,
        } => {
            use std::net::{IpAddr, SocketAddr};
            use std::sync::Arc;

            use solar_sizer::api::{self, AppState};
            use solar_sizer::io::diagrams::DirectoryStore;

            let mut cfg = load_config(config.as_deref(), max_panel_kw)?;
            if let Some(b) = bind {
                cfg.server.bind = b;
            }
            if let Some(p) = port {
                cfg.server.port = p;
            }
            if let Some(d) = diagrams_dir {
                cfg.server.diagrams_dir = d;
            }

            let ip: IpAddr = cfg
                .server
                .bind
                .parse()
                .map_err(|e| format!("server.bind \"{}\": {e}", cfg.server.bind))?;
            let addr = SocketAddr::new(ip, cfg.server.port);

            let store = DirectoryStore::new(&cfg.server.diagrams_dir);
            for id in store.missing() {
                tracing::warn!("diagram {id} missing at {}", store.path_for(id).display());
            }

            let state = Arc::new(AppState::new(cfg.panel.model(), store));
            let rt = tokio::runtime::Runtime::new()
                .map_err(|e| format!("failed to create tokio runtime: {e}"))?;
            rt.block_on(api::serve(state, addr))
                .map_err(|e| format!("server error on {addr}: {e}"))
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    telemetry::init(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
