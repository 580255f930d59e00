use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Household solar panel sizing calculator.
#[derive(Debug, Parser)]
#[command(name = "solar-sizer", version)]
pub struct Cli {
    /// Log debug output (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Size a panel array for appliances listed in a CSV file
    Estimate {
        /// CSV with columns name,unit_power_watts,quantity,daily_hours
        #[arg(long)]
        appliances: PathBuf,
        /// Location label shown in the report
        #[arg(long, default_value = "")]
        location: String,
        /// TOML configuration file
        #[arg(long)]
        config: Option<PathBuf>,
        /// Override panel.max_panel_power_kw (kW)
        #[arg(long, allow_negative_numbers = true)]
        max_panel_kw: Option<f64>,
        /// Write the per-appliance breakdown to this CSV file
        #[arg(long)]
        breakdown_out: Option<PathBuf>,
    },
    /// Print the wiring diagram identifier for a panel count
    Diagram {
        #[arg(allow_negative_numbers = true)]
        panel_count: i64,
    },
    /// Serve the web calculator
    #[cfg(feature = "api")]
    Serve {
        /// TOML configuration file
        #[arg(long)]
        config: Option<PathBuf>,
        /// Override server.bind
        #[arg(long)]
        bind: Option<String>,
        /// Override server.port
        #[arg(long)]
        port: Option<u16>,
        /// Override server.diagrams_dir
        #[arg(long)]
        diagrams_dir: Option<PathBuf>,
        /// Override panel.max_panel_power_kw (kW)
        #[arg(long, allow_negative_numbers = true)]
        max_panel_kw: Option<f64>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_estimate() {
        let cli = Cli::try_parse_from([
            "solar-sizer",
            "estimate",
            "--appliances",
            "home.csv",
            "--max-panel-kw",
            "0.4",
        ])
        .expect("parse should succeed");
        match cli.command {
            Command::Estimate {
                appliances,
                max_panel_kw,
                location,
                ..
            } => {
                assert_eq!(appliances, PathBuf::from("home.csv"));
                assert_eq!(max_panel_kw, Some(0.4));
                assert_eq!(location, "");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn diagram_accepts_negative_count() {
        let cli = Cli::try_parse_from(["solar-sizer", "diagram", "-3"])
            .expect("parse should succeed");
        assert!(matches!(cli.command, Command::Diagram { panel_count: -3 }));
    }

    #[test]
    fn diagram_rejects_non_integer() {
        assert!(Cli::try_parse_from(["solar-sizer", "diagram", "many"]).is_err());
        assert!(Cli::try_parse_from(["solar-sizer", "diagram"]).is_err());
    }

    #[test]
    fn verify_command() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
