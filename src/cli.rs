// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "flight-viewer")]
#[command(about = "3D scene viewer with a scripted or piloted airplane", long_about = None)]
pub struct Cli {
    /// JSON configuration file; missing fields use defaults
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable the Flight Info overlay
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,

    /// Print the effective configuration as JSON and exit
    #[arg(long = "print-config", default_value = "false")]
    pub print_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_arguments() {
        let cli = Cli::parse_from(["flight-viewer"]);
        assert!(cli.config.is_none());
        assert!(!cli.no_ui);
        assert!(!cli.print_config);
    }

    #[test]
    fn parses_all_flags() {
        let cli = Cli::parse_from([
            "flight-viewer",
            "--config",
            "viewer.json",
            "--no-ui",
            "--print-config",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("viewer.json")));
        assert!(cli.no_ui);
        assert!(cli.print_config);
    }
}
