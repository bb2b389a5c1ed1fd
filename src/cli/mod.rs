// CLI module for wire2html

use clap::Parser;
use std::path::PathBuf;

/// wire2html - Wireframe screenshot to Tailwind HTML conversion proxy
#[derive(Parser, Debug)]
#[command(name = "wire2html", version, about, long_about = None)]
pub struct Args {
    /// Path to a TOML config file (default: ~/.wire2html/config.toml)
    #[arg(short, long, env = "WIRE2HTML_CONFIG")]
    pub config: Option<PathBuf>,

    /// Address to bind, overriding the config file
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on, overriding the config file
    #[arg(short, long)]
    pub port: Option<u16>,
}

impl Args {
    /// Apply command-line overrides to a loaded configuration.
    pub fn apply(&self, config: &mut crate::config::AppConfig) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn test_flags_override_config() {
        let args = Args::parse_from(["wire2html", "--host", "0.0.0.0", "-p", "8081"]);
        let mut config = AppConfig::default();
        args.apply(&mut config);

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8081);
    }

    #[test]
    fn test_no_flags_keep_config() {
        let args = Args::parse_from(["wire2html"]);
        let mut config = AppConfig::default();
        args.apply(&mut config);

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
    }
}
