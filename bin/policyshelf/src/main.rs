//! Policyshelf CLI
//!
//! Publishes a folder of plain-text policies as a static, crawler-friendly site.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use clap::Parser;
use color_eyre::eyre::Result;
use policyshelf::cmd::{self, build::BuildOptions};

/// Command-line interface for policyshelf.
#[derive(Parser)]
#[command(
    name = "policyshelf",
    version,
    about = "Publish a folder of plain-text policies as a static site"
)]
struct Cli {
    /// Path to the settings file (optional; defaults apply when missing)
    #[arg(short, long, default_value = policyshelf_core::config::DEFAULT_SETTINGS_FILE)]
    config: std::path::PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Generate index.html, all-policies.txt, sitemap.xml and robots.txt
    Build {
        /// Directory containing the .txt documents
        #[arg(short, long)]
        input: Option<std::path::PathBuf>,
        /// Directory receiving the generated files
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
        /// Override the repository (owner/name) normally read from GITHUB_REPOSITORY
        #[arg(long)]
        repository: Option<String>,
    },
    /// Validate configuration and list discovered documents
    Check {
        /// Directory containing the .txt documents
        #[arg(short, long)]
        input: Option<std::path::PathBuf>,
        /// Override the repository (owner/name) normally read from GITHUB_REPOSITORY
        #[arg(long)]
        repository: Option<String>,
        /// Fail when any document cannot be read
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    policyshelf::init_tracing(cli.verbose);

    match cli.command {
        Commands::Build {
            input,
            output,
            repository,
        } => {
            let options = BuildOptions {
                input,
                output,
                repository,
            };
            cmd::build::run(&cli.config, &options)?;
        }
        Commands::Check {
            input,
            repository,
            strict,
        } => {
            cmd::check::run(&cli.config, input.as_ref(), repository.as_deref(), strict)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_cli_build_command_parsing() {
        let args = ["policyshelf", "build", "--output", "dist"];
        let cli = Cli::parse_from(args);

        assert_eq!(cli.config, std::path::PathBuf::from("policyshelf.toml"));
        assert_eq!(cli.verbose, 0);

        match cli.command {
            Commands::Build {
                input,
                output,
                repository,
            } => {
                assert!(input.is_none());
                assert_eq!(output, Some(std::path::PathBuf::from("dist")));
                assert!(repository.is_none());
            }
            _ => panic!("Expected Build command"),
        }
    }

    #[test]
    fn test_cli_build_with_repository() {
        let args = [
            "policyshelf",
            "build",
            "--input",
            "policies",
            "--repository",
            "octo/handbook",
        ];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Build {
                input, repository, ..
            } => {
                assert_eq!(input, Some(std::path::PathBuf::from("policies")));
                assert_eq!(repository.as_deref(), Some("octo/handbook"));
            }
            _ => panic!("Expected Build command"),
        }
    }

    #[test]
    fn test_cli_check_command_parsing() {
        let args = ["policyshelf", "check", "--strict"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Check {
                input,
                repository,
                strict,
            } => {
                assert!(input.is_none());
                assert!(repository.is_none());
                assert!(strict);
            }
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_check_with_repository() {
        let args = ["policyshelf", "check", "--repository", "octo/handbook"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Check {
                repository, strict, ..
            } => {
                assert_eq!(repository.as_deref(), Some("octo/handbook"));
                assert!(!strict);
            }
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_verbosity_flags() {
        let args = ["policyshelf", "-vvv", "build"];
        let cli = Cli::parse_from(args);
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn test_cli_custom_config_path() {
        let args = ["policyshelf", "--config", "site.toml", "build"];
        let cli = Cli::parse_from(args);
        assert_eq!(cli.config, std::path::PathBuf::from("site.toml"));
    }

    #[test]
    fn test_cli_requires_command() {
        assert!(Cli::try_parse_from(["policyshelf"]).is_err());
    }
}
