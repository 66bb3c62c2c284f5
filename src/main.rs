use anyhow::Result;
use clap::Parser;
use lldb_setup::commands::{self, config::Config};
use lldb_setup::runtime::RealRuntime;
use std::path::PathBuf;

/// lldb-setup - WAMR LLDB installer
///
/// Checks for the WAMR build of LLDB and installs it for the current
/// platform under <ROOT>/resource/debug/<platform>.
///
/// Examples:
///   lldb-setup check            # Is LLDB installed?
///   lldb-setup install          # Ask, then download and install
///   lldb-setup install -y       # Install without asking
#[derive(Parser, Debug)]
#[command(author, version = env!("LLDB_SETUP_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Extension root directory (defaults to the user data directory)
    #[arg(
        long = "root",
        short = 'r',
        env = "LLDB_SETUP_ROOT",
        value_name = "PATH",
        global = true
    )]
    pub extension_root: Option<PathBuf>,

    /// Platform identifier to install for, e.g. linux or darwin (defaults to the host)
    #[arg(
        long = "platform",
        env = "LLDB_SETUP_PLATFORM",
        value_name = "PLATFORM",
        global = true
    )]
    pub platform: Option<String>,

    /// Download the LLDB archive from this URL instead of the release URL
    #[arg(long = "url", env = "LLDB_SETUP_URL", value_name = "URL", global = true)]
    pub download_url: Option<String>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Report whether LLDB is installed (exit status 1 if not)
    Check(CheckArgs),

    /// Download and install LLDB
    Install(InstallArgs),
}

#[derive(clap::Args, Debug)]
pub struct CheckArgs {
    /// Print the status as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(clap::Args, Debug)]
pub struct InstallArgs {
    /// Do not ask before installing
    #[arg(short = 'y', long = "yes")]
    pub yes: bool,

    /// Reinstall even if LLDB is already present
    #[arg(long)]
    pub force: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let config = Config::new(
        &RealRuntime,
        cli.extension_root,
        cli.platform,
        cli.download_url,
    )?;

    match cli.command {
        Commands::Check(args) => {
            if !commands::check(config, args.json)? {
                std::process::exit(1);
            }
        }
        Commands::Install(args) => commands::install(config, args.yes, args.force).await?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_check_parsing() {
        let cli = Cli::try_parse_from(["lldb-setup", "check", "--json"]).unwrap();
        match cli.command {
            Commands::Check(args) => assert!(args.json),
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_install_parsing() {
        let cli = Cli::try_parse_from(["lldb-setup", "install", "-y"]).unwrap();
        match cli.command {
            Commands::Install(args) => {
                assert!(args.yes);
                assert!(!args.force);
            }
            _ => panic!("Expected Install command"),
        }
    }

    #[test]
    fn test_cli_global_flags_parsing() {
        let cli = Cli::try_parse_from([
            "lldb-setup",
            "--root",
            "/tmp/ext",
            "install",
            "--platform",
            "darwin",
            "--url",
            "http://localhost/lldb.zip",
            "--force",
        ])
        .unwrap();

        assert_eq!(cli.extension_root, Some(PathBuf::from("/tmp/ext")));
        assert_eq!(cli.platform.as_deref(), Some("darwin"));
        assert_eq!(cli.download_url.as_deref(), Some("http://localhost/lldb.zip"));
        match cli.command {
            Commands::Install(args) => assert!(args.force),
            _ => panic!("Expected Install command"),
        }
    }

    #[test]
    fn test_cli_no_subcommand_fails() {
        assert!(Cli::try_parse_from(["lldb-setup"]).is_err());
    }
}
