//! Binary entrypoint for the wtfmsg CLI.
//!
//! Commands:
//! - `show [--contributor] [--sponsor]` - compose and print the exit message
//! - `init` - create a starter `config.toml`
//! - `token` - report which GitHub API key the resolution chain found
//!
//! The contributor/sponsor flags stand in for WTF's own GitHub lookup, which is
//! resolved inside the dashboard before shutdown.

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{debug, info, warn};

use wtfmsg::app::{credentials, exit_message};
use wtfmsg::config::TomlSource;
use wtfmsg::style::{AnsiStyler, PlainStyler, Styler};
use wtfmsg::support::GitHubUser;

#[derive(Parser)]
#[command(name = "wtfmsg")]
#[command(about = "Exit message and credential resolution for the WTF terminal dashboard")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose and print the exit message for the given classification
    Show {
        /// Treat the user as a project contributor
        #[arg(long)]
        contributor: bool,

        /// Treat the user as a project sponsor
        #[arg(long)]
        sponsor: bool,
    },
    /// Initialize a new wtfmsg configuration
    Init,
    /// Show which GitHub API key the resolution chain finds (masked)
    Token,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match cli.command {
        Commands::Show {
            contributor,
            sponsor,
        } => {
            let config = load_or_empty(&cli.config).await;
            let user = GitHubUser::new(contributor, sponsor);
            exit_message::display(&user, &config, styler().as_ref());
        }
        Commands::Init => {
            if std::path::Path::new(&cli.config).exists() {
                warn!("{} already exists; leaving it untouched", cli.config);
            } else {
                TomlSource::create_default(&cli.config).await?;
                info!("Created starter configuration at {}", cli.config);
                println!("Created {}", cli.config);
            }
        }
        Commands::Token => {
            let config = load_or_empty(&cli.config).await;
            let key = credentials::github_api_key(&config);
            if key.is_empty() {
                println!("No GitHub API key configured (checked wtf.exitMessage.githubAPIKey, $WTF_GITHUB_TOKEN, wtf.mods.github.apiKey)");
            } else {
                println!("GitHub API key: {}", mask(&key));
            }
        }
    }

    Ok(())
}

/// Load the config file, falling back to an empty tree. A missing file means
/// every read takes its default, which is a valid state here.
async fn load_or_empty(path: &str) -> TomlSource {
    match TomlSource::load(path).await {
        Ok(source) => source,
        Err(e) => {
            debug!("using empty configuration: {}", e);
            TomlSource::from_str("").expect("empty toml parses")
        }
    }
}

/// ANSI styling on a TTY, plain text when piped.
fn styler() -> Box<dyn Styler> {
    if atty::is(atty::Stream::Stdout) {
        Box::new(AnsiStyler)
    } else {
        Box::new(PlainStyler)
    }
}

/// Mask a secret for display: short keys vanish entirely, longer ones keep a
/// four-character prefix and suffix.
fn mask(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        "****".to_string()
    } else {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}…{}", head, tail)
    }
}

fn init_logging(verbosity: u8) {
    let base_level = match verbosity {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(base_level).init();
}

#[cfg(test)]
mod tests {
    use super::mask;

    #[test]
    fn mask_hides_short_keys_entirely() {
        assert_eq!(mask("abc"), "****");
        assert_eq!(mask("12345678"), "****");
    }

    #[test]
    fn mask_keeps_only_prefix_and_suffix() {
        let masked = mask("ghp_abcdefghijklmnop");
        assert_eq!(masked, "ghp_…mnop");
        assert!(!masked.contains("abcdefgh"));
    }
}
