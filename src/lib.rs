//! # Wtfmsg - Exit Message Support for the WTF Terminal Dashboard
//!
//! Wtfmsg implements the shutdown-time message WTF prints when it quits: a short
//! thank-you for contributors and sponsors, or a sponsorship request for everyone
//! else, plus the configuration plumbing that decides whether to show it and where
//! to find a GitHub API token.
//!
//! ## Features
//!
//! - **Message Selection**: Contributor / sponsor / ordinary-user variants with a
//!   fixed ASCII banner, composed deterministically from the user classification.
//! - **Opt-Out for Insiders**: Contributors and sponsors may disable the message
//!   via `wtf.exitMessage.display`; ordinary users always see it.
//! - **Credential Resolution**: Ordered precedence chain for the GitHub API key
//!   (dedicated config key, `WTF_GITHUB_TOKEN` environment fallback, legacy
//!   `wtf.mods.github` module key).
//! - **Dynamic Configuration**: Dotted-path reads over a TOML tree where a missing
//!   or wrong-typed key is never an error, only a default.
//! - **Injectable Styling**: Colors go through a [`style::Styler`] capability so
//!   tests get deterministic plain output.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use wtfmsg::app::exit_message;
//! use wtfmsg::config::TomlSource;
//! use wtfmsg::style::AnsiStyler;
//! use wtfmsg::support::GitHubUser;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = TomlSource::load("config.toml").await?;
//!     let user = GitHubUser::new(false, true); // resolved externally in WTF itself
//!
//!     exit_message::display(&user, &config, &AnsiStyler);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`app`] - Exit-message composition and credential resolution
//! - [`config`] - Read-only hierarchical configuration source
//! - [`style`] - Terminal emphasis capability (ANSI and plain)
//! - [`support`] - Pre-resolved GitHub user classification

pub mod app;
pub mod config;
pub mod style;
pub mod support;
