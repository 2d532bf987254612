//! GitHub API key resolution.
//!
//! Two configuration layouts carry a usable key: a dedicated
//! `wtf.exitMessage.githubAPIKey` entry, and the github module's own
//! `wtf.mods.github.apiKey`. Both are supported without requiring the user to
//! duplicate the secret; the dedicated key is tried first so it can override the
//! shared one for this feature alone. The `WTF_GITHUB_TOKEN` environment
//! variable serves only as the dedicated read's default, never as an
//! independent final step.

use log::debug;

use crate::config::TomlSource;

/// Resolve the GitHub API key, reading `WTF_GITHUB_TOKEN` as the environment
/// fallback. Returns an empty string when nothing is configured.
pub fn github_api_key(config: &TomlSource) -> String {
    let env_fallback = std::env::var("WTF_GITHUB_TOKEN").unwrap_or_default();
    resolve(config, &env_fallback)
}

/// Run the resolution chain with an explicit environment fallback. First
/// non-empty result wins; each step runs only if the previous yielded empty.
pub fn resolve(config: &TomlSource, env_fallback: &str) -> String {
    let key = dedicated_key(config, env_fallback);
    if !key.is_empty() {
        debug!("github api key resolved from wtf.exitMessage.githubAPIKey");
        return key;
    }

    let key = module_key(config);
    if !key.is_empty() {
        debug!("github api key resolved from wtf.mods.github.apiKey");
        return key;
    }

    debug!("no github api key configured");
    String::new()
}

/// Step 1: the dedicated exit-message key, with the environment value as the
/// read's own default.
fn dedicated_key(config: &TomlSource, env_fallback: &str) -> String {
    config.string_or("wtf.exitMessage.githubAPIKey", env_fallback)
}

/// Steps 2-3: the github module's shared key. A missing `wtf.mods.github`
/// section resolves to empty, silently.
fn module_key(config: &TomlSource) -> String {
    match config.section("wtf.mods.github") {
        Some(github) => github.string_or("apiKey", ""),
        None => String::new(),
    }
}
