//! End-to-end exit message scenarios: classification x opt-out flag, driven
//! through a real configuration source.

use wtfmsg::app::exit_message::{compose, read_displayable};
use wtfmsg::config::TomlSource;
use wtfmsg::style::PlainStyler;
use wtfmsg::support::GitHubUser;

fn source(toml: &str) -> TomlSource {
    TomlSource::from_str(toml).expect("valid test toml")
}

#[test]
fn ordinary_user_with_no_config_sees_support_request() {
    let cfg = source("");
    let user = GitHubUser::new(false, false);

    let msg = compose(&user, read_displayable(&cfg), &PlainStyler);

    assert!(!msg.is_empty());
    assert!(msg.contains("the personal information dashboard"));
    assert!(msg.contains("Please consider sponsoring WTF"));
}

#[test]
fn contributor_with_display_off_sees_nothing() {
    let cfg = source("[wtf.exitMessage]\ndisplay = false\n");
    let user = GitHubUser::new(true, false);

    assert_eq!(compose(&user, read_displayable(&cfg), &PlainStyler), "");
}

#[test]
fn sponsor_with_display_absent_sees_thank_you() {
    let cfg = source("");
    let user = GitHubUser::new(false, true);

    let msg = compose(&user, read_displayable(&cfg), &PlainStyler);

    assert!(msg.contains("the personal information dashboard"));
    assert!(msg.contains("Thank you for sponsoring and supporting WTF"));
}

#[test]
fn ordinary_user_cannot_opt_out() {
    // display=false only silences contributors and sponsors
    let cfg = source("[wtf.exitMessage]\ndisplay = false\n");
    let user = GitHubUser::new(false, false);

    let msg = compose(&user, read_displayable(&cfg), &PlainStyler);
    assert!(msg.contains("Please consider sponsoring WTF"));
}

#[test]
fn contributor_and_sponsor_gets_contributor_variant_only() {
    let cfg = source("[wtf.exitMessage]\ndisplay = true\n");
    let user = GitHubUser::new(true, true);

    let msg = compose(&user, read_displayable(&cfg), &PlainStyler);

    assert!(msg.contains("thank you for contributing to the source code"));
    assert!(!msg.contains("Thank you for sponsoring"));
}

#[test]
fn wrong_typed_display_value_defaults_to_showing() {
    let cfg = source("[wtf.exitMessage]\ndisplay = \"nope\"\n");
    let user = GitHubUser::new(true, false);

    let msg = compose(&user, read_displayable(&cfg), &PlainStyler);
    assert!(msg.contains("thank you for contributing"));
}

#[tokio::test]
async fn config_loads_from_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[wtf.exitMessage]\ndisplay = false\n").expect("write config");

    let cfg = TomlSource::load(path.to_str().expect("utf8 path"))
        .await
        .expect("config loads");

    assert!(!read_displayable(&cfg));
}

#[tokio::test]
async fn missing_config_file_is_an_error_with_context() {
    let err = TomlSource::load("/nonexistent/wtfmsg-config.toml")
        .await
        .expect_err("load should fail");

    assert!(err.to_string().contains("Failed to read config file"));
}
