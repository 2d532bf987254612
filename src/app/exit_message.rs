//! Shutdown-time exit message.
//!
//! Behavior:
//! - Ordinary users always get the banner plus a sponsorship request.
//! - Contributors and sponsors get a thank-you instead, and may silence the
//!   message entirely by setting `wtf.exitMessage.display = false`.
//! - A user who is both contributor and sponsor gets only the contributor
//!   variant; that tie-break is deliberate, not an ordering accident.

use crate::config::TomlSource;
use crate::style::Styler;
use crate::support::GitHubUser;

const BANNER: &str = r#"
	      ____    __    ____ .___________. _______
	      \   \  /  \  /   / |           ||   ____|
	       \   \/    \/   /  ----|  |-----|  |__
	        \            /       |  |     |   __|
	         \    /\    /        |  |     |  |
	          \__/  \__/         |__|     |__|

    the personal information dashboard for your terminal
"#;

/// Compose the exit message for `user`, or the empty string when suppressed.
///
/// `display_opt_in` is the resolved `wtf.exitMessage.display` flag. Suppression
/// applies only to contributors and sponsors, and only when they opted out;
/// classification alone never suppresses.
pub fn compose(user: &GitHubUser, display_opt_in: bool, styler: &dyn Styler) -> String {
    if (user.is_contributor || user.is_sponsor) && !display_opt_in {
        return String::new();
    }

    let mut msgs = vec![styler.banner(BANNER)];

    if user.is_contributor {
        msgs.push(contributor_thank_you(styler));
    } else if user.is_sponsor {
        msgs.push(sponsor_thank_you(styler));
    } else {
        msgs.push(support_request(styler));
    }

    msgs.join("\n")
}

/// Print the exit message to stdout when the user's configuration allows it.
pub fn display(user: &GitHubUser, config: &TomlSource, styler: &dyn Styler) {
    let msg = compose(user, read_displayable(config), styler);
    if !msg.is_empty() {
        println!("{}", msg);
    }
}

/// Whether the exit message should be displayed per the user's wishes. Absence
/// of the key means "display"; only an explicit `false` opts out.
pub fn read_displayable(config: &TomlSource) -> bool {
    config.bool_or("wtf.exitMessage.display", true)
}

fn contributor_thank_you(styler: &dyn Styler) -> String {
    format!(
        "    On behalf of all the users of WTF, thank you for contributing to the source code. {}",
        styler.accent("You rock.")
    )
}

fn sponsor_thank_you(styler: &dyn Styler) -> String {
    format!(
        "    Your sponsorship of WTF makes a difference. Thank you for sponsoring and supporting WTF. {}",
        styler.accent("You're awesome.")
    )
}

fn support_request(styler: &dyn Styler) -> String {
    format!(
        "    The development and maintenance of WTF is supported by sponsorships.\n    Please consider sponsoring WTF at {}\n",
        styler.accent("https://github.com/sponsors/senorprogrammer")
    )
}
