//! Route-driven modal triggers: deep links that open overlays at startup.

use fern_common::actions::Action;
use fern_common::types::AuthMode;

/// Resolve a path-with-query deep link into a modal action.
///
/// `?signup=true` opens the auth overlay in signup mode, but only for
/// logged-out sessions; a logged-in user landing on the link gets nothing.
pub fn modal_action_for_route(path_and_query: &str, logged_in: bool) -> Option<Action> {
    let query = path_and_query.split_once('?').map(|(_, q)| q)?;

    for pair in query.split('&') {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if key == "signup" && value == "true" && !logged_in {
            return Some(Action::OpenAuth(AuthMode::Signup));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_link_opens_auth_for_logged_out_user() {
        let action = modal_action_for_route("/?signup=true", false);
        assert_eq!(action, Some(Action::OpenAuth(AuthMode::Signup)));
    }

    #[test]
    fn signup_link_is_ignored_when_logged_in() {
        assert_eq!(modal_action_for_route("/?signup=true", true), None);
    }

    #[test]
    fn signup_param_must_be_true() {
        assert_eq!(modal_action_for_route("/?signup=false", false), None);
        assert_eq!(modal_action_for_route("/?signup", false), None);
    }

    #[test]
    fn signup_found_among_other_params() {
        let action = modal_action_for_route("/explore?ref=launch&signup=true", false);
        assert_eq!(action, Some(Action::OpenAuth(AuthMode::Signup)));
    }

    #[test]
    fn plain_paths_trigger_nothing() {
        assert_eq!(modal_action_for_route("/", false), None);
        assert_eq!(modal_action_for_route("/u/alice", false), None);
    }
}
