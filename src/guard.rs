pub const ACCESS_DENIED_MESSAGE: &str =
    "You cannot go here, this page is for signed-in users only.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Deny,
}

/// Whether protected content may render for the current session flag.
pub fn decide(is_authenticated: bool) -> GuardDecision {
    if is_authenticated {
        GuardDecision::Allow
    } else {
        GuardDecision::Deny
    }
}
