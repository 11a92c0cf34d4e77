use std::time::Duration;

use crate::remote::RemoteError;

#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error("{operation} timed out after {after:?}")]
    TimedOut {
        operation: &'static str,
        after: Duration,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_message_keeps_sub_second_precision() {
        let error = Error::TimedOut {
            operation: "login",
            after: Duration::from_millis(250),
        };
        assert_eq!(error.to_string(), "login timed out after 250ms");
    }
}
