/// A modal message shown to the user when a link attempt ends without
/// linking an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alert {
    /// The account exists but publishes no keys.
    NoKeys { username: String },
    /// The request did not complete within the client timeout.
    TimedOut,
    /// The host answered that the account does not exist.
    UserNotFound { username: String },
    /// Any other failure: server error, connection refused, unreadable body.
    RequestFailed { reason: String },
    /// The username contains characters that would change the request URL.
    InvalidUsername { username: String },
}

impl std::fmt::Display for Alert {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Alert::NoKeys { username } => {
                write!(f, "Username '{username}' has no keys on GitHub")
            }
            Alert::TimedOut => write!(f, "Request timed out"),
            Alert::UserNotFound { username } => {
                write!(f, "Username '{username}' doesn't exist on GitHub")
            }
            Alert::RequestFailed { reason } => write!(f, "Request failed: {reason}"),
            Alert::InvalidUsername { username } => {
                write!(f, "'{username}' is not a valid username")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_username() {
        let alert = Alert::NoKeys {
            username: "alice".into(),
        };
        assert_eq!(alert.to_string(), "Username 'alice' has no keys on GitHub");

        let alert = Alert::UserNotFound {
            username: "bob".into(),
        };
        assert_eq!(alert.to_string(), "Username 'bob' doesn't exist on GitHub");
    }

    #[test]
    fn timeout_message_is_fixed() {
        assert_eq!(Alert::TimedOut.to_string(), "Request timed out");
    }
}
