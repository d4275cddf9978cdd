use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// A selectable remote event service. The application supplies a fixed list
/// of these at startup (production and test endpoints).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    pub name: String,
    pub url: String,
}

impl fmt::Display for ServiceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Login input for one connect attempt. Owned by the login form until the
/// attempt consumes it; never persisted.
#[derive(Clone)]
pub enum Credentials {
    Local {
        username: String,
        path: PathBuf,
    },
    Remote {
        service: ServiceDescriptor,
        username: String,
        password: String,
    },
}

impl Credentials {
    pub fn username(&self) -> &str {
        match self {
            Credentials::Local { username, .. } => username,
            Credentials::Remote { username, .. } => username,
        }
    }
}

// Manual Debug so the password can never reach a log line.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::Local { username, path } => f
                .debug_struct("Local")
                .field("username", username)
                .field("path", path)
                .finish(),
            Credentials::Remote {
                service, username, ..
            } => f
                .debug_struct("Remote")
                .field("service", &service.name)
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_redacts_password() {
        let creds = Credentials::Remote {
            service: ServiceDescriptor {
                name: "Channel W".to_string(),
                url: "https://channelw.mikrocal.dev".to_string(),
            },
            username: "terry".to_string(),
            password: "hunter2".to_string(),
        };
        let rendered = format!("{:?}", creds);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("terry"));
    }
}
