use std::path::Path;

use crate::{ConnectError, EventEntry};

/// Load events from a local JSON file (a top-level array of entries).
pub(crate) async fn load_events(path: &Path) -> Result<Vec<EventEntry>, ConnectError> {
    let raw = tokio::fs::read_to_string(path).await?;
    serde_json::from_str(&raw).map_err(|e| ConnectError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Credentials, EventManager, SourceKind};
    use std::path::PathBuf;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("mikro-events-{}-{}", std::process::id(), name));
        std::fs::write(&path, contents).expect("failed to write temp event file");
        path
    }

    #[tokio::test]
    async fn nonexistent_file_is_an_io_error() {
        let path = std::env::temp_dir().join("mikro-events-does-not-exist.json");
        let err = load_events(&path).await.unwrap_err();
        assert!(matches!(err, ConnectError::Io(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn malformed_json_is_a_parse_error() {
        let path = temp_file("malformed.json", "{ not json ]");
        let err = load_events(&path).await.unwrap_err();
        assert!(matches!(err, ConnectError::Parse(_)), "got {:?}", err);
        std::fs::remove_file(&path).ok();
    }

    #[tokio::test]
    async fn valid_file_connects_and_carries_events() {
        let path = temp_file(
            "valid.json",
            r#"[
                {"description": "CS 349 lecture", "time": "2024-03-15T09:30:00Z"},
                {"description": "untimed note"}
            ]"#,
        );
        let manager = EventManager::connect(Credentials::Local {
            username: "terry".to_string(),
            path: path.clone(),
        })
        .await
        .expect("connect should succeed");

        assert_eq!(manager.username(), "terry");
        assert_eq!(manager.source(), SourceKind::LocalFile);
        assert_eq!(manager.events().len(), 2);
        assert_eq!(manager.events()[0].description, "CS 349 lecture");
        assert!(manager.events()[1].time.is_none());
        std::fs::remove_file(&path).ok();
    }
}
