use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use futures::future::BoxFuture;
use serde_json::Value;
use taskforge_domain::task::Task;
use taskforge_workflow::errors::StoreError;
use taskforge_workflow::ports::TaskStore;

/// Task store backed by a single JSON file holding an array of tasks.
///
/// The file is read and rewritten in full on every operation. Writes are
/// pretty printed with two-space indentation.
#[derive(Debug, Clone)]
pub struct JsonFileTaskStore {
    path: PathBuf,
}

impl JsonFileTaskStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_content(&self) -> Result<String, StoreError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => Ok(content),
            Err(error) if error.kind() == ErrorKind::NotFound => {
                Err(StoreError::missing(self.path.display().to_string()))
            }
            Err(error) => Err(error.into()),
        }
    }
}

impl TaskStore for JsonFileTaskStore {
    fn read_all(&self) -> BoxFuture<'_, Result<Vec<Task>, StoreError>> {
        Box::pin(async move {
            let content = self.read_content().await?;
            let Value::Array(records) = serde_json::from_str::<Value>(&content)? else {
                tracing::warn!(path = %self.path.display(), "tasks store is not a JSON array");
                return Err(StoreError::DataFormat);
            };
            Ok(records.into_iter().map(Task::from_record).collect())
        })
    }

    fn write_all(&self, tasks: Vec<Task>) -> BoxFuture<'_, Result<(), StoreError>> {
        Box::pin(async move {
            let content = serde_json::to_string_pretty(&tasks)?;
            tokio::fs::write(&self.path, content).await?;
            tracing::trace!(
                path = %self.path.display(),
                count = tasks.len(),
                "tasks store written"
            );
            Ok(())
        })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use taskforge_domain::Timestamp;
    use taskforge_domain::task::TaskId;
    use tempfile::TempDir;

    const CANONICAL: &str = r#"[
  {
    "id": 1,
    "title": "Buy milk",
    "done": false,
    "createdAt": "2024-05-01T10:00:00.000Z"
  },
  {
    "id": 2,
    "title": "Call the plumber",
    "done": true,
    "createdAt": "2024-05-01T11:00:00.000Z",
    "updatedAt": "2024-05-02T08:30:00.000Z",
    "priority": "high"
  }
]"#;

    const NON_CANONICAL: &str = r#"[
  {
    "id": "abc",
    "title": "legacy"
  },
  {
    "title": "string id",
    "id": "5",
    "createdAt": "yesterday"
  },
  42,
  "loose text",
  {
    "id": 2,
    "done": "yes",
    "tags": [
      "home"
    ]
  }
]"#;

    fn store_with(content: &str) -> (TempDir, JsonFileTaskStore) {
        let directory = TempDir::new().unwrap();
        let path = directory.path().join("tasks.json");
        std::fs::write(&path, content).unwrap();
        (directory, JsonFileTaskStore::new(path))
    }

    mod read_all {
        use super::*;

        #[rstest]
        #[tokio::test]
        async fn reads_tasks_in_file_order() {
            let (_directory, store) = store_with(CANONICAL);

            let tasks = store.read_all().await.unwrap();

            assert_eq!(tasks.len(), 2);
            assert_eq!(tasks[0].id(), TaskId::new(1));
            assert_eq!(tasks[1].title(), Some("Call the plumber"));
            assert!(tasks[1].is_done());
            assert_eq!(tasks[1].record()["priority"], "high");
        }

        #[rstest]
        #[tokio::test]
        async fn odd_elements_do_not_fail_the_read() {
            let (_directory, store) = store_with(NON_CANONICAL);

            let tasks = store.read_all().await.unwrap();

            let ids: Vec<u64> = tasks.iter().map(|task| task.id().value()).collect();
            assert_eq!(ids, vec![0, 5, 0, 0, 2]);
            assert_eq!(tasks[1].created_at(), None);
        }

        #[rstest]
        #[tokio::test]
        async fn empty_array_is_an_empty_collection() {
            let (_directory, store) = store_with("[]");

            assert!(store.read_all().await.unwrap().is_empty());
        }

        #[rstest]
        #[tokio::test]
        async fn missing_file_reports_its_path() {
            let directory = TempDir::new().unwrap();
            let path = directory.path().join("absent.json");
            let store = JsonFileTaskStore::new(&path);

            let error = store.read_all().await.unwrap_err();

            match error {
                StoreError::Missing { path: reported } => {
                    assert_eq!(reported, path.display().to_string());
                }
                other => panic!("expected Missing, got {other:?}"),
            }
        }

        #[rstest]
        #[case("{}")]
        #[case("{\"tasks\": []}")]
        #[case("42")]
        #[case("null")]
        #[tokio::test]
        async fn non_array_content_is_data_format(#[case] content: &str) {
            let (_directory, store) = store_with(content);

            let error = store.read_all().await.unwrap_err();

            assert!(matches!(error, StoreError::DataFormat));
        }

        #[rstest]
        #[case("")]
        #[case("[{")]
        #[case("not json")]
        #[tokio::test]
        async fn invalid_json_is_a_serialization_error(#[case] content: &str) {
            let (_directory, store) = store_with(content);

            let error = store.read_all().await.unwrap_err();

            assert!(matches!(error, StoreError::Serialization { .. }));
        }
    }

    mod write_all {
        use super::*;

        #[rstest]
        #[tokio::test]
        async fn writes_pretty_printed_array() {
            let (directory, store) = store_with("[]");
            let created_at = Timestamp::parse("2024-05-01T10:00:00.000Z").unwrap();

            store
                .write_all(vec![Task::new(TaskId::new(1), "Buy milk", created_at)])
                .await
                .unwrap();

            let content = std::fs::read_to_string(directory.path().join("tasks.json")).unwrap();
            assert_eq!(
                content,
                "[\n  {\n    \"id\": 1,\n    \"title\": \"Buy milk\",\n    \"done\": false,\n    \"createdAt\": \"2024-05-01T10:00:00.000Z\"\n  }\n]"
            );
        }

        #[rstest]
        #[tokio::test]
        async fn rewriting_what_was_read_leaves_the_file_unchanged() {
            let (directory, store) = store_with(CANONICAL);

            let tasks = store.read_all().await.unwrap();
            store.write_all(tasks).await.unwrap();

            let content = std::fs::read_to_string(directory.path().join("tasks.json")).unwrap();
            assert_eq!(content, CANONICAL);
        }

        #[rstest]
        #[tokio::test]
        async fn rewriting_odd_elements_leaves_them_unchanged() {
            let (directory, store) = store_with(NON_CANONICAL);

            let tasks = store.read_all().await.unwrap();
            store.write_all(tasks).await.unwrap();

            let content = std::fs::read_to_string(directory.path().join("tasks.json")).unwrap();
            assert_eq!(content, NON_CANONICAL);
        }

        #[rstest]
        #[tokio::test]
        async fn written_tasks_read_back_equal() {
            let (_directory, store) = store_with("[]");
            let tasks = vec![
                Task::new(TaskId::new(1), "a", Timestamp::now()),
                Task::new(TaskId::new(5), "b", Timestamp::now()),
            ];

            store.write_all(tasks.clone()).await.unwrap();

            assert_eq!(store.read_all().await.unwrap(), tasks);
        }
    }
}
