//! Tests for the directory template source.

use postcraft_interface::TemplateSource;
use postcraft_storage::DirectoryTemplateSource;
use tempfile::TempDir;

#[tokio::test]
async fn test_fetch_relative_and_leading_slash() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::create_dir_all(temp_dir.path().join("prompt")).unwrap();
    std::fs::write(temp_dir.path().join("prompt/picprompt.md"), "模板正文").unwrap();

    let source = DirectoryTemplateSource::new(temp_dir.path());

    assert_eq!(source.fetch("prompt/picprompt.md").await.unwrap(), "模板正文");
    assert_eq!(source.fetch("/prompt/picprompt.md").await.unwrap(), "模板正文");
}

#[tokio::test]
async fn test_missing_file_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let source = DirectoryTemplateSource::new(temp_dir.path());

    assert!(source.fetch("prompt/none.md").await.is_err());
}

#[tokio::test]
async fn test_rejects_parent_traversal() {
    let temp_dir = TempDir::new().unwrap();
    let source = DirectoryTemplateSource::new(temp_dir.path());

    assert!(source.fetch("../secret.md").await.is_err());
    assert!(source.fetch("").await.is_err());
}
