//! Loading the localized "how to gain weight" guide

use crate::i18n::DEFAULT_LANGUAGE;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// A loaded markdown guide
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideDocument {
    /// Language of the document actually loaded
    pub language: String,
    pub path: PathBuf,
    pub content: String,
}

/// Location of the guide for a language
pub fn guide_path(docs_dir: &Path, language: &str) -> PathBuf {
    docs_dir.join(format!("how-to-gain-weight-{language}.md"))
}

/// Read the guide for `language`, falling back to the English one
pub async fn load_guide(docs_dir: &Path, language: &str) -> Result<GuideDocument> {
    let path = guide_path(docs_dir, language);
    match tokio::fs::read_to_string(&path).await {
        Ok(content) => Ok(GuideDocument {
            language: language.to_string(),
            path,
            content,
        }),
        Err(e) if language != DEFAULT_LANGUAGE && e.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!(
                "No guide for '{language}' at {}, using '{DEFAULT_LANGUAGE}'",
                path.display()
            );
            let path = guide_path(docs_dir, DEFAULT_LANGUAGE);
            let content = read_guide(&path).await?;
            Ok(GuideDocument {
                language: DEFAULT_LANGUAGE.to_string(),
                path,
                content,
            })
        }
        Err(e) => Err(e).with_context(|| format!("Failed to read guide {}", path.display())),
    }
}

async fn read_guide(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read guide {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_guide_path() {
        assert_eq!(
            guide_path(Path::new("docs"), "de"),
            PathBuf::from("docs/how-to-gain-weight-de.md")
        );
    }

    #[tokio::test]
    async fn test_loads_localized_guide() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(guide_path(dir.path(), "de"), "# Zunehmen").unwrap();
        std::fs::write(guide_path(dir.path(), "en"), "# Gain").unwrap();

        let guide = load_guide(dir.path(), "de").await.unwrap();
        assert_eq!(guide.language, "de");
        assert_eq!(guide.content, "# Zunehmen");
    }

    #[tokio::test]
    async fn test_falls_back_to_english() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(guide_path(dir.path(), "en"), "# Gain").unwrap();

        let guide = load_guide(dir.path(), "de").await.unwrap();
        assert_eq!(guide.language, "en");
        assert_eq!(guide.content, "# Gain");
    }

    #[test]
    fn test_missing_english_guide_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = tokio_test::block_on(load_guide(dir.path(), "de")).unwrap_err();
        assert!(err.to_string().contains("how-to-gain-weight-en.md"));
    }

    #[tokio::test]
    async fn test_bundled_guides_exist() {
        let docs = Path::new(env!("CARGO_MANIFEST_DIR")).join("docs");
        for language in ["en", "de"] {
            let guide = load_guide(&docs, language).await.unwrap();
            assert_eq!(guide.language, language);
            assert!(guide.content.starts_with("# "));
        }
    }
}
