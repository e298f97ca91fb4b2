//! Repository language classification.
//!
//! Classification reads one level of the repository directory and tests
//! the lower-cased file names against fixed marker sets. Priority is
//! Java > Python > Node > None; the first language with any matching
//! file name wins.

use std::fmt;
use std::fs;
use std::path::Path;

use super::catalog::TargetFilter;
use crate::error::Result;

/// Primary language inferred for a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Java,
    Node,
    Python,
    None,
}

impl Language {
    /// Lower-case name used in template metadata.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Java => "java",
            Language::Node => "node",
            Language::Python => "python",
            Language::None => "none",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a repository analysis.
///
/// Created fresh per call; never persisted. The target filter is an
/// optional hint used by the selector when the caller supplies none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisResult {
    pub language: Language,
    pub target_filter: Option<TargetFilter>,
}

/// Classify the repository at `repo_path` by its direct children.
///
/// Non-recursive. Fails with an IO error when the directory cannot be read.
pub fn classify_repository(repo_path: &Path) -> Result<Language> {
    let mut names = Vec::new();
    for entry in fs::read_dir(repo_path)? {
        let entry = entry?;
        names.push(entry.file_name().to_string_lossy().to_lowercase());
    }

    Ok(classify_file_names(&names))
}

/// Analyze the repository at `repo_path`.
///
/// Currently infers the language only; the target filter stays unset.
pub fn analyze_repository(repo_path: &Path) -> Result<AnalysisResult> {
    let language = classify_repository(repo_path)?;
    tracing::debug!("classified {} as {}", repo_path.display(), language);

    Ok(AnalysisResult {
        language,
        target_filter: None,
    })
}

fn classify_file_names(names: &[String]) -> Language {
    if names.iter().any(|name| is_java_marker(name)) {
        Language::Java
    } else if names.iter().any(|name| is_python_marker(name)) {
        Language::Python
    } else if names.iter().any(|name| is_node_marker(name)) {
        Language::Node
    } else {
        Language::None
    }
}

fn is_java_marker(name: &str) -> bool {
    name.ends_with(".java") || name.contains("pom.xml")
}

fn is_python_marker(name: &str) -> bool {
    name.ends_with(".pyproj") || name.contains(".requirements.txt")
}

fn is_node_marker(name: &str) -> bool {
    name.ends_with(".ts")
        || name.ends_with(".js")
        || name == "package.json"
        || name.contains("node_modules")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|n| n.to_lowercase()).collect()
    }

    #[test]
    fn java_markers() {
        assert_eq!(classify_file_names(&names(&["Main.java"])), Language::Java);
        assert_eq!(classify_file_names(&names(&["pom.xml"])), Language::Java);
        assert_eq!(classify_file_names(&names(&["sub-pom.xml"])), Language::Java);
    }

    #[test]
    fn python_markers() {
        assert_eq!(
            classify_file_names(&names(&["setup.pyproj"])),
            Language::Python
        );
        assert_eq!(
            classify_file_names(&names(&["my.requirements.txt"])),
            Language::Python
        );
    }

    #[test]
    fn node_markers() {
        assert_eq!(classify_file_names(&names(&["index.js"])), Language::Node);
        assert_eq!(classify_file_names(&names(&["app.ts"])), Language::Node);
        assert_eq!(
            classify_file_names(&names(&["package.json"])),
            Language::Node
        );
        assert_eq!(
            classify_file_names(&names(&["node_modules"])),
            Language::Node
        );
    }

    #[test]
    fn java_wins_over_node() {
        let result = classify_file_names(&names(&["package.json", "pom.xml"]));
        assert_eq!(result, Language::Java);
    }

    #[test]
    fn python_wins_over_node() {
        let result = classify_file_names(&names(&["index.js", "setup.pyproj"]));
        assert_eq!(result, Language::Python);
    }

    #[test]
    fn plain_python_script_is_not_a_marker() {
        // Only .pyproj and *.requirements.txt count as Python markers.
        assert_eq!(classify_file_names(&names(&["app.py"])), Language::None);
    }

    #[test]
    fn bare_requirements_txt_is_not_a_marker() {
        assert_eq!(
            classify_file_names(&names(&["requirements.txt"])),
            Language::None
        );
    }

    #[test]
    fn empty_listing_is_none() {
        assert_eq!(classify_file_names(&[]), Language::None);
    }

    #[test]
    fn matching_is_case_insensitive_via_lowercasing() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("POM.XML"), "").unwrap();

        assert_eq!(classify_repository(temp.path()).unwrap(), Language::Java);
    }

    #[test]
    fn classification_is_non_recursive() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("backend");
        fs::create_dir(&nested).unwrap();
        fs::write(nested.join("pom.xml"), "").unwrap();

        assert_eq!(classify_repository(temp.path()).unwrap(), Language::None);
    }

    #[test]
    fn missing_directory_is_io_error() {
        let err = classify_repository(Path::new("/definitely/not/here")).unwrap_err();
        assert!(matches!(err, crate::error::PipewrightError::Io(_)));
    }

    #[test]
    fn analyze_sets_language_and_no_filter() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("server.js"), "").unwrap();

        let analysis = analyze_repository(temp.path()).unwrap();
        assert_eq!(analysis.language, Language::Node);
        assert!(analysis.target_filter.is_none());
    }
}
