use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::{DateWindow, DATE_FORMAT};

/// `<output_dir>/<since>.md`
pub fn artifact_path(output_dir: &Path, window: &DateWindow) -> PathBuf {
    output_dir.join(format!("{}.md", window.since.format(DATE_FORMAT)))
}

pub fn write_artifact(output_dir: &Path, window: &DateWindow, contents: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)?;
    let path = artifact_path(output_dir, window);
    std::fs::write(&path, contents)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_under_since_date() {
        let dir = tempfile::tempdir().unwrap();
        let output_dir = dir.path().join("output");
        let window = DateWindow::parse("2024-01-01", "2024-01-02").unwrap();

        let path = write_artifact(&output_dir, &window, "hello").unwrap();

        assert_eq!(path, output_dir.join("2024-01-01.md"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), "hello");
    }
}
