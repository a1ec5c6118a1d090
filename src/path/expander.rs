use super::ResolveError;
use std::path::{Path, PathBuf};

/// Expands a leading `~` or `~/` against the home directory.
#[derive(Clone, Default)]
pub struct PathExpander;

impl PathExpander {
    pub fn new() -> Self {
        Self
    }

    pub fn expand(&self, path: &str) -> Result<PathBuf, ResolveError> {
        if path.starts_with('~') {
            self.expand_with_home(path, dirs::home_dir().as_deref())
        } else {
            Ok(PathBuf::from(path))
        }
    }

    pub fn expand_with_home(&self, path: &str, home: Option<&Path>) -> Result<PathBuf, ResolveError> {
        let Some(rest) = path.strip_prefix('~') else {
            return Ok(PathBuf::from(path));
        };

        if rest.is_empty() {
            return home.map(Path::to_path_buf).ok_or(ResolveError::HomeDirNotFound);
        }

        match rest.strip_prefix('/') {
            Some(stripped) => {
                let mut home_path = home
                    .map(Path::to_path_buf)
                    .ok_or(ResolveError::HomeDirNotFound)?;
                for part in stripped.split('/').filter(|p| !p.is_empty()) {
                    home_path.push(part);
                }
                Ok(home_path)
            }
            // `~user` is left alone.
            None => Ok(PathBuf::from(path)),
        }
    }
}
