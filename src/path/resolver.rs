use std::env;
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::os::unix::ffi::OsStrExt;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::ResolveError;
use crate::parse::split_search_path;

/// Locates external programs.
///
/// Names starting with `/` are taken as-is. Names containing any other `/`
/// are relative to the working directory. Bare names are looked up in each
/// `PATH` directory in order; an empty `PATH` segment stands for the working
/// directory. A directory that cannot be opened is logged and skipped.
#[derive(Clone, Default)]
pub struct PathResolver;

impl PathResolver {
    pub fn new() -> Self {
        Self
    }

    /// Resolves against a fresh snapshot of `PATH` and the working directory.
    pub fn resolve(&self, name: &str) -> Result<PathBuf, ResolveError> {
        let search_path = env::var_os("PATH");
        let cwd = env::current_dir().ok();
        self.resolve_with(name, search_path.as_deref(), cwd.as_deref())
    }

    pub fn resolve_with(
        &self,
        name: &str,
        search_path: Option<&OsStr>,
        cwd: Option<&Path>,
    ) -> Result<PathBuf, ResolveError> {
        if name.starts_with('/') {
            return Ok(PathBuf::from(name));
        }

        if name.contains('/') {
            let relative = name.strip_prefix("./").unwrap_or(name);
            return Ok(match cwd {
                Some(cwd) => cwd.join(relative),
                None => PathBuf::from(name),
            });
        }

        let dirs = search_path.map(search_dirs).unwrap_or_default();
        for dir in &dirs {
            let dir = if dir.as_os_str().is_empty() {
                cwd.map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from("."))
            } else {
                dir.clone()
            };

            match search_dir(&dir, name) {
                Ok(Some(found)) => {
                    debug!(name, path = %found.display(), "resolved");
                    return Ok(found);
                }
                Ok(None) => {}
                Err(e) => {
                    warn!(dir = %dir.display(), error = %e, "skipping unreadable PATH directory");
                }
            }
        }

        Err(ResolveError::NotFound(name.to_string()))
    }
}

/// Splits `PATH` into directories. A value that is not UTF-8 is split on raw
/// bytes so its directory names survive unchanged.
fn search_dirs(search_path: &OsStr) -> Vec<PathBuf> {
    match search_path.to_str() {
        Some(text) => split_search_path(text)
            .into_iter()
            .map(PathBuf::from)
            .collect(),
        None => search_path
            .as_bytes()
            .split(|&b| b == b':')
            .map(|field| PathBuf::from(OsStr::from_bytes(field)))
            .collect(),
    }
}

fn search_dir(dir: &Path, name: &str) -> io::Result<Option<PathBuf>> {
    for entry in fs::read_dir(dir)? {
        let Ok(entry) = entry else {
            continue;
        };
        if entry.file_name() != OsStr::new(name) {
            continue;
        }

        let path = entry.path();
        if is_executable(&path) {
            return Ok(Some(path));
        }
    }
    Ok(None)
}

fn is_executable(path: &Path) -> bool {
    fs::metadata(path)
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(tag: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("microsh_resolver_{}_{}", tag, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn install(dir: &Path, name: &str, mode: u32) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, "#!/bin/sh\nexit 0\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(mode)).unwrap();
        path
    }

    #[test]
    fn test_absolute_name_not_searched() {
        let resolver = PathResolver::new();
        assert_eq!(
            resolver.resolve_with("/no/such/prog", Some(OsStr::new("")), None).unwrap(),
            PathBuf::from("/no/such/prog")
        );
    }

    #[test]
    fn test_dot_slash_relative_to_cwd() {
        let resolver = PathResolver::new();
        let cwd = Path::new("/work");
        assert_eq!(
            resolver.resolve_with("./run.sh", None, Some(cwd)).unwrap(),
            PathBuf::from("/work/run.sh")
        );
        assert_eq!(
            resolver.resolve_with("bin/tool", None, Some(cwd)).unwrap(),
            PathBuf::from("/work/bin/tool")
        );
    }

    #[test]
    fn test_first_match_wins() {
        let first = scratch("first_a");
        let second = scratch("first_b");
        let expected = install(&first, "tool", 0o755);
        install(&second, "tool", 0o755);

        let search = format!("{}:{}", first.display(), second.display());
        let resolver = PathResolver::new();
        assert_eq!(resolver.resolve_with("tool", Some(OsStr::new(&search)), None).unwrap(), expected);

        let _ = fs::remove_dir_all(first);
        let _ = fs::remove_dir_all(second);
    }

    #[test]
    fn test_not_found_is_error() {
        let dir = scratch("miss");
        let search = format!("{}:/bin", dir.display());
        let resolver = PathResolver::new();

        assert_eq!(
            resolver.resolve_with("microsh-no-such-program", Some(OsStr::new(&search)), None),
            Err(ResolveError::NotFound("microsh-no-such-program".to_string()))
        );
        assert!(matches!(
            resolver.resolve_with("anything", None, None),
            Err(ResolveError::NotFound(_))
        ));

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_unreadable_directory_skipped() {
        let good = scratch("skip_good");
        let not_a_dir = install(&good, "plain", 0o644);
        let expected = install(&good, "tool", 0o755);

        let search = format!(
            "/microsh/does/not/exist:{}:{}",
            not_a_dir.display(),
            good.display()
        );
        let resolver = PathResolver::new();
        assert_eq!(resolver.resolve_with("tool", Some(OsStr::new(&search)), None).unwrap(), expected);

        let _ = fs::remove_dir_all(good);
    }

    #[test]
    fn test_non_executable_and_directory_entries_ignored() {
        let dir = scratch("nonexec");
        install(&dir, "data", 0o644);
        fs::create_dir_all(dir.join("subdir")).unwrap();

        let search = dir.display().to_string();
        let resolver = PathResolver::new();
        assert!(resolver.resolve_with("data", Some(OsStr::new(&search)), None).is_err());
        assert!(resolver.resolve_with("subdir", Some(OsStr::new(&search)), None).is_err());

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_non_utf8_directory_searched() {
        let parent = scratch("nonutf8");
        let dir = parent.join(OsStr::from_bytes(b"bin\xff"));
        fs::create_dir_all(&dir).unwrap();
        let expected = install(&dir, "odd-tool", 0o755);

        let mut search = b"/microsh/missing:".to_vec();
        search.extend_from_slice(dir.as_os_str().as_bytes());
        let resolver = PathResolver::new();
        assert_eq!(
            resolver
                .resolve_with("odd-tool", Some(OsStr::from_bytes(&search)), None)
                .unwrap(),
            expected
        );

        let _ = fs::remove_dir_all(parent);
    }

    #[test]
    fn test_empty_segment_means_cwd() {
        let dir = scratch("emptyseg");
        let expected = install(&dir, "local-tool", 0o755);

        let resolver = PathResolver::new();
        assert_eq!(
            resolver.resolve_with("local-tool", Some(OsStr::new("/microsh/missing:")), Some(&dir)).unwrap(),
            expected
        );

        let _ = fs::remove_dir_all(dir);
    }
}
