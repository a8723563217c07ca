//! Path resolution utilities for CLI commands

use std::env;
use std::path::PathBuf;

/// Resolve the root directory that input and output files live in.
///
/// If a root path is provided, returns it. Otherwise, falls back to the
/// current working directory, or "." if that cannot be determined.
pub fn resolve_root_path(root: Option<PathBuf>) -> PathBuf {
    root.unwrap_or_else(|| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_with_explicit_path() {
        let explicit = PathBuf::from("/tmp/event");
        assert_eq!(resolve_root_path(Some(explicit.clone())), explicit);
    }

    #[test]
    fn test_resolve_without_path_uses_current_dir() {
        let result = resolve_root_path(None);
        match env::current_dir() {
            Ok(current) => assert_eq!(result, current),
            Err(_) => assert_eq!(result, PathBuf::from(".")),
        }
    }
}
