use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

/// Whether the path names a regular file with the owner-execute bit set.
pub fn is_executable(path: &Path) -> bool {
    match fs::metadata(path) {
        Ok(meta) => meta.is_file() && meta.permissions().mode() & 0o100 != 0,
        Err(_) => false,
    }
}

/// Resolves a command name against a colon-separated search path.
///
/// A name longer than two characters starting with `./` is taken as a direct
/// path and never searched. An empty search-path component resolves the bare
/// name against the working directory. The first executable candidate wins;
/// an unset search path fails outright.
pub fn find_in_path(search_path: Option<&str>, command: &str) -> Option<String> {
    let search_path = search_path?;

    if command.len() > 2 && command.starts_with("./") {
        if is_executable(Path::new(command)) {
            return Some(command.to_string());
        }
        return None;
    }

    for dir in search_path.split(':') {
        let candidate = if dir.is_empty() {
            command.to_string()
        } else {
            format!("{}/{}", dir, command)
        };
        if is_executable(Path::new(&candidate)) {
            return Some(candidate);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;

    fn make_file(dir: &Path, name: &str, mode: u32) -> std::path::PathBuf {
        let path = dir.join(name);
        let mut file = File::create(&path).expect("create file");
        writeln!(file, "#!/bin/sh").expect("write file");
        let mut perms = fs::metadata(&path).expect("metadata").permissions();
        perms.set_mode(mode);
        fs::set_permissions(&path, perms).expect("chmod");
        path
    }

    #[test]
    fn test_is_executable_checks_owner_bit() {
        let dir = tempfile::tempdir().expect("tempdir");
        let exec = make_file(dir.path(), "runnable", 0o755);
        let plain = make_file(dir.path(), "plain", 0o644);
        assert!(is_executable(&exec));
        assert!(!is_executable(&plain));
    }

    #[test]
    fn test_is_executable_rejects_directories() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(!is_executable(dir.path()));
    }

    #[test]
    fn test_find_walks_directories_in_order() {
        let first = tempfile::tempdir().expect("tempdir");
        let second = tempfile::tempdir().expect("tempdir");
        make_file(second.path(), "tool", 0o755);
        let search = format!(
            "{}:{}",
            first.path().to_string_lossy(),
            second.path().to_string_lossy()
        );

        let resolved = find_in_path(Some(&search), "tool").expect("resolved");
        assert!(resolved.starts_with(&second.path().to_string_lossy().to_string()));
    }

    #[test]
    fn test_find_prefers_earlier_directory() {
        let first = tempfile::tempdir().expect("tempdir");
        let second = tempfile::tempdir().expect("tempdir");
        make_file(first.path(), "tool", 0o755);
        make_file(second.path(), "tool", 0o755);
        let search = format!(
            "{}:{}",
            first.path().to_string_lossy(),
            second.path().to_string_lossy()
        );

        let resolved = find_in_path(Some(&search), "tool").expect("resolved");
        assert!(resolved.starts_with(&first.path().to_string_lossy().to_string()));
    }

    #[test]
    fn test_unset_search_path_fails() {
        assert_eq!(find_in_path(None, "ls"), None);
    }

    #[test]
    fn test_unmatched_command_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        let search = dir.path().to_string_lossy().to_string();
        assert_eq!(find_in_path(Some(&search), "no_such_tool"), None);
    }

    #[test]
    fn test_dot_slash_skips_search_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        make_file(dir.path(), "tool", 0o755);
        let search = dir.path().to_string_lossy().to_string();

        // `./tool` is not executable relative to the test's working
        // directory, and the search path must not be consulted for it
        assert_eq!(find_in_path(Some(&search), "./tool"), None);
    }

    #[test]
    fn test_non_executable_candidate_skipped() {
        let dir = tempfile::tempdir().expect("tempdir");
        make_file(dir.path(), "tool", 0o644);
        let search = dir.path().to_string_lossy().to_string();
        assert_eq!(find_in_path(Some(&search), "tool"), None);
    }
}
