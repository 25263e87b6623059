use std::borrow::Cow;
use std::path::Path;

/// Sanitizes a file path for command-line usage, specifically for tools like FFmpeg
/// that do not support '--' as a delimiter.
///
/// Ensures a relative path starting with '-' is prefixed with './' so it cannot
/// be misinterpreted as a flag by the child process.
pub fn safe_path_arg(path: &Path) -> Cow<'_, str> {
    let s = path.to_string_lossy();
    if s.starts_with('-') {
        Cow::Owned(format!("./{}", s))
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_path_arg() {
        assert_eq!(safe_path_arg(Path::new("normal.mp4")), "normal.mp4");
        assert_eq!(safe_path_arg(Path::new("/abs/path.mp4")), "/abs/path.mp4");
        assert_eq!(safe_path_arg(Path::new("-dash.mp4")), "./-dash.mp4");
        assert_eq!(safe_path_arg(Path::new("-dir/file.mp4")), "./-dir/file.mp4");
    }
}
