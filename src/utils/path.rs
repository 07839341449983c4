//! Output path derivation

use std::path::{Path, PathBuf};

/// Suffix inserted before the extension of the trimmed file
pub const TRIMMED_SUFFIX: &str = ".trimmed";

/// `dir/name.trimmed.ext` next to the input, or in the working directory
/// when `to_cwd` is set
pub fn trimmed_output_path(input: &Path, to_cwd: bool) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_default();
    let file_name = match input.extension() {
        Some(ext) => format!("{}{}.{}", stem, TRIMMED_SUFFIX, ext.to_string_lossy()),
        None => format!("{}{}", stem, TRIMMED_SUFFIX),
    };

    match input.parent() {
        Some(parent) if !to_cwd => parent.join(file_name),
        _ => PathBuf::from(file_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_next_to_input() {
        assert_eq!(
            trimmed_output_path(Path::new("/videos/lecture.mp4"), false),
            PathBuf::from("/videos/lecture.trimmed.mp4")
        );
        assert_eq!(
            trimmed_output_path(Path::new("clip.final.mkv"), false),
            PathBuf::from("clip.final.trimmed.mkv")
        );
    }

    #[test]
    fn test_output_to_cwd() {
        assert_eq!(
            trimmed_output_path(Path::new("/videos/lecture.mp4"), true),
            PathBuf::from("lecture.trimmed.mp4")
        );
    }

    #[test]
    fn test_input_without_extension() {
        assert_eq!(
            trimmed_output_path(Path::new("/videos/raw"), false),
            PathBuf::from("/videos/raw.trimmed")
        );
    }
}
