use crate::error_handling::types::CaptureError;
use std::path::{Path, PathBuf};

/// One encoded frame per capture tick.
///
/// The camera itself is an external capability; a source hands back the
/// compressed bytes (JPEG/PNG) of the next frame. A failing tick is dropped
/// by the controller; frames are never queued or retried.
pub trait FrameSource: Send {
    fn next_frame(&mut self) -> Result<Vec<u8>, CaptureError>;
}

/// Frame source backed by a directory of image files, cycled endlessly.
/// Stands in for a camera where none is available (demos, tests).
pub struct DirectoryFrameSource {
    files: Vec<PathBuf>,
    cursor: usize,
}

impl DirectoryFrameSource {
    pub fn new(dir: &Path) -> Result<Self, CaptureError> {
        let mut files: Vec<PathBuf> = std::fs::read_dir(dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                matches!(
                    path.extension().and_then(|e| e.to_str()),
                    Some("jpg") | Some("jpeg") | Some("png")
                )
            })
            .collect();
        files.sort();

        if files.is_empty() {
            return Err(CaptureError::NoFrames(format!(
                "no image files in {}",
                dir.display()
            )));
        }

        Ok(Self { files, cursor: 0 })
    }
}

impl FrameSource for DirectoryFrameSource {
    fn next_frame(&mut self) -> Result<Vec<u8>, CaptureError> {
        let path = &self.files[self.cursor];
        self.cursor = (self.cursor + 1) % self.files.len();
        Ok(std::fs::read(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_source_cycles_over_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.png"), b"first").unwrap();
        std::fs::write(dir.path().join("b.jpg"), b"second").unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"ignored").unwrap();

        let mut source = DirectoryFrameSource::new(dir.path()).unwrap();

        assert_eq!(source.next_frame().unwrap(), b"first");
        assert_eq!(source.next_frame().unwrap(), b"second");
        assert_eq!(source.next_frame().unwrap(), b"first");
    }

    #[test]
    fn test_empty_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();

        assert!(matches!(
            DirectoryFrameSource::new(dir.path()),
            Err(CaptureError::NoFrames(_))
        ));
    }
}
