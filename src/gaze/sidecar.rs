use crate::configuration::types::GazeConfig;
use crate::error_handling::types::ClassificationError;
use crate::frame_codec::types::Frame;
use crate::gaze::analyzer::{GazeAnalysis, GazeAnalysisFactory};
use crate::gaze::types::GazeReading;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use log::{debug, info};
use serde::Serialize;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};
use std::sync::Mutex;

#[derive(Serialize)]
struct SidecarRequest<'a> {
    image: &'a str,
}

struct SidecarProcess {
    child: Child,
    stdin: BufWriter<ChildStdin>,
    stdout: BufReader<ChildStdout>,
}

/// Gaze analysis delegated to an external process.
///
/// One sidecar is spawned per session. The protocol is newline-delimited
/// JSON over the child's stdio: one request line
/// `{"image": "<base64 PNG>"}` per frame, one reading line
/// `{"horizontal_ratio": <number|null>, "is_blinking": <bool>}` back.
/// The child is killed when the analyzer is dropped (session close).
pub struct SidecarAnalyzer {
    process: Mutex<SidecarProcess>,
}

impl SidecarAnalyzer {
    /// Spawns the analyzer program with piped stdio.
    ///
    /// # Errors
    ///
    /// `ClassificationError::AnalyzerUnavailable` if the program cannot be
    /// started or its pipes cannot be set up.
    pub fn spawn(program: &str, args: &[String]) -> Result<Self, ClassificationError> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                ClassificationError::AnalyzerUnavailable(format!("{}: {}", program, e))
            })?;

        let stdin = child.stdin.take().ok_or_else(|| {
            ClassificationError::AnalyzerUnavailable("analyzer stdin not piped".to_string())
        })?;
        let stdout = child.stdout.take().ok_or_else(|| {
            ClassificationError::AnalyzerUnavailable("analyzer stdout not piped".to_string())
        })?;

        debug!("spawned gaze analyzer process '{}'", program);

        Ok(Self {
            process: Mutex::new(SidecarProcess {
                child,
                stdin: BufWriter::new(stdin),
                stdout: BufReader::new(stdout),
            }),
        })
    }
}

impl GazeAnalysis for SidecarAnalyzer {
    fn analyze(&self, frame: &Frame) -> Result<GazeReading, ClassificationError> {
        let png = frame
            .encode_png()
            .map_err(|e| ClassificationError::FrameEncoding(e.to_string()))?;
        let encoded = STANDARD.encode(png);
        let request = serde_json::to_string(&SidecarRequest { image: &encoded })
            .map_err(|e| ClassificationError::AnalyzerFailed(e.to_string()))?;

        let mut process = self.process.lock().unwrap();

        writeln!(process.stdin, "{}", request)
            .map_err(|e| ClassificationError::AnalyzerFailed(e.to_string()))?;
        process
            .stdin
            .flush()
            .map_err(|e| ClassificationError::AnalyzerFailed(e.to_string()))?;

        let mut line = String::new();
        let read = process
            .stdout
            .read_line(&mut line)
            .map_err(|e| ClassificationError::AnalyzerFailed(e.to_string()))?;
        if read == 0 {
            return Err(ClassificationError::AnalyzerFailed(
                "analyzer closed its stdout".to_string(),
            ));
        }

        serde_json::from_str(&line).map_err(|e| ClassificationError::MalformedReading(e.to_string()))
    }
}

impl Drop for SidecarAnalyzer {
    fn drop(&mut self) {
        if let Ok(mut process) = self.process.lock() {
            let _ = process.child.kill();
            let _ = process.child.wait();
        }
    }
}

/// Spawns one [`SidecarAnalyzer`] per accepted connection, using the program
/// named in the configuration.
pub struct SidecarFactory {
    config: GazeConfig,
}

impl SidecarFactory {
    pub fn new(config: GazeConfig) -> Self {
        info!(
            "gaze analysis delegated to '{}' (one process per session)",
            config.analyzer_program
        );
        Self { config }
    }
}

impl GazeAnalysisFactory for SidecarFactory {
    fn create_analyzer(
        &self,
    ) -> Result<std::sync::Arc<dyn GazeAnalysis>, ClassificationError> {
        Ok(std::sync::Arc::new(SidecarAnalyzer::spawn(
            &self.config.analyzer_program,
            &self.config.analyzer_args,
        )?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use image::{Rgb, RgbImage};

    fn test_frame() -> Frame {
        Frame::from_pixels(RgbImage::from_pixel(4, 4, Rgb([10, 20, 30])), Utc::now())
    }

    #[test]
    fn test_spawn_missing_program_is_unavailable() {
        let result = SidecarAnalyzer::spawn("definitely-not-a-gaze-analyzer", &[]);

        assert!(matches!(
            result,
            Err(ClassificationError::AnalyzerUnavailable(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_sidecar_reading_roundtrip() {
        let script =
            r#"while read line; do echo '{"horizontal_ratio":0.5,"is_blinking":false}'; done"#;
        let analyzer =
            SidecarAnalyzer::spawn("/bin/sh", &["-c".to_string(), script.to_string()]).unwrap();

        let reading = analyzer.analyze(&test_frame()).unwrap();

        assert_eq!(reading.horizontal_ratio, Some(0.5));
        assert!(!reading.is_blinking);
    }

    #[cfg(unix)]
    #[test]
    fn test_sidecar_null_ratio_maps_to_none() {
        let script =
            r#"while read line; do echo '{"horizontal_ratio":null,"is_blinking":true}'; done"#;
        let analyzer =
            SidecarAnalyzer::spawn("/bin/sh", &["-c".to_string(), script.to_string()]).unwrap();

        let reading = analyzer.analyze(&test_frame()).unwrap();

        assert_eq!(reading.horizontal_ratio, None);
        assert!(reading.is_blinking);
    }

    #[cfg(unix)]
    #[test]
    fn test_sidecar_garbage_output_is_malformed() {
        let script = r#"while read line; do echo 'not json at all'; done"#;
        let analyzer =
            SidecarAnalyzer::spawn("/bin/sh", &["-c".to_string(), script.to_string()]).unwrap();

        assert!(matches!(
            analyzer.analyze(&test_frame()),
            Err(ClassificationError::MalformedReading(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_sidecar_exit_is_failure() {
        let analyzer =
            SidecarAnalyzer::spawn("/bin/sh", &["-c".to_string(), "exit 0".to_string()]).unwrap();

        assert!(matches!(
            analyzer.analyze(&test_frame()),
            Err(ClassificationError::AnalyzerFailed(_))
        ));
    }
}
