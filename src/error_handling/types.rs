use std::fmt;

#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    TomlError(String),
    BadIPFormatting(String),
    BadPortsRange(String),
    AnalyzerEmpty(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::TomlError(e) => write!(f, "TOML parsing error: {}", e),
            ConfigError::BadIPFormatting(e) => write!(f, "IP formatting error: {}", e),
            ConfigError::BadPortsRange(e) => write!(f, "Port range error: {}", e),
            ConfigError::AnalyzerEmpty(e) => write!(f, "Analyzer configuration error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Raised by the frame codec when an inbound payload cannot be turned into a
/// pixel buffer. Always recovered locally: the frame is skipped and the
/// session continues.
#[derive(Debug)]
pub enum DecodeError {
    EmptyPayload,
    InvalidBase64(base64::DecodeError),
    InvalidImage(image::ImageError),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::EmptyPayload => write!(f, "Empty or missing image payload"),
            DecodeError::InvalidBase64(e) => write!(f, "Base64 decoding error: {}", e),
            DecodeError::InvalidImage(e) => write!(f, "Image decoding error: {}", e),
        }
    }
}

impl std::error::Error for DecodeError {}

impl From<base64::DecodeError> for DecodeError {
    fn from(err: base64::DecodeError) -> Self {
        DecodeError::InvalidBase64(err)
    }
}

impl From<image::ImageError> for DecodeError {
    fn from(err: image::ImageError) -> Self {
        DecodeError::InvalidImage(err)
    }
}

/// Raised when the external gaze-analysis capability cannot produce a usable
/// reading. Recovered locally: the frame produces no reply, never a
/// `distracted` default.
#[derive(Debug)]
pub enum ClassificationError {
    AnalyzerUnavailable(String),
    AnalyzerFailed(String),
    MalformedReading(String),
    FrameEncoding(String),
}

impl fmt::Display for ClassificationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassificationError::AnalyzerUnavailable(e) => {
                write!(f, "Gaze analyzer unavailable: {}", e)
            }
            ClassificationError::AnalyzerFailed(e) => write!(f, "Gaze analysis failed: {}", e),
            ClassificationError::MalformedReading(e) => {
                write!(f, "Malformed gaze reading: {}", e)
            }
            ClassificationError::FrameEncoding(e) => write!(f, "Frame encoding error: {}", e),
        }
    }
}

impl std::error::Error for ClassificationError {}

/// Per-message failure inside a session's receive loop. Every variant is
/// recovered by skipping the message; none of them terminate the connection.
#[derive(Debug)]
pub enum FrameError {
    Parse(serde_json::Error),
    Decode(DecodeError),
    Classification(ClassificationError),
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::Parse(e) => write!(f, "Message parse error: {}", e),
            FrameError::Decode(e) => write!(f, "Frame decode error: {}", e),
            FrameError::Classification(e) => write!(f, "Classification error: {}", e),
        }
    }
}

impl std::error::Error for FrameError {}

impl From<DecodeError> for FrameError {
    fn from(err: DecodeError) -> Self {
        FrameError::Decode(err)
    }
}

impl From<ClassificationError> for FrameError {
    fn from(err: ClassificationError) -> Self {
        FrameError::Classification(err)
    }
}

#[derive(Debug)]
pub enum NetworkError {
    BindError(std::io::Error),
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::BindError(e) => write!(f, "Network bind error: {}", e),
        }
    }
}

impl std::error::Error for NetworkError {}

/// Raised by client-side frame sources (the camera stand-ins). A failed
/// capture tick is dropped; the next tick tries again.
#[derive(Debug)]
pub enum CaptureError {
    IoError(std::io::Error),
    NoFrames(String),
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::IoError(e) => write!(f, "Frame capture IO error: {}", e),
            CaptureError::NoFrames(e) => write!(f, "No frames available: {}", e),
        }
    }
}

impl std::error::Error for CaptureError {}

impl From<std::io::Error> for CaptureError {
    fn from(err: std::io::Error) -> Self {
        CaptureError::IoError(err)
    }
}

#[derive(Debug)]
pub enum ControllerError {
    ConfigurationError(ConfigError),
    NetworkError(NetworkError),
}

impl fmt::Display for ControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControllerError::ConfigurationError(e) => write!(f, "Configuration error: {}", e),
            ControllerError::NetworkError(e) => write!(f, "Network error: {}", e),
        }
    }
}

impl std::error::Error for ControllerError {}
