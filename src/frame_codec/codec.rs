use crate::error_handling::types::DecodeError;
use crate::frame_codec::types::Frame;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{DateTime, Utc};

/// Decodes one transport-encoded frame into a pixel buffer.
///
/// The payload is expected to look like what `canvas.toDataURL()` produces:
/// an optional `data:image/jpeg;base64,` style header followed by base64
/// data. Anything up to the first comma is treated as header and stripped;
/// a payload without a comma is taken as bare base64.
///
/// # Errors
///
/// * `DecodeError::EmptyPayload`: nothing left to decode after stripping
/// * `DecodeError::InvalidBase64`: the remainder is not valid base64
/// * `DecodeError::InvalidImage`: the decoded bytes are not a decodable image
pub fn decode_frame(payload: &str, received_at: DateTime<Utc>) -> Result<Frame, DecodeError> {
    if payload.is_empty() {
        return Err(DecodeError::EmptyPayload);
    }

    let encoded = match payload.split_once(',') {
        Some((_header, rest)) => rest,
        None => payload,
    };

    if encoded.is_empty() {
        return Err(DecodeError::EmptyPayload);
    }

    let bytes = STANDARD.decode(encoded)?;
    let decoded = image::load_from_memory(&bytes)?;

    Ok(Frame::from_pixels(decoded.to_rgb8(), received_at))
}
