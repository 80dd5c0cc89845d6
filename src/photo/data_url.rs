/// `data:` URL encoding for the session photo slot
///
/// The slot only holds strings, so the photo travels as
/// `data:<mime>;base64,<payload>`.
use base64::{engine::general_purpose::STANDARD, Engine as _};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataUrlError {
    #[error("not a data: URL")]
    MissingScheme,
    #[error("data: URL has no payload separator")]
    MissingPayload,
    #[error("data: URL is not base64 encoded")]
    NotBase64,
    #[error("invalid base64 payload: {0}")]
    InvalidPayload(String),
}

/// A decoded `data:` URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl {
    pub mime: String,
    pub bytes: Vec<u8>,
}

pub fn encode(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

pub fn parse(url: &str) -> Result<DataUrl, DataUrlError> {
    let rest = url.strip_prefix("data:").ok_or(DataUrlError::MissingScheme)?;
    let (header, payload) = rest.split_once(',').ok_or(DataUrlError::MissingPayload)?;
    let mime = header
        .strip_suffix(";base64")
        .ok_or(DataUrlError::NotBase64)?;

    let bytes = STANDARD
        .decode(payload)
        .map_err(|e| DataUrlError::InvalidPayload(e.to_string()))?;

    Ok(DataUrl {
        mime: mime.to_string(),
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_format() {
        assert_eq!(encode("image/png", b"hi"), "data:image/png;base64,aGk=");
    }

    #[test]
    fn test_parse_recovers_bytes() {
        let bytes = vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];
        let parsed = parse(&encode("image/jpeg", &bytes)).unwrap();
        assert_eq!(parsed.mime, "image/jpeg");
        assert_eq!(parsed.bytes, bytes);
    }

    #[test]
    fn test_parse_rejects_malformed_urls() {
        assert_eq!(parse("https://example.com/a.jpg"), Err(DataUrlError::MissingScheme));
        assert_eq!(parse("data:image/png;base64"), Err(DataUrlError::MissingPayload));
        assert_eq!(parse("data:text/plain,hello"), Err(DataUrlError::NotBase64));
        assert!(matches!(
            parse("data:image/png;base64,@@@"),
            Err(DataUrlError::InvalidPayload(_))
        ));
    }
}
