// web_app/image.rs - Image file encoding
//
// A chosen image is read fully into memory and turned into a base64 data
// URI, used both as the preview source and in the request payload.
// No size or type checks and no compression.

use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine};

pub const FALLBACK_MIME: &str = "application/octet-stream";

/// Encodes raw file bytes as `data:<mime>;base64,<payload>`.
pub fn encode_data_uri(mime: &str, bytes: &[u8]) -> String {
    let mime = mime.trim();
    let mime = if mime.is_empty() { FALLBACK_MIME } else { mime };
    format!("data:{};base64,{}", mime, BASE64_STANDARD.encode(bytes))
}

/// Reads a browser `File` and encodes it as a data URI.
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub async fn read_file_as_data_uri(
    file: &web_sys::File,
) -> Result<String, crate::web_app::error::CatalogError> {
    use crate::web_app::error::CatalogError;
    use wasm_bindgen_futures::JsFuture;

    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| CatalogError::FileRead(format!("{} ({:?})", file.name(), e)))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();

    tracing::debug!("Read image file {} ({} bytes)", file.name(), bytes.len());
    Ok(encode_data_uri(&file.type_(), &bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_png() {
        let uri = encode_data_uri("image/png", &[0x89, 0x50, 0x4e, 0x47]);
        assert_eq!(uri, "data:image/png;base64,iVBORw==");
    }

    #[test]
    fn test_encode_empty_file() {
        assert_eq!(encode_data_uri("image/jpeg", &[]), "data:image/jpeg;base64,");
    }

    #[test]
    fn test_missing_mime_falls_back() {
        let uri = encode_data_uri("", b"hi");
        assert_eq!(uri, "data:application/octet-stream;base64,aGk=");

        let uri = encode_data_uri("   ", b"hi");
        assert!(uri.starts_with("data:application/octet-stream;base64,"));
    }
}
