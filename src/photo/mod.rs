/// Photo intake module
///
/// This module handles:
/// - Validating picked and dropped files (picker.rs)
/// - Decoding them off the UI thread (decode.rs)
/// - The `data:` URL form kept in the session slot (data_url.rs)

pub mod data_url;
pub mod decode;
pub mod picker;
