/// Upload-screen photo selection
///
/// `ImagePicker` validates picked or dropped files and tracks the
/// asynchronous decode that turns a selection into a preview. Each
/// selection gets a generation number so a decode that finishes after
/// the user moved on (picked another file, cleared, left the screen)
/// is dropped instead of overwriting newer state.
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, warn};

use super::decode::{DecodeError, Preview};
use crate::state::data::UploadedImage;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickError {
    #[error("{file} is not an image ({mime})")]
    NotAnImage { file: String, mime: String },
}

/// Work the host has to start after a successful `select`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeRequest {
    pub generation: u64,
    pub path: PathBuf,
    pub mime: String,
}

/// What changed after a picker operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerEvent {
    /// A new preview is showing
    PreviewReady,
    /// Selection and preview were reset
    Cleared,
    /// Nothing changed
    Unchanged,
}

#[derive(Debug, Default)]
pub struct ImagePicker {
    generation: u64,
    /// Selection waiting for its decode to finish
    pending: Option<UploadedImage>,
    selected: Option<UploadedImage>,
    preview: Option<Preview>,
    dragging: bool,
}

impl ImagePicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept a file if it is an image and ask the host to decode it.
    ///
    /// Anything whose MIME type is not `image/*` leaves the picker untouched.
    pub fn select(&mut self, file: UploadedImage) -> Result<DecodeRequest, PickError> {
        if !file.is_image() {
            return Err(PickError::NotAnImage {
                file: file.file_name(),
                mime: file.mime,
            });
        }

        self.generation += 1;
        debug!(file = %file.file_name(), generation = self.generation, "photo selected");

        let request = DecodeRequest {
            generation: self.generation,
            path: file.path.clone(),
            mime: file.mime.clone(),
        };
        self.pending = Some(file);
        Ok(request)
    }

    /// Apply the outcome of a decode started by `select`
    pub fn finish_decode(
        &mut self,
        generation: u64,
        result: Result<Preview, DecodeError>,
    ) -> PickerEvent {
        if generation != self.generation {
            debug!(generation, current = self.generation, "discarding stale decode");
            return PickerEvent::Unchanged;
        }
        match result {
            Ok(preview) => {
                self.selected = self.pending.take();
                self.preview = Some(preview);
                PickerEvent::PreviewReady
            }
            Err(err) => {
                // Keep whatever was showing before
                warn!("⚠️  Could not decode photo: {}", err);
                self.pending = None;
                PickerEvent::Unchanged
            }
        }
    }

    /// Forget the selection. Decodes still in flight become stale.
    pub fn clear(&mut self) -> PickerEvent {
        self.generation += 1;
        self.pending = None;
        self.selected = None;
        self.preview = None;
        self.dragging = false;
        PickerEvent::Cleared
    }

    pub fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn selected(&self) -> Option<&UploadedImage> {
        self.selected.as_ref()
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    pub fn is_decoding(&self) -> bool {
        self.pending.is_some()
    }
}
