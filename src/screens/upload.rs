/// Upload page: pick or drop a photo, preview it, submit it for analysis
use iced::event::{self, Event};
use iced::task;
use iced::widget::image::Handle;
use iced::widget::{button, column, container, row, text, Column, Image, Row};
use iced::{window, Alignment, ContentFit, Element, Length, Subscription, Task};
use rfd::FileDialog;
use std::path::PathBuf;
use tracing::{debug, info, warn};

use super::Action;
use crate::photo::decode::{self, DecodeError, Preview};
use crate::photo::picker::{ImagePicker, PickerEvent};
use crate::routes::Route;
use crate::state::data::UploadedImage;
use crate::state::session::SharedImageSlot;
use crate::ui::theme;
use crate::ui::widgets::{self, BOLD};

const TIPS: [&str; 4] = [
    "Use a clear, front-facing photo",
    "Ensure good lighting on your face",
    "Keep hair away from your face",
    "Avoid heavy filters or editing",
];

const PHOTO_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "webp", "gif"];

#[derive(Debug, Clone)]
pub enum Message {
    /// Open the native file dialog
    Browse,
    FileHovered,
    FilesHoveredLeft,
    FileDropped(PathBuf),
    /// Background decode finished for the given selection
    Decoded(u64, Result<Preview, DecodeError>),
    Clear,
    Submit,
    Navigate(Route),
}

pub struct Upload {
    store: SharedImageSlot,
    picker: ImagePicker,
    /// Image widget handle for the current preview
    preview_handle: Option<Handle>,
    /// Aborts the running decode when replaced or when the screen is dropped
    decoding: Option<task::Handle>,
    limit_mb: u64,
}

impl Upload {
    pub fn new(store: SharedImageSlot, limit_mb: u64) -> Self {
        Self {
            store,
            picker: ImagePicker::new(),
            preview_handle: None,
            decoding: None,
            limit_mb,
        }
    }

    pub fn update(&mut self, message: Message) -> Action<Message> {
        match message {
            Message::Browse => {
                // Show the native file picker dialog
                let file = FileDialog::new()
                    .set_title("Select a Photo of Your Face")
                    .add_filter("Images", &PHOTO_EXTENSIONS)
                    .pick_file();

                match file {
                    Some(path) => self.select(path),
                    None => Action::None,
                }
            }
            Message::FileHovered => {
                self.picker.set_dragging(true);
                Action::None
            }
            Message::FilesHoveredLeft => {
                self.picker.set_dragging(false);
                Action::None
            }
            Message::FileDropped(path) => {
                self.picker.set_dragging(false);
                self.select(path)
            }
            Message::Decoded(generation, result) => {
                if self.picker.finish_decode(generation, result) == PickerEvent::PreviewReady {
                    self.decoding = None;
                    self.preview_handle = self.picker.preview().map(|preview| {
                        debug!(generation = preview.generation, "preview ready");
                        Handle::from_bytes(preview.bytes.as_ref().clone())
                    });
                }
                Action::None
            }
            Message::Clear => {
                self.picker.clear();
                self.preview_handle = None;
                self.decoding = None;
                Action::None
            }
            Message::Submit => {
                let Some(preview) = self.picker.preview() else {
                    return Action::None;
                };
                info!(
                    width = preview.width,
                    height = preview.height,
                    "📸 Photo submitted for analysis"
                );
                self.store.put(preview.data_url.clone());
                Action::Navigate(Route::Processing)
            }
            Message::Navigate(route) => Action::Navigate(route),
        }
    }

    /// Validate a picked or dropped file and start decoding it
    fn select(&mut self, path: PathBuf) -> Action<Message> {
        let request = match self.picker.select(UploadedImage::from_path(path)) {
            Ok(request) => request,
            Err(err) => {
                warn!("⚠️  Ignoring selection: {}", err);
                return Action::None;
            }
        };

        let generation = request.generation;
        let (task, handle) = Task::perform(
            decode::load_preview(request.path, request.mime, generation),
            move |result| Message::Decoded(generation, result),
        )
        .abortable();

        // Replacing the previous handle aborts its decode
        self.decoding = Some(handle.abort_on_drop());
        Action::Run(task)
    }

    pub fn can_submit(&self) -> bool {
        self.picker.preview().is_some()
    }

    /// Window-level drag and drop, only while this screen is showing
    pub fn subscription(&self) -> Subscription<Message> {
        event::listen_with(|event, _status, _window| match event {
            Event::Window(window::Event::FileHovered(_)) => Some(Message::FileHovered),
            Event::Window(window::Event::FilesHoveredLeft) => Some(Message::FilesHoveredLeft),
            Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
            _ => None,
        })
    }

    pub fn view(&self) -> Element<'_, Message> {
        let header = column![
            text("✦").size(28).color(theme::PRIMARY),
            widgets::heading("Upload Your", "Photo", 36),
            text(
                "Share a photo and our AI will analyze your facial features to recommend \
                 the perfect bridal hairstyles for you."
            )
            .color(theme::MUTED),
        ]
        .spacing(12)
        .align_x(Alignment::Center);

        let submit = button(text("Analyze My Face  →").font(BOLD).size(18))
            .on_press_maybe(self.can_submit().then_some(Message::Submit))
            .padding([14, 36])
            .style(button::primary);

        let content = column![header, self.photo_area(), self.tips(), submit]
            .spacing(32)
            .max_width(720)
            .align_x(Alignment::Center);

        container(content)
            .padding([64, 32])
            .width(Length::Fill)
            .center_x(Length::Fill)
            .into()
    }

    fn photo_area(&self) -> Element<'_, Message> {
        let body: Element<'_, Message> = match &self.preview_handle {
            Some(handle) => {
                let actions = row![
                    button(text("⟳  Change"))
                        .on_press(Message::Browse)
                        .style(button::secondary),
                    button(text("✕  Remove"))
                        .on_press(Message::Clear)
                        .style(button::secondary),
                ]
                .spacing(12);

                column![
                    Image::new(handle.clone())
                        .content_fit(ContentFit::Cover)
                        .width(Length::Fill)
                        .height(Length::Fixed(420.0)),
                    actions,
                ]
                .spacing(16)
                .align_x(Alignment::Center)
                .into()
            }
            None => self.drop_zone(),
        };

        let mut area = Column::new().spacing(12).push(body);

        if let Some(file) = self.picker.selected() {
            if file.exceeds_advisory_limit(self.limit_mb) {
                area = area.push(
                    text(format!(
                        "⚠ {} is larger than {}MB; analysis may be slow.",
                        file.file_name(),
                        self.limit_mb
                    ))
                    .size(13)
                    .color(theme::GOLD),
                );
            }
        }

        area.width(Length::Fill).into()
    }

    fn drop_zone(&self) -> Element<'_, Message> {
        let dragging = self.picker.is_dragging();
        let prompt = if dragging {
            "Drop your image here"
        } else {
            "Drag & drop your photo"
        };
        let status = if self.picker.is_decoding() {
            "Loading preview..."
        } else {
            "or click to browse from your device"
        };

        let content = column![
            text("⇪").size(40).color(if dragging { theme::PRIMARY } else { theme::MUTED }),
            text(prompt).font(BOLD).size(18),
            text(status).size(14).color(theme::MUTED),
            text(format!("Supports JPG, PNG, WEBP • Max {}MB", self.limit_mb))
                .size(12)
                .color(theme::MUTED),
        ]
        .spacing(10)
        .align_x(Alignment::Center);

        button(
            container(content)
                .width(Length::Fill)
                .height(Length::Fixed(360.0))
                .center_x(Length::Fill)
                .center_y(Length::Fixed(360.0))
                .style(theme::drop_zone(dragging)),
        )
        .on_press(Message::Browse)
        .padding(0)
        .style(button::text)
        .into()
    }

    fn tips(&self) -> Element<'_, Message> {
        let rows = TIPS.chunks(2).fold(Column::new().spacing(10), |rows, pair| {
            rows.push(pair.iter().fold(Row::new().spacing(16), |line, tip| {
                line.push(
                    row![text("✓").color(theme::PRIMARY), text(*tip).size(14).color(theme::MUTED)]
                        .spacing(8)
                        .width(Length::FillPortion(1)),
                )
            }))
        });

        container(
            column![
                row![text("ⓘ").color(theme::PRIMARY), text("Tips for Best Results").font(BOLD)].spacing(8),
                rows,
            ]
            .spacing(16),
        )
        .padding(24)
        .width(Length::Fill)
        .style(theme::card)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::session::{ImageSlot, SessionImageStore};
    use std::sync::Arc;

    fn upload() -> (Upload, SessionImageStore) {
        let store = SessionImageStore::default();
        (Upload::new(Arc::new(store.clone()), 10), store)
    }

    fn preview(generation: u64) -> Preview {
        Preview {
            generation,
            bytes: Arc::new(vec![0xFF, 0xD8]),
            data_url: "data:image/jpeg;base64,/9g=".to_string(),
            width: 1,
            height: 1,
        }
    }

    #[test]
    fn test_dropping_a_non_image_changes_nothing() {
        let (mut upload, _) = upload();
        upload.update(Message::FileHovered);

        let action = upload.update(Message::FileDropped(PathBuf::from("notes.txt")));

        assert!(matches!(action, Action::None));
        assert!(!upload.picker.is_dragging());
        assert!(upload.picker.selected().is_none());
        assert!(!upload.can_submit());
    }

    #[test]
    fn test_submit_requires_a_preview() {
        let (mut upload, store) = upload();

        assert!(matches!(upload.update(Message::Submit), Action::None));
        assert_eq!(store.get(), None);

        // Still decoding: not submittable yet
        upload.update(Message::FileDropped(PathBuf::from("bride.jpg")));
        assert!(!upload.can_submit());
        assert!(matches!(upload.update(Message::Submit), Action::None));
    }

    #[test]
    fn test_submit_stores_the_preview() {
        let (mut upload, store) = upload();
        upload.update(Message::FileDropped(PathBuf::from("bride.jpg")));
        upload.update(Message::Decoded(1, Ok(preview(1))));

        assert!(upload.preview_handle.is_some());
        assert!(matches!(
            upload.update(Message::Submit),
            Action::Navigate(Route::Processing)
        ));
        assert_eq!(store.get().as_deref(), Some("data:image/jpeg;base64,/9g="));
    }

    #[test]
    fn test_clear_drops_preview_and_late_decode() {
        let (mut upload, _) = upload();
        upload.update(Message::FileDropped(PathBuf::from("bride.jpg")));
        upload.update(Message::Clear);

        upload.update(Message::Decoded(1, Ok(preview(1))));

        assert!(upload.preview_handle.is_none());
        assert!(!upload.can_submit());
    }

    #[test]
    fn test_hover_flags_follow_window_events() {
        let (mut upload, _) = upload();
        upload.update(Message::FileHovered);
        assert!(upload.picker.is_dragging());
        upload.update(Message::FilesHoveredLeft);
        assert!(!upload.picker.is_dragging());
    }
}
