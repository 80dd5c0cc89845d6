/// Results page: the uploaded photo, the face analysis and the
/// recommended hairstyles
use iced::widget::image::Handle;
use iced::widget::{button, column, container, horizontal_space, row, text, Image, Row};
use iced::{clipboard, Alignment, Color, ContentFit, Element, Length, Task};
use iced_aw::Wrap;
use rfd::FileDialog;
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::{debug, info, warn};

use super::Action;
use crate::export::{self, AnalysisReport, ExportError};
use crate::photo::data_url;
use crate::routes::Route;
use crate::state::catalog::{Analysis, SharedAnalyzer};
use crate::state::data::HairstyleRecommendation;
use crate::state::session::ImageSlot;
use crate::ui::theme;
use crate::ui::widgets::{self, BOLD};

/// Shown in place of the photo when nothing was uploaded
pub const NO_IMAGE_PLACEHOLDER: &str = "No image uploaded";

#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Route),
    /// Copy a text summary to the clipboard
    Share,
    /// Export the analysis as JSON
    Save,
    Saved(Result<PathBuf, ExportError>),
    /// Run the analyzer again on the same photo
    Refresh,
    /// Heart toggle on a recommendation card
    ToggleLike(u32),
}

pub struct Results {
    analyzer: SharedAnalyzer,
    /// The stored `data:` URL, only kept when it parsed
    encoded: Option<String>,
    photo: Option<Handle>,
    analysis: Analysis,
    /// Liked recommendation ids; ids are stable so likes survive a refresh
    liked: HashSet<u32>,
    /// Feedback line under the header (copied, saved, failed)
    status: Option<String>,
}

impl Results {
    /// Read the uploaded photo from the slot and analyze it
    pub fn mount(slot: &dyn ImageSlot, analyzer: SharedAnalyzer) -> Self {
        let (encoded, photo) = match slot.get() {
            Some(url) => match data_url::parse(&url) {
                Ok(decoded) => {
                    debug!(mime = %decoded.mime, bytes = decoded.bytes.len(), "stored photo found");
                    (Some(url), Some(Handle::from_bytes(decoded.bytes)))
                }
                Err(err) => {
                    warn!("⚠️  Stored photo is unusable: {}", err);
                    (None, None)
                }
            },
            None => (None, None),
        };

        let analysis = analyzer.analyze(encoded.as_deref());
        info!(
            face_shape = %analysis.face_shape,
            styles = analysis.styles_found(),
            photo = photo.is_some(),
            "📊 Showing results"
        );

        Self {
            analyzer,
            encoded,
            photo,
            analysis,
            liked: HashSet::new(),
            status: None,
        }
    }

    pub fn has_photo(&self) -> bool {
        self.photo.is_some()
    }

    /// Text shown in the photo frame instead of an image
    pub fn photo_caption(&self) -> Option<&'static str> {
        (!self.has_photo()).then_some(NO_IMAGE_PLACEHOLDER)
    }

    pub fn analysis(&self) -> &Analysis {
        &self.analysis
    }

    pub fn is_liked(&self, id: u32) -> bool {
        self.liked.contains(&id)
    }

    fn report(&self) -> AnalysisReport {
        AnalysisReport::new(&self.analysis, self.has_photo())
    }

    pub fn update(&mut self, message: Message) -> Action<Message> {
        match message {
            Message::Navigate(route) => Action::Navigate(route),
            Message::Share => {
                self.status = Some("Summary copied to clipboard".to_string());
                Action::Run(clipboard::write(self.report().summary()))
            }
            Message::Save => {
                let report = self.report();
                let path = FileDialog::new()
                    .set_title("Save Your Recommendations")
                    .set_file_name(report.file_name())
                    .add_filter("JSON", &["json"])
                    .save_file();

                match path {
                    Some(path) => Action::Run(Task::perform(
                        export::save_report(path, report),
                        Message::Saved,
                    )),
                    None => Action::None,
                }
            }
            Message::Saved(Ok(path)) => {
                self.status = Some(format!("Saved to {}", path.display()));
                Action::None
            }
            Message::Saved(Err(err)) => {
                warn!("⚠️  Could not save results: {}", err);
                self.status = Some(format!("Could not save: {}", err));
                Action::None
            }
            Message::Refresh => {
                self.analysis = self.analyzer.analyze(self.encoded.as_deref());
                self.status = None;
                Action::None
            }
            Message::ToggleLike(id) => {
                if !self.liked.remove(&id) {
                    self.liked.insert(id);
                }
                debug!(id, liked = self.is_liked(id), "like toggled");
                Action::None
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let actions = row![
            button(text("⇪  Share"))
                .on_press(Message::Share)
                .style(button::secondary),
            button(text("⤓  Save"))
                .on_press(Message::Save)
                .style(button::secondary),
        ]
        .spacing(8);

        let mut header = column![
            button(text("←  Back to Upload").color(theme::MUTED))
                .on_press(Message::Navigate(Route::Upload))
                .padding(0)
                .style(button::text),
            row![widgets::heading("Your", "Recommendations", 36), horizontal_space(), actions]
                .align_y(Alignment::Center),
        ]
        .spacing(8);

        if let Some(status) = &self.status {
            header = header.push(text(status.as_str()).size(13).color(theme::GOLD));
        }

        let summary = row![self.photo_card(), self.analysis_card()].spacing(24);

        let cards = self
            .analysis
            .recommendations
            .iter()
            .map(|style| recommendation_card(style, self.is_liked(style.id)))
            .collect();

        let recommendations = column![
            row![
                widgets::heading("Recommended", "Hairstyles", 26),
                horizontal_space(),
                button(text("⟳  Refresh"))
                    .on_press(Message::Refresh)
                    .style(button::text),
            ]
            .align_y(Alignment::Center),
            Wrap::with_elements(cards).spacing(24.0).line_spacing(24.0),
        ]
        .spacing(24);

        let retry = column![
            text("Not satisfied with the results? Try with a different photo.").color(theme::MUTED),
            button(text("Try Another Photo").font(BOLD))
                .on_press(Message::Navigate(Route::Upload))
                .padding([12, 28])
                .style(button::primary),
        ]
        .spacing(16)
        .align_x(Alignment::Center)
        .width(Length::Fill);

        column![header, summary, recommendations, retry]
            .spacing(48)
            .padding([48, 48])
            .width(Length::Fill)
            .into()
    }

    fn photo_card(&self) -> Element<'_, Message> {
        let frame: Element<'_, Message> = match &self.photo {
            Some(handle) => Image::new(handle.clone())
                .content_fit(ContentFit::Cover)
                .width(Length::Fill)
                .height(Length::Fixed(280.0))
                .into(),
            None => container(text(NO_IMAGE_PLACEHOLDER).color(theme::MUTED))
                .width(Length::Fill)
                .height(Length::Fixed(280.0))
                .center_x(Length::Fill)
                .center_y(Length::Fixed(280.0))
                .style(theme::tile)
                .into(),
        };

        container(column![text("Your Photo").size(14).color(theme::MUTED), frame].spacing(12))
            .padding(24)
            .width(Length::FillPortion(1))
            .style(theme::card)
            .into()
    }

    fn analysis_card(&self) -> Element<'_, Message> {
        let shape = self.analysis.face_shape;

        let face = container(
            row![
                text("Detected Face Shape").font(BOLD),
                horizontal_space(),
                widgets::badge("♛", shape.label(), theme::PRIMARY),
            ]
            .align_y(Alignment::Center),
        )
        .padding(16)
        .style(theme::tile);

        let stats = row![
            stat_tile(self.analysis.styles_found().to_string(), "Styles Found", theme::PRIMARY),
            stat_tile(format!("{}%", self.analysis.best_match()), "Best Match", theme::GOLD),
        ]
        .spacing(16);

        let explanation = text(format!(
            "Based on your {} face shape, we've curated hairstyles that will complement \
             your features beautifully. {}",
            shape.label().to_lowercase(),
            shape.advice()
        ))
        .size(14)
        .color(theme::MUTED);

        container(
            column![
                text("Face Analysis Results").size(14).color(theme::MUTED),
                face,
                stats,
                explanation,
            ]
            .spacing(16),
        )
        .padding(24)
        .width(Length::FillPortion(2))
        .style(theme::card)
        .into()
    }
}

fn stat_tile<'a>(value: String, label: &'a str, color: Color) -> Element<'a, Message> {
    container(
        column![
            text(value).font(BOLD).size(28).color(color),
            text(label).size(13).color(theme::MUTED),
        ]
        .spacing(4),
    )
    .padding(16)
    .width(Length::FillPortion(1))
    .style(theme::tile)
    .into()
}

fn recommendation_card<'a>(style: &HairstyleRecommendation, liked: bool) -> Element<'a, Message> {
    let score = container(text(format!("{}% Match", style.match_score)).font(BOLD).size(12))
        .padding([4, 10])
        .style(theme::badge(theme::GOLD));

    let heart = button(text(if liked { "♥" } else { "♡" }).size(20).color(if liked {
        theme::PRIMARY
    } else {
        theme::MUTED
    }))
    .on_press(Message::ToggleLike(style.id))
    .padding(0)
    .style(button::text);

    // Catalog photos are remote; the tile carries the initials instead
    let initials: String = style
        .name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect();
    let artwork = container(text(initials).size(48).color(theme::PINK))
        .width(Length::Fill)
        .height(Length::Fixed(200.0))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(200.0))
        .style(theme::tile);

    let tags = style.tags.iter().fold(Row::new().spacing(6), |tags, tag| {
        tags.push(
            container(text(*tag).size(11))
                .padding([2, 8])
                .style(theme::badge(theme::PRIMARY)),
        )
    });

    container(
        column![
            artwork,
            row![score, horizontal_space(), heart].align_y(Alignment::Center),
            text(style.name).font(BOLD).size(18),
            text(style.description).size(13).color(theme::MUTED),
            tags,
        ]
        .spacing(12),
    )
    .padding(16)
    .width(Length::Fixed(320.0))
    .style(theme::card)
    .into()
}
