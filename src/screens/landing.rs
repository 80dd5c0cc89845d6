/// Landing page: hero, trending carousel, how-it-works and call to action
use iced::widget::{button, column, container, horizontal_space, row, text, Column, Row, Space};
use iced::{time, Alignment, Color, Element, Length, Subscription};
use std::time::Duration;

use super::Action;
use crate::routes::Route;
use crate::state::carousel::Carousel;
use crate::state::catalog::RecommendationCatalog;
use crate::state::data::TrendingStyle;
use crate::ui::theme;
use crate::ui::widgets::{self, BOLD};

/// Slides visible at once
const VISIBLE_SLIDES: usize = 3;

const STATS: [(&str, &str); 3] = [
    ("500+", "Hairstyle Options"),
    ("95%", "Match Accuracy"),
    ("10K+", "Happy Brides"),
];

const FEATURES: [(&str, &str, &str); 3] = [
    (
        "⇪",
        "Upload Your Photo",
        "Simply upload a clear front-facing photo. Our system works best with well-lit images showing your full face.",
    ),
    (
        "◎",
        "Face Shape Analysis",
        "Our AI analyzes your facial features including face shape, forehead, jawline, and proportions for accurate matching.",
    ),
    (
        "✦",
        "AI Recommendations",
        "Receive personalized bridal hairstyle suggestions that complement your unique facial structure beautifully.",
    ),
];

#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Route),
    NextSlide,
    PreviousSlide,
    GoToSlide(usize),
    Autoplay,
}

pub struct Landing {
    carousel: Carousel,
    autoplay: Duration,
}

impl Landing {
    pub fn new(autoplay: Duration) -> Self {
        Self {
            carousel: Carousel::new(RecommendationCatalog::trending().len()),
            autoplay,
        }
    }

    pub fn update(&mut self, message: Message) -> Action<Message> {
        match message {
            Message::Navigate(route) => return Action::Navigate(route),
            Message::NextSlide | Message::Autoplay => self.carousel.next(),
            Message::PreviousSlide => self.carousel.previous(),
            Message::GoToSlide(index) => self.carousel.go_to(index),
        }
        Action::None
    }

    /// Autoplay ticks only exist while the landing page is showing
    pub fn subscription(&self) -> Subscription<Message> {
        time::every(self.autoplay).map(|_| Message::Autoplay)
    }

    pub fn view(&self) -> Element<'_, Message> {
        column![self.hero(), self.trending(), features(), call_to_action()]
            .width(Length::Fill)
            .into()
    }

    fn hero(&self) -> Element<'_, Message> {
        let stats = STATS.iter().fold(Row::new().spacing(48), |stats, (value, label)| {
            stats.push(
                column![
                    text(*value).font(BOLD).size(30).color(theme::GOLD),
                    text(*label).size(13).color(theme::MUTED),
                ]
                .align_x(Alignment::Center),
            )
        });

        let content = column![
            widgets::badge("♛", "AI-Powered Bridal Style Discovery", theme::GOLD),
            widgets::heading("Find Your Perfect", "Bridal Hairstyle", 52),
            text(
                "Upload your photo and let our AI recommend stunning bridal hairstyles \
                 tailored to your unique facial features. Your dream wedding look awaits."
            )
            .size(18)
            .color(theme::MUTED)
            .width(Length::Fixed(640.0)),
            row![
                button(text("Get Started  →").font(BOLD).size(18))
                    .on_press(Message::Navigate(Route::Upload))
                    .padding([14, 32])
                    .style(button::primary),
                button(text("Learn More").size(18))
                    .on_press(Message::Navigate(Route::About))
                    .padding([14, 32])
                    .style(button::secondary),
            ]
            .spacing(16),
            Space::with_height(24),
            stats,
        ]
        .spacing(24)
        .align_x(Alignment::Center);

        container(content)
            .padding([96, 32])
            .width(Length::Fill)
            .center_x(Length::Fill)
            .style(theme::hero)
            .into()
    }

    fn trending(&self) -> Element<'_, Message> {
        let slides = RecommendationCatalog::trending();
        let shown = VISIBLE_SLIDES.min(slides.len());

        let cards = (0..shown).fold(Row::new().spacing(24), |cards, offset| {
            let index = (self.carousel.index() + offset) % slides.len();
            cards.push(slide_card(&slides[index], offset == 0))
        });

        let dots = (0..self.carousel.len()).fold(Row::new().spacing(8), |dots, index| {
            let color = if index == self.carousel.index() {
                theme::PRIMARY
            } else {
                theme::BORDER
            };
            dots.push(
                button(text("●").size(12).color(color))
                    .on_press(Message::GoToSlide(index))
                    .padding(2)
                    .style(button::text),
            )
        });

        let carousel = row![
            button(text("‹").size(28))
                .on_press(Message::PreviousSlide)
                .style(button::text),
            cards,
            button(text("›").size(28))
                .on_press(Message::NextSlide)
                .style(button::text),
        ]
        .spacing(16)
        .align_y(Alignment::Center);

        column![
            widgets::section_header(
                "Trending Bridal",
                "Hairstyles",
                "Explore our curated collection of stunning bridal hairstyles loved by thousands of brides.",
            ),
            carousel,
            dots,
        ]
        .spacing(32)
        .padding([80, 32])
        .align_x(Alignment::Center)
        .width(Length::Fill)
        .into()
    }
}

fn slide_card(slide: &TrendingStyle, focused: bool) -> Element<'_, Message> {
    let rating = container(text(format!("★ {:.1}", slide.rating)).size(12))
        .padding([2, 8])
        .style(theme::badge(theme::GOLD));

    // Remote images are not fetched; a tinted panel stands in for the photo
    let artwork = container(text(slide.name.chars().next().unwrap_or('✦').to_string()).size(64).color(Color {
        a: 0.6,
        ..theme::PINK
    }))
    .width(Length::Fill)
    .height(Length::Fixed(220.0))
    .center_x(Length::Fill)
    .center_y(Length::Fixed(220.0))
    .style(theme::tile);

    let body = column![
        row![widgets::badge("✦", slide.category, theme::PRIMARY), horizontal_space(), rating]
            .align_y(Alignment::Center),
        text(slide.name).font(BOLD).size(20),
    ]
    .spacing(8);

    container(column![artwork, body].spacing(16))
        .padding(16)
        .width(Length::Fixed(if focused { 300.0 } else { 260.0 }))
        .style(theme::card)
        .into()
}

fn features<'a>() -> Element<'a, Message> {
    let cards = FEATURES.iter().enumerate().fold(
        Row::new().spacing(24),
        |cards, (index, (glyph, title, description))| {
            cards.push(
                container(
                    column![
                        row![
                            text(*glyph).size(28).color(theme::PRIMARY),
                            horizontal_space(),
                            text(format!("0{}", index + 1)).size(28).color(theme::BORDER),
                        ],
                        text(*title).font(BOLD).size(20),
                        text(*description).size(14).color(theme::MUTED),
                    ]
                    .spacing(12),
                )
                .padding(24)
                .width(Length::FillPortion(1))
                .style(theme::card),
            )
        },
    );

    Column::new()
        .push(widgets::section_header(
            "How It",
            "Works",
            "Our intelligent system makes finding your perfect bridal hairstyle simple and enjoyable.",
        ))
        .push(cards)
        .spacing(40)
        .padding([80, 64])
        .width(Length::Fill)
        .into()
}

fn call_to_action<'a>() -> Element<'a, Message> {
    let content = column![
        text("♥").size(36).color(theme::PRIMARY),
        widgets::heading("Ready to Find Your", "Look?", 32),
        text("Join thousands of brides who discovered their perfect wedding hairstyle with our AI technology.")
            .color(theme::MUTED),
        button(text("Start Your Journey  →").font(BOLD).size(18))
            .on_press(Message::Navigate(Route::Upload))
            .padding([14, 32])
            .style(button::primary),
    ]
    .spacing(20)
    .align_x(Alignment::Center);

    container(content)
        .padding([80, 32])
        .width(Length::Fill)
        .center_x(Length::Fill)
        .style(theme::hero)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_controls() {
        let mut landing = Landing::new(Duration::from_millis(4000));
        assert!(matches!(landing.update(Message::PreviousSlide), Action::None));
        assert_eq!(landing.carousel.index(), 4);

        landing.update(Message::Autoplay);
        assert_eq!(landing.carousel.index(), 0);

        landing.update(Message::GoToSlide(2));
        landing.update(Message::NextSlide);
        assert_eq!(landing.carousel.index(), 3);
    }

    #[test]
    fn test_call_to_action_navigates() {
        let mut landing = Landing::new(Duration::from_millis(4000));
        assert!(matches!(
            landing.update(Message::Navigate(Route::Upload)),
            Action::Navigate(Route::Upload)
        ));
    }
}
