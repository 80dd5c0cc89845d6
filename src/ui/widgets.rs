/// Building blocks shared by the screens: navigation bar, footer,
/// headings and small decorations.
use chrono::Datelike;
use iced::font::Weight;
use iced::widget::{button, column, container, horizontal_space, row, text, Column, Row};
use iced::{Alignment, Element, Font, Length};

use super::theme;
use crate::routes::Route;

pub const BOLD: Font = Font {
    weight: Weight::Bold,
    ..Font::DEFAULT
};

pub const BRAND: &str = "BridalAI";

const NAV_LINKS: [(Route, &str); 3] = [
    (Route::Landing, "Home"),
    (Route::Upload, "Upload"),
    (Route::About, "About"),
];

const FOOTER_LINKS: [(Route, &str); 3] = [
    (Route::Landing, "Home"),
    (Route::Upload, "Upload Image"),
    (Route::About, "About Project"),
];

/// Top bar with the brand, route links and the "Get Started" button
pub fn nav_bar<'a, Message: Clone + 'a>(
    active: Route,
    on_navigate: impl Fn(Route) -> Message,
) -> Element<'a, Message> {
    let brand = button(row![text("✦").color(theme::PRIMARY).size(22), text(BRAND).font(BOLD).size(22)].spacing(8))
        .on_press(on_navigate(Route::Landing))
        .style(button::text);

    let links = NAV_LINKS.iter().fold(Row::new().spacing(8), |links, (route, label)| {
        let label = text(*label).color(if *route == active {
            theme::PRIMARY
        } else {
            theme::MUTED
        });
        links.push(
            button(label)
                .on_press(on_navigate(*route))
                .style(button::text),
        )
    });

    let bar = row![
        brand,
        horizontal_space(),
        links,
        button(text("Get Started").font(BOLD))
            .on_press(on_navigate(Route::Upload))
            .padding([8, 18])
            .style(button::primary),
    ]
    .spacing(16)
    .align_y(Alignment::Center);

    container(bar)
        .padding([12, 32])
        .width(Length::Fill)
        .style(theme::nav_bar)
        .into()
}

/// Bottom section with brand blurb, quick links and copyright
pub fn footer<'a, Message: Clone + 'a>(on_navigate: impl Fn(Route) -> Message) -> Element<'a, Message> {
    let about = column![
        text(BRAND).font(BOLD).size(20),
        text("Helping brides discover their perfect wedding hairstyle with AI-powered face analysis.")
            .color(theme::MUTED)
            .size(14),
    ]
    .spacing(8)
    .width(Length::FillPortion(2));

    let links = FOOTER_LINKS.iter().fold(
        Column::new().spacing(4).push(text("Quick Links").font(BOLD)),
        |links, (route, label)| {
            links.push(
                button(text(*label).color(theme::MUTED).size(14))
                    .on_press(on_navigate(*route))
                    .padding(0)
                    .style(button::text),
            )
        },
    );

    let year = chrono::Local::now().year();
    let copyright = text(format!("© {} {}. Made with ♥ for brides.", year, BRAND))
        .color(theme::MUTED)
        .size(12);

    container(
        column![
            row![about, links.width(Length::FillPortion(1))].spacing(32),
            copyright,
        ]
        .spacing(24),
    )
    .padding([32, 48])
    .width(Length::Fill)
    .style(theme::nav_bar)
    .into()
}

/// Two-tone heading, e.g. "Upload Your" + highlighted "Photo"
pub fn heading<'a, Message: 'a>(plain: &'a str, highlight: &'a str, size: u16) -> Element<'a, Message> {
    row![
        text(plain).font(BOLD).size(size),
        text(highlight).font(BOLD).size(size).color(theme::PRIMARY),
    ]
    .spacing(10)
    .into()
}

/// Small pill with an icon glyph and label
pub fn badge<'a, Message: 'a>(glyph: &'a str, label: &'a str, color: iced::Color) -> Element<'a, Message> {
    container(row![text(glyph), text(label).size(13)].spacing(6))
        .padding([4, 12])
        .style(theme::badge(color))
        .into()
}

/// Section title with a muted subtitle, centered
pub fn section_header<'a, Message: 'a>(
    plain: &'a str,
    highlight: &'a str,
    subtitle: &'a str,
) -> Element<'a, Message> {
    column![
        heading(plain, highlight, 32),
        text(subtitle).color(theme::MUTED).size(16),
    ]
    .spacing(10)
    .align_x(Alignment::Center)
    .width(Length::Fill)
    .into()
}
