/// About page: what the project is, its goals, stack and roadmap
use iced::widget::{button, column, container, row, text, Column, Row};
use iced::{Alignment, Color, Element, Length};

use super::Action;
use crate::routes::Route;
use crate::ui::theme;
use crate::ui::widgets::{self, BOLD};

const OBJECTIVES: [&str; 5] = [
    "Develop an AI-powered system for bridal hairstyle recommendations",
    "Implement accurate facial feature detection and analysis",
    "Create a user-friendly interface for seamless interaction",
    "Provide personalized recommendations based on face shape",
    "Build a scalable and maintainable application",
];

const TECHNOLOGIES: [(&str, &str); 6] = [
    ("Rust", "Memory-safe systems language for the whole application"),
    ("iced", "Native GUI toolkit rendering through wgpu"),
    ("tokio", "Async runtime for background work and timers"),
    ("image", "Photo decoding and validation"),
    ("serde", "Configuration and results export"),
    ("tracing", "Structured application logging"),
];

const FUTURE: [&str; 6] = [
    "Virtual try-on feature using AR technology",
    "Integration with salon booking systems",
    "Hairstyle customization and editing tools",
    "Community features for sharing and reviews",
    "Mobile app development for iOS and Android",
    "Multi-language support for global users",
];

#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Route),
}

#[derive(Debug, Default)]
pub struct About;

impl About {
    pub fn update(&mut self, message: Message) -> Action<Message> {
        match message {
            Message::Navigate(route) => Action::Navigate(route),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let intro = column![
            text("✦").size(28).color(theme::PRIMARY),
            widgets::heading("About This", "Project", 44),
            text(
                "AI Bridal Hairstyle Recommendation System: a project combining artificial \
                 intelligence with bridal fashion to help brides find their perfect wedding \
                 day hairstyle."
            )
            .size(18)
            .color(theme::MUTED),
        ]
        .spacing(16)
        .align_x(Alignment::Center);

        let introduction = section(
            ("💡", "Project Introduction"),
            ("Revolutionizing", "Bridal Style Selection"),
            column![
                text(
                    "This application uses artificial intelligence to help brides choose \
                     suitable bridal hairstyles based on their unique facial features. By \
                     analyzing face shape, proportions, and key facial landmarks, the system \
                     provides personalized recommendations."
                )
                .color(theme::MUTED),
                text(
                    "The project addresses the challenge many brides face when selecting \
                     hairstyles, providing data-driven suggestions that complement their \
                     natural features for their special day."
                )
                .color(theme::MUTED),
            ]
            .spacing(12)
            .into(),
        );

        let objectives = section(
            ("◎", "Project Objectives"),
            ("What We Aim to", "Achieve"),
            checklist(&OBJECTIVES, theme::PRIMARY),
        );

        let technologies = section(
            ("</>", "Technology Stack"),
            ("Tools &", "Technologies Used"),
            technology_grid(),
        );

        let future = section(
            ("↗", "Future Scope"),
            ("Future", "Enhancements"),
            checklist(&FUTURE, theme::GOLD),
        );

        let cta = container(
            column![
                widgets::heading("Ready to", "Try It Out?", 30),
                text("Experience the AI-powered bridal hairstyle recommendation system yourself.")
                    .color(theme::MUTED),
                button(text("Get Started Now  →").font(BOLD))
                    .on_press(Message::Navigate(Route::Upload))
                    .padding([14, 32])
                    .style(button::primary),
            ]
            .spacing(16)
            .align_x(Alignment::Center),
        )
        .padding([64, 32])
        .width(Length::Fill)
        .center_x(Length::Fill)
        .style(theme::hero);

        column![
            container(intro)
                .padding([80, 32])
                .width(Length::Fill)
                .center_x(Length::Fill)
                .style(theme::hero),
            introduction,
            objectives,
            technologies,
            future,
            cta,
        ]
        .spacing(16)
        .width(Length::Fill)
        .into()
    }
}

/// Badge, two-tone heading and body, constrained to a readable width
fn section<'a>(
    (glyph, badge): (&'a str, &'a str),
    (plain, highlight): (&'a str, &'a str),
    body: Element<'a, Message>,
) -> Element<'a, Message> {
    container(
        column![
            widgets::badge(glyph, badge, theme::PRIMARY),
            widgets::heading(plain, highlight, 28),
            body,
        ]
        .spacing(16)
        .max_width(880),
    )
    .padding([40, 32])
    .width(Length::Fill)
    .center_x(Length::Fill)
    .into()
}

fn checklist<'a>(items: &'a [&'a str], color: Color) -> Element<'a, Message> {
    items
        .iter()
        .fold(Column::new().spacing(10), |list, item| {
            list.push(row![text("✓").color(color), text(*item)].spacing(10))
        })
        .into()
}

fn technology_grid<'a>() -> Element<'a, Message> {
    TECHNOLOGIES
        .chunks(3)
        .fold(Column::new().spacing(16), |grid, line| {
            grid.push(line.iter().fold(Row::new().spacing(16), |cells, (name, description)| {
                cells.push(
                    container(
                        column![
                            text(*name).font(BOLD).size(18),
                            text(*description).size(13).color(theme::MUTED),
                        ]
                        .spacing(6),
                    )
                    .padding(20)
                    .width(Length::FillPortion(1))
                    .style(theme::card),
                )
            }))
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cta_goes_to_upload() {
        let mut about = About;
        assert!(matches!(
            about.update(Message::Navigate(Route::Upload)),
            Action::Navigate(Route::Upload)
        ));
    }
}
