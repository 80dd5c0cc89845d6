/// Colors and container styles shared by every screen
use iced::theme::Palette;
use iced::widget::container;
use iced::{Background, Border, Color, Shadow, Theme, Vector};

pub const BACKGROUND: Color = Color { r: 0.10, g: 0.07, b: 0.09, a: 1.0 };
pub const CARD: Color = Color { r: 0.15, g: 0.11, b: 0.13, a: 1.0 };
pub const SECONDARY: Color = Color { r: 0.20, g: 0.15, b: 0.18, a: 1.0 };
pub const BORDER: Color = Color { r: 0.30, g: 0.23, b: 0.27, a: 1.0 };
pub const FOREGROUND: Color = Color { r: 0.98, g: 0.95, b: 0.96, a: 1.0 };
pub const MUTED: Color = Color { r: 0.68, g: 0.60, b: 0.64, a: 1.0 };
pub const PRIMARY: Color = Color { r: 0.91, g: 0.45, b: 0.58, a: 1.0 };
pub const PINK: Color = Color { r: 0.96, g: 0.58, b: 0.74, a: 1.0 };
pub const GOLD: Color = Color { r: 0.86, g: 0.70, b: 0.42, a: 1.0 };

/// Rose-and-gold dark theme
pub fn bridal() -> Theme {
    Theme::custom(
        "Bridal".to_string(),
        Palette {
            background: BACKGROUND,
            text: FOREGROUND,
            primary: PRIMARY,
            success: GOLD,
            danger: Color { r: 0.90, g: 0.30, b: 0.30, a: 1.0 },
        },
    )
}

/// Rounded card with a subtle border and drop shadow
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(FOREGROUND),
        background: Some(Background::Color(CARD)),
        border: Border {
            color: BORDER,
            width: 1.0,
            radius: 16.0.into(),
        },
        shadow: Shadow {
            color: Color { a: 0.35, ..Color::BLACK },
            offset: Vector::new(0.0, 4.0),
            blur_radius: 16.0,
        },
    }
}

/// Inset tile used inside cards
pub fn tile(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(SECONDARY)),
        border: Border {
            color: BORDER,
            width: 1.0,
            radius: 12.0.into(),
        },
        ..container::Style::default()
    }
}

/// Pill-shaped badge
pub fn badge(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        text_color: Some(color),
        background: Some(Background::Color(Color { a: 0.15, ..color })),
        border: Border {
            color: Color { a: 0.35, ..color },
            width: 1.0,
            radius: 999.0.into(),
        },
        ..container::Style::default()
    }
}

/// Dashed-looking drop zone; brighter while files hover over the window
pub fn drop_zone(dragging: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(if dragging {
            Color { a: 0.12, ..PRIMARY }
        } else {
            CARD
        })),
        border: Border {
            color: if dragging { PRIMARY } else { BORDER },
            width: 2.0,
            radius: 16.0.into(),
        },
        ..container::Style::default()
    }
}

/// Full-width band behind hero and call-to-action sections
pub fn hero(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color { r: 0.14, g: 0.08, b: 0.11, a: 1.0 })),
        ..container::Style::default()
    }
}

/// Top navigation bar
pub fn nav_bar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color { a: 0.92, ..BACKGROUND })),
        border: Border {
            color: BORDER,
            width: 1.0,
            radius: 0.0.into(),
        },
        ..container::Style::default()
    }
}
