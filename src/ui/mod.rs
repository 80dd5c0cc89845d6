/// Presentation helpers
///
/// - `theme.rs` - palette and container styles
/// - `loader.rs` - canvas spinner for the processing screen
/// - `widgets.rs` - navigation bar, footer and headings

pub mod loader;
pub mod theme;
pub mod widgets;
