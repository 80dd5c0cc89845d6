/// State management module
///
/// This module holds everything the screens share that is not UI:
/// - Shared data structures (data.rs)
/// - The session-scoped photo slot (session.rs)
/// - The processing animation state machine (sequencer.rs)
/// - Static catalog data and the analysis seam (catalog.rs)
/// - Landing carousel position (carousel.rs)

pub mod carousel;
pub mod catalog;
pub mod data;
pub mod sequencer;
pub mod session;
