/// Full pages of the app
///
/// Each screen owns its state and its `Message` type. `update` returns
/// an `Action` telling the application what to do next; navigating away
/// drops the screen, which cancels whatever it still has running.
use iced::Task;

use crate::routes::Route;

pub mod about;
pub mod landing;
pub mod processing;
pub mod results;
pub mod upload;

pub enum Action<Message> {
    None,
    Run(Task<Message>),
    Navigate(Route),
}
