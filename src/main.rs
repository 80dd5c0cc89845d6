use iced::widget::{column, scrollable};
use iced::{Element, Subscription, Task, Theme};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

mod config;
mod export;
mod photo;
mod routes;
mod screens;
mod state;
mod ui;

use config::AppConfig;
use routes::Route;
use screens::about::{self, About};
use screens::landing::{self, Landing};
use screens::processing::{self, Processing};
use screens::results::{self, Results};
use screens::upload::{self, Upload};
use screens::Action;
use state::catalog::{MockAnalyzer, SharedAnalyzer};
use state::session::{SessionImageStore, SessionStorage, SharedImageSlot};
use ui::widgets;

/// Rendering crates are chatty at info level
const QUIET_DEPENDENCIES: &str = "wgpu_core=warn,wgpu_hal=warn,naga=warn,iced_wgpu=warn";

/// The page currently showing. Replacing it drops the old page, which
/// cancels its timers and background work.
enum Screen {
    Landing(Landing),
    Upload(Upload),
    Processing(Processing),
    Results(Results),
    About(About),
}

/// Main application state
struct BridalStyle {
    config: AppConfig,
    /// Session slot shared by Upload (writer) and Results (reader)
    store: SharedImageSlot,
    analyzer: SharedAnalyzer,
    route: Route,
    screen: Screen,
    /// Id of the latest processing run; older timeline ticks are ignored
    next_run: u64,
    theme: Theme,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    Navigate(Route),
    Landing(landing::Message),
    Upload(upload::Message),
    Processing(processing::Message),
    Results(results::Message),
    About(about::Message),
}

impl BridalStyle {
    /// Create a new instance of the application showing `start`
    fn new(config: AppConfig, start: Route) -> (Self, Task<Message>) {
        let store: SharedImageSlot = Arc::new(SessionImageStore::new(SessionStorage::new()));

        let mut app = BridalStyle {
            screen: Screen::Landing(Landing::new(config.carousel_interval())),
            route: Route::Landing,
            config,
            store,
            analyzer: Arc::new(MockAnalyzer),
            next_run: 0,
            theme: ui::theme::bridal(),
        };

        info!("💍 BridalAI started at {}", start.path());
        let task = app.navigate(start);
        (app, task)
    }

    fn title(&self) -> String {
        let page = match self.route {
            Route::Landing => "Find Your Perfect Bridal Hairstyle",
            Route::Upload => "Upload Your Photo",
            Route::Processing => "Analyzing",
            Route::Results => "Your Recommendations",
            Route::About => "About",
        };
        format!("{} - {}", widgets::BRAND, page)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(route) => self.navigate(route),
            Message::Landing(message) => {
                let Screen::Landing(landing) = &mut self.screen else {
                    return Task::none();
                };
                let action = landing.update(message);
                self.perform(action, Message::Landing)
            }
            Message::Upload(message) => {
                let Screen::Upload(upload) = &mut self.screen else {
                    return Task::none();
                };
                let action = upload.update(message);
                self.perform(action, Message::Upload)
            }
            Message::Processing(message) => {
                // Ticks can still arrive after leaving the screen
                let Screen::Processing(processing) = &mut self.screen else {
                    return Task::none();
                };
                let action = processing.update(message);
                self.perform(action, Message::Processing)
            }
            Message::Results(message) => {
                let Screen::Results(results) = &mut self.screen else {
                    return Task::none();
                };
                let action = results.update(message);
                self.perform(action, Message::Results)
            }
            Message::About(message) => {
                let Screen::About(about) = &mut self.screen else {
                    return Task::none();
                };
                let action = about.update(message);
                self.perform(action, Message::About)
            }
        }
    }

    fn perform<M>(&mut self, action: Action<M>, wrap: fn(M) -> Message) -> Task<Message>
    where
        M: Send + 'static,
    {
        match action {
            Action::None => Task::none(),
            Action::Run(task) => task.map(wrap),
            Action::Navigate(route) => self.navigate(route),
        }
    }

    /// Swap in a fresh screen for `route`
    fn navigate(&mut self, route: Route) -> Task<Message> {
        if route == self.route {
            return Task::none();
        }
        info!(from = self.route.path(), to = route.path(), "🧭 Navigating");
        self.route = route;

        let (screen, task) = match route {
            Route::Landing => (
                Screen::Landing(Landing::new(self.config.carousel_interval())),
                Task::none(),
            ),
            Route::Upload => (
                Screen::Upload(Upload::new(self.store.clone(), self.config.max_upload_mb)),
                Task::none(),
            ),
            Route::Processing => {
                self.next_run += 1;
                let (processing, events) =
                    Processing::start(self.next_run, self.config.sequencer_timing());
                (
                    Screen::Processing(processing),
                    Task::run(events, Message::Processing),
                )
            }
            Route::Results => (
                Screen::Results(Results::mount(self.store.as_ref(), self.analyzer.clone())),
                Task::none(),
            ),
            Route::About => (Screen::About(About), Task::none()),
        };

        // The previous screen is dropped here
        self.screen = screen;
        task
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let content = match &self.screen {
            Screen::Landing(landing) => landing.view().map(Message::Landing),
            Screen::Upload(upload) => upload.view().map(Message::Upload),
            Screen::Processing(processing) => processing.view().map(Message::Processing),
            Screen::Results(results) => results.view().map(Message::Results),
            Screen::About(about) => about.view().map(Message::About),
        };

        let mut page = column![content];
        if self.route != Route::Processing {
            page = page.push(widgets::footer(Message::Navigate));
        }

        column![
            widgets::nav_bar(self.route, Message::Navigate),
            scrollable(page),
        ]
        .into()
    }

    /// Timers and window events exist only for the screen that needs them
    fn subscription(&self) -> Subscription<Message> {
        match &self.screen {
            Screen::Landing(landing) => landing.subscription().map(Message::Landing),
            Screen::Upload(upload) => upload.subscription().map(Message::Upload),
            Screen::Processing(processing) => processing.subscription().map(Message::Processing),
            Screen::Results(_) | Screen::About(_) => Subscription::none(),
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        self.theme.clone()
    }
}

/// Filter from the configured directives, or `info` when they do not parse
fn configured_filter(directives: &str) -> (EnvFilter, Option<ParseError>) {
    match EnvFilter::try_new(format!("{},{}", directives, QUIET_DEPENDENCIES)) {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new(format!("info,{}", QUIET_DEPENDENCIES)), Some(err)),
    }
}

/// `RUST_LOG` wins over the config. Returns the config's parse error, if any.
fn init_logging(default_filter: &str) -> Option<ParseError> {
    let (filter, rejected) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, None),
        Err(_) => configured_filter(default_filter),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
    rejected
}

fn main() -> iced::Result {
    // Logging needs the config, so a config error is reported right after
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };
    if let Some(err) = init_logging(&config.log_filter) {
        warn!("⚠️  Invalid log_filter {:?}, using info: {}", config.log_filter, err);
    }
    if let Some(err) = config_error {
        warn!("⚠️  Using default settings: {}", err);
    }

    // Optional start page, e.g. `bridal-style /upload`
    let start = match std::env::args().nth(1) {
        Some(path) => Route::from_path(&path).unwrap_or_else(|| {
            warn!("⚠️  Unknown page {}, opening the landing page", path);
            Route::Landing
        }),
        None => Route::Landing,
    };

    iced::application(BridalStyle::title, BridalStyle::update, BridalStyle::view)
        .theme(BridalStyle::theme)
        .subscription(BridalStyle::subscription)
        .window_size((1280.0, 900.0))
        .centered()
        .run_with(move || BridalStyle::new(config, start))
}

#[cfg(test)]
mod tests {
    use super::*;
    use state::session::ImageSlot;

    fn app() -> BridalStyle {
        BridalStyle::new(AppConfig::default(), Route::Landing).0
    }

    #[test]
    fn test_starts_on_landing() {
        let app = app();
        assert_eq!(app.route, Route::Landing);
        assert!(matches!(app.screen, Screen::Landing(_)));
        assert!(app.title().starts_with("BridalAI"));
    }

    #[test]
    fn test_bad_log_filter_falls_back_to_info() {
        let (_, rejected) = configured_filter("bridal_style=loud");
        assert!(rejected.is_some());

        let (filter, rejected) = configured_filter("debug,bridal_style=trace");
        assert!(rejected.is_none());
        assert!(filter.to_string().contains("bridal_style=trace"));
    }

    #[test]
    fn test_navigation_swaps_screens() {
        let mut app = app();
        let _ = app.update(Message::Navigate(Route::About));
        assert!(matches!(app.screen, Screen::About(_)));

        let _ = app.update(Message::About(about::Message::Navigate(Route::Upload)));
        assert_eq!(app.route, Route::Upload);
        assert!(matches!(app.screen, Screen::Upload(_)));
    }

    #[test]
    fn test_each_processing_visit_is_a_new_run() {
        let mut app = app();
        let _ = app.update(Message::Navigate(Route::Processing));
        let _ = app.update(Message::Navigate(Route::Upload));
        let _ = app.update(Message::Navigate(Route::Processing));
        assert_eq!(app.next_run, 2);

        // A tick from the first visit does nothing
        let _ = app.update(Message::Processing(processing::Message::Timeline(
            1,
            state::sequencer::SequencerEvent::Finished,
        )));
        assert_eq!(app.route, Route::Processing);
    }

    #[test]
    fn test_messages_for_other_screens_are_dropped() {
        let mut app = app();
        let _ = app.update(Message::Results(results::Message::Navigate(Route::About)));
        assert_eq!(app.route, Route::Landing);
    }

    #[test]
    fn test_results_read_the_shared_slot() {
        let mut app = app();
        app.store
            .put(photo::data_url::encode("image/png", &[1, 2, 3]));
        let _ = app.update(Message::Navigate(Route::Results));

        let Screen::Results(results) = &app.screen else {
            panic!("expected the results screen");
        };
        assert!(results.has_photo());
    }
}
