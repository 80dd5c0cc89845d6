/// Screens the app can navigate to, named after their URL paths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Landing,
    Upload,
    Processing,
    Results,
    About,
}

impl Route {
    pub const ALL: [Route; 5] = [
        Route::Landing,
        Route::Upload,
        Route::Processing,
        Route::Results,
        Route::About,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Upload => "/upload",
            Route::Processing => "/processing",
            Route::Results => "/results",
            Route::About => "/about",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.path() == path)
    }
}
