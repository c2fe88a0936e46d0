//! In-app Routes
//!
//! Which page the main column shows. Names match the state names used for
//! back-navigation labels.

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Departments,
    Locations,
    Tasks,
    JobDetail(u64),
    JobHistoryDetail(u64),
}

impl Route {
    pub fn name(&self) -> &'static str {
        match self {
            Route::Departments => "department",
            Route::Locations => "location",
            Route::Tasks => "task",
            Route::JobDetail(_) => "job-detail",
            Route::JobHistoryDetail(_) => "job-history-detail",
        }
    }

    /// Entries shown in the tab bar
    pub fn tabs() -> [(Route, &'static str); 3] {
        [
            (Route::Departments, "Departments"),
            (Route::Locations, "Locations"),
            (Route::Tasks, "Tasks"),
        ]
    }
}
