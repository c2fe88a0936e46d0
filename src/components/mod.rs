//! UI Components
//!
//! Entity pages and the small pieces they share.

mod department_list;
mod detail_lookup;
mod job_detail;
mod job_history_detail;
mod location_list;
mod nav_bar;
mod search_bar;
mod task_list;

pub use department_list::DepartmentList;
pub use detail_lookup::DetailLookup;
pub use job_detail::JobDetailPage;
pub use job_history_detail::JobHistoryDetailPage;
pub use location_list::LocationList;
pub use nav_bar::NavBar;
pub use search_bar::{ListFooter, PageSizeSelect, SearchBar, DEFAULT_PAGE_SIZE};
pub use task_list::TaskList;
