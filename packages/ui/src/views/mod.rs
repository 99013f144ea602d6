mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod dashboard;
pub use dashboard::DashboardView;

mod write;
pub use write::WriteView;

mod read;
pub use read::ReadView;

mod summary;
pub use summary::SummaryView;

mod calendar;
pub use calendar::CalendarView;
