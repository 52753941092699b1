pub mod dashboard;
pub mod edit_orphanage;
pub mod not_found;

pub use dashboard::DashboardPage;
pub use edit_orphanage::EditOrphanagePage;
pub use not_found::NotFoundPage;
