pub mod cards;
pub mod page;

pub use cards::SummaryCards;
pub use page::DashboardPage;
