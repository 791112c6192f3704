pub mod info_view;
pub mod view;

pub use info_view::AdditionalInfoModal;
pub use view::LocationModal;
