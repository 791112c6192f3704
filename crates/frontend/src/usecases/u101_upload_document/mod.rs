pub mod api;
pub mod poller;
pub mod view;

pub use view::UploadWidget;
