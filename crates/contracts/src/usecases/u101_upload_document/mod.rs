pub mod response;
pub mod status;

pub use response::{UploadErrorBody, UploadResponse};
pub use status::{LeaseJobStatus, LeaseStatusResponse};
