pub mod upload_background;

pub use upload_background::{IUploadBackgroundUseCase, UploadBackgroundError, UploadBackgroundUseCase};
