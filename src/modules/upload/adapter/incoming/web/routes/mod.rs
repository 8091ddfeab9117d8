pub mod upload_background;
