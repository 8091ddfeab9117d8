/// Size and type limits for profile background uploads. Images and
/// videos carry different caps.
#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub max_image_bytes: u64,
    pub max_video_bytes: u64,
    pub upload_dir: String,
}

impl UploadPolicy {
    pub const DEFAULT_UPLOAD_DIR: &'static str = "./uploads";
    pub const IMAGE_MIME_TYPES: &'static [&'static str] =
        &["image/jpeg", "image/png", "image/webp"];
    pub const VIDEO_MIME_TYPES: &'static [&'static str] = &["video/mp4", "video/webm"];

    /// Load policy with `upload_dir` from env var, fallback to "./uploads".
    ///
    /// Env var name: `UPLOAD_DIR`
    pub fn from_env() -> Self {
        let upload_dir = std::env::var("UPLOAD_DIR")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_UPLOAD_DIR.to_string());

        Self::new(upload_dir)
    }

    pub fn new(upload_dir: String) -> Self {
        Self {
            max_image_bytes: 10 * 1024 * 1024,
            max_video_bytes: 50 * 1024 * 1024,
            upload_dir,
        }
    }

    /// Byte cap for a content type, or `None` when the type is not
    /// allowed at all.
    pub fn limit_for(&self, content_type: &str) -> Option<u64> {
        if Self::IMAGE_MIME_TYPES.contains(&content_type) {
            Some(self.max_image_bytes)
        } else if Self::VIDEO_MIME_TYPES.contains(&content_type) {
            Some(self.max_video_bytes)
        } else {
            None
        }
    }

    /// File extension stored on disk for an accepted content type.
    pub fn extension_for(content_type: &str) -> Option<&'static str> {
        match content_type {
            "image/jpeg" => Some("jpg"),
            "image/png" => Some("png"),
            "image/webp" => Some("webp"),
            "video/mp4" => Some("mp4"),
            "video/webm" => Some("webm"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn images_and_videos_get_different_caps() {
        let policy = UploadPolicy::new("/tmp".to_string());

        assert_eq!(policy.limit_for("image/png"), Some(10 * 1024 * 1024));
        assert_eq!(policy.limit_for("video/mp4"), Some(50 * 1024 * 1024));
    }

    #[test]
    fn unknown_types_are_not_allowed() {
        let policy = UploadPolicy::new("/tmp".to_string());

        assert_eq!(policy.limit_for("application/pdf"), None);
        assert_eq!(UploadPolicy::extension_for("application/pdf"), None);
    }
}
