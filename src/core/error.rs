use thiserror::Error;

/// Failures that end with a visible notice inside the viewer container.
///
/// The payload carries the technical detail for the log; [`ViewerError::notice`]
/// is the fixed text shown to the reader of the page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewerError {
    #[error("viewer initialization failed: {0}")]
    Init(String),
    #[error("panorama image failed to load: {0}")]
    ImageLoad(String),
    #[error("panorama image is unusable: {0}")]
    InvalidImage(String),
}

impl ViewerError {
    pub fn notice(&self) -> &'static str {
        match self {
            ViewerError::Init(_) => "Failed to initialize the 360° viewer.",
            ViewerError::ImageLoad(_) | ViewerError::InvalidImage(_) => {
                "Failed to load the 360° image. Please check the image URL."
            }
        }
    }
}
