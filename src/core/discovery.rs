pub const CONTAINER_SELECTOR: &str = ".psv-container";
pub const IMAGE_ATTRIBUTE: &str = "data-img";

/// Image reference for a container, or `None` when the attribute is missing
/// or blank (the "no image configured" placeholder markup).
#[inline]
pub fn image_source(attribute: Option<&str>) -> Option<&str> {
    attribute.map(str::trim).filter(|s| !s.is_empty())
}
