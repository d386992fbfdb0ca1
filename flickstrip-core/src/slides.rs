//! Slide descriptors used to populate a strip

/// One numbered slot in the strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    /// 1-based position shown in the number overlay.
    pub number: u32,
    /// Image URL; slides past the end of the image list have none.
    pub image: Option<String>,
}

/// Build `total` slides, pairing them with `images` in order.
///
/// An empty URL leaves its slide without an image. Numbering saturates at
/// `u32::MAX`.
pub fn build_slides<I>(total: usize, images: I) -> Vec<Slide>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut images = images.into_iter();
    (1..=total)
        .map(|number| Slide {
            number: u32::try_from(number).unwrap_or(u32::MAX),
            image: images
                .next()
                .map(Into::into)
                .filter(|url: &String| !url.is_empty()),
        })
        .collect()
}
