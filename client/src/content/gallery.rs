//! Gallery images and the looped strip sequence fed to the carousel.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

/// Number of back-to-back copies of the base set rendered in the strip.
pub const STRIP_REPEATS: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GalleryImage {
    pub src: &'static str,
    pub alt: &'static str,
}

pub const GALLERY_IMAGES: &[GalleryImage] = &[
    GalleryImage { src: "/assets/gallery/img1.jpg", alt: "Gallery Image 1" },
    GalleryImage { src: "/assets/gallery/img3.jpg", alt: "Gallery Image 2" },
    GalleryImage { src: "/assets/gallery/img4.jpg", alt: "Gallery Image 3" },
    GalleryImage { src: "/assets/gallery/img2.jpg", alt: "Gallery Image 4" },
    GalleryImage { src: "/assets/gallery/img5.jpg", alt: "Gallery Image 5" },
];

/// The base set concatenated with itself `STRIP_REPEATS` times, in order.
///
/// One full pass through the base set is exactly one third of the strip, which
/// is the distance at which the carousel wraps its offset.
#[must_use]
pub fn looped_sequence(images: &[GalleryImage]) -> Vec<GalleryImage> {
    images.iter().copied().cycle().take(images.len() * STRIP_REPEATS).collect()
}
