/// A single icon rendition: edge length, output filename, and padding ratio.
///
/// `pad_ratio` is the fraction of the edge reserved as transparent margin on
/// each side, so the content fits within `size * (1 - 2 * pad_ratio)` pixels.
/// Maskable PWA icons use 20% so OS-level masks can crop without clipping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconSpec {
    pub size: u32,
    pub name: &'static str,
    pub pad_ratio: f64,
}

/// The fixed PNG renditions, rendered in this order. Together with the ICO
/// they make up the nine-rendition icon set.
pub const ICON_SPECS: [IconSpec; 8] = [
    // PWA app icons
    IconSpec { size: 192, name: "icon-192x192.png", pad_ratio: 0.0 },
    IconSpec { size: 512, name: "icon-512x512.png", pad_ratio: 0.0 },
    // Maskable variants with a 20% safe zone
    IconSpec { size: 192, name: "maskable-icon-192x192.png", pad_ratio: 0.20 },
    IconSpec { size: 512, name: "maskable-icon-512x512.png", pad_ratio: 0.20 },
    // Apple touch icon (iOS)
    IconSpec { size: 180, name: "apple-touch-icon.png", pad_ratio: 0.0 },
    // PNG favicons
    IconSpec { size: 16, name: "favicon-16x16.png", pad_ratio: 0.0 },
    IconSpec { size: 32, name: "favicon-32x32.png", pad_ratio: 0.0 },
    IconSpec { size: 48, name: "favicon-48x48.png", pad_ratio: 0.0 },
];

/// Bitmap sizes embedded in the multi-resolution ICO container.
pub const ICO_SIZES: [u32; 4] = [16, 32, 48, 64];

/// The ICO entries are generated from a base downsampled to fit this bound.
pub const ICO_BASE_BOUND: u32 = 256;

pub const ICO_NAME: &str = "favicon.ico";
pub const MANIFEST_NAME: &str = "manifest.webmanifest";
