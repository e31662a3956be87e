use image::{imageops, RgbaImage};
use tracing::{debug, warn};

use crate::config::ScaleFilter;
use crate::geometry::PixelRect;
use crate::image_source::SourceImage;
use crate::transform::VisibleRegion;

/// A cropped and resampled copy of the visible part of the image.
#[derive(Clone, Debug)]
pub struct ScaledRegion {
    /// Image-space rectangle the pixels were taken from.
    pub source: PixelRect,
    /// Window-space rectangle the pixels are drawn into.
    pub dest: PixelRect,
    /// Exactly `dest.width x dest.height` pixels.
    pub pixels: RgbaImage,
}

/// Holds at most one [`ScaledRegion`] plus a dirty flag.
///
/// The flag is raised by any change to zoom, offset, window size or a reset,
/// and cleared only once a region matching the current viewport is installed.
#[derive(Debug)]
pub struct ScaledRegionCache {
    region: Option<ScaledRegion>,
    dirty: bool,
    filter: ScaleFilter,
    rebuilds: u64,
}

impl ScaledRegionCache {
    pub fn new(filter: ScaleFilter) -> Self {
        Self {
            region: None,
            dirty: true,
            filter,
            rebuilds: 0,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn region(&self) -> Option<&ScaledRegion> {
        self.region.as_ref()
    }

    /// Number of crop+resample passes performed so far.
    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }

    /// Bring the cache in line with the latest clip result.
    ///
    /// A clean cache is returned as-is. A dirty cache reuses its pixels when
    /// the crop and output size are unchanged (only the destination origin
    /// moved), and otherwise rebuilds. `None` leaves the cache dirty.
    pub fn update(
        &mut self,
        image: &SourceImage,
        visible: Option<VisibleRegion>,
    ) -> Option<&ScaledRegion> {
        if !self.dirty {
            return self.region.as_ref();
        }
        let visible = visible?;

        let reusable = self.region.as_ref().is_some_and(|r| {
            r.source == visible.source
                && r.dest.width == visible.dest.width
                && r.dest.height == visible.dest.height
        });

        if reusable {
            if let Some(region) = self.region.as_mut() {
                region.dest = visible.dest;
            }
            self.dirty = false;
            return self.region.as_ref();
        }

        self.rebuild(image, visible.source, visible.dest)
    }

    /// Crop `source` out of the image and resample it to `dest`'s size.
    ///
    /// The previous region is released before the new one is built. Returns
    /// `None` without touching the dirty flag if the rectangles are invalid.
    pub fn rebuild(
        &mut self,
        image: &SourceImage,
        source: PixelRect,
        dest: PixelRect,
    ) -> Option<&ScaledRegion> {
        if !source.fits_within(image.width(), image.height()) || dest.is_empty() {
            warn!(?source, ?dest, "Skipping rebuild of out-of-bounds region");
            return None;
        }

        drop(self.region.take());

        let view = imageops::crop_imm(
            image.pixels(),
            source.x as u32,
            source.y as u32,
            source.width as u32,
            source.height as u32,
        );
        let (dest_w, dest_h) = (dest.width as u32, dest.height as u32);
        let cropped = view.to_image();
        let pixels = if cropped.dimensions() == (dest_w, dest_h) {
            cropped
        } else {
            imageops::resize(&cropped, dest_w, dest_h, self.filter.filter_type())
        };

        self.rebuilds += 1;
        debug!(
            ?source,
            dest_w,
            dest_h,
            rebuilds = self.rebuilds,
            "Rebuilt scaled region"
        );

        self.dirty = false;
        self.region = Some(ScaledRegion {
            source,
            dest,
            pixels,
        });
        self.region.as_ref()
    }
}
