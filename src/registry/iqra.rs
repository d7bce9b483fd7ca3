//! Iqra primer pagination
//!
//! The six Iqra volumes are numbered independently; an absolute page is the
//! page count of every earlier volume plus the page within the volume.

use super::types::{
    IqraLocationEntry, RegistryError, Result, DEFAULT_IQRA_VOLUME_PAGES, IQRA_VOLUME_COUNT,
};

/// Fixed six-volume Iqra table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IqraTable {
    volumes: [IqraLocationEntry; IQRA_VOLUME_COUNT],
}

impl Default for IqraTable {
    fn default() -> Self {
        Self::new(DEFAULT_IQRA_VOLUME_PAGES)
    }
}

impl IqraTable {
    /// Create a table from per-volume page counts (volume 1 first)
    pub fn new(pages: [u32; IQRA_VOLUME_COUNT]) -> Self {
        let mut volume = 0;
        let volumes = pages.map(|pages_in_volume| {
            volume += 1;
            IqraLocationEntry {
                volume,
                pages_in_volume,
            }
        });
        Self { volumes }
    }

    /// Table rows in volume order
    pub fn volumes(&self) -> &[IqraLocationEntry] {
        &self.volumes
    }

    /// Pages across the whole curriculum, `None` when the sum overflows `u32`
    pub fn total_pages(&self) -> Option<u32> {
        sum_pages(&self.volumes)
    }

    /// Absolute page of `page` within `volume`.
    ///
    /// Only the volume is range-checked; a page past the end of its volume is
    /// accepted as printed on the form.
    pub fn absolute_page(&self, volume: u32, page: u32) -> Result<u32> {
        if volume == 0 || volume as usize > IQRA_VOLUME_COUNT {
            return Err(RegistryError::IqraVolumeOutOfRange(volume));
        }
        if page == 0 {
            return Err(RegistryError::IqraPageOutOfRange(page));
        }

        let before = sum_pages(&self.volumes[..(volume as usize - 1)])
            .ok_or(RegistryError::IqraVolumeOutOfRange(volume))?;
        before
            .checked_add(page)
            .ok_or(RegistryError::IqraPageOutOfRange(page))
    }
}

fn sum_pages(volumes: &[IqraLocationEntry]) -> Option<u32> {
    volumes
        .iter()
        .try_fold(0u32, |acc, v| acc.checked_add(v.pages_in_volume))
}
