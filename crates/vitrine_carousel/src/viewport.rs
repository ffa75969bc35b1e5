//! Viewport model
//!
//! Owns the carousel items, the active index and the item geometry. Items are
//! fixed for the lifetime of the widget; geometry is measured once from the
//! first rendered item and never changes afterwards.

use crate::asset::{MediaDescriptor, MediaKind};

/// One carousel slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    index: usize,
    kind: MediaKind,
    source_url: String,
}

impl Item {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }
}

/// Measured size of one item plus the gap to the next
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemExtent {
    pub width: f32,
    pub gap: f32,
}

impl ItemExtent {
    /// Returns None unless `width` and the stride are positive
    pub fn new(width: f32, gap: f32) -> Option<Self> {
        (width > 0.0 && width + gap > 0.0 && width.is_finite() && gap.is_finite())
            .then_some(Self { width, gap })
    }

    /// Distance between consecutive snap points
    pub fn stride(&self) -> f32 {
        self.width + self.gap
    }

    /// Scroll offset that brings item `index` into place
    pub fn offset_of(&self, index: usize) -> f32 {
        index as f32 * self.stride()
    }

    /// Nearest item to `offset`, clamped to `[0, len - 1]`
    pub fn nearest_index(&self, offset: f32, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let raw = (offset / self.stride()).round();
        if raw <= 0.0 {
            0
        } else {
            (raw as usize).min(len - 1)
        }
    }
}

/// Items, active index and geometry
#[derive(Debug, Clone)]
pub struct Viewport {
    items: Vec<Item>,
    active_index: usize,
    extent: Option<ItemExtent>,
}

impl Viewport {
    /// Build the item list from resolved descriptors, preserving order
    pub fn new(descriptors: Vec<MediaDescriptor>) -> Self {
        let items = descriptors
            .into_iter()
            .enumerate()
            .map(|(index, d)| Item {
                index,
                kind: d.kind,
                source_url: d.url,
            })
            .collect();
        Self {
            items,
            active_index: 0,
            extent: None,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Set the active index, clamped to the item range.
    ///
    /// Returns the previous index if the value changed. Only the scroll-sync
    /// engine calls this.
    pub(crate) fn set_active_index(&mut self, index: usize) -> Option<usize> {
        if self.items.is_empty() {
            return None;
        }
        let index = index.min(self.items.len() - 1);
        if index == self.active_index {
            return None;
        }
        let previous = std::mem::replace(&mut self.active_index, index);
        Some(previous)
    }

    /// Geometry, once measured
    pub fn measured_extent(&self) -> Option<ItemExtent> {
        self.extent
    }

    /// Record a measurement of the first rendered item.
    ///
    /// The first successful measurement is kept for the widget's lifetime;
    /// later calls return it unchanged.
    pub fn measure(&mut self, width: f32, gap: f32) -> Option<ItemExtent> {
        if let Some(extent) = self.extent {
            tracing::trace!(width, "geometry already measured, ignoring");
            return Some(extent);
        }
        self.extent = ItemExtent::new(width, gap);
        if let Some(extent) = self.extent {
            tracing::debug!(width = extent.width, gap = extent.gap, "item geometry measured");
        }
        self.extent
    }

    /// Largest reachable scroll offset: the last item's snap point
    pub fn max_offset(&self) -> f32 {
        match self.extent {
            Some(extent) if !self.items.is_empty() => extent.offset_of(self.items.len() - 1),
            _ => 0.0,
        }
    }

    /// Nearest item to `offset`, or None before measurement
    pub fn nearest_index(&self, offset: f32) -> Option<usize> {
        self.extent
            .map(|extent| extent.nearest_index(offset, self.items.len()))
    }
}
