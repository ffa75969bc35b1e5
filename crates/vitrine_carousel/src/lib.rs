//! Vitrine Carousel
//!
//! Headless viewport interaction engine for a scroll-snapping media strip.
//!
//! # Components
//!
//! - **Asset source**: resolves store entries into image/video descriptors
//! - **Viewport**: items, active index, measured item geometry
//! - **Scroll-sync**: debounced reconciliation of the active index with the
//!   scroll offset
//! - **Navigation**: indicator activation to programmatic scroll
//! - **Drag momentum**: pointer drag with a decaying fling on release
//!
//! # Example
//!
//! ```
//! use vitrine_carousel::{Carousel, CarouselConfig, MediaDescriptor};
//! use vitrine_core::Widget;
//!
//! let items = (0..5)
//!     .map(|i| MediaDescriptor::image(format!("https://cdn.example/{i}.webp")))
//!     .collect();
//! let mut carousel = Carousel::new(items, CarouselConfig::immediate());
//! carousel.on_layout(300.0, 0.0);
//!
//! assert_eq!(carousel.navigate(3, 0.0), Ok(948.0));
//! carousel.tick(100.0);
//! assert_eq!(carousel.active_index(), 3);
//! ```

pub mod asset;
pub mod carousel;
pub mod config;
pub mod drag;
pub mod error;
pub mod navigation;
pub mod surface;
pub mod sync;
pub mod viewport;

pub use asset::{Catalog, MediaDescriptor, MediaKind, StoreEntry};
pub use carousel::{Carousel, PresentationEvent};
pub use config::CarouselConfig;
pub use drag::{DragEngine, DragPhase, Release};
pub use error::{AssetError, CarouselError, Result};
pub use surface::ScrollSurface;
pub use sync::{ActiveChange, ScrollSync, SyncTimer};
pub use viewport::{Item, ItemExtent, Viewport};
