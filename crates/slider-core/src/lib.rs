#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
//! DOM-free core of the image/text slider widget.
//!
//! The controller, paging math, responsive layout rules and configuration live here so
//! they can be exercised on the host. The browser binding in `slider-ui` supplies a
//! [`SliderSurface`] backed by real elements and a [`TimerDriver`] backed by gloo timers.

pub mod config;
pub mod controller;
pub mod defaults;
pub mod error;
pub mod layout;
pub mod pager;
pub mod registry;
pub mod selectors;
pub mod surface;

pub use config::{DomIds, SliderConfig};
pub use controller::{SliderController, SliderSnapshot};
pub use error::{Result, SliderError};
pub use layout::SlidesPerView;
pub use pager::Pager;
pub use registry::SliderRegistry;
pub use surface::{SliderSurface, TimerDriver};
