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
//! Browser binding for the image/text slider.
//! This crate resolves slider markup into element handles, wires DOM events and gloo
//! timers into [`slider_core::SliderController`], and exports the `ImageTextSlider`
//! constructor to page scripts.

pub mod logic;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod element;
#[cfg(target_arch = "wasm32")]
mod exports;
#[cfg(target_arch = "wasm32")]
mod instance;
#[cfg(target_arch = "wasm32")]
mod timers;

#[cfg(target_arch = "wasm32")]
pub use exports::{ImageTextSlider, SliderHost, register_slider_elements};
