//! Gantry View SDK
//!
//! Types and builder APIs for dashboard views. A view crate depends on this
//! crate, builds a [`ViewDescriptor`] naming its route and menu contributions,
//! and hands it to the kernel's composition step. Views never talk to the
//! kernel directly.

pub mod render;
pub mod view;

pub mod prelude {
    pub use crate::render;
    pub use crate::view::*;
}
