//! # OrbitKit Web
//!
//! Mounts an orbit diagram into a browser page. The page supplies the
//! viewport, canvas, hub, detail and control elements, marked with
//! `data-orbit-*` attributes; this crate creates the node buttons and lane
//! paths, wires pointer, touch, wheel and resize events to an
//! [`OrbitController`](orbitkit_diagram::OrbitController) and keeps the DOM in
//! sync with it.
//!
//! ```html
//! <section id="features">
//!   <div data-orbit-viewport>
//!     <div data-orbit-canvas>
//!       <div data-orbit-hub>...</div>
//!     </div>
//!   </div>
//!   <h3 data-orbit-title></h3>
//!   <p data-orbit-description></p>
//!   <button data-orbit-zoom-in>+</button>
//!   <button data-orbit-zoom-out>-</button>
//!   <button data-orbit-fit>Fit</button>
//! </section>
//! ```

pub mod elements;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;

#[cfg(target_arch = "wasm32")]
pub use dom::DomSurface;
#[cfg(target_arch = "wasm32")]
pub use mount::mount_orbit;

#[cfg(target_arch = "wasm32")]
mod mount;
