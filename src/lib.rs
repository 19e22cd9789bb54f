//! This crate provides the size value types exchanged between the graphics
//! layers and their JSON messages.
//!
//! - [`IntSize`]: width and height in whole pixels, readable from a JSON object.
//! - [`FloatSize`]: width and height in fractional pixels, convertible to
//!   [`IntSize`] by rounding.
//!
//! ```
//! use gfx_size::{FloatSize, IntSize};
//!
//! let size = IntSize::from_json_str(r#"{"width": 320, "height": 240}"#)?;
//! assert_eq!(size.scale(1.5).to_string(), "(480,360)");
//! assert_eq!(IntSize::from(FloatSize::new(319.5, 240.2)), size);
//! # Ok::<(), gfx_size::SizeError>(())
//! ```

pub mod size;

pub use size::{FloatSize, IntSize, SizeError};
