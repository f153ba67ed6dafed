pub mod camera;
pub mod error;
pub mod format;
pub mod map;
pub mod mlv;
pub mod mode;
pub mod pattern;

pub use crate::camera::{Camera, PatternFamily};
pub use crate::error::{FpmError, Result};
pub use crate::map::{PixelCoord, PixelMap};

/// Tool tag written into map file headers.
pub const TOOL_TAG: &str = concat!("fpmap v", env!("CARGO_PKG_VERSION"));
