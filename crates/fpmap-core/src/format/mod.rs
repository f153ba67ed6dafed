// crates/fpmap-core/src/format/mod.rs
//
// The two interchangeable on-disk representations of a pixel map, selected
// by output file extension, plus the shared metadata recovery chain.

pub mod filename;
pub mod fpm;
pub mod pbm;

use std::path::Path;

use crate::camera::Camera;
use crate::error::{FpmError, Result};
use crate::map::PixelMap;
use crate::mode::{VideoGeometry, VideoMode};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MapFormat {
    /// Sparse text: optional `#FPM` header, one `x y` pair per line.
    Fpm,
    /// Dense bitmap: P4 signature, packed MSB-first rows.
    Pbm,
}

impl MapFormat {
    pub fn extension(self) -> &'static str {
        match self {
            MapFormat::Fpm => "fpm",
            MapFormat::Pbm => "pbm",
        }
    }

    /// Conversion target when the caller names no output file.
    pub fn opposite(self) -> Self {
        match self {
            MapFormat::Fpm => MapFormat::Pbm,
            MapFormat::Pbm => MapFormat::Fpm,
        }
    }
}

/// Pick the format from the file extension, case-insensitive. Anything
/// else is fatal.
pub fn format_for(path: &str) -> Result<MapFormat> {
    let ext = Path::new(path).extension().and_then(|e| e.to_str());
    match ext {
        Some(e) if e.eq_ignore_ascii_case("fpm") => Ok(MapFormat::Fpm),
        Some(e) if e.eq_ignore_ascii_case("pbm") => Ok(MapFormat::Pbm),
        Some(e) => Err(FpmError::InvalidExtension(format!(".{e}"))),
        None => Err(FpmError::InvalidExtension(path.to_string())),
    }
}

/// Camera/geometry record carried by map headers and file names.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MapMeta {
    pub model: u32,
    pub width: u32,
    pub height: u32,
    pub crop: u32,
}

impl MapMeta {
    /// Auto-generated file name, `<hexmodel>_<w>x<h>.<ext>`.
    pub fn default_file_name(&self, format: MapFormat) -> String {
        format!(
            "{:x}_{}x{}.{}",
            self.model,
            self.width,
            self.height,
            format.extension()
        )
    }
}

/// Explicit camera/mode selections that take precedence over filename
/// fields during metadata recovery.
#[derive(Copy, Clone, Debug, Default)]
pub struct MetaOverrides {
    pub camera: Option<Camera>,
    pub mode: Option<(VideoMode, VideoGeometry)>,
}

/// Full recovery chain when no usable in-band metadata exists: explicit
/// options first, then the filename convention. Failing both is terminal.
pub(crate) fn recover_meta(path: &str, overrides: &MetaOverrides) -> Result<MapMeta> {
    let scanned = filename::scan(path);

    let model = overrides
        .camera
        .map(|c| c.model())
        .or(scanned.model)
        .ok_or_else(|| FpmError::MapUnresolvable(path.to_string()))?;

    let (width, height, crop) = if let Some((_, g)) = overrides.mode {
        (g.width, g.height, g.crop)
    } else {
        match (scanned.width, scanned.height) {
            (Some(w), Some(h)) => (w, h, 0),
            _ => return Err(FpmError::MapUnresolvable(path.to_string())),
        }
    };

    Ok(MapMeta {
        model,
        width,
        height,
        crop,
    })
}

#[derive(Clone, Debug)]
pub struct LoadedMap {
    pub map: PixelMap,
    pub meta: MapMeta,
    pub format: MapFormat,
}

/// Load one map from `paths`. A sparse map is always a single file;
/// bitmap inputs may be several files, each contributing one pass.
pub fn load(paths: &[String], overrides: &MetaOverrides) -> Result<LoadedMap> {
    let Some((first, rest)) = paths.split_first() else {
        return Err(FpmError::FileNotFound(String::new()));
    };

    match format_for(first)? {
        MapFormat::Fpm => {
            let (map, meta) = fpm::load(first, overrides)?;
            Ok(LoadedMap {
                map,
                meta,
                format: MapFormat::Fpm,
            })
        }
        MapFormat::Pbm => {
            let mut map = PixelMap::new();
            let meta = pbm::load_into(&mut map, first, overrides)?;
            map.end_pass();
            for path in rest {
                pbm::load_into(&mut map, path, overrides)?;
                map.end_pass();
            }
            Ok(LoadedMap {
                map,
                meta,
                format: MapFormat::Pbm,
            })
        }
    }
}

#[derive(Copy, Clone, Debug, Default)]
pub struct SaveOptions {
    /// Omit the `#FPM` header line from sparse output.
    pub no_header: bool,
    /// Collapse a multi-pass map into a single bitmap file.
    pub one_pass_pbm: bool,
}

/// One output file produced by `save`.
#[derive(Clone, Debug)]
pub struct SavedFile {
    pub path: String,
    pub pixel_count: usize,
    /// 1-based pass index, or `None` when the file holds every pass.
    pub pass: Option<usize>,
}

/// Persist the map at `path`, format chosen by extension. A multi-pass map
/// saved as bitmap fans out into one `.passN.pbm` file per pass unless
/// single-pass output was requested.
pub fn save(
    map: &PixelMap,
    meta: &MapMeta,
    path: &str,
    opts: &SaveOptions,
) -> Result<Vec<SavedFile>> {
    match format_for(path)? {
        MapFormat::Fpm => {
            fpm::save(map, meta, path, opts.no_header)?;
            Ok(vec![SavedFile {
                path: path.to_string(),
                pixel_count: map.len(),
                pass: None,
            }])
        }
        MapFormat::Pbm => {
            if map.pass_count() <= 1 || opts.one_pass_pbm {
                pbm::save(map, meta, path, None)?;
                return Ok(vec![SavedFile {
                    path: path.to_string(),
                    pixel_count: map.len(),
                    pass: None,
                }]);
            }

            let stem = match path.rfind('.') {
                Some(dot) => &path[..dot],
                None => path,
            };
            let mut saved = Vec::with_capacity(map.pass_count());
            for pass in 1..=map.pass_count() {
                let pass_path = format!("{stem}.pass{pass}.pbm");
                pbm::save(map, meta, &pass_path, Some(pass))?;
                saved.push(SavedFile {
                    path: pass_path,
                    pixel_count: map.pass_pixels(pass - 1).len(),
                    pass: Some(pass),
                });
            }
            Ok(saved)
        }
    }
}
