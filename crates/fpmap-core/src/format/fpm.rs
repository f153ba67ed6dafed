// crates/fpmap-core/src/format/fpm.rs
//
// Sparse text format:
//   #FPM <HEXMODEL> <width> <height> <crop> <passes> -- <tool> v<version>
//   <x> \t <y>
//   ...
// The header is optional on read and suppressible on write. Pass starts are
// recovered on load by watching for a descending y.

use std::fs;

use crate::error::{FpmError, Result};
use crate::format::{recover_meta, MapMeta, MetaOverrides};
use crate::map::PixelMap;
use crate::TOOL_TAG;

fn parse_header(line: &str) -> Option<MapMeta> {
    let mut tok = line.split_whitespace();
    if tok.next() != Some("#FPM") {
        return None;
    }
    let model = u32::from_str_radix(tok.next()?, 16).ok()?;
    let width = tok.next()?.parse().ok()?;
    let height = tok.next()?.parse().ok()?;
    let crop = tok.next()?.parse().ok()?;
    // The pass count and tool tag that follow are informational only.
    Some(MapMeta {
        model,
        width,
        height,
        crop,
    })
}

pub fn load(path: &str, overrides: &MetaOverrides) -> Result<(PixelMap, MapMeta)> {
    let text = fs::read_to_string(path).map_err(|e| FpmError::from_io(path, e))?;

    let mut header = None;
    let mut map = PixelMap::new();
    let mut prev_y = 0u32;

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with('#') {
            if header.is_none() {
                header = parse_header(line);
            }
            continue;
        }

        let mut tok = line.split_whitespace();
        let (Some(xs), Some(ys)) = (tok.next(), tok.next()) else {
            return Err(FpmError::InvalidFormat(path.to_string()));
        };
        let (Ok(x), Ok(y)) = (xs.parse::<u32>(), ys.parse::<u32>()) else {
            return Err(FpmError::InvalidFormat(path.to_string()));
        };

        if y < prev_y {
            map.end_pass();
        }
        prev_y = y;
        map.push(x, y);
    }
    map.end_pass();

    let meta = match header {
        Some(m) => m,
        None => recover_meta(path, overrides)?,
    };

    Ok((map, meta))
}

pub fn save(map: &PixelMap, meta: &MapMeta, path: &str, no_header: bool) -> Result<()> {
    let mut out = String::new();
    if !no_header {
        out.push_str(&format!(
            "#FPM {:X} {} {} {} {} -- {}\n",
            meta.model,
            meta.width,
            meta.height,
            meta.crop,
            map.pass_count(),
            TOOL_TAG,
        ));
    }
    for p in map.pixels() {
        out.push_str(&format!("{} \t {}\n", p.x, p.y));
    }
    fs::write(path, out).map_err(|e| FpmError::from_io(path, e))
}
