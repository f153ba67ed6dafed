// crates/fpmap-core/src/format/pbm.rs
//
// Dense bitmap format (binary PBM):
//   P4\n
//   # <HEXMODEL> <crop> -- <tool> v<version>\n     (optional)
//   <width> <height>\n
//   packed rows, MSB first, ceil(width/8) bytes per row
// A set bit is a focus pixel. Pass structure is not encoded in the bits;
// the multi-file convention supplies it (one file, one pass).

use std::fs;

use crate::camera::model_is_valid;
use crate::error::{FpmError, Result};
use crate::format::{filename, recover_meta, MapMeta, MetaOverrides};
use crate::map::PixelMap;
use crate::TOOL_TAG;

/// Take the next `\n`-terminated line as str, advancing `pos` past it.
fn take_line<'a>(bytes: &'a [u8], pos: &mut usize, path: &str) -> Result<&'a str> {
    if *pos >= bytes.len() {
        return Err(FpmError::TruncatedRead(path.to_string()));
    }
    let end = bytes[*pos..]
        .iter()
        .position(|&b| b == b'\n')
        .map(|i| *pos + i)
        .unwrap_or(bytes.len());
    let line = std::str::from_utf8(&bytes[*pos..end])
        .map_err(|_| FpmError::InvalidFormat(path.to_string()))?;
    *pos = (end + 1).min(bytes.len());
    Ok(line)
}

/// `# <HEXMODEL> <crop> ...` from the comment line.
fn parse_comment(line: &str) -> Option<(u32, u32)> {
    let mut tok = line.trim_start_matches('#').split_whitespace();
    let model = u32::from_str_radix(tok.next()?, 16).ok()?;
    let crop = tok.next()?.parse().ok()?;
    Some((model, crop))
}

fn parse_dims(line: &str) -> Option<(u32, u32)> {
    let mut tok = line.split_whitespace();
    let w = tok.next()?.parse().ok()?;
    let h = tok.next()?.parse().ok()?;
    Some((w, h))
}

/// Metadata fallback chain: full comment line, comment line with resolution
/// only, bare resolution header, then filename/options. A comment-supplied
/// model with invalid sentinel bits is replaced from filename/options where
/// possible but is not fatal on its own.
fn resolve_meta(
    path: &str,
    comment: Option<&str>,
    dims: Option<(u32, u32)>,
    overrides: &MetaOverrides,
) -> Result<MapMeta> {
    let Some((width, height)) = dims else {
        return recover_meta(path, overrides);
    };

    if let Some((model, crop)) = comment.and_then(parse_comment) {
        if model_is_valid(model) {
            return Ok(MapMeta {
                model,
                width,
                height,
                crop,
            });
        }
        let scanned = filename::scan(path);
        let model = overrides
            .camera
            .map(|c| c.model())
            .or(scanned.model)
            .unwrap_or(model);
        let crop = overrides.mode.map(|(_, g)| g.crop).unwrap_or(crop);
        return Ok(MapMeta {
            model,
            width,
            height,
            crop,
        });
    }

    // Resolution came from the header; the camera has to come from the
    // options or the file name.
    let scanned = filename::scan(path);
    let model = overrides
        .camera
        .map(|c| c.model())
        .or(scanned.model)
        .ok_or_else(|| FpmError::MapUnresolvable(path.to_string()))?;
    let crop = overrides.mode.map(|(_, g)| g.crop).unwrap_or(0);
    Ok(MapMeta {
        model,
        width,
        height,
        crop,
    })
}

/// Decode one bitmap file into `map` (appending; the caller closes the
/// pass). Returns the metadata recovered for this file.
pub fn load_into(map: &mut PixelMap, path: &str, overrides: &MetaOverrides) -> Result<MapMeta> {
    let bytes = fs::read(path).map_err(|e| FpmError::from_io(path, e))?;

    let mut pos = 0;
    if take_line(&bytes, &mut pos, path)?.trim() != "P4" {
        return Err(FpmError::InvalidFormat(path.to_string()));
    }

    let mut line = take_line(&bytes, &mut pos, path)?;
    let comment = if line.starts_with('#') {
        let c = line;
        line = take_line(&bytes, &mut pos, path)?;
        Some(c)
    } else {
        None
    };
    let dims = parse_dims(line);

    let meta = resolve_meta(path, comment, dims, overrides)?;

    let stride = (meta.width as usize + 7) / 8;
    let expected = stride * meta.height as usize;
    let data = &bytes[pos..];
    if data.len() < expected {
        return Err(FpmError::TruncatedRead(path.to_string()));
    }

    for y in 0..meta.height {
        let row = &data[y as usize * stride..][..stride];
        for x in 0..meta.width {
            if (row[x as usize / 8] >> (7 - x as usize % 8)) & 1 == 1 {
                map.push(x, y);
            }
        }
    }

    Ok(meta)
}

/// Encode one file: the whole map when `pass` is `None`, otherwise only the
/// given 1-based pass. Pixels outside the recorded geometry are dropped.
pub fn save(map: &PixelMap, meta: &MapMeta, path: &str, pass: Option<usize>) -> Result<()> {
    let header = format!(
        "P4\n# {:X} {} -- {}\n{} {}\n",
        meta.model, meta.crop, TOOL_TAG, meta.width, meta.height,
    );

    let stride = (meta.width as usize + 7) / 8;
    let mut img = vec![0u8; stride * meta.height as usize];

    let pixels = match pass {
        Some(n) => map.pass_pixels(n - 1),
        None => map.pixels(),
    };
    for p in pixels {
        if p.x < meta.width && p.y < meta.height {
            img[p.y as usize * stride + p.x as usize / 8] |= 1 << (7 - p.x as usize % 8);
        }
    }

    let mut out = Vec::with_capacity(header.len() + img.len());
    out.extend_from_slice(header.as_bytes());
    out.extend_from_slice(&img);
    fs::write(path, out).map_err(|e| FpmError::from_io(path, e))
}
