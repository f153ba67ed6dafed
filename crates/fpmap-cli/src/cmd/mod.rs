// crates/fpmap-cli/src/cmd/mod.rs

pub mod convert;
pub mod generate;

use anyhow::Context;
use fpmap_core::format::{self, MapFormat, MapMeta, MetaOverrides, SaveOptions};
use fpmap_core::mode::mode_from_keyword;
use fpmap_core::{Camera, PixelMap};

use crate::Cli;

/// Resolve the explicit -c/-m selections up front so an unknown name or
/// keyword fails before any file is touched.
pub fn overrides_from(cli: &Cli) -> anyhow::Result<MetaOverrides> {
    let camera = cli
        .camera_name
        .as_deref()
        .map(Camera::from_name)
        .transpose()?;
    let mode = cli
        .video_mode
        .as_deref()
        .map(mode_from_keyword)
        .transpose()?;
    Ok(MetaOverrides { camera, mode })
}

/// Save to -o, or to the auto-generated name in `default_format`, and
/// report what was written.
pub fn save_map(
    cli: &Cli,
    map: &PixelMap,
    meta: &MapMeta,
    default_format: MapFormat,
) -> anyhow::Result<()> {
    let path = cli
        .output
        .clone()
        .unwrap_or_else(|| meta.default_file_name(default_format));
    let opts = SaveOptions {
        no_header: cli.no_header,
        one_pass_pbm: cli.one_pass_pbm,
    };

    let saved = format::save(map, meta, &path, &opts).with_context(|| format!("save map: {path}"))?;

    if !cli.quiet {
        for file in &saved {
            match file.pass {
                Some(pass) => println!(
                    "{} pixels saved as pass {} focus pixel map '{}'",
                    file.pixel_count, pass, file.path
                ),
                None => println!(
                    "{} pixels saved as {} pass focus pixel map '{}'",
                    file.pixel_count,
                    map.pass_count().max(1),
                    file.path
                ),
            }
        }
    }
    Ok(())
}
