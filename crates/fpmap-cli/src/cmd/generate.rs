// crates/fpmap-cli/src/cmd/generate.rs

use fpmap_core::format::{MapFormat, MapMeta};
use fpmap_core::mlv::{self, ScanOutcome};
use fpmap_core::mode::{self, ResolvedSource, Variant, VideoMode};
use fpmap_core::{pattern, FpmError, PixelMap};

use crate::cmd;
use crate::Cli;

/// No input file: generate purely from --camera-name and --video-mode.
pub fn run_explicit(cli: &Cli) -> anyhow::Result<()> {
    let (Some(camera_name), Some(video_mode)) = (&cli.camera_name, &cli.video_mode) else {
        anyhow::bail!("missing required options: give an input file, or both --camera-name and --video-mode");
    };

    let resolved = mode::resolve_explicit(camera_name, video_mode, cli.unified)?;

    if !cli.quiet {
        println!("Using command line option values");
        print_source(&resolved);
    }
    build_and_save(cli, &resolved)
}

/// Derive everything from the container's metadata blocks. The only option
/// honored against a valid MLV is '-m croprec'.
pub fn run_mlv(cli: &Cli, path: &str) -> anyhow::Result<()> {
    if !cli.quiet {
        println!("Parsing file '{path}'");
    }

    let meta = match mlv::scan_metadata(path)? {
        ScanOutcome::Complete(meta) => meta,
        ScanOutcome::Incomplete => return Err(FpmError::MissingBlocks.into()),
    };

    let resolved = mode::resolve_container(&meta, cli.video_mode.as_deref(), cli.unified)?;

    if !cli.quiet {
        let croprec_requested = cli
            .video_mode
            .as_deref()
            .map(|m| m.eq_ignore_ascii_case("croprec"))
            .unwrap_or(false);
        if resolved.mode == VideoMode::CropRec && croprec_requested {
            println!("Using command line option '-m croprec'");
        } else if cli.camera_name.is_some() || cli.video_mode.is_some() {
            println!("Command line options ignored");
        }
        println!("Using MLV info block values");
        print_source(&resolved);
    }
    build_and_save(cli, &resolved)
}

fn print_source(resolved: &ResolvedSource) {
    println!();
    println!(
        "Camera     : {} (0x{:X})",
        resolved.camera_label,
        resolved.camera.model()
    );
    println!(
        "Video mode : {}x{}",
        resolved.geometry.width, resolved.geometry.height
    );
    println!();
}

fn build_and_save(cli: &Cli, resolved: &ResolvedSource) -> anyhow::Result<()> {
    if !cli.quiet {
        let variant_label = match resolved.variant {
            Variant::Unified => " lossless",
            Variant::Legacy => "",
        };
        println!(
            "Generating focus pixel map for '{}'{} mode",
            resolved.mode.keyword(),
            variant_label
        );
    }

    let mut map = PixelMap::new();
    pattern::generate(
        &mut map,
        resolved.camera,
        resolved.mode,
        resolved.variant,
        &resolved.geometry,
    );

    let meta = MapMeta {
        model: resolved.camera.model(),
        width: resolved.geometry.width,
        height: resolved.geometry.height,
        crop: resolved.geometry.crop,
    };
    cmd::save_map(cli, &map, &meta, MapFormat::Fpm)
}
