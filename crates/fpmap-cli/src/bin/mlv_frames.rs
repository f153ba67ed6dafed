// crates/fpmap-cli/src/bin/mlv_frames.rs
//
// Companion utility: count the VIDF blocks of an MLV file and optionally
// patch the videoFrameCount field of its MLVI header in place, keeping the
// file modification time unchanged. Shares only the block-header layout
// with the map pipeline.

use std::fs::OpenOptions;
use std::io::{Read, Seek, SeekFrom, Write};

use anyhow::{bail, Context, Result};
use clap::Parser;
use fpmap_core::mlv;

#[derive(Parser)]
#[command(name = "mlv-frames")]
#[command(version, about = "Inspect and patch the frame count field of an MLV file")]
struct Args {
    /// MLV file to inspect
    file: String,

    /// Write the counted frame total into the header (default: report only)
    #[arg(long)]
    set: bool,

    /// Write a zero frame count instead (testing aid)
    #[arg(long, conflicts_with = "set")]
    zero: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let path = &args.file;
    let patching = args.set || args.zero;

    let mtime = std::fs::metadata(path)
        .with_context(|| format!("stat '{path}'"))?
        .modified()?;

    let mut f = OpenOptions::new()
        .read(true)
        .write(patching)
        .open(path)
        .with_context(|| format!("open '{path}'"))?;

    let hdr = mlv::read_file_header(&mut f, path)?;

    if hdr.video_frame_count != 0 && !args.zero {
        println!(
            "{path}: already has frameCount set to {}",
            hdr.video_frame_count
        );
        return Ok(());
    }
    if hdr.video_frame_count == 0 && args.zero {
        println!("{path}: already has frameCount set to 0");
        return Ok(());
    }

    let mut frame_count: u32 = 0;
    while let Some(block) = mlv::next_block_header(&mut f, path)? {
        let Some(payload_len) = block.payload_len() else {
            bail!("{path}: looks like a corrupted MLV file");
        };
        match &block.tag {
            b"VIDF" => {
                if payload_len < 4 {
                    bail!("{path}: looks like a corrupted MLV file");
                }
                frame_count += 1;
                let mut num = [0u8; 4];
                f.read_exact(&mut num)
                    .with_context(|| format!("read frame number from '{path}'"))?;
                let frame_number = u32::from_le_bytes(num);
                print!("\r{path}: processing... frameCount = {frame_count}, frameNumber = {frame_number}");
                std::io::stdout().flush().ok();
                f.seek(SeekFrom::Current(payload_len as i64 - 4))?;
            }
            b"XREF" => {
                bail!("{path}: looks like an XREF file, skipping");
            }
            tag if mlv::is_known_tag(tag) => {
                f.seek(SeekFrom::Current(payload_len as i64))?;
            }
            _ => bail!("{path}: looks like a corrupted MLV file"),
        }
    }
    println!();

    if frame_count == 0 {
        println!("{path}: no VIDF blocks found");
        return Ok(());
    }
    println!("{path}: counted {frame_count} video frames");

    if patching {
        let value: u32 = if args.zero { 0 } else { frame_count };
        f.seek(SeekFrom::Start(mlv::FRAME_COUNT_OFFSET))?;
        f.write_all(&value.to_le_bytes())
            .with_context(|| format!("write frame count to '{path}'"))?;
        f.sync_all()?;
        // Restore the pre-patch timestamp.
        f.set_modified(mtime)?;
        println!("{path}: changed frameCount value to {value}");
    }

    Ok(())
}
