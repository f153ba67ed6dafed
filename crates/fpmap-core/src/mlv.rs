// crates/fpmap-core/src/mlv.rs
//
// Minimal MLV container reader: just enough of the block stream to pull
// camera identity and raw geometry out of the leading metadata blocks.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};

use crate::error::{FpmError, Result};

/// Size the MLVI top-level header must declare.
pub const FILE_HDR_SIZE: u32 = 52;
/// Byte offset of videoFrameCount inside the MLVI header.
pub const FRAME_COUNT_OFFSET: u64 = 0x24;
/// videoClass flag marking an LJ92-compressed raw stream.
pub const VIDEO_CLASS_FLAG_LJ92: u16 = 0x20;

const BLOCK_HDR_LEN: usize = 16;
const SCAN_BUDGET: usize = 32;

/// Every block tag a well-formed MLV may carry at top level.
const KNOWN_TAGS: [&[u8; 4]; 18] = [
    b"VIDF", b"AUDF", b"NULL", b"RTCI", b"XREF", b"RAWI", b"WAVI", b"EXPO", b"LENS", b"IDNT",
    b"INFO", b"WBAL", b"STYL", b"MARK", b"ELVL", b"DEBG", b"BKUP", b"MLVI",
];

pub fn is_known_tag(tag: &[u8; 4]) -> bool {
    KNOWN_TAGS.contains(&tag)
}

/// Fields of the 52-byte MLVI header consumed downstream.
#[derive(Copy, Clone, Debug)]
pub struct FileHeader {
    pub video_class: u16,
    pub video_frame_count: u32,
}

/// Common 16-byte prefix of every non-leading block: tag, declared size,
/// timestamp (the timestamp is skipped). The declared size is authoritative
/// for advancing the stream.
#[derive(Copy, Clone, Debug)]
pub struct BlockHeader {
    pub tag: [u8; 4],
    pub size: u32,
}

impl BlockHeader {
    pub fn payload_len(&self) -> Option<usize> {
        (self.size as usize).checked_sub(BLOCK_HDR_LEN)
    }
}

/// Sensor crop-sampling factors from the optional RAWC block.
#[derive(Copy, Clone, Debug)]
pub struct Sampling {
    pub binning_x: u8,
    pub skipping_x: u8,
    pub binning_y: u8,
    pub skipping_y: u8,
}

impl Sampling {
    /// (binning + skipping) per axis, the quantity crop-record detection
    /// switches on.
    pub fn sums(&self) -> (u32, u32) {
        (
            self.binning_x as u32 + self.skipping_x as u32,
            self.binning_y as u32 + self.skipping_y as u32,
        )
    }
}

/// The subset of container fields the resolver needs. Produced once per
/// scan and handed to the caller by value.
#[derive(Clone, Debug, Default)]
pub struct ContainerMetadata {
    pub camera_model: u32,
    pub camera_name: String,
    pub width: u32,
    pub height: u32,
    pub crop: u32,
    pub black_level: u32,
    pub white_level: u32,
    pub video_class: u16,
    pub sampling: Option<Sampling>,
}

#[derive(Clone, Debug)]
pub enum ScanOutcome {
    /// Both IDNT and RAWI were captured (RAWC is optional).
    Complete(ContainerMetadata),
    /// Scan budget or stream exhausted without both required blocks.
    Incomplete,
}

fn le_u16(buf: &[u8], off: usize) -> u16 {
    u16::from_le_bytes([buf[off], buf[off + 1]])
}

fn le_u32(buf: &[u8], off: usize) -> u32 {
    u32::from_le_bytes([buf[off], buf[off + 1], buf[off + 2], buf[off + 3]])
}

/// Read and validate the leading MLVI header.
pub fn read_file_header(r: &mut impl Read, path: &str) -> Result<FileHeader> {
    let mut buf = [0u8; FILE_HDR_SIZE as usize];
    r.read_exact(&mut buf).map_err(|e| FpmError::from_io(path, e))?;

    if &buf[0..4] != b"MLVI" || le_u32(&buf, 4) != FILE_HDR_SIZE {
        return Err(FpmError::InvalidFormat(path.to_string()));
    }

    Ok(FileHeader {
        video_class: le_u16(&buf, 32),
        video_frame_count: le_u32(&buf, 36),
    })
}

/// Read the next block header. Clean end of stream yields `None`; a partial
/// header is a truncated read.
pub fn next_block_header(r: &mut impl Read, path: &str) -> Result<Option<BlockHeader>> {
    let mut buf = [0u8; BLOCK_HDR_LEN];
    let mut got = 0;
    while got < buf.len() {
        match r.read(&mut buf[got..]) {
            Ok(0) => break,
            Ok(n) => got += n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(FpmError::from_io(path, e)),
        }
    }
    if got == 0 {
        return Ok(None);
    }
    if got < buf.len() {
        return Err(FpmError::TruncatedRead(path.to_string()));
    }
    Ok(Some(BlockHeader {
        tag: [buf[0], buf[1], buf[2], buf[3]],
        size: le_u32(&buf, 4),
    }))
}

fn read_payload(r: &mut impl Read, len: usize, path: &str) -> Result<Vec<u8>> {
    let mut buf = vec![0u8; len];
    r.read_exact(&mut buf).map_err(|e| FpmError::from_io(path, e))?;
    Ok(buf)
}

fn parse_rawi(meta: &mut ContainerMetadata, payload: &[u8], path: &str) -> Result<()> {
    if payload.len() < 40 {
        return Err(FpmError::InvalidFormat(path.to_string()));
    }
    meta.crop = le_u32(payload, 8);
    meta.height = le_u32(payload, 12);
    meta.width = le_u32(payload, 16);
    meta.black_level = le_u32(payload, 32);
    meta.white_level = le_u32(payload, 36);
    Ok(())
}

fn parse_idnt(meta: &mut ContainerMetadata, payload: &[u8], path: &str) -> Result<()> {
    if payload.len() < 36 {
        return Err(FpmError::InvalidFormat(path.to_string()));
    }
    let name = &payload[..32];
    let end = name.iter().position(|&b| b == 0).unwrap_or(name.len());
    meta.camera_name = String::from_utf8_lossy(&name[..end]).into_owned();
    meta.camera_model = le_u32(payload, 32);
    Ok(())
}

fn parse_rawc(meta: &mut ContainerMetadata, payload: &[u8], path: &str) -> Result<()> {
    if payload.len() < 12 {
        return Err(FpmError::InvalidFormat(path.to_string()));
    }
    meta.sampling = Some(Sampling {
        binning_x: payload[8],
        skipping_x: payload[9],
        binning_y: payload[10],
        skipping_y: payload[11],
    });
    Ok(())
}

/// Scan up to 32 top-level blocks for the first IDNT, RAWI and RAWC
/// occurrences. Unrecognized blocks are skipped by their declared size.
pub fn scan_metadata(path: &str) -> Result<ScanOutcome> {
    let mut f = File::open(path).map_err(|e| FpmError::from_io(path, e))?;
    let file_hdr = read_file_header(&mut f, path)?;

    let mut meta = ContainerMetadata {
        video_class: file_hdr.video_class,
        ..ContainerMetadata::default()
    };
    let mut have_idnt = false;
    let mut have_rawi = false;

    for _ in 0..SCAN_BUDGET {
        let Some(hdr) = next_block_header(&mut f, path)? else {
            return Ok(ScanOutcome::Incomplete);
        };
        let Some(payload_len) = hdr.payload_len() else {
            return Err(FpmError::InvalidFormat(path.to_string()));
        };

        match &hdr.tag {
            b"RAWI" if !have_rawi => {
                let payload = read_payload(&mut f, payload_len, path)?;
                parse_rawi(&mut meta, &payload, path)?;
                have_rawi = true;
            }
            b"IDNT" if !have_idnt => {
                let payload = read_payload(&mut f, payload_len, path)?;
                parse_idnt(&mut meta, &payload, path)?;
                have_idnt = true;
            }
            b"RAWC" if meta.sampling.is_none() => {
                let payload = read_payload(&mut f, payload_len, path)?;
                parse_rawc(&mut meta, &payload, path)?;
            }
            _ => {
                f.seek(SeekFrom::Current(payload_len as i64))?;
            }
        }

        if have_rawi && have_idnt {
            return Ok(ScanOutcome::Complete(meta));
        }
    }

    Ok(ScanOutcome::Incomplete)
}
