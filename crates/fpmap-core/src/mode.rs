// crates/fpmap-core/src/mode.rs

use crate::camera::Camera;
use crate::error::{FpmError, Result};
use crate::mlv::{ContainerMetadata, VIDEO_CLASS_FLAG_LJ92};

/// White levels at or above this never force the unified variant.
const UNIFIED_WHITE_LEVEL_CEILING: u32 = 15000;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VideoMode {
    Mv720,
    Mv1080,
    Mv1080Crop,
    Zoom,
    CropRec,
}

impl VideoMode {
    pub fn keyword(self) -> &'static str {
        match self {
            VideoMode::Mv720 => "mv720",
            VideoMode::Mv1080 => "mv1080",
            VideoMode::Mv1080Crop => "mv1080crop",
            VideoMode::Zoom => "zoom",
            VideoMode::CropRec => "croprec",
        }
    }
}

/// Legacy is the classic per-mode mask; Unified is the denser variant meant
/// for compressed/lossless raw pipelines.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Variant {
    Legacy,
    Unified,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct VideoGeometry {
    pub width: u32,
    pub height: u32,
    pub crop: u32,
}

/// Map a mode keyword to its canonical geometry. Case-insensitive; unknown
/// keywords are a terminal failure.
pub fn mode_from_keyword(keyword: &str) -> Result<(VideoMode, VideoGeometry)> {
    let geom = |width, height, crop| VideoGeometry { width, height, crop };
    if keyword.eq_ignore_ascii_case("mv720") {
        Ok((VideoMode::Mv720, geom(1808, 727, 0)))
    } else if keyword.eq_ignore_ascii_case("mv1080") {
        Ok((VideoMode::Mv1080, geom(1808, 1190, 0)))
    } else if keyword.eq_ignore_ascii_case("mv1080crop") {
        Ok((VideoMode::Mv1080Crop, geom(1872, 1060, 0)))
    } else if keyword.eq_ignore_ascii_case("zoom") {
        Ok((VideoMode::Zoom, geom(2592, 1332, 0)))
    } else if keyword.eq_ignore_ascii_case("croprec") {
        Ok((VideoMode::CropRec, geom(1808, 727, 1)))
    } else {
        Err(FpmError::UnsupportedMode(keyword.to_string()))
    }
}

/// Everything the generator needs, resolved from either explicit options or
/// container metadata. Immutable once produced.
#[derive(Clone, Debug)]
pub struct ResolvedSource {
    pub camera: Camera,
    /// Display name shown to the operator: the builtin name for explicit
    /// resolution, the container-reported one for MLV sources.
    pub camera_label: String,
    pub mode: VideoMode,
    pub geometry: VideoGeometry,
    pub variant: Variant,
}

/// Resolve from explicit camera-name and mode keywords.
pub fn resolve_explicit(camera_name: &str, mode_keyword: &str, unified: bool) -> Result<ResolvedSource> {
    let camera = Camera::from_name(camera_name)?;
    let (mode, geometry) = mode_from_keyword(mode_keyword)?;
    Ok(ResolvedSource {
        camera,
        camera_label: camera.display_name().to_string(),
        mode,
        geometry,
        variant: if unified { Variant::Unified } else { Variant::Legacy },
    })
}

/// True when RAWC sampling factors indicate a crop-record recording: any
/// sum combination other than (x=3, y=5). Absent RAWC means not crop-record.
fn sampling_is_crop_rec(meta: &ContainerMetadata) -> bool {
    match &meta.sampling {
        Some(s) => s.sums() != (3, 5),
        None => false,
    }
}

/// Resolve from container metadata. `mode_override` is only honored when it
/// selects crop-record; `unified` can be forced on by the stream itself but
/// never forced off.
pub fn resolve_container(
    meta: &ContainerMetadata,
    mode_override: Option<&str>,
    unified: bool,
) -> Result<ResolvedSource> {
    let camera = Camera::from_model(meta.camera_model)
        .ok_or_else(|| FpmError::UnsupportedCamera(meta.camera_name.clone()))?;

    let unified = unified || unified_forced(meta);

    let croprec_requested = mode_override
        .map(|m| m.eq_ignore_ascii_case("croprec"))
        .unwrap_or(false);

    let (mode, crop) = match meta.width {
        1808 => {
            if meta.height < 900 {
                if croprec_requested || sampling_is_crop_rec(meta) {
                    (VideoMode::CropRec, 1)
                } else {
                    (VideoMode::Mv720, 0)
                }
            } else {
                (VideoMode::Mv1080, 0)
            }
        }
        1872 => (VideoMode::Mv1080Crop, 0),
        2592 => (VideoMode::Zoom, 0),
        other => {
            return Err(FpmError::UnsupportedMode(format!(
                "{}x{}",
                other, meta.height
            )))
        }
    };

    Ok(ResolvedSource {
        camera,
        camera_label: meta.camera_name.clone(),
        mode,
        geometry: VideoGeometry {
            width: meta.width,
            height: meta.height,
            crop,
        },
        variant: if unified { Variant::Unified } else { Variant::Legacy },
    })
}

/// An LJ92-class stream with a restricted white level only works with the
/// denser unified mask.
pub fn unified_forced(meta: &ContainerMetadata) -> bool {
    meta.video_class & VIDEO_CLASS_FLAG_LJ92 != 0 && meta.white_level < UNIFIED_WHITE_LEVEL_CEILING
}
