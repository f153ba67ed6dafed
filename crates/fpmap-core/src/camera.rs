// crates/fpmap-core/src/camera.rs

use crate::error::{FpmError, Result};

/// High 16 bits shared by every valid camera model code.
pub const MODEL_SENTINEL: u32 = 0x8000_0000;

/// Grouping of camera bodies that share one set of focus-pixel lattice
/// constants. Family A covers three bodies, family B is the 100D alone.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PatternFamily {
    A,
    B,
}

/// A supported camera body. Anything else is a terminal failure, never a
/// best-effort guess.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Camera {
    Eosm,
    Eos650d,
    Eos700d,
    Eos100d,
}

impl Camera {
    /// Case-insensitive exact match against the four known short names.
    pub fn from_name(name: &str) -> Result<Self> {
        if name.eq_ignore_ascii_case("EOSM") {
            Ok(Camera::Eosm)
        } else if name.eq_ignore_ascii_case("650D") {
            Ok(Camera::Eos650d)
        } else if name.eq_ignore_ascii_case("700D") {
            Ok(Camera::Eos700d)
        } else if name.eq_ignore_ascii_case("100D") {
            Ok(Camera::Eos100d)
        } else {
            Err(FpmError::UnsupportedCamera(name.to_string()))
        }
    }

    pub fn from_model(model: u32) -> Option<Self> {
        match model {
            0x8000_0331 => Some(Camera::Eosm),
            0x8000_0301 => Some(Camera::Eos650d),
            0x8000_0326 => Some(Camera::Eos700d),
            0x8000_0346 => Some(Camera::Eos100d),
            _ => None,
        }
    }

    pub fn model(self) -> u32 {
        match self {
            Camera::Eosm => 0x8000_0331,
            Camera::Eos650d => 0x8000_0301,
            Camera::Eos700d => 0x8000_0326,
            Camera::Eos100d => 0x8000_0346,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Camera::Eosm => "Canon EOS M",
            Camera::Eos650d => "Canon EOS 650D",
            Camera::Eos700d => "Canon EOS 700D",
            Camera::Eos100d => "Canon EOS 100D",
        }
    }

    pub fn family(self) -> PatternFamily {
        match self {
            Camera::Eos100d => PatternFamily::B,
            _ => PatternFamily::A,
        }
    }
}

/// A model code is considered valid when its high half matches the sentinel.
pub fn model_is_valid(model: u32) -> bool {
    model & 0xFFFF_0000 == MODEL_SENTINEL
}
