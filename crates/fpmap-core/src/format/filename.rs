// crates/fpmap-core/src/format/filename.rs
//
// Metadata recovery from the `<hexmodel>_<width>x<height>.<ext>` naming
// convention used for auto-generated map files.

use std::path::Path;

#[derive(Copy, Clone, Debug, Default)]
pub struct FilenameMeta {
    pub model: Option<u32>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// Best-effort scan of the file name. The model token is only trusted when
/// its first byte is '8' or its second byte is '0' (the Canon model codes
/// all start `80...`); width and height come from the `<w>x<h>` token pair.
pub fn scan(path: &str) -> FilenameMeta {
    let name = Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("");

    let (model_tok, rest) = match name.split_once('_') {
        Some((m, r)) => (m, Some(r)),
        None => (name, None),
    };

    let mut out = FilenameMeta::default();

    let tok = model_tok.as_bytes();
    if tok.len() >= 2 && (tok[0] == b'8' || tok[1] == b'0') {
        out.model = u32::from_str_radix(model_tok, 16).ok();
    }

    if let Some(rest) = rest {
        if let Some((w_tok, h_rest)) = rest.split_once('x') {
            out.width = w_tok.parse().ok();
            out.height = h_rest
                .split('.')
                .next()
                .and_then(|h| h.parse().ok());
        }
    }

    out
}
