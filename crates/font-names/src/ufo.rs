//! Names from UFO sources.

use std::path::Path;

use norad::{DataRequest, Font};

use crate::{Result, synthesize_postscript_name};

const DEFAULT_FAMILY: &str = "Family Name";
const DEFAULT_STYLE: &str = "Style Name";

/// PostScript name of a UFO, synthesized from family and style when the font
/// info leaves `postscriptFontName` empty.
pub fn postscript_name(path: &Path) -> Result<String> {
    let font = Font::load_requested_data(path, DataRequest::none())?;
    let info = font.font_info;

    if let Some(name) = info.postscript_font_name.filter(|name| !name.is_empty()) {
        return Ok(name);
    }

    let family = info.family_name.unwrap_or_else(|| DEFAULT_FAMILY.to_string());
    let style = info.style_name.unwrap_or_else(|| DEFAULT_STYLE.to_string());
    Ok(synthesize_postscript_name(&family, &style))
}
