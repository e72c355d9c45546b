//! Names from binary OpenType fonts.

use log::debug;
use read_fonts::{FontRef, TableProvider, tables::name::Name};

use crate::{Result, synthesize_postscript_name};

/// Name table IDs.
const NAME_ID_FAMILY: u16 = 1;
const NAME_ID_SUBFAMILY: u16 = 2;
const NAME_ID_POSTSCRIPT: u16 = 6;
const NAME_ID_TYPOGRAPHIC_FAMILY: u16 = 16;
const NAME_ID_TYPOGRAPHIC_SUBFAMILY: u16 = 17;

const PLATFORM_MAC: u16 = 1;
const PLATFORM_WINDOWS: u16 = 3;
const MAC_ENGLISH: u16 = 0;
const WINDOWS_ENGLISH_US: u16 = 0x409;

/// PostScript name of the first face in `data`.
///
/// Uses name ID 6 when present, otherwise joins the typographic (16/17) or
/// legacy (1/2) family and subfamily. Returns `None` when the font has no
/// usable names at all.
pub fn postscript_name_from_data(data: &[u8]) -> Result<Option<String>> {
    let font = FontRef::from_index(data, 0)?;
    let Ok(name) = font.name() else {
        debug!("font has no readable name table");
        return Ok(None);
    };

    if let Some(postscript) = name_string(&name, NAME_ID_POSTSCRIPT) {
        return Ok(Some(postscript));
    }

    let family = name_string(&name, NAME_ID_TYPOGRAPHIC_FAMILY)
        .or_else(|| name_string(&name, NAME_ID_FAMILY));
    let style = name_string(&name, NAME_ID_TYPOGRAPHIC_SUBFAMILY)
        .or_else(|| name_string(&name, NAME_ID_SUBFAMILY));

    Ok(match (family, style) {
        (Some(family), Some(style)) => Some(synthesize_postscript_name(&family, &style)),
        (Some(family), None) => Some(family.replace(' ', "")),
        _ => None,
    })
}

/// The best record for `name_id`, preferring English over other languages.
fn name_string(name: &Name, name_id: u16) -> Option<String> {
    name.name_record()
        .iter()
        .filter(|record| record.name_id().to_u16() == name_id)
        .filter_map(|record| {
            let value = record.string(name.string_data()).ok()?.chars().collect::<String>();
            let rank = language_rank(record.platform_id(), record.language_id());
            Some((rank, value))
        })
        .filter(|(_, value)| !value.trim().is_empty())
        .min_by_key(|(rank, _)| *rank)
        .map(|(_, value)| value)
}

fn language_rank(platform_id: u16, language_id: u16) -> u8 {
    match (platform_id, language_id) {
        (PLATFORM_WINDOWS, WINDOWS_ENGLISH_US) => 0,
        (PLATFORM_MAC, MAC_ENGLISH) => 1,
        _ => 2,
    }
}
