//! Small helpers shared by the part parsers

use quick_xml::events::BytesStart;

/// Look up an attribute by local name, ignoring the namespace prefix.
///
/// `w:val`, `val` and `ns0:val` all match `b"val"`.
pub(crate) fn attr(e: &BytesStart, local: &[u8]) -> Option<String> {
    e.attributes()
        .filter_map(|a| a.ok())
        .find(|a| a.key.local_name().as_ref() == local)
        .and_then(|a| a.unescape_value().ok().map(|v| v.into_owned()))
}

/// Interpret a WordprocessingML on/off property (`ST_OnOff`).
///
/// A missing `w:val` means on.
pub(crate) fn on_off(e: &BytesStart) -> bool {
    !matches!(
        attr(e, b"val").as_deref(),
        Some("0") | Some("false") | Some("off")
    )
}
