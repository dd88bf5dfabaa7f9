//! String-to-typed-value coercion for field slots.

use std::num::{ParseFloatError, ParseIntError};

use crate::error::{BindError, CoerceCause};
use crate::record::Slot;

/// Coerces `raw` to the slot's type and assigns it.
///
/// Parse failures come back as [`BindError::Coerce`] carrying the field,
/// declared type name, key, and the raw value that failed.
pub(crate) fn assign(
    field: &'static str,
    key: &'static str,
    slot: Slot<'_>,
    raw: &str,
) -> Result<(), BindError> {
    let type_name = slot.type_name();
    let wrap = |source: CoerceCause| BindError::Coerce {
        field,
        type_name,
        key,
        value: raw.to_string(),
        source,
    };

    match slot {
        Slot::I8(slot) => *slot = raw.parse().map_err(|e: ParseIntError| wrap(e.into()))?,
        Slot::I16(slot) => *slot = raw.parse().map_err(|e: ParseIntError| wrap(e.into()))?,
        Slot::I32(slot) => *slot = raw.parse().map_err(|e: ParseIntError| wrap(e.into()))?,
        Slot::I64(slot) => *slot = raw.parse().map_err(|e: ParseIntError| wrap(e.into()))?,
        Slot::U8(slot) => *slot = raw.parse().map_err(|e: ParseIntError| wrap(e.into()))?,
        Slot::U16(slot) => *slot = raw.parse().map_err(|e: ParseIntError| wrap(e.into()))?,
        Slot::U32(slot) => *slot = raw.parse().map_err(|e: ParseIntError| wrap(e.into()))?,
        Slot::U64(slot) => *slot = raw.parse().map_err(|e: ParseIntError| wrap(e.into()))?,
        Slot::F32(slot) => *slot = raw.parse().map_err(|e: ParseFloatError| wrap(e.into()))?,
        Slot::F64(slot) => *slot = raw.parse().map_err(|e: ParseFloatError| wrap(e.into()))?,
        Slot::Bool(slot) => *slot = parse_bool(raw).ok_or_else(|| wrap(CoerceCause::Bool))?,
        Slot::Str(slot) => *slot = raw.to_string(),
        Slot::Unsupported { type_name } => {
            return Err(BindError::UnsupportedFieldType { field, type_name });
        }
    }

    Ok(())
}

/// Accepts `true`/`false`, `t`/`f`, and `1`/`0`, case-insensitively.
fn parse_bool(raw: &str) -> Option<bool> {
    if raw.eq_ignore_ascii_case("true") || raw.eq_ignore_ascii_case("t") || raw == "1" {
        Some(true)
    } else if raw.eq_ignore_ascii_case("false") || raw.eq_ignore_ascii_case("f") || raw == "0" {
        Some(false)
    } else {
        None
    }
}
