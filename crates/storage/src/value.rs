//! Canonical string forms for preference values.
//!
//! Every value is persisted as text; the caller-side logical type decides
//! how that text is produced on write and parsed back on read.

/// Conversion into the canonical string form used on disk.
pub trait ToCanonical {
    fn to_canonical(&self) -> String;
}

/// Parsing from the canonical string form back into a logical type.
pub trait FromCanonical: Sized {
    /// Type name used in parse error messages.
    const LOGICAL_TYPE: &'static str;

    /// Parse `raw` back into the logical type.
    ///
    /// `None` signals a parse failure; the store turns it into
    /// [`StorageError::Parse`](crate::StorageError::Parse). Types that never
    /// round-trip return `Some(default)` instead.
    fn from_canonical(raw: &str, default: Self) -> Option<Self>;
}

// ---------------------------------------------------------------------------
// Write side
// ---------------------------------------------------------------------------

impl ToCanonical for i32 {
    fn to_canonical(&self) -> String {
        self.to_string()
    }
}

impl ToCanonical for i64 {
    fn to_canonical(&self) -> String {
        self.to_string()
    }
}

impl ToCanonical for bool {
    fn to_canonical(&self) -> String {
        self.to_string()
    }
}

impl ToCanonical for f64 {
    fn to_canonical(&self) -> String {
        self.to_string()
    }
}

impl ToCanonical for String {
    fn to_canonical(&self) -> String {
        self.clone()
    }
}

impl ToCanonical for &str {
    fn to_canonical(&self) -> String {
        (*self).to_string()
    }
}

/// `None` is stored as the empty string. On read-back it is
/// indistinguishable from an explicitly stored empty string.
impl<T: ToCanonical> ToCanonical for Option<T> {
    fn to_canonical(&self) -> String {
        self.as_ref().map(T::to_canonical).unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// Read side
// ---------------------------------------------------------------------------

impl FromCanonical for i32 {
    const LOGICAL_TYPE: &'static str = "integer";

    fn from_canonical(raw: &str, _default: Self) -> Option<Self> {
        raw.trim().parse().ok()
    }
}

impl FromCanonical for i64 {
    const LOGICAL_TYPE: &'static str = "integer";

    fn from_canonical(raw: &str, _default: Self) -> Option<Self> {
        raw.trim().parse().ok()
    }
}

/// Case-insensitive so files written with `"True"`/`"False"` capitalization
/// still read back.
impl FromCanonical for bool {
    const LOGICAL_TYPE: &'static str = "boolean";

    fn from_canonical(raw: &str, _default: Self) -> Option<Self> {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("true") {
            Some(true)
        } else if raw.eq_ignore_ascii_case("false") {
            Some(false)
        } else {
            None
        }
    }
}

impl FromCanonical for String {
    const LOGICAL_TYPE: &'static str = "string";

    fn from_canonical(raw: &str, _default: Self) -> Option<Self> {
        Some(raw.to_string())
    }
}

/// Floats do NOT round-trip: reads never consult the stored text and always
/// return the supplied default, while integer and boolean reads fail hard on
/// unparsable text. A float can be written with `set` but the value is
/// effectively write-only. Known sharp edge, kept deliberately; do not
/// "fix" it to parse without checking what existing callers rely on.
impl FromCanonical for f64 {
    const LOGICAL_TYPE: &'static str = "float";

    fn from_canonical(_raw: &str, default: Self) -> Option<Self> {
        Some(default)
    }
}
