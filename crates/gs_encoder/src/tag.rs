use gs_reflect::info::NamedField;

// -----------------------------------------------------------------------------
// FieldTag

/// The parsed form of a field tag.
///
/// The grammar is `["!"] name`: a single leading `!` marks the field as
/// non-null, the rest is the exposed name taken verbatim. An empty name is
/// accepted.
///
/// # Examples
///
/// ```
/// use gs_encoder::FieldTag;
///
/// let tag = FieldTag::parse("!firstName");
/// assert_eq!(tag.name(), "firstName");
/// assert!(tag.is_non_null());
///
/// let tag = FieldTag::parse("!");
/// assert_eq!(tag.name(), "");
/// assert!(tag.is_non_null());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldTag<'a> {
    name: &'a str,
    non_null: bool,
}

impl<'a> FieldTag<'a> {
    /// Parses a raw tag.
    pub fn parse(raw: &'a str) -> Self {
        match raw.strip_prefix('!') {
            Some(name) => Self {
                name,
                non_null: true,
            },
            None => Self {
                name: raw,
                non_null: false,
            },
        }
    }

    /// Returns the exposed name.
    #[inline]
    pub const fn name(&self) -> &'a str {
        self.name
    }

    /// Returns `true` if the field is marked non-null.
    #[inline]
    pub const fn is_non_null(&self) -> bool {
        self.non_null
    }
}

impl FieldTag<'static> {
    /// Parses the tag of `field`, `None` if the field takes no part in the
    /// schema.
    #[inline]
    pub fn of(field: &NamedField) -> Option<Self> {
        field.tag().map(FieldTag::parse)
    }
}
