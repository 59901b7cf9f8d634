/// A single table value: absent, or the textual form of some value.
///
/// Conversion into `Cell` is total. Any displayable value becomes its
/// canonical text via the blanket `From` impl; an absent value renders as
/// the literal `nil`. `Cell` itself deliberately implements neither
/// `Display` nor `ToString`, which keeps the blanket impl coherent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Nil,
    Text(String),
}

impl Cell {
    /// An absent value, rendered as `nil`
    pub fn nil() -> Self {
        Self::Nil
    }

    /// Convert an optional value; `None` maps to [`Cell::nil`]
    pub fn opt<T: ToString>(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::Text(v.to_string()),
            None => Self::Nil,
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// The total value-to-text conversion used for every header label,
    /// index value, and cell value
    pub fn into_text(self) -> String {
        match self {
            Self::Nil => "nil".to_string(),
            Self::Text(text) => text,
        }
    }
}

impl<T: ToString> From<T> for Cell {
    fn from(value: T) -> Self {
        Self::Text(value.to_string())
    }
}
