use serde::Serialize;

/// A single field of a partial update.
///
/// `Unchanged` leaves the stored column alone. `Set` writes the value, which
/// for nullable columns may itself be `None` (write NULL).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "op", content = "value", rename_all = "snake_case")]
pub enum FieldUpdate<T> {
    #[default]
    Unchanged,
    Set(T),
}

impl<T> FieldUpdate<T> {
    pub fn is_set(&self) -> bool {
        matches!(self, FieldUpdate::Set(_))
    }

    /// `Set(value)` when present, `Unchanged` otherwise.
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => FieldUpdate::Set(value),
            None => FieldUpdate::Unchanged,
        }
    }
}
