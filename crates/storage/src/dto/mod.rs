pub mod athlete;
pub mod company;
pub mod user;

/// A text field counts as provided only when it is present and non-empty.
pub(crate) fn provided(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
