//! Bound variable names.

/// Name for a bound variable reference. Variables are not resolved against
/// a variable store yet, so the name is derived from the id.
pub fn variable_name_by_id(variable_id: &str) -> String {
    format!("variable_{variable_id}")
}
