//! Fail-fast verification with specifications
//!
//! Misusing a specification - asking for a value that is required to hold
//! and passing one that does not - is a caller error, not an operational
//! fault. These helpers surface it as a descriptive `Err` at the violating
//! call instead of silently treating the value as a non-match.

use super::combinators::Specification;

/// Require a value to satisfy a specification.
///
/// Returns `Ok(value)` if the specification is satisfied, otherwise
/// `Err(error)`. No retries and no recovery: specification evaluation is
/// pure and has no transient failure mode.
///
/// # Example
///
/// ```rust
/// use specsieve::spec::*;
///
/// let result = ensure(7, one_of([1, 3, 5, 7]), "not an allowed value");
/// assert_eq!(result, Ok(7));
///
/// let result = ensure(8, one_of([1, 3, 5, 7]), "not an allowed value");
/// assert_eq!(result, Err("not an allowed value"));
/// ```
pub fn ensure<T, E, S>(value: T, spec: S, error: E) -> Result<T, E>
where
    S: Specification<T>,
{
    if spec.is_satisfied(&value) {
        Ok(value)
    } else {
        Err(error)
    }
}

/// Require a value to satisfy a specification, with an error factory.
///
/// Like `ensure`, but takes a closure to generate the error, allowing
/// access to the offending value when constructing the message.
///
/// # Example
///
/// ```rust
/// use specsieve::spec::*;
///
/// let result = ensure_with(8, one_of([1, 3, 5]), |v| format!("{} is not allowed", v));
/// assert_eq!(result, Err("8 is not allowed".to_string()));
/// ```
pub fn ensure_with<T, E, S, F>(value: T, spec: S, error_fn: F) -> Result<T, E>
where
    S: Specification<T>,
    F: FnOnce(&T) -> E,
{
    if spec.is_satisfied(&value) {
        Ok(value)
    } else {
        Err(error_fn(&value))
    }
}
