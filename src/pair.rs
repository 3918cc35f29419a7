//! Pairing helpers consumed by `apply` and `fork`.

/// Build a pair from two values.
pub fn pair<A, B>(a: A, b: B) -> (A, B) {
    (a, b)
}

/// Duplicate a value into both slots of a pair.
///
/// # Example
///
/// ```rust
/// use arrowcat::pair::diagonal;
///
/// assert_eq!(diagonal(7), (7, 7));
/// ```
pub fn diagonal<X: Clone>(x: X) -> (X, X) {
    (x.clone(), x)
}
