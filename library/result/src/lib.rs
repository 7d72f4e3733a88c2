use error::Panic;

/// A Result is an alias of [std::result::Result](std::result::Result) whose error variant
/// defaults to a [Panic](error::Panic). It is the tagged union handed back by every wrapped
/// call: either `Ok(value)` when the call completed normally, or `Err(error)` when it did not.
///
/// Exactly one of the two is ever present and the compiler forces callers to check which
/// one they hold before touching the payload.
///
/// ```
/// use error::Panic;
/// use result::Result;
///
/// fn identity<T>(arg: T) -> Result<T> {
///     Ok(arg)
/// }
///
/// fn broken<T>(_: T) -> Result<T> {
///     Err(Panic::new("oops"))
/// }
///
/// assert_eq!("test", identity("test").unwrap());
/// match broken("test") {
///     Ok(_) => unreachable!(),
///     Err(err) => assert_eq!(Some("oops"), err.message()),
/// }
/// ```
///
/// The error variant may still be chosen per call site.
///
/// ```
/// use result::Result;
///
/// fn parse(input: &str) -> Result<u32, std::num::ParseIntError> {
///     input.parse()
/// }
///
/// assert!(parse("nonsense").is_err());
/// ```
///
/// Reaching for the value without checking first (`unwrap`, `expect`) panics on a failure.
/// That is the price of the pattern and it is left to the caller; nothing in this workspace
/// will ever unwrap on your behalf.
pub type Result<T, E = Panic> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    fn identity<T>(arg: T) -> Result<T> {
        Ok(arg)
    }

    fn failing<T>(_: T) -> Result<T> {
        Err(Panic::new("oops"))
    }

    #[test]
    fn success() {
        let result = identity("test");
        assert!(result.is_ok());
        assert_eq!(Some("test"), result.ok());
    }

    #[test]
    fn failure() {
        let result = failing("test");
        assert!(result.is_err());
        assert_eq!(Some("oops"), result.unwrap_err().message());
    }

    #[test]
    fn custom_error() {
        let result: Result<(), String> = Err("nope".to_string());
        assert_eq!(Err("nope".to_string()), result);
    }
}
