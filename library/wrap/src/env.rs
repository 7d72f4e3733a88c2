/// Whether captured panics should be kept off of stderr, as configured under the
/// `WRAP_QUIET_PANICS` environment variable. If no such environment variable is set, then
/// this function defaults to `false` (panics are reported by the standard hook as usual).
///
/// The values `1`, `true` and `yes` (in any case, surrounding whitespace ignored) enable it.
/// Anything else disables it.
///
/// This is only consulted by [install_from_env](crate::hook::install_from_env).
pub fn quiet_panics() -> bool {
    std::env::var("WRAP_QUIET_PANICS")
        .map(|value| flag(&value))
        .unwrap_or(false)
}

fn flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthy() {
        for value in &["1", "true", "TRUE", " yes ", "Yes"] {
            assert!(flag(value), "{:?} should enable quiet panics", value);
        }
    }

    #[test]
    fn falsy() {
        for value in &["", "0", "false", "no", "nonsense"] {
            assert!(!flag(value), "{:?} should not enable quiet panics", value);
        }
    }

    #[test]
    fn from_environment() {
        std::env::set_var("WRAP_QUIET_PANICS", "true");
        assert!(quiet_panics());
        assert!(crate::hook::install_from_env());
        std::env::set_var("WRAP_QUIET_PANICS", "off");
        assert!(!quiet_panics());
        std::env::remove_var("WRAP_QUIET_PANICS");
        assert!(!quiet_panics());
    }
}
