//! Operating-system colour-scheme preference
//!
//! The equivalent of `matchMedia("(prefers-color-scheme: dark)")`: a
//! synchronous, local query that may have no answer. Detection failures are
//! never surfaced to callers; they read as "no signal".

/// Source of the user's preferred colour scheme
pub trait ColorSchemeProbe: Send + Sync {
    /// `Some(true)` for a dark preference, `Some(false)` for light, `None`
    /// when the platform reports nothing usable
    fn prefers_dark(&self) -> Option<bool>;
}

impl<P: ColorSchemeProbe + ?Sized> ColorSchemeProbe for std::sync::Arc<P> {
    fn prefers_dark(&self) -> Option<bool> {
        (**self).prefers_dark()
    }
}

/// Probe backed by the desktop environment via `dark-light`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemColorScheme;

impl ColorSchemeProbe for SystemColorScheme {
    fn prefers_dark(&self) -> Option<bool> {
        match dark_light::detect() {
            Ok(dark_light::Mode::Dark) => Some(true),
            Ok(dark_light::Mode::Light) => Some(false),
            Ok(dark_light::Mode::Unspecified) => None,
            Err(e) => {
                tracing::warn!("Failed to detect system colour scheme: {}", e);
                None
            }
        }
    }
}

/// Probe with a fixed answer, for server rendering and tests
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedColorScheme(pub Option<bool>);

impl FixedColorScheme {
    /// A probe reporting a dark preference
    pub const DARK: Self = Self(Some(true));
    /// A probe reporting a light preference
    pub const LIGHT: Self = Self(Some(false));
    /// A probe with no signal
    pub const UNKNOWN: Self = Self(None);
}

impl ColorSchemeProbe for FixedColorScheme {
    fn prefers_dark(&self) -> Option<bool> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_fixed_probe() {
        assert_eq!(FixedColorScheme::DARK.prefers_dark(), Some(true));
        assert_eq!(FixedColorScheme::LIGHT.prefers_dark(), Some(false));
        assert_eq!(FixedColorScheme::UNKNOWN.prefers_dark(), None);
    }

    #[test]
    fn test_probe_through_arc() {
        let probe: Arc<dyn ColorSchemeProbe> = Arc::new(FixedColorScheme::DARK);
        assert_eq!(probe.prefers_dark(), Some(true));
    }
}
