//! Theme slider geometry
//!
//! The header toggle is a three-stop slider: the thumb rests at 0, 16 or 32
//! pixels for Light, Medium and Dark. Releasing a drag snaps to the nearest
//! band, and the sun / earring / moon icons cross-fade with the thumb.

use serde::Serialize;

use crate::theme::ThemeValue;

/// Thumb travel in pixels
pub const TRACK_TRAVEL: f32 = 32.0;

/// Largest offset that still selects Light
pub const LIGHT_BAND_END: f32 = 10.0;

/// Largest offset that still selects Medium
pub const MEDIUM_BAND_END: f32 = 21.0;

/// Resting thumb offset for a theme
pub fn thumb_offset(theme: ThemeValue) -> f32 {
    match theme {
        ThemeValue::Light => 0.0,
        ThemeValue::Medium => TRACK_TRAVEL / 2.0,
        ThemeValue::Dark => TRACK_TRAVEL,
    }
}

/// Theme selected by a thumb released at `offset`
pub fn theme_at_offset(offset: f32) -> ThemeValue {
    if offset <= LIGHT_BAND_END {
        ThemeValue::Light
    } else if offset <= MEDIUM_BAND_END {
        ThemeValue::Medium
    } else {
        ThemeValue::Dark
    }
}

/// Theme change caused by releasing the thumb, if any
pub fn release(current: ThemeValue, offset: f32) -> Option<ThemeValue> {
    let next = theme_at_offset(offset);
    (next != current).then_some(next)
}

/// Opacity of each slider icon
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IconOpacity {
    /// Sun (Light)
    pub sun: f32,
    /// Earring (Medium)
    pub earring: f32,
    /// Moon (Dark)
    pub moon: f32,
}

/// Icon opacities for a thumb at `offset`, interpolated between stops
pub fn icon_opacity(offset: f32) -> IconOpacity {
    let mid = TRACK_TRAVEL / 2.0;
    let x = offset.clamp(0.0, TRACK_TRAVEL);

    if x <= mid {
        let t = x / mid;
        IconOpacity { sun: 1.0 - t, earring: t, moon: 0.0 }
    } else {
        let t = (x - mid) / mid;
        IconOpacity { sun: 0.0, earring: 1.0 - t, moon: t }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thumb_offsets() {
        assert_eq!(thumb_offset(ThemeValue::Light), 0.0);
        assert_eq!(thumb_offset(ThemeValue::Medium), 16.0);
        assert_eq!(thumb_offset(ThemeValue::Dark), 32.0);
    }

    #[test]
    fn test_resting_offsets_select_their_theme() {
        for theme in ThemeValue::ALL {
            assert_eq!(theme_at_offset(thumb_offset(theme)), theme);
        }
    }

    #[test]
    fn test_band_edges() {
        assert_eq!(theme_at_offset(-4.0), ThemeValue::Light);
        assert_eq!(theme_at_offset(10.0), ThemeValue::Light);
        assert_eq!(theme_at_offset(10.5), ThemeValue::Medium);
        assert_eq!(theme_at_offset(21.0), ThemeValue::Medium);
        assert_eq!(theme_at_offset(21.5), ThemeValue::Dark);
        assert_eq!(theme_at_offset(40.0), ThemeValue::Dark);
    }

    #[test]
    fn test_release_only_reports_changes() {
        assert_eq!(release(ThemeValue::Light, 3.0), None);
        assert_eq!(release(ThemeValue::Light, 18.0), Some(ThemeValue::Medium));
        assert_eq!(release(ThemeValue::Dark, 0.0), Some(ThemeValue::Light));
    }

    #[test]
    fn test_icon_opacity_at_stops() {
        assert_eq!(icon_opacity(0.0), IconOpacity { sun: 1.0, earring: 0.0, moon: 0.0 });
        assert_eq!(icon_opacity(16.0), IconOpacity { sun: 0.0, earring: 1.0, moon: 0.0 });
        assert_eq!(icon_opacity(32.0), IconOpacity { sun: 0.0, earring: 0.0, moon: 1.0 });
    }

    #[test]
    fn test_icon_opacity_interpolates_and_clamps() {
        let halfway = icon_opacity(8.0);
        assert!((halfway.sun - 0.5).abs() < f32::EPSILON);
        assert!((halfway.earring - 0.5).abs() < f32::EPSILON);

        assert_eq!(icon_opacity(-10.0), icon_opacity(0.0));
        assert_eq!(icon_opacity(100.0), icon_opacity(32.0));
    }
}
