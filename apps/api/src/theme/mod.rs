//! Theme Resolver — maps (active entry, dark mode, entered) to the four display colours.
//!
//! Pure: no state, no side effects. Equal inputs always yield equal palettes.

use crate::models::{JourneyEntry, Theme};

/// Palette used after entering the main view when the active entry has none.
pub fn default_theme() -> Theme {
    Theme::new("#0f172a", "#cbd5e1", "#f8fafc", "#1e293b")
}

fn intro_light() -> Theme {
    Theme::new("#0f172a", "#64748b", "#fcfaf8", "#1e293b")
}

fn intro_dark() -> Theme {
    Theme::new("#38bdf8", "#94a3b8", "#0f172a", "#f1f5f9")
}

const DARK_SECONDARY: &str = "#94a3b8";
const DARK_BACKGROUND: &str = "#0f172a";
/// Text colour over an entry's brand palette in dark mode.
const DARK_ENTRY_TEXT: &str = "#e2e8f0";
/// Text colour over the default palette in dark mode.
const DARK_DEFAULT_TEXT: &str = "#f1f5f9";

/// Resolves the palette for the current view.
///
/// In dark mode an entry keeps its brand `primary`; surfaces are forced dark.
pub fn resolve_theme(active: Option<&JourneyEntry>, dark_mode: bool, entered: bool) -> Theme {
    if !entered {
        return if dark_mode { intro_dark() } else { intro_light() };
    }

    match active.and_then(|entry| entry.theme.as_ref()) {
        Some(palette) if dark_mode => Theme {
            primary: palette.primary.clone(),
            secondary: DARK_SECONDARY.to_string(),
            background: DARK_BACKGROUND.to_string(),
            text: DARK_ENTRY_TEXT.to_string(),
        },
        Some(palette) => palette.clone(),
        None if dark_mode => Theme {
            background: DARK_BACKGROUND.to_string(),
            text: DARK_DEFAULT_TEXT.to_string(),
            ..default_theme()
        },
        None => default_theme(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewEntry;

    fn entry(theme: Option<Theme>) -> JourneyEntry {
        NewEntry {
            role: "Engineer".to_string(),
            company: "Acme".to_string(),
            theme,
            ..Default::default()
        }
        .into_entry("1".to_string())
    }

    fn brand() -> Theme {
        Theme::new("#D32F2F", "#212121", "#FAFAFA", "#B71C1C")
    }

    #[test]
    fn test_intro_palettes_ignore_active_entry() {
        let e = entry(Some(brand()));
        assert_eq!(resolve_theme(Some(&e), false, false), intro_light());
        assert_eq!(resolve_theme(Some(&e), true, false), intro_dark());
        assert_eq!(resolve_theme(None, true, false).primary, "#38bdf8");
    }

    #[test]
    fn test_entry_palette_verbatim_in_light_mode() {
        let e = entry(Some(brand()));
        assert_eq!(resolve_theme(Some(&e), false, true), brand());
    }

    #[test]
    fn test_dark_mode_keeps_brand_primary_only() {
        let e = entry(Some(brand()));
        let theme = resolve_theme(Some(&e), true, true);
        assert_eq!(
            theme,
            Theme::new("#D32F2F", "#94a3b8", "#0f172a", "#e2e8f0")
        );
    }

    #[test]
    fn test_missing_palette_falls_back_to_default() {
        let e = entry(None);
        assert_eq!(resolve_theme(Some(&e), false, true), default_theme());
        assert_eq!(resolve_theme(None, false, true), default_theme());
    }

    #[test]
    fn test_dark_toggle_without_palette_applies_overrides() {
        let e = entry(None);
        let light = resolve_theme(Some(&e), false, true);
        let dark = resolve_theme(Some(&e), true, true);
        assert_eq!(light, default_theme());
        assert_eq!(
            dark,
            Theme::new("#0f172a", "#cbd5e1", "#0f172a", "#f1f5f9")
        );
    }

    #[test]
    fn test_resolution_is_stable_across_calls() {
        let e = entry(Some(brand()));
        for dark in [false, true] {
            for entered in [false, true] {
                let first = resolve_theme(Some(&e), dark, entered);
                for _ in 0..3 {
                    assert_eq!(resolve_theme(Some(&e), dark, entered), first);
                }
            }
        }
    }
}
