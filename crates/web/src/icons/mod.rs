// =============================================================================
// CS:GO Pro Web - Icon Resolver
// =============================================================================
// Table of Contents:
// 1. Glyph Types
// 2. Resolve
// 3. Tests
// =============================================================================
// Maps symbolic icon names to vector glyphs. Resolution never fails: unknown
// names get the help glyph.
// =============================================================================

pub mod catalog;

// -----------------------------------------------------------------------------
// 1. Glyph Types
// -----------------------------------------------------------------------------

/// One SVG primitive on a 24x24 stroked canvas.
#[derive(Debug, PartialEq)]
pub enum Shape {
    Path(&'static str),
    Circle { cx: f32, cy: f32, r: f32 },
    Line { x1: f32, y1: f32, x2: f32, y2: f32 },
    Polyline(&'static str),
    Polygon(&'static str),
    Rect { x: f32, y: f32, width: f32, height: f32, rx: f32 },
}

/// A named vector icon.
#[derive(Debug, PartialEq)]
pub struct Glyph {
    pub name: &'static str,
    pub shapes: &'static [Shape],
}

impl Glyph {
    pub fn is_fallback(&self) -> bool {
        std::ptr::eq(self, fallback())
    }
}

// -----------------------------------------------------------------------------
// 2. Resolve
// -----------------------------------------------------------------------------

/// The glyph returned for names missing from the catalog.
pub fn fallback() -> &'static Glyph {
    &catalog::HELP_CIRCLE
}

/// Resolve `name` to a glyph.
///
/// Accepts kebab-case ("map-pin") and PascalCase ("MapPin") names, ignoring
/// ASCII case.
pub fn resolve(name: &str) -> &'static Glyph {
    let key = normalize(name);
    catalog::GLYPHS
        .iter()
        .copied()
        .find(|glyph| glyph.name == key)
        .unwrap_or_else(fallback)
}

/// Lowercase kebab-case form of an icon name.
fn normalize(name: &str) -> String {
    let mut key = String::with_capacity(name.len() + 4);
    let mut prev_lower_or_digit = false;
    for c in name.trim().chars() {
        if c == '_' || c == ' ' {
            key.push('-');
            prev_lower_or_digit = false;
        } else if c.is_ascii_uppercase() {
            if prev_lower_or_digit {
                key.push('-');
            }
            key.push(c.to_ascii_lowercase());
            prev_lower_or_digit = false;
        } else {
            key.push(c);
            prev_lower_or_digit = c.is_ascii_lowercase() || c.is_ascii_digit();
        }
    }
    key
}

// -----------------------------------------------------------------------------
// 3. Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_names_fall_back() {
        for name in ["", "not-an-icon", "crosshairs", "🔥", "trophy!"] {
            assert!(resolve(name).is_fallback(), "{name} should fall back");
            assert_eq!(resolve(name).name, "help-circle");
        }
    }

    #[test]
    fn test_known_names_are_idempotent() {
        for glyph in catalog::GLYPHS {
            let first = resolve(glyph.name);
            let second = resolve(glyph.name);
            assert!(std::ptr::eq(first, second));
            assert!(std::ptr::eq(first, *glyph));
        }
    }

    #[test]
    fn test_name_forms() {
        assert_eq!(resolve("MapPin").name, "map-pin");
        assert_eq!(resolve("map-pin").name, "map-pin");
        assert_eq!(resolve("CHEVRON-DOWN").name, "chevron-down");
        assert_eq!(resolve("HelpCircle").name, "help-circle");
        assert!(!resolve("Trophy").is_fallback());
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("ArrowRight"), "arrow-right");
        assert_eq!(normalize("arrow_right"), "arrow-right");
        assert_eq!(normalize(" zap "), "zap");
    }

    #[test]
    fn test_catalog_names_unique() {
        let mut names: Vec<&str> = catalog::GLYPHS.iter().map(|g| g.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), catalog::GLYPHS.len());
    }
}
