//! Registered themes and their descriptors.

use std::{fmt, str::FromStr};

use crate::error::InvalidThemeError;

/// Identifier of one of the registered themes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ThemeId {
    #[default]
    Theme1,
    Theme2,
    Theme3,
}

impl ThemeId {
    /// All registered ids in definition order.
    pub const ALL: [Self; 3] = [Self::Theme1, Self::Theme2, Self::Theme3];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Theme1 => "theme1",
            Self::Theme2 => "theme2",
            Self::Theme3 => "theme3",
        }
    }

    /// 1-based position, as shown in the theme selector.
    pub const fn number(self) -> usize {
        match self {
            Self::Theme1 => 1,
            Self::Theme2 => 2,
            Self::Theme3 => 3,
        }
    }

    /// Cycle to the next theme (1 → 2 → 3 → 1).
    pub const fn next(self) -> Self {
        match self {
            Self::Theme1 => Self::Theme2,
            Self::Theme2 => Self::Theme3,
            Self::Theme3 => Self::Theme1,
        }
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeId {
    type Err = InvalidThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| InvalidThemeError(s.to_string()))
    }
}

/// Layout family a theme arranges the listing in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutKind {
    Minimalist,
    Sidebar,
    CardGrid,
}

impl LayoutKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Minimalist => "minimalist",
            Self::Sidebar => "sidebar",
            Self::CardGrid => "card-grid",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Colors {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub accent: &'static str,
    pub border: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fonts {
    pub primary: &'static str,
    pub secondary: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spacing {
    pub small: &'static str,
    pub medium: &'static str,
    pub large: &'static str,
    pub xlarge: &'static str,
}

impl Spacing {
    pub const fn scale(&self) -> [&'static str; 4] {
        [self.small, self.medium, self.large, self.xlarge]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub kind: LayoutKind,
    pub max_width: &'static str,
    pub border_radius: &'static str,
}

/// Full set of visual tokens for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeDescriptor {
    pub name: &'static str,
    pub colors: Colors,
    pub fonts: Fonts,
    pub spacing: Spacing,
    pub layout: Layout,
}

static MINIMALIST: ThemeDescriptor = ThemeDescriptor {
    name: "Minimalist",
    colors: Colors {
        primary: "#2c3e50",
        secondary: "#34495e",
        background: "#ffffff",
        surface: "#f8f9fa",
        text: "#2c3e50",
        text_secondary: "#7f8c8d",
        accent: "#3498db",
        border: "#e9ecef",
    },
    fonts: Fonts {
        primary: "'Poppins', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif",
        secondary: "'Open Sans', sans-serif",
    },
    spacing: Spacing {
        small: "0.5rem",
        medium: "1rem",
        large: "2rem",
        xlarge: "4rem",
    },
    layout: Layout {
        kind: LayoutKind::Minimalist,
        max_width: "1200px",
        border_radius: "8px",
    },
};

static DARK_SIDEBAR: ThemeDescriptor = ThemeDescriptor {
    name: "Dark Sidebar",
    colors: Colors {
        primary: "#ffffff",
        secondary: "#2d2d2d",
        background: "#121212",
        surface: "#1e1e1e",
        text: "#ffffff",
        text_secondary: "#b0b0b0",
        accent: "#bb86fc",
        border: "#333333",
    },
    fonts: Fonts {
        primary: "'Merriweather', Georgia, serif",
        secondary: "'Source Serif Pro', serif",
    },
    spacing: Spacing {
        small: "0.75rem",
        medium: "1.5rem",
        large: "3rem",
        xlarge: "6rem",
    },
    layout: Layout {
        kind: LayoutKind::Sidebar,
        max_width: "1400px",
        border_radius: "12px",
    },
};

static COLORFUL_CARDS: ThemeDescriptor = ThemeDescriptor {
    name: "Colorful Cards",
    colors: Colors {
        primary: "#ff6b6b",
        secondary: "#4ecdc4",
        background: "#f7f1e3",
        surface: "#ffffff",
        text: "#2d3436",
        text_secondary: "#636e72",
        accent: "#fd79a8",
        border: "#ffeaa7",
    },
    fonts: Fonts {
        primary: "'Fredoka One', cursive",
        secondary: "'Comic Neue', cursive",
    },
    spacing: Spacing {
        small: "0.25rem",
        medium: "0.75rem",
        large: "1.5rem",
        xlarge: "3rem",
    },
    layout: Layout {
        kind: LayoutKind::CardGrid,
        max_width: "1600px",
        border_radius: "20px",
    },
};

/// Descriptor for a registered theme. Total over `ThemeId`.
pub const fn lookup(id: ThemeId) -> &'static ThemeDescriptor {
    match id {
        ThemeId::Theme1 => &MINIMALIST,
        ThemeId::Theme2 => &DARK_SIDEBAR,
        ThemeId::Theme3 => &COLORFUL_CARDS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{Length, Rgb};

    #[test]
    fn every_theme_has_a_known_layout_and_four_spacings() {
        for id in ThemeId::ALL {
            let descriptor = lookup(id);
            assert!(matches!(
                descriptor.layout.kind,
                LayoutKind::Minimalist | LayoutKind::Sidebar | LayoutKind::CardGrid
            ));
            assert_eq!(descriptor.spacing.scale().len(), 4);
        }
    }

    #[test]
    fn every_token_parses() {
        for id in ThemeId::ALL {
            let d = lookup(id);
            let c = d.colors;
            for token in [
                c.primary,
                c.secondary,
                c.background,
                c.surface,
                c.text,
                c.text_secondary,
                c.accent,
                c.border,
            ] {
                assert!(Rgb::parse(token).is_some(), "{id}: bad color {token}");
            }
            for token in d.spacing.scale() {
                assert!(Length::parse(token).is_some(), "{id}: bad spacing {token}");
            }
            assert!(Length::parse(d.layout.max_width).is_some());
            assert!(Length::parse(d.layout.border_radius).is_some());
        }
    }

    #[test]
    fn layouts_are_distinct_per_theme() {
        assert_eq!(lookup(ThemeId::Theme1).layout.kind, LayoutKind::Minimalist);
        assert_eq!(lookup(ThemeId::Theme2).layout.kind, LayoutKind::Sidebar);
        assert_eq!(lookup(ThemeId::Theme3).layout.kind, LayoutKind::CardGrid);
    }

    #[test]
    fn ids_round_trip_through_text() {
        for id in ThemeId::ALL {
            assert_eq!(id.as_str().parse::<ThemeId>(), Ok(id));
        }
        assert_eq!(
            "Theme1".parse::<ThemeId>(),
            Err(InvalidThemeError("Theme1".to_string()))
        );
    }

    #[test]
    fn default_is_first_defined() {
        assert_eq!(ThemeId::default(), ThemeId::ALL[0]);
        assert_eq!(ThemeId::Theme3.next(), ThemeId::Theme1);
    }
}
