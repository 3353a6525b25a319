//! Icon set
//!
//! Icons are an enum, so an unknown icon cannot reach the renderer. The
//! glyph family is picked once from the config.

use serde::{Deserialize, Serialize};

/// Glyph family used to draw icons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconSet {
    /// Symbols from the Unicode BMP, single column wide
    #[default]
    Unicode,
    /// Plain ASCII for terminals without symbol fonts
    Ascii,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Icon {
    PlusCircle,
    Search,
    Edit,
    Trash,
    /// Erase-left key, used by Clear
    Delete,
    #[default]
    XCircle,
    ArrowLeft,
    Tag,
    Layers,
}

impl Icon {
    pub fn glyph(self, set: IconSet) -> &'static str {
        match (set, self) {
            (IconSet::Unicode, Icon::PlusCircle) => "⊕",
            (IconSet::Unicode, Icon::Search) => "⌕",
            (IconSet::Unicode, Icon::Edit) => "✎",
            (IconSet::Unicode, Icon::Trash) => "✖",
            (IconSet::Unicode, Icon::Delete) => "⌫",
            (IconSet::Unicode, Icon::XCircle) => "⊗",
            (IconSet::Unicode, Icon::ArrowLeft) => "←",
            (IconSet::Unicode, Icon::Tag) => "◆",
            (IconSet::Unicode, Icon::Layers) => "▤",
            (IconSet::Ascii, Icon::PlusCircle) => "(+)",
            (IconSet::Ascii, Icon::Search) => "(?)",
            (IconSet::Ascii, Icon::Edit) => "(/)",
            (IconSet::Ascii, Icon::Trash) => "(x)",
            (IconSet::Ascii, Icon::Delete) => "<x]",
            (IconSet::Ascii, Icon::XCircle) => "(X)",
            (IconSet::Ascii, Icon::ArrowLeft) => "<-",
            (IconSet::Ascii, Icon::Tag) => "#",
            (IconSet::Ascii, Icon::Layers) => "=",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unicode_width::UnicodeWidthStr;

    const ALL: [Icon; 9] = [
        Icon::PlusCircle,
        Icon::Search,
        Icon::Edit,
        Icon::Trash,
        Icon::Delete,
        Icon::XCircle,
        Icon::ArrowLeft,
        Icon::Tag,
        Icon::Layers,
    ];

    #[test]
    fn test_unicode_glyphs_are_one_column() {
        for icon in ALL {
            assert_eq!(icon.glyph(IconSet::Unicode).width(), 1, "{:?}", icon);
        }
    }

    #[test]
    fn test_ascii_glyphs_are_ascii() {
        for icon in ALL {
            assert!(icon.glyph(IconSet::Ascii).is_ascii(), "{:?}", icon);
        }
    }

    #[test]
    fn test_icon_set_serde_names() {
        let set: IconSet = serde_json::from_str("\"ascii\"").unwrap();
        assert_eq!(set, IconSet::Ascii);
        assert!(serde_json::from_str::<IconSet>("\"emoji\"").is_err());
    }
}
