//! Display icon for a movie, chosen from keywords in its name.

use phf::phf_ordered_map;

/// Fallback when no keyword matches.
pub const DEFAULT_ICON: &str = "🎬";

/// Lower-case name keyword → icon. First match in table order wins.
static ICONS: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "prison" => "🔒",
    "family" => "👨‍👩‍👦",
    "hero" => "🦸",
    "pulp" => "📚",
    "journey" => "🧭",
    "dream" => "💭",
    "virtual" => "💻",
    "wise" => "🕴️",
    "ring" => "💍",
    "space" => "🚀",
    "club" => "🥊",
    "gold" => "🏴‍☠️",
    "treasure" => "🏴‍☠️",
};

pub fn movie_icon(name: &str) -> &'static str {
    let name = name.to_lowercase();
    ICONS
        .entries()
        .find(|(keyword, _)| name.contains(*keyword))
        .map(|(_, icon)| *icon)
        .unwrap_or(DEFAULT_ICON)
}
