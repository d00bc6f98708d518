//! Static country-to-flag-emoji lookup for the results table.

/// Resolves a participant country to its flag emoji.
///
/// Unknown countries resolve to an empty string; the results table renders
/// without a flag rather than failing.
pub fn flag_emoji(country: &str) -> &'static str {
    match country {
        "Albania" => "\u{1F1E6}\u{1F1F1}",
        "Armenia" => "\u{1F1E6}\u{1F1F2}",
        "Australia" => "\u{1F1E6}\u{1F1FA}",
        "Austria" => "\u{1F1E6}\u{1F1F9}",
        "Azerbaijan" => "\u{1F1E6}\u{1F1FF}",
        "Belgium" => "\u{1F1E7}\u{1F1EA}",
        "Croatia" => "\u{1F1ED}\u{1F1F7}",
        "Cyprus" => "\u{1F1E8}\u{1F1FE}",
        "Czechia" => "\u{1F1E8}\u{1F1FF}",
        "Denmark" => "\u{1F1E9}\u{1F1F0}",
        "Estonia" => "\u{1F1EA}\u{1F1EA}",
        "Finland" => "\u{1F1EB}\u{1F1EE}",
        "France" => "\u{1F1EB}\u{1F1F7}",
        "Georgia" => "\u{1F1EC}\u{1F1EA}",
        "Germany" => "\u{1F1E9}\u{1F1EA}",
        "Greece" => "\u{1F1EC}\u{1F1F7}",
        "Iceland" => "\u{1F1EE}\u{1F1F8}",
        "Ireland" => "\u{1F1EE}\u{1F1EA}",
        "Israel" => "\u{1F1EE}\u{1F1F1}",
        "Italy" => "\u{1F1EE}\u{1F1F9}",
        "Latvia" => "\u{1F1F1}\u{1F1FB}",
        "Lithuania" => "\u{1F1F1}\u{1F1F9}",
        "Luxembourg" => "\u{1F1F1}\u{1F1FA}",
        "Malta" => "\u{1F1F2}\u{1F1F9}",
        "Moldova" => "\u{1F1F2}\u{1F1E9}",
        "Montenegro" => "\u{1F1F2}\u{1F1EA}",
        "Netherlands" => "\u{1F1F3}\u{1F1F1}",
        "North Macedonia" => "\u{1F1F2}\u{1F1F0}",
        "Norway" => "\u{1F1F3}\u{1F1F4}",
        "Poland" => "\u{1F1F5}\u{1F1F1}",
        "Portugal" => "\u{1F1F5}\u{1F1F9}",
        "Romania" => "\u{1F1F7}\u{1F1F4}",
        "San Marino" => "\u{1F1F8}\u{1F1F2}",
        "Serbia" => "\u{1F1F7}\u{1F1F8}",
        "Slovenia" => "\u{1F1F8}\u{1F1EE}",
        "Spain" => "\u{1F1EA}\u{1F1F8}",
        "Sweden" => "\u{1F1F8}\u{1F1EA}",
        "Switzerland" => "\u{1F1E8}\u{1F1ED}",
        "Ukraine" => "\u{1F1FA}\u{1F1E6}",
        "United Kingdom" => "\u{1F1EC}\u{1F1E7}",
        _ => "",
    }
}
