//! Built-in weekday name tables.
//!
//! Five locales, indexed 0–4 in lockstep with [`LANGUAGE_CODES`]. Day
//! indices run 0–6 starting on Sunday. Long names are 3 characters (wide
//! displays), short names 2 (4-segment displays).

/// Weekday abbreviations for one language.
#[derive(Debug, Clone, Copy)]
pub struct DayNames {
    pub long_names: [&'static str; 7],
    pub short_names: [&'static str; 7],
}

/// The built-in locale table. Order must match [`LANGUAGE_CODES`].
pub const LANGUAGES: [DayNames; 5] = [
    // English
    DayNames {
        long_names: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
        short_names: ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"],
    },
    // French
    DayNames {
        long_names: ["Dim", "Lun", "Mar", "Mer", "Jeu", "Ven", "Sam"],
        short_names: ["Di", "Lu", "Ma", "Me", "Je", "Ve", "Sa"],
    },
    // German
    DayNames {
        long_names: ["Son", "Mon", "Die", "Mit", "Don", "Fre", "Sam"],
        short_names: ["So", "Mo", "Di", "Mi", "Do", "Fr", "Sa"],
    },
    // Portuguese
    DayNames {
        long_names: ["Dom", "Seg", "Ter", "Qua", "Qui", "Sex", "Sab"],
        short_names: ["Do", "Se", "Te", "Qa", "Qu", "Se", "Sa"],
    },
    // Spanish
    DayNames {
        long_names: ["Dom", "Lun", "Mar", "Mie", "Jue", "Vie", "Sab"],
        short_names: ["Do", "Lu", "Ma", "Mi", "Ju", "Vi", "Sa"],
    },
];

/// Language codes, same order as [`LANGUAGES`].
pub const LANGUAGE_CODES: [&str; 5] = ["en", "fr", "de", "pt", "es"];

/// Table index for a language code; unknown or empty codes are English.
pub fn language_index(code: &str) -> usize {
    LANGUAGE_CODES.iter().position(|c| *c == code).unwrap_or(0)
}

/// Language code for a table index; out-of-range indices are English.
pub fn language_code(index: i32) -> &'static str {
    if index >= 0 && (index as usize) < LANGUAGE_CODES.len() {
        LANGUAGE_CODES[index as usize]
    } else {
        "en"
    }
}

/// Day-name table for an index, clamped to English when out of range.
pub fn day_names(index: usize) -> &'static DayNames {
    LANGUAGES.get(index).unwrap_or(&LANGUAGES[0])
}
