// translitua/libukrainian/src/tables.rs
//
// Lowercase source tables for the Ukrainian schemes. Uppercase entries are
// derived by `translit_core::SchemeBuilder`, so only explicit exceptions
// (such as "ЗГ") are written in capitals here.

use phf::{phf_map, Map};

/// National system, Cabinet of Ministers resolution No. 55 (2010).
///
/// The soft sign and apostrophes produce nothing and are removed up front
/// (see [`KMU_DELETE`]), so they have no entry here.
pub static KMU_MAIN: Map<char, &str> = phf_map! {
    'а' => "a",
    'б' => "b",
    'в' => "v",
    'г' => "h",
    'ґ' => "g",
    'д' => "d",
    'е' => "e",
    'є' => "ie",
    'ж' => "zh",
    'з' => "z",
    'и' => "y",
    'і' => "i",
    'ї' => "i",
    'й' => "i",
    'к' => "k",
    'л' => "l",
    'м' => "m",
    'н' => "n",
    'о' => "o",
    'п' => "p",
    'р' => "r",
    'с' => "s",
    'т' => "t",
    'у' => "u",
    'ф' => "f",
    'х' => "kh",
    'ц' => "ts",
    'ч' => "ch",
    'ш' => "sh",
    'щ' => "shch",
    'ю' => "iu",
    'я' => "ia",
};

/// Simplified ASCII-only table in the style of the `transliterate` package.
pub static SIMPLE_MAIN: Map<char, &str> = phf_map! {
    'а' => "a",
    'б' => "b",
    'в' => "v",
    'г' => "h",
    'ґ' => "g",
    'д' => "d",
    'е' => "e",
    'є' => "ye",
    'ж' => "zh",
    'з' => "z",
    'и' => "y",
    'і' => "i",
    'ї' => "yi",
    'й' => "j",
    'к' => "k",
    'л' => "l",
    'м' => "m",
    'н' => "n",
    'о' => "o",
    'п' => "p",
    'р' => "r",
    'с' => "s",
    'т' => "t",
    'у' => "u",
    'ф' => "f",
    'х' => "kh",
    'ц' => "ts",
    'ч' => "ch",
    'ш' => "sh",
    'щ' => "shch",
    'ь' => "'",
    'ю' => "ju",
    'я' => "ja",
};

/// Scholarly system (diacritics, `ʹ` for the soft sign).
pub static WWS_MAIN: Map<char, &str> = phf_map! {
    'а' => "a",
    'б' => "b",
    'в' => "v",
    'г' => "h",
    'ґ' => "g",
    'д' => "d",
    'е' => "e",
    'є' => "je",
    'ж' => "ž",
    'з' => "z",
    'и' => "y",
    'і' => "i",
    'ї' => "ji",
    'й' => "j",
    'к' => "k",
    'л' => "l",
    'м' => "m",
    'н' => "n",
    'о' => "o",
    'п' => "p",
    'р' => "r",
    'с' => "s",
    'т' => "t",
    'у' => "u",
    'ф' => "f",
    'х' => "x",
    'ц' => "c",
    'ч' => "č",
    'ш' => "š",
    'щ' => "šč",
    'ь' => "ʹ",
    'ю' => "ju",
    'я' => "ja",
    '\'' => "",
    '\u{2019}' => "",
    '\u{2bc}' => "",
};

/// British standard (BS 2979).
pub static BRITISH_MAIN: Map<char, &str> = phf_map! {
    'а' => "a",
    'б' => "b",
    'в' => "v",
    'г' => "h",
    'ґ' => "g",
    'д' => "d",
    'е' => "e",
    'є' => "ye",
    'ж' => "zh",
    'з' => "z",
    'и' => "ȳ",
    'і' => "i",
    'ї' => "yi",
    'й' => "ĭ",
    'к' => "k",
    'л' => "l",
    'м' => "m",
    'н' => "n",
    'о' => "o",
    'п' => "p",
    'р' => "r",
    'с' => "s",
    'т' => "t",
    'у' => "u",
    'ф' => "f",
    'х' => "kh",
    'ц' => "ts",
    'ч' => "ch",
    'ш' => "sh",
    'щ' => "shch",
    'ь' => "",
    'ю' => "yu",
    'я' => "ya",
    '\'' => "",
    '\u{2019}' => "",
    '\u{2bc}' => "",
};

/// BGN/PCGN system.
pub static BGN_MAIN: Map<char, &str> = phf_map! {
    'а' => "a",
    'б' => "b",
    'в' => "v",
    'г' => "h",
    'ґ' => "g",
    'д' => "d",
    'е' => "e",
    'є' => "ye",
    'ж' => "zh",
    'з' => "z",
    'и' => "y",
    'і' => "i",
    'ї' => "yi",
    'й' => "y",
    'к' => "k",
    'л' => "l",
    'м' => "m",
    'н' => "n",
    'о' => "o",
    'п' => "p",
    'р' => "r",
    'с' => "s",
    'т' => "t",
    'у' => "u",
    'ф' => "f",
    'х' => "kh",
    'ц' => "ts",
    'ч' => "ch",
    'ш' => "sh",
    'щ' => "shch",
    'ь' => "'",
    'ю' => "yu",
    'я' => "ya",
};

/// ISO 9:1995.
pub static ISO9_MAIN: Map<char, &str> = phf_map! {
    'а' => "a",
    'б' => "b",
    'в' => "v",
    'г' => "g",
    'ґ' => "g̀",
    'д' => "d",
    'е' => "e",
    'є' => "ê",
    'ж' => "ž",
    'з' => "z",
    'и' => "i",
    'і' => "ì",
    'ї' => "ï",
    'й' => "j",
    'к' => "k",
    'л' => "l",
    'м' => "m",
    'н' => "n",
    'о' => "o",
    'п' => "p",
    'р' => "r",
    'с' => "s",
    'т' => "t",
    'у' => "u",
    'ф' => "f",
    'х' => "h",
    'ц' => "c",
    'ч' => "č",
    'ш' => "š",
    'щ' => "ŝ",
    'ь' => "′",
    'ю' => "û",
    'я' => "â",
};

/// French-language convention.
pub static FRENCH_MAIN: Map<char, &str> = phf_map! {
    'а' => "a",
    'б' => "b",
    'в' => "v",
    'г' => "h",
    'ґ' => "g",
    'д' => "d",
    'е' => "e",
    'є' => "ie",
    'ж' => "j",
    'з' => "z",
    'и' => "y",
    'і' => "i",
    'ї' => "ï",
    'й' => "y",
    'к' => "k",
    'л' => "l",
    'м' => "m",
    'н' => "n",
    'о' => "o",
    'п' => "p",
    'р' => "r",
    'с' => "s",
    'т' => "t",
    'у' => "ou",
    'ф' => "f",
    'х' => "kh",
    'ц' => "ts",
    'ч' => "tch",
    'ш' => "ch",
    'щ' => "chtch",
    'ь' => "",
    'ю' => "iou",
    'я' => "ia",
    '\'' => "",
    '\u{2019}' => "",
    '\u{2bc}' => "",
};

/// German-language convention (Duden).
pub static GERMAN_MAIN: Map<char, &str> = phf_map! {
    'а' => "a",
    'б' => "b",
    'в' => "w",
    'г' => "h",
    'ґ' => "g",
    'д' => "d",
    'е' => "e",
    'є' => "je",
    'ж' => "sh",
    'з' => "s",
    'и' => "y",
    'і' => "i",
    'ї' => "ji",
    'й' => "j",
    'к' => "k",
    'л' => "l",
    'м' => "m",
    'н' => "n",
    'о' => "o",
    'п' => "p",
    'р' => "r",
    'с' => "s",
    'т' => "t",
    'у' => "u",
    'ф' => "f",
    'х' => "ch",
    'ц' => "z",
    'ч' => "tsch",
    'ш' => "sch",
    'щ' => "schtsch",
    'ь' => "",
    'ю' => "ju",
    'я' => "ja",
    '\'' => "",
    '\u{2019}' => "",
    '\u{2bc}' => "",
};

/// GOST 16876-71 (1971).
pub static GOST1971_MAIN: Map<char, &str> = phf_map! {
    'а' => "a",
    'б' => "b",
    'в' => "v",
    'г' => "g",
    'ґ' => "g",
    'д' => "d",
    'е' => "e",
    'є' => "je",
    'ж' => "zh",
    'з' => "z",
    'и' => "i",
    'і' => "i",
    'ї' => "ji",
    'й' => "j",
    'к' => "k",
    'л' => "l",
    'м' => "m",
    'н' => "n",
    'о' => "o",
    'п' => "p",
    'р' => "r",
    'с' => "s",
    'т' => "t",
    'у' => "u",
    'ф' => "f",
    'х' => "kh",
    'ц' => "c",
    'ч' => "ch",
    'ш' => "sh",
    'щ' => "shh",
    'ь' => "'",
    'ю' => "ju",
    'я' => "ja",
};

/// GOST 16876-71 as revised in 1986. `ґ` had no letter of its own and is
/// rendered as a dash.
pub static GOST1986_MAIN: Map<char, &str> = phf_map! {
    'а' => "a",
    'б' => "b",
    'в' => "v",
    'г' => "g",
    'ґ' => "–",
    'д' => "d",
    'е' => "e",
    'є' => "je",
    'ж' => "ž",
    'з' => "z",
    'и' => "i",
    'і' => "i",
    'ї' => "i",
    'й' => "j",
    'к' => "k",
    'л' => "l",
    'м' => "m",
    'н' => "n",
    'о' => "o",
    'п' => "p",
    'р' => "r",
    'с' => "s",
    'т' => "t",
    'у' => "u",
    'ф' => "f",
    'х' => "h",
    'ц' => "c",
    'ч' => "č",
    'ш' => "š",
    'щ' => "šč",
    'ь' => "'",
    'ю' => "ju",
    'я' => "ja",
    '\'' => "",
    '\u{2019}' => "",
    '\u{2bc}' => "",
};

/// Passport system, 2007 revision.
pub static PASSPORT2007_MAIN: Map<char, &str> = phf_map! {
    'а' => "a",
    'б' => "b",
    'в' => "v",
    'г' => "g",
    'ґ' => "g",
    'д' => "d",
    'е' => "e",
    'є' => "ie",
    'ж' => "zh",
    'з' => "z",
    'и' => "y",
    'і' => "i",
    'ї' => "i",
    'й' => "i",
    'к' => "k",
    'л' => "l",
    'м' => "m",
    'н' => "n",
    'о' => "o",
    'п' => "p",
    'р' => "r",
    'с' => "s",
    'т' => "t",
    'у' => "u",
    'ф' => "f",
    'х' => "kh",
    'ц' => "ts",
    'ч' => "ch",
    'ш' => "sh",
    'щ' => "shch",
    'ь' => "",
    'ю' => "iu",
    'я' => "ia",
    '\'' => "",
    '\u{2019}' => "",
    '\u{2bc}' => "",
};

/// National system, 1996 edition.
pub static NATIONAL1996_MAIN: Map<char, &str> = phf_map! {
    'а' => "a",
    'б' => "b",
    'в' => "v",
    'г' => "h",
    'ґ' => "g",
    'д' => "d",
    'е' => "e",
    'є' => "ie",
    'ж' => "zh",
    'з' => "z",
    'и' => "y",
    'і' => "i",
    'ї' => "i",
    'й' => "i",
    'к' => "k",
    'л' => "l",
    'м' => "m",
    'н' => "n",
    'о' => "o",
    'п' => "p",
    'р' => "r",
    'с' => "s",
    'т' => "t",
    'у' => "u",
    'ф' => "f",
    'х' => "kh",
    'ц' => "ts",
    'ч' => "ch",
    'ш' => "sh",
    'щ' => "sch",
    'ь' => "'",
    'ю' => "iu",
    'я' => "ia",
};

/// Passport system, 2004 alternative variant.
pub static PASSPORT2004_ALT_MAIN: Map<char, &str> = phf_map! {
    'а' => "a",
    'б' => "b",
    'в' => "v",
    'г' => "g",
    'ґ' => "h",
    'д' => "d",
    'е' => "e",
    'є' => "ie",
    'ж' => "j",
    'з' => "z",
    'и' => "y",
    'і' => "i",
    'ї' => "i",
    'й' => "i",
    'к' => "c",
    'л' => "l",
    'м' => "m",
    'н' => "n",
    'о' => "o",
    'п' => "p",
    'р' => "r",
    'с' => "s",
    'т' => "t",
    'у' => "u",
    'ф' => "f",
    'х' => "kh",
    'ц' => "ts",
    'ч' => "ch",
    'ш' => "sh",
    'щ' => "shch",
    'ь' => "'",
    'ю' => "iu",
    'я' => "ia",
};

/// Removed before any substitution in the KMU 2010 system: the soft sign and
/// the three apostrophe code points in use (U+0027, U+2019, U+02BC).
pub static KMU_DELETE: &[char] = &['ь', 'Ь', '\'', '\u{2019}', '\u{2bc}'];

/// "зг" is written "zgh" to keep it apart from "ж" ("zh"). Shared by the
/// national-family schemes.
pub static NATIONAL_SPECIAL_CASES: Map<&str, &str> = phf_map! {
    "зг" => "zgh",
    "ЗГ" => "ZGh",
};

/// Iotated letters take a leading "y" at the start of a word.
pub static NATIONAL_FIRST_CHARACTERS: Map<char, &str> = phf_map! {
    'є' => "ye",
    'ї' => "yi",
    'й' => "y",
    'ю' => "yu",
    'я' => "ya",
};
