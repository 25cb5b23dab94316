// translitua/librussian/src/tables.rs
//
// Lowercase source tables for the Russian schemes. Uppercase entries are
// derived by `translit_core::SchemeBuilder`.

use phf::{phf_map, Map};

/// Simplified table in the style of the `transliterate` package.
pub static SIMPLE_MAIN: Map<char, &str> = phf_map! {
    'а' => "a",
    'б' => "b",
    'в' => "v",
    'г' => "g",
    'д' => "d",
    'е' => "e",
    'ё' => "e",
    'ж' => "zh",
    'з' => "z",
    'и' => "i",
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
    'ц' => "ts",
    'ч' => "ch",
    'ш' => "sh",
    'щ' => "sch",
    'ъ' => "'",
    'ы' => "y",
    'ь' => "'",
    'э' => "e",
    'ю' => "ju",
    'я' => "ja",
};

/// GOST 52535.1-2006, also used for international passports from 2010.
pub static GOST2006_MAIN: Map<char, &str> = phf_map! {
    'а' => "a",
    'б' => "b",
    'в' => "v",
    'г' => "g",
    'д' => "d",
    'е' => "e",
    'ё' => "e",
    'ж' => "zh",
    'з' => "z",
    'и' => "i",
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
    'ц' => "tc",
    'ч' => "ch",
    'ш' => "sh",
    'щ' => "shch",
    'ъ' => "",
    'ы' => "y",
    'ь' => "",
    'э' => "e",
    'ю' => "iu",
    'я' => "ia",
};

/// ICAO Doc 9303, used for international passports from 2013 and by the
/// Ministry of Foreign Affairs order No. 4271 (2016).
pub static ICAO_MAIN: Map<char, &str> = phf_map! {
    'а' => "a",
    'б' => "b",
    'в' => "v",
    'г' => "g",
    'д' => "d",
    'е' => "e",
    'ё' => "e",
    'ж' => "zh",
    'з' => "z",
    'и' => "i",
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
    'ъ' => "ie",
    'ы' => "y",
    'ь' => "",
    'э' => "e",
    'ю' => "iu",
    'я' => "ia",
};

/// Telegraph convention.
pub static TELEGRAM_MAIN: Map<char, &str> = phf_map! {
    'а' => "a",
    'б' => "b",
    'в' => "v",
    'г' => "g",
    'д' => "d",
    'е' => "e",
    'ё' => "e",
    'ж' => "j",
    'з' => "z",
    'и' => "i",
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
    'х' => "h",
    'ц' => "c",
    'ч' => "ch",
    'ш' => "sh",
    'щ' => "sc",
    'ъ' => "",
    'ы' => "y",
    'ь' => "",
    'э' => "e",
    'ю' => "iu",
    'я' => "ia",
};

/// International passports, 1997. Shared by the reduced variant.
pub static PASSPORT1997_MAIN: Map<char, &str> = phf_map! {
    'а' => "a",
    'б' => "b",
    'в' => "v",
    'г' => "g",
    'д' => "d",
    'е' => "e",
    'ё' => "e",
    'ж' => "zh",
    'з' => "z",
    'и' => "i",
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
    'ъ' => "'",
    'ы' => "y",
    'ь' => "",
    'э' => "e",
    'ю' => "yu",
    'я' => "ya",
};

/// Driver licenses.
pub static DRIVER_LICENSE_MAIN: Map<char, &str> = phf_map! {
    'а' => "a",
    'б' => "b",
    'в' => "v",
    'г' => "g",
    'д' => "d",
    'е' => "e",
    'ё' => "ye",
    'ж' => "zh",
    'з' => "z",
    'и' => "i",
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
    'ъ' => "'",
    'ы' => "y",
    'ь' => "'",
    'э' => "e",
    'ю' => "yu",
    'я' => "ya",
};

/// ISO 9:1995 / GOST 7.79-2000, system B (ASCII only).
pub static ISO9_B_MAIN: Map<char, &str> = phf_map! {
    'а' => "a",
    'б' => "b",
    'в' => "v",
    'г' => "g",
    'д' => "d",
    'е' => "e",
    'ё' => "yo",
    'ж' => "zh",
    'з' => "z",
    'и' => "i",
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
    'ц' => "cz",
    'ч' => "ch",
    'ш' => "sh",
    'щ' => "shh",
    'ъ' => "''",
    'ы' => "y'",
    'ь' => "'",
    'э' => "e'",
    'ю' => "yu",
    'я' => "ya",
};

/// ISO 9:1995 / GOST 7.79-2000, system A (one letter per letter, diacritics).
pub static ISO9_A_MAIN: Map<char, &str> = phf_map! {
    'а' => "a",
    'б' => "b",
    'в' => "v",
    'г' => "g",
    'д' => "d",
    'е' => "e",
    'ё' => "ë",
    'ж' => "ž",
    'з' => "z",
    'и' => "i",
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
    'ъ' => "″",
    'ы' => "y",
    'ь' => "′",
    'э' => "è",
    'ю' => "û",
    'я' => "â",
};

/// ISO/R 9 (1968), GOST 16876-71 table 2, CMEA 1362-78, UN (1987).
pub static ISOR9_TABLE2_MAIN: Map<char, &str> = phf_map! {
    'а' => "a",
    'б' => "b",
    'в' => "v",
    'г' => "g",
    'д' => "d",
    'е' => "e",
    'ё' => "jo",
    'ж' => "zh",
    'з' => "z",
    'и' => "i",
    'й' => "jj",
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
    'ъ' => "″",
    'ы' => "y",
    'ь' => "′",
    'э' => "eh",
    'ю' => "ju",
    'я' => "ja",
};

/// A soft sign before е/ё is kept as an apostrophe followed by "ye".
pub static PASSPORT1997_SPECIAL_CASES: Map<&str, &str> = phf_map! {
    "ье" => "'ye",
    "ьё" => "'ye",
};

/// As [`PASSPORT1997_SPECIAL_CASES`], plus the endings "ый" and "ий" shortened
/// to a single "y".
pub static PASSPORT1997_REDUCED_SPECIAL_CASES: Map<&str, &str> = phf_map! {
    "ье" => "'ye",
    "ьё" => "'ye",
    "ый" => "y",
    "ий" => "y",
};

/// е and ё after ь/ъ read "ye"/"yo"; ё after ж, ч, ш, щ reads "e"; и after ь
/// reads "yi".
pub static DRIVER_LICENSE_SPECIAL_CASES: Map<&str, &str> = phf_map! {
    "ье" => "'ye",
    "ъе" => "'ye",
    "ьё" => "'yo",
    "ъё" => "'yo",
    "чё" => "che",
    "шё" => "she",
    "щё" => "shche",
    "жё" => "zhe",
    "ьи" => "'yi",
};

/// ц is "c" before е, и, ы, й and the iotated vowels, "cz" elsewhere.
pub static ISO9_B_SPECIAL_CASES: Map<&str, &str> = phf_map! {
    "це" => "ce",
    "цэ" => "ce'",
    "ци" => "ci",
    "цё" => "cyo",
    "цы" => "cy'",
    "цю" => "cyu",
    "ця" => "cya",
    "цй" => "cj",
};

/// е and ё at the start of a word read "ye"/"yo".
pub static DRIVER_LICENSE_FIRST_CHARACTERS: Map<char, &str> = phf_map! {
    'е' => "ye",
    'ё' => "yo",
};
