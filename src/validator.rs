use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    error::ValidationError,
    numerals::{DIGIT_CHARS, HUNDRED, MYRIAD_UNIT_CHARS, ONE, TEN, THOUSAND},
};

// 一般的な書き方から外れた漢数字を弾く
// 大字を置換する前の文字列に対して適用する
struct Rule {
    violated: fn(&str) -> bool,
    error: ValidationError,
}

// 先に一致したものを返す
const RULES: [Rule; 5] = [
    Rule {
        violated: str::is_empty,
        error: ValidationError::EmptyInput,
    },
    Rule {
        violated: has_redundant_one,
        error: ValidationError::RedundantOne,
    },
    Rule {
        violated: lacks_one_before_thousand,
        error: ValidationError::MissingOneBeforeThousand,
    },
    Rule {
        violated: has_multiple_digits_in_place,
        error: ValidationError::MultipleDigitsInPlace,
    },
    Rule {
        violated: has_adjacent_myriad_units,
        error: ValidationError::AdjacentMyriadUnits,
    },
];

pub fn validate(s: &str) -> Result<(), ValidationError> {
    match RULES.iter().find(|rule| (rule.violated)(s)) {
        Some(rule) => Err(rule.error.clone()),
        None => Ok(()),
    }
}

// 百 と 十 の前には 一 を付けない (一百, 一十)
fn has_redundant_one(s: &str) -> bool {
    static REGEX_REDUNDANT_ONE: Lazy<Regex> =
        Lazy::new(|| Regex::new(&format!("{}[{}{}]", ONE, HUNDRED, TEN)).unwrap());
    REGEX_REDUNDANT_ONE.is_match(s)
}

// 千万, 億千万 のように 千 が万進の単位の直前にあるときは 一千 と書く
fn lacks_one_before_thousand(s: &str) -> bool {
    static REGEX_BARE_THOUSAND: Lazy<Regex> = Lazy::new(|| {
        Regex::new(&format!(
            "([^{}]|^){}[{}]",
            DIGIT_CHARS.as_str(),
            THOUSAND,
            MYRIAD_UNIT_CHARS.as_str()
        ))
        .unwrap()
    });
    REGEX_BARE_THOUSAND.is_match(s)
}

// 十, 百, 千 の係数は 1 桁 (六七百 は不可)
fn has_multiple_digits_in_place(s: &str) -> bool {
    static REGEX_MULTIPLE_DIGITS: Lazy<Regex> = Lazy::new(|| {
        Regex::new(&format!(
            "[{}]{{2,}}[{}{}{}]",
            DIGIT_CHARS.as_str(),
            TEN,
            HUNDRED,
            THOUSAND
        ))
        .unwrap()
    });
    REGEX_MULTIPLE_DIGITS.is_match(s)
}

// 兆億万 のような連続と，先頭の 万 億 兆
fn has_adjacent_myriad_units(s: &str) -> bool {
    static REGEX_ADJACENT_MYRIAD_UNITS: Lazy<Regex> = Lazy::new(|| {
        let units = MYRIAD_UNIT_CHARS.as_str();
        Regex::new(&format!("[{}]{{2,}}|^[{}]", units, units)).unwrap()
    });
    REGEX_ADJACENT_MYRIAD_UNITS.is_match(s)
}
