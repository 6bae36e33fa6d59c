use once_cell::sync::Lazy;
use regex::Regex;

// 数字 〇 から 九 まで，値の順に並べる
pub const DIGITS: [(char, u64); 10] = [
    ('〇', 0),
    ('一', 1),
    ('二', 2),
    ('三', 3),
    ('四', 4),
    ('五', 5),
    ('六', 6),
    ('七', 7),
    ('八', 8),
    ('九', 9),
];

pub const ZERO: char = '〇';
pub const ONE: char = '一';

// 位の大きい順
// この順序で再帰するので並べ替えてはいけない
pub const UNITS: [(char, u64); 6] = [
    ('兆', 1_000_000_000_000),
    ('億', 100_000_000),
    ('万', 10_000),
    ('千', 1_000),
    ('百', 100),
    ('十', 10),
];

pub const THOUSAND: char = '千';
pub const HUNDRED: char = '百';
pub const TEN: char = '十';

// 万進の単位 (兆, 億, 万) は UNITS の先頭 3 つ
pub const MYRIAD_UNIT_COUNT: usize = 3;

// 万進の単位の左側は千の位から解析する
pub const THOUSAND_INDEX: usize = MYRIAD_UNIT_COUNT;

// 単位をすべて使い切った後は位取り記数法として読む
pub const POSITIONAL_INDEX: usize = UNITS.len();

pub fn digit_value(c: char) -> Option<u64> {
    DIGITS.iter().find(|&&(d, _)| d == c).map(|&(_, v)| v)
}

pub static DIGIT_CHARS: Lazy<String> = Lazy::new(|| DIGITS.iter().map(|&(d, _)| d).collect());

pub static UNIT_CHARS: Lazy<String> = Lazy::new(|| UNITS.iter().map(|&(u, _)| u).collect());

pub static MYRIAD_UNIT_CHARS: Lazy<String> = Lazy::new(|| {
    UNITS[..MYRIAD_UNIT_COUNT]
        .iter()
        .map(|&(u, _)| u)
        .collect()
});

pub static SUPPORTED_CHARS: Lazy<String> =
    Lazy::new(|| format!("{}{}", UNIT_CHARS.as_str(), DIGIT_CHARS.as_str()));

pub static REGEX_SUPPORTED: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("^[{}]+$", SUPPORTED_CHARS.as_str())).unwrap());

pub fn is_supported(s: &str) -> bool {
    REGEX_SUPPORTED.is_match(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn units_are_in_descending_order() {
        for pair in UNITS.windows(2) {
            assert!(pair[0].1 > pair[1].1);
        }
    }

    #[test]
    fn myriad_units_are_the_three_largest() {
        assert_eq!(MYRIAD_UNIT_CHARS.as_str(), "兆億万");
        assert_eq!(UNITS[THOUSAND_INDEX].0, THOUSAND);
    }

    #[test]
    fn digit_values() {
        assert_eq!(digit_value('〇'), Some(0));
        assert_eq!(digit_value('九'), Some(9));
        assert_eq!(digit_value('十'), None);
        assert_eq!(digit_value('壱'), None);
    }

    #[test]
    fn supported_characters() {
        assert!(is_supported("九千七兆千九百九十二億"));
        assert!(!is_supported(""));
        assert!(!is_supported("第百十六回"));
        // 大字は置換後にしか受け付けない
        assert!(!is_supported("弐拾"));
    }
}
