use crate::{
    error::ParseError,
    numerals::{digit_value, POSITIONAL_INDEX, THOUSAND_INDEX, UNITS, ZERO},
};

// 数字と単位のみからなる文字列を数値にする
// 文字種の検査は呼び出し側で済ませておくこと
pub fn parse(s: &str) -> Result<u64, ParseError> {
    parse_from(s, 0)
}

// UNITS[index] 以下の単位だけが現れるものとして解析する
// 大きい単位で分割し，左側を係数，右側を残りとして再帰する
fn parse_from(s: &str, index: usize) -> Result<u64, ParseError> {
    if s.is_empty() {
        return Ok(0);
    }

    if POSITIONAL_INDEX <= index {
        return parse_positional(s);
    }

    let (unit, magnitude) = UNITS[index];

    let splitted: Vec<&str> = s.split(unit).collect();
    match splitted[..] {
        // 単位なし
        [rest] => parse_from(rest, index + 1),

        [left, right] => {
            let coefficient = if left.is_empty() {
                // 十, 百, 千 は係数 1 を省略できる
                1
            } else if index < THOUSAND_INDEX {
                // 兆, 億, 万 の左には千以下の単位しか現れない
                parse_from(left, THOUSAND_INDEX)?
            } else {
                parse_from(left, POSITIONAL_INDEX)?
            };
            let rest = parse_from(right, index + 1)?;

            coefficient
                .checked_mul(magnitude)
                .and_then(|v| v.checked_add(rest))
                .ok_or_else(|| ParseError::Overflow {
                    sequence: s.to_owned(),
                })
        }

        _ => Err(ParseError::RepeatedUnit {
            unit,
            sequence: s.to_owned(),
        }),
    }
}

// 二〇一七 のような位取り記数法
fn parse_positional(s: &str) -> Result<u64, ParseError> {
    if s.starts_with(ZERO) {
        return Err(ParseError::LeadingZero {
            sequence: s.to_owned(),
        });
    }

    let mut ret: u64 = 0;
    for c in s.chars() {
        // ここに単位が残っているのは，同じ単位が部分列の中で 2 回以上現れたとき
        let d = digit_value(c).ok_or_else(|| ParseError::UnsupportedSequence {
            sequence: s.to_owned(),
        })?;

        ret = ret
            .checked_mul(10)
            .and_then(|v| v.checked_add(d))
            .ok_or_else(|| ParseError::Overflow {
                sequence: s.to_owned(),
            })?;
    }
    Ok(ret)
}
