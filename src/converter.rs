use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{
    daiji::translate_daiji,
    error::{Error, NotSupportedError, ParseError, Result},
    numerals::{is_supported, REGEX_SUPPORTED, ZERO},
    parser::parse,
    validator::validate,
};

// 悪意のある長い入力を避けるための上限 (文字数)
pub const MAX_LENGTH: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConvertOptions {
    // 一十, 千万 のような一般的でない書き方を弾く
    pub enable_validation: bool,
    // 壱 弐 参 拾 零 を受け付ける
    pub accept_daiji: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            enable_validation: true,
            accept_daiji: true,
        }
    }
}

/// Converts a Japanese numeral such as `二億五千万` into its value.
pub fn to_number(s: &str) -> Result<u64> {
    to_number_with(s, &ConvertOptions::default())
}

pub fn to_number_with(s: &str, options: &ConvertOptions) -> Result<u64> {
    // 〇 だけは単位の解析を通さない
    if s.len() == ZERO.len_utf8() && s.starts_with(ZERO) {
        return Ok(0);
    }

    let len = s.chars().count();
    if MAX_LENGTH < len {
        debug!(len, "rejected long input");
        return Err(NotSupportedError::TooLong {
            input: s.to_owned(),
            len,
            max: MAX_LENGTH,
        }
        .into());
    }

    if options.enable_validation {
        if let Err(e) = validate(s) {
            debug!(input = s, "rejected by validation");
            return Err(e.into());
        }
        trace!(input = s, "validated");
    }

    let s = if options.accept_daiji {
        translate_daiji(s)
    } else {
        s.to_owned()
    };

    if !is_supported(&s) {
        debug!(input = %s, "rejected unsupported characters");
        return Err(NotSupportedError::UnsupportedCharacters {
            pattern: REGEX_SUPPORTED.as_str().to_owned(),
            input: s,
        }
        .into());
    }

    match parse(&s) {
        Ok(value) => {
            trace!(input = %s, value, "parsed");
            Ok(value)
        }
        // 値の範囲は文法の問題ではない
        Err(ParseError::Overflow { .. }) => Err(NotSupportedError::Overflow { input: s }.into()),
        Err(e) => Err(e.into()),
    }
}

/// Converts a dynamically typed value; only JSON strings are numerals.
pub fn to_number_from_value(value: &serde_json::Value, options: &ConvertOptions) -> Result<u64> {
    match value {
        serde_json::Value::String(s) => to_number_with(s, options),
        value => Err(Error::TypeMismatch(value.to_string())),
    }
}
