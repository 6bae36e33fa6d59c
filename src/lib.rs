// 漢数字 (一般的な書き方・位取り記数法・大字) を数値に変換する
//
// - 単位は 十 百 千 万 億 兆 まで
// - 大字は 壱 弐 参 拾 零 のみ
// - 小数・負数・漢数字以外の文字を含む文字列は扱わない

pub mod converter;
pub mod daiji;
pub mod error;
pub mod numerals;
pub mod parser;
pub mod report;
pub mod utility;
pub mod validator;

pub use converter::{to_number, to_number_from_value, to_number_with, ConvertOptions, MAX_LENGTH};
pub use error::{Error, ErrorKind, NotSupportedError, ParseError, Result, ValidationError};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
