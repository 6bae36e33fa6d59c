use anyhow::{Context, Result};

// 1 行に 1 つの漢数字
// 前後の空白 (全角含む) は取り除き，空行は飛ばす
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(|line| line.to_owned())
        .collect()
}

// JSON の配列として読む
// 文字列以外の要素は変換時に型の不一致として報告する
pub fn parse_json_values(text: &str) -> Result<Vec<serde_json::Value>> {
    serde_json::from_str(text).context("Input is not a JSON array")
}
