use anyhow::{bail, Context, Result};
use encoding_rs::Encoding;

// 青空文庫などの古いテキストは Shift_JIS のことが多い
pub fn decode(bytes: &[u8], label: &str) -> Result<String> {
    let encoding = Encoding::for_label(label.as_bytes())
        .with_context(|| format!("Unknown encoding: {}", label))?;

    let (text, actual, had_errors) = encoding.decode(bytes);
    if had_errors {
        bail!("Input is not valid {}", actual.name());
    }

    Ok(text.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_shift_jis() {
        let (bytes, _, _) = encoding_rs::SHIFT_JIS.encode("二億五千万");
        assert_eq!(decode(&bytes, "shift_jis").unwrap(), "二億五千万");
    }

    #[test]
    fn strips_utf8_bom() {
        let bytes = "\u{feff}十五".as_bytes();
        assert_eq!(decode(bytes, "utf-8").unwrap(), "十五");
    }

    #[test]
    fn rejects_unknown_label_and_broken_input() {
        assert!(decode(b"", "no-such-encoding").is_err());
        assert!(decode(&[0x80, 0x81], "utf-8").is_err());
    }
}
