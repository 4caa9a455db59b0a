use super::Error;
use crate::error;

/// Extracts the offset from an address expression of the form
/// `&<base>+<offset>`, e.g. `&vars+20` is `20`.
///
/// The expression may be embedded in other text, as in `(&vars+20)`.
/// When several candidates appear the rightmost wins. The base is
/// only checked for shape and then discarded.
pub fn address(s: &str) -> Result<i32, Error> {
    for (start, _) in s.match_indices('&').rev() {
        if let Some(digits) = offset(&s[start + 1..]) {
            return match digits.parse::<i32>() {
                Ok(n) => Ok(n),
                Err(_) => Err(error!(Overflow; s)),
            };
        }
    }
    Err(error!(BadAddress; s))
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn offset(s: &str) -> Option<&str> {
    let base_len: usize = s
        .chars()
        .take_while(|c| is_word(*c))
        .map(char::len_utf8)
        .sum();
    if base_len == 0 {
        return None;
    }
    let rest = s[base_len..].strip_prefix('+')?;
    let digits_len = rest.chars().take_while(char::is_ascii_digit).count();
    if digits_len == 0 {
        None
    } else {
        Some(&rest[..digits_len])
    }
}
