/// Splits one line of source into tokens on runs of whitespace.
/// A blank line lexes to no tokens at all.
pub fn lex(s: &str) -> Vec<String> {
    s.split_whitespace().map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(lex("ld \t  5"), vec!["ld", "5"]);
        assert_eq!(lex("def   x   &vars + 0"), vec!["def", "x", "&vars", "+", "0"]);
    }

    #[test]
    fn test_leading_whitespace_is_not_a_token() {
        assert_eq!(lex("    print"), vec!["print"]);
    }

    #[test]
    fn test_blank_lines() {
        assert!(lex("").is_empty());
        assert!(lex(" \t \r\n").is_empty());
    }
}
