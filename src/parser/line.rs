use std::mem::take;

/// Split one source line into trimmed fields.
///
/// A field may be wrapped in double quotes; inside quotes a doubled quote is
/// a literal `"` and the separator does not end the field. An unterminated
/// quote swallows the rest of the line.
pub fn parse_line(line: &str, sep: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes && matches!(chars.peek(), Some('"')) {
                    chars.next(); // doubled quote
                    field.push('"');
                } else {
                    in_quotes = !in_quotes;
                }
            }
            c if c == sep && !in_quotes => {
                fields.push(take(&mut field).trim().to_string());
            }
            _ => field.push(ch),
        }
    }

    fields.push(field.trim().to_string());
    fields
}

/// Split raw file contents into non-blank, trimmed lines. Handles a leading
/// byte-order mark and both line-ending conventions.
pub fn split_lines(raw: &str) -> Vec<&str> {
    raw.split('\n')
        .map(|line| line.trim_start_matches('\u{feff}').trim())
        .filter(|line| !line.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_fields_are_trimmed() {
        assert_eq!(parse_line(" 東京 , 1~49日目 ,Aカード ", ','), vec!["東京", "1~49日目", "Aカード"]);
    }

    #[test]
    fn test_empty_middle_field() {
        assert_eq!(parse_line("東京,,Aカード", ','), vec!["東京", "", "Aカード"]);
    }

    #[test]
    fn test_quoted_separator_and_escaped_quote() {
        assert_eq!(
            parse_line(r#""新宿,西口","期間 ""A""",カード"#, ','),
            vec!["新宿,西口", r#"期間 "A""#, "カード"]
        );
    }

    #[test]
    fn test_unterminated_quote_consumes_rest_of_line() {
        assert_eq!(parse_line(r#"東京,"1日目,Aカード"#, ','), vec!["東京", "1日目,Aカード"]);
    }

    #[test]
    fn test_custom_separator() {
        assert_eq!(parse_line("東京;;Aカード", ';'), vec!["東京", "", "Aカード"]);
        assert_eq!(parse_line("東京,x;;Aカード", ';'), vec!["東京,x", "", "Aカード"]);
    }

    #[test]
    fn test_split_lines_strips_bom_crlf_and_blanks() {
        let raw = "\u{feff}駅名,期間,カード名\r\n\r\n東京,,Aカード\r\n   \n大阪,,Bカード";
        assert_eq!(split_lines(raw), vec!["駅名,期間,カード名", "東京,,Aカード", "大阪,,Bカード"]);
    }

    #[test]
    fn test_split_lines_of_blank_input() {
        assert!(split_lines("").is_empty());
        assert!(split_lines("\r\n \n\u{feff}\n").is_empty());
    }
}
