//! Small `nom` combinators shared by the generated-file parsers.
//!
//! The generated files are a narrow subset of TypeScript, so these only cover
//! what the generator itself emits plus the whitespace and comment variation a
//! human edit typically introduces.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_till, take_while1},
    character::complete::{char, multispace0, not_line_ending},
    error::{Error, ErrorKind},
    sequence::{delimited, preceded},
    IResult,
};
use std::ops::Range;

/// `// comment` up to, not including, the line ending
pub fn line_comment(input: &str) -> IResult<&str, &str> {
    preceded(tag("//"), not_line_ending)(input)
}

/// A single or double quoted literal on one line, returning its contents
pub fn quoted(input: &str) -> IResult<&str, &str> {
    alt((
        delimited(char('"'), take_till(|c| c == '"' || c == '\n'), char('"')),
        delimited(char('\''), take_till(|c| c == '\'' || c == '\n'), char('\'')),
    ))(input)
}

/// Characters accepted in icon names and enum members
pub fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// Whether `name` can be written as a bare member name. Names starting with a
/// digit, such as `1INCH`, have to be quoted.
pub fn is_identifier(name: &str) -> bool {
    name.chars()
        .next()
        .is_some_and(|c| !c.is_ascii_digit() && is_name_char(c))
        && name.chars().all(is_name_char)
}

pub fn name(input: &str) -> IResult<&str, &str> {
    take_while1(is_name_char)(input)
}

/// Run `inner` after skipping any whitespace, newlines included
pub fn ws<'a, O, F>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    preceded(multispace0, inner)
}

/// Source text of an expression, up to a top-level `,` or `}`.
///
/// Parentheses, brackets and braces must balance and string or template
/// literals are skipped whole, so `f("a,b")` or `` `${x}` `` stay intact.
/// The returned slice has trailing whitespace trimmed; the remaining input
/// starts at the terminator.
pub fn expression(input: &str) -> IResult<&str, &str> {
    match scan_top_level(input, |c| c == ',' || c == '}') {
        Some(idx) if !input[..idx].trim().is_empty() => {
            Ok((&input[idx..], input[..idx].trim_end()))
        }
        _ => Err(nom::Err::Error(Error::new(input, ErrorKind::TakeUntil))),
    }
}

/// Length of a statement up to and including its top-level `;`, with the
/// same balancing rules as [`expression`]
pub fn statement_end(input: &str) -> Option<usize> {
    scan_top_level(input, |c| c == ';').map(|idx| idx + 1)
}

/// Offset of the first character accepted by `stop` outside literals and
/// outside any parentheses, brackets or braces opened in `input`
fn scan_top_level(input: &str, stop: impl Fn(char) -> bool) -> Option<usize> {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (idx, c) in input.char_indices() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }

        match c {
            '"' | '\'' | '`' => quote = Some(c),
            _ if depth == 0 && stop(c) => return Some(idx),
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth = depth.checked_sub(1)?,
            _ => {}
        }
    }

    None
}

/// Whether `prefix` (the start of a line) opens a `//` comment outside any
/// string literal
fn opens_comment(prefix: &str) -> bool {
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut previous = None;

    for c in prefix.chars() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
        } else if matches!(c, '"' | '\'' | '`') {
            quote = Some(c);
        } else if c == '/' && previous == Some('/') {
            return true;
        }
        previous = Some(c);
    }

    false
}

/// Every non-overlapping position where `parser` matches at a word boundary.
///
/// Matches that start after a `//` comment opener on the same line are
/// ignored, so a commented-out declaration is never mistaken for the live
/// one. A `//` inside a string literal, as in `"https://..."`, does not count.
pub fn find_all<'a, O, P>(input: &'a str, mut parser: P) -> Vec<Range<usize>>
where
    P: FnMut(&'a str) -> IResult<&'a str, O>,
{
    let mut found = Vec::new();
    let mut resume = 0;

    for (offset, _) in input.char_indices() {
        if offset < resume {
            continue;
        }
        if input[..offset].chars().next_back().is_some_and(is_name_char) {
            continue;
        }
        let line_start = input[..offset].rfind('\n').map_or(0, |i| i + 1);
        if opens_comment(&input[line_start..offset]) {
            continue;
        }
        if let Ok((rest, _)) = parser(&input[offset..]) {
            let end = input.len() - rest.len();
            found.push(offset..end);
            resume = end;
        }
    }

    found
}

pub fn find_first<'a, O, P>(input: &'a str, parser: P) -> Option<Range<usize>>
where
    P: FnMut(&'a str) -> IResult<&'a str, O>,
{
    find_all(input, parser).into_iter().next()
}

/// 1-based line number of a byte offset
pub fn line_number(source: &str, offset: usize) -> usize {
    source[..offset.min(source.len())].matches('\n').count() + 1
}

/// Byte offset inside `source` where a parser stopped
pub fn error_offset(source: &str, err: &nom::Err<Error<&str>>) -> usize {
    match err {
        nom::Err::Error(e) | nom::Err::Failure(e) => source.len() - e.input.len(),
        nom::Err::Incomplete(_) => source.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expression_stops_at_top_level_comma() {
        let (rest, expr) = expression(r#"baseImgUrlToken("A,B") , darkMode"#).unwrap();
        assert_eq!(expr, r#"baseImgUrlToken("A,B")"#);
        assert_eq!(rest, ", darkMode");
    }

    #[test]
    fn test_expression_skips_template_braces() {
        let (rest, expr) = expression("`${base}/x.png`\n  }").unwrap();
        assert_eq!(expr, "`${base}/x.png`");
        assert_eq!(rest, "}");
    }

    #[test]
    fn test_expression_rejects_empty_and_unbalanced() {
        assert!(expression("  , x").is_err());
        assert!(expression("f(a").is_err());
        assert!(expression("a)").is_err());
    }

    #[test]
    fn test_find_all_respects_word_boundaries_and_comments() {
        let text = "reexport x\n// export y\nexport z";
        let hits = find_all(text, tag("export"));
        assert_eq!(hits, vec![23..29]);
    }

    #[test]
    fn test_find_all_ignores_slashes_inside_strings() {
        let text = "const cdn = \"https://cdn\"; export z // export w";
        let hits = find_all(text, tag("export"));
        assert_eq!(hits, vec![27..33]);
    }

    #[test]
    fn test_statement_end_spans_wrapped_lines() {
        let text = "= (n: string) =>\n  `${base}/a;b/${n}.png`;\nnext;";
        assert_eq!(statement_end(text), Some(text.find(";\nnext").unwrap() + 1));
        assert_eq!(statement_end("= \"x\""), None);
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("BTC"));
        assert!(is_identifier("_x1"));
        assert!(!is_identifier("1INCH"));
        assert!(!is_identifier(""));
    }

    #[test]
    fn test_quoted_and_comment() {
        assert_eq!(quoted(r#""BTC": {"#).unwrap(), (": {", "BTC"));
        assert_eq!(quoted("'ETH'").unwrap(), ("", "ETH"));
        assert_eq!(line_comment("// hi\nnext").unwrap(), ("\nnext", " hi"));
    }

    #[test]
    fn test_line_number() {
        assert_eq!(line_number("a\nb\nc", 0), 1);
        assert_eq!(line_number("a\nb\nc", 4), 3);
    }
}
