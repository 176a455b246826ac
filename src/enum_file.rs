//! Generated per-category enums such as `types/TokenSymbol.ts`:
//!
//! ```text
//! export enum TokenSymbol {
//!   BTC = "BTC",
//!   ETH = "ETH"
//! }
//! ```

use crate::category::Category;
use crate::style::Style;
use crate::syntax::{self, line_comment, quoted, ws};
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, multispace0, multispace1},
    combinator::{map, opt, recognize},
    multi::many0,
    sequence::{terminated, tuple},
    IResult,
};

/// A parsed enum file for one category
#[derive(Debug, Clone)]
pub struct EnumFile {
    category: Category,
    head: String,
    members: Vec<String>,
    tail: String,
    style: Style,
}

impl EnumFile {
    pub fn parse(source: &str, category: Category) -> Result<Self, String> {
        let enum_name = category.enum_name();
        let headers = syntax::find_all(source, declaration_header(enum_name));
        let body_start = match headers.as_slice() {
            [only] => only.end,
            [] => return Err(format!("no `export enum {enum_name} {{` declaration found")),
            [_, second, ..] => {
                return Err(format!(
                    "more than one `{enum_name}` declaration (another at line {})",
                    syntax::line_number(source, second.start)
                ))
            }
        };

        let (rest, members) = body(&source[body_start..]).map_err(|e| {
            let offset = body_start + syntax::error_offset(&source[body_start..], &e);
            format!(
                "could not read `{enum_name}` at line {}",
                syntax::line_number(source, offset)
            )
        })?;

        let body_end = source.len() - rest.len();
        if rest.is_empty() {
            return Err(format!("`{enum_name}` is never closed"));
        }
        if !rest.starts_with('}') {
            return Err(format!(
                "unexpected content in `{enum_name}` at line {}",
                syntax::line_number(source, body_end)
            ));
        }

        let style = Style::detect(source, &source[body_start..body_end], |line| {
            line.starts_with(syntax::is_name_char) || line.starts_with('"')
        });

        Ok(Self {
            category,
            head: source[..body_start].to_string(),
            members: members.into_iter().flatten().map(str::to_string).collect(),
            tail: source[body_end..].to_string(),
            style,
        })
    }

    pub fn members(&self) -> &[String] {
        &self.members
    }

    pub fn contains(&self, name: &str) -> bool {
        self.members.iter().any(|m| m == name)
    }

    /// Add a member and re-sort. Returns false if it was already present.
    pub fn insert(&mut self, name: &str) -> bool {
        if self.contains(name) {
            return false;
        }
        self.members.push(name.to_string());
        self.members.sort();
        true
    }

    /// Returns false if the member was not present
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.members.len();
        self.members.retain(|m| m != name);
        self.members.len() != before
    }

    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.head.len() + self.tail.len() + 128);
        out.push_str(&self.head);
        out.push_str(&render_body(self.category, &self.members, &self.style));
        out.push_str(&self.tail);
        out
    }
}

/// Empty enum declaration, as written by `init`
pub fn empty_declaration(category: Category, style: &Style) -> String {
    format!(
        "export enum {} {{{}}}",
        category.enum_name(),
        render_body(category, &[], style)
    )
}

fn render_body(category: Category, members: &[String], style: &Style) -> String {
    let Style { indent, newline } = style;
    let mut out = String::from(*newline);

    for (i, member) in members.iter().enumerate() {
        if syntax::is_identifier(member) {
            out.push_str(&format!("{indent}{member} = \"{member}\""));
        } else {
            out.push_str(&format!("{indent}\"{member}\" = \"{member}\""));
        }
        if i + 1 < members.len() {
            out.push(',');
        }
        out.push_str(newline);
    }

    if members.is_empty() {
        let sample = category.sample_name();
        out.push_str(&format!("{indent}// Example: {sample} = \"{sample}\"{newline}"));
    }

    out
}

/// `export enum <Name> {`
fn declaration_header<'a>(
    enum_name: &'static str,
) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str> {
    recognize(tuple((
        tag("export"),
        multispace1,
        opt(terminated(tag("const"), multispace1)),
        tag("enum"),
        multispace1,
        tag(enum_name),
        multispace0,
        char('{'),
    )))
}

/// Members in order; comments yield `None`
fn body(input: &str) -> IResult<&str, Vec<Option<&str>>> {
    terminated(
        many0(ws(alt((map(line_comment, |_| None), map(member, Some))))),
        multispace0,
    )(input)
}

/// `NAME = "NAME"` or `"NAME" = "NAME"` with an optional trailing comma
fn member(input: &str) -> IResult<&str, &str> {
    let (input, name) = alt((quoted, syntax::name))(input)?;
    let (input, _) = tuple((ws(char('=')), ws(quoted)))(input)?;
    let (input, _) = opt(ws(char(',')))(input)?;
    Ok((input, name))
}
