//! The generated `iconMap` lookup table.
//!
//! The table lives in `constants/imagePaths.ts` as a single declaration:
//!
//! ```text
//! export const iconMap: Record<string, ImagePaths> = {
//!   // Token icons will be added here
//!   "BTC": {
//!     lightMode: baseImgUrlToken("BTC"),
//!     darkMode: baseImgUrlToken("BTC")
//!   },
//!
//!   // Wallet icons will be added here
//!   // System icons will be added here
//!   "Jito": {
//!     lightMode: baseImgUrlSystem("Jito-lightmode"),
//!     darkMode: baseImgUrlSystem("Jito-darkmode")
//!   }
//! };
//! ```
//!
//! [`IconMapFile::parse`] splits the file into the text before the body, the
//! parsed groups and the text from the closing brace on. Only the body is ever
//! regenerated; everything around it is written back untouched.

use crate::category::Category;
use crate::special_icons::SpecialIconRegistry;
use crate::style::Style;
use crate::syntax::{self, expression, line_comment, quoted, ws};
use nom::{
    branch::alt,
    bytes::complete::{tag, take_till1},
    character::complete::{char, multispace0, multispace1},
    combinator::{map, opt, recognize},
    multi::many0,
    sequence::{preceded, terminated, tuple},
    IResult,
};

const DECLARATION_NAME: &str = "iconMap";

/// Header written by the scaffolder
pub const DECLARATION_HEADER: &str = "export const iconMap: Record<string, ImagePaths> = {";

/// Root URL constant the per-category helpers build on
pub const BASE_URL_CONSTANT: &str = "baseImgUrl";

/// One icon: its display name and the light/dark lookup expressions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconEntry {
    pub name: String,
    pub light_mode: String,
    pub dark_mode: String,
}

impl IconEntry {
    /// Entry for a newly added icon.
    ///
    /// Special icons point at `-lightmode` / `-darkmode` artwork; every other
    /// icon uses the same artwork for both modes.
    pub fn for_icon(category: Category, name: &str, registry: &SpecialIconRegistry) -> Self {
        let helper = category.helper();
        let (light_mode, dark_mode) = if registry.is_special(category, name) {
            (
                format!("{helper}(\"{name}-lightmode\")"),
                format!("{helper}(\"{name}-darkmode\")"),
            )
        } else {
            let expr = format!("{helper}(\"{name}\")");
            (expr.clone(), expr)
        };

        Self {
            name: name.to_string(),
            light_mode,
            dark_mode,
        }
    }
}

/// Icon entries partitioned into the token, wallet and system groups
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconGroups {
    tokens: Vec<IconEntry>,
    wallets: Vec<IconEntry>,
    systems: Vec<IconEntry>,
}

impl IconGroups {
    pub fn group(&self, category: Category) -> &[IconEntry] {
        match category {
            Category::Token => &self.tokens,
            Category::Wallet => &self.wallets,
            Category::System => &self.systems,
        }
    }

    fn group_mut(&mut self, category: Category) -> &mut Vec<IconEntry> {
        match category {
            Category::Token => &mut self.tokens,
            Category::Wallet => &mut self.wallets,
            Category::System => &mut self.systems,
        }
    }

    /// Group holding `name`, if any
    pub fn find(&self, name: &str) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|category| self.group(*category).iter().any(|e| e.name == name))
    }

    /// Insert into `category` and re-sort that group by name.
    ///
    /// Returns false without changing anything if the name is already used
    /// in any group, since map keys are shared by all categories.
    pub fn insert(&mut self, category: Category, entry: IconEntry) -> bool {
        if self.find(&entry.name).is_some() {
            return false;
        }
        let group = self.group_mut(category);
        group.push(entry);
        group.sort_by(|a, b| a.name.cmp(&b.name));
        true
    }

    /// Remove `name` from the `category` group. Returns false if it is not there.
    pub fn remove(&mut self, category: Category, name: &str) -> bool {
        let group = self.group_mut(category);
        let before = group.len();
        group.retain(|e| e.name != name);
        group.len() != before
    }

    pub fn len(&self) -> usize {
        self.tokens.len() + self.wallets.len() + self.systems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A parsed `imagePaths.ts`
#[derive(Debug, Clone)]
pub struct IconMapFile {
    head: String,
    groups: IconGroups,
    tail: String,
    style: Style,
}

impl IconMapFile {
    /// Parse the lookup table out of a generated file.
    ///
    /// Fails with a human-readable reason if the declaration is missing,
    /// duplicated, unterminated, contains something other than comments and
    /// entries, or holds an entry that calls no known image helper.
    pub fn parse(source: &str) -> Result<Self, String> {
        let headers = syntax::find_all(source, declaration_header);
        let body_start = match headers.as_slice() {
            [only] => only.end,
            [] => {
                return Err(format!(
                    "no `export const {DECLARATION_NAME} = {{` declaration found"
                ))
            }
            [_, second, ..] => {
                return Err(format!(
                    "more than one `{DECLARATION_NAME}` declaration (another at line {})",
                    syntax::line_number(source, second.start)
                ))
            }
        };

        let (rest, items) = body(&source[body_start..]).map_err(|e| {
            let offset = body_start + syntax::error_offset(&source[body_start..], &e);
            format!(
                "could not read `{DECLARATION_NAME}` at line {}",
                syntax::line_number(source, offset)
            )
        })?;

        let body_end = source.len() - rest.len();
        if rest.is_empty() {
            return Err(format!("`{DECLARATION_NAME}` is never closed"));
        }
        if !rest.starts_with('}') {
            return Err(format!(
                "unexpected content in `{DECLARATION_NAME}` at line {}",
                syntax::line_number(source, body_end)
            ));
        }

        let body_text = &source[body_start..body_end];
        let style = Style::detect(source, body_text, |line| {
            line.starts_with('"') || line.starts_with('\'')
        });

        let mut groups = IconGroups::default();
        for item in items {
            let Item::Entry(raw) = item else { continue };
            let category = Category::from_expression(raw.light_mode).ok_or_else(|| {
                format!(
                    "entry \"{}\" does not call {}, {} or {}",
                    raw.name,
                    Category::Token.helper(),
                    Category::Wallet.helper(),
                    Category::System.helper()
                )
            })?;
            groups.group_mut(category).push(IconEntry {
                name: raw.name.to_string(),
                light_mode: raw.light_mode.to_string(),
                dark_mode: raw.dark_mode.to_string(),
            });
        }

        tracing::debug!(
            tokens = groups.tokens.len(),
            wallets = groups.wallets.len(),
            systems = groups.systems.len(),
            indent = ?style.indent,
            "parsed icon map"
        );

        Ok(Self {
            head: source[..body_start].to_string(),
            groups,
            tail: source[body_end..].to_string(),
            style,
        })
    }

    pub fn groups(&self) -> &IconGroups {
        &self.groups
    }

    pub fn groups_mut(&mut self) -> &mut IconGroups {
        &mut self.groups
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Full file text with a regenerated body
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.head.len() + self.tail.len() + 256);
        out.push_str(&self.head);
        out.push_str(&render_body(&self.groups, &self.style));
        out.push_str(&self.tail);
        out
    }
}

/// Declaration with three empty groups, as written by `init`
pub fn empty_declaration(style: &Style) -> String {
    format!(
        "{DECLARATION_HEADER}{}}};",
        render_body(&IconGroups::default(), style)
    )
}

/// Regenerate the body between the declaration braces.
///
/// Each group opens with its placeholder comment, entries are sorted as
/// stored, every entry but the last one in the whole table carries a trailing
/// comma and a blank line follows each non-empty token or wallet group.
pub fn render_body(groups: &IconGroups, style: &Style) -> String {
    let Style { indent, newline } = style;
    let total = groups.len();
    let mut written = 0;
    let mut out = String::from(*newline);

    for category in Category::ALL {
        out.push_str(indent);
        out.push_str(category.placeholder());
        out.push_str(newline);

        let entries = groups.group(category);
        for entry in entries {
            written += 1;
            out.push_str(&format!(
                "{indent}\"{name}\": {{{newline}\
                 {indent}{indent}lightMode: {light},{newline}\
                 {indent}{indent}darkMode: {dark}{newline}\
                 {indent}}}",
                name = entry.name,
                light = entry.light_mode,
                dark = entry.dark_mode,
            ));
            if written < total {
                out.push(',');
            }
            out.push_str(newline);
        }

        if !entries.is_empty() && category != Category::System {
            out.push_str(newline);
        }
    }

    out
}

/// The `baseImgUrl` constant and the three per-category helpers
pub fn helper_definitions(base_url: &str, newline: &str) -> String {
    let mut out = format!("export const {BASE_URL_CONSTANT} = \"{base_url}\";{newline}");
    for category in Category::ALL {
        out.push_str(&helper_definition(category));
        out.push_str(newline);
    }
    out
}

fn helper_definition(category: Category) -> String {
    let param = category.helper_param();
    format!(
        "export const {helper} = ({param}: string) => `${{{BASE_URL_CONSTANT}}}/{segment}/${{{param}}}.png`;",
        helper = category.helper(),
        segment = category.image_segment(),
    )
}

/// Point the image helpers at `base_url`, leaving the lookup table alone.
///
/// Each existing single-line helper definition is replaced in place. If none
/// is found the whole helper block is inserted above the `iconMap`
/// declaration. Returns the new text and how many definitions were replaced.
pub fn replace_helper_definitions(source: &str, base_url: &str) -> Result<(String, usize), String> {
    let newline = if source.contains("\r\n") { "\r\n" } else { "\n" };

    let mut replacements: Vec<(std::ops::Range<usize>, String)> = Vec::new();
    let base = syntax::find_all(source, const_definition(BASE_URL_CONSTANT));
    if let Some(found) = base.first() {
        replacements.push((
            definition_span(source, found.start),
            format!("export const {BASE_URL_CONSTANT} = \"{base_url}\";"),
        ));
    }
    for category in Category::ALL {
        if let Some(found) = syntax::find_all(source, const_definition(category.helper())).first() {
            replacements.push((
                definition_span(source, found.start),
                helper_definition(category),
            ));
        }
    }

    if replacements.is_empty() {
        let header = syntax::find_first(source, declaration_header)
            .ok_or_else(|| format!("no `{DECLARATION_NAME}` declaration found"))?;
        let mut out = String::with_capacity(source.len() + 512);
        out.push_str(&source[..header.start]);
        out.push_str(&helper_definitions(base_url, newline));
        out.push_str(newline);
        out.push_str(&source[header.start..]);
        return Ok((out, 0));
    }

    replacements.sort_by_key(|(span, _)| span.start);
    let count = replacements.len();
    let mut out = String::with_capacity(source.len() + 128);
    let mut cursor = 0;
    for (span, text) in replacements {
        out.push_str(&source[cursor..span.start]);
        out.push_str(&text);
        cursor = span.end;
    }
    out.push_str(&source[cursor..]);
    Ok((out, count))
}

/// Span of the definition starting at `start`, through its terminating `;`.
///
/// Definitions may be wrapped over several lines. Without a `;` before the
/// next unindented line the definition is taken to end with its first line.
fn definition_span(source: &str, start: usize) -> std::ops::Range<usize> {
    let rest = &source[start..];
    let next_statement = rest
        .match_indices('\n')
        .map(|(idx, _)| idx)
        .find(|&idx| rest[idx + 1..].starts_with(|c: char| !c.is_whitespace()));

    match (syntax::statement_end(rest), next_statement) {
        (Some(end), Some(next)) if end > next => line_span(source, start),
        (Some(end), _) => start..start + end,
        (None, _) => line_span(source, start),
    }
}

/// Span from `start` to the end of its line, excluding the line ending
fn line_span(source: &str, start: usize) -> std::ops::Range<usize> {
    let end = source[start..]
        .find('\n')
        .map_or(source.len(), |i| start + i);
    let end = if source[..end].ends_with('\r') { end - 1 } else { end };
    start..end
}

enum Item<'a> {
    Comment,
    Entry(RawEntry<'a>),
}

struct RawEntry<'a> {
    name: &'a str,
    light_mode: &'a str,
    dark_mode: &'a str,
}

/// `export const iconMap[: T] = {`
fn declaration_header(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        tag("export"),
        multispace1,
        tag("const"),
        multispace1,
        tag(DECLARATION_NAME),
        multispace0,
        opt(preceded(
            char(':'),
            take_till1(|c: char| c == '=' || c == ';' || c == '{'),
        )),
        char('='),
        multispace0,
        char('{'),
    )))(input)
}

/// `export const <name> =`
fn const_definition<'a>(name: &'static str) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str> {
    recognize(tuple((
        tag("export"),
        multispace1,
        tag("const"),
        multispace1,
        tag(name),
        multispace0,
        opt(preceded(char(':'), take_till1(|c: char| c == '=' || c == ';'))),
        char('='),
    )))
}

fn body(input: &str) -> IResult<&str, Vec<Item<'_>>> {
    terminated(
        many0(ws(alt((
            map(line_comment, |_| Item::Comment),
            map(entry, Item::Entry),
        )))),
        multispace0,
    )(input)
}

/// `"NAME": { lightMode: EXPR, darkMode: EXPR }` with optional trailing commas
fn entry(input: &str) -> IResult<&str, RawEntry<'_>> {
    let (input, name) = alt((quoted, syntax::name))(input)?;
    let (input, _) = tuple((ws(char(':')), ws(char('{'))))(input)?;
    let (input, light_mode) = field("lightMode")(input)?;
    let (input, _) = ws(char(','))(input)?;
    let (input, dark_mode) = field("darkMode")(input)?;
    let (input, _) = opt(ws(char(',')))(input)?;
    let (input, _) = ws(char('}'))(input)?;
    let (input, _) = opt(ws(char(',')))(input)?;

    Ok((
        input,
        RawEntry {
            name,
            light_mode,
            dark_mode,
        },
    ))
}

fn field<'a>(key: &'static str) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str> {
    preceded(
        tuple((multispace0, tag(key), multispace0, char(':'), multispace0)),
        expression,
    )
}
