//! Best-effort whitelisting of a remote image host in `next.config.*`.
//!
//! Next.js refuses to optimise images from hosts missing in
//! `images.remotePatterns`. The edits here are plain text insertions at the
//! first recognizable spot; when no spot is found the caller gets the snippet
//! to paste by hand instead.

use crate::syntax;
use nom::{
    branch::alt,
    bytes::complete::{tag, take_till1},
    character::complete::{char, multispace0, multispace1},
    combinator::{opt, recognize},
    sequence::{preceded, tuple},
    IResult,
};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const CANDIDATE_FILES: [&str; 4] = [
    "next.config.js",
    "next.config.mjs",
    "next.config.cjs",
    "next.config.ts",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemotePatternOutcome {
    /// No config existed; a minimal `next.config.js` was written
    Created(PathBuf),
    AlreadyPresent(PathBuf),
    Patched(PathBuf),
    /// The file could not be edited safely; `snippet` must be added by hand
    ManualInstructions { path: PathBuf, snippet: String },
}

/// First existing `next.config.*` in `project_root`
pub fn find_config(project_root: &Path) -> Option<PathBuf> {
    CANDIDATE_FILES
        .iter()
        .map(|name| project_root.join(name))
        .find(|path| path.is_file())
}

/// Whether the config text already mentions `host`
pub fn whitelists_host(content: &str, host: &str) -> bool {
    content.contains(host)
}

/// Make sure `host` is listed in `images.remotePatterns`.
///
/// Occurrences of any `legacy_hosts` are rewritten to `host` first.
pub fn ensure_remote_pattern(
    project_root: &Path,
    host: &str,
    legacy_hosts: &[&str],
) -> io::Result<RemotePatternOutcome> {
    let Some(path) = find_config(project_root) else {
        let path = project_root.join(CANDIDATE_FILES[0]);
        fs::write(&path, fresh_config(host))?;
        return Ok(RemotePatternOutcome::Created(path));
    };

    let content = fs::read_to_string(&path)?;
    if whitelists_host(&content, host) {
        return Ok(RemotePatternOutcome::AlreadyPresent(path));
    }

    match patch(&content, host, legacy_hosts) {
        Some(patched) => {
            fs::write(&path, patched)?;
            Ok(RemotePatternOutcome::Patched(path))
        }
        None => Ok(RemotePatternOutcome::ManualInstructions {
            path,
            snippet: pattern_entry(host).trim().to_string(),
        }),
    }
}

fn pattern_entry(host: &str) -> String {
    format!("      {{ protocol: 'https', hostname: '{host}' }}")
}

fn images_block(host: &str) -> String {
    format!(
        "\n  images: {{\n    remotePatterns: [\n{},\n    ],\n  }},",
        pattern_entry(host)
    )
}

fn fresh_config(host: &str) -> String {
    format!(
        "/** @type {{import('next').NextConfig}} */\nconst nextConfig = {{{}\n}};\n\nmodule.exports = nextConfig;\n",
        images_block(host)
    )
}

/// Text with `host` whitelisted, or `None` if no safe insertion point exists
fn patch(content: &str, host: &str, legacy_hosts: &[&str]) -> Option<String> {
    if let Some(legacy) = legacy_hosts.iter().find(|h| content.contains(**h)) {
        return Some(content.replace(*legacy, host));
    }

    if let Some(found) = syntax::find_first(content, remote_patterns_open) {
        return append_to_array(content, found.end, host);
    }

    if let Some(found) = syntax::find_first(content, images_open) {
        let insertion = format!(
            "\n    remotePatterns: [\n{},\n    ],",
            pattern_entry(host)
        );
        return Some(insert_at(content, found.end, &insertion));
    }

    let object = syntax::find_first(content, module_exports_open)
        .or_else(|| syntax::find_first(content, export_default_open))
        .or_else(|| syntax::find_first(content, const_object_open))?;
    Some(insert_at(content, object.end, &images_block(host)))
}

/// Insert an entry before the `]` matching the `[` that ends at `open_end`
fn append_to_array(content: &str, open_end: usize, host: &str) -> Option<String> {
    let mut depth = 1usize;
    let mut close = None;
    for (idx, c) in content[open_end..].char_indices() {
        match c {
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth == 0 {
                    close = Some(open_end + idx);
                    break;
                }
            }
            _ => {}
        }
    }
    let close = close?;

    let before = content[..close].trim_end();
    let inside = content[open_end..close].trim();
    let comma = if inside.is_empty() || inside.ends_with(',') {
        ""
    } else {
        ","
    };
    let line_start = content[..close].rfind('\n').map_or(0, |i| i + 1);
    let closing_indent = &content[line_start..close];
    let closing_indent = if closing_indent.trim().is_empty() {
        closing_indent
    } else {
        ""
    };

    Some(format!(
        "{before}{comma}\n{},\n{closing_indent}{}",
        pattern_entry(host),
        &content[close..]
    ))
}

fn insert_at(content: &str, at: usize, text: &str) -> String {
    let mut out = String::with_capacity(content.len() + text.len());
    out.push_str(&content[..at]);
    out.push_str(text);
    out.push_str(&content[at..]);
    out
}

fn remote_patterns_open(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        tag("remotePatterns"),
        multispace0,
        char(':'),
        multispace0,
        char('['),
    )))(input)
}

fn images_open(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        tag("images"),
        multispace0,
        char(':'),
        multispace0,
        char('{'),
    )))(input)
}

fn module_exports_open(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        tag("module.exports"),
        multispace0,
        char('='),
        multispace0,
        char('{'),
    )))(input)
}

fn export_default_open(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        tag("export"),
        multispace1,
        tag("default"),
        multispace0,
        char('{'),
    )))(input)
}

/// `const name[: Type] = {`
fn const_object_open(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        alt((tag("const"), tag("let"), tag("var"))),
        multispace1,
        syntax::name,
        multispace0,
        opt(preceded(char(':'), take_till1(|c: char| c == '=' || c == ';'))),
        char('='),
        multispace0,
        char('{'),
    )))(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    const HOST: &str = "cdn.example.com";

    #[test]
    fn test_creates_config_when_missing() {
        let tmp = TempDir::new().unwrap();
        let outcome = ensure_remote_pattern(tmp.path(), HOST, &[]).unwrap();
        let path = tmp.path().join("next.config.js");
        assert_eq!(outcome, RemotePatternOutcome::Created(path.clone()));

        let content = fs::read_to_string(&path).unwrap();
        assert!(whitelists_host(&content, HOST));
        assert_eq!(
            ensure_remote_pattern(tmp.path(), HOST, &[]).unwrap(),
            RemotePatternOutcome::AlreadyPresent(path)
        );
    }

    #[test]
    fn test_appends_to_existing_array() {
        let content = "module.exports = {\n  images: {\n    remotePatterns: [\n      { protocol: 'https', hostname: 'a.com' }\n    ],\n  },\n};\n";
        let patched = patch(content, HOST, &[]).unwrap();
        assert_eq!(
            patched,
            "module.exports = {\n  images: {\n    remotePatterns: [\n      { protocol: 'https', hostname: 'a.com' },\n      { protocol: 'https', hostname: 'cdn.example.com' },\n    ],\n  },\n};\n"
        );
    }

    #[test]
    fn test_injects_into_images_block() {
        let content = "export default {\n  images: {\n    unoptimized: true,\n  },\n};\n";
        let patched = patch(content, HOST, &[]).unwrap();
        assert!(patched.contains("images: {\n    remotePatterns: [\n      { protocol: 'https', hostname: 'cdn.example.com' },\n    ],\n    unoptimized: true,"));
    }

    #[test]
    fn test_injects_images_into_typed_const() {
        let content = "import type { NextConfig } from \"next\";\n\nconst nextConfig: NextConfig = {\n  reactStrictMode: true,\n};\n\nexport default nextConfig;\n";
        let patched = patch(content, HOST, &[]).unwrap();
        assert!(patched.contains("const nextConfig: NextConfig = {\n  images: {"));
        assert!(whitelists_host(&patched, HOST));
    }

    #[test]
    fn test_replaces_legacy_host() {
        let content = "hostname: 'firebasestorage.googleapis.com'";
        let patched = patch(content, HOST, &["firebasestorage.googleapis.com"]).unwrap();
        assert_eq!(patched, "hostname: 'cdn.example.com'");
    }

    #[test]
    fn test_gives_up_on_unrecognized_shape() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("next.config.mjs"),
            "export default withPlugins(base);\n",
        )
        .unwrap();
        let outcome = ensure_remote_pattern(tmp.path(), HOST, &[]).unwrap();
        assert!(matches!(
            outcome,
            RemotePatternOutcome::ManualInstructions { ref snippet, .. } if snippet.contains(HOST)
        ));
    }
}
