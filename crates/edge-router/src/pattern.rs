//! Path patterns for page routes and routing rules.
//!
//! Two syntaxes are accepted and may be mixed:
//!
//! ```text
//! /blog/[slug]          /blog/:slug           one segment
//! /docs/[...path]       /docs/:path+          one or more segments
//! /shop/[[...path]]     /shop/:path*          zero or more segments
//!                       /:locale(en|fr)/x     one segment from a set
//! ```
//!
//! Literal segments match case-sensitively; set members case-insensitively.

use std::collections::BTreeMap;

/// Parameters captured by a successful match. Catch-alls are joined with `/`.
pub type Params = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
    OneOf { name: String, options: Vec<String> },
    CatchAll { name: String, optional: bool },
}

impl Segment {
    fn parse(raw: &str) -> Self {
        if let Some(name) = raw
            .strip_prefix("[[...")
            .and_then(|s| s.strip_suffix("]]"))
        {
            return Self::CatchAll {
                name: name.to_string(),
                optional: true,
            };
        }
        if let Some(name) = raw.strip_prefix("[...").and_then(|s| s.strip_suffix(']')) {
            return Self::CatchAll {
                name: name.to_string(),
                optional: false,
            };
        }
        if let Some(name) = raw.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
            return Self::Param(name.to_string());
        }
        if let Some(param) = raw.strip_prefix(':') {
            if let Some(name) = param.strip_suffix('*') {
                return Self::CatchAll {
                    name: name.to_string(),
                    optional: true,
                };
            }
            if let Some(name) = param.strip_suffix('+') {
                return Self::CatchAll {
                    name: name.to_string(),
                    optional: false,
                };
            }
            if let Some((name, rest)) = param.split_once('(') {
                if let Some(options) = rest.strip_suffix(')') {
                    return Self::OneOf {
                        name: name.to_string(),
                        options: options.split('|').map(str::to_string).collect(),
                    };
                }
            }
            return Self::Param(param.to_string());
        }
        Self::Literal(raw.to_string())
    }
}

/// A compiled path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    source: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Compile a pattern. Every string is a valid pattern; unknown syntax
    /// is matched literally.
    pub fn parse(source: &str) -> Self {
        Self {
            source: source.to_string(),
            segments: split_segments(source).map(Segment::parse).collect(),
        }
    }

    /// The pattern as written.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether the pattern has any parameter segments.
    pub fn is_dynamic(&self) -> bool {
        self.segments
            .iter()
            .any(|s| !matches!(s, Segment::Literal(_)))
    }

    /// Match a request path, returning captured parameters.
    pub fn matches(&self, path: &str) -> Option<Params> {
        let parts: Vec<&str> = split_segments(path).collect();
        let mut params = Params::new();
        let mut pos = 0;

        for segment in &self.segments {
            match segment {
                Segment::Literal(literal) => {
                    if parts.get(pos) != Some(&literal.as_str()) {
                        return None;
                    }
                    pos += 1;
                }
                Segment::Param(name) => {
                    params.insert(name.clone(), parts.get(pos)?.to_string());
                    pos += 1;
                }
                Segment::OneOf { name, options } => {
                    let value = parts.get(pos)?;
                    if !options.iter().any(|o| o.eq_ignore_ascii_case(value)) {
                        return None;
                    }
                    params.insert(name.clone(), value.to_string());
                    pos += 1;
                }
                Segment::CatchAll { name, optional } => {
                    let rest = &parts[pos.min(parts.len())..];
                    if rest.is_empty() && !optional {
                        return None;
                    }
                    params.insert(name.clone(), rest.join("/"));
                    pos = parts.len();
                }
            }
        }

        (pos == parts.len()).then_some(params)
    }

    /// Ordering key: higher ranks are preferred when several patterns match.
    ///
    /// Patterns without a catch-all beat those with one, then more literal
    /// segments win, then more segments overall.
    pub fn rank(&self) -> (bool, usize, usize) {
        let has_catch_all = self
            .segments
            .iter()
            .any(|s| matches!(s, Segment::CatchAll { .. }));
        let literals = self
            .segments
            .iter()
            .filter(|s| matches!(s, Segment::Literal(_)))
            .count();
        (!has_catch_all, literals, self.segments.len())
    }
}

fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// A destination referenced a parameter its source never captured.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("destination references unknown parameter :{0}")]
pub struct MissingParam(pub String);

/// Substitute `:name` references in a redirect or rewrite destination.
///
/// Modifiers (`*`, `+`) and `(...)` constraints after a name are
/// dropped. A `:` not followed by a letter or `_` (as in `https://` or a
/// port) is kept literally.
pub fn interpolate(destination: &str, params: &Params) -> Result<String, MissingParam> {
    let mut out = String::with_capacity(destination.len());
    let mut chars = destination.char_indices().peekable();

    while let Some((_, c)) = chars.next() {
        let starts_name = c == ':'
            && chars
                .peek()
                .is_some_and(|(_, next)| next.is_ascii_alphabetic() || *next == '_');
        if !starts_name {
            out.push(c);
            continue;
        }

        let mut name = String::new();
        while let Some((_, next)) = chars.peek() {
            if next.is_ascii_alphanumeric() || *next == '_' {
                name.push(*next);
                chars.next();
            } else {
                break;
            }
        }
        if matches!(chars.peek(), Some((_, '*' | '+'))) {
            chars.next();
        }
        if matches!(chars.peek(), Some((_, '('))) {
            for (_, skipped) in chars.by_ref() {
                if skipped == ')' {
                    break;
                }
            }
        }

        let value = params.get(&name).ok_or_else(|| MissingParam(name.clone()))?;
        out.push_str(value);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_match() {
        let pattern = PathPattern::parse("/about/team");
        assert!(pattern.matches("/about/team").is_some());
        assert!(pattern.matches("/about/team/").is_some());
        assert!(pattern.matches("/about").is_none());
        assert!(pattern.matches("/About/team").is_none());
        assert!(!pattern.is_dynamic());
    }

    #[test]
    fn test_root_match() {
        let pattern = PathPattern::parse("/");
        assert!(pattern.matches("/").is_some());
        assert!(pattern.matches("/x").is_none());
    }

    #[test]
    fn test_bracket_param() {
        let pattern = PathPattern::parse("/blog/[slug]");
        let params = pattern.matches("/blog/post").unwrap();

        assert_eq!(params["slug"], "post");
        assert!(pattern.matches("/blog").is_none());
        assert!(pattern.matches("/blog/a/b").is_none());
        assert!(pattern.is_dynamic());
    }

    #[test]
    fn test_catch_all() {
        let required = PathPattern::parse("/docs/[...path]");
        assert_eq!(required.matches("/docs/a/b/c").unwrap()["path"], "a/b/c");
        assert!(required.matches("/docs").is_none());

        let optional = PathPattern::parse("/shop/[[...path]]");
        assert_eq!(optional.matches("/shop").unwrap()["path"], "");
        assert_eq!(optional.matches("/shop/x").unwrap()["path"], "x");
    }

    #[test]
    fn test_colon_syntax() {
        let pattern = PathPattern::parse("/:path*");
        assert_eq!(pattern.matches("/").unwrap()["path"], "");
        assert_eq!(pattern.matches("/a/b").unwrap()["path"], "a/b");

        let plus = PathPattern::parse("/files/:rest+");
        assert!(plus.matches("/files").is_none());

        let single = PathPattern::parse("/user/:id");
        assert_eq!(single.matches("/user/7").unwrap()["id"], "7");
    }

    #[test]
    fn test_one_of() {
        let pattern = PathPattern::parse("/:locale(en|fr)/about");
        assert_eq!(pattern.matches("/fr/about").unwrap()["locale"], "fr");
        assert!(pattern.matches("/FR/about").is_some());
        assert!(pattern.matches("/de/about").is_none());
    }

    #[test]
    fn test_rank_prefers_specific() {
        let slug = PathPattern::parse("/blog/[slug]");
        let catch_all = PathPattern::parse("/[...all]");
        let param_only = PathPattern::parse("/[section]/[slug]");

        assert!(slug.rank() > catch_all.rank());
        assert!(slug.rank() > param_only.rank());
        assert!(param_only.rank() > catch_all.rank());
    }

    #[test]
    fn test_interpolate() {
        let params = PathPattern::parse("/old/:slug/:rest*")
            .matches("/old/post/a/b")
            .unwrap();

        assert_eq!(
            interpolate("/new/:slug/:rest*", &params).unwrap(),
            "/new/post/a/b"
        );
        assert_eq!(
            interpolate("https://example.com:8080/:slug?x=1", &params).unwrap(),
            "https://example.com:8080/post?x=1"
        );
    }

    #[test]
    fn test_interpolate_missing_param() {
        let err = interpolate("/x/:missing", &Params::new()).unwrap_err();
        assert_eq!(err, MissingParam("missing".into()));
    }
}
