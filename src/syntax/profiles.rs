//! Per-language highlight profiles
//!
//! A profile is an ordered list of matchers. Each matcher wraps every match
//! in a `<span>` carrying its class tag. Profiles are applied pass by pass on
//! the already tagged text, so later passes see (and may re-wrap) the content
//! of spans inserted by earlier ones. Tag markup itself is never matched.

use regex::Regex;

use super::highlights::ClassTag;
use super::languages::LanguageId;

/// Uncompiled matcher definition
#[derive(Debug, Clone, Copy)]
pub struct PatternDef {
    pub pattern: &'static str,
    /// Required trailing context, checked right after the match
    pub followed_by: Option<&'static str>,
    pub tag: ClassTag,
}

const fn pat(pattern: &'static str, tag: ClassTag) -> PatternDef {
    PatternDef {
        pattern,
        followed_by: None,
        tag,
    }
}

const fn pat_followed_by(
    pattern: &'static str,
    followed_by: &'static str,
    tag: ClassTag,
) -> PatternDef {
    PatternDef {
        pattern,
        followed_by: Some(followed_by),
        tag,
    }
}

// Word boundaries are ASCII-only: a non-ASCII letter such as `é` never
// joins the keyword or number that follows it.
pub const POWERSHELL_PATTERNS: &[PatternDef] = &[
    pat(r"#[^\r\n]*", ClassTag::Comment),
    pat(
        r"(?i)(?-u:\b)(Get|Set|New|Remove|Import|Export|Invoke|Start|Stop|Test|Write|Read|Add|Clear|Copy|Move|Select|Where|ForEach|If|Else|ElseIf|Switch|While|Do|For|Try|Catch|Finally|Return|Break|Continue|Function|Param)(?-u:\b)",
        ClassTag::Keyword,
    ),
    pat(r#""[^"]*"|'[^']*'"#, ClassTag::String),
    pat(r"\$[A-Za-z0-9_]+", ClassTag::Variable),
    pat(r"(?-u:\b)[0-9]+(?-u:\b)", ClassTag::Number),
];

pub const SQL_PATTERNS: &[PatternDef] = &[
    pat(r"--[^\r\n]*", ClassTag::Comment),
    pat(
        r"(?i)(?-u:\b)(SELECT|FROM|WHERE|AND|OR|INSERT|UPDATE|DELETE|CREATE|DROP|ALTER|TABLE|INDEX|JOIN|LEFT|RIGHT|INNER|OUTER|ON|AS|IN|NOT|NULL|IS|LIKE|ORDER|BY|GROUP|HAVING|LIMIT|OFFSET|UNION|ALL|DISTINCT|COUNT|SUM|AVG|MAX|MIN)(?-u:\b)",
        ClassTag::Keyword,
    ),
    pat(r"'[^']*'", ClassTag::String),
    pat(r"(?-u:\b)[0-9]+(?-u:\b)", ClassTag::Number),
];

pub const KQL_PATTERNS: &[PatternDef] = &[
    pat(r"//[^\r\n]*", ClassTag::Comment),
    pat(
        r"(?i)(?-u:\b)(let|where|project|extend|summarize|by|join|on|union|sort|top|take|count|render|search|parse|mv-expand|evaluate|datatable|print|range|ago|now|datetime|timespan|between|contains|startswith|endswith|matches|regex|in|has|has_any|has_all|isempty|isnotempty|isnull|isnotnull|case|iff|coalesce|strcat|split|substring|strlen|toupper|tolower|trim|replace|extract|tostring|toint|tolong|todouble|tobool|todatetime|totimespan|bin|floor|ceiling|round|abs|log|log10|exp|pow|sqrt|sign|min|max|sum|avg|dcount|percentile|stdev|variance|make_list|make_set|arg_max|arg_min)(?-u:\b)",
        ClassTag::Keyword,
    ),
    pat(r#""[^"]*"|'[^']*'"#, ClassTag::String),
    pat(r"(?-u:\b)[0-9]+[dhms]?(?-u:\b)", ClassTag::Number),
];

pub const BASH_PATTERNS: &[PatternDef] = &[
    pat(r"#[^\r\n]*", ClassTag::Comment),
    pat(
        r"(?-u:\b)(if|then|else|elif|fi|for|while|do|done|case|esac|function|return|exit|echo|read|export|source|alias|cd|ls|mv|cp|rm|mkdir|chmod|chown|grep|awk|sed|cat|head|tail|find|xargs|curl|wget)(?-u:\b)",
        ClassTag::Keyword,
    ),
    pat(r#""[^"]*"|'[^']*'"#, ClassTag::String),
    pat(r"\$[A-Za-z0-9_{}]+", ClassTag::Variable),
];

pub const JSON_PATTERNS: &[PatternDef] = &[
    pat_followed_by(r#""[^"]*""#, r"\s*:", ClassTag::Variable),
    pat(r#""[^"]*""#, ClassTag::String),
    pat(r"(?-u:\b)(true|false|null)(?-u:\b)", ClassTag::Keyword),
    pat(r"(?-u:\b)-?[0-9]+\.?[0-9]*(?-u:\b)", ClassTag::Number),
];

// Runs on escaped text, so angle brackets appear as entities.
pub const XML_PATTERNS: &[PatternDef] = &[
    pat(r"(?s)&lt;!--.*?--&gt;", ClassTag::Comment),
    pat(r"&lt;/?[A-Za-z0-9_-]+", ClassTag::Keyword),
    pat_followed_by(r"[A-Za-z0-9_-]+", "=", ClassTag::Variable),
    pat(r#""[^"]*""#, ClassTag::String),
    pat(r"&gt;", ClassTag::Keyword),
];

/// Pattern table for a language, in application order
pub fn patterns_for(language: LanguageId) -> &'static [PatternDef] {
    match language {
        LanguageId::PowerShell => POWERSHELL_PATTERNS,
        LanguageId::Sql => SQL_PATTERNS,
        LanguageId::Kql => KQL_PATTERNS,
        LanguageId::Bash => BASH_PATTERNS,
        LanguageId::Json => JSON_PATTERNS,
        LanguageId::Xml => XML_PATTERNS,
    }
}

/// A compiled pattern and the class it tags
#[derive(Debug, Clone)]
pub struct Matcher {
    regex: Regex,
    followed_by: Option<Regex>,
    tag: ClassTag,
}

impl Matcher {
    pub fn new(pattern: &str, tag: ClassTag) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
            followed_by: None,
            tag,
        })
    }

    /// Only accept matches whose following text starts with `context`.
    ///
    /// A rejected candidate is retried one character later, which is how a
    /// backtracking engine treats a failed lookahead.
    pub fn followed_by(mut self, context: &str) -> Result<Self, regex::Error> {
        self.followed_by = Some(Regex::new(&format!("^(?:{})", context))?);
        Ok(self)
    }

    pub fn from_def(def: &PatternDef) -> Result<Self, regex::Error> {
        let matcher = Self::new(def.pattern, def.tag)?;
        match def.followed_by {
            Some(context) => matcher.followed_by(context),
            None => Ok(matcher),
        }
    }

    pub fn tag(&self) -> ClassTag {
        self.tag
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Wrap every match in `html`, leaving `<...>` markup untouched
    pub fn apply(&self, html: &str) -> String {
        let mut out = String::with_capacity(html.len() + 32);
        let mut rest = html;

        while let Some(open) = rest.find('<') {
            self.wrap_text(&rest[..open], &mut out);
            let close = rest[open..]
                .find('>')
                .map_or(rest.len(), |offset| open + offset + 1);
            out.push_str(&rest[open..close]);
            rest = &rest[close..];
        }

        self.wrap_text(rest, &mut out);
        out
    }

    fn wrap_text(&self, text: &str, out: &mut String) {
        let mut last = 0;
        let mut pos = 0;

        while pos <= text.len() {
            let Some(m) = self.regex.find_at(text, pos) else {
                break;
            };

            if !self.context_matches(&text[m.end()..]) {
                pos = next_boundary(text, m.start());
                continue;
            }

            out.push_str(&text[last..m.start()]);
            out.push_str(&self.tag.wrap(m.as_str()));
            last = m.end();
            pos = if m.is_empty() {
                next_boundary(text, m.end())
            } else {
                m.end()
            };
        }

        out.push_str(&text[last..]);
    }

    fn context_matches(&self, following: &str) -> bool {
        self.followed_by
            .as_ref()
            .map_or(true, |context| context.is_match(following))
    }
}

/// Byte index of the character after `index` (past the end if at the end)
fn next_boundary(text: &str, index: usize) -> usize {
    index + text[index..].chars().next().map_or(1, char::len_utf8)
}

/// Ordered matcher list for one language
#[derive(Debug, Clone)]
pub struct Profile {
    language: LanguageId,
    matchers: Vec<Matcher>,
}

impl Profile {
    pub fn new(language: LanguageId, matchers: Vec<Matcher>) -> Self {
        Self { language, matchers }
    }

    /// Compile a profile from its pattern table
    pub fn compile(language: LanguageId, defs: &[PatternDef]) -> Result<Self, String> {
        let matchers = defs
            .iter()
            .map(|def| {
                Matcher::from_def(def).map_err(|e| {
                    format!("Invalid {} pattern {:?}: {}", language, def.pattern, e)
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(language, matchers))
    }

    /// Compile the built-in profile for a language
    pub fn builtin(language: LanguageId) -> Result<Self, String> {
        Self::compile(language, patterns_for(language))
    }

    pub fn language(&self) -> LanguageId {
        self.language
    }

    pub fn matchers(&self) -> &[Matcher] {
        &self.matchers
    }

    /// Run every matcher in order over escaped text
    pub fn apply(&self, escaped: &str) -> String {
        self.matchers
            .iter()
            .fold(escaped.to_string(), |html, matcher| matcher.apply(&html))
    }
}
