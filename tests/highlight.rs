//! Syntax highlighter tests
//!
//! Output shape per language, escaping, and the tag-stripping round trip.

use docsite::syntax::{highlight, Highlighter, LanguageId, Profile, HIGHLIGHT_NAMES};
use docsite::util::{decode_entities, strip_tags};

/// Plain text of highlighted output
fn plain(html: &str) -> String {
    decode_entities(&strip_tags(html))
}

// ========================================================================
// Documented examples
// ========================================================================

#[test]
fn test_sql_comment_and_keywords() {
    let html = highlight("SELECT * FROM t -- comment", "sql");
    assert!(html.contains(r#"<span class="comment">-- comment</span>"#));
    assert!(html.contains(r#"<span class="keyword">SELECT</span>"#));
    assert!(html.contains(r#"<span class="keyword">FROM</span>"#));
    assert_eq!(
        html,
        r#"<span class="keyword">SELECT</span> * <span class="keyword">FROM</span> t <span class="comment">-- comment</span>"#
    );
}

#[test]
fn test_json_key_and_value() {
    let html = highlight(r#"{"key": "value"}"#, "json");
    assert_eq!(
        html,
        r#"{<span class="variable"><span class="string">"key"</span></span>: <span class="string">"value"</span>}"#
    );
}

#[test]
fn test_json_escapes_markup() {
    assert_eq!(highlight("<a>", "json"), "&lt;a&gt;");
}

#[test]
fn test_unknown_language_is_identity() {
    let code = "<script>alert('x')</script>";
    assert_eq!(highlight(code, "unknownlang"), code);
    assert_eq!(highlight("", "unknownlang"), "");
}

#[test]
fn test_empty_input() {
    for language in LanguageId::ALL {
        assert_eq!(highlight("", language.name()), "");
    }
}

// ========================================================================
// Per-language samples
// ========================================================================

#[test]
fn test_powershell() {
    let html = highlight("Get-Process $name 42 # list", "powershell");
    assert!(html.contains(r#"<span class="keyword">Get</span>-Process"#));
    assert!(html.contains(r#"<span class="variable">$name</span>"#));
    assert!(html.contains(r#"<span class="number">42</span>"#));
    assert!(html.contains(r#"<span class="comment"># list</span>"#));
}

#[test]
fn test_powershell_keywords_ignore_case() {
    let html = highlight("foreach ($x in $items) {}", "powershell");
    assert!(html.contains(r#"<span class="keyword">foreach</span>"#));
}

#[test]
fn test_kql_number_units() {
    let html = highlight("StormEvents | where StartTime > ago(7d) | take 10", "kql");
    assert!(html.contains(r#"<span class="keyword">where</span>"#));
    assert!(html.contains(r#"<span class="keyword">ago</span>"#));
    assert!(html.contains(r#"<span class="number">7d</span>"#));
    assert!(html.contains(r#"<span class="number">10</span>"#));
}

#[test]
fn test_kql_comment() {
    let html = highlight("T | count // rows", "kql");
    assert!(html.contains(r#"<span class="comment">// rows</span>"#));
}

#[test]
fn test_bash_keywords_are_case_sensitive() {
    let html = highlight("echo $HOME\nECHO done", "bash");
    assert!(html.contains(r#"<span class="keyword">echo</span>"#));
    assert!(html.contains(r#"<span class="variable">$HOME</span>"#));
    assert!(!html.contains(r#"<span class="keyword">ECHO</span>"#));
}

#[test]
fn test_bash_comment_runs_to_end_of_line() {
    let html = highlight("ls # list\ncd /tmp", "bash");
    assert!(html.contains(r#"<span class="comment"># list</span>"#));
    assert!(html.contains(r#"<span class="keyword">cd</span>"#));
}

#[test]
fn test_json_literals_and_numbers() {
    let html = highlight(r#"{"ok": true, "n": -1.5, "none": null}"#, "json");
    assert!(html.contains(r#"<span class="keyword">true</span>"#));
    assert!(html.contains(r#"<span class="keyword">null</span>"#));
    assert!(html.contains(r#"<span class="number">1.5</span>"#));
}

#[test]
fn test_xml_tags_attributes_and_comments() {
    let html = highlight(r#"<item id="1"><!-- note --></item>"#, "xml");
    assert!(html.contains(r#"<span class="keyword">&lt;item</span>"#));
    assert!(html.contains(r#"<span class="variable">id</span>="#));
    assert!(html.contains(r#"<span class="string">"1"</span>"#));
    assert!(html.contains(r#"<span class="keyword">&lt;/item</span>"#));
    assert!(html.contains(r#"<span class="comment">&lt;!-- note --<span class="keyword">&gt;</span></span>"#));
}

#[test]
fn test_word_boundaries_are_ascii() {
    assert_eq!(
        highlight("éSELECT x", "sql"),
        r#"é<span class="keyword">SELECT</span> x"#
    );
    assert_eq!(highlight("é42", "sql"), r#"é<span class="number">42</span>"#);
    assert_eq!(
        highlight("ïGet-Item", "powershell"),
        r#"ï<span class="keyword">Get</span>-Item"#
    );
    assert!(highlight("ünull", "json").contains(r#"<span class="keyword">null</span>"#));
}

#[test]
fn test_ascii_letters_still_join_words() {
    assert_eq!(highlight("xSELECT 1a", "sql"), "xSELECT 1a");
}

// ========================================================================
// Properties
// ========================================================================

#[test]
fn test_stripping_tags_reconstructs_input() {
    let samples = [
        (LanguageId::PowerShell, "Get-Item $path | Where-Object { $_.Length -gt 100 } # big"),
        (LanguageId::Sql, "SELECT name, 42 FROM users WHERE id = 'x' -- trailing"),
        (LanguageId::Kql, "Events | where Level == \"Error\" | summarize count() by bin(Time, 1h)"),
        (LanguageId::Bash, "export PATH=$HOME/bin:$PATH # add\nif [ -f x ]; then echo 'ok'; fi"),
        (LanguageId::Json, r#"{"name": "docs", "tags": ["a", "b"], "size": 12, "draft": false}"#),
        (LanguageId::Xml, r#"config name="site" version="2" enabled=true"#),
    ];

    for (language, code) in samples {
        let html = highlight(code, language.name());
        assert_eq!(plain(&html), code, "round trip failed for {}", language);
    }
}

#[test]
fn test_round_trip_with_special_characters() {
    let code = r#"if [ "$a" < "$b" ] && echo ok > out.txt"#;
    assert_eq!(plain(&highlight(code, "bash")), code);
}

#[test]
fn test_only_known_classes_are_emitted() {
    let code = r#"{"k": "v", "n": 1, "b": true} # -- // <!-- x --> $v SELECT"#;
    for language in LanguageId::ALL {
        let html = highlight(code, language.name());
        for class in html.split(r#"class=""#).skip(1) {
            let name = class.split('"').next().unwrap_or_default();
            assert!(HIGHLIGHT_NAMES.contains(&name), "unexpected class {}", name);
        }
    }
}

#[test]
fn test_highlighting_is_deterministic() {
    let code = "SELECT COUNT(*) FROM logs WHERE level = 'error'";
    assert_eq!(highlight(code, "sql"), highlight(code, "sql"));
}

#[test]
fn test_custom_profile_table() {
    let profile = Profile::compile(
        LanguageId::Sql,
        &[docsite::syntax::PatternDef {
            pattern: r"\bTODO\b",
            followed_by: None,
            tag: docsite::syntax::ClassTag::Comment,
        }],
    )
    .unwrap();

    let mut highlighter = Highlighter::new();
    highlighter.insert(profile);

    assert_eq!(
        highlighter.highlight("SELECT TODO", "sql"),
        r#"SELECT <span class="comment">TODO</span>"#
    );
    assert_eq!(highlighter.highlight("SELECT", "json"), "SELECT");
}
