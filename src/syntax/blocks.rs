//! Page-load highlighting of `.code-block[data-language]` elements

use super::highlighter::Highlighter;
use crate::dom::Page;
use crate::util::text::escape_html;

/// Class marking a code block container
pub const CODE_BLOCK_CLASS: &str = "code-block";

/// Replace the source of every tagged code block with highlighted markup.
///
/// Returns the number of blocks rewritten. Blocks without a code element or
/// in a language without a profile are left untouched.
pub fn highlight_code_blocks(page: &mut Page, highlighter: &Highlighter) -> usize {
    let blocks = page.find_all(page.root(), |el| {
        el.has_class(CODE_BLOCK_CLASS) && el.attribute("data-language").is_some()
    });

    let mut count = 0;
    for block in blocks {
        let Some(code_el) = page.code_element(block) else {
            continue;
        };
        let language = page.attribute(block, "data-language").unwrap_or_default();
        let Some(profile) = highlighter.resolve(language) else {
            tracing::debug!("No highlight profile for {:?}", language);
            continue;
        };
        let html = profile.apply(&escape_html(&page.text_content(code_el)));
        page.set_inner_html(code_el, &html);
        count += 1;
    }

    tracing::debug!("Highlighted {} code blocks", count);
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlights_tagged_block() {
        let mut page = Page::new();
        let block = page.append_with_class(page.root(), "div", "code-block");
        page.set_attribute(block, "data-language", "sql");
        let pre = page.append_element(block, "pre");
        let code = page.append_element(pre, "code");
        page.append_text(code, "SELECT 1");

        assert_eq!(highlight_code_blocks(&mut page, &Highlighter::builtin()), 1);
        assert_eq!(
            page.inner_html(pre),
            r#"<span class="keyword">SELECT</span> <span class="number">1</span>"#
        );
        assert_eq!(page.text_content(block), "SELECT 1");
    }

    #[test]
    fn test_skips_untagged_block() {
        let mut page = Page::new();
        let block = page.append_with_class(page.root(), "div", "code-block");
        let pre = page.append_element(block, "pre");
        page.append_text(pre, "SELECT 1");

        assert_eq!(highlight_code_blocks(&mut page, &Highlighter::builtin()), 0);
        assert_eq!(page.inner_html(pre), "SELECT 1");
    }

    #[test]
    fn test_unknown_language_is_left_untouched() {
        let mut page = Page::new();
        let block = page.append_with_class(page.root(), "div", "code-block");
        page.set_attribute(block, "data-language", "rust");
        let pre = page.append_element(block, "pre");
        page.append_text(pre, "let x = a < b;");

        assert_eq!(highlight_code_blocks(&mut page, &Highlighter::builtin()), 0);
        assert_eq!(page.inner_html(pre), "let x = a &lt; b;");
    }
}
