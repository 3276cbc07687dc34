//! Static site pipeline
//!
//! Markdown sources become shell pages, run through the same page-load
//! behaviours a browser would apply, and are serialized back to HTML.

use std::path::Path;

use crate::config::SiteConfig;
use crate::events::DomEvent;
use crate::markdown::{build_page, markdown_title, DocShell, NavEntry, NavSection};
use crate::nav::{adjust_relative_links, path_depth};
use crate::runtime::{HeadlessPlatform, Platform, Runtime};
use crate::storage::MemoryStorage;
use crate::theme::{ThemeMode, THEME_KEY};

/// A markdown page waiting to be rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePage {
    /// Site-relative output path, e.g. `guides/setup.html`
    pub output: String,
    pub title: String,
    pub markdown: String,
}

impl SourcePage {
    /// Title from the first `h1`, falling back to the file stem
    pub fn new(output: &str, markdown: String) -> Self {
        let title = markdown_title(&markdown).unwrap_or_else(|| title_from_path(output));
        Self {
            output: output.to_string(),
            title,
            markdown,
        }
    }
}

/// Rendered HTML for one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub output: String,
    pub html: String,
    pub code_blocks: usize,
    pub toc_entries: usize,
}

/// Output path for a markdown file relative to `base` (`.md` becomes `.html`)
pub fn output_path(source: &Path, base: Option<&Path>) -> String {
    let relative = base
        .and_then(|base| source.strip_prefix(base).ok())
        .unwrap_or(source);
    let relative = if relative.is_absolute() {
        Path::new(relative.file_name().unwrap_or_default())
    } else {
        relative
    };

    let html = relative.with_extension("html");
    html.components()
        .map(|part| part.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn title_from_path(path: &str) -> String {
    let stem = path
        .rsplit('/')
        .next()
        .unwrap_or(path)
        .trim_end_matches(".html");
    humanize(stem)
}

fn humanize(name: &str) -> String {
    name.split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Sidebar sections grouped by directory, in first-seen order.
///
/// Pages at the site root go under `root_title`.
pub fn nav_sections(pages: &[SourcePage], root_title: &str) -> Vec<NavSection> {
    let mut sections: Vec<(String, NavSection)> = Vec::new();

    for page in pages {
        let directory = page
            .output
            .rsplit_once('/')
            .map(|(dir, _)| dir.to_string())
            .unwrap_or_default();

        let entry = NavEntry {
            title: page.title.clone(),
            href: format!("./{}", page.output),
        };

        match sections.iter_mut().find(|(dir, _)| *dir == directory) {
            Some((_, section)) => section.links.push(entry),
            None => {
                let title = if directory.is_empty() {
                    root_title.to_string()
                } else {
                    humanize(directory.rsplit('/').next().unwrap_or(&directory))
                };
                sections.push((
                    directory,
                    NavSection {
                        title,
                        links: vec![entry],
                    },
                ));
            }
        }
    }

    sections.into_iter().map(|(_, section)| section).collect()
}

fn shell_for(source: &SourcePage, sections: &[NavSection], config: &SiteConfig) -> DocShell {
    DocShell {
        site_title: config.site_title.clone(),
        page_title: source.title.clone(),
        sections: sections.to_vec(),
        content_class: config.toc_container.clone(),
        toc_class: config.toc_target.clone(),
    }
}

/// Render one page with the given theme applied
pub fn render_page(
    source: &SourcePage,
    sections: &[NavSection],
    config: &SiteConfig,
    theme: ThemeMode,
) -> RenderedPage {
    let page = build_page(&source.markdown, &shell_for(source, sections, config));
    let location = format!("/{}", source.output);
    let storage = MemoryStorage::with_item(THEME_KEY, theme.as_str());

    let runtime = Runtime::load(
        page,
        config.clone(),
        &location,
        HeadlessPlatform::new(),
        storage,
    );
    let mut model = runtime.into_model();

    // Nav highlighting compares site-relative hrefs, so rewrite afterwards
    adjust_relative_links(&mut model.page, path_depth(&location));

    RenderedPage {
        output: source.output.clone(),
        html: model.page.to_html(),
        code_blocks: model.copy.buttons.len(),
        toc_entries: model.toc.as_ref().map_or(0, Vec::len),
    }
}

/// Render every page with a shared sidebar
pub fn render_site(pages: &[SourcePage], config: &SiteConfig, theme: ThemeMode) -> Vec<RenderedPage> {
    let sections = nav_sections(pages, &config.site_title);
    pages
        .iter()
        .map(|source| {
            let rendered = render_page(source, &sections, config, theme);
            tracing::info!(
                "Rendered {} ({} code blocks, {} TOC entries)",
                rendered.output,
                rendered.code_blocks,
                rendered.toc_entries
            );
            rendered
        })
        .collect()
}

/// Outcome of pressing a copy button outside a browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyReport {
    /// Text read from the code block
    pub text: String,
    /// Button label after the click
    pub label: String,
    /// Label after the feedback delay
    pub reverted_label: String,
}

/// Press the copy button of code block `index` (0-based) and let its
/// feedback run to completion.
pub fn copy_code_block<P: Platform>(
    markdown: &str,
    index: usize,
    config: &SiteConfig,
    platform: P,
) -> Result<CopyReport, String> {
    let source = SourcePage::new("index.html", markdown.to_string());
    let page = build_page(markdown, &shell_for(&source, &[], config));
    let mut runtime = Runtime::load(page, config.clone(), "/index.html", platform, MemoryStorage::new());

    let count = runtime.model().copy.buttons.len();
    let button = *runtime.model().copy.buttons.get(index).ok_or_else(|| {
        format!("Code block {} not found ({} code blocks in page)", index, count)
    })?;

    let text = runtime
        .page()
        .closest_by_class(button, crate::syntax::CODE_BLOCK_CLASS)
        .and_then(|block| runtime.page().code_element(block))
        .map(|code| runtime.page().text_content(code))
        .unwrap_or_default();
    if text.is_empty() {
        return Err(format!("Code block {} is empty", index));
    }

    runtime.dispatch(DomEvent::click(button));
    let label = runtime.page().text_content(button).trim().to_string();
    let copied = runtime.page().has_class(button, "copied");

    let delay = runtime.model().config.copy_feedback();
    runtime.advance(delay);
    let reverted_label = runtime.page().text_content(button).trim().to_string();

    if !copied {
        return Err(format!("Clipboard write failed (button shows {:?})", label));
    }

    Ok(CopyReport {
        text,
        label,
        reverted_label,
    })
}
