use std::io::Read;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use clap::Parser;

use docsite::cli::{CliArgs, Command};
use docsite::config::SiteConfig;
use docsite::runtime::SystemPlatform;
use docsite::site::{copy_code_block, output_path, render_site, SourcePage};
use docsite::storage::FileStorage;
use docsite::syntax::{builtin_highlighter, LanguageId};
use docsite::theme::{load_preference, ThemeMode};

fn main() -> Result<()> {
    docsite::tracing::init();

    let args = CliArgs::parse();
    let config = match &args.config {
        Some(path) => SiteConfig::load_from(path),
        None => SiteConfig::load(),
    };
    let command = args.into_command().map_err(|e| anyhow!(e))?;

    match command {
        Command::Render {
            files,
            out,
            base,
            theme,
        } => render(&files, &out, base.as_deref(), theme, &config),
        Command::Highlight { language, file } => highlight(language, file.as_deref()),
        Command::Languages => {
            for language in builtin_highlighter().languages() {
                println!("{:<12} {}", language.name(), language.display_name());
            }
            Ok(())
        }
        Command::Copy { file, index } => copy(&file, index, &config),
    }
}

fn render(
    files: &[std::path::PathBuf],
    out: &Path,
    base: Option<&Path>,
    theme: Option<ThemeMode>,
    config: &SiteConfig,
) -> Result<()> {
    let theme = theme.unwrap_or_else(|| match FileStorage::open_default() {
        Some(storage) => load_preference(&storage, config.default_theme),
        None => config.default_theme,
    });

    let mut pages = Vec::with_capacity(files.len());
    for file in files {
        let markdown = std::fs::read_to_string(file)
            .with_context(|| format!("Failed to read {}", file.display()))?;
        pages.push(SourcePage::new(&output_path(file, base), markdown));
    }

    for page in render_site(&pages, config, theme) {
        let target = out.join(&page.output);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        std::fs::write(&target, &page.html)
            .with_context(|| format!("Failed to write {}", target.display()))?;
        println!("{}", target.display());
    }

    Ok(())
}

fn highlight(language: LanguageId, file: Option<&Path>) -> Result<()> {
    let code = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut code = String::new();
            std::io::stdin()
                .read_to_string(&mut code)
                .context("Failed to read stdin")?;
            code
        }
    };

    print!("{}", builtin_highlighter().highlight(&code, language.name()));
    Ok(())
}

fn copy(file: &Path, index: usize, config: &SiteConfig) -> Result<()> {
    let markdown = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let platform = SystemPlatform::with_handover();
    if platform.waits_for_handover() {
        eprintln!("Holding the clipboard until it is pasted or taken by a clipboard manager...");
    }

    let report = copy_code_block(&markdown, index, config, platform)
        .map_err(|e| anyhow!(e))
        .with_context(|| format!("Failed to copy code block {} of {}", index + 1, file.display()))?;

    eprintln!("{} ({} bytes)", report.label, report.text.len());
    Ok(())
}
