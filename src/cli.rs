//! Command-line argument parsing for docsite
//!
//! Supports:
//! - Rendering markdown pages to HTML
//! - Highlighting a single file
//! - Listing highlight languages
//! - Copying a code block through the copy-button flow

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::syntax::LanguageId;
use crate::theme::ThemeMode;

/// Documentation page builder and syntax highlighter
#[derive(Parser, Debug)]
#[command(
    name = "docsite",
    version,
    about = "Build interactive documentation pages from markdown"
)]
pub struct CliArgs {
    /// Config file (defaults to ~/.config/docsite/config.yaml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Render markdown files to HTML pages
    Render {
        /// Markdown files to render
        #[arg(value_name = "FILES", required = true)]
        files: Vec<PathBuf>,

        /// Output directory
        #[arg(short, long, value_name = "DIR", default_value = "site")]
        out: PathBuf,

        /// Directory the output paths are relative to
        #[arg(long, value_name = "DIR")]
        base: Option<PathBuf>,

        /// Theme to render with (dark or light)
        #[arg(long)]
        theme: Option<String>,
    },

    /// Print highlighted HTML for a file (or stdin)
    Highlight {
        /// Language profile
        #[arg(short, long)]
        lang: String,

        /// Source file; reads stdin when omitted
        file: Option<PathBuf>,
    },

    /// List supported highlight languages
    Languages,

    /// Copy a code block of a markdown page to the clipboard
    ///
    /// On Linux (X11/Wayland) the command stays running until the copied
    /// text is pasted or taken over by a clipboard manager; otherwise the
    /// contents would vanish when the process exits.
    Copy {
        /// Markdown file
        file: PathBuf,

        /// Code block number, starting at 1
        #[arg(long, value_name = "N", default_value_t = 1)]
        index: usize,
    },
}

/// A validated command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Render {
        files: Vec<PathBuf>,
        out: PathBuf,
        base: Option<PathBuf>,
        theme: Option<ThemeMode>,
    },
    Highlight {
        language: LanguageId,
        file: Option<PathBuf>,
    },
    Languages,
    Copy {
        file: PathBuf,
        /// 0-based
        index: usize,
    },
}

impl CliArgs {
    /// Validate parsed arguments
    pub fn into_command(self) -> Result<Command, String> {
        match self.command {
            CliCommand::Render {
                files,
                out,
                base,
                theme,
            } => {
                let theme = match theme {
                    Some(name) => Some(
                        ThemeMode::parse(&name.to_lowercase())
                            .ok_or_else(|| format!("Unknown theme '{}' (expected dark or light)", name))?,
                    ),
                    None => None,
                };
                Ok(Command::Render {
                    files,
                    out,
                    base,
                    theme,
                })
            }
            CliCommand::Highlight { lang, file } => {
                let language = LanguageId::from_name(&lang).ok_or_else(|| {
                    let known: Vec<&str> = LanguageId::ALL.iter().map(|l| l.name()).collect();
                    format!("Unknown language '{}' (supported: {})", lang, known.join(", "))
                })?;
                Ok(Command::Highlight { language, file })
            }
            CliCommand::Languages => Ok(Command::Languages),
            CliCommand::Copy { file, index } => {
                if index == 0 {
                    return Err("Code block numbers start at 1".to_string());
                }
                // Convert from 1-indexed (user input) to 0-indexed (internal)
                Ok(Command::Copy {
                    file,
                    index: index - 1,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Command, String> {
        let args = CliArgs::try_parse_from(args).map_err(|e| e.to_string())?;
        args.into_command()
    }

    #[test]
    fn test_render_defaults() {
        let command = parse(&["docsite", "render", "intro.md"]).unwrap();
        assert_eq!(
            command,
            Command::Render {
                files: vec![PathBuf::from("intro.md")],
                out: PathBuf::from("site"),
                base: None,
                theme: None,
            }
        );
    }

    #[test]
    fn test_render_requires_files() {
        assert!(parse(&["docsite", "render"]).is_err());
    }

    #[test]
    fn test_render_theme() {
        let command = parse(&["docsite", "render", "a.md", "--theme", "Light"]).unwrap();
        assert!(matches!(
            command,
            Command::Render {
                theme: Some(ThemeMode::Light),
                ..
            }
        ));
        assert!(parse(&["docsite", "render", "a.md", "--theme", "sepia"]).is_err());
    }

    #[test]
    fn test_highlight_language() {
        let command = parse(&["docsite", "highlight", "--lang", "SQL"]).unwrap();
        assert_eq!(
            command,
            Command::Highlight {
                language: LanguageId::Sql,
                file: None,
            }
        );

        let err = parse(&["docsite", "highlight", "--lang", "cobol"]).unwrap_err();
        assert!(err.contains("powershell"));
    }

    #[test]
    fn test_copy_index_conversion() {
        let command = parse(&["docsite", "copy", "page.md", "--index", "3"]).unwrap();
        assert_eq!(
            command,
            Command::Copy {
                file: PathBuf::from("page.md"),
                index: 2,
            }
        );
        assert!(parse(&["docsite", "copy", "page.md", "--index", "0"]).is_err());
    }

    #[test]
    fn test_global_config_flag() {
        let args = CliArgs::try_parse_from(["docsite", "languages", "--config", "c.yaml"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("c.yaml")));
    }
}
