use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use draftblocks_config::{Config, OutputFormat};
use draftblocks_engine::{
    ArticleOutline, Block, ChapterSource, assemble_article, extract_chapter_title, io,
    serialize_blocks,
};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Converts markdown article drafts (lead, chapters, summary) into typed
/// CMS content blocks.
#[derive(Parser, Debug)]
#[command(name = "draftblocks", version, about)]
struct Cli {
    /// Lead (introduction) draft file
    #[arg(long, value_name = "FILE")]
    lead: Option<PathBuf>,

    /// Chapter draft file, in article order (repeatable)
    #[arg(long = "chapter", value_name = "FILE")]
    chapters: Vec<PathBuf>,

    /// Summary draft file
    #[arg(long, value_name = "FILE")]
    summary: Option<PathBuf>,

    /// Outline file carrying the article title and meta description
    #[arg(long, value_name = "FILE")]
    outline: Option<PathBuf>,

    /// Output format (falls back to the configured default)
    #[arg(long, value_enum)]
    format: Option<Format>,

    /// Write output to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Comment-delimited block document
    Blocks,
    /// Structured JSON view of the blocks
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Blocks => OutputFormat::Blocks,
            Format::Json => OutputFormat::Json,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ArticleJson<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    meta_description: Option<&'a str>,
    blocks: &'a [Block],
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = Config::load()?;
    let drafts_root = config.as_ref().map(|c| c.drafts_path.clone());
    let drafts_root = drafts_root.as_deref();

    let lead = read_optional_source(cli.lead.as_deref(), drafts_root)?;
    let summary = read_optional_source(cli.summary.as_deref(), drafts_root)?;
    let outline = cli
        .outline
        .as_deref()
        .map(|path| read_source(path, drafts_root).map(|text| ArticleOutline::parse(&text)))
        .transpose()?;

    let mut chapters = Vec::with_capacity(cli.chapters.len());
    for (index, path) in cli.chapters.iter().enumerate() {
        let body = read_source(path, drafts_root)?;
        let title = extract_chapter_title(&body)
            .unwrap_or_else(|| format!("Chapter {}", index + 1));
        chapters.push(ChapterSource { title, body });
    }

    let blocks = assemble_article(&lead, &chapters, &summary);

    let format = cli
        .format
        .map(OutputFormat::from)
        .or(config.map(|c| c.output_format))
        .unwrap_or_default();
    let rendered = match format {
        OutputFormat::Blocks => serialize_blocks(&blocks),
        OutputFormat::Json => render_json(outline.as_ref(), &blocks)?,
    };

    match cli.output {
        Some(path) => std::fs::write(&path, rendered)
            .with_context(|| format!("failed to write output to {}", path.display()))?,
        None => println!("{rendered}"),
    }

    Ok(())
}

fn resolve_path(path: &Path, drafts_root: Option<&Path>) -> PathBuf {
    match drafts_root {
        Some(root) if path.is_relative() => root.join(path),
        _ => path.to_path_buf(),
    }
}

fn read_source(path: &Path, drafts_root: Option<&Path>) -> Result<String> {
    let resolved = resolve_path(path, drafts_root);
    io::read_source_file(&resolved)
        .with_context(|| format!("failed to read draft source {}", resolved.display()))
}

fn read_optional_source(path: Option<&Path>, drafts_root: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => read_source(path, drafts_root),
        None => Ok(String::new()),
    }
}

fn render_json(outline: Option<&ArticleOutline>, blocks: &[Block]) -> Result<String> {
    let article = ArticleJson {
        title: outline.map(|o| o.title.as_str()),
        meta_description: outline.map(|o| o.meta_description.as_str()),
        blocks,
    };
    serde_json::to_string_pretty(&article).context("failed to render JSON output")
}
