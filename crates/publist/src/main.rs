mod cli;
mod config;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use config::Config;
use publist_core::{bibtex, publication::validate_publications, AssetMap, Publication};
use publist_inspire::InspireClient;
use publist_render::{
    apply_citation_counts, inspire_ids, load_publications, render_list, render_page,
    CitationCounts,
};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => {
            Config::load(path).with_context(|| format!("loading config {}", path.display()))?
        }
        None => Config::load_from_project()?.unwrap_or_default(),
    };

    match cli.command {
        Command::Build {
            references,
            assets,
            output,
            author_query,
            offline,
            title,
        } => {
            build(
                &config,
                &references,
                assets,
                output,
                author_query,
                offline,
                title,
            )
            .await
        }
        Command::Validate { references, assets } => validate(&config, &references, assets),
        Command::Bibtex { references, key } => print_bibtex(&references, key.as_deref()),
        Command::Schema => print_schema(),
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            let bin_name = cmd.get_name().to_string();
            generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
            Ok(())
        }
    }
}

async fn build(
    config: &Config,
    references: &Path,
    assets: Option<PathBuf>,
    output: Option<PathBuf>,
    author_query: Option<String>,
    offline: bool,
    title: Option<String>,
) -> Result<()> {
    let publications = load_publications(references)
        .with_context(|| format!("loading {}", references.display()))?;
    let assets_dir = assets.unwrap_or_else(|| PathBuf::from(&config.assets_dir));
    let asset_map = scan_assets(&assets_dir)?;

    let list = render_list(&publications, &asset_map, &config.image_base)?;
    let title = title.unwrap_or_else(|| config.page_title.clone());
    let mut page = render_page(&title, &list);

    if let Some(counts) = fetch_counts(config, &publications, author_query, offline).await {
        page = apply_citation_counts(&page, &counts);
    }

    let output = output.unwrap_or_else(|| PathBuf::from(&config.output));
    std::fs::write(&output, &page).with_context(|| format!("writing {}", output.display()))?;
    println!("wrote {} publications to {}", publications.len(), output.display());
    Ok(())
}

/// Fetch citation counts when the build wants them, or `None` to leave
/// every badge in its default state.
///
/// No INSPIRE ids means no network request at all. A failed request is
/// logged and swallowed: enrichment is best-effort and never fails the
/// build.
async fn fetch_counts(
    config: &Config,
    publications: &[Publication],
    author_query: Option<String>,
    offline: bool,
) -> Option<CitationCounts> {
    if offline {
        tracing::debug!("offline build, skipping citation counts");
        return None;
    }
    let ids = inspire_ids(publications);
    if ids.is_empty() {
        tracing::debug!("no INSPIRE ids, skipping citation counts");
        return None;
    }
    let query = match author_query.or_else(|| config.author_query.clone()) {
        Some(query) => query,
        None => {
            tracing::warn!("no author query configured, keeping default badges");
            return None;
        }
    };

    let fetched = async {
        let client = InspireClient::new()?;
        client.citation_counts(&query).await
    }
    .await;

    match fetched {
        Ok(counts) => Some(counts),
        Err(e) => {
            tracing::warn!(error = %e, "citation enrichment failed, keeping default badges");
            None
        }
    }
}

fn validate(config: &Config, references: &Path, assets: Option<PathBuf>) -> Result<()> {
    let publications = load_publications(references)
        .with_context(|| format!("loading {}", references.display()))?;
    validate_publications(&publications)?;

    let assets_dir = assets.unwrap_or_else(|| PathBuf::from(&config.assets_dir));
    let asset_map = scan_assets(&assets_dir)?;
    for publication in &publications {
        asset_map
            .resolve(publication.preview.as_deref())
            .with_context(|| format!("publication `{}`", publication.id))?;
    }

    let unused = unreferenced_assets(&asset_map, &publications);
    if !unused.is_empty() {
        println!(
            "note: {} scanned asset(s) no publication refers to: {}",
            unused.len(),
            unused.join(", ")
        );
    }

    println!("{} publications OK", publications.len());
    Ok(())
}

fn print_bibtex(references: &Path, key: Option<&str>) -> Result<()> {
    let publications = load_publications(references)
        .with_context(|| format!("loading {}", references.display()))?;
    let mut printed = false;
    for publication in &publications {
        if key.is_some_and(|key| key != publication.id) {
            continue;
        }
        println!("{}\n", bibtex::format_entry(&publication.id, &publication.bib));
        printed = true;
    }
    if let Some(key) = key {
        if !printed {
            bail!("no publication with key `{key}`");
        }
    }
    Ok(())
}

fn print_schema() -> Result<()> {
    let schema = schemars::schema_for!(Vec<Publication>);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}

/// An absent assets directory is an empty map: sites without previews
/// need no directory, while any `preview` field will still fail hard in
/// resolution.
fn scan_assets(dir: &Path) -> Result<AssetMap> {
    if !dir.exists() {
        tracing::debug!(dir = %dir.display(), "assets directory not present, nothing to scan");
        return Ok(AssetMap::default());
    }
    AssetMap::scan(dir).with_context(|| format!("scanning {}", dir.display()))
}

/// Scanned assets no publication refers to. Not an error, but `validate`
/// surfaces them: a stale cover image usually means a renamed `preview`.
fn unreferenced_assets<'a>(assets: &'a AssetMap, publications: &[Publication]) -> Vec<&'a str> {
    let referenced: HashSet<&str> = publications
        .iter()
        .filter_map(|publication| publication.preview.as_deref())
        .collect();
    assets
        .iter()
        .map(|asset| asset.file_name.as_str())
        .filter(|name| !referenced.contains(name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn publication_with_preview(id: &str, preview: Option<&str>) -> Publication {
        Publication {
            id: id.to_string(),
            bib: publist_core::BibEntry {
                author: "Doe, J.".to_string(),
                title: "\"T\"".to_string(),
                year: "2020".to_string(),
                journal: None,
                volume: None,
                number: None,
                pages: None,
                doi: None,
                eprint: None,
                archiveprefix: None,
                primaryclass: None,
                abstract_text: None,
            },
            preview: preview.map(str::to_string),
            links: publist_core::Links::default(),
            bibtex_show: false,
            award: None,
        }
    }

    #[test]
    fn unreferenced_assets_reports_unused_files_only() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("stale.png"), b"").unwrap();
        std::fs::write(dir.path().join("used.png"), b"").unwrap();
        let assets = AssetMap::scan(dir.path()).unwrap();

        let publications = vec![publication_with_preview("a", Some("used.png"))];
        assert_eq!(unreferenced_assets(&assets, &publications), vec!["stale.png"]);
    }

    #[test]
    fn fully_referenced_assets_report_nothing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("used.png"), b"").unwrap();
        let assets = AssetMap::scan(dir.path()).unwrap();

        let publications = vec![
            publication_with_preview("a", Some("used.png")),
            publication_with_preview("b", None),
        ];
        assert!(unreferenced_assets(&assets, &publications).is_empty());
    }
}
