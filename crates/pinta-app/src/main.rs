//! pinta - headless coloring-book shell.
//!
//! Discovers the page set, mounts the first page, and dumps the state a
//! UI front end would render. Page discovery lives here, not in the
//! engine: the engine consumes an ordered list of opaque page ids.

use anyhow::Context;
use pinta_engine::{
    DirSource, JsonStore, NullFeedback, PageSource, Session, SessionConfig,
};
use tracing_subscriber::EnvFilter;

/// Probe ceiling for sequential discovery.
const MAX_PROBE: u32 = 500;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let pages_dir = args.next().unwrap_or_else(|| "assets/pages".to_string());
    let state_file = args.next().unwrap_or_else(|| "pinta-progress.json".to_string());

    tracing::info!(%pages_dir, %state_file, "starting pinta");

    let source = DirSource::new(&pages_dir);
    let pages = discover_pages(&source, MAX_PROBE);
    if pages.is_empty() {
        tracing::warn!(%pages_dir, "no pages found");
        return Ok(());
    }

    let mut session = Session::new(
        Box::new(source),
        Box::new(JsonStore::new(&state_file)),
        Box::new(NullFeedback),
        SessionConfig::default(),
    );
    session.set_pages(pages);
    session
        .load_page(0)
        .context("mounting the first page")?;

    let label = session.page_label();
    let paintable = session.regions().paintable_count();
    let starred = session.current_page_starred();
    let unique = session.current_unique_count();
    let summary = session.progress_summary();
    println!("page {label}: {paintable} paintable regions");
    println!("starred: {starred}, unique paints: {unique}");
    println!(
        "book progress: {:02} / {} stars ({}%)",
        summary.stars, summary.total_pages, summary.percent
    );
    Ok(())
}

/// Sequential 1-based discovery: probe `1.svg`, `2.svg`, ... until the
/// first miss.
fn discover_pages(source: &dyn PageSource, max_probe: u32) -> Vec<String> {
    let mut found = Vec::new();
    for number in 1..=max_probe {
        let id = DirSource::page_name(number);
        if !source.exists(&id) {
            break;
        }
        found.push(id);
    }
    tracing::info!(count = found.len(), "pages discovered");
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinta_engine::MemorySource;

    #[test]
    fn test_discovery_stops_at_first_gap() {
        let mut source = MemorySource::new();
        source.insert("1.svg", "<svg/>");
        source.insert("2.svg", "<svg/>");
        source.insert("4.svg", "<svg/>");
        let pages = discover_pages(&source, 10);
        assert_eq!(pages, vec!["1.svg", "2.svg"]);
    }

    #[test]
    fn test_discovery_respects_probe_cap() {
        let mut source = MemorySource::new();
        for n in 1..=20 {
            source.insert(format!("{n}.svg"), "<svg/>");
        }
        assert_eq!(discover_pages(&source, 5).len(), 5);
    }
}
