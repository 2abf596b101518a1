//! hilite - mark passages of an HTML file from the command line
//!
//! Usage: `hilite <page.html> <passage>...`
//!
//! Each passage is located in the page text, selected and marked as if
//! the user had dragged over it with highlight mode on. Prints the marked
//! page, then the marked content as the popup would receive it.
//! `HILITE_CONFIG` may name a JSON file with controller settings.

use anyhow::{bail, Context, Result};
use hilite_content::{ContentConfig, ContentScript, MemoryStore, Request};
use hilite_core::find_text;
use hilite_dom::Selection;
use hilite_html::get_outer_html;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        bail!("usage: hilite <page.html> <passage>...");
    };
    let passages: Vec<String> = args.collect();

    let config = match std::env::var("HILITE_CONFIG") {
        Ok(config_path) => {
            let text = std::fs::read_to_string(&config_path)
                .with_context(|| format!("reading config {config_path}"))?;
            ContentConfig::from_json(&text).with_context(|| format!("parsing config {config_path}"))?
        }
        Err(_) => ContentConfig::default(),
    };

    let html = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    let mut doc = hilite_html::parse_with_url(&html, &path).context("parsing HTML")?;
    let Some(body) = doc.body() else {
        bail!("{path} has no body");
    };

    let mut script = ContentScript::new(config, MemoryStore::new());
    script.handle_message(&mut doc, Request::ToggleHighlight { enabled: true });

    for passage in &passages {
        let Some(range) = find_text(doc.tree(), body, passage) else {
            tracing::warn!("passage not found: {:?}", passage);
            continue;
        };
        let mut selection = Selection::from_range(range);
        let markers = script.on_mouse_up(&mut doc, &mut selection, body);
        tracing::info!("{:?}: {} markers", passage, markers.len());
    }

    println!("{}", get_outer_html(doc.tree(), body));
    let marked = script
        .handle_json(&mut doc, r#"{"action": "getMarkedContent"}"#)
        .context("listing marked content")?;
    println!("{marked}");
    Ok(())
}
