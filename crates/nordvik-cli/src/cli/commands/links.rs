//! Catalog listing and opening without the portal UI.

use anyhow::{Context, Result};
use comfy_table::Table;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use nordvik_core::catalog::{ServiceCategory, ServiceLink};
use nordvik_core::config::Config;

/// Prints the catalog (optionally filtered by category) as a table.
pub fn list(config: &Config, category: Option<&str>) -> Result<()> {
    let category = match category {
        Some(name) => Some(
            ServiceCategory::parse(name)
                .with_context(|| format!("Unknown category '{name}' (main, tools, support, admin)"))?,
        ),
        None => None,
    };

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_header(vec!["ID", "Title", "Category", "Gating", "URL"]);

    for link in config.catalog() {
        if category.is_some_and(|c| link.category != c) {
            continue;
        }
        table.add_row(vec![
            link.id.clone(),
            link.title.clone(),
            link.category.name().to_string(),
            gating(&link).to_string(),
            link.url.clone(),
        ]);
    }

    println!("{table}");
    Ok(())
}

/// Opens a catalog entry in the system browser.
pub fn open_link(config: &Config, id: &str) -> Result<()> {
    let links = config.catalog();
    let link = links
        .iter()
        .find(|link| link.id == id)
        .with_context(|| format!("No catalog entry with id '{id}'"))?;

    if link.is_placeholder() {
        anyhow::bail!("{} has no destination yet", link.title);
    }

    open::that_detached(&link.url).with_context(|| format!("Failed to open {}", link.url))?;
    println!("Opening {} ({})", link.title, link.url);
    Ok(())
}

fn gating(link: &ServiceLink) -> &'static str {
    if link.requires_admin {
        "admin"
    } else if link.requires_auth {
        "sign-in"
    } else {
        ""
    }
}
