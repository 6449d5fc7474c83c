//! Category and collection browsing commands.

use wdb_storefront::catalog::CatalogError;
use wdb_storefront::state::AppState;

/// Print the category tree: top-level categories with their children
/// indented beneath them.
#[allow(clippy::print_stdout)]
pub async fn categories(state: &AppState) -> Result<(), CatalogError> {
    let categories = state.catalog().list_categories().await?;

    for parent in categories.iter().filter(|c| c.parent_id.is_none()) {
        println!("{}  ({})", parent.name, parent.permalink);
        for child in categories
            .iter()
            .filter(|c| c.parent_id.as_ref() == Some(&parent.id))
        {
            println!("  {}  ({})", child.name, child.permalink);
        }
    }
    Ok(())
}

/// Print curated collections with their editorial tiles.
#[allow(clippy::print_stdout)]
pub async fn collections(state: &AppState) -> Result<(), CatalogError> {
    let collections = state.catalog().list_collections().await?;

    for collection in &collections {
        println!("{}  ({})", collection.name, collection.permalink);
        if let Some(description) = &collection.description {
            println!("  {description}");
        }
        for item in &collection.items {
            println!("  - {}", item.title);
        }
    }
    Ok(())
}
