//! The cart store: in-memory lines with write-through JSON persistence.

use std::num::NonZeroU32;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use wdb_core::LineId;

use crate::catalog::Product;

use super::line::{CartLineItem, line_id};

/// Snapshot schema version written by this build.
const SNAPSHOT_VERSION: u32 = 1;

/// The persisted layout of the cart file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshot {
    /// Schema version; snapshots with an unknown version are discarded
    pub version: u32,
    /// When the snapshot was last written
    pub saved_at: DateTime<Utc>,
    pub lines: Vec<CartLineItem>,
}

/// The shopping cart.
///
/// Every mutation persists the full cart back to disk before returning,
/// so a crash or restart loses at most nothing. Reads are answered from
/// memory and never touch the file.
#[derive(Debug)]
pub struct CartStore {
    path: PathBuf,
    lines: Vec<CartLineItem>,
}

impl CartStore {
    /// Open the cart persisted at `path`.
    ///
    /// A missing file is a normal first run. A file that cannot be read
    /// or parsed, or that carries an unknown snapshot version, is logged
    /// and treated as empty: the customer keeps shopping with a fresh
    /// cart instead of hitting an error.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let lines = load_lines(&path);
        Self { path, lines }
    }

    /// The cart lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLineItem] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add `quantity` units of a product in the given color and size.
    ///
    /// If the cart already holds a line for the same product/color/size,
    /// the quantities are summed instead of appending a duplicate line.
    /// Returns the id of the line the units landed on.
    pub fn add_item(
        &mut self,
        product: &Product,
        quantity: NonZeroU32,
        color: impl Into<String>,
        size: impl Into<String>,
    ) -> LineId {
        let item = CartLineItem::new(product, quantity, color, size);
        let id = item.id.clone();
        self.merge_or_push(item);
        self.persist();
        id
    }

    /// Remove a line. Returns whether anything was removed; removing an
    /// id that is not in the cart is a no-op.
    pub fn remove_item(&mut self, id: &LineId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.id != *id);
        let removed = self.lines.len() != before;
        if removed {
            self.persist();
        }
        removed
    }

    /// Replace a line's quantity.
    ///
    /// A quantity of zero removes the line; zero is never stored. An
    /// unknown id is a no-op.
    pub fn set_quantity(&mut self, id: &LineId, quantity: u32) {
        let Some(quantity) = NonZeroU32::new(quantity) else {
            self.remove_item(id);
            return;
        };

        if let Some(line) = self.lines.iter_mut().find(|line| line.id == *id) {
            line.quantity = quantity;
            self.persist();
        }
    }

    /// Change the color/size selection of a line, rederiving its id.
    ///
    /// When the new id collides with a line already in the cart, the two
    /// merge by summing quantities into the pre-existing line, which
    /// keeps its position. Without a collision the edited line stays
    /// where it was under its new id. Returns the id the units ended up
    /// under, or `None` for an unknown line id.
    pub fn edit_selection(
        &mut self,
        id: &LineId,
        new_color: impl Into<String>,
        new_size: impl Into<String>,
    ) -> Option<LineId> {
        let index = self.lines.iter().position(|line| line.id == *id)?;
        let mut line = self.lines.remove(index);

        line.selected_color = new_color.into();
        line.selected_size = new_size.into();
        line.id = line_id(&line.product.id, &line.selected_color, &line.selected_size);
        let new_id = line.id.clone();

        if let Some(existing) = self.lines.iter_mut().find(|l| l.id == new_id) {
            existing.quantity = existing.quantity.saturating_add(line.quantity.get());
        } else {
            self.lines.insert(index, line);
        }

        self.persist();
        Some(new_id)
    }

    fn merge_or_push(&mut self, item: CartLineItem) {
        if let Some(existing) = self.lines.iter_mut().find(|line| line.id == item.id) {
            existing.quantity = existing.quantity.saturating_add(item.quantity.get());
        } else {
            self.lines.push(item);
        }
    }

    /// Rewrite the snapshot file from the in-memory lines.
    ///
    /// Failures are logged and swallowed; the in-memory cart stays
    /// authoritative for the rest of the session.
    fn persist(&self) {
        let snapshot = CartSnapshot {
            version: SNAPSHOT_VERSION,
            saved_at: Utc::now(),
            lines: self.lines.clone(),
        };

        let json = match serde_json::to_string_pretty(&snapshot) {
            Ok(json) => json,
            Err(e) => {
                error!(error = %e, "could not serialize cart snapshot");
                return;
            }
        };

        if let Err(e) = std::fs::write(&self.path, json) {
            error!(
                path = %self.path.display(),
                error = %e,
                "could not write cart snapshot"
            );
        }
    }
}

fn load_lines(path: &Path) -> Vec<CartLineItem> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
        Err(e) => {
            warn!(
                path = %path.display(),
                error = %e,
                "could not read cart snapshot, starting empty"
            );
            return Vec::new();
        }
    };

    match serde_json::from_str::<CartSnapshot>(&raw) {
        Ok(snapshot) if snapshot.version == SNAPSHOT_VERSION => snapshot.lines,
        Ok(snapshot) => {
            warn!(
                version = snapshot.version,
                "unknown cart snapshot version, starting empty"
            );
            Vec::new()
        }
        Err(e) => {
            warn!(
                path = %path.display(),
                error = %e,
                "corrupt cart snapshot, starting empty"
            );
            Vec::new()
        }
    }
}
