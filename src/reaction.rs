//! Reaction records and reaction tables.
//!
//! The tabular surface of a reaction table always uses the six columns listed in
//! [`COLUMNS`], in that order. A missing catalyst is written as an empty string.

use crate::AssemblyError;
use crate::autocatalysis::is_autocatalytic;
use std::collections::BTreeSet;
use std::fmt;
use std::io::Write;

/// Column names of the tabular reaction surface.
pub const COLUMNS: [&str; 6] = [
    "Reaction",
    "Layer",
    "Constituent 1",
    "Constituent 2",
    "Catalyst",
    "Product",
];

/// A single binary merge `constituent_1 + constituent_2 -> product`, optionally catalysed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reaction {
    /// Sequence number assigned at creation. Never reused within one reaction set.
    pub id: usize,
    /// Recursion depth at which the reaction was recorded (the root reaction has layer `0`).
    pub layer: usize,
    pub constituent_1: String,
    pub constituent_2: String,
    pub catalyst: Option<String>,
    pub product: String,
}

impl Reaction {
    /// The catalyst as written on the tabular surface (empty if there is none).
    pub fn catalyst_str(&self) -> &str {
        self.catalyst.as_deref().unwrap_or("")
    }

    /// Both constituents of this reaction.
    pub fn constituents(&self) -> [&str; 2] {
        [self.constituent_1.as_str(), self.constituent_2.as_str()]
    }

    fn record(&self) -> [String; 6] {
        [
            self.id.to_string(),
            self.layer.to_string(),
            self.constituent_1.clone(),
            self.constituent_2.clone(),
            self.catalyst_str().to_string(),
            self.product.clone(),
        ]
    }
}

/// All reactions of one generated network, in generation order.
///
/// Children are always generated before their parent, so the reaction producing
/// the final product is the last one.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReactionSet {
    final_product: String,
    reactions: Vec<Reaction>,
}

impl ReactionSet {
    /// Create a reaction set from already generated reactions.
    pub fn new(final_product: impl Into<String>, reactions: Vec<Reaction>) -> ReactionSet {
        ReactionSet {
            final_product: final_product.into(),
            reactions,
        }
    }

    pub fn final_product(&self) -> &str {
        &self.final_product
    }

    pub fn reactions(&self) -> &[Reaction] {
        &self.reactions
    }

    pub fn reactions_mut(&mut self) -> &mut [Reaction] {
        &mut self.reactions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Reaction> {
        self.reactions.iter()
    }

    pub fn len(&self) -> usize {
        self.reactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reactions.is_empty()
    }

    /// Distinct products synthesised by this set.
    pub fn products(&self) -> BTreeSet<&str> {
        self.reactions.iter().map(|r| r.product.as_str()).collect()
    }

    /// The greatest recorded layer, or `0` for an empty set.
    pub fn max_layer(&self) -> usize {
        max_layer(&self.reactions)
    }

    /// Depth counted at the constituent level, i.e. `max_layer() + 1`.
    ///
    /// An empty set (single-element final product) has depth `1`.
    pub fn max_depth(&self) -> usize {
        self.max_layer() + 1
    }

    /// Check whether the whole set is autocatalytic (requires at least one catalyst).
    pub fn is_autocatalytic(&self) -> bool {
        is_autocatalytic(&self.reactions, true)
    }

    /// Write the reaction table as CSV with the [`COLUMNS`] header.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), AssemblyError> {
        write_reactions_csv(&self.reactions, writer)
    }
}

impl<'a> IntoIterator for &'a ReactionSet {
    type Item = &'a Reaction;
    type IntoIter = std::slice::Iter<'a, Reaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.reactions.iter()
    }
}

impl fmt::Display for ReactionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_table(f, &self.reactions)
    }
}

pub(crate) fn max_layer(reactions: &[Reaction]) -> usize {
    reactions.iter().map(|r| r.layer).max().unwrap_or(0)
}

/// Write any slice of reactions as CSV with the [`COLUMNS`] header.
pub fn write_reactions_csv<W: Write>(
    reactions: &[Reaction],
    writer: W,
) -> Result<(), AssemblyError> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(COLUMNS)?;
    for reaction in reactions {
        writer.write_record(reaction.record())?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Render reactions as a plain, column-aligned text table.
pub(crate) fn write_table(f: &mut fmt::Formatter<'_>, reactions: &[Reaction]) -> fmt::Result {
    let records: Vec<[String; 6]> = reactions.iter().map(Reaction::record).collect();
    let mut widths = COLUMNS.map(str::len);
    for record in &records {
        for (width, cell) in widths.iter_mut().zip(record.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header: Vec<String> = COLUMNS
        .iter()
        .zip(widths.iter())
        .map(|(name, &width)| format!("{name:>width$}"))
        .collect();
    writeln!(f, "{}", header.join("  "))?;
    for record in &records {
        let row: Vec<String> = record
            .iter()
            .zip(widths.iter())
            .map(|(cell, &width)| format!("{cell:>width$}"))
            .collect();
        writeln!(f, "{}", row.join("  "))?;
    }
    Ok(())
}
