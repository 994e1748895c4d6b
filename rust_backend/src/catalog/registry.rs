//! The boundary catalog.
//!
//! A read-only registry built once from boundary records. Lookups are O(1)
//! through identifier-keyed maps; iteration follows insertion order, which the
//! resolver relies on for tie-breaking.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::catalog::loader::{parse_boundary_document, BoundaryDocument};
use crate::color::ColorAssigner;
use crate::core::domain::{RelatedRegionGroup, TimezoneRegion};
use crate::core::error::{EngineError, EngineResult};
use crate::geometry::point_in_polygon;

const EMBEDDED_BOUNDARIES: &str = include_str!("../../data/boundaries.json");

static EMBEDDED: Lazy<EngineResult<Arc<BoundaryCatalog>>> = Lazy::new(|| {
    let catalog = BoundaryCatalog::from_json_str(EMBEDDED_BOUNDARIES, &ColorAssigner::default())?;
    log::info!(
        "Boundary catalog initialised: {} regions, {} related groups",
        catalog.len(),
        catalog.groups().len()
    );
    Ok(Arc::new(catalog))
});

/// Registry of timezone regions and their related-identifier groups.
#[derive(Debug, Clone, Default)]
pub struct BoundaryCatalog {
    regions: Vec<TimezoneRegion>,
    index: HashMap<String, usize>,
    /// Identifiers without their own polygon, mapped to the canonical region.
    aliases: HashMap<String, usize>,
    groups: Vec<RelatedRegionGroup>,
    group_of: HashMap<String, usize>,
}

impl BoundaryCatalog {
    /// The catalog built from the embedded boundary data.
    ///
    /// Initialised on first use, exactly once, even under concurrent callers.
    pub fn embedded() -> EngineResult<Arc<BoundaryCatalog>> {
        EMBEDDED.clone()
    }

    /// Build a catalog from a JSON boundary document.
    ///
    /// Records without a `color` get one from `colors`.
    pub fn from_json_str(json: &str, colors: &ColorAssigner) -> EngineResult<Self> {
        let document = parse_boundary_document(json)?;
        Self::from_document(document, colors)
    }

    pub fn from_document(document: BoundaryDocument, colors: &ColorAssigner) -> EngineResult<Self> {
        let regions = document
            .regions
            .into_iter()
            .map(|record| {
                let color = record
                    .color
                    .unwrap_or_else(|| colors.color_for(&record.id));
                TimezoneRegion::new(record.id, record.name, record.boundary, record.center, color)
            })
            .collect::<EngineResult<Vec<_>>>()?;

        Self::from_regions(regions, document.related)
    }

    /// Build a catalog from already constructed regions.
    ///
    /// # Errors
    ///
    /// `CatalogLoad` when a region identifier repeats, when a group's
    /// canonical entry is not a region, or when an identifier appears in
    /// more than one group.
    pub fn from_regions(
        regions: Vec<TimezoneRegion>,
        groups: Vec<RelatedRegionGroup>,
    ) -> EngineResult<Self> {
        let mut index = HashMap::with_capacity(regions.len());
        for (i, region) in regions.iter().enumerate() {
            if index.insert(region.id().to_string(), i).is_some() {
                return Err(EngineError::CatalogLoad(format!(
                    "Duplicate region id: {}",
                    region.id()
                )));
            }
            if !point_in_polygon(region.center(), region.boundary()) {
                log::warn!(
                    "Center of {} lies outside its own boundary; exact self-resolution will not hold",
                    region.id()
                );
            }
        }

        let mut aliases = HashMap::new();
        let mut group_of = HashMap::new();
        for (g, group) in groups.iter().enumerate() {
            let canonical = *index.get(&group.canonical).ok_or_else(|| {
                EngineError::CatalogLoad(format!(
                    "Related group canonical '{}' is not a region",
                    group.canonical
                ))
            })?;

            for id in std::iter::once(&group.canonical).chain(group.members.iter()) {
                match group_of.insert(id.clone(), g) {
                    Some(prev) if prev != g => {
                        return Err(EngineError::CatalogLoad(format!(
                            "Identifier '{}' belongs to more than one related group",
                            id
                        )));
                    }
                    _ => {}
                }
                if !index.contains_key(id) {
                    aliases.insert(id.clone(), canonical);
                }
            }
        }

        Ok(Self {
            regions,
            index,
            aliases,
            groups,
            group_of,
        })
    }

    /// Look up a region by identifier. Aliases return their canonical region.
    pub fn lookup(&self, id: &str) -> EngineResult<&TimezoneRegion> {
        self.index
            .get(id)
            .or_else(|| self.aliases.get(id))
            .map(|&i| &self.regions[i])
            .ok_or_else(|| EngineError::UnknownRegion(id.to_string()))
    }

    /// All regions in insertion order.
    pub fn all(&self) -> &[TimezoneRegion] {
        &self.regions
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.regions.iter().map(|r| r.id())
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn groups(&self) -> &[RelatedRegionGroup] {
        &self.groups
    }

    /// `true` for region identifiers and aliases alike.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id) || self.aliases.contains_key(id)
    }

    /// Identifier of the region whose boundary represents `id`.
    pub fn canonical_id(&self, id: &str) -> EngineResult<&str> {
        self.lookup(id).map(|r| r.id())
    }

    /// Every identifier sharing a canonical boundary with `id`, `id` included.
    ///
    /// A region outside any group is related only to itself.
    pub fn related_ids(&self, id: &str) -> EngineResult<BTreeSet<&str>> {
        if !self.contains(id) {
            return Err(EngineError::UnknownRegion(id.to_string()));
        }

        let mut related = BTreeSet::new();
        match self.group_of.get(id) {
            Some(&g) => {
                let group = &self.groups[g];
                related.insert(group.canonical.as_str());
                related.extend(group.members.iter().map(String::as_str));
            }
            None => {
                if let Some((key, _)) = self.index.get_key_value(id) {
                    related.insert(key.as_str());
                }
            }
        }
        Ok(related)
    }
}
