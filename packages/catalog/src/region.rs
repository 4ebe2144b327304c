//! Swedish regions (län).
//!
//! The region table is fixed at compile time: the 21 counties of the
//! current Swedish administrative division, keyed by their official
//! numeric code (länskod).

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use serde::Serialize;

use crate::error::{CatalogError, Result};
use crate::municipality::Municipality;

/// A Swedish region (county).
///
/// Obtained through [`Region::find_by_id`] or [`Region::all`]. The name
/// carries the " län" suffix (e.g. "Stockholms län").
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Region {
    id: u16,
    name: String,
}

impl Region {
    /// Look up a region by its numeric id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::RegionNotFound`] if no region has the id.
    ///
    /// # Examples
    ///
    /// ```
    /// use indelning_catalog::Region;
    ///
    /// let region = Region::find_by_id(14)?;
    /// assert_eq!(region.id(), 14);
    /// assert_eq!(region.name(), "Västra Götalands län");
    /// # Ok::<(), indelning_catalog::CatalogError>(())
    /// ```
    pub fn find_by_id(id: u16) -> Result<Self> {
        let name = REGIONS_BY_ID
            .get(&id)
            .ok_or(CatalogError::RegionNotFound(id))?;
        tracing::trace!(id, "region resolved");
        Ok(Self::from_row(id, name))
    }

    /// Iterate over every region in ascending id order.
    pub fn all() -> impl Iterator<Item = Self> {
        REGION_DATA.iter().map(|&(id, name)| Self::from_row(id, name))
    }

    /// Iterate over the municipalities belonging to this region, in
    /// ascending id order.
    pub fn municipalities(&self) -> impl Iterator<Item = Municipality> {
        let id = self.id;
        Municipality::all().filter(move |municipality| municipality.id() / 100 == id)
    }

    /// The numeric id (länskod).
    #[must_use]
    pub fn id(&self) -> u16 {
        self.id
    }

    /// The name, including the " län" suffix.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    fn from_row(id: u16, base_name: &str) -> Self {
        Self {
            id,
            name: format!("{base_name} län"),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Region table: id to base name (suffix appended at construction).
///
/// Codes 2, 11, 15 and 16 are unassigned; they belonged to counties
/// merged away in the 1968-1998 county reforms.
const REGION_DATA: &[(u16, &str)] = &[
    (1, "Stockholms"),
    (3, "Uppsala"),
    (4, "Södermanlands"),
    (5, "Östergötlands"),
    (6, "Jönköpings"),
    (7, "Kronobergs"),
    (8, "Kalmar"),
    (9, "Gotlands"),
    (10, "Blekinge"),
    (12, "Skåne"),
    (13, "Hallands"),
    (14, "Västra Götalands"),
    (17, "Värmlands"),
    (18, "Örebro"),
    (19, "Västmanlands"),
    (20, "Dalarnas"),
    (21, "Gävleborgs"),
    (22, "Västernorrlands"),
    (23, "Jämtlands"),
    (24, "Västerbottens"),
    (25, "Norrbottens"),
];

static REGIONS_BY_ID: LazyLock<HashMap<u16, &'static str>> =
    LazyLock::new(|| REGION_DATA.iter().copied().collect());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_by_id() {
        let region = Region::find_by_id(1).unwrap();
        assert_eq!(region.id(), 1);
        assert_eq!(region.name(), "Stockholms län");
    }

    #[test]
    fn test_find_by_id_not_found() {
        let err = Region::find_by_id(0).unwrap_err();
        assert_eq!(err.to_string(), "Could not find a region with id 0.");
    }

    #[test]
    fn test_find_by_id_unassigned_code() {
        // 15 was Älvsborgs län until the 1998 merger into Västra Götaland.
        assert!(Region::find_by_id(15).is_err());
    }

    #[test]
    fn test_all_is_complete_and_ordered() {
        let ids: Vec<u16> = Region::all().map(|region| region.id()).collect();
        assert_eq!(ids.len(), 21);
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_display_is_name() {
        let region = Region::find_by_id(9).unwrap();
        assert_eq!(region.to_string(), "Gotlands län");
        assert_eq!(region.to_string(), region.name());
    }

    #[test]
    fn test_municipalities_of_gotland() {
        let region = Region::find_by_id(9).unwrap();
        let ids: Vec<u16> = region.municipalities().map(|m| m.id()).collect();
        assert_eq!(ids, vec![980]);
    }
}
