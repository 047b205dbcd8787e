use super::loader::{Atlas, HeritageCity};

/// How far (in degrees, per axis) a clicked map point may sit from a city's
/// stored coordinates and still select it.
pub const COORD_TOLERANCE: f64 = 0.001;

impl Atlas {
    /// Matches a clicked coordinate pair against the (possibly art-form
    /// filtered) city table. Linear scan; the first city in table order with
    /// both axes within `COORD_TOLERANCE` wins.
    ///
    /// Known limitation: two cities closer together than the tolerance
    /// resolve to whichever is listed first. Callers that already know the
    /// city should address it by slug instead of by coordinates.
    pub fn locate(&self, lat: f64, lon: f64, art_forms: &[String]) -> Option<&HeritageCity> {
        self.filtered(art_forms).into_iter().find(|c| {
            (c.latitude - lat).abs() < COORD_TOLERANCE
                && (c.longitude - lon).abs() < COORD_TOLERANCE
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn test_atlas() -> Atlas {
        let csv = "\
Heritage Cities,Art Forms / Culture,Latitude,Longitude,Tourism Tips
Lonar,Crater Geology,19.9853,76.5203,Walk the crater rim at dawn.
Lonar Twin,Crater Geology,19.9857,76.5207,Fictional neighbour within tolerance.
Tawang,Monastic Art,27.586,91.859,Acclimatise before the monastery climb.
";
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(csv.as_bytes()).unwrap();
        Atlas::load(file.path()).unwrap()
    }

    #[test]
    fn click_within_tolerance_selects_city() {
        let atlas = test_atlas();
        let hit = atlas.locate(27.5865, 91.8585, &[]).unwrap();
        assert_eq!(hit.name, "Tawang");
    }

    #[test]
    fn click_outside_tolerance_matches_nothing() {
        let atlas = test_atlas();
        assert!(atlas.locate(27.586, 91.861, &[]).is_none());
        assert!(atlas.locate(0.0, 0.0, &[]).is_none());
    }

    #[test]
    fn one_axis_within_tolerance_is_not_enough() {
        let atlas = test_atlas();
        // latitude matches exactly but longitude is well outside
        assert!(atlas.locate(27.586, 91.87, &[]).is_none());
    }

    #[test]
    fn overlapping_cities_resolve_to_first_in_table_order() {
        let atlas = test_atlas();
        let hit = atlas.locate(19.9855, 76.5205, &[]).unwrap();
        assert_eq!(hit.name, "Lonar");
    }

    #[test]
    fn filter_restricts_the_scan() {
        let atlas = test_atlas();
        let miss = atlas.locate(19.9853, 76.5203, &["Monastic Art".to_string()]);
        assert!(miss.is_none());
    }
}
