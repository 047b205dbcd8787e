use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// One row of the source spreadsheet. Column names match the CSV header.
#[derive(Debug, Deserialize)]
struct CityRecord {
    #[serde(rename = "Heritage Cities")]
    name: String,
    #[serde(rename = "Art Forms / Culture")]
    art_form: String,
    #[serde(rename = "Latitude")]
    latitude: f64,
    #[serde(rename = "Longitude")]
    longitude: f64,
    #[serde(rename = "Tourism Tips")]
    tourism_tip: String,
}

/// One curated heritage city. The `slug` is the stable identifier used in
/// URLs and as the image-store folder key.
#[derive(Debug, Clone, Serialize)]
pub struct HeritageCity {
    pub slug: String,
    pub name: String,
    pub art_form: String,
    pub latitude: f64,
    pub longitude: f64,
    pub tourism_tip: String,
}

/// The in-memory city table, loaded once at startup and immutable afterwards.
#[derive(Debug)]
pub struct Atlas {
    cities: Vec<HeritageCity>,
}

impl Atlas {
    /// Loads the atlas from a CSV file, preserving source row order.
    pub fn load(path: &Path) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path)
            .with_context(|| format!("Failed to open city atlas at {}", path.display()))?;

        let mut cities = Vec::new();
        let mut seen = HashSet::new();
        for (i, record) in reader.deserialize::<CityRecord>().enumerate() {
            // Header is row 1, so data row N is file row N+1
            let record =
                record.with_context(|| format!("Malformed city record at row {}", i + 2))?;
            let slug = city_slug(&record.name);
            if !seen.insert(slug.clone()) {
                bail!("Duplicate city '{}' at row {}", record.name, i + 2);
            }
            cities.push(HeritageCity {
                slug,
                name: record.name.trim().to_string(),
                art_form: record.art_form.trim().to_string(),
                latitude: record.latitude,
                longitude: record.longitude,
                tourism_tip: record.tourism_tip.trim().to_string(),
            });
        }

        if cities.is_empty() {
            bail!("City atlas {} contains no records", path.display());
        }
        Ok(Self { cities })
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// All cities in table order.
    pub fn cities(&self) -> &[HeritageCity] {
        &self.cities
    }

    /// Cities whose art-form tag is in `art_forms`, in table order.
    /// An empty filter selects everything.
    pub fn filtered(&self, art_forms: &[String]) -> Vec<&HeritageCity> {
        self.cities
            .iter()
            .filter(|c| art_forms.is_empty() || art_forms.iter().any(|f| f == &c.art_form))
            .collect()
    }

    pub fn by_slug(&self, slug: &str) -> Option<&HeritageCity> {
        self.cities.iter().find(|c| c.slug == slug)
    }

    /// Distinct art-form tags in first-seen order, for the filter widget.
    pub fn art_forms(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.cities
            .iter()
            .filter(|c| seen.insert(c.art_form.as_str()))
            .map(|c| c.art_form.as_str())
            .collect()
    }
}

/// Stable city identifier: lower-cased display name with whitespace removed.
pub fn city_slug(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "\
Heritage Cities,Art Forms / Culture,Latitude,Longitude,Tourism Tips
Bishnupur,Terracotta Temples,23.074,87.32,Visit during the Bishnupur Mela.
Rani ki Vav,Stepwell Architecture,23.8589,72.1017,Carry water; the site has little shade.
";

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_all_rows_in_order() {
        let file = write_csv(SAMPLE);
        let atlas = Atlas::load(file.path()).unwrap();
        assert_eq!(atlas.len(), 2);
        assert_eq!(atlas.cities()[0].name, "Bishnupur");
        assert_eq!(atlas.cities()[1].slug, "ranikivav");
    }

    #[test]
    fn malformed_row_errors_with_row_context() {
        let file = write_csv(
            "Heritage Cities,Art Forms / Culture,Latitude,Longitude,Tourism Tips\n\
             Bishnupur,Terracotta Temples,not-a-number,87.32,tip\n",
        );
        let err = Atlas::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("row 2"), "was: {err}");
    }

    #[test]
    fn duplicate_city_rejected() {
        let file = write_csv(
            "Heritage Cities,Art Forms / Culture,Latitude,Longitude,Tourism Tips\n\
             Mandu,Afghan Architecture,22.333,75.402,tip\n\
             mandu,Afghan Architecture,22.333,75.402,tip\n",
        );
        assert!(Atlas::load(file.path()).is_err());
    }

    #[test]
    fn filter_by_art_form() {
        let file = write_csv(SAMPLE);
        let atlas = Atlas::load(file.path()).unwrap();
        let hits = atlas.filtered(&["Terracotta Temples".to_string()]);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Bishnupur");
        // empty filter means everything
        assert_eq!(atlas.filtered(&[]).len(), 2);
    }

    #[test]
    fn slug_lowercases_and_strips_spaces() {
        assert_eq!(city_slug("Rani ki Vav"), "ranikivav");
        assert_eq!(city_slug("  Champaner-Pavagadh "), "champaner-pavagadh");
        assert_eq!(city_slug("Deogarh (Jharkhand)"), "deogarh(jharkhand)");
    }
}
