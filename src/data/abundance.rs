use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use itertools::Itertools;
use serde::Deserialize;

use crate::algorithm::isotopologue::IsotopologueRow;
use crate::chemistry::formula::SumFormula;
use crate::data::distribution::{ElementContribution, IsotopeProfile};
use crate::error::IsodistError;

/// One row of the tab-delimited abundance table.
#[derive(Debug, Deserialize)]
struct AbundanceRow {
    element: String,
    isotope: u32,
    #[serde(rename = "mass shift")]
    mass_shift: i64,
    abundance: f64,
}

/// Per-element isotope profiles loaded from a tab-delimited abundance table.
///
/// Expected header columns: `element`, `isotope`, `mass shift`, `abundance`.
/// Built once at startup and shared read-only with the whole computation;
/// never mutated afterwards.
pub struct AbundanceTable {
    profiles: HashMap<String, IsotopeProfile>,
}

impl AbundanceTable {
    pub fn from_tsv_path(path: &Path) -> Result<Self, IsodistError> {
        let reader = csv::ReaderBuilder::new().delimiter(b'\t').from_path(path)?;
        Self::from_csv_reader(reader)
    }

    pub fn from_tsv_reader<R: Read>(reader: R) -> Result<Self, IsodistError> {
        let reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .from_reader(reader);
        Self::from_csv_reader(reader)
    }

    fn from_csv_reader<R: Read>(mut reader: csv::Reader<R>) -> Result<Self, IsodistError> {
        let mut rows: Vec<AbundanceRow> = Vec::new();
        for record in reader.deserialize() {
            let row: AbundanceRow = record?;
            if row.mass_shift < 0 {
                return Err(IsodistError::NegativeMassShift {
                    element: row.element,
                    isotope: row.isotope,
                    shift: row.mass_shift,
                });
            }
            log::debug!(
                "abundance row: element {} isotope {} shift {} abundance {}",
                row.element,
                row.isotope,
                row.mass_shift,
                row.abundance
            );
            rows.push(row);
        }

        let grouped = rows
            .into_iter()
            .map(|row| (row.element.clone(), row))
            .into_group_map();

        let mut profiles = HashMap::new();
        for (element, element_rows) in grouped {
            let pairs: Vec<(usize, f64)> = element_rows
                .iter()
                .map(|row| (row.mass_shift as usize, row.abundance))
                .collect();
            profiles.insert(element.clone(), IsotopeProfile::new(&element, &pairs)?);
        }

        Ok(AbundanceTable { profiles })
    }

    pub fn profile(&self, element: &str) -> Option<&IsotopeProfile> {
        self.profiles.get(element)
    }

    /// Pairs every element of the formula with its profile, in declaration order.
    ///
    /// Fails with a single [`IsodistError::IncompleteIsotopeData`] listing all
    /// missing elements, so a formula never reaches the convolution pipeline
    /// with a silently absent contributor.
    pub fn contributions_for(
        &self,
        formula: &SumFormula,
    ) -> Result<Vec<ElementContribution>, IsodistError> {
        let missing: Vec<&str> = formula
            .elements
            .iter()
            .filter(|(element, _)| !self.profiles.contains_key(element))
            .map(|(element, _)| element.as_str())
            .collect();

        if !missing.is_empty() {
            return Err(IsodistError::IncompleteIsotopeData(missing.join(", ")));
        }

        Ok(formula
            .elements
            .iter()
            .map(|(element, count)| ElementContribution {
                element: element.clone(),
                count: *count,
                profile: self.profiles[element].clone(),
            })
            .collect())
    }
}

/// Writes the final rows as a tab-delimited `mass`/`shift`/`abundance` table.
pub fn write_rows(path: &Path, rows: &[IsotopologueRow]) -> Result<(), IsodistError> {
    let mut writer = csv::WriterBuilder::new().delimiter(b'\t').from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
