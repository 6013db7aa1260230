//! The user-owned part of dashboard state.

use crate::dataset::Dataset;
use crate::query::ClimateQuery;
use crate::region::Region;
use crate::year::Year;

/// Year, region and the datasets currently drawn.
///
/// `datasets` keeps insertion order: a dataset toggled back on goes to the
/// end, which also decides its line colour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub year: Year,
    pub region: Region,
    pub datasets: Vec<Dataset>,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            year: Year::default(),
            region: Region::default(),
            datasets: Dataset::ALL.to_vec(),
        }
    }
}

impl Selection {
    pub fn set_year(&mut self, year: Year) {
        self.year = year;
    }

    pub fn set_region(&mut self, region: Region) {
        self.region = region;
    }

    /// Remove `dataset` if selected, otherwise append it.
    pub fn toggle_dataset(&mut self, dataset: Dataset) {
        if let Some(pos) = self.datasets.iter().position(|d| *d == dataset) {
            self.datasets.remove(pos);
        } else {
            self.datasets.push(dataset);
        }
    }

    pub fn is_selected(&self, dataset: Dataset) -> bool {
        self.datasets.contains(&dataset)
    }

    /// The request that fetches records for this selection.
    pub fn query(&self) -> ClimateQuery {
        ClimateQuery::new(self.region, self.year)
    }
}
