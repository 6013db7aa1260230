use crate::dataset::Dataset;
use crate::region::Region;
use crate::year::Year;

/// Parameters of one climate list request.
///
/// `region` and `year` are always sent. The dashboard leaves `dataset`
/// unset so every series for the region and year comes back in one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClimateQuery {
    pub dataset: Option<Dataset>,
    pub ordering: Option<String>,
    pub page: Option<u32>,
    pub region: Region,
    pub year: Year,
}

impl ClimateQuery {
    pub fn new(region: Region, year: Year) -> Self {
        Self {
            dataset: None,
            ordering: None,
            page: None,
            region,
            year,
        }
    }

    pub fn with_dataset(mut self, dataset: Dataset) -> Self {
        self.dataset = Some(dataset);
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_ordering(mut self, ordering: impl Into<String>) -> Self {
        self.ordering = Some(ordering.into());
        self
    }

    /// Query string pairs in a stable order, unset filters omitted.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(5);
        if let Some(dataset) = self.dataset {
            pairs.push(("dataset", dataset.code().to_string()));
        }
        if let Some(ordering) = &self.ordering {
            pairs.push(("ordering", ordering.clone()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        pairs.push(("region", self.region.code().to_string()));
        pairs.push(("year", self.year.to_string()));
        pairs
    }

    /// `key=value&...` form, for logging. Codes are URL safe, so no escaping
    /// is needed except for a caller supplied ordering.
    pub fn to_query_string(&self) -> String {
        self.to_pairs()
            .iter()
            .map(|(k, v)| format!("{}={}", k, v.replace('&', "%26").replace(' ', "%20")))
            .collect::<Vec<_>>()
            .join("&")
    }
}
