use std::fmt;

// ---------------------------------------------------------------------------
// Outcome – binary launch result
// ---------------------------------------------------------------------------

/// Result class of a single launch. The source data encodes this as a
/// 1 (success) / 0 (failure) column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    /// Decode the dataset's 1/0 class column. Anything else is rejected.
    pub fn from_flag(flag: u8) -> Option<Outcome> {
        match flag {
            1 => Some(Outcome::Success),
            0 => Some(Outcome::Failure),
            _ => None,
        }
    }

    /// Encode back to the 1/0 class used on the scatter y-axis.
    pub fn as_flag(&self) -> u8 {
        match self {
            Outcome::Success => 1,
            Outcome::Failure => 0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Success => "Success",
            Outcome::Failure => "Failure",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the dataset
// ---------------------------------------------------------------------------

/// A single launch (one row of the source table).
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    /// Launch site identifier, e.g. "CCAFS LC-40".
    pub site: String,
    /// Payload mass in kilograms, non-negative.
    pub payload_mass_kg: f64,
    /// Booster version category, used for scatter color grouping.
    pub booster_category: String,
    /// Success / failure class.
    pub outcome: Outcome,
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with statistics derived once at construction.
/// Immutable after loading; shared by reference into the view model.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    /// All launches, in file order.
    pub records: Vec<LaunchRecord>,
    /// Distinct launch sites, in first-appearance order.
    pub sites: Vec<String>,
    /// Smallest payload mass in the dataset (0.0 when empty).
    pub min_payload: f64,
    /// Largest payload mass in the dataset (0.0 when empty).
    pub max_payload: f64,
}

impl LaunchDataset {
    /// Build the dataset and its derived statistics from loaded records.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let mut sites: Vec<String> = Vec::new();
        for rec in &records {
            if !sites.iter().any(|s| s == &rec.site) {
                sites.push(rec.site.clone());
            }
        }

        let min_payload = records
            .iter()
            .map(|r| r.payload_mass_kg)
            .fold(f64::INFINITY, f64::min);
        let max_payload = records
            .iter()
            .map(|r| r.payload_mass_kg)
            .fold(f64::NEG_INFINITY, f64::max);

        let (min_payload, max_payload) = if records.is_empty() {
            (0.0, 0.0)
        } else {
            (min_payload, max_payload)
        };

        LaunchDataset {
            records,
            sites,
            min_payload,
            max_payload,
        }
    }

    /// Number of launches.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(site: &str, payload: f64, booster: &str, outcome: Outcome) -> LaunchRecord {
        LaunchRecord {
            site: site.to_string(),
            payload_mass_kg: payload,
            booster_category: booster.to_string(),
            outcome,
        }
    }

    #[test]
    fn outcome_flag_round_trip() {
        assert_eq!(Outcome::from_flag(1), Some(Outcome::Success));
        assert_eq!(Outcome::from_flag(0), Some(Outcome::Failure));
        assert_eq!(Outcome::from_flag(2), None);
        assert_eq!(Outcome::Success.as_flag(), 1);
        assert_eq!(Outcome::Failure.as_flag(), 0);
        assert_eq!(Outcome::Failure.to_string(), "Failure");
    }

    #[test]
    fn derived_stats() {
        let ds = LaunchDataset::from_records(vec![
            rec("B", 1500.0, "v1", Outcome::Failure),
            rec("A", 500.0, "v1", Outcome::Success),
            rec("B", 3000.0, "v2", Outcome::Success),
        ]);
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.sites, vec!["B".to_string(), "A".to_string()]);
        assert_eq!(ds.min_payload, 500.0);
        assert_eq!(ds.max_payload, 3000.0);
    }

    #[test]
    fn empty_dataset_stats() {
        let ds = LaunchDataset::from_records(Vec::new());
        assert!(ds.is_empty());
        assert!(ds.sites.is_empty());
        assert_eq!(ds.min_payload, 0.0);
        assert_eq!(ds.max_payload, 0.0);
    }
}
