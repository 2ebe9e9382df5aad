use crate::data::model::LaunchDataset;
use crate::data::view_model::{PayloadRange, SiteSelection};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// The dataset is loaded once and never mutated; the selection is ephemeral
/// control state, re-read by the charts every frame.
pub struct AppState {
    /// Loaded dataset (None until a file is loaded).
    pub dataset: Option<LaunchDataset>,

    /// Current site selector value.
    pub site: SiteSelection,

    /// Current payload-mass range, clamped to the dataset bounds.
    pub payload_range: PayloadRange,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            site: SiteSelection::All,
            payload_range: PayloadRange::new(0.0, 0.0),
            status_message: None,
            loading: false,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset and reset the controls: all sites
    /// selected, payload range spanning the whole dataset.
    pub fn set_dataset(&mut self, dataset: LaunchDataset) {
        self.site = SiteSelection::All;
        self.payload_range = PayloadRange::new(dataset.min_payload, dataset.max_payload);
        self.dataset = Some(dataset);
        self.status_message = None;
        self.loading = false;
    }

    /// Set the lower range bound, clamped to the dataset bounds and never
    /// above the current upper bound.
    pub fn set_range_lo(&mut self, lo: f64) {
        if let Some(ds) = &self.dataset {
            let lo = lo.clamp(ds.min_payload, ds.max_payload);
            self.payload_range.lo = lo.min(self.payload_range.hi);
        }
    }

    /// Set the upper range bound, clamped to the dataset bounds and never
    /// below the current lower bound.
    pub fn set_range_hi(&mut self, hi: f64) {
        if let Some(ds) = &self.dataset {
            let hi = hi.clamp(ds.min_payload, ds.max_payload);
            self.payload_range.hi = hi.max(self.payload_range.lo);
        }
    }

    /// Number of launches passing the current controls, for the top bar.
    pub fn visible_count(&self) -> usize {
        let Some(ds) = &self.dataset else {
            return 0;
        };
        ds.records
            .iter()
            .filter(|r| self.payload_range.contains(r.payload_mass_kg) && self.site.matches(&r.site))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{LaunchRecord, Outcome};

    fn dataset() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            LaunchRecord {
                site: "A".to_string(),
                payload_mass_kg: 500.0,
                booster_category: "v1".to_string(),
                outcome: Outcome::Success,
            },
            LaunchRecord {
                site: "B".to_string(),
                payload_mass_kg: 3000.0,
                booster_category: "v2".to_string(),
                outcome: Outcome::Failure,
            },
        ])
    }

    #[test]
    fn set_dataset_resets_controls_to_full_range() {
        let mut state = AppState::default();
        state.site = SiteSelection::Site("B".to_string());
        state.set_dataset(dataset());
        assert_eq!(state.site, SiteSelection::All);
        assert_eq!(state.payload_range, PayloadRange::new(500.0, 3000.0));
        assert_eq!(state.visible_count(), 2);
    }

    #[test]
    fn range_bounds_are_clamped_and_ordered() {
        let mut state = AppState::default();
        state.set_dataset(dataset());

        state.set_range_lo(-100.0);
        assert_eq!(state.payload_range.lo, 500.0);

        state.set_range_hi(99999.0);
        assert_eq!(state.payload_range.hi, 3000.0);

        // lo may not cross above hi, and vice versa
        state.set_range_hi(1000.0);
        state.set_range_lo(2000.0);
        assert_eq!(state.payload_range.lo, 1000.0);
        assert_eq!(state.payload_range.hi, 1000.0);
    }
}
