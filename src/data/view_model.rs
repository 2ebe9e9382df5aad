use std::fmt;

use super::model::{LaunchDataset, Outcome};

// ---------------------------------------------------------------------------
// Control inputs
// ---------------------------------------------------------------------------

/// Current value of the site selector: all sites, or one specific site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteSelection {
    All,
    Site(String),
}

impl SiteSelection {
    /// Whether a record at `site` passes this selection.
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(s) => s == site,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelection::All => f.write_str("All Sites"),
            SiteSelection::Site(s) => f.write_str(s),
        }
    }
}

/// Closed payload-mass interval `[lo, hi]` in kilograms.
///
/// The UI keeps `lo <= hi` clamped to the dataset bounds; the view model
/// does not re-validate. An inverted interval simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    pub lo: f64,
    pub hi: f64,
}

impl PayloadRange {
    pub fn new(lo: f64, hi: f64) -> Self {
        PayloadRange { lo, hi }
    }

    /// Inclusive on both ends.
    pub fn contains(&self, mass_kg: f64) -> bool {
        self.lo <= mass_kg && mass_kg <= self.hi
    }
}

// ---------------------------------------------------------------------------
// Chart outputs
// ---------------------------------------------------------------------------

/// One aggregated pie slice.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
}

/// Pie chart data plus title, ready for the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

/// One filtered launch projected for the scatter chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    pub booster_category: String,
}

/// Scatter chart data plus title, ready for the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterChart {
    pub title: String,
    pub points: Vec<ScatterPoint>,
}

// ---------------------------------------------------------------------------
// Pie aggregation
// ---------------------------------------------------------------------------

/// Compute the success pie chart for the current site selection.
///
/// * `All`: one slice per distinct site (first-appearance order), valued by
///   that site's successful launch count.
/// * `Site(s)`: two slices, "Success" and "Failure", counting outcomes at
///   that site. A class with no occurrences after filtering is still emitted
///   as a zero-valued slice, so the renderer sees a consistent slice set.
///   A site matching no records yields no slices at all.
///
/// Total over all inputs; never fails.
pub fn pie_chart_data(dataset: &LaunchDataset, site: &SiteSelection) -> PieChart {
    match site {
        SiteSelection::All => {
            let mut slices: Vec<PieSlice> = Vec::with_capacity(dataset.sites.len());
            for site_name in &dataset.sites {
                let successes = dataset
                    .records
                    .iter()
                    .filter(|r| &r.site == site_name && r.outcome.is_success())
                    .count();
                slices.push(PieSlice {
                    label: site_name.clone(),
                    value: successes as f64,
                });
            }
            PieChart {
                title: "Total successful launches for each site".to_string(),
                slices,
            }
        }
        SiteSelection::Site(name) => {
            let mut successes = 0usize;
            let mut failures = 0usize;
            let mut matched = false;
            for rec in dataset.records.iter().filter(|r| &r.site == name) {
                matched = true;
                match rec.outcome {
                    Outcome::Success => successes += 1,
                    Outcome::Failure => failures += 1,
                }
            }

            let slices = if matched {
                vec![
                    PieSlice {
                        label: Outcome::Success.label().to_string(),
                        value: successes as f64,
                    },
                    PieSlice {
                        label: Outcome::Failure.label().to_string(),
                        value: failures as f64,
                    },
                ]
            } else {
                Vec::new()
            };

            PieChart {
                title: format!("Launch Success vs Failure at {name}"),
                slices,
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Scatter filtering
// ---------------------------------------------------------------------------

/// Compute the payload-vs-outcome scatter chart for the current controls.
///
/// Records are kept when their payload mass lies in `range` (inclusive) and
/// their site passes `site`; dataset order is preserved. An empty result is
/// valid output ("no points to plot").
pub fn scatter_chart_data(
    dataset: &LaunchDataset,
    site: &SiteSelection,
    range: PayloadRange,
) -> ScatterChart {
    let points: Vec<ScatterPoint> = dataset
        .records
        .iter()
        .filter(|r| range.contains(r.payload_mass_kg) && site.matches(&r.site))
        .map(|r| ScatterPoint {
            payload_mass_kg: r.payload_mass_kg,
            outcome: r.outcome,
            booster_category: r.booster_category.clone(),
        })
        .collect();

    let title = match site {
        SiteSelection::All => format!(
            "Payload Mass vs. Launch Outcome (Payload Range: {} - {} kg)",
            range.lo, range.hi
        ),
        SiteSelection::Site(name) => format!(
            "Payload Mass vs. Launch Outcome for {name} (Payload Range: {} - {} kg)",
            range.lo, range.hi
        ),
    };

    ScatterChart { title, points }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::LaunchRecord;

    fn rec(site: &str, payload: f64, booster: &str, flag: u8) -> LaunchRecord {
        LaunchRecord {
            site: site.to_string(),
            payload_mass_kg: payload,
            booster_category: booster.to_string(),
            outcome: Outcome::from_flag(flag).unwrap(),
        }
    }

    /// Three-row dataset used throughout: two launches at A, one at B.
    fn sample_dataset() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            rec("A", 500.0, "v1", 1),
            rec("A", 1500.0, "v1", 0),
            rec("B", 3000.0, "v2", 1),
        ])
    }

    #[test]
    fn pie_all_sites_counts_successes_per_site() {
        let ds = sample_dataset();
        let pie = pie_chart_data(&ds, &SiteSelection::All);
        assert_eq!(pie.title, "Total successful launches for each site");
        assert_eq!(
            pie.slices,
            vec![
                PieSlice { label: "A".to_string(), value: 1.0 },
                PieSlice { label: "B".to_string(), value: 1.0 },
            ]
        );
    }

    #[test]
    fn pie_all_sites_sums_to_total_success_count() {
        let ds = sample_dataset();
        let pie = pie_chart_data(&ds, &SiteSelection::All);
        let total: f64 = pie.slices.iter().map(|s| s.value).sum();
        let successes = ds.records.iter().filter(|r| r.outcome.is_success()).count();
        assert_eq!(total, successes as f64);
    }

    #[test]
    fn pie_single_site_counts_both_classes() {
        let ds = sample_dataset();
        let pie = pie_chart_data(&ds, &SiteSelection::Site("A".to_string()));
        assert_eq!(pie.title, "Launch Success vs Failure at A");
        assert_eq!(
            pie.slices,
            vec![
                PieSlice { label: "Success".to_string(), value: 1.0 },
                PieSlice { label: "Failure".to_string(), value: 1.0 },
            ]
        );
    }

    #[test]
    fn pie_single_site_sums_to_site_record_count() {
        let ds = sample_dataset();
        let pie = pie_chart_data(&ds, &SiteSelection::Site("A".to_string()));
        let total: f64 = pie.slices.iter().map(|s| s.value).sum();
        let site_records = ds.records.iter().filter(|r| r.site == "A").count();
        assert_eq!(total, site_records as f64);
    }

    #[test]
    fn pie_site_with_only_successes_emits_zero_failure_slice() {
        let ds = sample_dataset();
        let pie = pie_chart_data(&ds, &SiteSelection::Site("B".to_string()));
        assert_eq!(
            pie.slices,
            vec![
                PieSlice { label: "Success".to_string(), value: 1.0 },
                PieSlice { label: "Failure".to_string(), value: 0.0 },
            ]
        );
    }

    #[test]
    fn pie_unknown_site_yields_no_slices() {
        let ds = sample_dataset();
        let pie = pie_chart_data(&ds, &SiteSelection::Site("Nowhere".to_string()));
        assert!(pie.slices.is_empty());
    }

    #[test]
    fn scatter_filters_by_payload_range() {
        let ds = sample_dataset();
        let chart = scatter_chart_data(&ds, &SiteSelection::All, PayloadRange::new(0.0, 1000.0));
        assert_eq!(
            chart.points,
            vec![ScatterPoint {
                payload_mass_kg: 500.0,
                outcome: Outcome::Success,
                booster_category: "v1".to_string(),
            }]
        );
        assert_eq!(
            chart.title,
            "Payload Mass vs. Launch Outcome (Payload Range: 0 - 1000 kg)"
        );
    }

    #[test]
    fn scatter_filters_by_site_and_range() {
        let ds = sample_dataset();
        let chart = scatter_chart_data(
            &ds,
            &SiteSelection::Site("B".to_string()),
            PayloadRange::new(0.0, 10000.0),
        );
        assert_eq!(
            chart.points,
            vec![ScatterPoint {
                payload_mass_kg: 3000.0,
                outcome: Outcome::Success,
                booster_category: "v2".to_string(),
            }]
        );
        assert_eq!(
            chart.title,
            "Payload Mass vs. Launch Outcome for B (Payload Range: 0 - 10000 kg)"
        );
    }

    #[test]
    fn scatter_range_is_inclusive_on_both_ends() {
        let ds = sample_dataset();
        let chart = scatter_chart_data(&ds, &SiteSelection::All, PayloadRange::new(500.0, 1500.0));
        let masses: Vec<f64> = chart.points.iter().map(|p| p.payload_mass_kg).collect();
        assert_eq!(masses, vec![500.0, 1500.0]);
    }

    #[test]
    fn scatter_inverted_range_is_empty() {
        let ds = sample_dataset();
        let chart = scatter_chart_data(&ds, &SiteSelection::All, PayloadRange::new(2000.0, 100.0));
        assert!(chart.points.is_empty());
    }

    #[test]
    fn scatter_widening_range_never_shrinks_result() {
        let ds = sample_dataset();
        let narrow = scatter_chart_data(&ds, &SiteSelection::All, PayloadRange::new(400.0, 1600.0));
        let wide = scatter_chart_data(&ds, &SiteSelection::All, PayloadRange::new(0.0, 5000.0));
        assert!(wide.points.len() >= narrow.points.len());
    }

    #[test]
    fn view_model_functions_are_idempotent() {
        let ds = sample_dataset();
        let site = SiteSelection::Site("A".to_string());
        let range = PayloadRange::new(0.0, 2000.0);
        assert_eq!(pie_chart_data(&ds, &site), pie_chart_data(&ds, &site));
        assert_eq!(
            scatter_chart_data(&ds, &site, range),
            scatter_chart_data(&ds, &site, range)
        );
    }

    #[test]
    fn scatter_preserves_dataset_order() {
        let ds = LaunchDataset::from_records(vec![
            rec("A", 3000.0, "v1", 1),
            rec("A", 1000.0, "v1", 0),
            rec("A", 2000.0, "v2", 1),
        ]);
        let chart = scatter_chart_data(&ds, &SiteSelection::All, PayloadRange::new(0.0, 5000.0));
        let masses: Vec<f64> = chart.points.iter().map(|p| p.payload_mass_kg).collect();
        assert_eq!(masses, vec![3000.0, 1000.0, 2000.0]);
    }
}
