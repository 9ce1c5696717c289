use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use shared_types::{Institution, WorkloadRules, WorkloadTier};

pub fn format_updated_at(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d").to_string()
}

/// `(label, value)` rows for the workload table, tiers ascending.
pub fn workload_rows(rules: &WorkloadRules) -> Vec<(String, String)> {
    rules
        .iter()
        .map(|(tier, value)| (format_tier_label(tier), format_rule_value(value)))
        .collect()
}

fn format_tier_label(tier: WorkloadTier) -> String {
    format!("{}h", tier.hours())
}

fn format_rule_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

/// Read-only card for a single institution record.
#[component]
pub fn InstitutionSummary(institution: Institution) -> Element {
    let rows = workload_rows(&institution.workload_rules);
    let updated = format_updated_at(&institution.updated_at);
    let (badge_label, badge_style) = if institution.active {
        ("Active", "background: #14532d; color: #bbf7d0;")
    } else {
        ("Inactive", "background: #3f3f46; color: #d4d4d8;")
    };

    rsx! {
        section {
            class: "institution-summary",
            style: "border: 1px solid #334155; border-radius: 0.5rem; padding: 1rem; max-width: 28rem;",
            header {
                style: "display: flex; align-items: center; justify-content: space-between; gap: 0.5rem;",
                div {
                    h2 { style: "margin: 0; font-size: 1.125rem;", "{institution.name}" }
                    p { style: "margin: 0; color: #94a3b8; font-size: 0.875rem;", "{institution.category}" }
                }
                span {
                    style: "padding: 0.125rem 0.5rem; border-radius: 9999px; font-size: 0.75rem; {badge_style}",
                    "{badge_label}"
                }
            }
            table {
                style: "width: 100%; margin-top: 0.75rem; border-collapse: collapse; font-size: 0.875rem;",
                thead {
                    tr {
                        th { style: "text-align: left;", "Workload" }
                        th { style: "text-align: right;", "Rule" }
                    }
                }
                tbody {
                    for (label, value) in rows {
                        tr { key: "{label}",
                            td { "{label}" }
                            td { style: "text-align: right;", "{value}" }
                        }
                    }
                }
            }
            footer {
                style: "margin-top: 0.75rem; color: #64748b; font-size: 0.75rem;",
                "Updated {updated}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn workload_rows_cover_every_tier_in_order() {
        let rules = WorkloadRules::from_fn(|tier| f64::from(tier.hours()) / 30.0);
        let rows = workload_rows(&rules);

        let labels: Vec<&str> = rows.iter().map(|(label, _)| label.as_str()).collect();
        assert_eq!(labels, vec!["15h", "30h", "45h", "60h", "75h", "90h"]);
        assert_eq!(rows[0].1, "0.50");
        assert_eq!(rows[1].1, "1");
        assert_eq!(rows[5].1, "3");
    }

    #[test]
    fn updated_at_formats_as_date() {
        let ts = Utc.with_ymd_and_hms(2024, 11, 3, 23, 59, 0).unwrap();
        assert_eq!(format_updated_at(&ts), "2024-11-03");
    }
}
