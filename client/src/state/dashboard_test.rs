use super::*;
use crate::net::types::LeadDetails;

fn lead(id: i64, status: LeadStatus, value: f64) -> Lead {
    Lead { id, status, details: LeadDetails { deal_value: Some(value), ..LeadDetails::default() } }
}

fn sample() -> Vec<Lead> {
    let mut leads = vec![
        lead(1, LeadStatus::Hot, 1000.0),
        lead(2, LeadStatus::Won, 5000.0),
        lead(3, LeadStatus::Lost, 700.0),
        lead(4, LeadStatus::Proposal, 2500.0),
        lead(5, LeadStatus::Won, 1500.0),
    ];
    leads[0].details.assigned_to = Some(9);
    leads[1].details.priority = Some("high".to_owned());
    leads[3].details.division = Some("Pensions".to_owned());
    leads[4].details.division = Some("Actuarial".to_owned());
    leads[2].details.division = Some("Pensions".to_owned());
    leads
}

// =============================================================
// DashboardCard
// =============================================================

#[test]
fn status_card_counts_matching_leads() {
    let leads = sample();
    assert_eq!(DashboardCard::Status(LeadStatus::Won).count(&leads), 2);
    assert_eq!(DashboardCard::Status(LeadStatus::Hot).count(&leads), 1);
    assert_eq!(DashboardCard::Status(LeadStatus::Negotiation).count(&leads), 0);
}

#[test]
fn unassigned_card_counts_leads_without_assignee() {
    assert_eq!(DashboardCard::Unassigned.count(&sample()), 4);
}

#[test]
fn high_priority_card_matches_exact_priority() {
    let mut leads = sample();
    leads[2].details.priority = Some("medium".to_owned());
    assert_eq!(DashboardCard::HighPriority.count(&leads), 1);
}

#[test]
fn total_card_counts_everything() {
    assert_eq!(DashboardCard::Total.count(&sample()), 5);
}

#[test]
fn select_preserves_order() {
    let selected = DashboardCard::Status(LeadStatus::Won).select(&sample());
    let ids: Vec<i64> = selected.iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![2, 5]);
}

#[test]
fn card_titles_are_distinct() {
    let mut titles: Vec<&str> = DashboardCard::ALL.iter().map(|c| c.title()).collect();
    titles.sort_unstable();
    titles.dedup();
    assert_eq!(titles.len(), DashboardCard::ALL.len());
}

// =============================================================
// DashboardStats
// =============================================================

#[test]
fn stats_count_every_status() {
    let stats = DashboardStats::from_leads(&sample());
    assert_eq!(stats.total, 5);
    assert_eq!(stats.by_status.len(), LeadStatus::ALL.len());
    assert_eq!(stats.count(LeadStatus::Won), 2);
    assert_eq!(stats.count(LeadStatus::Inactive), 0);
    let summed: usize = stats.by_status.values().sum();
    assert_eq!(summed, stats.total);
}

#[test]
fn stats_pipeline_excludes_lost_and_inactive() {
    let mut leads = sample();
    leads.push(lead(6, LeadStatus::Inactive, 9000.0));
    let stats = DashboardStats::from_leads(&leads);
    // hot 1000 + won 5000 + proposal 2500 + won 1500
    assert!((stats.total_pipeline - 10_000.0).abs() < 1e-9);
    assert!((stats.avg_deal - 2500.0).abs() < 1e-9);
    assert!((stats.won_value - 6500.0).abs() < 1e-9);
}

#[test]
fn stats_conversion_rate_is_won_share_of_all_leads() {
    let stats = DashboardStats::from_leads(&sample());
    assert!((stats.conversion_rate - 40.0).abs() < 1e-9);
}

#[test]
fn stats_of_empty_list_are_zero() {
    let stats = DashboardStats::from_leads(&[]);
    assert_eq!(stats.total, 0);
    assert!(stats.total_pipeline.abs() < f64::EPSILON);
    assert!(stats.avg_deal.abs() < f64::EPSILON);
    assert!(stats.conversion_rate.abs() < f64::EPSILON);
    assert!(stats.by_status.values().all(|n| *n == 0));
}

// =============================================================
// division_counts
// =============================================================

#[test]
fn division_counts_sorted_and_skip_missing() {
    let counts = division_counts(&sample());
    assert_eq!(counts, vec![("Actuarial".to_owned(), 1), ("Pensions".to_owned(), 2)]);
}

// =============================================================
// QuickView
// =============================================================

#[test]
fn division_drill_down_selects_that_division_in_order() {
    let view = QuickView::Division("Pensions".to_owned());
    let ids: Vec<i64> = view.select(&sample()).iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![3, 4]);
    assert_eq!(view.title(), "Pensions Leads");
}

#[test]
fn division_drill_down_of_unknown_division_is_empty() {
    assert!(QuickView::Division("Capital".to_owned()).select(&sample()).is_empty());
}

#[test]
fn card_quick_view_delegates_to_card() {
    let view = QuickView::Card(DashboardCard::Status(LeadStatus::Won));
    assert_eq!(view.select(&sample()).len(), 2);
    assert_eq!(view.title(), "Won Deals");
}
