//! Mock engagement metrics for the social dashboard.
//!
//! Values are randomized placeholders, not fetched from any network. The
//! shape is stable (one block per platform, one point per day) so the chart
//! layer can render it; the numbers are not.

use chrono::{Duration, NaiveDate, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const PLATFORMS: &[&str] = &["twitter", "instagram", "linkedin", "facebook"];

pub const MAX_SERIES_DAYS: u32 = 90;
pub const DEFAULT_SERIES_DAYS: u32 = 30;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricPoint {
    pub date: NaiveDate,
    pub impressions: u64,
    pub engagements: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformMetrics {
    pub platform: String,
    pub followers: u64,
    pub impressions: u64,
    /// Engagements per impression, 0.0 – 1.0.
    pub engagement_rate: f64,
    pub series: Vec<MetricPoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardMetrics {
    pub generated_at: NaiveDate,
    pub platforms: Vec<PlatformMetrics>,
}

/// Generates one mock metrics block per platform with a `days`-long daily
/// series ending today. `days` is clamped to `1..=MAX_SERIES_DAYS`.
pub fn mock_dashboard_metrics(days: u32) -> DashboardMetrics {
    let days = days.clamp(1, MAX_SERIES_DAYS);
    let today = Utc::now().date_naive();

    let platforms = PLATFORMS
        .iter()
        .map(|platform| mock_platform_metrics(platform, today, days))
        .collect();

    DashboardMetrics {
        generated_at: today,
        platforms,
    }
}

fn mock_platform_metrics(platform: &str, today: NaiveDate, days: u32) -> PlatformMetrics {
    let mut rng = rand::thread_rng();

    let series: Vec<MetricPoint> = (0..days)
        .rev()
        .map(|offset| {
            let impressions = rng.gen_range(500..20_000);
            // Engagements stay a plausible fraction of impressions.
            let engagements = rng.gen_range(0..impressions / 10);
            MetricPoint {
                date: today - Duration::days(i64::from(offset)),
                impressions,
                engagements,
            }
        })
        .collect();

    let impressions: u64 = series.iter().map(|p| p.impressions).sum();
    let engagements: u64 = series.iter().map(|p| p.engagements).sum();
    let engagement_rate = if impressions == 0 {
        0.0
    } else {
        engagements as f64 / impressions as f64
    };

    PlatformMetrics {
        platform: platform.to_string(),
        followers: rng.gen_range(1_000..100_000),
        impressions,
        engagement_rate,
        series,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_one_block_per_platform() {
        let metrics = mock_dashboard_metrics(7);
        assert_eq!(metrics.platforms.len(), PLATFORMS.len());
        for (block, platform) in metrics.platforms.iter().zip(PLATFORMS) {
            assert_eq!(block.platform, *platform);
            assert_eq!(block.series.len(), 7);
        }
    }

    #[test]
    fn series_is_chronological_and_ends_today() {
        let metrics = mock_dashboard_metrics(14);
        let series = &metrics.platforms[0].series;
        assert!(series.windows(2).all(|w| w[0].date < w[1].date));
        assert_eq!(series.last().unwrap().date, metrics.generated_at);
    }

    #[test]
    fn days_is_clamped_to_bounds() {
        assert_eq!(mock_dashboard_metrics(0).platforms[0].series.len(), 1);
        assert_eq!(
            mock_dashboard_metrics(10_000).platforms[0].series.len(),
            MAX_SERIES_DAYS as usize
        );
    }

    #[test]
    fn engagement_rate_is_a_fraction() {
        for block in mock_dashboard_metrics(30).platforms {
            assert!(block.engagement_rate >= 0.0 && block.engagement_rate <= 1.0);
            assert!(block.series.iter().all(|p| p.engagements <= p.impressions));
        }
    }
}
