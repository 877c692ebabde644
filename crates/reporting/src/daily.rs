//! Daily package/revenue report.
//!
//! A package belongs to the day of its creation timestamp, truncated to a UTC
//! calendar date. Matching is exact date equality, never a range.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use airpack_core::Money;
use airpack_shipping::{Package, Registry};

/// Number of packages booked on `date` and the fees they brought in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyReport {
    pub date: NaiveDate,
    pub total_packages: u64,
    pub total_revenue: Money,
}

impl DailyReport {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            total_packages: 0,
            total_revenue: Money::ZERO,
        }
    }

    fn record(&mut self, package: &Package) {
        self.total_packages += 1;
        self.total_revenue += package.fee();
    }
}

/// Report for every package in the registry created on `date`.
pub fn generate_report(registry: &Registry, date: NaiveDate) -> DailyReport {
    generate_report_for(registry.packages(), date)
}

/// Same aggregation over an arbitrary set of packages.
pub fn generate_report_for<'a, I>(packages: I, date: NaiveDate) -> DailyReport
where
    I: IntoIterator<Item = &'a Package>,
{
    let report = packages
        .into_iter()
        .filter(|p| p.created_on() == date)
        .fold(DailyReport::empty(date), |mut report, p| {
            report.record(p);
            report
        });

    tracing::debug!(
        %date,
        total_packages = report.total_packages,
        total_revenue = %report.total_revenue,
        "daily report generated"
    );
    report
}

/// One report per distinct creation date, ordered by date.
///
/// Days without packages are not listed.
pub fn summarize_by_day<'a, I>(packages: I) -> Vec<DailyReport>
where
    I: IntoIterator<Item = &'a Package>,
{
    let mut by_day: BTreeMap<NaiveDate, DailyReport> = BTreeMap::new();
    for package in packages {
        let date = package.created_on();
        by_day
            .entry(date)
            .or_insert_with(|| DailyReport::empty(date))
            .record(package);
    }
    by_day.into_values().collect()
}
