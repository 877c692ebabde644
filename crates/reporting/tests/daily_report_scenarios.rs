use chrono::{Days, NaiveDate, Utc};

use airpack_core::Money;
use airpack_reporting::{DailyReport, generate_report};
use airpack_shipping::{Entity, PACKAGE_FEE, PackageStatus, Registry, ShippingConfig};

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

fn yesterday() -> NaiveDate {
    today().checked_sub_days(Days::new(1)).unwrap()
}

/// Registry seeded with a handful of clients and cities.
fn populated_registry() -> Registry {
    airpack_observability::init();

    let mut registry = Registry::new();
    for username in ["user_1", "user_2", "user_3", "user_n"] {
        registry.add_client(username);
    }
    for city in ["Buenos Aires", "Cordoba", "Mendoza", "Origin N"] {
        registry.add_origin(city);
    }
    for city in ["Buenos Aires", "Salta", "Santa Fe", "Misiones", "Destination M"] {
        registry.add_destination(city);
    }
    registry
}

/// Book and ship `amount` packages dated at noon UTC of `date`.
fn ship_packages(registry: &mut Registry, date: NaiveDate, amount: usize) {
    let client = registry.clients()[0].clone();
    let origin = registry.origins()[0].clone();
    let destination = registry.destinations()[0].clone();
    let created_at = date.and_hms_opt(12, 0, 0).unwrap().and_utc();

    for _ in 0..amount {
        let id = registry
            .create_package_at(&client, &origin, &destination, created_at)
            .unwrap();
        registry.ship_package(id).unwrap();
    }
}

fn assert_report(packages_date: NaiveDate, amount: usize, report_date: NaiveDate, expected: DailyReport) {
    let mut registry = populated_registry();
    ship_packages(&mut registry, packages_date, amount);

    assert_eq!(generate_report(&registry, report_date), expected);
}

#[test]
fn five_packages_today_reported_today() {
    assert_report(
        today(),
        5,
        today(),
        DailyReport {
            date: today(),
            total_packages: 5,
            total_revenue: PACKAGE_FEE * 5,
        },
    );
}

#[test]
fn five_packages_today_not_reported_yesterday() {
    assert_report(today(), 5, yesterday(), DailyReport::empty(yesterday()));
}

#[test]
fn ten_packages_yesterday_reported_yesterday() {
    assert_report(
        yesterday(),
        10,
        yesterday(),
        DailyReport {
            date: yesterday(),
            total_packages: 10,
            total_revenue: PACKAGE_FEE * 10,
        },
    );
}

#[test]
fn ten_packages_yesterday_not_reported_today() {
    assert_report(yesterday(), 10, today(), DailyReport::empty(today()));
}

#[test]
fn disjoint_days_are_reported_separately() {
    let mut registry = populated_registry();
    ship_packages(&mut registry, yesterday(), 5);
    ship_packages(&mut registry, today(), 10);

    let d1 = generate_report(&registry, yesterday());
    let d2 = generate_report(&registry, today());
    assert_eq!(d1.total_packages, 5);
    assert_eq!(d1.total_revenue, PACKAGE_FEE * 5);
    assert_eq!(d2.total_packages, 10);
    assert_eq!(d2.total_revenue, PACKAGE_FEE * 10);
}

#[test]
fn package_created_now_shows_up_on_its_own_day_only() {
    let mut registry = populated_registry();
    let client = registry.clients()[0].clone();
    let origin = registry.origins()[0].clone();
    let destination = registry.destinations()[0].clone();

    let id = registry.create_package(&client, &origin, &destination).unwrap();
    let package = registry.package(id).unwrap();
    assert_eq!(package.status(), PackageStatus::LabelCreated);
    assert_eq!(package.fee(), PACKAGE_FEE);
    assert_eq!(package.client(), client.id());

    let created_on = package.created_on();
    let report = generate_report(&registry, created_on);
    assert_eq!(report.total_packages, 1);
    assert_eq!(report.total_revenue, PACKAGE_FEE);

    let other_day = created_on.checked_add_days(Days::new(1)).unwrap();
    assert_eq!(generate_report(&registry, other_day), DailyReport::empty(other_day));
}

#[test]
fn revenue_follows_configured_fee() {
    airpack_observability::init();

    let mut registry = Registry::with_config(ShippingConfig {
        package_fee: Money::new(125),
    });
    let client = registry.add_client("user_1");
    let origin = registry.add_origin("Mendoza");
    let destination = registry.add_destination("Santa Fe");
    let created_at = yesterday().and_hms_opt(9, 30, 0).unwrap().and_utc();
    for _ in 0..4 {
        registry
            .create_package_at(&client, &origin, &destination, created_at)
            .unwrap();
    }

    let report = generate_report(&registry, yesterday());
    assert_eq!(report.total_packages, 4);
    assert_eq!(report.total_revenue, Money::new(125) * 4);
}
