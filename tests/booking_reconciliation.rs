//! Integration tests for booked-day derivation and reconciliation.

use testresult::TestResult;

use hemline::{
    availability::AvailabilitySnapshot,
    bookings::{derive_booked, reconcile},
    dates::{DateKey, DateSet, InvalidDateError},
    records::{BookingWindowRecord, booked_from_records},
};

fn day(text: &str) -> Result<DateKey, InvalidDateError> {
    DateKey::from_iso(text)
}

fn set(texts: &[&str]) -> Result<DateSet, InvalidDateError> {
    texts.iter().map(|text| DateKey::from_iso(text)).collect()
}

#[test]
fn a_confirmed_order_claims_its_whole_window() -> TestResult {
    let snapshot =
        AvailabilitySnapshot::from_sets(set(&["2024-03-11"])?, DateSet::new(), DateSet::new());

    let booked = derive_booked([(day("2024-03-10")?, day("2024-03-12")?)]);
    let reconciled = reconcile(&snapshot, booked);

    assert_eq!(
        reconciled.booked(),
        &set(&["2024-03-10", "2024-03-11", "2024-03-12"])?
    );
    assert!(reconciled.available().is_empty());

    Ok(())
}

#[test]
fn overlapping_orders_collapse_into_one_set() -> TestResult {
    let booked = derive_booked([
        (day("2024-03-10")?, day("2024-03-13")?),
        (day("2024-03-12")?, day("2024-03-15")?),
    ]);

    assert_eq!(booked.len(), 6);
    assert!(booked.contains(day("2024-03-12")?));

    Ok(())
}

#[test]
fn reconciling_twice_changes_nothing_more() -> TestResult {
    let snapshot = AvailabilitySnapshot::from_sets(
        set(&["2024-03-11", "2024-03-20"])?,
        set(&["2024-03-12"])?,
        DateSet::new(),
    );

    let booked = derive_booked([(day("2024-03-10")?, day("2024-03-14")?)]);
    let once = reconcile(&snapshot, booked.clone());
    let twice = reconcile(&once, booked);

    assert_eq!(once, twice);

    Ok(())
}

#[test]
fn one_corrupt_order_does_not_hide_the_rest() -> TestResult {
    let windows = [
        BookingWindowRecord {
            start_date: "2024-03-10".to_string(),
            end_date: "2024-03-11".to_string(),
        },
        BookingWindowRecord {
            start_date: "garbage".to_string(),
            end_date: "2024-03-20".to_string(),
        },
        BookingWindowRecord {
            start_date: "2024-03-28".to_string(),
            end_date: "2024-03-25".to_string(),
        },
        BookingWindowRecord {
            start_date: "2024-03-30T10:00:00Z".to_string(),
            end_date: "2024-03-30T18:00:00Z".to_string(),
        },
    ];

    let booked = booked_from_records(&windows);

    assert_eq!(booked, set(&["2024-03-10", "2024-03-11", "2024-03-30"])?);

    Ok(())
}

#[test]
fn stale_persisted_overlap_is_repaired_on_reconcile() -> TestResult {
    // Persisted product state that still claims a day an order has since
    // taken.
    let snapshot = AvailabilitySnapshot::from_sets(
        set(&["2024-04-01", "2024-04-02"])?,
        set(&["2024-04-03"])?,
        DateSet::new(),
    );

    let reconciled = reconcile(
        &snapshot,
        derive_booked([(day("2024-04-02")?, day("2024-04-03")?)]),
    );

    assert_eq!(reconciled.available(), &set(&["2024-04-01"])?);
    assert!(reconciled.excluded().is_empty());
    assert_eq!(reconciled.booked(), &set(&["2024-04-02", "2024-04-03"])?);

    Ok(())
}
