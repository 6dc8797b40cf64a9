//! End-to-end availability decisions over a realistic vehicle calendar.

mod support;

use fleetbook_core::{AvailabilityContext, AvailabilityEngine, DayZone};
use fleetbook_domain::{
    AvailabilityVerdict, BlockedDaySet, DateInput, FleetbookError, RejectionReason,
    ReservationRecord, ReservationStatus, ScanOrder,
};
use support::{confirmed, day, interval, pending, utc_engine};

struct Fixture {
    reservations: Vec<ReservationRecord>,
    blocked: BlockedDaySet,
}

impl Fixture {
    fn august() -> Self {
        Self {
            reservations: vec![
                confirmed("car-1", "2025-08-01", "2025-08-03"),
                confirmed("car-1", "2025-08-10", "2025-08-12"),
            ],
            blocked: std::iter::once(day("2025-08-20")).collect(),
        }
    }

    fn check(&self, start: &str, end: &str) -> AvailabilityVerdict {
        utc_engine().check_interval(interval(start, end), &self.context())
    }

    fn context(&self) -> AvailabilityContext<'_> {
        AvailabilityContext {
            resource_id: "car-1",
            today: day("2025-07-20"),
            reservations: &self.reservations,
            blocked: &self.blocked,
        }
    }
}

#[test]
fn gap_between_bookings_is_available() {
    let fixture = Fixture::august();
    let verdict = fixture.check("2025-08-04", "2025-08-09");
    assert!(verdict.available);
    assert_eq!(verdict.reason, None);
}

#[test]
fn overlap_with_first_booking_is_already_booked() {
    let fixture = Fixture::august();
    let verdict = fixture.check("2025-08-02", "2025-08-04");
    assert_eq!(verdict.reason, Some(RejectionReason::AlreadyBooked));
    let conflict = verdict.conflict.expect("conflict detail");
    assert_eq!(conflict.reservation_id, fixture.reservations[0].id);
}

#[test]
fn range_over_blocked_day_is_host_blocked() {
    let fixture = Fixture::august();
    let verdict = fixture.check("2025-08-19", "2025-08-21");
    assert_eq!(verdict.reason, Some(RejectionReason::HostBlocked));
    assert_eq!(verdict.blocked_date, Some(day("2025-08-20")));
}

#[test]
fn back_to_back_bookings_collide_on_shared_day() {
    let fixture = Fixture::august();
    let verdict = fixture.check("2025-08-03", "2025-08-05");
    assert_eq!(verdict.reason, Some(RejectionReason::AlreadyBooked));

    let verdict = fixture.check("2025-08-08", "2025-08-10");
    assert_eq!(verdict.reason, Some(RejectionReason::AlreadyBooked));
}

#[test]
fn pending_requests_do_not_hold_dates() {
    let mut fixture = Fixture::august();
    fixture.reservations.push(pending("car-1", "2025-08-14", "2025-08-16"));
    let verdict = fixture.check("2025-08-14", "2025-08-16");
    assert!(verdict.available);

    fixture.reservations[2].transition_to(ReservationStatus::Confirmed).unwrap();
    let verdict = fixture.check("2025-08-14", "2025-08-16");
    assert_eq!(verdict.reason, Some(RejectionReason::AlreadyBooked));
}

#[test]
fn raw_inputs_flow_through_normalization() {
    let fixture = Fixture::august();
    let engine = utc_engine();

    // 2025-08-04T00:00:00Z
    let pickup = DateInput::DocumentTimestamp { seconds: 1_754_265_600, nanoseconds: 0 };
    let return_date: DateInput = "2025-08-06T18:30:00Z".into();
    let verdict = engine.check(&pickup, &return_date, &fixture.context()).unwrap();
    assert!(verdict.available);

    let err = engine.check(&"not a date".into(), &return_date, &fixture.context()).unwrap_err();
    assert!(matches!(err, FleetbookError::InvalidDate(_)));
    assert!(err.is_caller_error());
}

#[test]
fn scan_order_changes_reported_conflict_only() {
    let mut fixture = Fixture::august();
    fixture.reservations.reverse();
    let wide = interval("2025-08-01", "2025-08-12");

    let input = utc_engine().check_interval(wide, &fixture.context());
    let chronological = AvailabilityEngine::new(DayZone::Utc, ScanOrder::Chronological)
        .check_interval(wide, &fixture.context());

    assert_eq!(input.reason, chronological.reason);
    assert_eq!(input.conflict.unwrap().interval, interval("2025-08-10", "2025-08-12"));
    assert_eq!(chronological.conflict.unwrap().interval, interval("2025-08-01", "2025-08-03"));
}

#[test]
fn verdict_serializes_with_reason_code() {
    let fixture = Fixture::august();
    let verdict = fixture.check("2025-08-19", "2025-08-21");
    let json = serde_json::to_value(verdict).unwrap();
    assert_eq!(json["available"], false);
    assert_eq!(json["reason"], "host_blocked");
    assert_eq!(json["blocked_date"], "2025-08-20");
}
