use std::sync::Arc;

use async_trait::async_trait;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fleetbook_core::{
    AvailabilityContext, AvailabilityEngine, BlockedDayRepository, BookingService, DayZone,
    MockClock, ReservationRepository, WriteOutcome,
};
use fleetbook_domain::{
    BlockedDaySet, CalendarDay, DateInput, Interval, ReservationRecord, ReservationStatus,
    Result as DomainResult, ScanOrder,
};
use uuid::Uuid;

const RESERVATIONS: usize = 500;

fn day_offset(offset: usize) -> CalendarDay {
    let start: CalendarDay = "2026-01-01".parse().unwrap();
    (0..offset).fold(start, |d, _| d.succ().unwrap())
}

/// Two-night bookings with a two-day gap, newest first.
fn sample_reservations() -> Vec<ReservationRecord> {
    let mut records: Vec<ReservationRecord> = (0..RESERVATIONS)
        .map(|idx| {
            let start = day_offset(idx * 4);
            let end = day_offset(idx * 4 + 2);
            ReservationRecord::new("car-1", Interval::new(start, end), ReservationStatus::Confirmed)
        })
        .collect();
    records.reverse();
    records
}

fn sample_blocked() -> BlockedDaySet {
    (0..RESERVATIONS).step_by(50).map(|idx| day_offset(idx * 4 + 3)).collect()
}

struct StaticStore {
    reservations: Vec<ReservationRecord>,
    blocked: BlockedDaySet,
}

#[async_trait]
impl ReservationRepository for StaticStore {
    async fn reservations_for(&self, _resource_id: &str) -> DomainResult<Vec<ReservationRecord>> {
        Ok(self.reservations.clone())
    }

    async fn get(&self, id: Uuid) -> DomainResult<Option<ReservationRecord>> {
        Ok(self.reservations.iter().find(|r| r.id == id).cloned())
    }

    async fn insert_checked(
        &self,
        record: ReservationRecord,
        today: CalendarDay,
        engine: &AvailabilityEngine,
    ) -> DomainResult<WriteOutcome> {
        let context = AvailabilityContext {
            resource_id: &record.resource_id,
            today,
            reservations: &self.reservations,
            blocked: &self.blocked,
        };
        let verdict = engine.check_interval(record.interval, &context);
        if verdict.available {
            Ok(WriteOutcome::Accepted(record))
        } else {
            Ok(WriteOutcome::Rejected(verdict))
        }
    }

    async fn transition_status(
        &self,
        id: Uuid,
        _next: ReservationStatus,
        _engine: &AvailabilityEngine,
    ) -> DomainResult<WriteOutcome> {
        Err(fleetbook_domain::FleetbookError::NotFound(id.to_string()))
    }
}

#[async_trait]
impl BlockedDayRepository for StaticStore {
    async fn blocked_days(&self, _resource_id: &str) -> DomainResult<BlockedDaySet> {
        Ok(self.blocked.clone())
    }

    async fn toggle_blocked_day(
        &self,
        _resource_id: &str,
        _day: CalendarDay,
    ) -> DomainResult<bool> {
        Ok(false)
    }
}

fn availability_benchmark(c: &mut Criterion) {
    let reservations = sample_reservations();
    let blocked = sample_blocked();
    let context = AvailabilityContext {
        resource_id: "car-1",
        today: day_offset(0),
        reservations: &reservations,
        blocked: &blocked,
    };
    let free = Interval::new(day_offset(RESERVATIONS * 4 + 10), day_offset(RESERVATIONS * 4 + 17));
    let late_conflict =
        Interval::new(day_offset(RESERVATIONS * 4 - 5), day_offset(RESERVATIONS * 4 - 3));

    let mut group = c.benchmark_group("availability_engine");
    group.sample_size(50);

    let orders = [("input", ScanOrder::Input), ("chronological", ScanOrder::Chronological)];
    for (name, order) in orders {
        let engine = AvailabilityEngine::new(DayZone::Utc, order);
        group.bench_function(format!("free_range_{name}"), |b| {
            b.iter(|| engine.check_interval(black_box(free), &context));
        });
        group.bench_function(format!("conflict_{name}"), |b| {
            b.iter(|| engine.check_interval(black_box(late_conflict), &context));
        });
    }

    let engine = AvailabilityEngine::new(DayZone::Utc, ScanOrder::Input);
    let start = DateInput::from("2027-05-01T10:00:00+02:00");
    let end = DateInput::DocumentTimestamp { seconds: 1_809_000_000, nanoseconds: 0 };
    group.bench_function("normalize_and_check", |b| {
        b.iter(|| engine.check(black_box(&start), black_box(&end), &context).unwrap());
    });

    group.finish();
}

fn booking_service_benchmark(c: &mut Criterion) {
    let store =
        Arc::new(StaticStore { reservations: sample_reservations(), blocked: sample_blocked() });
    let clock = Arc::new(MockClock::at_noon(day_offset(0)));
    let service = Arc::new(BookingService::new(
        AvailabilityEngine::new(DayZone::Utc, ScanOrder::Input),
        store.clone(),
        store,
        clock,
    ));
    let pickup = DateInput::from(day_offset(RESERVATIONS * 4 + 10));
    let return_date = DateInput::from(day_offset(RESERVATIONS * 4 + 12));

    let mut group = c.benchmark_group("booking_service");
    group.sample_size(20).measurement_time(std::time::Duration::from_secs(10));

    group.bench_function("check_availability", |b| {
        let runtime = tokio::runtime::Runtime::new().expect("runtime");
        b.iter(|| {
            let service = Arc::clone(&service);
            let (pickup, return_date) = (pickup.clone(), return_date.clone());
            runtime.block_on(async move {
                service.check_availability("car-1", &pickup, &return_date).await.unwrap();
            });
        });
    });

    group.finish();
}

criterion_group!(core_benchmarks, availability_benchmark, booking_service_benchmark);
criterion_main!(core_benchmarks);
