//! Interval timer properties: clamping and drift-free pause/resume.

use std::time::Duration;

use proptest::prelude::*;

use loteria_caller::timer::{IntervalTimer, TimerStatus};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

proptest! {
    /// start(D); +t1; pause; +t2; resume; +t3 => remaining == max(0, D - t1 - t3)
    #[test]
    fn prop_pause_resume_round_trip(
        d in 1u64..60_000,
        t1 in 0u64..60_000,
        t2 in 0u64..60_000,
        t3 in 0u64..60_000,
    ) {
        let mut timer = IntervalTimer::new(ms(d));
        let mut now = 0;

        timer.start(ms(now));
        now += t1;
        timer.pause(ms(now));
        now += t2;
        timer.resume(ms(now));
        now += t3;

        prop_assert_eq!(timer.remaining(ms(now)), ms(d.saturating_sub(t1 + t3)));
    }

    /// Remaining stays within [0, D] under arbitrary command sequences.
    #[test]
    fn prop_remaining_is_clamped(
        d in 1u64..30_000,
        steps in proptest::collection::vec((0u8..5, 0u64..20_000), 0..40),
    ) {
        let mut timer = IntervalTimer::new(ms(d));
        let mut now = 0;

        for (op, dt) in steps {
            now += dt;
            match op {
                0 => timer.start(ms(now)),
                1 => timer.pause(ms(now)),
                2 => timer.resume(ms(now)),
                3 => timer.stop(),
                _ => {}
            }
            let remaining = timer.remaining(ms(now));
            prop_assert!(remaining <= timer.duration());
            if timer.is_paused() {
                prop_assert!(!timer.expired(ms(now)));
            }
        }
    }

    /// A paused timer reports the same remaining time however long it waits.
    #[test]
    fn prop_paused_remaining_is_frozen(d in 1u64..30_000, t1 in 0u64..30_000, wait in 0u64..1_000_000) {
        let mut timer = IntervalTimer::new(ms(d));
        timer.start(ms(0));
        timer.pause(ms(t1));
        prop_assert_eq!(timer.remaining(ms(t1)), timer.remaining(ms(t1 + wait)));
    }
}

#[test]
fn test_multiple_pause_cycles_accumulate_correctly() {
    let mut timer = IntervalTimer::new(ms(10_000));
    timer.start(ms(0));

    timer.pause(ms(1_000));
    timer.resume(ms(3_000));
    timer.pause(ms(4_000));
    timer.resume(ms(10_000));

    // 1s + 1s of counted time so far
    assert_eq!(timer.remaining(ms(10_000)), ms(8_000));
    assert!(!timer.expired(ms(17_999)));
    assert!(timer.expired(ms(18_000)));
}

#[test]
fn test_status_walk() {
    let mut timer = IntervalTimer::new(ms(1_000));
    assert_eq!(timer.status(ms(0)), TimerStatus::Idle);

    timer.start(ms(0));
    assert_eq!(timer.status(ms(10)), TimerStatus::Running);

    timer.pause(ms(500));
    assert_eq!(timer.status(ms(5_000)), TimerStatus::Paused);

    timer.resume(ms(5_000));
    assert_eq!(timer.status(ms(5_499)), TimerStatus::Running);
    assert_eq!(timer.status(ms(5_500)), TimerStatus::Expired);

    timer.start(ms(6_000));
    assert_eq!(timer.status(ms(6_000)), TimerStatus::Running);
}

#[test]
fn test_rearm_on_duration_change_discards_elapsed() {
    let mut timer = IntervalTimer::new(ms(15_000));
    timer.start(ms(0));
    timer.set_duration(ms(20_000), ms(14_000));

    assert_eq!(timer.remaining(ms(14_000)), ms(20_000));
    assert!(!timer.expired(ms(33_999)));
    assert!(timer.expired(ms(34_000)));
}
