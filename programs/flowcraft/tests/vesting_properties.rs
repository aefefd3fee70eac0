use anchor_lang::prelude::Pubkey;
use flowcraft::constants::MAX_FEE_BPS;
use flowcraft::vesting::{checkpoint_stream, fold_expired_stream};
use flowcraft::views::build_stream_info;
use flowcraft::{
    compute_fee, compute_net_amount, compute_rate, compute_remaining_duration, compute_upgrade_cost,
    evaluate_segment, evaluate_stream, evaluate_stream_breakdown, Segment, Stream,
};
use proptest::prelude::*;

fn segment_strategy() -> impl Strategy<Value = Segment> {
    (
        1u64..1_000_000_000_000,
        1i64..10_000_000,
        0u64..=100,
        any::<bool>(),
    )
        .prop_map(|(amount, duration, pct, cancelled)| Segment {
            tier: "tier".to_string(),
            payer: Pubkey::default(),
            rate_per_second: compute_rate(amount, duration).unwrap(),
            amount,
            vested: (amount as u128 * pct as u128 / 100) as u64,
            cancelled,
        })
}

fn stream_strategy() -> impl Strategy<Value = Stream> {
    (
        prop::collection::vec(segment_strategy(), 0..8),
        0u64..1_000_000_000_000,
        0u64..=100,
        0i64..1_000_000_000,
        0u64..2_000_000_000_000,
    )
        .prop_map(|(segments, archived_amount, pct, last_update_time, total_withdrawn)| Stream {
            last_update_time,
            archived_amount,
            archived_vested: (archived_amount as u128 * pct as u128 / 100) as u64,
            total_withdrawn,
            segments,
            ..Stream::default()
        })
}

fn seg(amount: u64, duration: i64) -> Segment {
    Segment {
        tier: "basic".to_string(),
        rate_per_second: compute_rate(amount, duration).unwrap(),
        amount,
        ..Segment::default()
    }
}

proptest! {
    #[test]
    fn vested_is_monotonic_in_time(
        stream in stream_strategy(),
        t1 in 0i64..2_000_000_000,
        dt in 0i64..100_000_000,
    ) {
        let early = evaluate_stream(&stream, t1).unwrap();
        let late = evaluate_stream(&stream, t1 + dt).unwrap();
        prop_assert!(late.total_vested >= early.total_vested);
    }

    #[test]
    fn vested_plus_unvested_is_deposited(stream in stream_strategy(), now in 0i64..2_000_000_000) {
        let v = evaluate_stream(&stream, now).unwrap();
        prop_assert_eq!(v.total_vested + v.total_unvested, v.total_deposited);
    }

    #[test]
    fn claimable_is_floored_vested_minus_withdrawn(
        stream in stream_strategy(),
        now in 0i64..2_000_000_000,
    ) {
        let v = evaluate_stream(&stream, now).unwrap();
        prop_assert_eq!(v.claimable, v.total_vested.saturating_sub(stream.total_withdrawn));
    }

    #[test]
    fn segment_never_vests_past_amount(segment in segment_strategy(), elapsed in any::<i64>()) {
        prop_assert!(evaluate_segment(&segment, elapsed).unwrap() <= segment.amount);
    }

    #[test]
    fn cancelled_segment_ignores_time(
        mut segment in segment_strategy(),
        a in any::<i64>(),
        b in any::<i64>(),
    ) {
        segment.cancelled = true;
        prop_assert_eq!(
            evaluate_segment(&segment, a).unwrap(),
            evaluate_segment(&segment, b).unwrap()
        );
    }

    #[test]
    fn fee_plus_net_is_amount(amount in any::<u64>(), fee_bps in 0i64..=MAX_FEE_BPS) {
        let fee = compute_fee(amount, fee_bps).unwrap();
        let net = compute_net_amount(amount, fee_bps).unwrap();
        prop_assert_eq!(fee as u128 + net as u128, amount as u128);
    }

    #[test]
    fn rate_round_trips_within_one_second(
        amount in 1u64..1_000_000_000_000,
        duration in 1i64..30_000,
    ) {
        let segment = Segment {
            rate_per_second: compute_rate(amount, duration).unwrap(),
            amount,
            ..Segment::default()
        };

        let needed = compute_remaining_duration(amount, segment.rate_per_second).unwrap();
        prop_assert!(needed >= duration as u128 && needed <= duration as u128 + 1);
        prop_assert!(evaluate_segment(&segment, duration - 1).unwrap() < amount);
        prop_assert_eq!(evaluate_segment(&segment, duration + 1).unwrap(), amount);
    }

    #[test]
    fn breakdown_attribution_sums_to_totals(
        stream in stream_strategy(),
        now in 0i64..2_000_000_000,
    ) {
        let b = evaluate_stream_breakdown(&stream, now).unwrap();
        let attributed: u64 = b.segments.iter().map(|s| s.vested).sum();
        prop_assert_eq!(stream.archived_vested + attributed, b.totals.total_vested);
        for (live, stored) in b.segments.iter().zip(&stream.segments) {
            prop_assert!(live.vested >= stored.vested && live.vested <= stored.amount);
        }
    }

    #[test]
    fn view_never_diverges_from_totals(stream in stream_strategy(), now in 0i64..2_000_000_000) {
        let info = build_stream_info(Pubkey::default(), &stream, now).unwrap();
        let totals = evaluate_stream(&stream, now).unwrap();
        prop_assert_eq!(info.total_deposited, totals.total_deposited);
        prop_assert_eq!(info.total_vested, totals.total_vested);
        prop_assert_eq!(info.claimable, totals.claimable);
        let row_vested: u64 = info.segments.iter().map(|r| r.vested).sum();
        prop_assert_eq!(stream.archived_vested + row_vested, info.total_vested);
        let incomplete = info.segments.iter().filter(|r| !r.is_complete).count();
        prop_assert_eq!(info.active_segments, incomplete);
    }

    #[test]
    fn checkpoint_reproduces_totals(stream in stream_strategy(), dt in 0i64..100_000_000) {
        let now = stream.last_update_time + dt;
        let cp = checkpoint_stream(&stream, now).unwrap();
        prop_assert_eq!(evaluate_stream(&cp, now).unwrap(), evaluate_stream(&stream, now).unwrap());
    }

    #[test]
    fn fold_preserves_totals(stream in stream_strategy()) {
        // Far enough out that every segment has vested.
        let now = stream.last_update_time + 100_000_000;
        let folded = fold_expired_stream(&stream, now).unwrap();
        prop_assert!(folded.segments.is_empty());
        prop_assert_eq!(
            evaluate_stream(&folded, now).unwrap(),
            evaluate_stream(&stream, now).unwrap()
        );
    }

    #[test]
    fn upgrade_direction_follows_rate(
        unvested in 1u64..1_000_000_000,
        a in 1u64..1_000_000,
        b in 1u64..1_000_000,
    ) {
        let current = compute_rate(a, 100).unwrap();
        let new = compute_rate(b, 100).unwrap();
        let cost = compute_upgrade_cost(unvested, current, new).unwrap();
        if cost.is_upgrade {
            prop_assert!(new > current);
            prop_assert_eq!(cost.new_cost - unvested, cost.difference);
        } else {
            prop_assert_eq!(unvested - cost.new_cost, cost.difference);
        }
    }
}

#[test]
fn single_segment_scenario() {
    let stream = Stream {
        segments: vec![seg(1_000, 100)],
        ..Stream::default()
    };
    let at_50 = evaluate_stream(&stream, 50).unwrap().total_vested;
    assert!((499..=501).contains(&at_50));
    assert_eq!(evaluate_stream(&stream, 100).unwrap().total_vested, 1_000);
    assert_eq!(evaluate_stream(&stream, 150).unwrap().total_vested, 1_000);
}

#[test]
fn stacked_segments_scenario() {
    let stream = Stream {
        segments: vec![seg(1_000, 100), seg(1_000, 100)],
        ..Stream::default()
    };
    let b = evaluate_stream_breakdown(&stream, 150).unwrap();
    assert_eq!(b.segments[0].vested, 1_000);
    assert_eq!(b.segments[0].time_consumed, 100);
    assert!((499..=501).contains(&b.segments[1].vested));
}

#[test]
fn fee_scenario() {
    assert_eq!(compute_fee(10_000, 250).unwrap(), 250);
    assert_eq!(compute_net_amount(10_000, 250).unwrap(), 9_750);
}

#[test]
fn upgrade_scenario() {
    let cost = compute_upgrade_cost(
        500,
        compute_rate(1_000, 100).unwrap(),
        compute_rate(2_000, 100).unwrap(),
    )
    .unwrap();
    assert!(cost.is_upgrade);
    assert!(cost.new_cost > 500);
}

#[test]
fn independent_snapshots_evaluate_in_parallel() {
    let streams: Vec<Stream> = (1..=8u64)
        .map(|i| Stream {
            segments: vec![seg(1_000 * i, 100), seg(500, 50)],
            ..Stream::default()
        })
        .collect();
    let expected: Vec<_> = streams
        .iter()
        .map(|s| evaluate_stream(s, 120).unwrap())
        .collect();

    let results: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = streams
            .iter()
            .map(|s| scope.spawn(move || evaluate_stream(s, 120).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(results, expected);
}
