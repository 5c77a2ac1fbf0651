//! Property-based tests for `SeatInventory`.

use super::{SeatInventory, SeatState};
use proptest::prelude::*;

// Strategy for generating room dimensions small enough to scan exhaustively
fn dimensions_strategy() -> impl Strategy<Value = (i64, i64)> {
    (1i64..=12, 1i64..=12)
}

// Strategy for generating a sequence of purchase attempts, some out of range
fn purchases_strategy() -> impl Strategy<Value = Vec<(i64, i64)>> {
    prop::collection::vec((-1i64..=14, -1i64..=14), 0..40)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_shrink_iters: 2000,
        .. ProptestConfig::default()
    })]

    // Every freshly created room is fully available
    #[test]
    fn new_room_all_available((rows, seats) in dimensions_strategy()) {
        let room = SeatInventory::new(rows, seats).unwrap();
        let metrics = room.metrics();

        prop_assert_eq!(metrics.tickets_sold, 0);
        prop_assert_eq!(room.available_seats(), room.total_seats());
        prop_assert!(room
            .snapshot()
            .rows()
            .iter()
            .flatten()
            .all(|state| *state == SeatState::Available));
    }

    // Non-positive dimensions are always rejected
    #[test]
    fn non_positive_dimensions_rejected(bad in i64::MIN..=0, good in 1i64..=20) {
        prop_assert!(SeatInventory::new(bad, good).unwrap_err().is_invalid_dimension());
        prop_assert!(SeatInventory::new(good, bad).unwrap_err().is_invalid_dimension());
    }

    // A purchase changes at most one seat, and exactly one when it succeeds
    #[test]
    fn purchase_changes_at_most_one_seat(
        (rows, seats) in dimensions_strategy(),
        purchases in purchases_strategy()
    ) {
        let mut room = SeatInventory::new(rows, seats).unwrap();

        for (row, seat) in purchases {
            let before = room.snapshot();
            let result = room.purchase(row, seat);
            let after = room.snapshot();

            let changed: usize = before
                .rows()
                .iter()
                .flatten()
                .zip(after.rows().iter().flatten())
                .filter(|(a, b)| a != b)
                .count();

            match result {
                Ok(price) => {
                    prop_assert_eq!(changed, 1);
                    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
                    let (r, s) = (row as usize, seat as usize);
                    prop_assert_eq!(after.get(r, s), Some(SeatState::Reserved));
                    prop_assert_eq!(price, room.price_for_row(r));
                }
                Err(err) => {
                    prop_assert_eq!(changed, 0);
                    prop_assert!(err.is_out_of_range() || err.is_already_reserved());
                }
            }
        }
    }

    // Metrics always agree with the grid they were computed from
    #[test]
    fn metrics_are_consistent(
        (rows, seats) in dimensions_strategy(),
        purchases in purchases_strategy()
    ) {
        let mut room = SeatInventory::new(rows, seats).unwrap();
        let mut sold = 0usize;
        let mut income = 0u64;

        for (row, seat) in purchases {
            if let Ok(price) = room.purchase(row, seat) {
                sold += 1;
                income += u64::from(price);
            }
        }

        let metrics = room.metrics();
        prop_assert_eq!(metrics.tickets_sold, sold);
        prop_assert_eq!(metrics.current_income, income);
        prop_assert!(metrics.current_income <= metrics.potential_total_income);
        prop_assert!(metrics.occupancy_percent >= 0.0);
        prop_assert!(metrics.occupancy_percent <= 100.0);
        prop_assert_eq!(room.available_seats(), room.total_seats() - sold);
    }
}
