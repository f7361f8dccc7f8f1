use crate::config::FoodTargeting;
use crate::types::{Move, Position};

/// Picks the food the tie-break should steer towards, if any.
pub fn target_food(head: Position, food: &[Position], targeting: FoodTargeting) -> Option<Position> {
    match targeting {
        FoodTargeting::Nearest => scan_closest(head, food, u32::MAX),
        FoodTargeting::Legacy => scan_closest(head, food, 0),
    }
}

/// Keeps the first food strictly closer than everything seen so far, starting
/// from `bound`. With a bound of zero nothing ever qualifies.
fn scan_closest(head: Position, food: &[Position], bound: u32) -> Option<Position> {
    let mut shortest = bound;
    let mut closest = None;
    for &f in food {
        let distance = head.manhattan_distance(f);
        if distance < shortest {
            shortest = distance;
            closest = Some(f);
        }
    }
    closest
}

/// The candidate whose next head lands closest to `target`. Ties keep the
/// earlier candidate.
pub fn step_towards(head: Position, candidates: &[Move], target: Position) -> Option<Move> {
    candidates
        .iter()
        .copied()
        .min_by_key(|&mv| head.step(mv).manhattan_distance(target))
}
