use rand::seq::IndexedRandom;
use rand::RngCore;
use tracing::{debug, info};

use crate::config::{BoundaryPolicy, SelectorConfig};
use crate::food::{step_towards, target_food};
use crate::types::{Move, Snapshot};

/// Trait that defines a snake agent's decision-making interface.
pub trait Agent: Send + Sync {
    /// Returns the name of this agent for display purposes.
    fn name(&self) -> &str;

    /// Choose a move for the snake described by `snapshot.you()`.
    fn choose_move(&self, snapshot: &Snapshot, rng: &mut dyn RngCore) -> Move;
}

impl Agent for Box<dyn Agent> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn choose_move(&self, snapshot: &Snapshot, rng: &mut dyn RngCore) -> Move {
        (**self).choose_move(snapshot, rng)
    }
}

/// Picks a move by one-step lookahead.
/// **Inner Workings**
/// Starting from all four moves we drop the move back onto our neck, moves off
/// the board, moves into our own body and moves into any other snake. Of the
/// moves left we take the one that brings the head closest to the target food,
/// or a random one when there is no target. If nothing is left we go down.
pub struct MoveSelector {
    name: String,
    config: SelectorConfig,
}

impl MoveSelector {
    pub fn new(config: SelectorConfig) -> Self {
        Self {
            name: "Slitherin".to_string(),
            config,
        }
    }

    pub fn with_name(name: impl Into<String>, config: SelectorConfig) -> Self {
        Self {
            name: name.into(),
            config,
        }
    }

    pub fn config(&self) -> SelectorConfig {
        self.config
    }

    /// Moves surviving the reversal, boundary, self and opponent filters, in
    /// up, down, left, right order.
    pub fn safe_moves(&self, snapshot: &Snapshot) -> Vec<Move> {
        let mut candidates = Move::ALL.to_vec();
        self.drop_reversal(snapshot, &mut candidates);
        self.drop_out_of_bounds(snapshot, &mut candidates);
        self.drop_self_collisions(snapshot, &mut candidates);
        self.drop_opponent_collisions(snapshot, &mut candidates);
        candidates
    }

    pub fn decide(&self, snapshot: &Snapshot, rng: &mut dyn RngCore) -> Move {
        let safe = self.safe_moves(snapshot);
        if safe.is_empty() {
            info!("MOVE {}: No safe moves detected! Moving down", snapshot.turn());
            return Move::Down;
        }

        let head = snapshot.head();
        let chosen = target_food(head, &snapshot.board().food, self.config.food)
            .and_then(|target| {
                debug!(?target, "steering towards food");
                step_towards(head, &safe, target)
            })
            .or_else(|| safe.choose(rng).copied())
            .unwrap_or(Move::Down);

        info!("MOVE {}: {}", snapshot.turn(), chosen);
        chosen
    }

    /// Forbids stepping back onto the neck. Only the first axis on which neck
    /// and head differ is looked at; a stacked neck forbids nothing.
    fn drop_reversal(&self, snapshot: &Snapshot, candidates: &mut Vec<Move>) {
        let you = snapshot.you();
        let (Some(head), Some(neck)) = (you.head(), you.neck()) else {
            return;
        };
        let reverse = if neck.x < head.x {
            Some(Move::Left)
        } else if neck.x > head.x {
            Some(Move::Right)
        } else if neck.y < head.y {
            Some(Move::Down)
        } else if neck.y > head.y {
            Some(Move::Up)
        } else {
            None
        };
        if let Some(reverse) = reverse {
            debug!(%reverse, "dropping reversal");
            candidates.retain(|&mv| mv != reverse);
        }
    }

    fn drop_out_of_bounds(&self, snapshot: &Snapshot, candidates: &mut Vec<Move>) {
        let board = snapshot.board();
        let head = snapshot.head();
        match self.config.boundary {
            BoundaryPolicy::Independent => {
                candidates.retain(|&mv| board.contains(head.step(mv)));
            }
            BoundaryPolicy::FirstMatch => {
                let blocked = if head.x == 0 {
                    Some(Move::Left)
                } else if head.x == board.width - 1 {
                    Some(Move::Right)
                } else if head.y == 0 {
                    Some(Move::Down)
                } else if head.y == board.height - 1 {
                    Some(Move::Up)
                } else {
                    None
                };
                if let Some(blocked) = blocked {
                    candidates.retain(|&mv| mv != blocked);
                }
            }
        }
        debug!(?candidates, "after boundary filter");
    }

    fn drop_self_collisions(&self, snapshot: &Snapshot, candidates: &mut Vec<Move>) {
        let head = snapshot.head();
        let body = &snapshot.you().body[1..];
        candidates.retain(|&mv| !body.contains(&head.step(mv)));
        debug!(?candidates, "after self-collision filter");
    }

    fn drop_opponent_collisions(&self, snapshot: &Snapshot, candidates: &mut Vec<Move>) {
        let head = snapshot.head();
        for opponent in snapshot.opponents() {
            candidates.retain(|&mv| !opponent.occupies(head.step(mv)));
        }
        debug!(?candidates, "after opponent filter");
    }
}

impl Default for MoveSelector {
    fn default() -> Self {
        Self::new(SelectorConfig::default())
    }
}

impl Agent for MoveSelector {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&self, snapshot: &Snapshot, rng: &mut dyn RngCore) -> Move {
        self.decide(snapshot, rng)
    }
}
