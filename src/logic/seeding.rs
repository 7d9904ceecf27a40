//! Seed allocation: bracket capacity and standard bracket placement.

use crate::models::{Participant, ParticipantId, Slot, TournamentError};
use rand::seq::SliceRandom;
use rand::Rng;

/// Bracket capacity for n participants: smallest power of two >= n.
pub fn bracket_capacity(n: usize) -> usize {
    n.next_power_of_two()
}

/// Seed number occupying each slot position for a bracket of the given
/// capacity, using standard placement: seed 1 vs seed C, seed 2 vs seed C-1,
/// pairing outward so top seeds meet as late as possible. Seeds are 0-based.
///
/// Built by doubling: at each step every seed is paired with its complement
/// in the larger bracket, which keeps seed 1 and seed 2 in opposite halves.
fn seed_positions(capacity: usize) -> Vec<usize> {
    let mut order = vec![0usize];
    let mut size = 1;
    while size < capacity {
        size *= 2;
        let mut next = Vec::with_capacity(size);
        for &seed in &order {
            next.push(seed);
            next.push(size - 1 - seed);
        }
        order = next;
    }
    order
}

/// Place participants into bracket slots in input order (seed 1 = first).
/// Returns `capacity` slots; the `capacity - n` unfilled ones are BYEs.
/// Deterministic: identical input always yields identical slots.
pub fn allocate_seeds(participants: &[Participant]) -> Result<Vec<Slot>, TournamentError> {
    let n = participants.len();
    if n < 2 {
        return Err(TournamentError::InvalidParticipantCount { provided: n });
    }
    let capacity = bracket_capacity(n);
    let slots = seed_positions(capacity)
        .into_iter()
        .map(|seed| match participants.get(seed) {
            Some(p) => Slot::Taken(p.id),
            None => Slot::Bye,
        })
        .collect();
    Ok(slots)
}

/// Place participants using an explicit seeding order instead of input order.
/// Every id in `seeding` must exist in `participants`, and every participant
/// must be seeded exactly once.
pub fn allocate_seeds_ordered(
    participants: &[Participant],
    seeding: &[ParticipantId],
) -> Result<Vec<Slot>, TournamentError> {
    if seeding.len() != participants.len() {
        return Err(TournamentError::InvalidParticipantCount {
            provided: seeding.len(),
        });
    }
    let distinct: std::collections::HashSet<_> = seeding.iter().collect();
    if distinct.len() != seeding.len() {
        return Err(TournamentError::InvalidParticipantCount {
            provided: distinct.len(),
        });
    }
    let mut ordered = Vec::with_capacity(seeding.len());
    for &id in seeding {
        let p = participants
            .iter()
            .find(|p| p.id == id)
            .ok_or(TournamentError::ParticipantNotFound(id))?;
        ordered.push(p.clone());
    }
    allocate_seeds(&ordered)
}

/// Random seeding through a caller-supplied RNG, so tests can pass a seeded
/// generator and get reproducible placement.
pub fn allocate_seeds_random<R: Rng>(
    participants: &[Participant],
    rng: &mut R,
) -> Result<Vec<Slot>, TournamentError> {
    let mut shuffled = participants.to_vec();
    shuffled.shuffle(rng);
    allocate_seeds(&shuffled)
}
