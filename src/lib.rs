//! Tournament bracket web app: library with models and the progression engine.

pub mod logic;
pub mod models;

pub use logic::{
    allocate_seeds, allocate_seeds_ordered, allocate_seeds_random, apply_match_result,
    bracket_capacity, build_bracket, compute_group_standings, extract_qualifiers,
    generate_round_robin_matches, promote_qualifiers, record_bracket_result,
    record_group_result, record_group_stage_result, start_group_stage, start_knockout,
    ResultReport,
};
pub use models::{
    Bracket, BracketMatch, Group, GroupId, GroupMatch, MatchId, MatchStatus, NextSlot,
    Participant, ParticipantId, ScoringRules, Slot, SlotSide, StandingEntry, Tournament,
    TournamentError, TournamentId, TournamentState,
};
