//! Tournament business logic: seeding, bracket progression, standings, qualification.

mod elimination;
mod group_play;
mod qualification;
mod seeding;
mod setup;
mod standings;

pub use elimination::{apply_match_result, build_bracket, record_bracket_result, ResultReport};
pub use group_play::{
    generate_round_robin_matches, record_group_result, record_group_stage_result,
};
pub use qualification::{extract_qualifiers, promote_qualifiers};
pub use seeding::{
    allocate_seeds, allocate_seeds_ordered, allocate_seeds_random, bracket_capacity,
};
pub use setup::{start_group_stage, start_knockout};
pub use standings::compute_group_standings;
