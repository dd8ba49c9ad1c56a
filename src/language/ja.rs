//! Japanese grammar helpers.
pub mod adjective;
pub mod adverb;
pub mod particle;
