//! Japanese grammar helpers: adjective classification and inflection,
//! plus reference tables of adverbs and particles.
//!
//! Everything here is a pure function over static data. Tables are built
//! lazily on first use and are never mutated afterwards.
//!
//! # Examples
//! ```
//! use bunpo_rs::{negative, conditional, lookup, is_time_adverb, Register};
//!
//! assert_eq!(negative("たかい", Register::Plain).unwrap(), "たかくない");
//! assert_eq!(negative("きれい", Register::Colloquial).unwrap(), "きれいじゃない");
//! assert_eq!(conditional("きれい").unwrap(), "きれいなら");
//! assert!(is_time_adverb("きのう"));
//! assert!(lookup("を").is_some());
//! ```
mod errors;
pub mod language;

pub use errors::{GrammarError, Result};
pub use language::ja::adjective::{
    adverbial, classify, conditional, inflect, inflect_all, negative, past, past_negative,
    te_form, AdjectiveClass, AdjectiveInflections, InflectOptions, InflectionForm, Register,
};
pub use language::ja::adverb::{
    all_adverbs, categories_of, is_degree_adverb, is_frequency_adverb, is_manner_adverb,
    is_mood_adverb, is_negative_adverb, is_time_adverb, AdverbCategory,
};
pub use language::ja::particle::{
    is_particle, list_all, lookup, lookup_by_role, Particle, ParticleRole,
    PARTICLE_COMBINATIONS,
};
