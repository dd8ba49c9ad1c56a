use std::sync::LazyLock;

use derive_more::derive::Deref;
use getset::Getters;
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// Grammatical roles a particle can mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticleRole {
    Topic,
    Subject,
    Object,
    Location,
    Direction,
    Tool,
    Time,
    Companion,
    Source,
    Destination,
    Comparison,
    Purpose,
    Reason,
    Addition,
    Emphasis,
    Possessive,
    Question,
    Mood,
}

impl std::fmt::Display for ParticleRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ParticleRole::Topic => "主題",
            ParticleRole::Subject => "主語",
            ParticleRole::Object => "目的語",
            ParticleRole::Location => "場所",
            ParticleRole::Direction => "方向",
            ParticleRole::Tool => "手段",
            ParticleRole::Time => "時間",
            ParticleRole::Companion => "相手",
            ParticleRole::Source => "起点",
            ParticleRole::Destination => "終点",
            ParticleRole::Comparison => "比較",
            ParticleRole::Purpose => "目的",
            ParticleRole::Reason => "理由",
            ParticleRole::Addition => "並列",
            ParticleRole::Emphasis => "強調",
            ParticleRole::Possessive => "所有",
            ParticleRole::Question => "疑問",
            ParticleRole::Mood => "語気",
        };
        write!(f, "{label}")
    }
}

/// A single particle entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct Particle {
    /// Written form, unique within the catalog.
    surface_form: String,
    /// Never empty.
    roles: IndexSet<ParticleRole>,
    meaning: String,
    /// Never empty.
    examples: Vec<String>,
}

impl Particle {
    pub fn has_role(&self, role: ParticleRole) -> bool {
        self.roles.contains(&role)
    }
}

/// The fixed particle list, in declaration order.
#[derive(Debug, Deref)]
pub struct ParticleCatalog(Vec<Particle>);

impl ParticleCatalog {
    /// Loads the catalog embedded in the binary.
    ///
    /// This function will panic if the embedded JSON is invalid,
    /// or if a record has no roles or no examples.
    fn new() -> Self {
        let particles_json = include_str!("../../../json_lists/particles.json");
        let particles: Vec<Particle> =
            serde_json::from_str(particles_json).expect("Failed to parse particles.json");
        for p in &particles {
            assert!(!p.roles.is_empty(), "particle `{}` has no roles", p.surface_form);
            assert!(!p.examples.is_empty(), "particle `{}` has no examples", p.surface_form);
        }
        log::debug!("loaded {} particles", particles.len());
        ParticleCatalog(particles)
    }
}

pub static PARTICLES: LazyLock<ParticleCatalog> = LazyLock::new(ParticleCatalog::new);

/// Idiomatic two-particle patterns and their glosses.
pub static PARTICLE_COMBINATIONS: LazyLock<IndexMap<&'static str, &'static str>> =
    LazyLock::new(|| {
        IndexMap::from([
            ("から～まで", "从...到..."),
            ("に～を", "在...做..."),
            ("で～を", "用...做..."),
            ("と～と", "...和..."),
            ("も～も", "...也...也"),
            ("より～のほうが", "比...更..."),
        ])
    });

/// Finds the particle written as `surface_form`.
///
/// # Examples
/// ```
/// use bunpo_rs::{lookup, ParticleRole};
///
/// let wa = lookup("は").unwrap();
/// assert!(wa.has_role(ParticleRole::Topic));
/// assert!(lookup("本").is_none());
/// ```
pub fn lookup(surface_form: &str) -> Option<&'static Particle> {
    PARTICLES.iter().find(|p| p.surface_form == surface_form)
}

/// Every particle that can mark `role`, in declaration order.
pub fn lookup_by_role(role: ParticleRole) -> Vec<&'static Particle> {
    PARTICLES.iter().filter(|p| p.has_role(role)).collect()
}

pub fn list_all() -> &'static [Particle] {
    &PARTICLES
}

pub fn is_particle(word: &str) -> bool {
    lookup(word).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn lookup_wa() {
        let wa = lookup("は").unwrap();
        assert_eq!(wa.surface_form(), "は");
        assert!(wa.roles().contains(&ParticleRole::Topic));
        assert_eq!(wa.meaning(), "主题标记，表示话题");
        assert!(!wa.examples().is_empty());
    }

    #[test]
    fn lookup_missing() {
        assert_eq!(lookup("本"), None);
        assert_eq!(lookup(""), None);
    }

    #[test]
    fn is_particle_checks_exact_form() {
        for word in ["は", "が", "を", "に", "で"] {
            assert!(is_particle(word), "{word}");
        }
        assert!(!is_particle("本"));
        assert!(!is_particle("学生"));
        assert!(!is_particle("からまで"));
    }

    #[test]
    fn roles_keep_declaration_order() {
        let ni = lookup("に").unwrap();
        let roles: Vec<ParticleRole> = ni.roles().iter().copied().collect();
        assert_eq!(
            roles,
            vec![
                ParticleRole::Location,
                ParticleRole::Direction,
                ParticleRole::Time,
                ParticleRole::Purpose
            ]
        );
        let de = lookup("で").unwrap();
        assert!(de.has_role(ParticleRole::Location));
        assert!(de.has_role(ParticleRole::Tool));
    }

    #[test]
    fn by_role() {
        let forms = |role| {
            lookup_by_role(role)
                .into_iter()
                .map(|p| p.surface_form().as_str())
                .collect::<Vec<_>>()
        };
        assert_eq!(forms(ParticleRole::Topic), vec!["は"]);
        assert_eq!(forms(ParticleRole::Subject), vec!["が"]);
        assert_eq!(forms(ParticleRole::Object), vec!["を"]);
        assert_eq!(forms(ParticleRole::Location), vec!["に", "で"]);
        assert_eq!(forms(ParticleRole::Addition), vec!["と", "も", "や"]);
        assert_eq!(forms(ParticleRole::Mood), vec!["ね", "よ", "さ"]);
    }

    #[test]
    fn list_all_in_order() {
        let forms: Vec<&str> = list_all().iter().map(|p| p.surface_form().as_str()).collect();
        assert_eq!(
            forms,
            vec![
                "は", "が", "を", "に", "で", "へ", "と", "から", "まで", "より", "も", "や", "の",
                "か", "ね", "よ", "さ"
            ]
        );
    }

    #[test]
    fn every_record_is_complete() {
        for p in list_all() {
            assert!(!p.surface_form().is_empty());
            assert!(!p.meaning().is_empty());
            assert!(!p.roles().is_empty(), "{}", p.surface_form());
            assert!(!p.examples().is_empty(), "{}", p.surface_form());
            assert!(
                p.examples().iter().all(|e| e.contains(p.surface_form().as_str())),
                "{}",
                p.surface_form()
            );
        }
    }

    #[test]
    fn surface_forms_are_unique() {
        let unique: HashSet<&str> = list_all().iter().map(|p| p.surface_form().as_str()).collect();
        assert_eq!(unique.len(), list_all().len());
    }

    #[test]
    fn combinations() {
        let expected = [
            ("から～まで", "从...到..."),
            ("に～を", "在...做..."),
            ("で～を", "用...做..."),
            ("と～と", "...和..."),
            ("も～も", "...也...也"),
            ("より～のほうが", "比...更..."),
        ];
        assert_eq!(PARTICLE_COMBINATIONS.len(), expected.len());
        for (pattern, gloss) in expected {
            assert_eq!(PARTICLE_COMBINATIONS.get(pattern), Some(&gloss));
        }
        // combination patterns are not particles themselves
        assert!(PARTICLE_COMBINATIONS.keys().all(|k| !is_particle(k)));
    }

    #[test]
    fn role_labels() {
        assert_eq!(ParticleRole::Topic.to_string(), "主題");
        assert_eq!(ParticleRole::Tool.to_string(), "手段");
    }
}
