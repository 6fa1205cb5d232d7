//! Export visitor protocol
//!
//! Every export format implements [`ExportVisitor`]; every entity kind
//! implements [`Exportable`] and dispatches to the matching visit method.
//! Adding a format never touches the entities. Adding an entity kind means
//! adding a method here and to every renderer.

use crate::models::{Character, Mission};

/// One render operation per entity kind.
///
/// `Output` is whatever the format produces per entity: a JSON value, a
/// string fragment, or `()` for renderers that accumulate internal state.
pub trait ExportVisitor {
    type Output;

    fn visit_character(&mut self, character: &Character) -> Self::Output;

    fn visit_mission(&mut self, mission: &Mission) -> Self::Output;
}

/// Entity side of the double dispatch
pub trait Exportable {
    fn accept<V: ExportVisitor>(&self, visitor: &mut V) -> V::Output;
}

impl Exportable for Character {
    fn accept<V: ExportVisitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_character(self)
    }
}

impl Exportable for Mission {
    fn accept<V: ExportVisitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_mission(self)
    }
}

/// Visit every entity in order and collect the per-entity outputs
pub fn visit_all<T, V>(entities: &[T], visitor: &mut V) -> Vec<V::Output>
where
    T: Exportable,
    V: ExportVisitor,
{
    entities.iter().map(|e| e.accept(visitor)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CharacterRank, MissionRank, Stats};

    /// Records which visit method ran, in order
    #[derive(Default)]
    struct TraceVisitor {
        calls: Vec<String>,
    }

    impl ExportVisitor for TraceVisitor {
        type Output = usize;

        fn visit_character(&mut self, character: &Character) -> usize {
            self.calls.push(format!("character:{}", character.name()));
            self.calls.len()
        }

        fn visit_mission(&mut self, mission: &Mission) -> usize {
            self.calls.push(format!("mission:{}", mission.rank()));
            self.calls.len()
        }
    }

    #[test]
    fn test_accept_dispatches_on_entity_kind() {
        let characters = vec![
            Character::new("Naruto", CharacterRank::Genin, Stats::default()),
            Character::new("Sakura", CharacterRank::Genin, Stats::default()),
        ];
        let missions = vec![Mission::new(MissionRank::B, 900, CharacterRank::Chunin)];

        let mut visitor = TraceVisitor::default();
        let first = visit_all(&characters, &mut visitor);
        let second = visit_all(&missions, &mut visitor);

        assert_eq!(first, vec![1, 2]);
        assert_eq!(second, vec![3]);
        assert_eq!(
            visitor.calls,
            vec!["character:Naruto", "character:Sakura", "mission:B"]
        );
    }
}
