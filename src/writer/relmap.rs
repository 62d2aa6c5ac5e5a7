/// Relationship ID mapper for one output part.
///
/// Every part numbers its relationships independently, starting at 1 (plus the configured
/// offset). Media targets (images and embedded objects) are shared: the same file maps to
/// one relationship. Every other resource gets its own id.
use std::collections::HashMap;

use super::{Relationship, RelationshipKind};

#[derive(Debug, Default)]
pub(crate) struct RelationshipMapper {
    offset: u32,
    relationships: Vec<Relationship>,
    by_target: HashMap<(RelationshipKind, String), usize>,
}

impl RelationshipMapper {
    pub fn new(offset: u32) -> Self {
        Self {
            offset,
            ..Self::default()
        }
    }

    /// Relationship id for `target`, allocating the next one on first use.
    pub fn add(&mut self, kind: RelationshipKind, target: &str) -> String {
        let shared = matches!(kind, RelationshipKind::Image | RelationshipKind::OleObject);
        if shared && let Some(&index) = self.by_target.get(&(kind, target.to_string())) {
            return self.relationships[index].id.clone();
        }
        let id = format!("rId{}", self.offset as usize + self.relationships.len() + 1);
        if shared {
            self.by_target
                .insert((kind, target.to_string()), self.relationships.len());
        }
        self.relationships.push(Relationship {
            id: id.clone(),
            kind,
            target: target.to_string(),
        });
        id
    }

    pub fn len(&self) -> usize {
        self.relationships.len()
    }

    pub fn into_relationships(self) -> Vec<Relationship> {
        self.relationships
    }
}
