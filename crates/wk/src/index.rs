//! Resolves the subject ids that subjects refer to each other by.

use std::collections::HashMap;
use wk_api::{Subject, SubjectId};

/// Subjects keyed by id.
#[derive(Debug, Clone, Default)]
pub struct SubjectIndex {
    subjects: HashMap<SubjectId, Subject>,
}

impl SubjectIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a subject, returning the one it replaced.
    /// Subjects fetched later are newer, so they take precedence.
    pub fn insert(&mut self, subject: Subject) -> Option<Subject> {
        self.subjects.insert(subject.id, subject)
    }

    pub fn get(&self, id: SubjectId) -> Option<&Subject> {
        self.subjects.get(&id)
    }

    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    /// Iterates over the subjects in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Subject> {
        self.subjects.values()
    }

    /// The subject's components that are in the index, in the order the subject lists them.
    pub fn components<'a>(
        &'a self,
        subject: &'a Subject,
    ) -> impl Iterator<Item = &'a Subject> {
        self.resolve(&subject.data.component_subject_ids)
    }

    /// The subjects in the index that use this subject as a component.
    pub fn amalgamations<'a>(
        &'a self,
        subject: &'a Subject,
    ) -> impl Iterator<Item = &'a Subject> {
        self.resolve(&subject.data.amalgamation_subject_ids)
    }

    /// Ids the subject refers to that are not in the index.
    pub fn unresolved<'a>(
        &'a self,
        subject: &'a Subject,
    ) -> impl Iterator<Item = SubjectId> + 'a {
        let data = &subject.data;
        data.component_subject_ids
            .iter()
            .chain(&data.amalgamation_subject_ids)
            .chain(&data.visually_similar_subject_ids)
            .copied()
            .filter(|id| !self.subjects.contains_key(id))
    }

    fn resolve<'a>(&'a self, ids: &'a [SubjectId]) -> impl Iterator<Item = &'a Subject> {
        ids.iter().filter_map(|id| self.subjects.get(id))
    }
}

impl Extend<Subject> for SubjectIndex {
    fn extend<T: IntoIterator<Item = Subject>>(&mut self, iter: T) {
        for subject in iter {
            self.insert(subject);
        }
    }
}

impl FromIterator<Subject> for SubjectIndex {
    fn from_iter<T: IntoIterator<Item = Subject>>(iter: T) -> Self {
        let mut index = Self::new();
        index.extend(iter);
        index
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use wk_api::{SubjectData, SubjectKind};

    fn subject(id: SubjectId, kind: SubjectKind, characters: &str) -> Subject {
        Subject {
            id,
            object: kind,
            data: SubjectData {
                characters: characters.to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn resolves_references() {
        let ground = subject(1, SubjectKind::Radical, "一");
        let mut one = subject(440, SubjectKind::Kanji, "一");
        one.data.component_subject_ids = vec![1];
        one.data.amalgamation_subject_ids = vec![2467, 2468];
        one.data.visually_similar_subject_ids = vec![9999];
        let ichi = subject(2467, SubjectKind::Vocabulary, "一");

        let index = [ground, one.clone(), ichi]
            .into_iter()
            .collect::<SubjectIndex>();
        assert_eq!(index.len(), 3);
        assert_eq!(index.iter().count(), 3);

        let components = index.components(&one).map(|s| s.id).collect::<Vec<_>>();
        assert_eq!(components, vec![1]);
        let amalgamations = index.amalgamations(&one).map(|s| s.id).collect::<Vec<_>>();
        assert_eq!(amalgamations, vec![2467]);
        let unresolved = index.unresolved(&one).collect::<Vec<_>>();
        assert_eq!(unresolved, vec![2468, 9999]);
    }

    #[test]
    fn later_subject_replaces_earlier() {
        let mut index = SubjectIndex::new();
        assert!(index.is_empty());
        assert!(index.insert(subject(1, SubjectKind::Radical, "old")).is_none());
        let replaced = index.insert(subject(1, SubjectKind::Radical, "new"));
        assert_eq!(replaced.unwrap().data.characters, "old");
        assert_eq!(index.get(1).unwrap().data.characters, "new");
        assert_eq!(index.len(), 1);
    }
}
