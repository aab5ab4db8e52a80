use crate::error::{Error, Result};
use crate::types::ProjectRecord;
use std::collections::HashMap;

/// Owner of the ordered, build-time-fixed project collection.
///
/// A constructed repository guarantees that every `id` is unique and
/// URL-safe, so anything that routes on `id` can rely on it.
#[derive(Debug, Clone, Default)]
pub struct ContentRepository {
    records: Vec<ProjectRecord>,
    index: HashMap<String, usize>,
}

impl ContentRepository {
    /// Take ownership of `records`, keeping their order.
    ///
    /// Fails on the first duplicate or unsafe identifier.
    pub fn new(records: Vec<ProjectRecord>) -> Result<Self> {
        let mut index = HashMap::with_capacity(records.len());

        for (position, record) in records.iter().enumerate() {
            validate_identifier(&record.id)?;
            if index.insert(record.id.clone(), position).is_some() {
                return Err(Error::DuplicateIdentifier(record.id.clone()));
            }
        }

        Ok(Self { records, index })
    }

    /// Every record in insertion order
    pub fn list_all(&self) -> &[ProjectRecord] {
        &self.records
    }

    /// Exact, case-sensitive lookup
    pub fn find_by_id(&self, id: &str) -> Option<&ProjectRecord> {
        self.index.get(id).map(|&position| &self.records[position])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Check that an identifier can be used verbatim as a path segment.
///
/// Allowed: ASCII lowercase letters, digits, `-` and `_`. Anything else is
/// rejected rather than escaped.
pub fn validate_identifier(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(Error::InvalidIdentifier {
            id: id.to_string(),
            reason: "identifier is empty".to_string(),
        });
    }

    if let Some(bad) = id
        .chars()
        .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-' || *c == '_'))
    {
        return Err(Error::InvalidIdentifier {
            id: id.to_string(),
            reason: format!(
                "character {:?} is not allowed (use a-z, 0-9, '-' or '_')",
                bad
            ),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Status;

    fn record(id: &str) -> ProjectRecord {
        ProjectRecord {
            id: id.to_string(),
            number: "01".to_string(),
            title: format!("Title {}", id),
            tagline: "Tagline".to_string(),
            description: "Description".to_string(),
            status: Status::Planned,
            repository: None,
            demo: None,
            technologies: vec![],
            concepts: vec![],
            models: vec![],
            architecture: String::new(),
            highlights: vec![],
        }
    }

    #[test]
    fn test_list_all_preserves_insertion_order() {
        let repo = ContentRepository::new(vec![record("zeta"), record("alpha"), record("mid")])
            .unwrap();
        let ids: Vec<&str> = repo.list_all().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_empty_repository_is_valid() {
        let repo = ContentRepository::new(vec![]).unwrap();
        assert!(repo.is_empty());
        assert!(repo.list_all().is_empty());
        assert!(repo.find_by_id("anything").is_none());
    }

    #[test]
    fn test_find_by_id_exact_match_only() {
        let repo = ContentRepository::new(vec![record("arxiv-paper-finder")]).unwrap();

        assert_eq!(
            repo.find_by_id("arxiv-paper-finder").map(|r| r.id.as_str()),
            Some("arxiv-paper-finder")
        );
        assert!(repo.find_by_id("does-not-exist").is_none());
        assert!(repo.find_by_id("arxiv").is_none());
        assert!(repo.find_by_id("arxiv-paper-finder-2").is_none());
        assert!(repo.find_by_id("ARXIV-PAPER-FINDER").is_none());
        assert!(repo.find_by_id(" arxiv-paper-finder").is_none());
        assert!(repo.find_by_id("").is_none());
    }

    #[test]
    fn test_rejects_duplicate_identifier() {
        let result = ContentRepository::new(vec![record("a"), record("b"), record("a")]);
        match result {
            Err(Error::DuplicateIdentifier(id)) => assert_eq!(id, "a"),
            other => panic!("expected DuplicateIdentifier, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_unsafe_identifier() {
        for bad in ["", "has space", "Upper", "slash/id", "q?x", "caf\u{e9}", "../up"] {
            let result = ContentRepository::new(vec![record(bad)]);
            assert!(
                matches!(result, Err(Error::InvalidIdentifier { .. })),
                "expected {:?} to be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_accepts_url_safe_identifiers() {
        assert!(validate_identifier("arxiv-scholar-ai").is_ok());
        assert!(validate_identifier("project_2").is_ok());
        assert!(validate_identifier("42").is_ok());
    }

    #[test]
    fn test_invalid_identifier_error_names_character() {
        let err = validate_identifier("bad id").unwrap_err();
        assert!(err.to_string().contains("bad id"));
        assert!(err.to_string().contains("' '"));
    }
}
