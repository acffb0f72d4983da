use std::fmt;

use log::{info, warn};

use crate::element::ElementId;
use crate::error::{EditorError, EditorResult};
use crate::id_generator::{IdAllocator, STEP_PREFIX};
use crate::store::EntityStore;

/// One committed line of a proof.
///
/// Referenced ids are a snapshot taken at commit time and are never checked
/// against the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofStep {
    id: ElementId,
    statement: String,
    reason: String,
    referenced_element_ids: Vec<ElementId>,
}

impl ProofStep {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn statement(&self) -> &str {
        &self.statement
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn referenced_element_ids(&self) -> &[ElementId] {
        &self.referenced_element_ids
    }
}

impl fmt::Display for ProofStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.id, self.statement, self.reason)?;
        if !self.referenced_element_ids.is_empty() {
            write!(f, " [{}]", self.referenced_element_ids.join(", "))?;
        }
        Ok(())
    }
}

/// Ordered, duplicate-free set of element ids with toggle semantics
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StagedReferenceSet {
    ids: Vec<ElementId>,
}

impl StagedReferenceSet {
    /// Remove `id` if staged, append it otherwise. Returns whether it is staged afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        if let Some(index) = self.ids.iter().position(|staged| staged == id) {
            self.ids.remove(index);
            false
        } else {
            self.ids.push(id.to_owned());
            true
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|staged| staged == id)
    }

    pub fn ids(&self) -> &[ElementId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Text shown next to the proof form, e.g. `P1, S2`
    pub fn summary(&self) -> String {
        self.ids.join(", ")
    }
}

/// Collects staged references and turns them into proof steps
#[derive(Debug, Default)]
pub struct ProofStepBuilder {
    staged: StagedReferenceSet,
}

impl ProofStepBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn staged(&self) -> &StagedReferenceSet {
        &self.staged
    }

    pub fn toggle_reference(&mut self, id: &str) -> bool {
        self.staged.toggle(id)
    }

    pub fn clear(&mut self) {
        self.staged.clear();
    }

    /// Validate the text fields, append a new step to `store` and clear the staged set.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Validation`] when the trimmed statement or reason is
    /// empty. Nothing is mutated in that case.
    pub fn commit(
        &mut self,
        statement: &str,
        reason: &str,
        store: &mut EntityStore,
        ids: &mut IdAllocator,
    ) -> EditorResult<ProofStep> {
        let statement = statement.trim();
        let reason = reason.trim();
        if statement.is_empty() || reason.is_empty() {
            warn!("Rejected proof step: statement and reason are both required");
            return Err(EditorError::Validation(
                "Please enter both a statement and a reason.".to_owned(),
            ));
        }

        let step = ProofStep {
            id: ids.next_id(STEP_PREFIX),
            statement: statement.to_owned(),
            reason: reason.to_owned(),
            referenced_element_ids: self.staged.ids().to_vec(),
        };
        store.add_proof_step(step.clone());
        self.staged.clear();
        info!("Proof step added: {}", step);
        Ok(step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_is_identity() {
        let mut staged = StagedReferenceSet::default();
        assert!(staged.toggle("P1"));
        assert!(staged.toggle("S2"));
        assert!(!staged.toggle("P1"));
        assert!(staged.toggle("P1"));
        assert_eq!(staged.ids(), ["S2".to_owned(), "P1".to_owned()]);
        assert_eq!(staged.summary(), "S2, P1");
    }

    #[test]
    fn test_commit_snapshots_and_clears() {
        let mut builder = ProofStepBuilder::new();
        let mut store = EntityStore::new();
        let mut ids = IdAllocator::new();
        builder.toggle_reference("P1");
        builder.toggle_reference("S2");

        let step = builder.commit("  A=B ", "given", &mut store, &mut ids).unwrap();
        assert_eq!(step.id(), "Step1");
        assert_eq!(step.statement(), "A=B");
        assert_eq!(step.referenced_element_ids(), ["P1".to_owned(), "S2".to_owned()]);
        assert!(builder.staged().is_empty());
        assert_eq!(store.list_proof_steps(), [step]);
    }

    #[test]
    fn test_blank_fields_rejected() {
        let mut builder = ProofStepBuilder::new();
        let mut store = EntityStore::new();
        let mut ids = IdAllocator::new();
        builder.toggle_reference("P1");

        for (statement, reason) in [("", "x"), ("x", ""), ("   ", "x"), ("x", "\t")] {
            let err = builder.commit(statement, reason, &mut store, &mut ids).unwrap_err();
            assert!(matches!(err, EditorError::Validation(_)));
        }
        assert!(store.list_proof_steps().is_empty());
        assert_eq!(builder.staged().ids(), ["P1".to_owned()]);
        assert_eq!(ids.issued(STEP_PREFIX), 0);
    }

    #[test]
    fn test_dangling_references_still_commit() {
        let mut builder = ProofStepBuilder::new();
        let mut store = EntityStore::new();
        let mut ids = IdAllocator::new();
        builder.toggle_reference("T42");
        let step = builder.commit("x", "y", &mut store, &mut ids).unwrap();
        assert_eq!(step.to_string(), "Step1: x (y) [T42]");
    }
}
