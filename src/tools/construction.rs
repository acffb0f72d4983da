use egui::Pos2;

use crate::element::{ElementId, Point};
use crate::error::EditorResult;
use crate::id_generator::{IdAllocator, POINT_PREFIX};
use crate::store::EntityStore;

/// A clicked location that is not in the store yet.
///
/// The temporary id is only used for display and is never reused for the
/// committed point.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingPoint {
    pub temp_id: ElementId,
    pub pos: Pos2,
}

/// One buffered click of a multi-click construction
#[derive(Debug, Clone, PartialEq)]
pub enum Anchor {
    /// Fresh location, committed when the construction completes
    Pending(PendingPoint),
    /// Snapped to a point that is already in the store
    Committed(ElementId),
}

impl Anchor {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }

    /// Current position, looking committed points up in `store`
    pub fn pos(&self, store: &EntityStore) -> Option<Pos2> {
        match self {
            Self::Pending(pending) => Some(pending.pos),
            Self::Committed(id) => store.point_pos(id),
        }
    }

    /// Commit a pending anchor as a new `P` point. Snapped anchors are returned as-is.
    pub fn finalize(self, store: &mut EntityStore, ids: &mut IdAllocator) -> EditorResult<ElementId> {
        match self {
            Self::Committed(id) => Ok(id),
            Self::Pending(pending) => {
                let id = ids.next_id(POINT_PREFIX);
                store.add_point(Point::new(id.clone(), pending.pos))?;
                log::debug!("Finalized temporary {} as {}", pending.temp_id, id);
                Ok(id)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finalize_pending_allocates_point() {
        let mut store = EntityStore::new();
        let mut ids = IdAllocator::new();
        let anchor = Anchor::Pending(PendingPoint {
            temp_id: ids.next_id("TEMP_P"),
            pos: Pos2::new(4.0, 2.0),
        });
        assert!(anchor.is_pending());

        let id = anchor.finalize(&mut store, &mut ids).unwrap();
        assert_eq!(id, "P1");
        assert_eq!(store.point_pos("P1"), Some(Pos2::new(4.0, 2.0)));
    }

    #[test]
    fn test_finalize_committed_is_a_no_op() {
        let mut store = EntityStore::new();
        let mut ids = IdAllocator::new();
        store.add_point(Point::new("P7", Pos2::new(1.0, 1.0))).unwrap();

        let anchor = Anchor::Committed("P7".to_owned());
        assert_eq!(anchor.pos(&store), Some(Pos2::new(1.0, 1.0)));
        assert_eq!(anchor.finalize(&mut store, &mut ids).unwrap(), "P7");
        assert_eq!(store.points().len(), 1);
        assert_eq!(ids.issued(POINT_PREFIX), 0);
    }
}
