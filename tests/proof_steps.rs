use eframe_geoproof::{EditorError, InteractionStateMachine, PointerEvent, Tool};
use egui::Pos2;

fn click(editor: &mut InteractionStateMachine, x: f32, y: f32) {
    editor
        .handle_pointer(PointerEvent::down(Pos2::new(x, y)))
        .unwrap();
}

/// Two points and the segment S1 between them, from (100, 100) to (300, 100)
fn editor_with_segment() -> InteractionStateMachine {
    let mut editor = InteractionStateMachine::default();
    editor.select_tool(Tool::AddSegment);
    click(&mut editor, 100.0, 100.0);
    click(&mut editor, 300.0, 100.0);
    editor.select_tool(Tool::SelectForProof);
    editor
}

#[test]
fn test_clicks_stage_point_then_segment() {
    let mut editor = editor_with_segment();
    click(&mut editor, 102.0, 101.0);
    click(&mut editor, 200.0, 105.0);

    assert_eq!(editor.staged_references().summary(), "P1, S1");
}

#[test]
fn test_toggling_twice_is_identity() {
    let mut editor = editor_with_segment();
    click(&mut editor, 100.0, 100.0);
    let before = editor.staged_references().clone();

    click(&mut editor, 200.0, 100.0);
    click(&mut editor, 200.0, 100.0);
    assert_eq!(*editor.staged_references(), before);
}

#[test]
fn test_click_on_nothing_stages_nothing() {
    let mut editor = editor_with_segment();
    click(&mut editor, 500.0, 500.0);
    assert!(editor.staged_references().is_empty());
}

#[test]
fn test_commit_requires_statement_and_reason() {
    let mut editor = editor_with_segment();
    click(&mut editor, 100.0, 100.0);

    for (statement, reason) in [("", "x"), ("x", ""), (" ", " ")] {
        let err = editor.commit_proof_step(statement, reason).unwrap_err();
        assert!(matches!(err, EditorError::Validation(_)));
        assert_eq!(
            err.to_string(),
            "Please enter both a statement and a reason."
        );
    }
    assert!(editor.list_proof_steps().is_empty());
    assert_eq!(editor.staged_references().len(), 1);
}

#[test]
fn test_commit_snapshots_references() {
    let mut editor = editor_with_segment();
    click(&mut editor, 100.0, 100.0);
    click(&mut editor, 200.0, 100.0);

    let step = editor.commit_proof_step("A=B", "given").unwrap();
    assert_eq!(step.id(), "Step1");
    assert_eq!(step.referenced_element_ids(), ["P1".to_owned(), "S1".to_owned()]);
    assert!(editor.staged_references().is_empty());
    assert_eq!(editor.list_proof_steps(), [step]);

    let second = editor.commit_proof_step("B=C", "transitivity").unwrap();
    assert_eq!(second.id(), "Step2");
    assert!(second.referenced_element_ids().is_empty());
    assert_eq!(editor.list_proof_steps().len(), 2);
}

#[test]
fn test_clear_staged_references() {
    let mut editor = editor_with_segment();
    click(&mut editor, 100.0, 100.0);
    editor.clear_staged_references();
    assert!(editor.staged_references().is_empty());
}

#[test]
fn test_staged_references_survive_tool_changes() {
    let mut editor = editor_with_segment();
    click(&mut editor, 300.0, 100.0);
    editor.select_tool(Tool::AddPoint);
    assert_eq!(editor.staged_references().summary(), "P2");
}
