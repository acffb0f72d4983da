mod central_panel;
mod proof_panel;
mod tools_panel;

pub use central_panel::central_panel;
pub use proof_panel::{ProofForm, proof_panel};
pub use tools_panel::tools_panel;
