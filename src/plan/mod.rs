pub mod allocate;
pub mod descriptor;
pub mod fingerprint;
pub mod groups;
pub mod narration;
pub mod order;
pub mod pipeline;
