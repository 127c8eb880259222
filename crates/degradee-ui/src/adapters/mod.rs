//! Ready-made listeners and the host collaborators they need.

pub mod standard;

pub use standard::{ColorChooser, MarkAction, MarkMenu, MenuEntry, StandardAdapter};
