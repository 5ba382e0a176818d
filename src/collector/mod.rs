// src/collector/mod.rs
// =============================================================================
// This module contains the repository summary collection logic.
//
// Submodules:
// - pipeline: Walks the listing and builds one summary per repository
// - preview: Decodes README payloads and applies the preview length limit
//
// This file (mod.rs) is the module root - it ties everything together and
// exports the public API that other parts of our application can use.
// =============================================================================

// Declare submodules (tells Rust to include these files)
mod pipeline;
mod preview;

// Re-export public items from submodules
// This lets users write `collector::RepoSummary` instead of
// `collector::pipeline::RepoSummary`
pub use pipeline::{CollectOptions, RepoSummary, RepositorySummaryCollector};
pub use preview::ReadmeContent;

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is mod.rs?
//    - When you have a directory as a module (like src/collector/), the
//      mod.rs file inside it is the module root
//    - It's like index.js in JavaScript or __init__.py in Python
//
// 2. Why use 'pub use'?
//    - It re-exports items from submodules
//    - Makes the API cleaner for users of this module
//    - They don't need to know about our internal organization
// -----------------------------------------------------------------------------
