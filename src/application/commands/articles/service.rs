// src/application/commands/articles/service.rs
use crate::application::editor::EditorDependencies;

/// Write-side entry points. Creating and updating articles goes through an
/// editing session opened here; deletion is a single command.
pub struct ArticleCommandService {
    pub(super) deps: EditorDependencies,
}

impl ArticleCommandService {
    pub fn new(deps: EditorDependencies) -> Self {
        Self { deps }
    }
}
