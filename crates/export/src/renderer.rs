//! The document renderer seam.

use std::io;

use thiserror::Error;

use orderpad_core::DomainError;

use crate::content::DocumentContent;

/// Export failure taxonomy.
///
/// `Disabled` and `EmptyOrderList` are gate checks made before any content
/// is built; the rest surface from the renderer itself.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("export is not enabled")]
    Disabled,

    #[error("order list is empty")]
    EmptyOrderList,

    #[error("failed to serialize document content: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write document: {0}")]
    Io(#[from] io::Error),
}

/// Export failures surface to the session as invariant violations: none of
/// them is fatal, and none alters session state.
impl From<ExportError> for DomainError {
    fn from(err: ExportError) -> Self {
        DomainError::invariant(err.to_string())
    }
}

/// Renders a content description into a viewable document.
///
/// Rendering internals (layout, encoding, presentation) are the
/// implementor's concern; callers treat the call as fire-and-forget and
/// never feed a render result back into session state.
pub trait DocumentRenderer {
    fn render(&mut self, content: &DocumentContent) -> Result<(), ExportError>;
}

/// Renderer that serializes the content description as JSON to any writer,
/// the handoff payload a downstream document viewer consumes.
#[derive(Debug)]
pub struct JsonRenderer<W> {
    out: W,
}

impl<W: io::Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: io::Write> DocumentRenderer for JsonRenderer<W> {
    fn render(&mut self, content: &DocumentContent) -> Result<(), ExportError> {
        serde_json::to_writer_pretty(&mut self.out, content)?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        Ok(())
    }
}
