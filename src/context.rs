use crate::error::Span;

/// Handle into an evaluator-owned [`Frames`] table.
///
/// Values and diagnostics hold this index instead of a reference so that
/// any number of them can point at the same execution frame without
/// owning it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextId(usize);

/// One execution frame: a display name plus optional linkage to the
/// frame that entered it.
#[derive(Debug, Clone)]
pub struct Frame {
    pub display_name: String,
    pub parent: Option<ContextId>,
    pub entry_span: Option<Span>,
}

/// Table of execution frames, owned by the evaluator.
///
/// Frames are only ever appended, so a `ContextId` stays valid for the
/// lifetime of the table. This crate reads frames when rendering
/// diagnostics and never mutates them.
#[derive(Debug, Default)]
pub struct Frames {
    frames: Vec<Frame>,
}

impl Frames {
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// Appends a frame and returns its handle. A parent handle must come
    /// from an earlier `push` on this table.
    pub fn push(
        &mut self,
        display_name: impl Into<String>,
        parent: Option<ContextId>,
        entry_span: Option<Span>,
    ) -> ContextId {
        let id = ContextId(self.frames.len());
        self.frames.push(Frame {
            display_name: display_name.into(),
            parent,
            entry_span,
        });
        id
    }

    pub fn get(&self, id: ContextId) -> Option<&Frame> {
        self.frames.get(id.0)
    }

    /// Renders the frame chain outermost-first, e.g. `<program> -> double`.
    pub fn traceback(&self, id: ContextId) -> String {
        let mut names = Vec::new();
        let mut current = Some(id);
        while let Some(frame) = current.and_then(|id| self.get(id)) {
            names.push(frame.display_name.as_str());
            current = frame.parent;
        }
        names.reverse();
        names.join(" -> ")
    }
}
