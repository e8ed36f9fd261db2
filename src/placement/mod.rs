//! Visual placement on a virtualized surface
//!
//! A [`Placement`] binds one visual (the caret, or one selection rectangle)
//! to a logical position and keeps it attached to whichever container the
//! surface currently shows for that line. Lines scrolled out of view have no
//! container; the placement then waits until the surface reports
//! [`SurfaceEvent::ContainersGenerated`] and tries again.
//!
//! A visual is attached to at most one container at any time: any stale
//! attachment is removed before a new one is made.

mod headless;
mod surface;

pub use headless::HeadlessSurface;
pub use surface::{
    ContainerId, RenderSurface, SurfaceEvent, SurfaceObserver, VisualGeometry, VisualId,
    VisualKind,
};

use crate::editable::{BufferId, LineHandle, LineId, TextBuffer, TextIndex};
use crate::error::EditError;
use crate::measure::TextMeasurer;

/// Borrowed state a placement needs to compute its geometry
#[derive(Clone, Copy)]
pub struct PlaceContext<'a> {
    pub buffer: &'a TextBuffer,
    pub measurer: &'a dyn TextMeasurer,
}

impl<'a> PlaceContext<'a> {
    pub fn new(buffer: &'a TextBuffer, measurer: &'a dyn TextMeasurer) -> Self {
        Self { buffer, measurer }
    }
}

/// Horizontal size of a visual
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Extent {
    /// Fixed width in pixels (caret)
    Fixed(f32),
    /// From the bound character up to this character on the same line
    UntilCharacter(usize),
}

/// A visual bound to a `(line, character)` position
#[derive(Debug, Clone)]
pub struct Placement {
    visual: VisualId,
    kind: VisualKind,
    /// Buffer whose lines this placement may be bound to
    owner: BufferId,
    line: LineId,
    character: usize,
    extent: Extent,
    placed: bool,
    container: Option<ContainerId>,
}

impl Placement {
    /// Create a detached placement bound to the start of `buffer`
    pub fn new(visual: VisualId, kind: VisualKind, buffer: &TextBuffer, extent: Extent) -> Self {
        // Buffers always hold at least one line
        let line = buffer.lines()[0].id();
        Self {
            visual,
            kind,
            owner: buffer.id(),
            line,
            character: 0,
            extent,
            placed: false,
            container: None,
        }
    }

    pub fn visual(&self) -> VisualId {
        self.visual
    }

    pub fn kind(&self) -> VisualKind {
        self.kind
    }

    pub fn line(&self) -> LineId {
        self.line
    }

    pub fn character(&self) -> usize {
        self.character
    }

    pub fn extent(&self) -> Extent {
        self.extent
    }

    pub fn is_placed(&self) -> bool {
        self.placed
    }

    /// Container the visual is attached to right now
    pub fn container(&self) -> Option<ContainerId> {
        self.container
    }

    /// Logical position, `None` once the bound line has been removed
    pub fn position(&self, buffer: &TextBuffer) -> Option<TextIndex> {
        buffer
            .ordinal(self.line)
            .map(|line| TextIndex::new(line, self.character))
    }

    /// Bind to another line of the owning buffer without re-placing
    pub fn set_line(&mut self, handle: LineHandle) -> Result<(), EditError> {
        if handle.buffer != self.owner {
            return Err(EditError::IdentityMismatch {
                expected: self.owner,
                found: handle.buffer,
            });
        }
        self.line = handle.line;
        Ok(())
    }

    pub fn set_extent(&mut self, extent: Extent) {
        self.extent = extent;
    }

    /// Bind to `index` and re-place
    pub fn set_position(
        &mut self,
        ctx: PlaceContext<'_>,
        surface: &mut dyn RenderSurface,
        index: TextIndex,
    ) -> Result<(), EditError> {
        let handle = ctx.buffer.handle(index.line).ok_or(EditError::LineOutOfRange {
            line: index.line,
            line_count: ctx.buffer.line_count(),
        })?;
        let line_len = ctx.buffer.line_len(index.line);
        if index.character > line_len {
            return Err(EditError::CharacterOutOfRange {
                line: index.line,
                character: index.character,
                line_len,
            });
        }
        self.set_line(handle)?;
        self.character = index.character;
        self.place(ctx, surface);
        Ok(())
    }

    /// Switch between placed and detached. Detaching keeps the visual alive
    /// for reuse.
    pub fn set_placed(
        &mut self,
        ctx: PlaceContext<'_>,
        surface: &mut dyn RenderSurface,
        placed: bool,
    ) {
        self.placed = placed;
        if placed {
            self.place(ctx, surface);
        } else {
            self.detach(surface);
        }
    }

    /// Reconcile the visual with the surface.
    ///
    /// Does nothing more than drop a stale attachment when the placement is
    /// detached or its line has no container.
    pub fn place(&mut self, ctx: PlaceContext<'_>, surface: &mut dyn RenderSurface) {
        if !self.placed {
            return;
        }

        let Some(line) = ctx.buffer.line_by_id(self.line) else {
            tracing::trace!(visual = %self.visual, "bound line removed");
            self.detach(surface);
            return;
        };
        let Some(container) = surface.container_for(self.line) else {
            self.detach(surface);
            return;
        };

        let character = self.character.min(line.len());
        let x = ctx.measurer.measure(line.prefix(character), true);
        let width = match self.extent {
            Extent::Fixed(width) => width,
            Extent::UntilCharacter(end) => {
                let end = end.clamp(character, line.len());
                ctx.measurer.measure(line.prefix(end), true) - x
            }
        };

        if let Some(previous) = self.container.filter(|&c| c != container) {
            surface.detach(previous, self.visual);
        }
        surface.attach(container, self.visual, self.kind, VisualGeometry { x, width });
        self.container = Some(container);
    }

    /// Rebind to the start of the document and re-place (items reset)
    pub fn reset(&mut self, ctx: PlaceContext<'_>, surface: &mut dyn RenderSurface) {
        if let Some(container) = self.container.take() {
            surface.detach(container, self.visual);
        }
        if let Some(handle) = ctx.buffer.handle(0) {
            self.line = handle.line;
        }
        self.character = 0;
        self.place(ctx, surface);
    }

    /// Remove the visual from its container, keeping `placed` unchanged
    pub fn detach(&mut self, surface: &mut dyn RenderSurface) {
        if let Some(container) = self.container.take() {
            surface.detach(container, self.visual);
        }
    }
}
