//! Rendering surface contract
//!
//! The surface owns row containers for the lines it currently shows and
//! creates or destroys them as it scrolls. The engine only ever asks for a
//! line's container and attaches visuals to it.

use std::fmt;

use crate::editable::LineId;

/// Row container materialized by a surface for one visible line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContainerId(pub u64);

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "container {}", self.0)
    }
}

/// Handle of a caret or selection visual
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VisualId(pub u64);

impl fmt::Display for VisualId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "visual {}", self.0)
    }
}

/// What a visual draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisualKind {
    Caret,
    Selection,
}

/// Horizontal placement of a visual inside its container, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VisualGeometry {
    pub x: f32,
    pub width: f32,
}

/// Layout notifications a surface raises
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// Visible rows finished materializing; containers may be new
    ContainersGenerated,
    /// Every container was discarded
    ItemsReset,
}

/// A virtualized surface that materializes containers for visible lines only
pub trait RenderSurface {
    /// Container currently showing `line`, if the line is materialized
    fn container_for(&self, line: LineId) -> Option<ContainerId>;

    /// Attach a visual to a container, or move it within the container it is
    /// already attached to
    fn attach(
        &mut self,
        container: ContainerId,
        visual: VisualId,
        kind: VisualKind,
        geometry: VisualGeometry,
    );

    /// Remove a visual from a container. Unknown containers are ignored.
    fn detach(&mut self, container: ContainerId, visual: VisualId);

    /// Show or hide a visual without detaching it
    fn set_visible(&mut self, visual: VisualId, visible: bool);

    /// Scroll until the line at `line` (ordinal) is materialized
    fn scroll_into_view(&mut self, line: usize);
}

/// Callbacks the surface's host invokes when layout notifications arrive
pub trait SurfaceObserver {
    fn containers_generated(&mut self, surface: &mut dyn RenderSurface);

    fn items_reset(&mut self, surface: &mut dyn RenderSurface);

    /// Route a queued event to the matching callback
    fn on_surface_event(&mut self, event: SurfaceEvent, surface: &mut dyn RenderSurface) {
        match event {
            SurfaceEvent::ContainersGenerated => self.containers_generated(surface),
            SurfaceEvent::ItemsReset => self.items_reset(surface),
        }
    }
}
