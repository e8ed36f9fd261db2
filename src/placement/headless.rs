//! In-memory virtualized surface
//!
//! Keeps a scrolling window of `visible_rows` lines materialized. Scrolling
//! destroys the containers of lines that leave the window (together with any
//! visuals attached to them) and creates fresh containers for lines that
//! enter it, the way a virtualizing list control recycles its rows.

use std::collections::{HashMap, HashSet};
use std::ops::Range;

use super::surface::{
    ContainerId, RenderSurface, SurfaceEvent, VisualGeometry, VisualId, VisualKind,
};
use crate::editable::{LineId, TextBuffer};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Attached {
    kind: VisualKind,
    geometry: VisualGeometry,
}

#[derive(Debug, Default)]
struct Container {
    line: Option<LineId>,
    visuals: HashMap<VisualId, Attached>,
}

/// Headless rendering surface used by the CLI and tests
#[derive(Debug)]
pub struct HeadlessSurface {
    /// First visible line (ordinal)
    top_line: usize,
    /// Number of lines kept materialized
    visible_rows: usize,
    containers: HashMap<ContainerId, Container>,
    by_line: HashMap<LineId, ContainerId>,
    hidden: HashSet<VisualId>,
    events: Vec<SurfaceEvent>,
    next_container: u64,
    /// A scroll happened that `realize` has not applied yet
    dirty: bool,
}

impl HeadlessSurface {
    pub fn new(visible_rows: usize) -> Self {
        Self {
            top_line: 0,
            visible_rows: visible_rows.max(1),
            containers: HashMap::new(),
            by_line: HashMap::new(),
            hidden: HashSet::new(),
            events: Vec::new(),
            next_container: 1,
            dirty: true,
        }
    }

    pub fn top_line(&self) -> usize {
        self.top_line
    }

    pub fn visible_rows(&self) -> usize {
        self.visible_rows
    }

    /// Ordinals of the lines in the window (not clamped to the buffer)
    pub fn visible_range(&self) -> Range<usize> {
        self.top_line..self.top_line + self.visible_rows
    }

    /// True if a scroll is waiting for [`realize`](Self::realize)
    pub fn needs_realize(&self) -> bool {
        self.dirty
    }

    /// Move the window so it starts at `line`
    pub fn scroll_to(&mut self, line: usize) {
        if self.top_line != line {
            self.top_line = line;
            self.dirty = true;
        }
    }

    /// Materialize containers for the window over `buffer`.
    ///
    /// Lines still in the window keep their containers; containers of lines
    /// that left the window (or were removed from the buffer) are destroyed.
    /// Queues [`SurfaceEvent::ContainersGenerated`].
    pub fn realize(&mut self, buffer: &TextBuffer) {
        let max_top = buffer.line_count().saturating_sub(self.visible_rows);
        self.top_line = self.top_line.min(max_top);

        let wanted: Vec<LineId> = buffer
            .lines()
            .iter()
            .skip(self.top_line)
            .take(self.visible_rows)
            .map(|line| line.id())
            .collect();

        let stale: Vec<LineId> = self
            .by_line
            .keys()
            .filter(|id| !wanted.contains(id))
            .copied()
            .collect();
        for line in stale {
            if let Some(container) = self.by_line.remove(&line) {
                self.containers.remove(&container);
            }
        }

        let mut created = 0;
        for line in wanted {
            if self.by_line.contains_key(&line) {
                continue;
            }
            let id = ContainerId(self.next_container);
            self.next_container += 1;
            self.containers.insert(
                id,
                Container {
                    line: Some(line),
                    visuals: HashMap::new(),
                },
            );
            self.by_line.insert(line, id);
            created += 1;
        }

        tracing::trace!(
            top = self.top_line,
            live = self.containers.len(),
            created,
            "containers generated"
        );
        self.dirty = false;
        self.events.push(SurfaceEvent::ContainersGenerated);
    }

    /// Discard every container. Queues [`SurfaceEvent::ItemsReset`].
    pub fn reset(&mut self) {
        self.containers.clear();
        self.by_line.clear();
        self.top_line = 0;
        self.dirty = true;
        self.events.push(SurfaceEvent::ItemsReset);
    }

    /// Drain queued notifications
    pub fn take_events(&mut self) -> Vec<SurfaceEvent> {
        std::mem::take(&mut self.events)
    }

    /// Number of live containers
    pub fn container_count(&self) -> usize {
        self.containers.len()
    }

    /// Line a container shows
    pub fn line_of(&self, container: ContainerId) -> Option<LineId> {
        self.containers.get(&container).and_then(|c| c.line)
    }

    /// Number of containers a visual is attached to
    pub fn containers_holding(&self, visual: VisualId) -> usize {
        self.containers
            .values()
            .filter(|c| c.visuals.contains_key(&visual))
            .count()
    }

    /// Container a visual is attached to
    pub fn container_of(&self, visual: VisualId) -> Option<ContainerId> {
        self.containers
            .iter()
            .find(|(_, c)| c.visuals.contains_key(&visual))
            .map(|(id, _)| *id)
    }

    pub fn geometry_of(&self, visual: VisualId) -> Option<VisualGeometry> {
        self.containers
            .values()
            .find_map(|c| c.visuals.get(&visual))
            .map(|a| a.geometry)
    }

    /// Attached visuals of one kind across all containers
    pub fn attached_count(&self, kind: VisualKind) -> usize {
        self.containers
            .values()
            .flat_map(|c| c.visuals.values())
            .filter(|a| a.kind == kind)
            .count()
    }

    pub fn is_visible(&self, visual: VisualId) -> bool {
        !self.hidden.contains(&visual)
    }
}

impl RenderSurface for HeadlessSurface {
    fn container_for(&self, line: LineId) -> Option<ContainerId> {
        self.by_line.get(&line).copied()
    }

    fn attach(
        &mut self,
        container: ContainerId,
        visual: VisualId,
        kind: VisualKind,
        geometry: VisualGeometry,
    ) {
        match self.containers.get_mut(&container) {
            Some(c) => {
                c.visuals.insert(visual, Attached { kind, geometry });
            }
            None => tracing::warn!(%container, %visual, "attach to unknown container"),
        }
    }

    fn detach(&mut self, container: ContainerId, visual: VisualId) {
        if let Some(c) = self.containers.get_mut(&container) {
            c.visuals.remove(&visual);
        }
    }

    fn set_visible(&mut self, visual: VisualId, visible: bool) {
        if visible {
            self.hidden.remove(&visual);
        } else {
            self.hidden.insert(visual);
        }
    }

    fn scroll_into_view(&mut self, line: usize) {
        if line < self.top_line {
            self.scroll_to(line);
        } else if line >= self.top_line + self.visible_rows {
            self.scroll_to(line + 1 - self.visible_rows);
        }
    }
}
