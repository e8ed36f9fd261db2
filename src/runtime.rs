//! Single coordinating thread
//!
//! The runtime owns the editor, a headless surface and a clipboard, and
//! services one serialized message queue. Other threads (the blink timer,
//! or a host's input thread) only ever send [`Msg`]s through
//! [`Runtime::sender`].

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::Duration;

use anyhow::Result;

use crate::blink::BlinkTimer;
use crate::clipboard::Clipboard;
use crate::commands::Cmd;
use crate::editor::Editor;
use crate::keymap::{default_bindings, keystroke_to_msgs, Keymap, Keystroke};
use crate::messages::Msg;
use crate::placement::{HeadlessSurface, RenderSurface};
use crate::update::{update, Env};

pub struct Runtime {
    editor: Editor,
    surface: HeadlessSurface,
    clipboard: Box<dyn Clipboard>,
    keymap: Keymap,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
    blink: Option<BlinkTimer>,
    redraws: usize,
}

impl Runtime {
    /// Mount `editor` on `surface` and place its visuals
    pub fn new(editor: Editor, surface: HeadlessSurface, clipboard: Box<dyn Clipboard>) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        let mut runtime = Self {
            editor,
            surface,
            clipboard,
            keymap: Keymap::with_bindings(default_bindings()),
            msg_tx,
            msg_rx,
            blink: None,
            redraws: 0,
        };
        runtime.surface.realize(runtime.editor.buffer());
        runtime.editor.sync_placements(&mut runtime.surface);
        runtime.flush_surface_events();
        runtime
    }

    /// Replace the default bindings
    pub fn with_keymap(mut self, keymap: Keymap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Start the caret blink timer
    pub fn start_blink(&mut self, interval: Duration) -> Result<()> {
        self.blink = Some(BlinkTimer::spawn(interval, self.msg_tx.clone())?);
        Ok(())
    }

    /// Period of the running blink timer, if any
    pub fn blink_interval(&self) -> Option<Duration> {
        self.blink.as_ref().map(BlinkTimer::interval)
    }

    pub fn stop_blink(&mut self) {
        if let Some(mut blink) = self.blink.take() {
            blink.stop();
        }
    }

    /// Handle for posting messages from other threads
    pub fn sender(&self) -> Sender<Msg> {
        self.msg_tx.clone()
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn surface(&self) -> &HeadlessSurface {
        &self.surface
    }

    pub fn clipboard(&self) -> &dyn Clipboard {
        self.clipboard.as_ref()
    }

    /// Number of redraws requested so far
    pub fn redraw_count(&self) -> usize {
        self.redraws
    }

    /// Apply one message immediately
    pub fn dispatch(&mut self, msg: Msg) {
        let line_count = self.editor.buffer().line_count();
        let cmd = {
            let mut env = Env::new(self.clipboard.as_mut(), &mut self.surface);
            update(&mut self.editor, &mut env, msg)
        };
        if let Some(cmd) = cmd {
            self.process_cmd(cmd);
        }

        // Scrolled, or lines were added or removed under the window
        if self.surface.needs_realize() || self.editor.buffer().line_count() != line_count {
            self.surface.realize(self.editor.buffer());
        }
        self.flush_surface_events();
    }

    /// Translate a keystroke through the keymap and dispatch the result
    pub fn handle_key(&mut self, keystroke: Keystroke) {
        let msgs = keystroke_to_msgs(&self.keymap, &keystroke);
        if msgs.is_empty() {
            tracing::trace!(%keystroke, "unbound keystroke");
        }
        for msg in msgs {
            self.dispatch(msg);
        }
    }

    /// Dispatch every queued message; returns how many were handled
    pub fn pump(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.dispatch(msg);
            handled += 1;
        }
        handled
    }

    /// Wait up to `timeout` for one queued message and dispatch it
    pub fn pump_one(&mut self, timeout: Duration) -> bool {
        match self.msg_rx.recv_timeout(timeout) {
            Ok(msg) => {
                self.dispatch(msg);
                true
            }
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => false,
        }
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None => {}
            Cmd::Redraw => self.redraws += 1,
            Cmd::ResetBlink => {
                if let Some(blink) = &self.blink {
                    blink.reset();
                }
            }
            Cmd::ScrollIntoView(line) => self.surface.scroll_into_view(line),
            Cmd::ResetSurface => {
                self.surface.reset();
                self.surface.realize(self.editor.buffer());
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
        }
    }

    /// Deliver queued surface notifications back through `update`
    fn flush_surface_events(&mut self) {
        loop {
            let events = self.surface.take_events();
            if events.is_empty() {
                break;
            }
            for event in events {
                tracing::trace!(?event, "surface event");
                let cmd = {
                    let mut env = Env::new(self.clipboard.as_mut(), &mut self.surface);
                    update(&mut self.editor, &mut env, Msg::Surface(event))
                };
                if let Some(cmd) = cmd {
                    self.process_cmd(cmd);
                }
            }
        }
    }
}

impl Drop for Runtime {
    fn drop(&mut self) {
        self.stop_blink();
    }
}
