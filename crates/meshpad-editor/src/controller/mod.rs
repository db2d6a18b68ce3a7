//! Operation controller.
//!
//! Two states: idle (`current == None`) or exactly one operation active.
//! While idle, presses and key-downs are looked up in [`Bindings`]; the
//! matched operation is triggered and, if it reports itself active, takes all
//! pointer motion and the next release. Single-shot operations and operations
//! that decline to start leave the controller idle.

mod bindings;

pub use bindings::{Action, Bindings, Chord, ModifierChord, Trigger};

use meshpad_engine::coords::Vec2;
use meshpad_engine::input::{InputEvent, Key, KeyState, Modifiers, PointerButtonEvent};

use crate::config::EditorConfig;
use crate::document::Document;
use crate::ops::{
    DragOperation, ExtrudeOperation, OpState, Operation, OperationKind, PanOperation,
    SelectOperation,
};

pub struct Controller {
    bindings: Bindings,
    current: Option<OperationKind>,
    /// Last known pointer position (logical px); key-triggered operations use it.
    pointer: Option<Vec2>,

    pan: PanOperation,
    drag: DragOperation,
    select: SelectOperation,
    extrude: ExtrudeOperation,
}

impl Controller {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            bindings: config.bindings.clone(),
            current: None,
            pointer: None,
            pan: PanOperation::default(),
            drag: DragOperation::new(config.pick_radius),
            select: SelectOperation::new(config.pick_radius),
            extrude: ExtrudeOperation,
        }
    }

    /// The active operation, if any.
    #[inline]
    pub fn current(&self) -> Option<OperationKind> {
        self.current
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.current.is_none()
    }

    #[inline]
    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    /// Feeds one input event through the state machine.
    pub fn handle_event(&mut self, doc: &mut Document, event: &InputEvent) {
        match event {
            InputEvent::PointerMoved(ev) => {
                let pos = ev.position();
                self.pointer = Some(pos);
                if let Some(kind) = self.current {
                    self.operation(kind).on_move(doc, pos);
                }
            }

            InputEvent::PointerButton(ev) => {
                self.pointer = Some(ev.position());
                if ev.is_press() {
                    self.on_press(doc, ev);
                } else {
                    self.release(doc, ev.position());
                }
            }

            InputEvent::Key { key, state, modifiers, repeat, .. } => {
                self.on_key(doc, *key, *state, *modifiers, *repeat);
            }

            InputEvent::Focused(false) => {
                // The matching release may go to another window.
                self.release(doc, self.pointer.unwrap_or_default());
            }

            InputEvent::ModifiersChanged(_) | InputEvent::PointerLeft | InputEvent::Focused(true) => {}
        }
    }

    fn on_press(&mut self, doc: &mut Document, ev: &PointerButtonEvent) {
        if let Some(kind) = self.current {
            log::trace!("{:?} press ignored while {kind} is active", ev.button);
            return;
        }
        self.dispatch(doc, Trigger::Button(ev.button), ev.modifiers, ev.position());
    }

    fn on_key(&mut self, doc: &mut Document, key: Key, state: KeyState, modifiers: Modifiers, repeat: bool) {
        if let Some(kind) = self.current {
            if self.operation(kind).on_key(doc, key, state) == OpState::Inactive {
                log::debug!("{kind} ended by key {key}");
                self.current = None;
            }
            return;
        }

        if state != KeyState::Pressed || repeat {
            return;
        }
        let Some(pointer) = self.pointer else {
            log::trace!("key {key} ignored: pointer position unknown");
            return;
        };
        self.dispatch(doc, Trigger::Key(key), modifiers, pointer);
    }

    fn dispatch(&mut self, doc: &mut Document, trigger: Trigger, modifiers: Modifiers, pointer: Vec2) {
        match self.bindings.resolve(trigger, modifiers) {
            Some(Action::Operation(kind)) => {
                if self.operation(kind).trigger(doc, pointer) == OpState::Active {
                    log::debug!("{kind} started");
                    self.current = Some(kind);
                }
            }
            Some(Action::Reserved(name)) => {
                log::debug!("{trigger:?} bound to reserved action `{name}`; ignored");
            }
            None => log::trace!("{trigger:?} with {modifiers:?} is unbound"),
        }
    }

    fn release(&mut self, doc: &mut Document, pointer: Vec2) {
        let Some(kind) = self.current else { return };
        if self.operation(kind).on_release(doc, pointer) == OpState::Inactive {
            log::debug!("{kind} finished");
            self.current = None;
        }
    }

    fn operation(&mut self, kind: OperationKind) -> &mut dyn Operation {
        match kind {
            OperationKind::Pan => &mut self.pan,
            OperationKind::Drag => &mut self.drag,
            OperationKind::Select => &mut self.select,
            OperationKind::Extrude => &mut self.extrude,
        }
    }
}
