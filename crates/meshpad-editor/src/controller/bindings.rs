//! Input chord → action table.
//!
//! Only the *dominant* modifier takes part in a lookup (Shift over Ctrl over
//! Alt; Meta is ignored), so every chord resolves to at most one action.

use std::collections::HashMap;

use meshpad_engine::input::{Key, Modifiers, MouseButton};

use crate::ops::OperationKind;

/// The input that starts a gesture.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Trigger {
    Button(MouseButton),
    Key(Key),
}

/// Dominant modifier of a chord.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ModifierChord {
    None,
    Shift,
    Ctrl,
    Alt,
}

impl ModifierChord {
    pub fn dominant(modifiers: Modifiers) -> Self {
        if modifiers.shift {
            ModifierChord::Shift
        } else if modifiers.ctrl {
            ModifierChord::Ctrl
        } else if modifiers.alt {
            ModifierChord::Alt
        } else {
            ModifierChord::None
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Chord {
    pub trigger: Trigger,
    pub modifiers: ModifierChord,
}

impl Chord {
    pub const fn button(button: MouseButton, modifiers: ModifierChord) -> Self {
        Self { trigger: Trigger::Button(button), modifiers }
    }

    pub const fn key(key: Key, modifiers: ModifierChord) -> Self {
        Self { trigger: Trigger::Key(key), modifiers }
    }
}

/// What a bound chord does.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Action {
    Operation(OperationKind),
    /// Recognised but not implemented; consumed without effect.
    Reserved(&'static str),
}

#[derive(Debug, Clone)]
pub struct Bindings {
    table: HashMap<Chord, Action>,
}

impl Bindings {
    pub fn empty() -> Self {
        Self { table: HashMap::new() }
    }

    /// Binds `chord`, returning the action it replaced.
    pub fn bind(&mut self, chord: Chord, action: Action) -> Option<Action> {
        self.table.insert(chord, action)
    }

    pub fn unbind(&mut self, chord: Chord) -> Option<Action> {
        self.table.remove(&chord)
    }

    pub fn resolve(&self, trigger: Trigger, modifiers: Modifiers) -> Option<Action> {
        let chord = Chord { trigger, modifiers: ModifierChord::dominant(modifiers) };
        self.table.get(&chord).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Chord, &Action)> {
        self.table.iter()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl Default for Bindings {
    fn default() -> Self {
        use ModifierChord as M;

        let mut b = Self::empty();
        b.bind(Chord::button(MouseButton::Left, M::None), Action::Operation(OperationKind::Drag));
        b.bind(Chord::button(MouseButton::Left, M::Ctrl), Action::Operation(OperationKind::Select));
        b.bind(Chord::button(MouseButton::Middle, M::None), Action::Operation(OperationKind::Pan));
        b.bind(Chord::button(MouseButton::Middle, M::Alt), Action::Operation(OperationKind::Pan));
        b.bind(Chord::key(Key::E, M::None), Action::Operation(OperationKind::Extrude));

        b.bind(Chord::button(MouseButton::Right, M::None), Action::Reserved("context"));
        b.bind(Chord::button(MouseButton::Left, M::Alt), Action::Reserved("rotate"));
        b.bind(Chord::button(MouseButton::Right, M::Alt), Action::Reserved("dolly"));
        b.bind(Chord::key(Key::Delete, M::None), Action::Reserved("delete"));
        b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mods(shift: bool, ctrl: bool, alt: bool, meta: bool) -> Modifiers {
        Modifiers { shift, ctrl, alt, meta }
    }

    // ── dominant modifier ─────────────────────────────────────────────────

    #[test]
    fn dominant_priority() {
        assert_eq!(ModifierChord::dominant(mods(false, false, false, false)), ModifierChord::None);
        assert_eq!(ModifierChord::dominant(mods(false, false, false, true)), ModifierChord::None);
        assert_eq!(ModifierChord::dominant(mods(false, false, true, false)), ModifierChord::Alt);
        assert_eq!(ModifierChord::dominant(mods(false, true, true, false)), ModifierChord::Ctrl);
        assert_eq!(ModifierChord::dominant(mods(true, true, true, true)), ModifierChord::Shift);
    }

    // ── default table ─────────────────────────────────────────────────────

    #[test]
    fn default_operations() {
        let b = Bindings::default();
        let left = Trigger::Button(MouseButton::Left);

        assert_eq!(
            b.resolve(left, Modifiers::default()),
            Some(Action::Operation(OperationKind::Drag))
        );
        assert_eq!(
            b.resolve(left, mods(false, true, false, false)),
            Some(Action::Operation(OperationKind::Select))
        );
        // Ctrl+Alt collapses to Ctrl.
        assert_eq!(
            b.resolve(left, mods(false, true, true, false)),
            Some(Action::Operation(OperationKind::Select))
        );
        assert_eq!(
            b.resolve(Trigger::Button(MouseButton::Middle), mods(false, false, true, false)),
            Some(Action::Operation(OperationKind::Pan))
        );
        assert_eq!(
            b.resolve(Trigger::Key(Key::E), Modifiers::default()),
            Some(Action::Operation(OperationKind::Extrude))
        );
    }

    #[test]
    fn unbound_chords_resolve_to_nothing() {
        let b = Bindings::default();
        assert_eq!(b.resolve(Trigger::Button(MouseButton::Left), mods(true, false, false, false)), None);
        assert_eq!(b.resolve(Trigger::Key(Key::E), mods(false, true, false, false)), None);
        assert_eq!(b.resolve(Trigger::Button(MouseButton::Back), Modifiers::default()), None);
    }

    #[test]
    fn reserved_chords() {
        let b = Bindings::default();
        assert_eq!(
            b.resolve(Trigger::Button(MouseButton::Left), mods(false, false, true, false)),
            Some(Action::Reserved("rotate"))
        );
        assert!(matches!(
            b.resolve(Trigger::Key(Key::Delete), Modifiers::default()),
            Some(Action::Reserved(_))
        ));
        assert_eq!(b.len(), 9);
    }

    #[test]
    fn rebinding_replaces() {
        let mut b = Bindings::default();
        let chord = Chord::key(Key::E, ModifierChord::None);
        assert_eq!(
            b.bind(chord, Action::Operation(OperationKind::Select)),
            Some(Action::Operation(OperationKind::Extrude))
        );
        assert_eq!(b.unbind(chord), Some(Action::Operation(OperationKind::Select)));
        assert_eq!(b.resolve(Trigger::Key(Key::E), Modifiers::default()), None);
    }
}
