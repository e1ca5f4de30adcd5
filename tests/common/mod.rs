//! Test doubles for the engine's collaborators.
//!
//! Each fake hands out a cheap clonable handle so a test can keep poking at
//! it after the fake itself has been moved into the controller.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Weak;

use dockpin::engine::{DisplayLayout, PermissionProbe};
use dockpin::interceptor::{EventTap, TapContext, TapEvent, TapVerdict};
use dockpin::model::{DisplayId, DisplayInfo, Rect, ScreenLayout};
use dockpin::{EngineController, EngineError, MemoryStore};

pub const A: DisplayId = DisplayId(1);
pub const B: DisplayId = DisplayId(2);
pub const C: DisplayId = DisplayId(3);

/// Display with a bottom gap of `dock_gap` points between frame and visible frame.
pub fn display(id: DisplayId, frame: Rect, dock_gap: f64) -> DisplayInfo {
    DisplayInfo {
        id,
        frame,
        visible_frame: Rect::new(
            frame.x,
            frame.y + dock_gap,
            frame.width,
            frame.height - dock_gap - 25.0,
        ),
    }
}

/// A: 1920x1080 primary hosting the Dock. B: 2560x1440 to its right,
/// bottom-aligned.
pub fn two_displays() -> ScreenLayout {
    ScreenLayout {
        displays: vec![
            display(A, Rect::new(0.0, 0.0, 1920.0, 1080.0), 70.0),
            display(B, Rect::new(1920.0, 0.0, 2560.0, 1440.0), 0.0),
        ],
        primary_height: 1080.0,
    }
}

/// B and C connected, Dock on C only if `dock_on_c`.
pub fn b_and_c(dock_on_c: bool) -> ScreenLayout {
    ScreenLayout {
        displays: vec![
            display(B, Rect::new(0.0, 0.0, 2560.0, 1440.0), 0.0),
            display(
                C,
                Rect::new(2560.0, 0.0, 1920.0, 1080.0),
                if dock_on_c { 70.0 } else { 0.0 },
            ),
        ],
        primary_height: 1440.0,
    }
}

#[derive(Clone, Default)]
pub struct FakeLayout(pub Rc<RefCell<ScreenLayout>>);

impl FakeLayout {
    pub fn new(layout: ScreenLayout) -> Self {
        Self(Rc::new(RefCell::new(layout)))
    }

    pub fn set(&self, layout: ScreenLayout) {
        *self.0.borrow_mut() = layout;
    }
}

impl DisplayLayout for FakeLayout {
    fn current(&self) -> ScreenLayout {
        self.0.borrow().clone()
    }
}

/// Observable side of a [`FakeTap`].
#[derive(Default)]
pub struct TapProbe {
    pub deny: Cell<bool>,
    pub installed: Cell<bool>,
    pub installs: Cell<usize>,
    pub removes: Cell<usize>,
    pub reenables: Cell<usize>,
    context: RefCell<Option<Weak<TapContext>>>,
}

impl TapProbe {
    /// Deliver an event the way the OS callback would.
    pub fn deliver(&self, event: TapEvent) -> Option<TapVerdict> {
        let context = self.context.borrow().as_ref()?.upgrade()?;
        Some(context.handle(event))
    }
}

#[derive(Clone, Default)]
pub struct FakeTap(pub Rc<TapProbe>);

impl EventTap for FakeTap {
    fn install(&mut self, context: Weak<TapContext>) -> Result<(), EngineError> {
        if self.0.deny.get() {
            return Err(EngineError::PermissionDenied);
        }
        *self.0.context.borrow_mut() = Some(context);
        self.0.installed.set(true);
        self.0.installs.set(self.0.installs.get() + 1);
        Ok(())
    }

    fn remove(&mut self) {
        if self.0.installed.replace(false) {
            self.0.removes.set(self.0.removes.get() + 1);
        }
    }

    fn reenable(&mut self) {
        if self.0.installed.get() {
            self.0.reenables.set(self.0.reenables.get() + 1);
        }
    }

    fn is_installed(&self) -> bool {
        self.0.installed.get()
    }
}

#[derive(Clone, Default)]
pub struct FakePermission {
    pub granted: Rc<Cell<bool>>,
    pub requests: Rc<Cell<usize>>,
}

impl PermissionProbe for FakePermission {
    fn is_granted(&self) -> bool {
        self.granted.get()
    }

    fn request(&self) -> bool {
        self.requests.set(self.requests.get() + 1);
        self.granted.get()
    }
}

pub type TestEngine = EngineController<MemoryStore, FakeLayout, FakeTap, FakePermission>;

/// Engine plus handles to every fake it owns.
pub struct Harness {
    pub engine: TestEngine,
    pub layout: FakeLayout,
    pub tap: Rc<TapProbe>,
    pub permission: FakePermission,
}

impl Harness {
    pub fn new(layout: ScreenLayout) -> Self {
        Self::with_store(MemoryStore::new(), layout)
    }

    pub fn with_store(store: MemoryStore, layout: ScreenLayout) -> Self {
        let layout = FakeLayout::new(layout);
        let tap = FakeTap::default();
        let permission = FakePermission::default();
        let probe = Rc::clone(&tap.0);
        let engine = EngineController::new(store, layout.clone(), tap, permission.clone());
        Self {
            engine,
            layout,
            tap: probe,
            permission,
        }
    }
}
