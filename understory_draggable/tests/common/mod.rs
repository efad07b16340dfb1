// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A recording [`DragHost`] for integration tests.

#![allow(
    missing_docs,
    unreachable_pub,
    dead_code,
    reason = "Integration-test helper module; not part of the public API."
)]

use std::collections::HashMap;

use kurbo::{Rect, Vec2};
use understory_draggable::position::{parse_pixels, parse_translation};
use understory_draggable::{
    ControllerId, DragHost, DragRegistry, Listener, ListenerKind, PointerEvent, StyleProperty,
    Surface,
};

/// The root container every test element hangs off.
pub const ROOT: u32 = 0;

/// A tiny document: elements with a layout box, a parent, and inline style.
///
/// An element's bounding box is its layout box shifted by `left`/`top` and by
/// the translation in `transform`, so writes made by a controller show up in
/// the next bounds query like they would in a browser.
#[derive(Debug, Default)]
pub struct Page {
    layout: HashMap<u32, Rect>,
    parents: HashMap<u32, u32>,
    styles: HashMap<(u32, StyleProperty), String>,
    attributes: HashMap<(u32, String), String>,
    pub listeners: Vec<(Surface<u32>, Listener)>,
    pub added: Vec<(Surface<u32>, Listener)>,
    pub removed: Vec<(Surface<u32>, Listener)>,
    pub frames: Vec<ControllerId>,
}

impl Page {
    /// A page whose root covers `(0, 0)..(200, 200)`.
    pub fn new() -> Self {
        let mut page = Self::default();
        page.layout.insert(ROOT, Rect::new(0.0, 0.0, 200.0, 200.0));
        page
    }

    /// Adds `id` under `parent` with the given layout box.
    pub fn add(&mut self, id: u32, parent: u32, layout: Rect) -> &mut Self {
        self.layout.insert(id, layout);
        self.parents.insert(id, parent);
        self
    }

    /// Replaces an element's layout box.
    pub fn relayout(&mut self, id: u32, layout: Rect) {
        self.layout.insert(id, layout);
    }

    pub fn bounding_rect_of(&self, id: u32) -> Rect {
        self.bounding_rect(&id)
    }

    pub fn style(&self, id: u32, property: StyleProperty) -> Option<&str> {
        self.styles.get(&(id, property)).map(String::as_str)
    }

    pub fn set_inline(&mut self, id: u32, property: StyleProperty, value: &str) {
        self.styles.insert((id, property), value.to_owned());
    }

    pub fn attribute(&self, id: u32, name: &str) -> Option<&str> {
        self.attributes
            .get(&(id, name.to_owned()))
            .map(String::as_str)
    }

    /// How many listeners of `kind` for `controller` are attached.
    pub fn attached(&self, controller: ControllerId, kind: ListenerKind) -> usize {
        self.listeners
            .iter()
            .filter(|(_, l)| l.controller == controller && l.kind == kind)
            .count()
    }

    /// The surface the listener of `kind` is attached to, if any.
    pub fn surface_of(&self, controller: ControllerId, kind: ListenerKind) -> Option<Surface<u32>> {
        self.listeners
            .iter()
            .find(|(_, l)| l.controller == controller && l.kind == kind)
            .map(|(s, _)| s.clone())
    }

    /// Delivers `event` to the attached listener of `kind`, the way a browser
    /// would: nothing happens if no such listener is attached.
    pub fn fire(
        &mut self,
        registry: &mut DragRegistry<u32>,
        controller: ControllerId,
        kind: ListenerKind,
        event: PointerEvent,
    ) -> bool {
        let Some(listener) = self
            .listeners
            .iter()
            .find(|(_, l)| l.controller == controller && l.kind == kind)
            .map(|(_, l)| *l)
        else {
            return false;
        };
        registry
            .dispatch(self, listener, &event)
            .expect("attached listeners belong to live controllers")
    }

    pub fn press(&mut self, registry: &mut DragRegistry<u32>, id: ControllerId, x: f64, y: f64) -> bool {
        self.fire(registry, id, ListenerKind::Press, PointerEvent::new(x, y))
    }

    pub fn move_to(&mut self, registry: &mut DragRegistry<u32>, id: ControllerId, x: f64, y: f64) -> bool {
        self.fire(registry, id, ListenerKind::Move, PointerEvent::new(x, y))
    }

    pub fn release(&mut self, registry: &mut DragRegistry<u32>, id: ControllerId, x: f64, y: f64) -> bool {
        self.fire(registry, id, ListenerKind::Release, PointerEvent::new(x, y))
    }

    pub fn leave(&mut self, registry: &mut DragRegistry<u32>, id: ControllerId, x: f64, y: f64) -> bool {
        self.fire(registry, id, ListenerKind::Leave, PointerEvent::new(x, y))
    }

    /// Runs every requested animation frame.
    pub fn flush_frames(&mut self, registry: &mut DragRegistry<u32>) -> Vec<Option<Vec2>> {
        std::mem::take(&mut self.frames)
            .into_iter()
            .map(|id| {
                registry
                    .run_frame(self, id)
                    .expect("frames are requested by live controllers")
            })
            .collect()
    }

    /// Move, then let the frame run.
    pub fn drag_to(&mut self, registry: &mut DragRegistry<u32>, id: ControllerId, x: f64, y: f64) {
        self.move_to(registry, id, x, y);
        self.flush_frames(registry);
    }
}

impl DragHost for Page {
    type Element = u32;

    fn add_listener(&mut self, surface: &Surface<u32>, listener: Listener) {
        self.listeners.push((surface.clone(), listener));
        self.added.push((surface.clone(), listener));
    }

    fn remove_listener(&mut self, surface: &Surface<u32>, listener: Listener) {
        let entry = (surface.clone(), listener);
        self.listeners.retain(|l| *l != entry);
        self.removed.push(entry);
    }

    fn bounding_rect(&self, element: &u32) -> Rect {
        let layout = self.layout.get(element).copied().unwrap_or_default();
        let shift = Vec2::new(
            parse_pixels(self.style(*element, StyleProperty::Left)),
            parse_pixels(self.style(*element, StyleProperty::Top)),
        ) + parse_translation(self.style(*element, StyleProperty::Transform));
        layout + shift
    }

    fn parent(&self, element: &u32) -> Option<u32> {
        self.parents.get(element).copied()
    }

    fn computed_style(&self, element: &u32, property: StyleProperty) -> Option<String> {
        self.style(*element, property).map(str::to_owned)
    }

    fn set_style(&mut self, element: &u32, property: StyleProperty, value: &str) {
        self.styles.insert((*element, property), value.to_owned());
    }

    fn set_attribute(&mut self, element: &u32, name: &str, value: &str) {
        self.attributes
            .insert((*element, name.to_owned()), value.to_owned());
    }

    fn request_frame(&mut self, controller: ControllerId) {
        self.frames.push(controller);
    }
}
