//! Shared access to the one scene instance of a mounted surface.
//!
//! Everything runs on the host's single UI thread, so the handle is an
//! `Rc<RefCell<_>>` rather than anything `Send`.

use crate::camera::CameraRig;
use crate::error::MountError;
use crate::scene::FieldScene;
use crate::shapes::ShapeId;
use crate::timeline::TimelineState;
use fnv::FnvHashMap;
use glam::Vec3;
use std::cell::{OnceCell, RefCell};
use std::rc::Rc;

#[derive(Clone)]
pub struct SceneHandle(Rc<RefCell<FieldScene>>);

impl SceneHandle {
    pub fn new(scene: FieldScene) -> Self {
        Self(Rc::new(RefCell::new(scene)))
    }

    pub fn set_active_shape(&self, shape: ShapeId) {
        self.0.borrow_mut().set_active_shape(shape);
    }

    pub fn active_shape(&self) -> ShapeId {
        self.0.borrow().active_shape()
    }

    pub fn camera(&self) -> CameraRig {
        self.0.borrow().camera().clone()
    }

    pub fn light(&self) -> Vec3 {
        self.0.borrow().light()
    }

    pub fn push_timeline(&self, state: TimelineState) {
        self.0.borrow_mut().push_timeline(state);
    }

    /// Returns `true` the first time only.
    pub fn dispose(&self) -> bool {
        self.0.borrow_mut().dispose()
    }

    pub fn is_disposed(&self) -> bool {
        self.0.borrow().is_disposed()
    }

    pub fn with_scene<R>(&self, f: impl FnOnce(&FieldScene) -> R) -> R {
        f(&self.0.borrow())
    }

    pub fn with_scene_mut<R>(&self, f: impl FnOnce(&mut FieldScene) -> R) -> R {
        f(&mut self.0.borrow_mut())
    }
}

/// Single-assignment slot the renderer fills once the scene exists.
#[derive(Clone, Default)]
pub struct HandleSlot(Rc<OnceCell<SceneHandle>>);

impl HandleSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hands the rejected handle back when the slot is already filled.
    pub fn fill(&self, handle: SceneHandle) -> Result<(), SceneHandle> {
        self.0.set(handle)
    }

    pub fn get(&self) -> Option<&SceneHandle> {
        self.0.get()
    }

    pub fn is_ready(&self) -> bool {
        self.0.get().is_some()
    }
}

/// Surfaces that currently have a live scene, and what each one owns.
///
/// A surface is claimed before its (possibly async) setup starts and the
/// finished mount is attached afterwards. A second claim on the same surface
/// is rejected until the first is released.
#[derive(Debug)]
pub struct MountRegistry<T> {
    live: FnvHashMap<String, Option<T>>,
}

impl<T> Default for MountRegistry<T> {
    fn default() -> Self {
        Self {
            live: FnvHashMap::default(),
        }
    }
}

impl<T> MountRegistry<T> {
    pub fn claim(&mut self, surface_id: &str) -> Result<(), MountError> {
        if surface_id.is_empty() {
            return Err(MountError::NoSurface);
        }
        if self.live.contains_key(surface_id) {
            return Err(MountError::AlreadyMounted(surface_id.to_string()));
        }
        self.live.insert(surface_id.to_string(), None);
        Ok(())
    }

    /// Hands `value` back when the surface is not claimed (released while
    /// setup was still running) or already has a mount attached.
    pub fn attach(&mut self, surface_id: &str, value: T) -> Result<(), T> {
        match self.live.get_mut(surface_id) {
            Some(slot) if slot.is_none() => {
                *slot = Some(value);
                Ok(())
            }
            _ => Err(value),
        }
    }

    /// Frees the surface id and returns its mount, if one was attached.
    pub fn release(&mut self, surface_id: &str) -> Option<T> {
        self.live.remove(surface_id).flatten()
    }

    /// Frees every surface.
    pub fn drain(&mut self) -> Vec<T> {
        self.live.drain().filter_map(|(_, m)| m).collect()
    }

    pub fn is_mounted(&self, surface_id: &str) -> bool {
        self.live.contains_key(surface_id)
    }

    pub fn get(&self, surface_id: &str) -> Option<&T> {
        self.live.get(surface_id).and_then(Option::as_ref)
    }

    pub fn mounted(&self) -> impl Iterator<Item = &T> {
        self.live.values().filter_map(Option::as_ref)
    }
}
