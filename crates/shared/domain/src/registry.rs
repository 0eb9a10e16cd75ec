//! Type-erased registration for feature slices.
//!
//! Each feature hands the kernel one [`InitializedSlice`] at startup; the
//! kernel files it under the concrete `TypeId` and hands back typed
//! references on demand.

use std::any::{Any, TypeId};
use std::fmt::Debug;

/// State a feature exposes to the rest of the platform.
///
/// `as_any` is the downcast hook; implementations always return `self`.
pub trait FeatureSlice: Any + Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;
}

/// One feature's state, boxed together with the `TypeId` it registers under.
#[derive(Debug)]
pub struct InitializedSlice {
    pub id: TypeId,
    pub state: Box<dyn FeatureSlice>,
}

impl InitializedSlice {
    pub fn new<T: FeatureSlice>(state: T) -> Self {
        Self { id: TypeId::of::<T>(), state: Box::new(state) }
    }
}
