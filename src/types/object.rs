// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Type-erased handle over API objects.

use kube::core::TypeMeta;
use std::any::Any;
use std::fmt;

/// An API object that generic code can clone without knowing its concrete type.
pub trait RuntimeObject: Any + fmt::Debug + Send + Sync {
    /// `apiVersion` and `kind` of the concrete type
    fn type_meta(&self) -> TypeMeta;

    /// Copy the object into a new, independent handle
    fn deep_copy_object(&self) -> Box<dyn RuntimeObject>;

    fn as_any(&self) -> &dyn Any;
}

impl dyn RuntimeObject {
    pub fn downcast_ref<T: RuntimeObject>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

/// Copy an optional handle. A missing object yields `None`.
pub fn deep_copy_object(obj: Option<&dyn RuntimeObject>) -> Option<Box<dyn RuntimeObject>> {
    obj.map(RuntimeObject::deep_copy_object)
}
