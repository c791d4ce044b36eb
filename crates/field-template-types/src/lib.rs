/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Type definitions for field template composition.
 *
 * This crate provides pure data types shared by the settings layer, the
 * composition engine and its consumers: field identity, label formats,
 * wrapper slot specifications and the render tree. It has minimal
 * dependencies (serde, hashlink, indexmap) and no behavior beyond
 * constructing and inspecting these values.
 */

pub mod attr;
pub mod field;
pub mod node;
pub mod wrapper;

// Re-export commonly used types at the crate root
pub use attr::{Attributes, ClassList, empty_attributes};
pub use field::{FieldKey, FieldKind, LabelFormat};
pub use node::{Child, RenderNode};
pub use wrapper::{DEFAULT_WRAPPER_TAG, WrapperSlot, WrapperSpec};
