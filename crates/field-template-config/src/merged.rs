//! Cursor-based merged settings navigation.
//!
//! This module provides lazy, zero-copy merging of settings layers with a
//! cursor-based API for navigation.
//!
//! # Design
//!
//! - `MergedSettings<'a>` holds borrowed references to settings layers
//! - `MergedCursor<'a>` provides path-based navigation without copying
//! - Resolution happens lazily when `as_*()` methods are called
//! - Maps merge key-by-key only down to the merge depth; below it, a value is
//!   taken whole from the highest-priority layer that defines its ancestor at
//!   the merge depth
//!
//! With the default merge depth of 2, top-level keys merge across layers, and
//! so do the keys of a wrapper sub-record such as `outer`, but a slot's
//! `attributes` map is never combined from several layers.
//!
//! # Example
//!
//! ```rust,ignore
//! let merged = MergedSettings::new(vec![&type_defaults, &instance]);
//!
//! let tag = merged.cursor().at("outer").at("tag").as_scalar();
//! ```

use crate::types::SettingsValue;
use indexmap::IndexSet;

/// A lazily-evaluated merge of settings layers.
#[derive(Debug, Clone)]
pub struct MergedSettings<'a> {
    /// Ordered list of layers (first = lowest priority, last = highest)
    layers: Vec<&'a SettingsValue>,
    /// Paths shorter than this merge their maps key-by-key.
    merge_depth: usize,
}

/// A cursor for navigating merged settings.
///
/// The cursor stores a reference to the merged settings and a path.
/// Resolution happens lazily when you call `as_*()` methods.
#[derive(Debug, Clone)]
pub struct MergedCursor<'a> {
    settings: &'a MergedSettings<'a>,
    path: Vec<String>,
}

/// A resolved value with the layer it came from.
#[derive(Debug, Clone, Copy)]
pub struct MergedScalar<'a> {
    /// The resolved value
    pub value: &'a SettingsValue,
    /// Which layer this value came from (index into layers)
    pub layer_index: usize,
}

/// A resolved map.
///
/// This is a "virtual" map that computes its keys from the contributing
/// layers and hands out cursors for its values.
#[derive(Debug, Clone)]
pub struct MergedMap<'a> {
    settings: &'a MergedSettings<'a>,
    path: Vec<String>,
    keys: Vec<String>,
}

impl<'a> MergedSettings<'a> {
    /// Maps at the root and one level below merge key-by-key.
    pub const DEFAULT_MERGE_DEPTH: usize = 2;

    /// Merge layers ordered by priority: first = lowest, last = highest.
    pub fn new(layers: Vec<&'a SettingsValue>) -> Self {
        MergedSettings {
            layers,
            merge_depth: Self::DEFAULT_MERGE_DEPTH,
        }
    }

    pub fn empty() -> Self {
        MergedSettings::new(Vec::new())
    }

    /// Change how deep maps merge key-by-key.
    pub fn with_merge_depth(mut self, merge_depth: usize) -> Self {
        self.merge_depth = merge_depth;
        self
    }

    /// Add a new highest-priority layer (returns a new value, doesn't mutate).
    pub fn with_layer(&self, layer: &'a SettingsValue) -> MergedSettings<'a> {
        let mut layers = self.layers.clone();
        layers.push(layer);
        MergedSettings {
            layers,
            merge_depth: self.merge_depth,
        }
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Get a cursor at the root.
    pub fn cursor(&'a self) -> MergedCursor<'a> {
        MergedCursor {
            settings: self,
            path: Vec::new(),
        }
    }

    /// Get a scalar value at a path.
    pub fn get_scalar(&'a self, path: &[&str]) -> Option<MergedScalar<'a>> {
        self.cursor().at_path(path).as_scalar()
    }

    /// Get a map at a path.
    pub fn get_map(&'a self, path: &[&str]) -> Option<MergedMap<'a>> {
        self.cursor().at_path(path).as_map()
    }

    /// Check if a path exists in any contributing layer.
    pub fn contains(&'a self, path: &[&str]) -> bool {
        self.cursor().at_path(path).exists()
    }
}

impl<'a> MergedCursor<'a> {
    /// Navigate to a child key.
    ///
    /// The cursor is valid even if the path doesn't exist; resolving it
    /// returns `None`.
    pub fn at(&self, key: &str) -> MergedCursor<'a> {
        let mut path = self.path.clone();
        path.push(key.to_string());
        MergedCursor {
            settings: self.settings,
            path,
        }
    }

    /// Navigate several keys at once.
    pub fn at_path(&self, path: &[&str]) -> MergedCursor<'a> {
        let mut new_path = self.path.clone();
        new_path.extend(path.iter().map(|s| s.to_string()));
        MergedCursor {
            settings: self.settings,
            path: new_path,
        }
    }

    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Check if this path exists in any contributing layer.
    pub fn exists(&self) -> bool {
        self.contributing_layers()
            .any(|(_, layer)| self.navigate_to(layer).is_some())
    }

    /// The value at this path from the highest-priority contributing layer,
    /// whatever its shape. No merging is applied.
    pub fn winning(&self) -> Option<MergedScalar<'a>> {
        let layers: Vec<_> = self.contributing_layers().collect();
        layers.into_iter().rev().find_map(|(i, layer)| {
            self.navigate_to(layer).map(|value| MergedScalar {
                value,
                layer_index: i,
            })
        })
    }

    /// Child keys at this path.
    ///
    /// Keys from earlier layers come first, then keys first seen in later
    /// layers. Below the merge depth only the winning layer's keys count.
    pub fn keys(&self) -> Vec<String> {
        if self.path.len() >= self.settings.merge_depth {
            return match self.winning().map(|w| w.value) {
                Some(SettingsValue::Map(map)) => map.keys().cloned().collect(),
                _ => Vec::new(),
            };
        }

        let mut seen = IndexSet::new();
        for (_, layer) in self.contributing_layers() {
            if let Some(SettingsValue::Map(map)) = self.navigate_to(layer) {
                for key in map.keys() {
                    seen.insert(key.clone());
                }
            }
        }
        seen.into_iter().collect()
    }

    /// Resolve as scalar (last-wins semantics).
    ///
    /// Returns the highest-priority scalar at this path. Layers holding a
    /// map or array here are skipped.
    pub fn as_scalar(&self) -> Option<MergedScalar<'a>> {
        let layers: Vec<_> = self.contributing_layers().collect();
        layers.into_iter().rev().find_map(|(i, layer)| {
            self.navigate_to(layer)
                .filter(|value| value.is_scalar())
                .map(|value| MergedScalar {
                    value,
                    layer_index: i,
                })
        })
    }

    /// Resolve as map, merging key-by-key when above the merge depth.
    pub fn as_map(&self) -> Option<MergedMap<'a>> {
        let has_map = self
            .contributing_layers()
            .any(|(_, layer)| matches!(self.navigate_to(layer), Some(SettingsValue::Map(_))));
        if !has_map {
            return None;
        }

        Some(MergedMap {
            settings: self.settings,
            path: self.path.clone(),
            keys: self.keys(),
        })
    }

    /// Layers allowed to contribute at this path.
    ///
    /// Above the merge depth every layer contributes. Below it only the
    /// layer that wins at the merge-depth ancestor does, so deep values are
    /// never assembled from several layers.
    fn contributing_layers(&self) -> impl Iterator<Item = (usize, &'a SettingsValue)> + '_ {
        let depth = self.settings.merge_depth;
        let owner = if self.path.len() > depth {
            let prefix = &self.path[..depth];
            self.settings
                .layers
                .iter()
                .enumerate()
                .rev()
                .find(|(_, layer)| navigate(layer, prefix).is_some())
                .map(|(i, _)| i)
        } else {
            None
        };
        let restricted = self.path.len() > depth;

        self.settings
            .layers
            .iter()
            .copied()
            .enumerate()
            .filter(move |(i, _)| !restricted || owner == Some(*i))
    }

    /// Navigate to this cursor's path within a single layer.
    fn navigate_to(&self, root: &'a SettingsValue) -> Option<&'a SettingsValue> {
        navigate(root, &self.path)
    }
}

fn navigate<'a>(root: &'a SettingsValue, path: &[String]) -> Option<&'a SettingsValue> {
    let mut current = root;
    for key in path {
        current = current.as_map()?.get(key)?;
    }
    Some(current)
}

impl<'a> MergedMap<'a> {
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    /// Get a cursor for a specific key.
    pub fn get(&self, key: &str) -> Option<MergedCursor<'a>> {
        if self.contains_key(key) {
            let mut path = self.path.clone();
            path.push(key.to_string());
            Some(MergedCursor {
                settings: self.settings,
                path,
            })
        } else {
            None
        }
    }

    /// Iterate over (key, cursor) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, MergedCursor<'a>)> {
        self.keys.iter().map(move |key| {
            let mut path = self.path.clone();
            path.push(key.clone());
            (
                key.as_str(),
                MergedCursor {
                    settings: self.settings,
                    path,
                },
            )
        })
    }
}
