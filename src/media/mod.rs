// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Deferred media loading and media strip navigation.
//!
//! These modules know nothing about egui: the renderer feeds them fragments,
//! keys and strip layout, and acts on what they return.

pub mod carousel;
pub mod classifier;
pub mod tracker;
