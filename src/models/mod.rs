// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Portfolio data structures and the built-in project table.

pub mod catalog;
pub mod project;
