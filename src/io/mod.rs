// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations for image assets and project tables.

pub mod media;
pub mod serialization;
