// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the portfolio viewer.

pub mod assets;
pub mod header;
pub mod media_strip;
pub mod project_card;
