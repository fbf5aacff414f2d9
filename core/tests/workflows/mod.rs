// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end workflow tests for the rollcall-core crate.
//!
//! These tests drive the `Schedule` facade over real record files: loading,
//! resolving days and weeks, marking attendance and writing it back.

mod config_driven;
mod mark_lifecycle;
mod week_view;
