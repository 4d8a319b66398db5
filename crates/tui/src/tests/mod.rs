// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test module for the terminal client.
//!
//! Sessions are driven end to end through a `ScriptedConsole` against an
//! in-memory backend.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod app_tests;
mod helpers;
