// ABOUTME: Shared helpers for liftwise-cli subcommands
// ABOUTME: JSON input loading, record validation, and stdout rendering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

pub mod io;
