// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! API types served by the crew.example.com group.

pub mod first_mate;
pub mod object;

pub use first_mate::{FirstMate, FirstMateList, FirstMateSpec, FirstMateStatus};
pub use object::{deep_copy_object, RuntimeObject};
