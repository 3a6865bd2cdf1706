// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

pub mod config;
pub mod error;
pub mod generator;
pub mod harness;
pub mod partition;
pub mod point;
pub mod reduce;
pub mod search;
pub mod task;
