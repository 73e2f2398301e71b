// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
pub mod pad;
pub mod engine;
pub mod compress;
