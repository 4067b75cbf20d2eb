// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod locator;
pub mod rendered_engine;
pub mod router;
pub mod static_engine;
pub mod traits;
