// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Domain layer: schemas, field values and field configuration shared by the
//! form engine, the renderers and the dialog.

pub mod field_config;
pub mod schema;
pub mod value;
