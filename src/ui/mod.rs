// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! egui surfaces built on the form engine.

pub mod dialog_form;
