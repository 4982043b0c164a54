// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

mod app;

fn main() -> eframe::Result<()> {
    app::run()
}
