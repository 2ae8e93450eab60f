// Copyright (c) 2025 Fluxo contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use fluxo::{cli, commands, db};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let conn = db::open_or_init()?;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Database initialized at {}", db::db_path()?.display());
        }
        Some(("tx", sub)) => commands::transactions::handle(&conn, sub)?,
        Some(("fixed", sub)) => commands::fixed::handle(&conn, sub)?,
        Some(("limit", sub)) => commands::limits::handle(&conn, sub)?,
        Some(("report", sub)) => commands::reports::report(&conn, sub)?,
        Some(("dashboard", sub)) => commands::reports::dashboard(&conn, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
