// Copyright (c) 2025 Fluxo contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

fn month_year_args(cmd: Command, required: bool) -> Command {
    cmd.arg(
        Arg::new("month")
            .long("month")
            .required(required)
            .help("Calendar month, 1-12"),
    )
    .arg(
        Arg::new("year")
            .long("year")
            .required(required)
            .help("Calendar year, e.g. 2025"),
    )
}

pub fn build_cli() -> Command {
    Command::new("fluxo")
        .version(crate_version!())
        .about("Single-user monthly finance tracker: transactions, fixed expenses, limits, reports")
        .subcommand(Command::new("init").about("Create the database if it does not exist"))
        .subcommand(
            Command::new("tx")
                .about("Record and inspect transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record an income or expense")
                        .arg(
                            Arg::new("kind")
                                .long("kind")
                                .required(true)
                                .help("'income' or 'expense'"),
                        )
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("description").long("description").required(true))
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .help("YYYY-MM-DD, defaults to today"),
                        ),
                )
                .subcommand(json_flags(month_year_args(
                    Command::new("list").about("List transactions, optionally for one period"),
                    false,
                )))
                .subcommand(
                    Command::new("rm").about("Delete a transaction").arg(
                        Arg::new("id")
                            .long("id")
                            .required(true)
                            .value_parser(clap::value_parser!(i64)),
                    ),
                ),
        )
        .subcommand(
            Command::new("fixed")
                .about("Manage per-month fixed expenses")
                .subcommand(month_year_args(
                    Command::new("add")
                        .about("Add a fixed expense for one month")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(
                            Arg::new("due-day")
                                .long("due-day")
                                .required(true)
                                .help("Day of month it falls due, 1-31"),
                        ),
                    true,
                ))
                .subcommand(json_flags(month_year_args(
                    Command::new("list").about("List fixed expenses, optionally for one period"),
                    false,
                )))
                .subcommand(
                    Command::new("pay").about("Mark a fixed expense paid").arg(
                        Arg::new("id")
                            .long("id")
                            .required(true)
                            .value_parser(clap::value_parser!(i64)),
                    ),
                )
                .subcommand(
                    Command::new("unpay")
                        .about("Mark a fixed expense pending again")
                        .arg(
                            Arg::new("id")
                                .long("id")
                                .required(true)
                                .value_parser(clap::value_parser!(i64)),
                        ),
                )
                .subcommand(
                    Command::new("rm").about("Delete a fixed expense").arg(
                        Arg::new("id")
                            .long("id")
                            .required(true)
                            .value_parser(clap::value_parser!(i64)),
                    ),
                ),
        )
        .subcommand(
            Command::new("limit")
                .about("Configure the monthly spending limit")
                .subcommand(month_year_args(
                    Command::new("set")
                        .about("Set (or replace) the limit for a month")
                        .arg(Arg::new("amount").long("amount").required(true)),
                    true,
                ))
                .subcommand(month_year_args(
                    Command::new("show").about("Show the limit for a month"),
                    true,
                ))
                .subcommand(Command::new("list").about("List all configured limits")),
        )
        .subcommand(json_flags(month_year_args(
            Command::new("report").about("Monthly report: totals, balance, limit alert"),
            true,
        )))
        .subcommand(json_flags(
            Command::new("dashboard")
                .about("Twelve-month rollup for a year")
                .arg(Arg::new("year").long("year").required(true)),
        ))
}
