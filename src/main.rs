mod cli;
mod compare;
mod report;
mod stats;
mod types;
mod ui;

use clap::Parser;
use std::fs;
use std::process;
use std::str::FromStr;
use types::TransitionKind;

fn main() {
    env_logger::init();

    let args = cli::CliArgs::parse();

    let exit_code = match &args.command {
        cli::Command::Compare(compare_args) => run_compare(compare_args),
        cli::Command::Status(status_args) => run_status(status_args),
    };

    process::exit(exit_code);
}

fn run_compare(args: &cli::CompareArgs) -> i32 {
    if let Err(e) = args.validate() {
        ui::print_error(&e);
        return 1;
    }

    let changes = match compare::compare_configurations(
        &args.statistics,
        &args.from_config,
        &args.to_config,
        args.time_delta,
        args.obj_delta,
    ) {
        Ok(changes) => changes,
        Err(e) => {
            ui::print_error(&e);
            return 1;
        }
    };

    match (&args.output, args.json) {
        (Some(path), true) => {
            if let Err(e) = report::write_json_report(&changes, &args.from_config, &args.to_config, path) {
                ui::print_error(&format!("failed to write report to {}: {}", path.display(), e));
                return 1;
            }
            ui::status(&format!("report saved to {}", path.display()));
        }
        (Some(path), false) => {
            if let Err(e) = fs::write(path, report::format_changes(&changes)) {
                ui::print_error(&format!("failed to write report to {}: {}", path.display(), e));
                return 1;
            }
            ui::status(&format!("report saved to {}", path.display()));
        }
        (None, true) => {
            let report = report::json_report(&changes, &args.from_config, &args.to_config);
            match serde_json::to_string_pretty(&report) {
                Ok(text) => println!("{}", text),
                Err(e) => {
                    ui::print_error(&format!("failed to serialize report: {}", e));
                    return 1;
                }
            }
        }
        (None, false) => print!("{}", report::format_changes(&changes)),
    }

    // A feasibility contradiction means at least one configuration produced
    // a wrong answer; make CI notice.
    if changes.transition_count(TransitionKind::Conflicting) > 0 { 2 } else { 0 }
}

fn run_status(args: &cli::StatusArgs) -> i32 {
    let format = match report::TableFormat::from_str(&args.format) {
        Ok(format) => format,
        Err(e) => {
            ui::print_error(&e);
            return 1;
        }
    };

    match report::report_status(
        &args.statistics,
        args.per_problem,
        args.per_model,
        args.per_instance,
        args.avg.as_deref(),
        format,
    ) {
        Ok(table) => {
            print!("{}", table);
            0
        }
        Err(e) => {
            ui::print_error(&e);
            1
        }
    }
}
