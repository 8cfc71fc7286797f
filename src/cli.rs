// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::core::config::RunConfig;
use crate::core::models::{Case, CheckResult, Group, Module, TestFn, TestRun};

fn build_cli() -> Command {
    Command::new("suite-runner")
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .about("Runs the built-in showcase suite and produces console and HTML reports.")
        .arg(
            Arg::new("project-name")
                .short('p')
                .long("project-name")
                .help("Project name shown in the report banner")
                .value_name("NAME")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to a TOML run configuration file")
                .value_name("CONFIG")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("html")
                .long("html")
                .help("Write the HTML report to the given path")
                .value_name("HTML")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("no-summary")
                .long("no-summary")
                .help("Suppress the console summary")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-report")
                .long("no-report")
                .help("Suppress the HTML report")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet-cases")
                .long("quiet-cases")
                .help("Suppress per-case result lines while running")
                .action(ArgAction::SetTrue),
        )
}

/// Parses the command line, runs the showcase suite and reports. The exit
/// code reflects the overall run result.
pub fn run() -> Result<ExitCode> {
    let matches = build_cli().get_matches();

    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => RunConfig::load(path)?,
        None => RunConfig::default(),
    };
    if let Some(name) = matches.get_one::<String>("project-name") {
        config.project_name = name.clone();
    }
    if let Some(path) = matches.get_one::<PathBuf>("html") {
        config.report = true;
        config.report_file = path.clone();
    }
    if matches.get_flag("no-summary") {
        config.summary = false;
    }
    if matches.get_flag("no-report") {
        config.report = false;
    }
    if matches.get_flag("quiet-cases") {
        config.case_results = false;
    }

    let mut run = TestRun::new(config.project_name.clone());
    register_showcase(&mut run, config.case_results);
    run.finish(&config);

    Ok(run.exit_code())
}

// --- Showcase suite -------------------------------------------------------
//
// A fixed demonstration tree covering all three registration kinds and the
// main assertion operations, including a deliberate failure and a case that
// never evaluates anything.

fn smoke(tc: &mut Case) -> CheckResult {
    tc.pass()
}

fn addition_holds(tc: &mut Case) -> CheckResult {
    tc.check_int_eq(4, 2 + 2)
}

fn tolerance_is_inclusive(tc: &mut Case) -> CheckResult {
    tc.check_flt_eq(1.0, 1.0 + 5.0e-7, 1.0e-6)
}

fn greeting_matches(tc: &mut Case) -> CheckResult {
    tc.check_str_eq("hello", Some("hello"))
}

fn checksum_matches(tc: &mut Case) -> CheckResult {
    tc.check_mem_eq(&[0xDE, 0xAD, 0xBE, 0xEF], &[0xDE, 0xAD, 0xBE, 0xEF])
}

fn always_fails(tc: &mut Case) -> CheckResult {
    tc.fail("always fails")
}

fn never_evaluated(_tc: &mut Case) -> CheckResult {
    Ok(())
}

fn register_showcase(run: &mut TestRun, case_results: bool) {
    let case = |name: &'static str, test_fn: TestFn| {
        Case::new(name, test_fn).with_result_lines(case_results)
    };

    run.run_case(case("smoke", smoke));

    run.run_group(
        Group::new("assertions")
            .with_case(case("addition_holds", addition_holds))
            .with_case(case("tolerance_is_inclusive", tolerance_is_inclusive))
            .with_case(case("greeting_matches", greeting_matches))
            .with_case(case("checksum_matches", checksum_matches)),
    );

    run.run_module(
        Module::new("showcase").with_group(
            Group::new("failures")
                .with_case(case("always_fails", always_fails))
                .with_case(case("never_evaluated", never_evaluated)),
        ),
    );
}
