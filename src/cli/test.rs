use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use super::Cli;
use crate::mode::Mode;

#[test]
fn test_cli_is_well_formed() {
    Cli::command().debug_assert();
}

#[test]
fn test_defaults() {
    let cli = Cli::try_parse_from(["monitor", "-e", "cpu-cycles"]).unwrap();
    assert_eq!(cli.event, Mode::CpuCycles);
    assert_eq!(cli.period_ms, 100);
    assert_eq!(cli.buffer_size, 100);
}

#[test]
fn test_all_flags() {
    let cli = Cli::try_parse_from([
        "monitor",
        "--event",
        "dtlb-miss-rate",
        "--period-ms",
        "250",
        "--buffer-size",
        "30",
    ])
    .unwrap();
    assert_eq!(cli.event, Mode::DtlbMissRate);
    assert_eq!(cli.period_ms, 250);
    assert_eq!(cli.buffer_size, 30);

    let cli = Cli::try_parse_from(["monitor", "-e", "cpu-cycles", "-p", "5"]).unwrap();
    assert_eq!(cli.period_ms, 5);
}

#[test]
fn test_event_is_required() {
    let err = Cli::try_parse_from(["monitor"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
}

#[test]
fn test_unknown_event() {
    let err = Cli::try_parse_from(["monitor", "-e", "instructions"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidValue);
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_zero_rejected() {
    for args in [
        ["monitor", "-e", "cpu-cycles", "--period-ms", "0"],
        ["monitor", "-e", "cpu-cycles", "--buffer-size", "0"],
    ] {
        let err = Cli::try_parse_from(args).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }
}

#[test]
fn test_no_version_flag() {
    let err = Cli::try_parse_from(["monitor", "--version"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownArgument);
}

#[test]
fn test_help_lists_events() {
    let help = Cli::command().render_long_help().to_string();
    for mode in Mode::all() {
        assert!(help.contains(mode.name()));
        assert!(help.contains(mode.title()));
    }
}
