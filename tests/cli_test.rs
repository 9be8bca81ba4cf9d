//! CLI command dispatch against fixture inputs

use clap::Parser;
use tempfile::tempdir;

use astview::cli::args::Cli;
use astview::cli::commands::execute_command;
use astview::util::testing::init_test_setup;

#[test]
fn given_render_command_when_executing_then_svg_file_is_written() {
    init_test_setup();
    let dir = tempdir().unwrap();
    let out = dir.path().join("diagram.svg");

    let cli = Cli::parse_from([
        "astview",
        "render",
        "tests/resources/asts/program_var.json",
        "-o",
        out.to_str().unwrap(),
    ]);
    execute_command(&cli).unwrap();

    let svg = std::fs::read_to_string(&out).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("VariableDeclarator"));
}

#[test]
fn given_width_override_when_rendering_then_canvas_width_changes() {
    init_test_setup();
    let dir = tempdir().unwrap();
    let out = dir.path().join("diagram.svg");

    let cli = Cli::parse_from([
        "astview",
        "render",
        "tests/resources/asts/program_var.json",
        "-o",
        out.to_str().unwrap(),
        "--width",
        "1000",
    ]);
    execute_command(&cli).unwrap();

    let svg = std::fs::read_to_string(&out).unwrap();
    assert!(svg.contains(r#"width="1000""#));
}

#[test]
fn given_missing_input_file_when_rendering_then_noinput_exit_code() {
    init_test_setup();
    let cli = Cli::parse_from(["astview", "render", "does/not/exist.json"]);

    let err = execute_command(&cli).unwrap_err();
    assert_eq!(err.exit_code(), astview::exitcode::NOINPUT);
}

#[test]
fn given_malformed_input_when_rendering_then_dataerr_exit_code() {
    init_test_setup();
    let cli = Cli::parse_from([
        "astview",
        "render",
        "tests/resources/asts/missing_type.json",
    ]);

    let err = execute_command(&cli).unwrap_err();
    assert_eq!(err.exit_code(), astview::exitcode::DATAERR);
}

#[test]
fn given_zero_width_override_when_rendering_then_usage_exit_code() {
    init_test_setup();
    let cli = Cli::parse_from([
        "astview",
        "render",
        "tests/resources/asts/program_var.json",
        "--width",
        "0",
    ]);

    let err = execute_command(&cli).unwrap_err();
    assert_eq!(err.exit_code(), astview::exitcode::USAGE);
}

#[test]
fn given_info_command_when_executing_then_it_succeeds() {
    init_test_setup();
    let cli = Cli::parse_from(["astview", "info"]);
    execute_command(&cli).unwrap();
}

#[test]
fn given_tree_command_when_executing_then_it_succeeds() {
    init_test_setup();
    let cli = Cli::parse_from(["astview", "tree", "tests/resources/asts/while_loop.json"]);
    execute_command(&cli).unwrap();
}

#[test]
fn given_json_command_when_executing_then_it_succeeds() {
    init_test_setup();
    let cli = Cli::parse_from(["astview", "json", "tests/resources/asts/call.json"]);
    execute_command(&cli).unwrap();
}
