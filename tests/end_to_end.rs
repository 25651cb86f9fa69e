//! End-to-end scenarios over the public driver API, one per scenario in the
//! requirements document (S1-S6): known small graphs with known Frank
//! numbers, a concatenated stream, and an invalid line.

use clap::Parser;
use frank2::cli::Cli;
use frank2::driver;

fn run(args: &[&str], input: &str) -> String {
    let mut argv = vec!["frank2"];
    argv.extend_from_slice(args);
    let options = Cli::parse_from(argv).into_options().unwrap();
    let mut out = Vec::new();
    driver::run(std::io::Cursor::new(input.as_bytes()), &mut out, &options).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn s1_k4_has_frank_number_two() {
    assert_eq!(run(&["-e"], "C~\n"), "");
    assert_eq!(run(&["-e", "-c"], "C~\n"), "C~\n");
}

#[test]
fn s2_k33_has_frank_number_two() {
    assert_eq!(run(&["-e"], "Eheg\n"), "");
    assert_eq!(run(&["-e", "-c"], "Eheg\n"), "Eheg\n");
}

#[test]
fn s3_petersen_graph_has_frank_number_three() {
    assert_eq!(run(&["-e"], "IsP@OkWHG\n"), "IsP@OkWHG\n");
    assert_eq!(run(&["-e", "-c"], "IsP@OkWHG\n"), "");
}

#[test]
fn s4_three_prism_has_frank_number_two() {
    assert_eq!(run(&["-e"], "E?Bw\n"), "");
    assert_eq!(run(&["-e", "-c"], "E?Bw\n"), "E?Bw\n");
}

#[test]
fn s5_concatenated_stream_emits_only_petersen() {
    let input = "C~\nIsP@OkWHG\n";
    assert_eq!(run(&["-e"], input), "IsP@OkWHG\n");
}

#[test]
fn s6_invalid_line_is_skipped_not_fatal() {
    let input = "!\nIsP@OkWHG\n";
    assert_eq!(run(&["-e", "-v"], input), "IsP@OkWHG\n");

    let input = "\nIsP@OkWHG\n";
    assert_eq!(run(&["-e", "-v"], input), "IsP@OkWHG\n");
}

#[test]
fn header_is_preserved_on_output() {
    let input = ">>graph6<<IsP@OkWHG\n";
    assert_eq!(run(&["-e"], input), ">>graph6<<IsP@OkWHG\n");
}
