use assert_cmd::Command;
use predicates::prelude::*;

fn stencil() -> Command {
    Command::cargo_bin("stencil").expect("stencil binary")
}

#[test]
fn literal_template_passes_through_unchanged() {
    stencil()
        .write_stdin("plain text\nno directives\n")
        .assert()
        .success()
        .stdout("plain text\nno directives\n");
}

#[test]
fn line_statement_loop_renders_each_element() {
    stencil()
        .write_stdin("#% for line in [1, 2, 3] | format_each(\"{}\")\n{{ line }}\n#% endfor\n")
        .assert()
        .success()
        .stdout("1\n2\n3\n");
}

#[test]
fn comment_lines_are_dropped() {
    stencil()
        .write_stdin("alpha\n## not in output\nbeta\n")
        .assert()
        .success()
        .stdout("alpha\nbeta\n");
}

#[test]
fn notice_function_stamps_banner_and_filename() {
    stencil()
        .write_stdin("{{ generated_file_notice(\"foo.tmpl\") }}")
        .assert()
        .success()
        .stdout(stencil_renderer::generated_file_notice("foo.tmpl"));
}

#[test]
fn any_argument_is_a_usage_error() {
    for args in [&["extra"][..], &["-h"][..], &["--help"][..], &["--version"][..]] {
        stencil()
            .args(args)
            .write_stdin("ignored")
            .assert()
            .failure()
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("unexpected argument"));
    }
}

#[test]
fn undefined_variable_fails_without_output() {
    stencil()
        .write_stdin("{{ missing }}\n")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("undefined"));
}

#[test]
fn syntax_error_fails_without_output() {
    stencil()
        .write_stdin("#% for x in\n")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("parse error"));
}
