use std::path::PathBuf;

use bstr::BString;

use include_inline::{inline_file, Error, Inliner, MissingInput};

fn sample(name: &str) -> PathBuf {
    let mut sample = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    sample.push("resources");
    sample.push("sample");
    sample.push(name);
    sample
}

// Header paths inside the fixtures are relative to the package root, which is
// the working directory of integration tests.
#[test]
fn fullsource_plain() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.cpp");

    let report = inline_file(sample("main.cpp"), &out, MissingInput::Fail).unwrap();

    let expected = "\
#include <iostream>
#pragma once
#include \"resources/sample/nested.h\"
int area() { return 25; }
// Error: Could not include resources/sample/missing.h

int main()
{
    return area();
}
";
    assert_eq!(std::fs::read_to_string(&out).unwrap(), expected);
    assert_eq!(report.input_lines, 8);
    assert_eq!(report.inlined, 1);
    assert_eq!(report.unavailable, vec![BString::from("resources/sample/missing.h")]);
}

#[test]
fn fullsource_empty_header() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.cpp");

    inline_file(sample("with_empty.cpp"), &out, MissingInput::Empty).unwrap();

    assert_eq!(
        std::fs::read_to_string(&out).unwrap(),
        "int nested();\n// Error: Could not include resources/sample/empty.h\n"
    );
}

#[test]
fn end_to_end_absolute_paths() {
    let dir = tempfile::tempdir().unwrap();
    let header = dir.path().join("a.h");
    std::fs::write(&header, "void f();").unwrap();
    let input = dir.path().join("main.cpp");
    std::fs::write(&input, format!("#include \"{}\"\nint main(){{}}\n", header.display())).unwrap();
    let out = dir.path().join("out.cpp");

    let mut inliner = Inliner::new(MissingInput::Fail);
    inliner.load(&input).unwrap();
    assert_eq!(inliner.document().len(), 2);
    inliner.process(&out).unwrap();

    assert_eq!(std::fs::read_to_string(&out).unwrap(), "void f();\nint main(){}\n");
}

#[test]
fn non_utf8_input_is_kept() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("main.cpp");
    std::fs::write(&input, b"// caf\xe9\nint main(){}\n").unwrap();
    let out = dir.path().join("out.cpp");

    let report = inline_file(&input, &out, MissingInput::Empty).unwrap();

    assert_eq!(report.input_lines, 2);
    assert_eq!(std::fs::read(&out).unwrap(), b"// caf\xe9\nint main(){}\n");
}

#[test]
fn non_utf8_header_is_inlined_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let header = dir.path().join("a.h");
    std::fs::write(&header, b"// \xa9 vendor\nvoid f();\n").unwrap();
    let input = dir.path().join("main.cpp");
    std::fs::write(&input, format!("#include \"{}\"\nint main(){{}}\n", header.display())).unwrap();
    let out = dir.path().join("out.cpp");

    let report = inline_file(&input, &out, MissingInput::Fail).unwrap();

    assert_eq!(report.inlined, 1);
    assert!(report.unavailable.is_empty());
    assert_eq!(
        std::fs::read(&out).unwrap(),
        b"// \xa9 vendor\nvoid f();\nint main(){}\n"
    );
}

#[test]
fn missing_header_in_tempdir() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("main.cpp");
    std::fs::write(&input, "#include \"missing.h\"\n").unwrap();
    let out = dir.path().join("out.cpp");

    inline_file(&input, &out, MissingInput::Fail).unwrap();

    let written = std::fs::read_to_string(&out).unwrap();
    assert_eq!(written.lines().count(), 1);
    assert!(written.contains("missing.h"));
    assert_eq!(written, "// Error: Could not include missing.h\n");
}

#[test]
fn empty_input_gives_empty_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("empty.cpp");
    std::fs::write(&input, "").unwrap();
    let out = dir.path().join("out.cpp");

    let report = inline_file(&input, &out, MissingInput::Fail).unwrap();

    assert_eq!(std::fs::read(&out).unwrap(), b"");
    assert_eq!(report.input_lines, 0);
}

#[test]
fn missing_input_empty_policy() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.cpp");

    let report = inline_file(dir.path().join("nope.cpp"), &out, MissingInput::Empty).unwrap();

    assert_eq!(std::fs::read(&out).unwrap(), b"");
    assert_eq!(report.input_lines, 0);
}

#[test]
fn missing_input_fail_policy() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("nope.cpp");
    let out = dir.path().join("out.cpp");

    match inline_file(&input, &out, MissingInput::Fail) {
        Err(Error::FailedToOpenFile { path, .. }) => assert_eq!(path, input),
        x => panic!("surprise: {:?}", x),
    }
    assert!(!out.exists());
}

#[test]
fn unwritable_output() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("no_such_dir").join("out.cpp");

    match inline_file(sample("main.cpp"), &out, MissingInput::Fail) {
        Err(Error::FailedToCreateOutput { path, .. }) => assert_eq!(path, out),
        x => panic!("surprise: {:?}", x),
    }
}

#[test]
fn output_is_truncated() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("main.cpp");
    std::fs::write(&input, "int x;\n").unwrap();
    let out = dir.path().join("out.cpp");
    std::fs::write(&out, "stale content\nthat is longer\n").unwrap();

    inline_file(&input, &out, MissingInput::Fail).unwrap();

    assert_eq!(std::fs::read_to_string(&out).unwrap(), "int x;\n");
}
