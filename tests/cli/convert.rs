use anyhow::{Ok, Result};
use pretty_assertions::assert_eq;

use crate::CliTest;

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_scan_wrapper_file() -> Result<()> {
    let test = CliTest::with_wrapper(
        "gdal_wrap.cpp",
        r#"
SWIGTYPE_p_Foo,
rb_define_method(cFoo, "DoThing", -1);
rb_define_method(cFoo, "New", -1);
rb_define_method(cFoo, "new", -1);
rb_define_module_function(mBar, "Helper", -1);
"#,
    )?;

    let output = test.command().output()?;
    assert!(output.status.success());

    let expected = "\
// -------  SWIG Renames ------------
%rename(do_thing) Foo::DoThing;
%rename(new_) Foo::New;
%rename(helper) Helper;


// -------  SWIG Aliases ------------
%alias Foo::new_ \"new\";


";
    assert_eq!(stdout_of(&output), expected);

    Ok(())
}

#[test]
fn test_skips_lowercase_and_setter_names() -> Result<()> {
    let test = CliTest::with_wrapper(
        "gdal_wrap.cpp",
        r#"
rb_define_method(cFoo, "bar", -1);
rb_define_method(cFoo, "Value=", -1);
"#,
    )?;

    let output = test.command().output()?;
    assert!(output.status.success());

    let stdout = stdout_of(&output);
    assert!(!stdout.contains("%rename"));
    assert!(!stdout.contains("%alias"));

    Ok(())
}

#[test]
fn test_match_replace_rule() -> Result<()> {
    let test = CliTest::with_wrapper(
        "ogr_wrap.cpp",
        r#"rb_define_module_function(mOgr, "OGRGetDriverCount", -1);"#,
    )?;

    let output = test
        .command()
        .args(["--match", "^OGR", "--replace", ""])
        .output()?;
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("%rename(get_driver_count) OGRGetDriverCount;\n"));

    Ok(())
}

#[test]
fn test_match_without_replace_is_rejected() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().args(["--match", "^OGR"]).output()?;

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--replace"));

    Ok(())
}

#[test]
fn test_replace_without_match_is_rejected() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().args(["--replace", "x"]).output()?;

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));

    Ok(())
}

#[test]
fn test_invalid_match_pattern_fails() -> Result<()> {
    let test = CliTest::with_wrapper("gdal_wrap.cpp", "")?;

    let output = test
        .command()
        .args(["--match", "(", "--replace", ""])
        .output()?;

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid --match pattern"));

    Ok(())
}

#[test]
fn test_empty_directory_prints_nothing() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "");

    Ok(())
}

#[test]
fn test_each_wrapper_file_gets_its_own_sections() -> Result<()> {
    let test = CliTest::with_wrapper(
        "gdal_wrap.cpp",
        r#"rb_define_module_function(mGdal, "AllRegister", -1);"#,
    )?;
    test.write_file(
        "ogr_wrap.cpp",
        r#"rb_define_module_function(mOgr, "RegisterAll", -1);"#,
    )?;

    let output = test.command().output()?;
    assert!(output.status.success());

    let stdout = stdout_of(&output);
    assert_eq!(stdout.matches("// -------  SWIG Renames ------------").count(), 2);
    assert_eq!(stdout.matches("// -------  SWIG Aliases ------------").count(), 2);
    assert!(stdout.contains("%rename(all_register) AllRegister;\n"));
    assert!(stdout.contains("%rename(register_all) RegisterAll;\n"));

    Ok(())
}

#[test]
fn test_dir_option() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "build/gdal_wrap.cpp",
        r#"rb_define_module_function(mGdal, "AllRegister", -1);"#,
    )?;

    let dir = test.root().join("build");
    let output = test
        .command()
        .args(["--dir", dir.to_str().unwrap()])
        .output()?;

    assert!(output.status.success());
    assert!(stdout_of(&output).contains("%rename(all_register) AllRegister;\n"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("--match"));
    assert!(stdout.contains("--replace"));

    Ok(())
}
