use anyhow::Result;
use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run(args: &[&str], stdin: &str) -> Result<Output> {
    let mut child = Command::new(env!("CARGO_BIN_EXE_onesexpr"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;
    child.stdin.take().expect("piped stdin").write_all(stdin.as_bytes())?;
    Ok(child.wait_with_output()?)
}

#[test]
fn prints_canonical_form_without_newline() -> Result<()> {
    let out = run(&[], "(a  b)\n(ignored)")?;
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(String::from_utf8(out.stdout)?, "(a b)");
    assert_eq!(String::from_utf8(out.stderr)?, "");
    Ok(())
}

#[test]
fn parse_error_exits_nonzero() -> Result<()> {
    let out = run(&[], "(a b")?;
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(String::from_utf8(out.stdout)?, "");
    assert_eq!(String::from_utf8(out.stderr)?, "parse error at 1:5: )\n");

    let out = run(&[], "\"unterminated")?;
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(String::from_utf8(out.stderr)?, "parse error at 1:14: \"\n");
    Ok(())
}

#[test]
fn always_exit_zero_keeps_the_diagnostic() -> Result<()> {
    let out = run(&["--always-exit-zero"], "(a b")?;
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(String::from_utf8(out.stderr)?, "parse error at 1:5: )\n");
    Ok(())
}

#[test]
fn empty_input() -> Result<()> {
    let out = run(&[], "")?;
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(String::from_utf8(out.stderr)?, "parse error at 1:1: \n");
    Ok(())
}

#[test]
fn dump() -> Result<()> {
    let out = run(&["--dump"], "(a \"b c\")")?;
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(String::from_utf8(out.stdout)?,
               "(list 1:1-1:10 (atom 1:2-1:3 a) (atom-codes 1:4-1:9 98 32 99))");
    Ok(())
}

#[test]
fn max_depth() -> Result<()> {
    let out = run(&["--max-depth", "1"], "(a (b))")?;
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(String::from_utf8(out.stderr)?,
               "parse error at 1:4: nesting too deep\n");
    Ok(())
}

#[test]
fn reads_from_file() -> Result<()> {
    let path = std::env::temp_dir()
        .join(format!("onesexpr-cli-{}.scm", std::process::id()));
    std::fs::write(&path, "(x\n \"y")?;
    let path_str = path.to_str().expect("utf-8 temp path");
    let out = run(&[path_str], "");
    std::fs::remove_file(&path)?;
    let out = out?;
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(String::from_utf8(out.stderr)?,
               format!("{:?}: parse error at 2:4: \"\n", path));
    Ok(())
}
