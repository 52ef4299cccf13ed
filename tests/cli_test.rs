use assert_cmd::prelude::*; // Add methods on commands
use std::process::Command; // Run programs
use tempfile;
type STDRESULT = Result<(),Box<dyn std::error::Error>>;

fn round_trip_test(format: &str, data: &[u8]) -> STDRESULT {
    let temp_dir = tempfile::tempdir()?;
    let in_path = temp_dir.path().join("expanded.bin");
    let compressed_path = temp_dir.path().join("compressed.bin");
    let out_path = temp_dir.path().join("roundtrip.bin");
    std::fs::write(&in_path, data)?;

    Command::cargo_bin("lzstring")?
        .arg("compress")
        .arg("-f").arg(format)
        .arg("-i").arg(&in_path)
        .arg("-o").arg(&compressed_path)
        .assert()
        .success();

    Command::cargo_bin("lzstring")?
        .arg("expand")
        .arg("-f").arg(format)
        .arg("-i").arg(&compressed_path)
        .arg("-o").arg(&out_path)
        .assert()
        .success();

    let round_tripped = std::fs::read(out_path)?;
    assert_eq!(round_tripped, data);
    Ok(())
}

#[test]
fn round_trips_bytes_format() -> STDRESULT {
    round_trip_test("bytes", b"I am Sam. Sam I am. I do not like this Sam I am.\n")
}

#[test]
fn round_trips_base64_format() -> STDRESULT {
    round_trip_test("base64", b"The quick brown fox jumps over the lazy dog.")
}

#[test]
fn round_trips_url_format() -> STDRESULT {
    round_trip_test("url", b"The quick brown fox jumps over the lazy dog.")
}

#[test]
fn defaults_to_bytes_format() -> STDRESULT {
    let temp_dir = tempfile::tempdir()?;
    let in_path = temp_dir.path().join("expanded.bin");
    let compressed_path = temp_dir.path().join("compressed.bin");
    let out_path = temp_dir.path().join("roundtrip.bin");
    let data = b"no format flag given";
    std::fs::write(&in_path, data)?;

    Command::cargo_bin("lzstring")?
        .arg("compress")
        .arg("-i").arg(&in_path)
        .arg("-o").arg(&compressed_path)
        .assert()
        .success();

    Command::cargo_bin("lzstring")?
        .arg("expand")
        .arg("-i").arg(&compressed_path)
        .arg("-o").arg(&out_path)
        .assert()
        .success();

    assert_eq!(std::fs::read(out_path)?, data);
    Ok(())
}
