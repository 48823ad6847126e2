use assert_cmd::prelude::*;
use image::{GenericImageView, Rgb, RgbImage};
use predicates::prelude::*;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

// A gradient with a bright vertical bar: plenty of low-energy seams
// on either side of it.
fn write_sample(path: &Path) {
    let image = RgbImage::from_fn(12, 8, |x, y| {
        if x == 5 {
            Rgb([250, 250, 40])
        } else {
            Rgb([(x * 10) as u8, (y * 12) as u8, 90])
        }
    });
    image.save(path).unwrap();
}

#[test]
fn carves_to_the_requested_size() {
    let dir = tempdir().unwrap();
    let (input, output) = (dir.path().join("in.png"), dir.path().join("out.png"));
    write_sample(&input);

    Command::cargo_bin("seamcarve")
        .unwrap()
        .arg(&input)
        .arg(&output)
        .args(&["--width", "7", "--height", "5"])
        .assert()
        .success();

    assert_eq!(image::open(&output).unwrap().dimensions(), (7, 5));
}

#[test]
fn missing_dimensions_leave_the_size_alone() {
    let dir = tempdir().unwrap();
    let (input, output) = (dir.path().join("in.png"), dir.path().join("out.png"));
    write_sample(&input);

    Command::cargo_bin("seamcarve")
        .unwrap()
        .arg(&input)
        .arg(&output)
        .args(&["-w", "10", "--grayscale", "--flip-horizontal"])
        .assert()
        .success();

    let carved = image::open(&output).unwrap().to_rgb8();
    assert_eq!(carved.dimensions(), (10, 8));
    assert!(carved.pixels().all(|p| p[0] == p[1] && p[1] == p[2]));
}

#[test]
fn writes_the_energy_map() {
    let dir = tempdir().unwrap();
    let (input, output) = (dir.path().join("in.png"), dir.path().join("energy.png"));
    write_sample(&input);

    Command::cargo_bin("seamcarve")
        .unwrap()
        .arg(&input)
        .arg(&output)
        .arg("--energy")
        .assert()
        .success();

    let energy = image::open(&output).unwrap().to_luma8();
    assert_eq!(energy.dimensions(), (12, 8));
    assert_eq!(energy.get_pixel(0, 0)[0], 255);
}

#[test]
fn refuses_to_upscale() {
    let dir = tempdir().unwrap();
    let (input, output) = (dir.path().join("in.png"), dir.path().join("out.png"));
    write_sample(&input);

    Command::cargo_bin("seamcarve")
        .unwrap()
        .arg(&input)
        .arg(&output)
        .args(&["--width", "20"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("upscale"));
    assert!(!output.exists());
}

#[test]
fn rejects_a_garbage_dimension() {
    let dir = tempdir().unwrap();
    let (input, output) = (dir.path().join("in.png"), dir.path().join("out.png"));
    write_sample(&input);

    Command::cargo_bin("seamcarve")
        .unwrap()
        .arg(&input)
        .arg(&output)
        .args(&["--height", "tall"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--height"));
}

#[test]
fn reports_unreadable_input() {
    let dir = tempdir().unwrap();
    Command::cargo_bin("seamcarve")
        .unwrap()
        .arg(dir.path().join("nothing-here.png"))
        .arg(dir.path().join("out.png"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not read"));
}
