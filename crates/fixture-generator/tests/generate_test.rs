//! 夹具生成的集成测试
//!
//! 通过公开 API 验证输出文件的行数、去重、框架行和可复现性

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use fixture_generator::cli::load_spec_from_file;
use fixture_generator::fixtures::{FixtureSpec, PredefinedFixtures};
use fixture_generator::generators::{BEGIN_TRANSACTION, COMMIT, FixtureGenerator};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn write(spec: FixtureSpec, path: &Path, seed: u64) -> String {
    let generator = FixtureGenerator::new(spec).unwrap();
    generator
        .write_to(path, &mut ChaCha8Rng::seed_from_u64(seed))
        .unwrap();
    fs::read_to_string(path).unwrap()
}

/// 去掉事务框架行，只保留数据语句
fn data_lines(content: &str) -> Vec<&str> {
    content
        .lines()
        .filter(|l| *l != BEGIN_TRANSACTION && *l != COMMIT)
        .collect()
}

fn small_booking_spec(count: usize, dedupe: bool) -> FixtureSpec {
    FixtureSpec::builder("small", "Bookings")
        .record_count(count)
        .integer_inclusive("EventId", 1..=3)
        .integer_inclusive("UserId", 1..=2)
        .dedupe(dedupe)
        .wrap_in_transaction(dedupe)
        .build()
}

// ==================== 行数与去重 ====================

#[test]
fn test_deduped_booking_scenario_never_repeats() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bookings.sql");

    for seed in 0..30 {
        let content = write(small_booking_spec(5, true), &path, seed);
        let lines = data_lines(&content);

        assert!(lines.len() <= 5);
        assert!(lines.len() <= 6);
        let unique: HashSet<_> = lines.iter().collect();
        assert_eq!(unique.len(), lines.len(), "seed {} 产生了重复行", seed);
    }
}

#[test]
fn test_attendee_scenario_has_exact_count() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("event_attendees.sql");

    for seed in 0..30 {
        let content = write(small_booking_spec(3, false), &path, seed);
        assert_eq!(content.lines().count(), 3);
        assert!(content.ends_with(";\n"));
    }
}

#[test]
fn test_predefined_bookings_are_unique() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bookings.sql");

    let content = write(PredefinedFixtures::bookings(), &path, 7);
    let lines = data_lines(&content);

    assert!(lines.len() <= 100);
    let unique: HashSet<_> = lines.iter().collect();
    assert_eq!(unique.len(), lines.len());
    for line in lines {
        assert!(line.starts_with("INSERT INTO Bookings (EventId, UserId) VALUES ("));
        assert!(line.ends_with(");"));
    }
}

// ==================== 框架行 ====================

#[test]
fn test_transaction_framing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("community_members.sql");

    let content = write(PredefinedFixtures::community_members(), &path, 3);

    assert_eq!(content.lines().next(), Some(BEGIN_TRANSACTION));
    assert!(content.ends_with("\nCOMMIT;"));
    assert!(!content.ends_with('\n'));
}

#[test]
fn test_zero_records() {
    let dir = tempfile::tempdir().unwrap();
    let wrapped = dir.path().join("wrapped.sql");
    let unwrapped = dir.path().join("unwrapped.sql");

    assert_eq!(
        write(small_booking_spec(0, true), &wrapped, 1),
        "BEGIN TRANSACTION;\nCOMMIT;"
    );
    assert_eq!(write(small_booking_spec(0, false), &unwrapped, 1), "");
}

// ==================== 可复现性 ====================

#[test]
fn test_same_seed_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.sql");
    let b = dir.path().join("b.sql");

    for spec in PredefinedFixtures::all() {
        assert_eq!(write(spec.clone(), &a, 2024), write(spec, &b, 2024));
    }
}

#[test]
fn test_rerun_overwrites_previous_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("event_attendees.sql");

    write(PredefinedFixtures::event_attendees(), &path, 1);
    let content = write(PredefinedFixtures::event_attendees().with_record_count(2), &path, 2);

    assert_eq!(content.lines().count(), 2);
}

// ==================== 社区 ====================

#[test]
fn test_communities_follow_name_order_and_genre() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("communities.sql");

    let content = write(PredefinedFixtures::communities(), &path, 11);
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(lines.len(), 100);
    assert!(lines[0].starts_with(
        "INSERT INTO Communities (Name, Genre, Description) VALUES ('Harmonic Horizons', '"
    ));
    assert!(lines[99].contains("'Soundwave Explorers'"));

    for line in lines {
        // VALUES ('<name>', '<genre>', '<description>');
        let values = line.split(" VALUES (").nth(1).unwrap();
        let parts: Vec<&str> = values.split("', '").collect();
        assert_eq!(parts.len(), 3);
        let genre = parts[1];
        assert!(parts[2].contains(genre), "描述未包含流派: {}", line);
    }
}

// ==================== 自定义夹具与错误 ====================

#[test]
fn test_custom_spec_from_file() {
    let spec_path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/venues.yaml");
    let spec = load_spec_from_file(spec_path.to_str().unwrap()).unwrap();
    assert_eq!(spec.output_file_name(), "venues.sql");

    let dir = tempfile::tempdir().unwrap();
    let content = write(spec, &dir.path().join("venues.sql"), 5);
    let lines = data_lines(&content);

    assert!(lines.len() <= 12);
    for line in lines {
        assert!(line.starts_with("INSERT INTO Venues (City, Capacity, Blurb) VALUES ('"));
    }
}

#[test]
fn test_missing_output_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no_such_dir").join("bookings.sql");
    let generator = FixtureGenerator::new(PredefinedFixtures::bookings()).unwrap();

    let err = generator
        .write_to(&path, &mut ChaCha8Rng::seed_from_u64(0))
        .unwrap_err();

    assert_eq!(err.code(), "IO_ERROR");
    assert!(!path.exists());
}

#[test]
fn test_invalid_spec_rejected_before_writing() {
    let spec = FixtureSpec::builder("broken", "Broken")
        .record_count(1)
        .choice("Genre", Vec::<String>::new())
        .build();

    let err = FixtureGenerator::new(spec).unwrap_err();
    assert!(err.is_spec_error());
}
