use std::path::{Path, PathBuf};
use std::time::Duration;
use treecp::Opts;
use treecp::engine::{
    CopierKind, JobConfig, destination_root_for, map_destination, normalize_lexically,
    resolve_absolute,
};
use treecp::utils::{apply_file_to_opts, format_duration, parse_treecp_toml};

// --- map_destination ---

#[test]
fn test_map_destination_shared_segment_not_duplicated() {
    let mapped = map_destination(
        Path::new("/a/b"),
        Path::new("/x/a"),
        Path::new("/a/b/c/d.txt"),
    );
    assert_eq!(mapped, PathBuf::from("/x/a/b/c/d.txt"));
}

#[test]
fn test_map_destination_no_shared_segments() {
    let mapped = map_destination(
        Path::new("/a/b"),
        Path::new("/x/y"),
        Path::new("/a/b/c/d.txt"),
    );
    assert_eq!(mapped, PathBuf::from("/x/y/b/c/d.txt"));
}

#[test]
fn test_map_destination_destination_ends_with_source_parent() {
    let mapped = map_destination(
        Path::new("/data/project"),
        Path::new("/backup/data"),
        Path::new("/data/project/src/main.rs"),
    );
    assert_eq!(mapped, PathBuf::from("/backup/data/project/src/main.rs"));
}

#[test]
fn test_map_destination_repeated_segment_names() {
    let mapped = map_destination(
        Path::new("/src/src"),
        Path::new("/src"),
        Path::new("/src/src/src/lib.rs"),
    );
    assert_eq!(mapped, PathBuf::from("/src/src/src/lib.rs"));
}

#[test]
fn test_map_destination_file_directly_under_root() {
    let mapped = map_destination(Path::new("/a/b"), Path::new("/x"), Path::new("/a/b/f"));
    assert_eq!(mapped, PathBuf::from("/x/b/f"));
}

#[test]
fn test_map_destination_filesystem_root_source() {
    let mapped = map_destination(Path::new("/"), Path::new("/x"), Path::new("/etc/hosts"));
    assert_eq!(mapped, PathBuf::from("/x/etc/hosts"));
}

#[test]
fn test_destination_root_for() {
    assert_eq!(
        destination_root_for(Path::new("/a/b"), Path::new("/x/y")),
        PathBuf::from("/x/y/b")
    );
    assert_eq!(
        destination_root_for(Path::new("/"), Path::new("/x/y")),
        PathBuf::from("/x/y")
    );
}

// --- normalize_lexically / resolve_absolute ---

#[test]
fn test_normalize_removes_cur_dir() {
    assert_eq!(
        normalize_lexically(Path::new("/a/./b/.")),
        PathBuf::from("/a/b")
    );
}

#[test]
fn test_normalize_folds_parent_dir() {
    assert_eq!(
        normalize_lexically(Path::new("/a/b/../c")),
        PathBuf::from("/a/c")
    );
}

#[test]
fn test_normalize_parent_dir_at_root_stays_at_root() {
    assert_eq!(normalize_lexically(Path::new("/../a")), PathBuf::from("/a"));
}

#[test]
fn test_normalize_keeps_leading_parent_of_relative_path() {
    assert_eq!(
        normalize_lexically(Path::new("../a/../b")),
        PathBuf::from("../b")
    );
}

#[test]
fn test_resolve_absolute_relative_path() {
    let cwd = std::env::current_dir().unwrap();
    assert_eq!(resolve_absolute(Path::new("foo/./bar")).unwrap(), cwd.join("foo/bar"));
}

#[test]
fn test_resolve_absolute_keeps_absolute_path() {
    assert_eq!(
        resolve_absolute(Path::new("/x/y/../z")).unwrap(),
        PathBuf::from("/x/z")
    );
}

#[test]
fn test_resolve_absolute_empty_path_fails() {
    assert!(resolve_absolute(Path::new("")).is_err());
}

// --- format_duration ---

#[test]
fn test_format_duration_units() {
    assert_eq!(format_duration(Duration::from_millis(12)), "12 msec");
    assert_eq!(format_duration(Duration::from_millis(1500)), "1.50 sec");
    assert_eq!(format_duration(Duration::from_secs(120)), "2.00 min");
    assert_eq!(format_duration(Duration::from_secs(5400)), "1.50 hours");
}

#[test]
fn test_format_duration_boundaries() {
    assert_eq!(format_duration(Duration::from_millis(999)), "999 msec");
    assert_eq!(format_duration(Duration::from_secs(1)), "1.00 sec");
    assert_eq!(format_duration(Duration::from_secs(60)), "1.00 min");
    assert_eq!(format_duration(Duration::from_secs(3600)), "1.00 hours");
}

// --- config file / options ---

#[test]
fn test_config_file_overrides_defaults() {
    let file = parse_treecp_toml(
        r#"
        [settings]
        workers = 3
        verbose = true
        skip_existing = true
        copier = "native"
        "#,
    )
    .unwrap();
    let mut opts = Opts::default();
    apply_file_to_opts(&file, &mut opts);
    assert_eq!(opts.workers, Some(3));
    assert!(opts.verbose);
    assert!(opts.skip_existing);
    assert_eq!(opts.copier, CopierKind::Native);
}

#[test]
fn test_config_file_partial_keeps_other_fields() {
    let file = parse_treecp_toml("[settings]\nverbose = true\n").unwrap();
    let mut opts = Opts {
        workers: Some(7),
        ..Default::default()
    };
    apply_file_to_opts(&file, &mut opts);
    assert_eq!(opts.workers, Some(7));
    assert!(opts.verbose);
    assert!(!opts.skip_existing);
    assert_eq!(opts.copier, CopierKind::Stream);
}

#[test]
fn test_config_file_unknown_key_rejected() {
    assert!(parse_treecp_toml("[settings]\nthreads = 4\n").is_err());
}

#[test]
fn test_job_config_defaults() {
    let config = JobConfig::default();
    assert!(config.workers >= 1);
    assert!(!config.verbose);
    assert!(config.overwrite());
}

#[test]
fn test_job_config_skip_inverts_overwrite() {
    let config = JobConfig::default().skip_if_exists(true).with_workers(0);
    assert!(!config.overwrite());
    assert_eq!(config.workers, 1);
}

#[test]
fn test_job_config_from_opts() {
    let opts = Opts {
        workers: Some(2),
        verbose: true,
        skip_existing: true,
        ..Default::default()
    };
    let config = JobConfig::from(&opts);
    assert_eq!(config.workers, 2);
    assert!(config.verbose);
    assert!(config.skip_if_exists);
}
