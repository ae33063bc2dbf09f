use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use loctally::config::BackendChoice;
use loctally::{Config, LocError, Snapshot};
use tempfile::TempDir;

fn write_file(path: &Path, contents: &str) {
    fs::write(path, contents).expect("failed to write test file");
}

fn populate(root: &Path) {
    let src = root.join("src");
    let docs = root.join("docs");
    fs::create_dir_all(&src).expect("failed to create src");
    fs::create_dir_all(&docs).expect("failed to create docs");
    for n in 0..30 {
        write_file(
            &src.join(format!("m{n}.rs")),
            "/// doc\nfn f() {\n    let s = \"// not a comment\";\n}\n\n",
        );
        write_file(&src.join(format!("q{n}.sql")), "SELECT 1; -- trailing\n-- note\n");
    }
    write_file(&docs.join("index.rst.txt"), "Title\n=====\n\nBody\n");
    write_file(&docs.join("CMakeLists.txt"), "# build\nproject(x)\n");
    write_file(&docs.join("notes.unknownext"), "?\n");
}

fn by_language(snapshot: &Snapshot) -> BTreeMap<&'static str, (u64, u64, u64, u64)> {
    snapshot
        .records
        .iter()
        .map(|r| {
            (
                r.language,
                (r.files, r.lines_total, r.lines_blank, r.lines_comment),
            )
        })
        .collect()
}

fn run_with(root: &Path, backend: BackendChoice) -> Snapshot {
    let config = Config::new(root)
        .expect("valid root")
        .with_backend(backend)
        .with_threads(4);
    loctally::run(config).expect("run succeeds")
}

#[test]
fn sync_and_pool_backends_produce_identical_counts() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    populate(temp_dir.path());

    let sync = run_with(temp_dir.path(), BackendChoice::Sync);
    let pool = run_with(temp_dir.path(), BackendChoice::ThreadPool);
    let auto = run_with(temp_dir.path(), BackendChoice::Auto);

    assert_eq!(sync.totals, pool.totals);
    assert_eq!(sync.totals, auto.totals);
    assert_eq!(by_language(&sync), by_language(&pool));
    assert_eq!(sync.totals.files, 62);
    assert_eq!(sync.totals.ignored, 1);
}

#[test]
fn repeated_runs_are_stable() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    populate(temp_dir.path());
    let first = run_with(temp_dir.path(), BackendChoice::Sync);
    let second = run_with(temp_dir.path(), BackendChoice::Sync);
    assert_eq!(first, second, "synchronous runs keep insertion order too");
}

#[test]
fn totals_never_undercount_blank_and_comment() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    populate(temp_dir.path());
    let snapshot = run_with(temp_dir.path(), BackendChoice::ThreadPool);
    for record in &snapshot.records {
        assert!(
            record.lines_total >= record.lines_blank + record.lines_comment,
            "record {record:?}"
        );
    }
    let totals = snapshot.totals;
    assert!(totals.lines_total >= totals.lines_blank + totals.lines_comment);
}

#[test]
fn whole_name_and_longest_suffix_win() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    populate(temp_dir.path());
    let snapshot = run_with(temp_dir.path(), BackendChoice::Sync);

    let rst = snapshot
        .record("reStructuredText")
        .expect("index.rst.txt should map by its longest suffix");
    assert_eq!(rst.extension_key, ".rst.txt");
    assert!(snapshot.record("CMake").is_some(), "records: {:?}", snapshot.records);
    assert!(snapshot.record("Text").is_none(), "no file should fall back to .txt");
}

#[test]
fn single_file_root_and_no_recurse() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    populate(temp_dir.path());

    let file = temp_dir.path().join("src").join("m0.rs");
    let config = Config::new(&file).expect("valid root");
    let snapshot = loctally::run(config).expect("run succeeds");
    assert_eq!(snapshot.totals.files, 1);
    assert_eq!(snapshot.record("Rust").map(|r| r.lines_comment), Some(1));

    let config = Config::new(temp_dir.path())
        .expect("valid root")
        .with_recurse(false);
    let snapshot = loctally::run(config).expect("run succeeds");
    assert_eq!(snapshot.totals.files, 0, "nothing lives at the top level");
}

#[test]
fn missing_root_is_a_configuration_error() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let err = Config::new(temp_dir.path().join("absent")).expect_err("must fail");
    assert!(matches!(err, LocError::Configuration(_)), "got {err:?}");
}

#[cfg(unix)]
#[test]
fn fifo_with_mapped_name_does_not_stall_the_run() {
    use std::process::Command;
    use std::sync::mpsc;
    use std::thread;
    use std::time::Duration;

    let temp_dir = TempDir::new().expect("failed to create temp dir");
    write_file(&temp_dir.path().join("ok.c"), "int x;\n");
    let status = Command::new("mkfifo")
        .arg(temp_dir.path().join("pipe.c"))
        .status()
        .expect("failed to run mkfifo");
    assert!(status.success(), "mkfifo failed");

    for backend in [BackendChoice::Sync, BackendChoice::ThreadPool] {
        let root = temp_dir.path().to_path_buf();
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let _ = tx.send(run_with(&root, backend));
        });
        let snapshot = rx
            .recv_timeout(Duration::from_secs(10))
            .unwrap_or_else(|_| panic!("{backend:?} run stalled on a FIFO"));
        assert_eq!(snapshot.totals.files, 1, "{backend:?}: only ok.c is counted");
        assert_eq!(snapshot.totals.ignored, 0);
    }
}
