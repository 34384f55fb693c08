use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use y0_core::{CoreError, CoreErrorCode, SyncLedger};

const LEDGER: &str = "\"834530\"\n{\n\t\"ChangeNumber\"\t\t\"7\"\n\t\"SaveData0000.sav\"\n\t{\n\t\t\"root\"\t\t\"0\"\n\t\t\"size\"\t\t\"1\"\n\t\t\"localtime\"\t\t\"100\"\n\t\t\"time\"\t\t\"99\"\n\t\t\"remotetime\"\t\t\"99\"\n\t\t\"sha\"\t\t\"stale\"\n\t\t\"syncstate\"\t\t\"1\"\n\t\t\"persiststate\"\t\t\"0\"\n\t\t\"platformstosync2\"\t\t\"-1\"\n\t}\n\t\"system.sav\"\n\t{\n\t\t\"root\"\t\t\"0\"\n\t\t\"size\"\t\t\"3\"\n\t\t\"localtime\"\t\t\"100\"\n\t\t\"time\"\t\t\"100\"\n\t\t\"remotetime\"\t\t\"100\"\n\t\t\"sha\"\t\t\"old\"\n\t\t\"syncstate\"\t\t\"1\"\n\t\t\"persiststate\"\t\t\"0\"\n\t\t\"platformstosync2\"\t\t\"-1\"\n\t}\n}\n";

fn temp_ledger_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before unix epoch")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("{prefix}_{}_{}", std::process::id(), nanos));
    fs::create_dir_all(dir.join("remote")).expect("temp dir should be creatable");
    fs::write(dir.join("remotecache.vdf"), LEDGER).expect("ledger fixture");
    fs::write(dir.join("remote/SaveData0000.sav"), b"abc").expect("save fixture");
    fs::write(dir.join("remote/system.sav"), b"xyz").expect("system fixture");
    dir
}

#[test]
fn ledger_is_found_next_to_the_remote_dir() {
    let dir = temp_ledger_dir("y0_ledger_locate");
    let located = SyncLedger::locate_for(&dir.join("remote/SaveData0000.sav"))
        .expect("absolute path should resolve");
    assert_eq!(located, dir.join("remotecache.vdf"));
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn resync_refreshes_size_time_and_hash() {
    let dir = temp_ledger_dir("y0_ledger_resync");
    let mut ledger = SyncLedger::open(dir.join("remotecache.vdf")).expect("fixture should parse");
    assert_eq!(ledger.files_dir(), dir.join("remote"));

    ledger.resync("SaveData0000.sav").expect("entry exists");
    let entry = ledger.entry("SaveData0000.sav").expect("entry exists").clone();
    assert_eq!(entry.size, "3");
    assert_eq!(entry.sha, "a9993e364706816aba3e25717850c26c9cd0d89d");
    assert_eq!(entry.localtime, entry.time);
    assert_eq!(entry.remotetime, "99");
    assert_eq!(entry.syncstate, "1");

    let mtime = fs::metadata(dir.join("remote/SaveData0000.sav"))
        .and_then(|m| m.modified())
        .expect("mtime")
        .duration_since(UNIX_EPOCH)
        .expect("after epoch")
        .as_secs();
    assert_eq!(entry.localtime, mtime.to_string());

    let untouched = ledger.entry("system.sav").expect("second entry");
    assert_eq!(untouched.sha, "old");
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn resync_twice_is_idempotent() {
    let dir = temp_ledger_dir("y0_ledger_idem");
    let mut ledger = SyncLedger::open(dir.join("remotecache.vdf")).expect("fixture should parse");
    ledger.resync_all().expect("both entries exist");
    let first = ledger.render();
    ledger.resync_all().expect("both entries exist");
    assert_eq!(ledger.render(), first);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn missing_entry_is_reported() {
    let dir = temp_ledger_dir("y0_ledger_missing");
    let mut ledger = SyncLedger::open(dir.join("remotecache.vdf")).expect("fixture should parse");
    let err = ledger.resync("SaveData0009.sav").expect_err("no such entry");
    assert!(matches!(err, CoreError::LedgerEntryMissing { .. }));
    assert_eq!(err.code(), CoreErrorCode::LedgerFormat);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn overwrite_round_trips_and_sets_execute_bits() {
    let dir = temp_ledger_dir("y0_ledger_write");
    let path = dir.join("remotecache.vdf");
    let mut ledger = SyncLedger::open(&path).expect("fixture should parse");
    ledger.resync("system.sav").expect("entry exists");
    ledger.overwrite().expect("write should succeed");

    let reread = SyncLedger::open(&path).expect("written ledger should parse");
    assert_eq!(reread.entries(), ledger.entries());
    assert_eq!(reread.change_number(), 7);
    let text = fs::read_to_string(&path).expect("ledger text");
    assert!(text.ends_with("\t}\n}\n"));

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = fs::metadata(&path).expect("metadata").permissions().mode();
        assert_eq!(mode & 0o111, 0o111);
    }
    let _ = fs::remove_dir_all(&dir);
}
