//! Reader/writer for Steam's `remotecache.vdf`.
//!
//! The file records size, mtime and SHA-1 of every cloud-tracked file. Steam
//! treats a save whose record disagrees with the file as corrupt, so every
//! edited save has its record refreshed before the ledger is written back.
//! Only local-only setups are handled; cloud sync state is copied through
//! untouched.

use std::fmt::Write as _;
use std::fs;
use std::path::{self, Component, Path, PathBuf};
use std::time::UNIX_EPOCH;

use sha1::{Digest, Sha1};
use tracing::{debug, warn};

use crate::error::CoreError;

pub const LEDGER_FILE_NAME: &str = "remotecache.vdf";
const FILES_DIR: &str = "remote";
const CHANGE_NUMBER_KEY: &str = "ChangeNumber";

const ENTRY_KEY_COUNT: usize = 9;

/// Keys of one file block, in the order Steam writes them.
pub const ENTRY_KEYS: [&str; ENTRY_KEY_COUNT] = [
    "root",
    "size",
    "localtime",
    "time",
    "remotetime",
    "sha",
    "syncstate",
    "persiststate",
    "platformstosync2",
];

/// One tracked file. Values are kept as the strings found in the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry {
    pub filename: String,
    pub root: String,
    pub size: String,
    pub localtime: String,
    pub time: String,
    pub remotetime: String,
    pub sha: String,
    pub syncstate: String,
    pub persiststate: String,
    pub platformstosync2: String,
}

impl LedgerEntry {
    /// Key/value pairs in `ENTRY_KEYS` order.
    fn pairs(&self) -> [(&'static str, &str); ENTRY_KEY_COUNT] {
        [
            (ENTRY_KEYS[0], &self.root),
            (ENTRY_KEYS[1], &self.size),
            (ENTRY_KEYS[2], &self.localtime),
            (ENTRY_KEYS[3], &self.time),
            (ENTRY_KEYS[4], &self.remotetime),
            (ENTRY_KEYS[5], &self.sha),
            (ENTRY_KEYS[6], &self.syncstate),
            (ENTRY_KEYS[7], &self.persiststate),
            (ENTRY_KEYS[8], &self.platformstosync2),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncLedger {
    path: PathBuf,
    game_id: u64,
    change_number: u64,
    entries: Vec<LedgerEntry>,
}

impl SyncLedger {
    /// Ledger that governs `save_path`: `remotecache.vdf` in the parent of
    /// the save's directory. `.` and `..` are resolved, so every spelling of
    /// one directory maps to the same ledger path.
    pub fn locate_for(save_path: &Path) -> Result<PathBuf, CoreError> {
        let absolute = normalize_lexically(
            &path::absolute(save_path).map_err(|source| CoreError::io(save_path, source))?,
        );
        let save_dir = absolute.parent().unwrap_or(&absolute);
        let ledger_dir = save_dir.parent().unwrap_or(save_dir);
        Ok(ledger_dir.join(LEDGER_FILE_NAME))
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| CoreError::io(path, source))?;
        Self::parse(&text, path)
    }

    /// Parse ledger text. Any structurally unexpected line is an error.
    pub fn parse(text: &str, path: impl Into<PathBuf>) -> Result<Self, CoreError> {
        let path = path.into();
        let mut lines = Lines::new(text, &path);

        let first = lines.next_line()?;
        let game_id = lines.number(unquote(first))?;
        lines.expect("{")?;

        let change = lines.next_line()?;
        let (key, value) = split_pair(change);
        if key != CHANGE_NUMBER_KEY {
            return Err(lines.error(format!("expected \"{CHANGE_NUMBER_KEY}\", found {change:?}")));
        }
        let change_number = lines.number(value)?;

        let mut entries = Vec::new();
        loop {
            let line = lines.next_line()?;
            if line == "}" {
                break;
            }
            entries.push(lines.entry(unquote(line))?);
        }

        Ok(Self {
            path,
            game_id,
            change_number,
            entries,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory holding the tracked files.
    pub fn files_dir(&self) -> PathBuf {
        self.path
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join(FILES_DIR)
    }

    pub fn game_id(&self) -> u64 {
        self.game_id
    }

    pub fn change_number(&self) -> u64 {
        self.change_number
    }

    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn entry(&self, filename: &str) -> Option<&LedgerEntry> {
        self.entries.iter().find(|e| e.filename == filename)
    }

    pub fn contains(&self, filename: &str) -> bool {
        self.entry(filename).is_some()
    }

    /// Refresh size, timestamps and hash of one record from the file on
    /// disk. `localtime` and `time` both become the file's mtime.
    pub fn resync(&mut self, filename: &str) -> Result<(), CoreError> {
        let file_path = self.files_dir().join(filename);
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.filename == filename)
            .ok_or_else(|| CoreError::LedgerEntryMissing {
                filename: filename.to_string(),
            })?;

        let meta = fs::metadata(&file_path).map_err(|source| CoreError::io(&file_path, source))?;
        let mtime = meta
            .modified()
            .map_err(|source| CoreError::io(&file_path, source))?
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_else(|_| {
                warn!(path = %file_path.display(), "mtime before unix epoch, recording 0");
                0
            });
        let bytes = fs::read(&file_path).map_err(|source| CoreError::io(&file_path, source))?;

        entry.size = meta.len().to_string();
        entry.localtime = mtime.to_string();
        entry.time = entry.localtime.clone();
        entry.sha = hex::encode(Sha1::digest(&bytes));
        debug!(filename, size = %entry.size, mtime, sha = %entry.sha, "ledger entry resynced");
        Ok(())
    }

    pub fn resync_all(&mut self) -> Result<(), CoreError> {
        let names: Vec<String> = self.entries.iter().map(|e| e.filename.clone()).collect();
        for name in names {
            self.resync(&name)?;
        }
        Ok(())
    }

    /// Serialize in Steam's layout: tab indentation, every value quoted,
    /// one trailing newline.
    pub fn render(&self) -> String {
        let mut out = String::new();
        writeln!(out, "\"{}\"", self.game_id).expect("writing to String cannot fail");
        out.push_str("{\n");
        writeln!(out, "\t\"{CHANGE_NUMBER_KEY}\"\t\t\"{}\"", self.change_number)
            .expect("writing to String cannot fail");
        for entry in &self.entries {
            writeln!(out, "\t\"{}\"", entry.filename).expect("writing to String cannot fail");
            out.push_str("\t{\n");
            for (key, value) in entry.pairs() {
                writeln!(out, "\t\t\"{key}\"\t\t\"{value}\"")
                    .expect("writing to String cannot fail");
            }
            out.push_str("\t}\n");
        }
        out.push_str("}\n");
        out
    }

    /// Write the ledger and add execute permission for user, group and
    /// other, matching what Steam leaves on these files.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), CoreError> {
        let path = path.as_ref();
        fs::write(path, self.render()).map_err(|source| CoreError::io(path, source))?;
        mark_executable(path)?;
        debug!(path = %path.display(), entries = self.entries.len(), "ledger written");
        Ok(())
    }

    pub fn overwrite(&self) -> Result<(), CoreError> {
        self.write_to(&self.path)
    }
}

#[cfg(unix)]
fn mark_executable(path: &Path) -> Result<(), CoreError> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path)
        .map_err(|source| CoreError::io(path, source))?
        .permissions();
    perms.set_mode(perms.mode() | 0o111);
    fs::set_permissions(path, perms).map_err(|source| CoreError::io(path, source))
}

#[cfg(not(unix))]
fn mark_executable(_path: &Path) -> Result<(), CoreError> {
    Ok(())
}

/// Drop `.` and resolve `..` without touching the filesystem.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}

fn unquote(s: &str) -> &str {
    s.trim_matches('"')
}

/// First and last tab-separated parts, unquoted.
fn split_pair(line: &str) -> (&str, &str) {
    let mut parts = line.split('\t');
    let key = parts.next().unwrap_or_default();
    let value = parts.next_back().unwrap_or(key);
    (unquote(key), unquote(value))
}

/// Trimmed-line cursor that remembers its position for error reporting.
struct Lines<'a> {
    inner: std::iter::Enumerate<std::str::Lines<'a>>,
    path: &'a Path,
    line: usize,
}

impl<'a> Lines<'a> {
    fn new(text: &'a str, path: &'a Path) -> Self {
        Self {
            inner: text.lines().enumerate(),
            path,
            line: 0,
        }
    }

    fn error(&self, message: String) -> CoreError {
        CoreError::LedgerFormat {
            path: self.path.to_path_buf(),
            line: self.line,
            message,
        }
    }

    fn next_line(&mut self) -> Result<&'a str, CoreError> {
        match self.inner.next() {
            Some((index, line)) => {
                self.line = index + 1;
                Ok(line.trim())
            }
            None => Err(self.error("unexpected end of file".to_string())),
        }
    }

    fn expect(&mut self, wanted: &str) -> Result<(), CoreError> {
        let line = self.next_line()?;
        if line != wanted {
            return Err(self.error(format!("expected {wanted:?}, found {line:?}")));
        }
        Ok(())
    }

    fn number(&self, value: &str) -> Result<u64, CoreError> {
        value
            .parse()
            .map_err(|_| self.error(format!("expected a number, found {value:?}")))
    }

    fn entry(&mut self, filename: &str) -> Result<LedgerEntry, CoreError> {
        self.expect("{")?;
        let mut values: [Option<String>; ENTRY_KEY_COUNT] = Default::default();
        loop {
            let line = self.next_line()?;
            if line == "}" {
                break;
            }
            let (key, value) = split_pair(line);
            match ENTRY_KEYS.iter().position(|&k| k == key) {
                Some(slot) => values[slot] = Some(value.to_string()),
                None => return Err(self.error(format!("unknown key {key:?} for {filename}"))),
            }
        }

        let mut take = |slot: usize| {
            values[slot]
                .take()
                .ok_or_else(|| self.error(format!("{filename} has no {:?}", ENTRY_KEYS[slot])))
        };
        Ok(LedgerEntry {
            filename: filename.to_string(),
            root: take(0)?,
            size: take(1)?,
            localtime: take(2)?,
            time: take(3)?,
            remotetime: take(4)?,
            sha: take(5)?,
            syncstate: take(6)?,
            persiststate: take(7)?,
            platformstosync2: take(8)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::{SyncLedger, normalize_lexically};
    use crate::error::CoreError;

    const SAMPLE: &str = "\"834530\"\n{\n\t\"ChangeNumber\"\t\t\"12\"\n\t\"SaveData0000.sav\"\n\t{\n\t\t\"root\"\t\t\"0\"\n\t\t\"size\"\t\t\"162800\"\n\t\t\"localtime\"\t\t\"1616181818\"\n\t\t\"time\"\t\t\"1616181817\"\n\t\t\"remotetime\"\t\t\"1616181817\"\n\t\t\"sha\"\t\t\"0123456789abcdef0123456789abcdef01234567\"\n\t\t\"syncstate\"\t\t\"1\"\n\t\t\"persiststate\"\t\t\"0\"\n\t\t\"platformstosync2\"\t\t\"-1\"\n\t}\n}\n";

    #[test]
    fn parse_then_render_is_byte_identical() {
        let ledger = SyncLedger::parse(SAMPLE, "/tmp/remotecache.vdf").expect("sample should parse");
        assert_eq!(ledger.game_id(), 834530);
        assert_eq!(ledger.change_number(), 12);
        let entry = ledger.entry("SaveData0000.sav").expect("entry should exist");
        assert_eq!(entry.time, "1616181817");
        assert_eq!(entry.platformstosync2, "-1");
        assert_eq!(ledger.render(), SAMPLE);
    }

    #[test]
    fn missing_key_is_a_format_error() {
        let broken = SAMPLE.replace("\t\t\"sha\"\t\t\"0123456789abcdef0123456789abcdef01234567\"\n", "");
        assert!(matches!(
            SyncLedger::parse(&broken, "r.vdf"),
            Err(CoreError::LedgerFormat { .. })
        ));
    }

    #[test]
    fn truncated_ledger_reports_line() {
        let truncated = &SAMPLE[..SAMPLE.find("\t}").expect("block end")];
        match SyncLedger::parse(truncated, "r.vdf") {
            Err(CoreError::LedgerFormat { line, message, .. }) => {
                assert_eq!(line, 14);
                assert!(message.contains("end of file"), "{message}");
            }
            other => panic!("expected a format error, got {other:?}"),
        }
    }

    #[test]
    fn change_number_line_is_required() {
        let text = "\"834530\"\n{\n\t\"Other\"\t\t\"1\"\n}\n";
        assert!(matches!(
            SyncLedger::parse(text, "r.vdf"),
            Err(CoreError::LedgerFormat { line: 3, .. })
        ));
    }

    #[test]
    fn dot_segments_are_resolved() {
        assert_eq!(
            normalize_lexically(Path::new("/games/y0/remote/../remote/./SaveData0001.sav")),
            Path::new("/games/y0/remote/SaveData0001.sav")
        );
        assert_eq!(normalize_lexically(Path::new("/../a")), Path::new("/a"));
    }

    #[cfg(unix)]
    #[test]
    fn every_spelling_of_a_directory_shares_one_ledger() {
        let plain = SyncLedger::locate_for(Path::new("/games/y0/remote/SaveData0000.sav"))
            .expect("absolute path");
        let dotted =
            SyncLedger::locate_for(Path::new("/games/y0/remote/../remote/./SaveData0001.sav"))
                .expect("absolute path");
        assert_eq!(plain, Path::new("/games/y0/remotecache.vdf"));
        assert_eq!(dotted, plain);
    }
}
