// This file holds the patch table: which files get which prefix.
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

/// Files in the ODPI-C tree that need a platform shim before they build on
/// Windows, paired with the block that must open each file. Paths are
/// relative to the working directory the tool is run from.
const BUILTIN_PATCHES: &[(&str, &str)] = &[
    (
        "libs/odpi/test/test_4500_sessionless_txn.c",
        r#"#ifdef _WIN32
    #include <windows.h>
    #define sleep(s) Sleep((s) * 1000)
#else
    #include <unistd.h>
#endif"#,
    ),
    (
        "libs/odpi/samples/DemoBFILE.c",
        r#"#if defined(_WIN32)
    #include <direct.h>
    #define chdir _chdir
#else
    #include <unistd.h>
#endif"#,
    ),
];

/// One file and the text block it must start with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchEntry {
    pub path: PathBuf,
    pub body: String,
}

impl PatchEntry {
    pub fn new(path: impl Into<PathBuf>, body: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            body: body.into(),
        }
    }

    /// The body with surrounding whitespace removed. This is both what gets
    /// compared against the start of the file and what gets written.
    pub fn normalized_body(&self) -> &str {
        self.body.trim()
    }
}

/// Ordered mapping from target path to patch body.
///
/// Paths are unique: inserting a path that is already present replaces its
/// body and keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchTable {
    entries: Vec<PatchEntry>,
}

impl PatchTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The table compiled into the binary.
    pub fn builtin() -> &'static PatchTable {
        static INSTANCE: OnceCell<PatchTable> = OnceCell::new();
        INSTANCE.get_or_init(|| BUILTIN_PATCHES.iter().copied().collect())
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, body: impl Into<String>) {
        let entry = PatchEntry::new(path, body);
        match self.entries.iter_mut().find(|e| e.path == entry.path) {
            Some(existing) => existing.body = entry.body,
            None => self.entries.push(entry),
        }
    }

    pub fn get(&self, path: &Path) -> Option<&PatchEntry> {
        self.entries.iter().find(|e| e.path == path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PatchEntry> {
        self.entries.iter()
    }
}

impl<P: Into<PathBuf>, B: Into<String>> FromIterator<(P, B)> for PatchTable {
    fn from_iter<I: IntoIterator<Item = (P, B)>>(iter: I) -> Self {
        let mut table = PatchTable::new();
        for (path, body) in iter {
            table.insert(path, body);
        }
        table
    }
}

impl<'a> IntoIterator for &'a PatchTable {
    type Item = &'a PatchEntry;
    type IntoIter = std::slice::Iter<'a, PatchEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_lists_odpi_sources_in_order() {
        let table = PatchTable::builtin();
        let paths: Vec<_> = table.iter().map(|e| e.path.clone()).collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("libs/odpi/test/test_4500_sessionless_txn.c"),
                PathBuf::from("libs/odpi/samples/DemoBFILE.c"),
            ]
        );
    }

    #[test]
    fn builtin_table_is_initialized_once() {
        assert!(std::ptr::eq(PatchTable::builtin(), PatchTable::builtin()));
    }

    #[test]
    fn builtin_bodies_are_windows_shims() {
        let table = PatchTable::builtin();
        let txn = table
            .get(Path::new("libs/odpi/test/test_4500_sessionless_txn.c"))
            .unwrap();
        assert!(txn.body.starts_with("#ifdef _WIN32\n"));
        assert!(txn.body.contains("#define sleep(s) Sleep((s) * 1000)"));
        assert!(txn.body.ends_with("#endif"));

        let bfile = table.get(Path::new("libs/odpi/samples/DemoBFILE.c")).unwrap();
        assert!(bfile.body.contains("#define chdir _chdir"));
    }

    #[test]
    fn insert_existing_path_replaces_body_in_place() {
        let mut table = PatchTable::new();
        table.insert("a.c", "// a");
        table.insert("b.c", "// b");
        table.insert("a.c", "// a2");

        assert_eq!(table.len(), 2);
        let first = table.iter().next().unwrap();
        assert_eq!(first, &PatchEntry::new("a.c", "// a2"));
    }

    #[test]
    fn new_table_is_empty_until_insert() {
        let mut table = PatchTable::new();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);

        table.insert("a.c", "// a");
        assert!(!table.is_empty());
        assert!(!PatchTable::builtin().is_empty());
    }

    #[test]
    fn normalized_body_trims_surrounding_whitespace() {
        let entry = PatchEntry::new("bar.c", "\n  #include <bar.h>  \n");
        assert_eq!(entry.normalized_body(), "#include <bar.h>");
    }

    #[test]
    fn normalized_body_keeps_inner_indentation() {
        let entry = PatchEntry::new("x.c", "\n#if A\n    #include <x.h>\n#endif\n\n");
        assert_eq!(entry.normalized_body(), "#if A\n    #include <x.h>\n#endif");
    }
}
