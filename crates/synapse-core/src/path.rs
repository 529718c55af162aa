//! Vault path model.
//!
//! Paths here are vault-relative strings (`folder/sub/note.md`), not OS
//! paths. Parsing is total: any input, however malformed, yields a value
//! with empty-string fields rather than an error.

/// The portion of a trigger string that contributes path attributes:
/// everything before the first `|` (alias) or `#` (header) marker.
pub(crate) fn path_portion(input: &str) -> &str {
    let end = match (input.find('|'), input.find('#')) {
        (Some(b), Some(h)) => b.min(h),
        (Some(b), None) => b,
        (None, Some(h)) => h,
        (None, None) => input.len(),
    };
    &input[..end]
}

/// A file-like vault path, split into folder, title, and extension.
///
/// Casing of the folder and title is preserved as typed; the contained
/// [`FolderPath`] is lower-cased (folder identity is case-insensitive
/// across the whole matching layer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePath {
    vault_path: String,
    folder: FolderPath,
    title: String,
    extension: String,
    in_root: bool,
}

impl FilePath {
    /// Parse an arbitrary string into a file path.
    ///
    /// Steps: trim, drop any `|…`/`#…` suffix, split the folder at the
    /// last `/`, split the extension at the last `.` of the remaining
    /// file name.
    ///
    /// # Examples
    ///
    /// ```
    /// use synapse_core::path::FilePath;
    ///
    /// let p = FilePath::parse("Folder1/Note 1.md");
    /// assert_eq!(p.vault_path(), "Folder1/Note 1.md");
    /// assert_eq!(p.title(), "Note 1");
    /// assert_eq!(p.extension(), "md");
    /// assert_eq!(p.folder_path().vault_path(), "folder1");
    ///
    /// let root = FilePath::parse("note|shown as");
    /// assert_eq!(root.vault_path(), "note");
    /// assert!(root.note_is_in_root());
    /// ```
    pub fn parse(input: &str) -> Self {
        let path_part = path_portion(input.trim());

        let (folder_part, file_name) = match path_part.rfind('/') {
            Some(i) => (&path_part[..i], &path_part[i + 1..]),
            None => ("", path_part),
        };

        // Last dot wins. A dot in first position ("`.md`") leaves the
        // title empty and everything after the dot as the extension.
        let (title, extension) = match file_name.rfind('.') {
            Some(i) => (&file_name[..i], &file_name[i + 1..]),
            None => (file_name, ""),
        };

        let in_root = folder_part.is_empty() || folder_part == "/";

        FilePath {
            vault_path: path_part.to_string(),
            folder: FolderPath::parse(folder_part),
            title: title.to_string(),
            extension: extension.to_string(),
            in_root,
        }
    }

    /// The path as typed (trimmed, suffix stripped), extension included.
    pub fn vault_path(&self) -> &str {
        &self.vault_path
    }

    /// Path without the extension. For non-root notes this is the
    /// lower-cased folder path joined with the original-case title,
    /// which is also exactly what a wiki link target looks like.
    pub fn vault_path_without_extension(&self) -> String {
        if self.in_root {
            self.title.clone()
        } else {
            format!("{}/{}", self.folder.vault_path(), self.title)
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn folder_path(&self) -> &FolderPath {
        &self.folder
    }

    /// File name segment, extension included when one was present.
    pub fn file_name_with_possible_extension(&self) -> &str {
        match self.vault_path.rfind('/') {
            Some(i) => &self.vault_path[i + 1..],
            None => &self.vault_path,
        }
    }

    /// True when the folder segment was empty or `/`.
    pub fn note_is_in_root(&self) -> bool {
        self.in_root
    }

    /// True only for a degenerate empty path.
    pub fn is_root(&self) -> bool {
        self.vault_path.is_empty() || self.vault_path == "/"
    }
}

/// A folder vault path. Stored fully lower-cased, so two `FolderPath`
/// values compare equal whenever they name the same folder in any
/// casing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderPath {
    vault_path: String,
    title: String,
}

impl FolderPath {
    /// Parse a string into a folder path. Total, like [`FilePath::parse`].
    ///
    /// # Examples
    ///
    /// ```
    /// use synapse_core::path::FolderPath;
    ///
    /// let f = FolderPath::parse("Folder1/Sub/");
    /// assert_eq!(f.vault_path(), "folder1/sub/");
    /// assert_eq!(f.title(), "sub");
    /// assert!(FolderPath::parse("").is_root());
    /// ```
    pub fn parse(input: &str) -> Self {
        let vault_path = input.trim().to_lowercase();
        let title = vault_path
            .split('/')
            .rev()
            .find(|segment| !segment.is_empty())
            .unwrap_or("")
            .to_string();
        FolderPath { vault_path, title }
    }

    pub fn root() -> Self {
        FolderPath {
            vault_path: String::new(),
            title: String::new(),
        }
    }

    /// The lower-cased folder path.
    pub fn vault_path(&self) -> &str {
        &self.vault_path
    }

    /// Last non-empty path segment.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_root(&self) -> bool {
        self.vault_path.is_empty() || self.vault_path == "/"
    }

    /// The containing folder, or this folder itself when already root.
    pub fn parent_or_this(&self) -> FolderPath {
        if self.is_root() {
            return self.clone();
        }
        let trimmed = self.vault_path.trim_end_matches('/');
        match trimmed.rfind('/') {
            Some(i) => FolderPath::parse(&trimmed[..i]),
            None => FolderPath::root(),
        }
    }

    /// Case-insensitive prefix test against another vault path. The root
    /// is an ancestor of everything. Note this is a raw string-prefix
    /// check with no segment-boundary guard: `myfolder` counts as an
    /// ancestor of `myfolderx/note`.
    pub fn is_ancestor_of(&self, other_vault_path: &str) -> bool {
        if self.is_root() {
            return true;
        }
        other_vault_path
            .to_lowercase()
            .starts_with(&self.vault_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_folder_title_and_extension() {
        let p = FilePath::parse("Folder1/Folder2/Note name.md");
        assert_eq!(p.vault_path(), "Folder1/Folder2/Note name.md");
        assert_eq!(p.title(), "Note name");
        assert_eq!(p.extension(), "md");
        assert_eq!(p.folder_path().vault_path(), "folder1/folder2");
        assert_eq!(p.file_name_with_possible_extension(), "Note name.md");
        assert!(!p.note_is_in_root());
    }

    #[test]
    fn path_without_folder_is_in_root() {
        let p = FilePath::parse("My note.md");
        assert!(p.note_is_in_root());
        assert_eq!(p.vault_path_without_extension(), "My note");
        assert!(p.folder_path().is_root());
    }

    #[test]
    fn alias_and_header_suffixes_are_not_part_of_the_path() {
        let p = FilePath::parse("folder/note.md|display text");
        assert_eq!(p.vault_path(), "folder/note.md");

        let p = FilePath::parse("folder/note#Some heading");
        assert_eq!(p.vault_path(), "folder/note");
        assert_eq!(p.title(), "note");

        // First separator wins, whichever it is.
        let p = FilePath::parse("note#head|alias");
        assert_eq!(p.vault_path(), "note");
        let p = FilePath::parse("note|alias#head");
        assert_eq!(p.vault_path(), "note");
    }

    #[test]
    fn input_is_trimmed_before_parsing() {
        let p = FilePath::parse("  folder/note.md  ");
        assert_eq!(p.vault_path(), "folder/note.md");
    }

    #[test]
    fn no_extension_means_empty_extension() {
        let p = FilePath::parse("folder/note");
        assert_eq!(p.title(), "note");
        assert_eq!(p.extension(), "");
        assert_eq!(p.vault_path_without_extension(), "folder/note");
    }

    #[test]
    fn leading_dot_file_name_has_empty_title() {
        let p = FilePath::parse(".md");
        assert_eq!(p.title(), "");
        assert_eq!(p.extension(), "md");
    }

    #[test]
    fn last_dot_wins_for_the_extension() {
        let p = FilePath::parse("archive.tar.gz");
        assert_eq!(p.title(), "archive.tar");
        assert_eq!(p.extension(), "gz");
    }

    #[test]
    fn empty_input_yields_empty_fields() {
        let p = FilePath::parse("");
        assert_eq!(p.vault_path(), "");
        assert_eq!(p.title(), "");
        assert_eq!(p.extension(), "");
        assert!(p.note_is_in_root());
        assert!(p.is_root());
    }

    #[test]
    fn title_plus_extension_recovers_the_file_name() {
        for input in [
            "folder/note.md",
            "note.md",
            "a/b/c.tar.gz",
            "no extension",
            "folder/with.dots/name",
        ] {
            let p = FilePath::parse(input);
            let rebuilt = if p.extension().is_empty() {
                p.title().to_string()
            } else {
                format!("{}.{}", p.title(), p.extension())
            };
            assert_eq!(rebuilt, p.file_name_with_possible_extension());
        }
    }

    #[test]
    fn reparsing_the_extensionless_path_is_stable() {
        let original = FilePath::parse("Folder1/Sub Folder/Note 1.md");
        let reparsed = FilePath::parse(&original.vault_path_without_extension());
        assert_eq!(reparsed.title(), original.title());
        assert_eq!(reparsed.folder_path(), original.folder_path());
    }

    #[test]
    fn folder_path_is_lower_cased() {
        let f = FolderPath::parse("Folder1/SubFolder");
        assert_eq!(f.vault_path(), "folder1/subfolder");
        assert_eq!(f.title(), "subfolder");
    }

    #[test]
    fn folder_title_skips_trailing_slash() {
        let f = FolderPath::parse("folder1/folder2/");
        assert_eq!(f.title(), "folder2");
    }

    #[test]
    fn root_folder_forms() {
        assert!(FolderPath::parse("").is_root());
        assert!(FolderPath::parse("/").is_root());
        assert!(FolderPath::root().is_root());
        assert_eq!(FolderPath::parse("").title(), "");
    }

    #[test]
    fn parent_or_this_strips_one_segment() {
        let f = FolderPath::parse("a/b/c");
        assert_eq!(f.parent_or_this().vault_path(), "a/b");
        assert_eq!(f.parent_or_this().parent_or_this().vault_path(), "a");

        let top = FolderPath::parse("a");
        assert!(top.parent_or_this().is_root());

        let root = FolderPath::root();
        assert_eq!(root.parent_or_this(), root);
    }

    #[test]
    fn root_is_ancestor_of_everything() {
        let root = FolderPath::parse("");
        assert!(root.is_ancestor_of("any/path/note.md"));
        assert!(root.is_ancestor_of(""));
    }

    #[test]
    fn ancestor_test_is_case_insensitive_but_positional() {
        let f = FolderPath::parse("myFolder/");
        assert!(f.is_ancestor_of("MyFolder/sub/note.md"));
        // Prefix does not occur at the start of this path, so no match
        // even though the segment appears later.
        assert!(!f.is_ancestor_of("other folder/MyFolder/Folder1/note.md"));
    }

    #[test]
    fn ancestor_test_has_no_segment_boundary_guard() {
        let f = FolderPath::parse("myfolder");
        assert!(f.is_ancestor_of("myfolderx/note.md"));
    }
}
