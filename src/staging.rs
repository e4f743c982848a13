//! File Staging
//!
//! Image files picked for a new item, held until the item is saved.

/// Names longer than this are shortened for display
const DISPLAY_NAME_LIMIT: usize = 20;
/// Characters kept before the ellipsis
const DISPLAY_PREFIX_LEN: usize = 17;

/// A file that can be staged for upload
pub trait StagedFile {
    fn file_name(&self) -> String;
    fn mime_type(&self) -> String;

    fn is_image(&self) -> bool {
        self.mime_type().starts_with("image/")
    }
}

impl StagedFile for web_sys::File {
    fn file_name(&self) -> String {
        self.name()
    }

    fn mime_type(&self) -> String {
        self.type_()
    }
}

/// Short label for a staged file
pub fn display_name(name: &str) -> String {
    if name.chars().count() > DISPLAY_NAME_LIMIT {
        let prefix: String = name.chars().take(DISPLAY_PREFIX_LEN).collect();
        format!("{}...", prefix)
    } else {
        name.to_string()
    }
}

/// One row of the staged file list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedFileView {
    /// Position used by [`FileStaging::remove`]
    pub index: usize,
    pub label: String,
    pub full_name: String,
}

/// Ordered list of pending uploads
#[derive(Debug, Clone)]
pub struct FileStaging<F> {
    files: Vec<F>,
}

impl<F> Default for FileStaging<F> {
    fn default() -> Self {
        Self { files: Vec::new() }
    }
}

impl<F: StagedFile> FileStaging<F> {
    /// Append the image files from `incoming`, skipping anything else.
    /// Returns how many were accepted.
    pub fn stage(&mut self, incoming: impl IntoIterator<Item = F>) -> usize {
        let before = self.files.len();
        self.files.extend(incoming.into_iter().filter(|f| f.is_image()));
        self.files.len() - before
    }

    pub fn remove(&mut self, index: usize) -> Option<F> {
        (index < self.files.len()).then(|| self.files.remove(index))
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn files(&self) -> &[F] {
        &self.files
    }

    pub fn views(&self) -> Vec<StagedFileView> {
        self.files
            .iter()
            .enumerate()
            .map(|(index, file)| {
                let full_name = file.file_name();
                StagedFileView {
                    index,
                    label: display_name(&full_name),
                    full_name,
                }
            })
            .collect()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub(crate) struct FakeFile {
        pub name: String,
        pub mime: String,
    }

    impl FakeFile {
        pub(crate) fn image(name: &str) -> Self {
            Self {
                name: name.to_string(),
                mime: "image/jpeg".to_string(),
            }
        }

        pub(crate) fn other(name: &str, mime: &str) -> Self {
            Self {
                name: name.to_string(),
                mime: mime.to_string(),
            }
        }
    }

    impl StagedFile for FakeFile {
        fn file_name(&self) -> String {
            self.name.clone()
        }

        fn mime_type(&self) -> String {
            self.mime.clone()
        }
    }

    fn names(staging: &FileStaging<FakeFile>) -> Vec<String> {
        staging.files().iter().map(|f| f.name.clone()).collect()
    }

    #[test]
    fn test_non_images_are_skipped() {
        let mut staging = FileStaging::default();
        let accepted = staging.stage(vec![
            FakeFile::image("a.jpg"),
            FakeFile::other("notes.txt", "text/plain"),
            FakeFile::other("b.png", "image/png"),
            FakeFile::other("unknown", ""),
        ]);
        assert_eq!(accepted, 2);
        assert_eq!(names(&staging), vec!["a.jpg", "b.png"]);
    }

    #[test]
    fn test_selections_accumulate() {
        let mut staging = FileStaging::default();
        staging.stage(vec![FakeFile::image("a.jpg")]);
        staging.stage(vec![FakeFile::image("b.jpg"), FakeFile::image("c.jpg")]);
        assert_eq!(names(&staging), vec!["a.jpg", "b.jpg", "c.jpg"]);
    }

    #[test]
    fn test_remove_by_position() {
        let mut staging = FileStaging::default();
        staging.stage(vec![
            FakeFile::image("a.jpg"),
            FakeFile::image("b.jpg"),
            FakeFile::image("c.jpg"),
        ]);
        assert_eq!(staging.remove(1).map(|f| f.name), Some("b.jpg".to_string()));
        assert!(staging.remove(5).is_none());
        assert_eq!(names(&staging), vec!["a.jpg", "c.jpg"]);
        assert_eq!(staging.views()[1].index, 1);
    }

    #[test]
    fn test_display_name_truncation() {
        assert_eq!(display_name("short.jpg"), "short.jpg");
        assert_eq!(display_name("exactly_twenty_c.jpg"), "exactly_twenty_c.jpg");
        assert_eq!(display_name("a_rather_long_file_name.jpeg"), "a_rather_long_fil...");
        // multi-byte names are cut on character boundaries
        assert_eq!(display_name("相片相片相片相片相片相片相片相片相片相片相片.jpg"), "相片相片相片相片相片相片相片相片相...");
    }

    #[test]
    fn test_views_keep_full_name() {
        let mut staging = FileStaging::default();
        staging.stage(vec![FakeFile::image("holiday_photo_from_the_beach.jpg")]);
        let views = staging.views();
        assert_eq!(views[0].label, "holiday_photo_fro...");
        assert_eq!(views[0].full_name, "holiday_photo_from_the_beach.jpg");
    }
}
