//! The fixed catalog hierarchy.

use std::fmt;

/// Column holding a record's own key at every level.
pub const ID_COLUMN: &str = "Id";

/// Column holding the enclosing level's key at every level below `Study`.
pub const PARENT_COLUMN: &str = "ParentId";

/// One of the nested catalog tables, outermost first.
///
/// ```text
/// Study (Course) → Experiment (Lesson) → Specimen → Slide → Image
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Study,
    Experiment,
    Specimen,
    Slide,
    Image,
}

impl Level {
    pub const ALL: [Self; 5] = [
        Self::Study,
        Self::Experiment,
        Self::Specimen,
        Self::Slide,
        Self::Image,
    ];

    /// Catalog table backing this level.
    #[must_use]
    pub const fn table(self) -> &'static str {
        match self {
            Self::Study => "Course",
            Self::Experiment => "Lesson",
            Self::Specimen => "Specimen",
            Self::Slide => "Slide",
            Self::Image => "Image",
        }
    }

    /// Column a path segment is derived from. Slides contribute no segment.
    #[must_use]
    pub const fn display_column(self) -> Option<&'static str> {
        match self {
            Self::Study => Some("CourseName"),
            Self::Experiment => Some("LessonName"),
            Self::Specimen => Some("AccessionNumber"),
            Self::Slide => None,
            Self::Image => Some("CompressedFileLocation"),
        }
    }

    /// The level nested directly under this one.
    #[must_use]
    pub const fn child(self) -> Option<Self> {
        match self {
            Self::Study => Some(Self::Experiment),
            Self::Experiment => Some(Self::Specimen),
            Self::Specimen => Some(Self::Slide),
            Self::Slide => Some(Self::Image),
            Self::Image => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Study => "study",
            Self::Experiment => "experiment",
            Self::Specimen => "specimen",
            Self::Slide => "slide",
            Self::Image => "image",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
