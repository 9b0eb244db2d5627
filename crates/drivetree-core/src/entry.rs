//! Drive, directory and file entries.

use std::borrow::Cow;

use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};
use tracing::debug;

use crate::error::{Result, TreeError};
use crate::facet::{Children, Container, Named};

/// Which variant an [`Entry`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
pub enum EntryKind {
    Drive,
    Directory,
    File,
}

impl EntryKind {
    /// Check if entries of this kind hold children.
    pub fn is_container(self) -> bool {
        matches!(self, Self::Drive | Self::Directory)
    }

    /// Check if entries of this kind carry a renameable name.
    pub fn is_named(self) -> bool {
        matches!(self, Self::Directory | Self::File)
    }
}

/// A root-level container identified by a single letter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Drive {
    letter: char,
    #[serde(default)]
    children: Children,
}

impl Drive {
    /// Create an empty drive.
    pub fn new(letter: char) -> Self {
        Self {
            letter,
            children: Children::new(),
        }
    }

    /// Create a drive owning `children` in the given order.
    pub fn with_children(letter: char, children: impl IntoIterator<Item = Entry>) -> Self {
        Self {
            letter,
            children: children.into_iter().collect(),
        }
    }

    /// The drive letter.
    pub fn letter(&self) -> char {
        self.letter
    }
}

impl Container for Drive {
    fn children(&self) -> &Children {
        &self.children
    }

    fn children_mut(&mut self) -> &mut Children {
        &mut self.children
    }
}

/// A named container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Directory {
    name: CompactString,
    #[serde(default)]
    children: Children,
}

impl Directory {
    /// Create an empty directory.
    pub fn new(name: impl Into<CompactString>) -> Self {
        Self {
            name: name.into(),
            children: Children::new(),
        }
    }

    /// Create a directory owning `children` in the given order.
    pub fn with_children(
        name: impl Into<CompactString>,
        children: impl IntoIterator<Item = Entry>,
    ) -> Self {
        Self {
            name: name.into(),
            children: children.into_iter().collect(),
        }
    }
}

impl Named for Directory {
    fn name(&self) -> &str {
        &self.name
    }

    fn rename(&mut self, new_name: CompactString) {
        self.name = new_name;
    }
}

impl Container for Directory {
    fn children(&self) -> &Children {
        &self.children
    }

    fn children_mut(&mut self) -> &mut Children {
        &mut self.children
    }
}

/// A named leaf.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct File {
    name: CompactString,
}

impl File {
    /// Create a file.
    pub fn new(name: impl Into<CompactString>) -> Self {
        Self { name: name.into() }
    }
}

impl Named for File {
    fn name(&self) -> &str {
        &self.name
    }

    fn rename(&mut self, new_name: CompactString) {
        self.name = new_name;
    }
}

/// A node in the tree: exactly one of drive, directory or file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Entry {
    Drive(Drive),
    Directory(Directory),
    File(File),
}

impl Entry {
    /// Build a drive entry from its letter and children.
    pub fn drive(letter: char, children: impl IntoIterator<Item = Entry>) -> Self {
        Entry::Drive(Drive::with_children(letter, children))
    }

    /// Build a directory entry from its name and children.
    pub fn directory(
        name: impl Into<CompactString>,
        children: impl IntoIterator<Item = Entry>,
    ) -> Self {
        Entry::Directory(Directory::with_children(name, children))
    }

    /// Build a file entry.
    pub fn file(name: impl Into<CompactString>) -> Self {
        Entry::File(File::new(name))
    }

    /// The active variant.
    pub fn kind(&self) -> EntryKind {
        match self {
            Entry::Drive(_) => EntryKind::Drive,
            Entry::Directory(_) => EntryKind::Directory,
            Entry::File(_) => EntryKind::File,
        }
    }

    /// Check if this entry is a drive.
    pub fn is_drive(&self) -> bool {
        matches!(self, Entry::Drive(_))
    }

    /// Check if this entry is a directory.
    pub fn is_directory(&self) -> bool {
        matches!(self, Entry::Directory(_))
    }

    /// Check if this entry is a file.
    pub fn is_file(&self) -> bool {
        matches!(self, Entry::File(_))
    }

    pub fn as_drive(&self) -> Option<&Drive> {
        match self {
            Entry::Drive(drive) => Some(drive),
            _ => None,
        }
    }

    pub fn as_drive_mut(&mut self) -> Option<&mut Drive> {
        match self {
            Entry::Drive(drive) => Some(drive),
            _ => None,
        }
    }

    pub fn as_directory(&self) -> Option<&Directory> {
        match self {
            Entry::Directory(dir) => Some(dir),
            _ => None,
        }
    }

    pub fn as_directory_mut(&mut self) -> Option<&mut Directory> {
        match self {
            Entry::Directory(dir) => Some(dir),
            _ => None,
        }
    }

    pub fn as_file(&self) -> Option<&File> {
        match self {
            Entry::File(file) => Some(file),
            _ => None,
        }
    }

    pub fn as_file_mut(&mut self) -> Option<&mut File> {
        match self {
            Entry::File(file) => Some(file),
            _ => None,
        }
    }

    /// Display name. A drive reports its letter.
    pub fn name(&self) -> Cow<'_, str> {
        match self {
            Entry::Drive(drive) => Cow::Owned(drive.letter.to_string()),
            Entry::Directory(dir) => Cow::Borrowed(dir.name()),
            Entry::File(file) => Cow::Borrowed(file.name()),
        }
    }

    /// Narrow to the named facet, if this kind has one.
    pub fn as_named(&self) -> Option<&dyn Named> {
        match self {
            Entry::Drive(_) => None,
            Entry::Directory(dir) => Some(dir),
            Entry::File(file) => Some(file),
        }
    }

    pub fn as_named_mut(&mut self) -> Option<&mut dyn Named> {
        match self {
            Entry::Drive(_) => None,
            Entry::Directory(dir) => Some(dir),
            Entry::File(file) => Some(file),
        }
    }

    /// Narrow to the container facet, if this kind has one.
    pub fn as_container(&self) -> Option<&dyn Container> {
        match self {
            Entry::Drive(drive) => Some(drive),
            Entry::Directory(dir) => Some(dir),
            Entry::File(_) => None,
        }
    }

    pub fn as_container_mut(&mut self) -> Option<&mut dyn Container> {
        match self {
            Entry::Drive(drive) => Some(drive),
            Entry::Directory(dir) => Some(dir),
            Entry::File(_) => None,
        }
    }

    /// Container facet, or `NoChildren` for kinds without one.
    pub fn container(&self) -> Result<&dyn Container> {
        let kind = self.kind();
        self.as_container().ok_or(TreeError::NoChildren { kind })
    }

    pub fn container_mut(&mut self) -> Result<&mut dyn Container> {
        let kind = self.kind();
        self.as_container_mut()
            .ok_or(TreeError::NoChildren { kind })
    }

    /// Rename a directory or file in place.
    ///
    /// Drives fail with `CannotRename`. Children and paths are untouched.
    pub fn rename(&mut self, new_name: impl Into<CompactString>) -> Result<()> {
        let kind = self.kind();
        let named = self
            .as_named_mut()
            .ok_or(TreeError::CannotRename { kind })?;
        let new_name = new_name.into();
        debug!(from = named.name(), to = %new_name, "renamed entry");
        named.rename(new_name);
        Ok(())
    }

    /// Number of direct children.
    pub fn child_count(&self) -> Result<usize> {
        Ok(self.container()?.child_count())
    }

    /// Child at `index`.
    pub fn child_at(&self, index: usize) -> Result<&Entry> {
        self.container()?.child_at(index)
    }

    /// Child at `index`, borrowed for mutation.
    pub fn child_at_mut(&mut self, index: usize) -> Result<&mut Entry> {
        self.container_mut()?.child_at_mut(index)
    }

    /// Append `entry` as the last child.
    pub fn append(&mut self, entry: impl Into<Entry>) -> Result<()> {
        self.container_mut()?.append(entry.into());
        Ok(())
    }

    /// Insert `entry` at `index`, shifting later children right.
    pub fn insert_at(&mut self, index: usize, entry: impl Into<Entry>) -> Result<()> {
        self.container_mut()?.insert_at(index, entry.into())
    }

    /// Remove and return the child at `index`.
    ///
    /// Every path through this entry at or past `index` is invalid
    /// afterwards.
    pub fn remove_at(&mut self, index: usize) -> Result<Entry> {
        self.container_mut()?.remove_at(index)
    }
}

impl From<Drive> for Entry {
    fn from(drive: Drive) -> Self {
        Entry::Drive(drive)
    }
}

impl From<Directory> for Entry {
    fn from(dir: Directory) -> Self {
        Entry::Directory(dir)
    }
}

impl From<File> for Entry {
    fn from(file: File) -> Self {
        Entry::File(file)
    }
}
