//! Selectable resources and their container tree
//!
//! A [`Resource`] owns a shared handle to its parent, so every resource
//! carries its full ancestry. Chains are built bottom-up from existing
//! parents, which keeps them acyclic.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Identity of a resource, typically its workspace-relative path
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(String);

impl ResourceId {
    /// Create an identifier, rejecting empty strings
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(Error::EmptyId { what: "resource" });
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The last `/`-separated segment, used as the default display name
    pub fn file_name(&self) -> &str {
        self.0
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or(&self.0)
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind of a resource in the container tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    File,
    Folder,
    Project,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::File => write!(f, "file"),
            ResourceKind::Folder => write!(f, "folder"),
            ResourceKind::Project => write!(f, "project"),
        }
    }
}

/// A context unit against which configurations are resolved.
///
/// Equality is identity: two resources are equal when their ids are.
#[derive(Debug, Clone)]
pub struct Resource {
    id: ResourceId,
    name: String,
    kind: ResourceKind,
    accessible: bool,
    parent: Option<Arc<Resource>>,
}

impl Resource {
    /// Create a root resource (no parent) named after the last id segment
    pub fn new(id: ResourceId, kind: ResourceKind) -> Self {
        let name = id.file_name().to_string();
        Self {
            id,
            name,
            kind,
            accessible: true,
            parent: None,
        }
    }

    /// Create a project root
    pub fn project(id: ResourceId) -> Self {
        Self::new(id, ResourceKind::Project)
    }

    /// Place this resource inside `parent`
    pub fn with_parent(mut self, parent: Resource) -> Self {
        self.parent = Some(Arc::new(parent));
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_accessible(mut self, accessible: bool) -> Self {
        self.accessible = accessible;
        self
    }

    pub fn id(&self) -> &ResourceId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Whether the resource currently exists and can be read
    pub fn is_accessible(&self) -> bool {
        self.accessible
    }

    /// The immediate container, if any
    pub fn parent(&self) -> Option<&Resource> {
        self.parent.as_deref()
    }

    /// Iterate from the immediate parent up to the root
    pub fn ancestors(&self) -> impl Iterator<Item = &Resource> {
        std::iter::successors(self.parent(), |r| r.parent())
    }

    /// The nearest enclosing project.
    ///
    /// A project is its own project container. Returns `None` when no
    /// project encloses this resource.
    pub fn project_container(&self) -> Option<&Resource> {
        if self.kind == ResourceKind::Project {
            return Some(self);
        }
        self.ancestors().find(|r| r.kind == ResourceKind::Project)
    }

    /// File extension of the display name, without the dot
    pub fn extension(&self) -> Option<&str> {
        match self.name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => Some(ext),
            _ => None,
        }
    }
}

impl PartialEq for Resource {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Resource {}

impl std::hash::Hash for Resource {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ResourceId {
        ResourceId::new(s).unwrap()
    }

    fn sample_tree() -> Resource {
        let project = Resource::project(id("app"));
        let src = Resource::new(id("app/src"), ResourceKind::Folder).with_parent(project);
        Resource::new(id("app/src/main.rs"), ResourceKind::File).with_parent(src)
    }

    #[test]
    fn empty_id_is_rejected() {
        assert!(matches!(
            ResourceId::new("  "),
            Err(Error::EmptyId { what: "resource" })
        ));
    }

    #[test]
    fn default_name_is_last_segment() {
        let file = sample_tree();
        assert_eq!(file.name(), "main.rs");
        assert_eq!(file.parent().unwrap().name(), "src");
    }

    #[test]
    fn project_container_walks_up_to_project() {
        let file = sample_tree();
        let project = file.project_container().unwrap();
        assert_eq!(project.id().as_str(), "app");
    }

    #[test]
    fn project_is_its_own_container() {
        let project = Resource::project(id("app"));
        assert_eq!(project.project_container(), Some(&project));
    }

    #[test]
    fn orphan_has_no_project_container() {
        let orphan = Resource::new(id("scratch.txt"), ResourceKind::File);
        assert!(orphan.project_container().is_none());
    }

    #[test]
    fn equality_is_identity() {
        let a = Resource::new(id("x"), ResourceKind::File).with_name("one");
        let b = Resource::new(id("x"), ResourceKind::Folder).with_name("two");
        assert_eq!(a, b);
    }

    #[test]
    fn extension_ignores_dotfiles() {
        let dotfile = Resource::new(id(".env"), ResourceKind::File);
        assert_eq!(dotfile.extension(), None);
        assert_eq!(sample_tree().extension(), Some("rs"));
    }

    #[test]
    fn ancestors_are_ordered_inner_to_outer() {
        let file = sample_tree();
        let names: Vec<_> = file.ancestors().map(|r| r.name().to_string()).collect();
        assert_eq!(names, vec!["src", "app"]);
    }
}
