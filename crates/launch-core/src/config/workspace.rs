//! Building a workspace from its manifest
//!
//! Resource declarations are turned into parent-linked [`Resource`] values,
//! configurations become catalog entries and shortcuts are registered in
//! declaration order.

use super::manifest::{ResourceDecl, WorkspaceManifest};
use super::{LAUNCH_DIR, MANIFEST_FILE};
use crate::catalog::{CatalogEntry, LaunchCatalog};
use crate::groups::LaunchGroupRegistry;
use crate::shortcuts::ActivityFilter;
use crate::{Error, Result};
use launch_model::{Configuration, ConfigurationId, Resource, ResourceId};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

/// A loaded workspace: its resource tree, catalog and launch groups
pub struct Workspace {
    root: PathBuf,
    /// Resources in declaration order
    resources: Vec<Resource>,
    index: HashMap<ResourceId, usize>,
    catalog: LaunchCatalog,
    groups: LaunchGroupRegistry,
}

impl Workspace {
    /// Load `.launch/workspace.toml` under `root`
    pub fn load(root: &Path) -> Result<Self> {
        let path = Self::manifest_path(root);
        if !path.is_file() {
            return Err(Error::ManifestNotFound { path });
        }
        tracing::debug!(?path, "Loading workspace manifest");
        let content = fs::read_to_string(&path)?;
        let manifest = WorkspaceManifest::parse(&content)?;
        Self::from_manifest(root.to_path_buf(), manifest)
    }

    pub fn manifest_path(root: &Path) -> PathBuf {
        root.join(LAUNCH_DIR).join(MANIFEST_FILE)
    }

    /// Validate a manifest and build the workspace from it
    pub fn from_manifest(root: PathBuf, manifest: WorkspaceManifest) -> Result<Self> {
        let resources = build_resources(&manifest.resources)?;
        let index: HashMap<ResourceId, usize> = resources
            .iter()
            .enumerate()
            .map(|(i, r)| (r.id().clone(), i))
            .collect();

        let lookup = |raw: &str| -> Result<ResourceId> {
            let id = ResourceId::new(raw)?;
            if index.contains_key(&id) {
                Ok(id)
            } else {
                Err(Error::UnknownResource { id: raw.to_string() })
            }
        };

        let mut catalog = LaunchCatalog::new()
            .with_visibility(ActivityFilter::with_disabled(manifest.activities.disabled.iter().cloned()));
        let mut configuration_ids = HashSet::new();
        for decl in &manifest.configurations {
            if !configuration_ids.insert(decl.id.clone()) {
                return Err(Error::DuplicateId {
                    what: "configuration",
                    id: decl.id.clone(),
                });
            }
            let configuration = Configuration::new(
                ConfigurationId::new(decl.id.clone())?,
                decl.name.clone(),
                decl.type_id.clone(),
            );
            let mut entry = CatalogEntry::new(configuration);
            for raw in &decl.resources {
                entry = entry.mapped_to(lookup(raw)?);
            }
            if let Some(raw) = &decl.stored_in {
                entry = entry.stored_in(lookup(raw)?);
            }
            catalog.add_entry(entry);
        }

        for shortcut in manifest.shortcuts {
            catalog.register_shortcut(shortcut);
        }

        let groups = if manifest.groups.is_empty() {
            LaunchGroupRegistry::with_builtins()
        } else {
            let mut registry = LaunchGroupRegistry::new();
            for group in manifest.groups {
                registry.register(group);
            }
            registry
        };

        tracing::debug!(
            resources = resources.len(),
            configurations = catalog.entries().len(),
            shortcuts = catalog.shortcuts().len(),
            groups = groups.len(),
            "Workspace built"
        );

        Ok(Self {
            root,
            resources,
            index,
            catalog,
            groups,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Look up a resource by id
    pub fn resource(&self, id: &str) -> Option<&Resource> {
        let id = ResourceId::new(id).ok()?;
        self.index.get(&id).map(|&i| &self.resources[i])
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn catalog(&self) -> &LaunchCatalog {
        &self.catalog
    }

    pub fn groups(&self) -> &LaunchGroupRegistry {
        &self.groups
    }
}

/// Build every declared resource with its parent chain attached
fn build_resources(decls: &[ResourceDecl]) -> Result<Vec<Resource>> {
    let mut by_id: HashMap<&str, &ResourceDecl> = HashMap::new();
    for decl in decls {
        if by_id.insert(decl.id.as_str(), decl).is_some() {
            return Err(Error::DuplicateId {
                what: "resource",
                id: decl.id.clone(),
            });
        }
    }

    let mut built: HashMap<String, Resource> = HashMap::new();
    let mut resources = Vec::with_capacity(decls.len());
    for decl in decls {
        let mut visiting = HashSet::new();
        resources.push(build_one(&decl.id, &by_id, &mut built, &mut visiting)?);
    }
    Ok(resources)
}

fn build_one<'a>(
    id: &'a str,
    by_id: &HashMap<&'a str, &'a ResourceDecl>,
    built: &mut HashMap<String, Resource>,
    visiting: &mut HashSet<&'a str>,
) -> Result<Resource> {
    if let Some(resource) = built.get(id) {
        return Ok(resource.clone());
    }
    let decl = by_id
        .get(id)
        .copied()
        .ok_or_else(|| Error::UnknownResource { id: id.to_string() })?;
    if !visiting.insert(decl.id.as_str()) {
        return Err(Error::ResourceCycle { id: id.to_string() });
    }

    let mut resource =
        Resource::new(ResourceId::new(decl.id.clone())?, decl.kind).with_accessible(decl.accessible);
    if let Some(name) = &decl.name {
        resource = resource.with_name(name.clone());
    }
    if let Some(parent_id) = &decl.parent {
        if parent_id == &decl.id {
            return Err(Error::ResourceCycle { id: id.to_string() });
        }
        let parent = build_one(parent_id.as_str(), by_id, built, visiting)?;
        resource = resource.with_parent(parent);
    }

    built.insert(decl.id.clone(), resource.clone());
    Ok(resource)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collaborators::{Catalog, GroupRegistry};
    use launch_model::ResourceKind;

    const MANIFEST: &str = r#"
[[resources]]
id = "app/src/main.rs"
kind = "file"
parent = "app/src"

[[resources]]
id = "app/src"
kind = "folder"
parent = "app"

[[resources]]
id = "app"
kind = "project"

[[configurations]]
id = "app-main"
name = "App Main"
type = "cargo"
resources = ["app/src/main.rs"]
"#;

    fn build(content: &str) -> Result<Workspace> {
        Workspace::from_manifest(PathBuf::from("/ws"), WorkspaceManifest::parse(content)?)
    }

    #[test]
    fn parents_may_be_declared_after_children() {
        let workspace = build(MANIFEST).unwrap();
        let main = workspace.resource("app/src/main.rs").unwrap();
        assert_eq!(main.parent().unwrap().id().as_str(), "app/src");
        assert_eq!(main.project_container().unwrap().kind(), ResourceKind::Project);
        assert_eq!(workspace.resources()[0].id(), main.id());
    }

    #[test]
    fn configurations_are_mapped_to_resources() {
        let workspace = build(MANIFEST).unwrap();
        let main = workspace.resource("app/src/main.rs").unwrap();
        let found = workspace.catalog().applicable_configurations(main).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "App Main");
    }

    #[test]
    fn builtin_groups_are_used_by_default() {
        let workspace = build(MANIFEST).unwrap();
        assert!(workspace.groups().canonical("debug").is_some());
    }

    #[test]
    fn unknown_parent_is_rejected() {
        let err = build(
            r#"
[[resources]]
id = "a"
kind = "file"
parent = "missing"
"#,
        )
        .err()
        .unwrap();
        assert!(matches!(err, Error::UnknownResource { id } if id == "missing"));
    }

    #[test]
    fn parent_cycles_are_rejected() {
        let err = build(
            r#"
[[resources]]
id = "a"
kind = "folder"
parent = "b"

[[resources]]
id = "b"
kind = "folder"
parent = "a"
"#,
        )
        .err()
        .unwrap();
        assert!(matches!(err, Error::ResourceCycle { .. }));
    }

    #[test]
    fn self_parent_is_rejected() {
        let err = build(
            r#"
[[resources]]
id = "a"
kind = "project"
parent = "a"
"#,
        )
        .err()
        .unwrap();
        assert!(matches!(err, Error::ResourceCycle { .. }));
    }

    #[test]
    fn configuration_with_unknown_resource_is_rejected() {
        let err = build(
            r#"
[[configurations]]
id = "c"
name = "C"
type = "cargo"
resources = ["ghost"]
"#,
        )
        .err()
        .unwrap();
        assert!(matches!(err, Error::UnknownResource { .. }));
    }

    #[test]
    fn duplicate_configuration_ids_are_rejected() {
        let err = build(
            r#"
[[configurations]]
id = "c"
name = "C"
type = "cargo"

[[configurations]]
id = "c"
name = "C again"
type = "cargo"
"#,
        )
        .err()
        .unwrap();
        assert!(matches!(err, Error::DuplicateId { what: "configuration", .. }));
    }

    #[test]
    fn load_reports_missing_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let err = Workspace::load(dir.path()).err().unwrap();
        assert!(matches!(err, Error::ManifestNotFound { .. }));
    }
}
