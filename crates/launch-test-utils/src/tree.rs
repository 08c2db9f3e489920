//! Resource and configuration constructors for tests

use launch_model::{Configuration, ConfigurationId, Resource, ResourceId, ResourceKind};

/// A project root
pub fn project(id: &str) -> Resource {
    Resource::project(ResourceId::new(id).unwrap())
}

/// A folder inside `parent`
pub fn folder(parent: &Resource, id: &str) -> Resource {
    Resource::new(ResourceId::new(id).unwrap(), ResourceKind::Folder).with_parent(parent.clone())
}

/// A file inside `parent`
pub fn file(parent: &Resource, id: &str) -> Resource {
    Resource::new(ResourceId::new(id).unwrap(), ResourceKind::File).with_parent(parent.clone())
}

/// A file with no container at all
pub fn orphan(id: &str) -> Resource {
    Resource::new(ResourceId::new(id).unwrap(), ResourceKind::File)
}

/// A configuration named after its id
pub fn config(id: &str) -> Configuration {
    Configuration::new(ConfigurationId::new(id).unwrap(), id, "test")
}

/// `app` / `app/src` / `app/src/main.rs`
pub fn sample_tree() -> (Resource, Resource, Resource) {
    let app = project("app");
    let src = folder(&app, "app/src");
    let main = file(&src, "app/src/main.rs");
    (app, src, main)
}
