use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Builds an Ansible role on disk for integration tests
pub struct RoleFixture {
    root: TempDir,
    role_dir: PathBuf,
}

impl RoleFixture {
    /// A role directory named `role_name` inside a fresh temp dir
    pub fn new(role_name: &str) -> Self {
        let root = TempDir::new().expect("create temp dir");
        let role_dir = root.path().join(role_name);
        fs::create_dir_all(&role_dir).expect("create role dir");
        Self { root, role_dir }
    }

    /// A role inside `<temp>/roles/<role_name>`, returning the collection root
    pub fn in_collection(collection: &TempDir, role_name: &str) -> PathBuf {
        let role_dir = collection.path().join("roles").join(role_name);
        fs::create_dir_all(&role_dir).expect("create role dir");
        role_dir
    }

    pub fn path(&self) -> &Path {
        &self.role_dir
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn with_defaults(self, yaml: &str) -> Self {
        write_file(&self.role_dir, "defaults/main.yml", yaml);
        self
    }

    pub fn with_vars(self, yaml: &str) -> Self {
        write_file(&self.role_dir, "vars/main.yml", yaml);
        self
    }

    pub fn with_spec(self, yaml: &str) -> Self {
        write_file(&self.role_dir, "meta/argument_specs.yml", yaml);
        self
    }

    pub fn with_readme(self, markdown: &str) -> Self {
        write_file(&self.role_dir, "README.md", markdown);
        self
    }

    pub fn spec_text(&self) -> String {
        read_file(&self.role_dir, "meta/argument_specs.yml")
    }

    pub fn readme_text(&self) -> String {
        read_file(&self.role_dir, "README.md")
    }

    pub fn spec_exists(&self) -> bool {
        self.role_dir.join("meta/argument_specs.yml").exists()
    }
}

pub fn write_file(role_dir: &Path, relative: &str, contents: &str) {
    let path = role_dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dir");
    }
    fs::write(&path, contents).expect("write fixture file");
}

pub fn read_file(role_dir: &Path, relative: &str) -> String {
    fs::read_to_string(role_dir.join(relative)).expect("read fixture file")
}

/// A README with both managed regions empty and text around them
pub const EMPTY_README: &str = "\
# Example role

Role Variables
--------------
<!--start argument_specs-->
<!--end argument_specs-->

Role Defaults
-------------
<!--start argument_defaults-->
<!--end argument_defaults-->

License
-------
MIT
";
