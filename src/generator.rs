use crate::{
    errors::{FileOperation, IoError},
    templates,
};
use miette::Diagnostic;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum GeneratorError {
    #[error("I/O error within generator domain")]
    #[diagnostic(code(flaskit::generator::io))]
    Io(#[from] IoError),
}

const FEATURES: [&str; 3] = ["Feature1", "Feature2", "Feature3"];

/// What a single scaffolding operation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    DirCreated,
    FileCreated,
    Skipped,
}

/// One entry of the action log: the operation outcome and the path it touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub kind: ActionKind,
    pub path: PathBuf,
}
impl Action {
    fn new(kind: ActionKind, path: &Path) -> Self {
        Self {
            kind,
            path: path.to_path_buf(),
        }
    }
}

/// Scaffolds one project tree under a fixed root and records every
/// directory and file operation, in the order attempted, for the caller to
/// report afterwards.
pub struct Generator {
    root: PathBuf,
    actions: Vec<Action>,
}

impl Generator {
    /// Binds a generator to `root`. The path is absolutized lexically once;
    /// the filesystem is not touched until a preset method runs.
    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self, GeneratorError> {
        let raw = root.as_ref();

        let root = std::path::absolute(raw)
            .map_err(|error| IoError::new(FileOperation::Resolve, raw.to_path_buf(), error))?;

        Ok(Self {
            root,
            actions: Vec::new(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn into_actions(self) -> Vec<Action> {
        self.actions
    }

    /// Creates each path that does not exist yet, parents included, logging
    /// `DirCreated`. A path that already exists is logged `Skipped`, whether
    /// it is a directory or not.
    fn ensure_directories(&mut self, paths: &[PathBuf]) -> Result<(), GeneratorError> {
        for path in paths {
            if path.exists() {
                self.actions.push(Action::new(ActionKind::Skipped, path));
                continue;
            }

            fs::create_dir_all(path)
                .map_err(|error| IoError::new(FileOperation::Mkdir, path.clone(), error))?;

            self.actions.push(Action::new(ActionKind::DirCreated, path));
        }

        Ok(())
    }

    /// Writes `contents` to `path` unless the path already exists, in which
    /// case the file is left untouched and the operation is logged `Skipped`.
    /// Missing parent directories are created without a log entry of their own.
    fn write_file(&mut self, path: PathBuf, contents: &str) -> Result<(), GeneratorError> {
        if path.exists() {
            self.actions.push(Action::new(ActionKind::Skipped, &path));
            return Ok(());
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|error| IoError::new(FileOperation::Mkdir, parent.to_path_buf(), error))?;
        }

        fs::write(&path, contents)
            .map_err(|error| IoError::new(FileOperation::Write, path.clone(), error))?;

        self.actions.push(Action::new(ActionKind::FileCreated, &path));

        Ok(())
    }

    // Name interpolated into generated HTML titles and headings.
    fn project_name(&self) -> String {
        self.root
            .file_name()
            .map(|os| os.to_string_lossy().to_string())
            .unwrap_or_else(|| self.root.display().to_string())
    }

    /// Scaffolds the single-module skeleton: a debug-mode entrypoint, one
    /// `app` package with views/auth/models/forms stubs, static asset
    /// directories, and a layout template carrying the project name.
    pub fn generate_mvp(&mut self) -> Result<(), GeneratorError> {
        let root = self.root.clone();
        let project = self.project_name();

        self.ensure_directories(&[
            root.clone(),
            root.join("app"),
            root.join("app/templates"),
            root.join("app/static/css"),
            root.join("app/static/js"),
            root.join("app/static/images"),
        ])?;

        self.write_file(root.join("main.py"), templates::MVP_MAIN)?;
        self.write_file(root.join("app/__init__.py"), templates::MVP_APP_INIT)?;
        self.write_file(root.join("app/views.py"), templates::MVP_VIEWS)?;
        self.write_file(root.join("app/auth.py"), templates::MVP_AUTH)?;
        self.write_file(root.join("app/models.py"), templates::MVP_MODELS)?;
        self.write_file(root.join("app/forms.py"), templates::MVP_FORMS)?;
        self.write_file(
            root.join("app/templates/layout.html"),
            &templates::mvp_layout(&project),
        )?;

        Ok(())
    }

    /// Scaffolds the multi-blueprint skeleton: application factory, config,
    /// dependency manifest, an auth blueprint, and routes/models/services
    /// stubs for each fixed feature.
    ///
    /// `database` is accepted as a token but the generated tree does not
    /// branch on it.
    pub fn generate_saas(&mut self, database: &str) -> Result<(), GeneratorError> {
        let root = self.root.clone();
        let project = self.project_name();

        log::debug!("database kind token: {}", database);

        self.ensure_directories(&[
            root.clone(),
            root.join("app"),
            root.join("app/auth"),
            root.join("app/Feature1"),
            root.join("app/Feature2"),
            root.join("app/Feature3"),
            root.join("app/templates"),
            root.join("app/static"),
            root.join("app/tests"),
        ])?;

        self.write_file(root.join("run.py"), templates::SAAS_RUN)?;
        self.write_file(root.join("config.py"), templates::SAAS_CONFIG)?;
        self.write_file(root.join("requirements.txt"), templates::SAAS_REQUIREMENTS)?;
        self.write_file(root.join("app/__init__.py"), templates::SAAS_APP_INIT)?;
        self.write_file(root.join("app/extensions.py"), templates::SAAS_EXTENSIONS)?;

        self.write_file(root.join("app/auth/routes.py"), templates::SAAS_AUTH_ROUTES)?;
        self.write_file(root.join("app/auth/models.py"), templates::SAAS_AUTH_MODELS)?;
        self.write_file(root.join("app/auth/forms.py"), templates::SAAS_AUTH_FORMS)?;

        for feature in FEATURES {
            let feature_dir = root.join("app").join(feature);

            self.write_file(
                feature_dir.join("routes.py"),
                &templates::feature_routes(feature),
            )?;
            self.write_file(
                feature_dir.join("models.py"),
                &templates::feature_models(feature),
            )?;
            self.write_file(
                feature_dir.join("services.py"),
                &templates::feature_services(feature),
            )?;
        }

        self.write_file(root.join("app/tests/test_app.py"), templates::SAAS_TEST)?;
        self.write_file(
            root.join("app/templates/base.html"),
            &templates::saas_base(&project),
        )?;

        Ok(())
    }
}
