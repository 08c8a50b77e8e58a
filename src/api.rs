use crate::generator::{self, Action, Generator};

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum FlaskitError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Generator(#[from] generator::GeneratorError),
}

/// Scaffolds the single-module MVP skeleton under `destination` and returns
/// the ordered action log.
///
/// # Errors
///
/// Returns a [`FlaskitError`] if:
///
/// - The destination path cannot be absolutized.
/// - A directory cannot be created or a file cannot be written.
pub fn generate_mvp(destination: &str) -> Result<Vec<Action>, FlaskitError> {
    let mut generator = Generator::new(destination)?;

    log::debug!("scaffolding mvp preset into: {}", generator.root().display());

    generator.generate_mvp()?;

    Ok(generator.into_actions())
}

/// Scaffolds the multi-blueprint SAAS skeleton under `destination` and
/// returns the ordered action log. `database` is the database-kind token the
/// caller selected; the generated tree does not branch on it.
///
/// # Errors
///
/// Returns a [`FlaskitError`] if:
///
/// - The destination path cannot be absolutized.
/// - A directory cannot be created or a file cannot be written.
pub fn generate_saas(destination: &str, database: &str) -> Result<Vec<Action>, FlaskitError> {
    let mut generator = Generator::new(destination)?;

    log::debug!(
        "scaffolding saas preset into: {}",
        generator.root().display()
    );

    generator.generate_saas(database)?;

    Ok(generator.into_actions())
}
