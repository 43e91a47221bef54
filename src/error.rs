use thiserror::Error;

#[derive(Error, Debug)]
pub enum SedgeError {
    #[error("no content found for path: {path}")]
    MissingContent { path: String },

    #[error("multiple contents share the path: {path}")]
    DuplicatePath { path: String },

    #[error("no '{lang}' translation for content: {path}")]
    MissingTranslation { path: String, lang: String },

    #[error("blog content has no id: {path}")]
    MissingId { path: String },

    #[error("TOML parse error: {message}")]
    TomlParse { message: String },

    #[error("Directive parse error: {message}")]
    DirectiveParse { message: String },

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),
}

pub type Result<T> = std::result::Result<T, SedgeError>;
