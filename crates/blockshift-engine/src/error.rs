#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BlockError {
    #[error("Block kind \"{0}\" is not registered")]
    NotRegistered(String),
    #[error("Block kind \"{0}\" is already registered")]
    AlreadyRegistered(String),
    #[error("Invalid block kind name \"{0}\": expected a namespaced name like \"core/paragraph\"")]
    InvalidName(String),
    #[error("Conversion failed: {0}")]
    Conversion(String),
}
