use serde::Deserialize;

/// Entry of the country catalog. The backend also returns an iso2 code,
/// which the form has no use for.
#[derive(Debug, Deserialize)]
pub struct CountryGet {
    pub name: String,
}

/// Body of a create/update reply, and of any error reply carrying a message.
#[derive(Debug, Default, Deserialize)]
pub struct SaveReply {
    pub message: Option<String>,
    pub error: Option<String>,
}
