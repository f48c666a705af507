use secrecy::SecretString;

#[derive(Default)]
pub(crate) struct BuilderState {
    pub(crate) api_key: Option<SecretString>,
    pub(crate) base_url: Option<String>,
    pub(crate) model: Option<String>,
    pub(crate) timeout_seconds: Option<u64>,
}
