use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
pub(crate) struct SettingsFile {
    pub(crate) promotion: Option<PromotionSection>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub(crate) struct PromotionSection {
    pub(crate) level: Option<String>,
    pub(crate) strict: Option<bool>,
}
