use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MEMBERS_PATH: &str = "/ghost/#/members";

/// Characters a URI component leaves alone: `A-Z a-z 0-9 - _ . ! ~ * ' ( )`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Where generated links point
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LinkSettings {
    /// Members screen the redemption filter is applied to
    pub members_path: String,
    /// Public homepage offers are redeemed on
    pub site_url: String,
}

impl Default for LinkSettings {
    fn default() -> Self {
        Self {
            members_path: DEFAULT_MEMBERS_PATH.to_string(),
            site_url: "/".to_string(),
        }
    }
}

impl LinkSettings {
    pub fn redemption_filter_link(&self, offer_id: &str) -> String {
        let filter = format!("offer_redemptions:[{}]", offer_id);
        format!(
            "{}?filter={}",
            self.members_path,
            utf8_percent_encode(&filter, URI_COMPONENT)
        )
    }

    pub fn share_link(&self, code: &str) -> String {
        offer_share_link(&self.site_url, code)
    }
}

/// Members list filtered to those who redeemed the offer
pub fn redemption_filter_link(offer_id: &str) -> String {
    LinkSettings::default().redemption_filter_link(offer_id)
}

/// Public link that applies the offer code on the homepage
pub fn offer_share_link(site_url: &str, code: &str) -> String {
    if site_url.ends_with('/') {
        format!("{}{}", site_url, code)
    } else {
        format!("{}/{}", site_url, code)
    }
}
